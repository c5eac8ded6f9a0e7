//! Reader for the project line format.
//!
//! The grammar is fixed and exactly two levels deep:
//!
//! - `<projects>` opens the document and `</projects>` closes it
//! - each project is a `    <project name="...">` header followed by member
//!   lines and a `    </project>` tail
//! - each member line is `        <member role="..." name="..."/>`
//!
//! Reading is fail-fast: the first line that does not fit stops the read and
//! nothing parsed so far is returned. Exactly one line is pulled from the
//! source per step, so a source is never read past `</projects>`.

use tracing::{debug, trace};

use crate::error::{FormatError, Result};
use crate::format::{
    PROJECT_HEADER_END, PROJECT_HEADER_MIN_LEN, PROJECT_HEADER_START, PROJECT_MEMBER_END,
    PROJECT_MEMBER_MIN_LEN, PROJECT_MEMBER_NAME_START, PROJECT_MEMBER_START, PROJECT_TAIL,
    PROJECTS_HEADER, PROJECTS_TAIL,
};
use crate::line::LineSource;
use crate::model::{Project, ProjectMember};

/// Wraps a source and counts lines for error reporting.
struct Cursor<'a, S: ?Sized> {
    source: &'a mut S,
    line: usize,
}

impl<S: LineSource + ?Sized> Cursor<'_, S> {
    /// Pull the next line, treating end of stream as a format error.
    fn expect_line(&mut self, expected: &'static str) -> Result<String> {
        match self.source.next_line()? {
            Some(line) => {
                self.line += 1;
                Ok(line)
            }
            None => Err(FormatError::UnexpectedEnd {
                line: self.line,
                expected,
            }
            .into()),
        }
    }
}

/// Read a complete project document from `source`.
///
/// Returns projects in the order they appear, each with its members in the
/// order they appear.
pub fn read_projects<S: LineSource + ?Sized>(source: &mut S) -> Result<Vec<Project>> {
    let mut cursor = Cursor { source, line: 0 };

    let header = cursor.expect_line("`<projects>`")?;
    if header != PROJECTS_HEADER {
        return Err(FormatError::MissingHeader {
            line: cursor.line,
            found: header,
        }
        .into());
    }

    let mut projects = Vec::new();
    loop {
        let line = cursor.expect_line("a project header or `</projects>`")?;
        if line == PROJECTS_TAIL {
            break;
        }

        let name = parse_project_header(&line)
            .ok_or_else(|| FormatError::ProjectHeader {
                line: cursor.line,
                found: line.clone(),
            })?
            .to_string();

        let mut members = Vec::new();
        loop {
            let line = cursor.expect_line("a member line or `    </project>`")?;
            if line == PROJECT_TAIL {
                break;
            }

            let member = parse_member_line(&line).ok_or_else(|| FormatError::MemberLine {
                line: cursor.line,
                found: line.clone(),
            })?;
            trace!(line = cursor.line, role = member.role(), name = member.name(), "member");
            members.push(member);
        }

        debug!(project = %name, members = members.len(), "read project");
        projects.push(Project::new(name, members));
    }

    debug!(projects = projects.len(), lines = cursor.line, "read projects");
    Ok(projects)
}

/// Extract the project name from a `    <project name="...">` line.
///
/// The name is everything between the fixed prefix and suffix, even if it
/// contains `">` itself.
pub fn parse_project_header(line: &str) -> Option<&str> {
    if line.len() < PROJECT_HEADER_MIN_LEN {
        return None;
    }
    line.strip_prefix(PROJECT_HEADER_START)?
        .strip_suffix(PROJECT_HEADER_END)
}

/// Split a `        <member role="..." name="..."/>` line into its fields.
///
/// The role ends at the first `" name="` after the prefix; the name is
/// whatever lies between that and the closing `"/>`. A role containing
/// `" name="` therefore splits early, and the remainder lands in the name.
pub fn parse_member_line(line: &str) -> Option<ProjectMember> {
    if line.len() < PROJECT_MEMBER_MIN_LEN {
        return None;
    }
    let body = line
        .strip_prefix(PROJECT_MEMBER_START)?
        .strip_suffix(PROJECT_MEMBER_END)?;

    // The mid-token may not share a quote with the prefix or the suffix.
    let rest = &line[PROJECT_MEMBER_START.len()..];
    let mid = rest.find(PROJECT_MEMBER_NAME_START)?;
    let name_start = mid + PROJECT_MEMBER_NAME_START.len();
    if name_start > body.len() {
        return None;
    }

    Some(ProjectMember::new(&body[..mid], &body[name_start..]))
}
