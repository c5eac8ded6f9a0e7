//! Read, optionally pivot, and write in one call.
//!
//! `read_projects`, `pivot`, and the writers stay independently callable;
//! this module only strings them together for callers that want one of the
//! standard outputs.

use std::fmt;

use clap::ValueEnum;
use tracing::info;

use crate::error::Result;
use crate::line::{LineSink, LineSource, from_lines};
use crate::pivot::{distinct_member_names, pivot};
use crate::reader::read_projects;
use crate::writer::{write_members, write_projects};

/// Which document to emit after reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Output {
    /// Re-emit the projects as read.
    Projects,
    /// Pivot and emit the member report.
    #[default]
    Members,
    /// Validate only, emit nothing.
    None,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Output::Projects => "projects",
            Output::Members => "members",
            Output::None => "none",
        };
        f.write_str(name)
    }
}

/// Counts gathered during a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Projects read.
    pub projects: usize,
    /// Member lines read, across all projects.
    pub project_members: usize,
    /// Distinct member names.
    pub members: usize,
    /// Lines emitted.
    pub lines_out: usize,
}

/// Counts lines on their way to the wrapped sink.
struct Counting<'a, K: ?Sized> {
    sink: &'a mut K,
    lines: usize,
}

impl<K: LineSink + ?Sized> LineSink for Counting<'_, K> {
    fn push_line(&mut self, line: &str) -> std::io::Result<()> {
        self.lines += 1;
        self.sink.push_line(line)
    }
}

/// Read projects from `source` and write the selected `output` to `sink`.
pub fn convert<S, K>(source: &mut S, sink: &mut K, output: Output) -> Result<Summary>
where
    S: LineSource + ?Sized,
    K: LineSink + ?Sized,
{
    let projects = read_projects(source)?;
    let mut summary = Summary {
        projects: projects.len(),
        project_members: projects.iter().map(|p| p.members().len()).sum(),
        ..Summary::default()
    };

    let mut counting = Counting { sink, lines: 0 };
    match output {
        Output::Projects => {
            summary.members = distinct_member_names(&projects).len();
            write_projects(&projects, &mut counting)?;
        }
        Output::Members => {
            let members = pivot(&projects);
            summary.members = members.len();
            write_members(&members, &mut counting)?;
        }
        Output::None => {
            summary.members = distinct_member_names(&projects).len();
        }
    }
    summary.lines_out = counting.lines;

    info!(
        %output,
        projects = summary.projects,
        members = summary.members,
        lines_out = summary.lines_out,
        "converted"
    );
    Ok(summary)
}

/// Convert a whole in-memory document.
///
/// Every emitted line, including the last, ends with `\n`.
pub fn convert_text(input: &str, output: Output) -> Result<(String, Summary)> {
    let mut lines: Vec<String> = Vec::new();
    let summary = convert(&mut from_lines(input.lines()), &mut lines, output)?;

    let mut text = String::new();
    for line in &lines {
        text.push_str(line);
        text.push('\n');
    }
    Ok((text, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, FormatError};
    use std::fs;
    use std::path::Path;

    const ALPHA: &str = "<projects>
    <project name=\"Alpha\">
        <member role=\"Dev\" name=\"Alice\"/>
    </project>
</projects>
";

    #[test]
    fn test_convert_projects_round_trip() {
        let (text, summary) = convert_text(ALPHA, Output::Projects).unwrap();
        assert_eq!(text, ALPHA);
        assert_eq!(
            summary,
            Summary {
                projects: 1,
                project_members: 1,
                members: 1,
                lines_out: 5,
            }
        );
    }

    #[test]
    fn test_convert_members() {
        let (text, summary) = convert_text(ALPHA, Output::Members).unwrap();
        assert_eq!(
            text,
            "<members>
    <member name=\"Alice\"/>
        <role name=\"Dev\" project=\"Alpha\"/>
    </member>
</members>
"
        );
        assert_eq!(summary.members, 1);
        assert_eq!(summary.lines_out, 5);
    }

    #[test]
    fn test_convert_none_validates_only() {
        let (text, summary) = convert_text(ALPHA, Output::None).unwrap();
        assert!(text.is_empty());
        assert_eq!(summary.projects, 1);
        assert_eq!(summary.lines_out, 0);
    }

    #[test]
    fn test_convert_crlf_input() {
        let input = ALPHA.replace('\n', "\r\n");
        let (text, _) = convert_text(&input, Output::Projects).unwrap();
        assert_eq!(text, ALPHA);
    }

    #[test]
    fn test_convert_error_writes_nothing() {
        let mut sink: Vec<String> = Vec::new();
        let err = convert(&mut from_lines(["<projects>"]), &mut sink, Output::Projects).unwrap_err();
        assert!(matches!(err, Error::Format(FormatError::UnexpectedEnd { .. })));
        assert!(sink.is_empty());
    }

    fn read_fixture(name: &str) -> String {
        let fixture_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("specs");
        fs::read_to_string(fixture_dir.join(name)).unwrap()
    }

    /// Assert a fixture converts to both expected outputs.
    fn assert_fixture(stem: &str) {
        let input = read_fixture(&format!("{stem}.in"));
        for (output, ext) in [(Output::Projects, "projects"), (Output::Members, "members")] {
            let expected = read_fixture(&format!("{stem}.{ext}.out"));
            let (actual, _) = convert_text(&input, output).unwrap();
            assert_eq!(actual, expected, "{ext} output differs for {stem}");
        }
    }

    fn fixture_error(stem: &str) -> FormatError {
        let input = read_fixture(&format!("{stem}.in"));
        match convert_text(&input, Output::None) {
            Err(Error::Format(e)) => e,
            other => panic!("Expected FormatError for {stem}, got {other:?}"),
        }
    }

    macro_rules! fixture_test {
        ($name:ident, $stem:expr) => {
            #[test]
            fn $name() {
                assert_fixture($stem);
            }
        };
    }

    fixture_test!(fixture_empty, "empty");
    fixture_test!(fixture_single, "single");
    fixture_test!(fixture_multi, "multi");
    fixture_test!(fixture_odd_names, "odd-names");

    #[test]
    fn test_fixture_bad_header() {
        assert!(matches!(
            fixture_error("bad-header"),
            FormatError::MissingHeader { line: 1, .. }
        ));
    }

    #[test]
    fn test_fixture_truncated() {
        assert!(matches!(
            fixture_error("truncated"),
            FormatError::UnexpectedEnd { line: 1, .. }
        ));
    }

    #[test]
    fn test_fixture_bad_member() {
        assert!(matches!(
            fixture_error("bad-member"),
            FormatError::MemberLine { line: 3, .. }
        ));
    }

    #[test]
    fn test_multi_summary() {
        let (_, summary) = convert_text(&read_fixture("multi.in"), Output::None).unwrap();
        assert_eq!(summary.projects, 3);
        assert_eq!(summary.project_members, 6);
        assert_eq!(summary.members, 3);
    }

    #[test]
    fn test_output_display() {
        assert_eq!(Output::Projects.to_string(), "projects");
        assert_eq!(Output::Members.to_string(), "members");
        assert_eq!(Output::None.to_string(), "none");
        assert_eq!(Output::default(), Output::Members);
    }
}
