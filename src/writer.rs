//! Writers for the project and member line formats.
//!
//! Names are emitted verbatim. A name holding a delimiter such as `">` or
//! `" name="` produces a line that reads back differently.

use tracing::debug;

use crate::error::Result;
use crate::format::{
    MEMBER_HEADER_END, MEMBER_HEADER_START, MEMBER_ROLE_END, MEMBER_ROLE_PROJECT_START,
    MEMBER_ROLE_START, MEMBER_TAIL, MEMBERS_HEADER, MEMBERS_TAIL, PROJECT_HEADER_END,
    PROJECT_HEADER_START, PROJECT_MEMBER_END, PROJECT_MEMBER_NAME_START, PROJECT_MEMBER_START,
    PROJECT_TAIL, PROJECTS_HEADER, PROJECTS_TAIL,
};
use crate::line::LineSink;
use crate::model::{Member, MemberRole, Project, ProjectMember};

pub fn project_header_line(project: &Project) -> String {
    format!("{PROJECT_HEADER_START}{}{PROJECT_HEADER_END}", project.name())
}

pub fn project_member_line(member: &ProjectMember) -> String {
    format!(
        "{PROJECT_MEMBER_START}{}{PROJECT_MEMBER_NAME_START}{}{PROJECT_MEMBER_END}",
        member.role(),
        member.name()
    )
}

pub fn member_header_line(member: &Member) -> String {
    format!("{MEMBER_HEADER_START}{}{MEMBER_HEADER_END}", member.name())
}

pub fn member_role_line(role: &MemberRole) -> String {
    format!(
        "{MEMBER_ROLE_START}{}{MEMBER_ROLE_PROJECT_START}{}{MEMBER_ROLE_END}",
        role.name(),
        role.project()
    )
}

/// Write projects in the same format `read_projects` accepts.
pub fn write_projects<K: LineSink + ?Sized>(projects: &[Project], sink: &mut K) -> Result<()> {
    sink.push_line(PROJECTS_HEADER)?;
    for project in projects {
        sink.push_line(&project_header_line(project))?;
        for member in project.members() {
            sink.push_line(&project_member_line(member))?;
        }
        sink.push_line(PROJECT_TAIL)?;
    }
    sink.push_line(PROJECTS_TAIL)?;

    debug!(projects = projects.len(), "wrote projects");
    Ok(())
}

/// Write members in the member report format.
pub fn write_members<K: LineSink + ?Sized>(members: &[Member], sink: &mut K) -> Result<()> {
    sink.push_line(MEMBERS_HEADER)?;
    for member in members {
        sink.push_line(&member_header_line(member))?;
        for role in member.roles() {
            sink.push_line(&member_role_line(role))?;
        }
        sink.push_line(MEMBER_TAIL)?;
    }
    sink.push_line(MEMBERS_TAIL)?;

    debug!(members = members.len(), "wrote members");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_empty_projects() {
        let mut out: Vec<String> = Vec::new();
        write_projects(&[], &mut out).unwrap();
        assert_eq!(out, vec!["<projects>", "</projects>"]);
    }

    #[test]
    fn test_write_single_project() {
        let projects = vec![Project::new("Alpha", vec![ProjectMember::new("Dev", "Alice")])];
        let mut out: Vec<String> = Vec::new();
        write_projects(&projects, &mut out).unwrap();
        assert_eq!(
            out,
            vec![
                "<projects>",
                "    <project name=\"Alpha\">",
                "        <member role=\"Dev\" name=\"Alice\"/>",
                "    </project>",
                "</projects>",
            ]
        );
    }

    #[test]
    fn test_write_empty_members() {
        let mut out: Vec<String> = Vec::new();
        write_members(&[], &mut out).unwrap();
        assert_eq!(out, vec!["<members>", "</members>"]);
    }

    #[test]
    fn test_write_members() {
        let members = vec![
            Member::new(
                "Bob",
                vec![MemberRole::new("QA", "Zeta"), MemberRole::new("Lead", "Alpha")],
            ),
            Member::new("Carol", vec![]),
        ];
        let mut out: Vec<String> = Vec::new();
        write_members(&members, &mut out).unwrap();
        assert_eq!(
            out,
            vec![
                "<members>",
                "    <member name=\"Bob\"/>",
                "        <role name=\"QA\" project=\"Zeta\"/>",
                "        <role name=\"Lead\" project=\"Alpha\"/>",
                "    </member>",
                "    <member name=\"Carol\"/>",
                "    </member>",
                "</members>",
            ]
        );
    }

    #[test]
    fn test_delimiters_are_not_escaped() {
        let line = project_member_line(&ProjectMember::new("a\" name=\"b", "c"));
        assert_eq!(line, "        <member role=\"a\" name=\"b\" name=\"c\"/>");
    }
}
