//! Regroup project-centric rosters by member.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::model::{Member, MemberRole, Project};

/// Turn projects into members, one per distinct member name.
///
/// Members come out sorted by name in byte order. Each member's roles are in
/// the order they were met: projects in input order, then members within a
/// project in input order. A member listed twice in one project gets two
/// roles.
///
/// ```
/// use member_pivot::{Project, ProjectMember, pivot};
///
/// let projects = vec![
///     Project::new("Beta", vec![ProjectMember::new("QA", "Bob")]),
///     Project::new("Alpha", vec![ProjectMember::new("Dev", "Alice"), ProjectMember::new("Lead", "Bob")]),
/// ];
/// let members = pivot(&projects);
/// assert_eq!(members[0].name(), "Alice");
/// assert_eq!(members[1].roles()[0].project(), "Beta");
/// assert_eq!(members[1].roles()[1].project(), "Alpha");
/// ```
pub fn pivot(projects: &[Project]) -> Vec<Member> {
    let mut buckets: BTreeMap<&str, Vec<MemberRole>> = BTreeMap::new();
    for project in projects {
        for member in project.members() {
            buckets
                .entry(member.name())
                .or_default()
                .push(MemberRole::new(member.role(), project.name()));
        }
    }

    let members: Vec<Member> = buckets
        .into_iter()
        .map(|(name, roles)| Member::new(name, roles))
        .collect();
    debug!(projects = projects.len(), members = members.len(), "pivoted");
    members
}

/// Distinct member names across all projects, sorted in byte order.
pub fn distinct_member_names(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.members())
        .map(|m| m.name())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
