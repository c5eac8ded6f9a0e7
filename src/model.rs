//! Roster value types.
//!
//! `Project`/`ProjectMember` come out of the reader; `Member`/`MemberRole`
//! come out of the pivot. All four are immutable once built: fields are
//! private and only exposed through accessors.

use crate::error::InvalidArgument;

/// One membership fact scoped to a project: `name` holds `role` in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProjectMember {
    role: String,
    name: String,
}

impl ProjectMember {
    pub fn new(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            name: name.into(),
        }
    }

    /// Build from possibly absent fields; an absent field becomes `""`.
    pub fn from_optional(role: Option<String>, name: Option<String>) -> Self {
        Self::new(role.unwrap_or_default(), name.unwrap_or_default())
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A named project and its members in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Project {
    name: String,
    members: Vec<ProjectMember>,
}

impl Project {
    pub fn new(name: impl Into<String>, members: Vec<ProjectMember>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// Build from possibly absent parts.
    ///
    /// An absent name becomes `""` and an absent list becomes empty, but a
    /// list holding an absent entry is rejected.
    pub fn try_from_entries(
        name: Option<String>,
        members: Option<Vec<Option<ProjectMember>>>,
    ) -> Result<Self, InvalidArgument> {
        let members = collect_entries(
            members,
            InvalidArgument::new("members", "member list must contain only present values"),
        )?;
        Ok(Self::new(name.unwrap_or_default(), members))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[ProjectMember] {
        &self.members
    }
}

/// One membership fact scoped to a member: the role `name` held in `project`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MemberRole {
    name: String,
    project: String,
}

impl MemberRole {
    pub fn new(name: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project: project.into(),
        }
    }

    /// Build from possibly absent fields; an absent field becomes `""`.
    pub fn from_optional(name: Option<String>, project: Option<String>) -> Self {
        Self::new(name.unwrap_or_default(), project.unwrap_or_default())
    }

    /// Role name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the project the role is held in.
    pub fn project(&self) -> &str {
        &self.project
    }
}

/// A member and every role it holds across all projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Member {
    name: String,
    roles: Vec<MemberRole>,
}

impl Member {
    pub fn new(name: impl Into<String>, roles: Vec<MemberRole>) -> Self {
        Self {
            name: name.into(),
            roles,
        }
    }

    /// Build from possibly absent parts, with the same rules as
    /// [`Project::try_from_entries`].
    pub fn try_from_entries(
        name: Option<String>,
        roles: Option<Vec<Option<MemberRole>>>,
    ) -> Result<Self, InvalidArgument> {
        let roles = collect_entries(
            roles,
            InvalidArgument::new("roles", "role list must contain only present values"),
        )?;
        Ok(Self::new(name.unwrap_or_default(), roles))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roles(&self) -> &[MemberRole] {
        &self.roles
    }
}

fn collect_entries<T>(
    entries: Option<Vec<Option<T>>>,
    err: InvalidArgument,
) -> Result<Vec<T>, InvalidArgument> {
    match entries {
        None => Ok(Vec::new()),
        Some(entries) => entries.into_iter().collect::<Option<Vec<T>>>().ok_or(err),
    }
}
