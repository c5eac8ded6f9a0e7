//! # member-pivot
//!
//! Reads a line-exact, XML-looking roster of projects and their members,
//! and regroups it by member.
//!
//! ## Overview
//!
//! Three independent steps, usually run in this order:
//! - **Read**: [`read_projects`] pulls lines from a [`LineSource`] and builds
//!   [`Project`]s, failing on the first malformed line
//! - **Pivot**: [`pivot`] turns projects into [`Member`]s sorted by name, each
//!   with every (role, project) it holds
//! - **Write**: [`write_projects`] and [`write_members`] push lines into a
//!   [`LineSink`]
//!
//! [`convert`] and [`convert_text`] run all three for the common cases.
//!
//! ## Example
//!
//! ```
//! use member_pivot::{from_lines, pivot, read_projects, write_members};
//!
//! let input = [
//!     "<projects>",
//!     "    <project name=\"Alpha\">",
//!     "        <member role=\"Dev\" name=\"Alice\"/>",
//!     "    </project>",
//!     "</projects>",
//! ];
//! let projects = read_projects(&mut from_lines(input)).unwrap();
//! let members = pivot(&projects);
//!
//! let mut out: Vec<String> = Vec::new();
//! write_members(&members, &mut out).unwrap();
//! assert_eq!(out[1], "    <member name=\"Alice\"/>");
//! assert_eq!(out[2], "        <role name=\"Dev\" project=\"Alpha\"/>");
//! ```

pub mod convert;
pub mod error;
pub mod format;
pub mod line;
pub mod model;
pub mod pivot;
pub mod reader;
pub mod writer;

pub use convert::{Output, Summary, convert, convert_text};
pub use error::{Error, FormatError, InvalidArgument, Result};
pub use line::{FnSource, IterSource, LineSink, LineSource, ReadLines, WriteLines, from_fn, from_lines};
pub use model::{Member, MemberRole, Project, ProjectMember};
pub use pivot::{distinct_member_names, pivot};
pub use reader::{parse_member_line, parse_project_header, read_projects};
pub use writer::{
    member_header_line, member_role_line, project_header_line, project_member_line, write_members,
    write_projects,
};
