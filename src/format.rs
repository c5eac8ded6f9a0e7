//! Literal tokens of the roster line format.
//!
//! Project grammar (input, and output of `write_projects`):
//! ```text
//! <projects>
//!     <project name="PNAME">
//!         <member role="RNAME" name="MNAME"/>
//!     </project>
//! </projects>
//! ```
//!
//! Member grammar (output of `write_members`):
//! ```text
//! <members>
//!     <member name="MNAME"/>
//!         <role name="RNAME" project="PNAME"/>
//!     </member>
//! </members>
//! ```
//!
//! Every token is compared byte-for-byte. Nothing is escaped, so a name
//! containing a delimiter writes a line that will not read back the same.

pub const PROJECTS_HEADER: &str = "<projects>";
pub const PROJECTS_TAIL: &str = "</projects>";

pub const PROJECT_HEADER_START: &str = "    <project name=\"";
pub const PROJECT_HEADER_END: &str = "\">";
pub const PROJECT_HEADER_MIN_LEN: usize = PROJECT_HEADER_START.len() + PROJECT_HEADER_END.len();
pub const PROJECT_TAIL: &str = "    </project>";

pub const PROJECT_MEMBER_START: &str = "        <member role=\"";
pub const PROJECT_MEMBER_NAME_START: &str = "\" name=\"";
pub const PROJECT_MEMBER_END: &str = "\"/>";
pub const PROJECT_MEMBER_MIN_LEN: usize =
    PROJECT_MEMBER_START.len() + PROJECT_MEMBER_NAME_START.len() + PROJECT_MEMBER_END.len();

pub const MEMBERS_HEADER: &str = "<members>";
pub const MEMBERS_TAIL: &str = "</members>";

pub const MEMBER_HEADER_START: &str = "    <member name=\"";
pub const MEMBER_HEADER_END: &str = "\"/>";
pub const MEMBER_TAIL: &str = "    </member>";

pub const MEMBER_ROLE_START: &str = "        <role name=\"";
pub const MEMBER_ROLE_PROJECT_START: &str = "\" project=\"";
pub const MEMBER_ROLE_END: &str = "\"/>";
