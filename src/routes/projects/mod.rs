mod add_member;
mod get_project_list;
mod get_team;
mod remove_member;
mod update_member;

pub use add_member::*;
pub use get_project_list::*;
pub use get_team::*;
pub use remove_member::*;
pub use update_member::*;
