mod get_member_projects;

pub use get_member_projects::*;
