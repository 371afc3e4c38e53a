pub mod members;
pub mod projects;
