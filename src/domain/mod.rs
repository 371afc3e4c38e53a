mod data_stores;
mod display;
mod error;
mod member_role;
mod membership;
mod membership_id;
mod profile;
mod project;
mod project_id;
mod user_id;
mod view_state;

pub use data_stores::*;
pub use display::*;
pub use error::*;
pub use member_role::*;
pub use membership::*;
pub use membership_id::*;
pub use profile::*;
pub use project::*;
pub use project_id::*;
pub use user_id::*;
pub use view_state::*;
