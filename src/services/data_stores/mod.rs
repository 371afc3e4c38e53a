mod hashmap_membership_store;
mod postgres_membership_store;

pub use hashmap_membership_store::*;
pub use postgres_membership_store::*;
