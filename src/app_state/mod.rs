use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::MembershipStore;

pub type MembershipStoreType = Arc<RwLock<dyn MembershipStore + Send + Sync>>;

#[derive(Clone)]
pub struct AppState {
    pub membership_store: MembershipStoreType,
    pub query_timeout: Duration,
}

impl AppState {
    pub fn new(
        membership_store: MembershipStoreType,
        query_timeout: Duration,
    ) -> Self {
        Self {
            membership_store,
            query_timeout,
        }
    }
}
