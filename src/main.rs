use std::sync::Arc;

use site_dashboard::{
    app_state::AppState,
    get_postgres_pool,
    services::data_stores::PostgresMembershipStore,
    utils::{
        constants::{prod, DATABASE_URL, QUERY_TIMEOUT},
        tracing::init_tracing,
    },
    Application,
};
use tokio::sync::RwLock;

#[tokio::main]
async fn main() {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    let pg_pool = get_postgres_pool(&DATABASE_URL)
        .await
        .expect("Failed to create Postgres connection pool!");
    sqlx::migrate!()
        .run(&pg_pool)
        .await
        .expect("Failed to run migrations");
    let membership_store =
        Arc::new(RwLock::new(PostgresMembershipStore::new(pg_pool)));

    let app_state = AppState::new(membership_store, *QUERY_TIMEOUT);

    let app = Application::build(app_state, prod::APP_ADDRESS)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
