use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;
use std::time::Duration;

lazy_static! {
    pub static ref DATABASE_URL: Secret<String> = get_db_url();
    pub static ref QUERY_TIMEOUT: Duration = set_query_timeout();
}

fn load_env() {
    dotenv().ok();
}

fn get_db_url() -> Secret<String> {
    load_env();
    let db_url = std_env::var(env::DATABASE_URL_ENV_VAR)
        .expect("DATABASE_URL must be set.");
    if db_url.is_empty() {
        panic!("DATABASE_URL must not be empty.");
    }
    Secret::new(db_url)
}

fn set_query_timeout() -> Duration {
    load_env();
    std_env::var(env::QUERY_TIMEOUT_MS_ENV_VAR)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|millis| *millis > 0)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_QUERY_TIMEOUT)
}

pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const QUERY_TIMEOUT_MS_ENV_VAR: &str = "QUERY_TIMEOUT_MS";
}

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

pub mod display {
    pub const UNKNOWN_USER: &str = "Unknown User";
    pub const UNKNOWN_PROJECT: &str = "Unknown Project";
    pub const UNKNOWN_STATUS: &str = "Unknown";
    pub const DEFAULT_ROLE: &str = "Team Member";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    use std::time::Duration;

    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const QUERY_TIMEOUT: Duration = Duration::from_millis(200);
}
