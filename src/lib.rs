use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    serve::Serve,
    Json, Router,
};

use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::error::Error;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Level;

use domain::{DashboardAPIError, QueryFailure};
pub mod routes;
use crate::utils::tracing::*;
use routes::{
    members::get_member_projects,
    projects::{
        add_member, get_project_list, get_project_team, remove_member,
        update_member,
    },
};
pub mod app_state;
pub mod domain;
pub mod services;
use app_state::AppState;
pub mod utils;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for DashboardAPIError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            DashboardAPIError::IDNotFoundError(id) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::NOT_FOUND, format!("{id}"))
            }
            DashboardAPIError::IDExistsError(id) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::CONFLICT, format!("{id}"))
            }
            DashboardAPIError::AlreadyMemberError(_) => {
                log_error_chain(&self, Level::DEBUG);
                (
                    StatusCode::CONFLICT,
                    "User is already a member of this project".to_string(),
                )
            }
            DashboardAPIError::QueryFailure(QueryFailure::TimedOut(_)) => {
                log_error_chain(&self, Level::ERROR);
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "Backend query timed out".to_string(),
                )
            }
            DashboardAPIError::QueryFailure(QueryFailure::Backend(_)) => {
                log_error_chain(&self, Level::ERROR);
                (StatusCode::BAD_GATEWAY, "Backend query failed".to_string())
            }
            DashboardAPIError::UnexpectedError(_) => {
                log_error_chain(&self, Level::ERROR);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected error".to_string(),
                )
            }
            DashboardAPIError::ValidationError(message) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::BAD_REQUEST, format!("{message}"))
            }
        };
        let body = Json(ErrorResponse {
            error: error_message,
        });
        (status, body).into_response()
    }
}

pub struct Application {
    server: Serve<Router, Router>,
    pub address: String,
}

impl Application {
    pub async fn build(
        app_state: AppState,
        address: &str,
    ) -> Result<Self, Box<dyn Error>> {
        let allowed_origins = [
            "http://localhost:3000".parse()?,
            "http://127.0.0.1:3000".parse()?,
        ];

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_origin(allowed_origins);

        let router = Router::new()
            .route("/projects/list", get(get_project_list))
            .route("/projects/team", get(get_project_team))
            .route("/projects/add-member", post(add_member))
            .route("/projects/update-member", put(update_member))
            .route("/projects/remove-member", delete(remove_member))
            .route("/members/projects", get(get_member_projects))
            .with_state(app_state)
            .layer(cors)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            );

        let listener = tokio::net::TcpListener::bind(address).await?;
        let address = listener.local_addr()?.to_string();
        let server = axum::serve(listener, router);

        Ok(Application { server, address })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        self.server.with_graceful_shutdown(shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

pub async fn get_postgres_pool(
    url: &Secret<String>,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(url.expose_secret())
        .await
}
