//! Web API module for pomo

pub mod error;
pub mod handlers;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::store::AppState;

/// Create the API router
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::meta::welcome))
        .route("/version", get(handlers::meta::get_version))
        // Tasks API
        .route(
            "/tasks",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route("/tasks/{id}", get(handlers::tasks::get_task))
        .route("/tasks/{id}", put(handlers::tasks::update_task))
        .route("/tasks/{id}", delete(handlers::tasks::delete_task))
        // Pomodoro API
        .route("/pomodoro", post(handlers::pomodoro::start_pomodoro))
        .route(
            "/pomodoro/{task_id}/stop",
            post(handlers::pomodoro::stop_pomodoro),
        )
        .route("/pomodoro/stats", get(handlers::pomodoro::get_stats))
}

/// Create the full router with CORS applied
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_api_router().layer(cors).with_state(state)
}

/// Start the API server (runs until ctrl-c)
pub async fn start_server(host: &str, port: u16, state: AppState) -> std::io::Result<()> {
    let app = create_router(state);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "API server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(std::io::Error::other)
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutting down");
}
