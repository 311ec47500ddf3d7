use axum::Router;
use axum::routing::get;

pub mod health;
pub mod tarefas;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by `create_router`.
///
/// Returns a stateless Router (sub-routers have their state applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(domain_tasks::entity::URL, tarefas::router(state))
}

/// Router with the /ready endpoint, checking the database connection.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
