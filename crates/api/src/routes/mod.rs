pub mod health;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (no middleware layers).
///
/// ```text
/// GET    /health        -> health_check
///
/// GET    /tasks         -> list
/// POST   /tasks         -> create
/// DELETE /tasks         -> delete_all
/// GET    /tasks/{id}    -> get_by_id
/// PATCH  /tasks/{id}    -> update
/// DELETE /tasks/{id}    -> delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/tasks", tasks::router())
}
