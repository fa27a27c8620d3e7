//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use taskd_core::error::CoreError;
use taskd_core::types::DbId;
use taskd_db::models::task::{CreateTask, Task, UpdateTask};
use taskd_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response payload for bulk deletes.
#[derive(Serialize)]
pub struct DeleteSummary {
    /// Number of rows removed.
    pub deleted: u64,
}

/// POST /tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    input.validate()?;
    let task = TaskRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// PATCH /tasks/{id}
///
/// Partial update: omitted fields keep their current value. An empty patch
/// is a no-op that still refreshes `updated_at`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    input.validate()?;
    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// DELETE /tasks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}

/// DELETE /tasks -- clear the whole collection.
pub async fn delete_all(State(state): State<AppState>) -> AppResult<Json<DeleteSummary>> {
    let deleted = TaskRepo::delete_all(&state.pool).await?;
    Ok(Json(DeleteSummary { deleted }))
}
