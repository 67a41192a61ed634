use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        house::{CreateTaskDto, DeleteTaskDto, TaskDto},
    },
    server::{
        controller::house::HOUSE_TAG,
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::task::TaskService,
        util::validation::require,
    },
};

/// Add a task to a section
#[utoipa::path(
    post,
    path = "/api/house/task",
    tag = HOUSE_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 200, description = "Task created", body = TaskDto),
        (status = 400, description = "Missing fields or malformed body", body = ErrorDto),
        (status = 404, description = "Section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    let section_id = require(payload.section_id)?;
    let name = require(payload.name)?;

    let task = TaskService::new(&state.db)
        .create_task(section_id, &name)
        .await?;

    Ok(Json(task))
}

/// Permanently delete a task and its stars
#[utoipa::path(
    delete,
    path = "/api/house/task",
    tag = HOUSE_TAG,
    request_body = DeleteTaskDto,
    responses(
        (status = 200, description = "Task deleted", body = SuccessDto),
        (status = 400, description = "Missing fields or malformed body", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    payload: Result<Json<DeleteTaskDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    let task_id = require(payload.task_id)?;

    TaskService::new(&state.db).delete_task(task_id).await?;

    Ok(Json(SuccessDto { success: true }))
}
