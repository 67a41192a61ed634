use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        house::{CreateStarDto, StarDto},
    },
    server::{
        controller::{house::HOUSE_TAG, util::current_user::get_current_user},
        data::star::StarPlacement,
        error::{auth::AuthError, validation::ValidationError, Error},
        model::app::AppState,
        service::{star::StarService, task::TaskService},
        util::validation::require,
    },
};

/// Give a star for a task
///
/// Only sessions which joined the task's house may give stars.
#[utoipa::path(
    post,
    path = "/api/house/star",
    tag = HOUSE_TAG,
    request_body = CreateStarDto,
    responses(
        (status = 200, description = "Star created", body = StarDto),
        (status = 400, description = "Missing fields, invalid color or malformed body", body = ErrorDto),
        (status = 401, description = "Session has not joined the task's house", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_star(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateStarDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    let task_id = require(payload.task_id)?;
    let color = require(payload.color)?;
    let placement = StarPlacement {
        rotation_degrees: require(payload.rotation_degrees)?,
        x_offset: require(payload.x_offset)?,
        y_offset: require(payload.y_offset)?,
    };

    let house_id = TaskService::new(&state.db).get_house_id(task_id).await?;
    if get_current_user(&state, &session, house_id).await?.is_none() {
        return Err(AuthError::HouseUserNotInSession(house_id).into());
    }

    let star = StarService::new(&state.db)
        .create_star(task_id, &color, placement)
        .await?;

    Ok(Json(star))
}
