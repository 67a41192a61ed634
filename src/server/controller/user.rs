use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateHouseUserDto, HouseUserDto},
    },
    server::{
        controller::house::HOUSE_TAG,
        error::{validation::ValidationError, Error},
        model::{app::AppState, session::house_user::SessionHouseUser},
        service::house_user::HouseUserService,
        util::validation::require,
    },
};

/// Join a house with a name & color
///
/// The created user is remembered in the session so later visits to the house act as them.
#[utoipa::path(
    post,
    path = "/api/house/user",
    tag = HOUSE_TAG,
    request_body = CreateHouseUserDto,
    responses(
        (status = 200, description = "User created", body = HouseUserDto),
        (status = 400, description = "Missing fields, invalid color or color already taken", body = ErrorDto),
        (status = 404, description = "House not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateHouseUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    let house_id = require(payload.house_id)?;
    let name = require(payload.name)?;
    let color = require(payload.color)?;

    let user = HouseUserService::new(&state.db)
        .create_user(house_id, &name, &color)
        .await?;

    SessionHouseUser::insert(&session, house_id, user.id).await?;

    Ok(Json(user))
}
