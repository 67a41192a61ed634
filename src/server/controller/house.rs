use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use tower_sessions::Session;
use url::Url;

use crate::{
    model::{
        api::ErrorDto,
        house::{CreateHouseDto, HouseSettingsDto, HouseViewDto},
    },
    server::{
        controller::util::current_user::get_current_user,
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::house::HouseService,
    },
};

pub static HOUSE_TAG: &str = "house";

/// Create a house seeded with the default sections & tasks
///
/// Submitted as a form by the landing page, redirects to the new house's page.
#[utoipa::path(
    post,
    path = "/api/house",
    tag = HOUSE_TAG,
    request_body(content = CreateHouseDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "House created, redirects to /{slug}"),
        (status = 400, description = "House name is empty or already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_house(
    State(state): State<AppState>,
    payload: Result<Form<CreateHouseDto>, FormRejection>,
) -> Result<impl IntoResponse, Error> {
    let Form(payload) = payload.map_err(ValidationError::from)?;
    let house_name = payload.house_name.unwrap_or_default();

    let house = HouseService::new(&state.db)
        .create_house(&house_name)
        .await?;

    Ok(Redirect::to(&house_path(&house.name)?))
}

/// Get a house with its active sections, tasks, stars & users
#[utoipa::path(
    get,
    path = "/api/houses/{slug}",
    tag = HOUSE_TAG,
    params(("slug" = String, Path, description = "Lowercase house name")),
    responses(
        (status = 200, description = "Success when retrieving the house", body = HouseViewDto),
        (status = 404, description = "House not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_house(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let mut house = HouseService::new(&state.db).get_house_view(&slug).await?;

    house.current_user = get_current_user(&state, &session, house.id).await?;

    Ok(Json(house))
}

/// Get a house with all sections, including archived ones, and their tasks
#[utoipa::path(
    get,
    path = "/api/houses/{slug}/settings",
    tag = HOUSE_TAG,
    params(("slug" = String, Path, description = "Lowercase house name")),
    responses(
        (status = 200, description = "Success when retrieving the house settings", body = HouseSettingsDto),
        (status = 404, description = "House not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_house_settings(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let settings = HouseService::new(&state.db)
        .get_house_settings(&slug)
        .await?;

    Ok(Json(settings))
}

/// Builds the path of a house page, percent-encoding the slug as a single path segment
fn house_path(slug: &str) -> Result<String, Error> {
    let mut url =
        Url::parse("http://localhost/").map_err(|e| Error::InternalError(e.to_string()))?;

    url.path_segments_mut()
        .map_err(|_| Error::InternalError("URL cannot be a base".to_string()))?
        .clear()
        .push(slug);

    Ok(url.path().to_string())
}
