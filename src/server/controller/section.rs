use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        house::{ArchiveSectionDto, CreateSectionDto, SectionDto},
    },
    server::{
        controller::house::HOUSE_TAG,
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::section::SectionService,
        util::validation::require,
    },
};

/// Add a section to a house
#[utoipa::path(
    post,
    path = "/api/house/section",
    tag = HOUSE_TAG,
    request_body = CreateSectionDto,
    responses(
        (status = 200, description = "Section created", body = SectionDto),
        (status = 400, description = "Missing fields or malformed body", body = ErrorDto),
        (status = 404, description = "House not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_section(
    State(state): State<AppState>,
    payload: Result<Json<CreateSectionDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    let house_id = require(payload.house_id)?;
    let name = require(payload.name)?;

    let section = SectionService::new(&state.db)
        .create_section(house_id, &name)
        .await?;

    Ok(Json(section))
}

/// Set the archived flag of a section
#[utoipa::path(
    patch,
    path = "/api/house/section",
    tag = HOUSE_TAG,
    request_body = ArchiveSectionDto,
    responses(
        (status = 200, description = "Section updated", body = SectionDto),
        (status = 400, description = "Missing fields or malformed body", body = ErrorDto),
        (status = 404, description = "Section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn archive_section(
    State(state): State<AppState>,
    payload: Result<Json<ArchiveSectionDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    let section_id = require(payload.section_id)?;
    let archived = require(payload.archived)?;

    let section = SectionService::new(&state.db)
        .archive_section(section_id, archived)
        .await?;

    Ok(Json(section))
}
