//! Tests for the section endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sharehouse::{
    model::{
        api::ErrorDto,
        house::{ArchiveSectionDto, CreateSectionDto, SectionDto},
    },
    server::controller::section::{archive_section, create_section},
};

use super::*;

/// Expect 200 OK with the created section
#[tokio::test]
async fn create_returns_section() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    let house_model = test.house().insert_house("acme").await?;

    let payload = CreateSectionDto {
        house_id: Some(house_model.id),
        name: Some("Garden".to_string()),
    };
    let result = create_section(State(test.into_app_state()), Ok(Json(payload))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let section: SectionDto = response_json(resp).await;
    assert_eq!(section.name, "Garden");
    assert!(!section.archived);

    Ok(())
}

/// Expect 400 Bad Request when the name is missing
#[tokio::test]
async fn create_bad_request_for_missing_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    let house_model = test.house().insert_house("acme").await?;

    let payload = CreateSectionDto {
        house_id: Some(house_model.id),
        name: None,
    };
    let result = create_section(State(test.into_app_state()), Ok(Json(payload))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = response_json(resp).await;
    assert_eq!(body.error, "Missing required fields");

    Ok(())
}

/// Expect 404 Not Found for a house that does not exist
#[tokio::test]
async fn create_not_found_for_nonexistent_house() -> Result<(), TestError> {
    let test = TestBuilder::new().with_house_tables().build().await?;

    let payload = CreateSectionDto {
        house_id: Some(1),
        name: Some("Garden".to_string()),
    };
    let result = create_section(State(test.into_app_state()), Ok(Json(payload))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK with the archived flag set
#[tokio::test]
async fn archive_returns_updated_section() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    let house_model = test.house().insert_house("acme").await?;
    let section_model = test.house().insert_section(house_model.id, "Kitchen").await?;

    let payload = ArchiveSectionDto {
        section_id: Some(section_model.id),
        archived: Some(true),
    };
    let result = archive_section(State(test.into_app_state()), Ok(Json(payload))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let section: SectionDto = response_json(resp).await;
    assert!(section.archived);

    Ok(())
}

/// Expect 400 Bad Request when the archived flag is absent rather than defaulting it
#[tokio::test]
async fn archive_bad_request_for_missing_flag() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    let house_model = test.house().insert_house("acme").await?;
    let section_model = test.house().insert_section(house_model.id, "Kitchen").await?;

    let payload = ArchiveSectionDto {
        section_id: Some(section_model.id),
        archived: None,
    };
    let result = archive_section(State(test.into_app_state()), Ok(Json(payload))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found for a section that does not exist
#[tokio::test]
async fn archive_not_found_for_nonexistent_section() -> Result<(), TestError> {
    let test = TestBuilder::new().with_house_tables().build().await?;

    let payload = ArchiveSectionDto {
        section_id: Some(1),
        archived: Some(true),
    };
    let result = archive_section(State(test.into_app_state()), Ok(Json(payload))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
