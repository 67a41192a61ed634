//! Tests running requests through the full router, covering extractor rejections and routing.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use sharehouse::{model::api::ErrorDto, server::router::routes};
use sharehouse_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::{response_json, TestContextExt};

fn app(test: &TestContext) -> Router {
    routes()
        .with_state(test.into_app_state())
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

fn json_request(method: Method, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Expect 400 Malformed request body for a body that is not JSON
#[tokio::test]
async fn bad_request_for_invalid_json() -> Result<(), TestError> {
    let test = TestBuilder::new().with_house_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(Method::POST, "/api/house/task", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = response_json(resp).await;
    assert_eq!(body.error, "Malformed request body");

    Ok(())
}

/// Expect 400 for a non-boolean archived flag
#[tokio::test]
async fn bad_request_for_non_boolean_archived() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    let house_model = test.house().insert_house("acme").await?;
    test.house().insert_section(house_model.id, "Kitchen").await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::PATCH,
            "/api/house/section",
            r#"{"sectionId": 1, "archived": "yes"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 401 for a star posted by a fresh session that never joined the house
#[tokio::test]
async fn unauthorized_star_without_session_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    test.house().insert_house_with_task("acme").await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/house/star",
            r#"{"taskId": 1, "color": "purple", "rotationDegrees": 3.0, "xOffset": 0.0, "yOffset": 0.0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = response_json(resp).await;
    assert_eq!(body.error, "Join the house first");

    Ok(())
}

/// Expect a form post to create the house & redirect, with the house then readable
#[tokio::test]
async fn create_house_form_then_read() -> Result<(), TestError> {
    let test = TestBuilder::new().with_house_tables().build().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/house")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("houseName=Acme"))
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let request = Request::builder()
        .uri("/api/houses/acme")
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let request = Request::builder()
        .uri("/api/docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
