//! Tests for the star endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::star_color::StarColor;
use sea_orm::EntityTrait;
use sharehouse::{
    model::{
        api::ErrorDto,
        house::{CreateStarDto, StarDto},
    },
    server::{controller::star::create_star, model::session::house_user::SessionHouseUser},
};

use super::*;

fn star_payload(task_id: i32, color: &str) -> CreateStarDto {
    CreateStarDto {
        task_id: Some(task_id),
        color: Some(color.to_string()),
        rotation_degrees: Some(-20.0),
        x_offset: Some(4.0),
        y_offset: Some(-1.0),
    }
}

/// Inserts a house with one task and joins the test session to it as a purple user
async fn joined_house_with_task(
    test: &mut TestContext,
) -> Result<entity::task::Model, TestError> {
    let (house_model, _, task_model) = test.house().insert_house_with_task("acme").await?;
    let user_model = test
        .house()
        .insert_house_user(house_model.id, "Ann", StarColor::Purple)
        .await?;
    SessionHouseUser::insert(&test.session, house_model.id, user_model.id)
        .await
        .unwrap();

    Ok(task_model)
}

/// Expect 200 OK with the created star and its placement
#[tokio::test]
async fn create_returns_star() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    let task_model = joined_house_with_task(&mut test).await?;

    let result = create_star(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(star_payload(task_model.id, "purple"))),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let star: StarDto = response_json(resp).await;
    assert_eq!(star.task_id, task_model.id);
    assert_eq!(star.color, "purple");
    assert_eq!(star.rotation_degrees, -20.0);

    Ok(())
}

/// Expect 401 Unauthorized when the session has not joined the task's house
#[tokio::test]
async fn unauthorized_without_session_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    let (_, _, task_model) = test.house().insert_house_with_task("acme").await?;

    let result = create_star(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(star_payload(task_model.id, "purple"))),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = response_json(resp).await;
    assert_eq!(body.error, "Join the house first");

    let stars = entity::prelude::Star::find().all(&test.db).await?;
    assert!(stars.is_empty());

    Ok(())
}

/// Expect 401 Unauthorized when the session only joined a different house
#[tokio::test]
async fn unauthorized_for_user_of_other_house() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    let other = test.house().insert_house("other").await?;
    let foreign_user = test
        .house()
        .insert_house_user(other.id, "Bo", StarColor::Blue)
        .await?;
    SessionHouseUser::insert(&test.session, other.id, foreign_user.id)
        .await
        .unwrap();
    let (_, _, task_model) = test.house().insert_house_with_task("acme").await?;

    let result = create_star(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(star_payload(task_model.id, "blue"))),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 400 Bad Request for a color outside of the fixed set
#[tokio::test]
async fn bad_request_for_invalid_color() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    let task_model = joined_house_with_task(&mut test).await?;

    let result = create_star(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(star_payload(task_model.id, "orange"))),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = response_json(resp).await;
    assert_eq!(body.error, "Invalid color");

    Ok(())
}

/// Expect 400 Bad Request when a placement value is missing
#[tokio::test]
async fn bad_request_for_missing_offset() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    let task_model = joined_house_with_task(&mut test).await?;

    let payload = CreateStarDto {
        y_offset: None,
        ..star_payload(task_model.id, "red")
    };
    let result = create_star(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(payload)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found for a valid color on a task that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_task() -> Result<(), TestError> {
    let test = TestBuilder::new().with_house_tables().build().await?;

    let result = create_star(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(star_payload(1, "red"))),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
