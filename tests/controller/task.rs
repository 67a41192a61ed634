//! Tests for the task endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::star_color::StarColor;
use sharehouse::{
    model::{
        api::SuccessDto,
        house::{CreateTaskDto, DeleteTaskDto, TaskDto},
    },
    server::controller::task::{create_task, delete_task},
};

use super::*;

/// Expect 200 OK with the created task
#[tokio::test]
async fn create_returns_task() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    let (_, section_model, _) = test.house().insert_house_with_task("acme").await?;

    let payload = CreateTaskDto {
        section_id: Some(section_model.id),
        name: Some("Oven".to_string()),
    };
    let result = create_task(State(test.into_app_state()), Ok(Json(payload))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let task: TaskDto = response_json(resp).await;
    assert_eq!(task.name, "Oven");
    assert_eq!(task.section_id, section_model.id);

    Ok(())
}

/// Expect 404 Not Found for a section that does not exist
#[tokio::test]
async fn create_not_found_for_nonexistent_section() -> Result<(), TestError> {
    let test = TestBuilder::new().with_house_tables().build().await?;

    let payload = CreateTaskDto {
        section_id: Some(1),
        name: Some("Oven".to_string()),
    };
    let result = create_task(State(test.into_app_state()), Ok(Json(payload))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK with success true after deleting a task with stars
#[tokio::test]
async fn delete_returns_success() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    let (_, _, task_model) = test.house().insert_house_with_task("acme").await?;
    test.house().insert_star(task_model.id, StarColor::Red).await?;

    let payload = DeleteTaskDto {
        task_id: Some(task_model.id),
    };
    let result = delete_task(State(test.into_app_state()), Ok(Json(payload))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: SuccessDto = response_json(resp).await;
    assert!(body.success);

    Ok(())
}

/// Expect 400 Bad Request when the task ID is missing
#[tokio::test]
async fn delete_bad_request_for_missing_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_house_tables().build().await?;

    let result = delete_task(
        State(test.into_app_state()),
        Ok(Json(DeleteTaskDto::default())),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found for a task that does not exist
#[tokio::test]
async fn delete_not_found_for_nonexistent_task() -> Result<(), TestError> {
    let test = TestBuilder::new().with_house_tables().build().await?;

    let payload = DeleteTaskDto { task_id: Some(1) };
    let result = delete_task(State(test.into_app_state()), Ok(Json(payload))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
