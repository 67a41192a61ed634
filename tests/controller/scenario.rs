//! End to end walk through a house's life using the handlers in sequence.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};
use sharehouse::{
    model::{
        api::ErrorDto,
        house::{CreateHouseDto, CreateStarDto, DeleteTaskDto, HouseViewDto},
        user::{CreateHouseUserDto, HouseUserDto},
    },
    server::controller::{
        house::{create_house, get_house},
        star::create_star,
        task::delete_task,
        user::create_user,
    },
};

use super::*;

async fn fetch_view(test: &TestContext) -> HouseViewDto {
    let resp = get_house(
        State(test.into_app_state()),
        test.session.clone(),
        Path("acme".to_string()),
    )
    .await
    .unwrap()
    .into_response();

    response_json(resp).await
}

/// Expect a new house, two users competing for red, a star on Dishes and deleting Dishes to
/// leave the house in the expected state after each step
#[tokio::test]
async fn acme_house_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_house_tables().build().await?;

    // Create the house
    let resp = create_house(
        State(test.into_app_state()),
        Ok(Form(CreateHouseDto {
            house_name: Some("acme".to_string()),
        })),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let view = fetch_view(&test).await;
    let kitchen = view
        .sections
        .iter()
        .find(|s| s.name == "Kitchen")
        .unwrap();
    let dishes_id = kitchen
        .tasks
        .iter()
        .find(|t| t.name == "Dishes")
        .unwrap()
        .id;

    // Ann joins as red
    let resp = create_user(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(CreateHouseUserDto {
            house_id: Some(view.id),
            name: Some("Ann".to_string()),
            color: Some("red".to_string()),
        })),
    )
    .await
    .unwrap()
    .into_response();
    let ann: HouseUserDto = response_json(resp).await;

    // Bo tries red as well
    let resp = create_user(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(CreateHouseUserDto {
            house_id: Some(view.id),
            name: Some("Bo".to_string()),
            color: Some("red".to_string()),
        })),
    )
    .await
    .err()
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = response_json(resp).await;
    assert_eq!(body.error, "Color already taken");

    // Ann gives a star for the dishes
    create_star(
        State(test.into_app_state()),
        test.session.clone(),
        Ok(Json(CreateStarDto {
            task_id: Some(dishes_id),
            color: Some(ann.color.clone()),
            rotation_degrees: Some(8.0),
            x_offset: Some(0.5),
            y_offset: Some(-0.5),
        })),
    )
    .await
    .unwrap();

    let view = fetch_view(&test).await;
    assert_eq!(view.current_user.as_ref().map(|u| u.id), Some(ann.id));
    let dishes = view
        .sections
        .iter()
        .flat_map(|s| s.tasks.iter())
        .find(|t| t.id == dishes_id)
        .unwrap();
    assert_eq!(dishes.stars.len(), 1);
    assert_eq!(dishes.stars[0].color, "red");

    // Delete the dishes task along with its star
    delete_task(
        State(test.into_app_state()),
        Ok(Json(DeleteTaskDto {
            task_id: Some(dishes_id),
        })),
    )
    .await
    .unwrap();

    let view = fetch_view(&test).await;
    assert!(view
        .sections
        .iter()
        .flat_map(|s| s.tasks.iter())
        .all(|t| t.id != dishes_id));

    Ok(())
}
