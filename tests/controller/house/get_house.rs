use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::star_color::StarColor;
use sharehouse::{
    model::house::HouseViewDto,
    server::{controller::house::get_house, model::session::house_user::SessionHouseUser},
};

use super::*;

/// Expect 200 OK without a current user for a session that has not joined the house
#[tokio::test]
async fn success_without_current_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    let (house_model, _, task_model) = test.house().insert_house_with_task("acme").await?;
    test.house().insert_star(task_model.id, StarColor::Pink).await?;

    let result = get_house(
        State(test.into_app_state()),
        test.session.clone(),
        Path("acme".to_string()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let view: HouseViewDto = response_json(resp).await;
    assert_eq!(view.id, house_model.id);
    assert_eq!(view.sections[0].tasks[0].stars[0].color, "pink");
    assert!(view.current_user.is_none());

    Ok(())
}

/// Expect the session's user for this house to be returned as the current user
#[tokio::test]
async fn success_with_current_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    let house_model = test.house().insert_house("acme").await?;
    let user_model = test
        .house()
        .insert_house_user(house_model.id, "Ann", StarColor::Red)
        .await?;
    SessionHouseUser::insert(&test.session, house_model.id, user_model.id)
        .await
        .unwrap();

    let result = get_house(
        State(test.into_app_state()),
        test.session.clone(),
        Path("acme".to_string()),
    )
    .await;

    let resp = result.unwrap().into_response();
    let view: HouseViewDto = response_json(resp).await;
    assert_eq!(view.current_user.map(|u| u.id), Some(user_model.id));
    assert!(view.available_colors.iter().all(|c| c.id != "red"));

    Ok(())
}

/// Expect a session entry pointing at a user outside the house to be dropped
#[tokio::test]
async fn removes_stale_session_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_house_tables().build().await?;
    let acme = test.house().insert_house("acme").await?;
    let other = test.house().insert_house("other").await?;
    let foreign_user = test
        .house()
        .insert_house_user(other.id, "Bo", StarColor::Blue)
        .await?;
    SessionHouseUser::insert(&test.session, acme.id, foreign_user.id)
        .await
        .unwrap();

    let result = get_house(
        State(test.into_app_state()),
        test.session.clone(),
        Path("acme".to_string()),
    )
    .await;

    let resp = result.unwrap().into_response();
    let view: HouseViewDto = response_json(resp).await;
    assert!(view.current_user.is_none());
    let maybe_user_id = SessionHouseUser::get(&test.session, acme.id).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}

/// Expect 404 Not Found for a slug no house uses
#[tokio::test]
async fn not_found_for_unknown_slug() -> Result<(), TestError> {
    let test = TestBuilder::new().with_house_tables().build().await?;

    let result = get_house(
        State(test.into_app_state()),
        test.session.clone(),
        Path("nowhere".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
