use tower_sessions::Session;

use crate::{
    model::user::HouseUserDto,
    server::{
        error::Error,
        model::{app::AppState, session::house_user::SessionHouseUser},
        service::house_user::HouseUserService,
    },
};

/// Retrieves the house user the session acts as within a house
///
/// # Returns
/// - `Ok(Some(HouseUserDto))`: Session holds a user of this house
/// - `Ok(None)`: Session has not joined the house, or held a user which no longer belongs to
///   it (the stale entry is removed)
/// - `Err(Error)`: Session or database errors
pub async fn get_current_user(
    state: &AppState,
    session: &Session,
    house_id: i32,
) -> Result<Option<HouseUserDto>, Error> {
    let Some(user_id) = SessionHouseUser::get(session, house_id).await? else {
        return Ok(None);
    };

    let user = HouseUserService::new(&state.db)
        .get_house_user(house_id, user_id)
        .await?;

    if user.is_none() {
        SessionHouseUser::remove(session, house_id).await?;

        tracing::debug!(
            "Removed house user ID {} from session as they are not a user of house ID {}",
            user_id,
            house_id
        );
    }

    Ok(user)
}
