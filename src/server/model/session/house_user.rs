use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_HOUSE_USER_KEY_PREFIX: &str = "sharehouse:house";

/// House user the session acts as within one house
///
/// A browser may have joined several houses, so the key is scoped per house ID.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionHouseUser(pub i32);

impl SessionHouseUser {
    fn key(house_id: i32) -> String {
        format!("{}:{}:user", SESSION_HOUSE_USER_KEY_PREFIX, house_id)
    }

    /// Insert house user ID into session
    pub async fn insert(session: &Session, house_id: i32, user_id: i32) -> Result<(), Error> {
        session
            .insert(&Self::key(house_id), SessionHouseUser(user_id))
            .await?;

        Ok(())
    }

    /// Get house user ID from session
    pub async fn get(session: &Session, house_id: i32) -> Result<Option<i32>, Error> {
        let user = session
            .get::<SessionHouseUser>(&Self::key(house_id))
            .await?;

        Ok(user.map(|SessionHouseUser(user_id)| user_id))
    }

    /// Remove house user ID from session
    pub async fn remove(session: &Session, house_id: i32) -> Result<(), Error> {
        session
            .remove::<SessionHouseUser>(&Self::key(house_id))
            .await?;

        Ok(())
    }
}
