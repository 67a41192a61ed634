use sea_orm::DatabaseConnection;

use crate::{
    model::user::HouseUserDto,
    server::{
        data::{house::HouseRepository, house_user::HouseUserRepository},
        error::{conflict::ConflictError, not_found::NotFoundError, Error},
        util::{
            db::is_unique_violation,
            validation::{non_blank, parse_color},
        },
    },
};

/// Service for the users of a house, each identified within the house by their color.
pub struct HouseUserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HouseUserService<'a> {
    /// Creates a new instance of HouseUserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Joins a house under the provided name & color.
    ///
    /// The color is checked against existing users first. Two requests racing for the same
    /// color can both pass that check, the unique index on `(house_id, color)` then rejects the
    /// second insert which is reported the same way.
    ///
    /// # Returns
    /// - `Ok(HouseUserDto)` - The created user
    /// - `Err(Error::ValidationError)` - Blank name or unknown color
    /// - `Err(Error::NotFoundError)` - House does not exist
    /// - `Err(Error::ConflictError)` - Color is already held by a user of the house
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(
        &self,
        house_id: i32,
        name: &str,
        color: &str,
    ) -> Result<HouseUserDto, Error> {
        let name = non_blank(name)?;
        let color = parse_color(color)?;

        if HouseRepository::new(self.db)
            .get_by_id(house_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::House(house_id).into());
        }

        let user_repo = HouseUserRepository::new(self.db);

        if user_repo
            .get_by_house_and_color(house_id, color)
            .await?
            .is_some()
        {
            return Err(ConflictError::ColorTaken { house_id, color }.into());
        }

        let user = user_repo
            .create(house_id, name, color)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    Error::from(ConflictError::ColorTaken { house_id, color })
                } else {
                    Error::from(e)
                }
            })?;

        tracing::info!(
            "Created house user {} with ID {} and color {} in house ID {}",
            user.name,
            user.id,
            user.color.id(),
            house_id
        );

        Ok(HouseUserDto::from(user))
    }

    /// Gets a user only if they belong to the provided house
    ///
    /// # Returns
    /// - `Ok(Some(HouseUserDto))` - User exists within the house
    /// - `Ok(None)` - User does not exist or belongs to another house
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_house_user(
        &self,
        house_id: i32,
        user_id: i32,
    ) -> Result<Option<HouseUserDto>, Error> {
        let user = HouseUserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user
            .filter(|user| user.house_id == house_id)
            .map(HouseUserDto::from))
    }
}
