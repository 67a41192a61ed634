use sea_orm::DatabaseConnection;

use crate::{
    model::house::StarDto,
    server::{
        data::{
            star::{StarPlacement, StarRepository},
            task::TaskRepository,
        },
        error::{not_found::NotFoundError, Error},
        util::validation::{finite, parse_color},
    },
};

pub struct StarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gives a star for a task
    ///
    /// Stars are never limited or deduplicated, every call adds one more to the pile.
    ///
    /// # Arguments
    /// - `task_id` - Task the star is given for
    /// - `color` - Color id, must be one of the fixed star colors
    /// - `placement` - Client generated jitter, any finite values are accepted
    ///
    /// # Returns
    /// - `Ok(StarDto)` - The created star
    /// - `Err(Error::ValidationError)` - Unknown color or non-finite placement value
    /// - `Err(Error::NotFoundError)` - Task does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_star(
        &self,
        task_id: i32,
        color: &str,
        placement: StarPlacement,
    ) -> Result<StarDto, Error> {
        let color = parse_color(color)?;
        let placement = StarPlacement {
            rotation_degrees: finite("rotationDegrees", placement.rotation_degrees)?,
            x_offset: finite("xOffset", placement.x_offset)?,
            y_offset: finite("yOffset", placement.y_offset)?,
        };

        if TaskRepository::new(self.db)
            .get_by_id(task_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Task(task_id).into());
        }

        let star = StarRepository::new(self.db)
            .create(task_id, color, placement)
            .await?;

        Ok(StarDto::from(star))
    }
}
