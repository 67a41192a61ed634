use sea_orm::DatabaseConnection;

use crate::{
    model::house::SectionDto,
    server::{
        data::{house::HouseRepository, section::SectionRepository},
        error::{not_found::NotFoundError, Error},
        util::validation::non_blank,
    },
};

pub struct SectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SectionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a new, non-archived section to a house
    ///
    /// # Returns
    /// - `Ok(SectionDto)` - The created section
    /// - `Err(Error::ValidationError)` - Name is blank
    /// - `Err(Error::NotFoundError)` - House does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_section(&self, house_id: i32, name: &str) -> Result<SectionDto, Error> {
        let name = non_blank(name)?;

        if HouseRepository::new(self.db)
            .get_by_id(house_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::House(house_id).into());
        }

        let section = SectionRepository::new(self.db)
            .create(house_id, name)
            .await?;

        tracing::info!(
            "Created section {} with ID {} in house ID {}",
            section.name,
            section.id,
            house_id
        );

        Ok(SectionDto::from(section))
    }

    /// Sets the archived flag of a section to the given value
    ///
    /// Setting the flag to its current value succeeds without changes.
    ///
    /// # Returns
    /// - `Ok(SectionDto)` - The updated section
    /// - `Err(Error::NotFoundError)` - Section does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn archive_section(
        &self,
        section_id: i32,
        archived: bool,
    ) -> Result<SectionDto, Error> {
        let section = SectionRepository::new(self.db)
            .update_archived(section_id, archived)
            .await?
            .ok_or(NotFoundError::Section(section_id))?;

        Ok(SectionDto::from(section))
    }
}
