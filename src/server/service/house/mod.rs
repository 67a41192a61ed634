//! House service layer.
//!
//! Creating a house seeds it with the default sections & tasks, and the two read paths
//! assemble everything the house page and the settings page render in a single response.

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use entity::star_color::StarColor;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        house::{
            HouseDto, HouseSettingsDto, HouseViewDto, SectionViewDto, SettingsSectionDto, StarDto,
            TaskDto, TaskViewDto,
        },
        user::{ColorDto, HouseUserDto},
    },
    server::{
        data::{
            house::HouseRepository, house_user::HouseUserRepository, section::SectionRepository,
            star::StarRepository, task::TaskRepository,
        },
        error::{
            conflict::ConflictError, not_found::NotFoundError, validation::ValidationError, Error,
        },
        util::{db::is_unique_violation, template::DEFAULT_HOUSE_TEMPLATE},
    },
};

/// Normalizes a free text house name into the slug used as its unique name & URL segment
pub fn house_slug(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Service for creating houses and reading them back.
pub struct HouseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HouseService<'a> {
    /// Creates a new instance of HouseService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a house along with the default template of sections & tasks.
    ///
    /// The house & every seeded row are inserted in one transaction, a failure part way
    /// leaves nothing behind.
    ///
    /// # Arguments
    /// - `house_name` - Desired name, trimmed & lowercased into the slug
    ///
    /// # Returns
    /// - `Ok(HouseDto)` - The created house
    /// - `Err(Error::ValidationError)` - Name is empty after trimming, or is `.` or `..`
    /// - `Err(Error::ConflictError)` - A house already uses the slug
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_house(&self, house_name: &str) -> Result<HouseDto, Error> {
        let slug = house_slug(house_name);

        if slug.is_empty() {
            return Err(ValidationError::EmptyHouseName.into());
        }

        // Dot segments are dropped by URL normalization, leaving the house unreachable
        if slug == "." || slug == ".." {
            return Err(ValidationError::ReservedHouseName(slug).into());
        }

        let txn = self.db.begin().await?;

        let house = HouseRepository::new(&txn)
            .create(slug.clone())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    Error::from(ConflictError::HouseNameTaken(slug.clone()))
                } else {
                    Error::from(e)
                }
            })?;

        let section_repo = SectionRepository::new(&txn);
        let task_repo = TaskRepository::new(&txn);

        for (section_name, task_names) in DEFAULT_HOUSE_TEMPLATE {
            let section = section_repo
                .create(house.id, section_name.to_string())
                .await?;

            task_repo.create_many(section.id, task_names).await?;
        }

        txn.commit().await?;

        tracing::info!("Created house {} with ID {}", house.name, house.id);

        Ok(HouseDto::from(house))
    }

    /// Assembles the house page: active sections with their tasks & stars, the house's users
    /// and the colors still free to pick.
    ///
    /// `current_user` is always `None`, it is resolved from the caller's session by the
    /// controller.
    ///
    /// # Returns
    /// - `Ok(HouseViewDto)` - The house view
    /// - `Err(Error::NotFoundError)` - No house uses the slug
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_house_view(&self, slug: &str) -> Result<HouseViewDto, Error> {
        let house = self.find_house(slug).await?;

        let sections = SectionRepository::new(self.db)
            .get_many_by_house_id(house.id, false)
            .await?;
        let section_ids: Vec<i32> = sections.iter().map(|s| s.id).collect();

        let tasks = TaskRepository::new(self.db)
            .get_many_by_section_ids(&section_ids)
            .await?;
        let task_ids: Vec<i32> = tasks.iter().map(|t| t.id).collect();

        let stars = StarRepository::new(self.db)
            .get_many_by_task_ids(&task_ids)
            .await?;

        let users = HouseUserRepository::new(self.db)
            .get_many_by_house_id(house.id)
            .await?;

        // Stars arrive newest first, grouping keeps that order per task
        let mut stars_by_task: HashMap<i32, Vec<StarDto>> = HashMap::new();
        for star in stars {
            stars_by_task
                .entry(star.task_id)
                .or_default()
                .push(StarDto::from(star));
        }

        let mut tasks_by_section: HashMap<i32, Vec<TaskViewDto>> = HashMap::new();
        for task in tasks {
            tasks_by_section
                .entry(task.section_id)
                .or_default()
                .push(TaskViewDto {
                    id: task.id,
                    stars: stars_by_task.remove(&task.id).unwrap_or_default(),
                    name: task.name,
                    created_at: task.created_at,
                });
        }

        let sections = sections
            .into_iter()
            .map(|section| SectionViewDto {
                id: section.id,
                tasks: tasks_by_section.remove(&section.id).unwrap_or_default(),
                name: section.name,
                created_at: section.created_at,
            })
            .collect();

        let taken: HashSet<StarColor> = users.iter().map(|u| u.color).collect();
        let available_colors = StarColor::ALL
            .into_iter()
            .filter(|color| !taken.contains(color))
            .map(ColorDto::from)
            .collect();

        Ok(HouseViewDto {
            id: house.id,
            name: house.name,
            created_at: house.created_at,
            sections,
            users: users.into_iter().map(HouseUserDto::from).collect(),
            available_colors,
            current_user: None,
        })
    }

    /// Assembles the settings page: every section including archived ones, with their tasks.
    ///
    /// # Returns
    /// - `Ok(HouseSettingsDto)` - The settings view
    /// - `Err(Error::NotFoundError)` - No house uses the slug
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_house_settings(&self, slug: &str) -> Result<HouseSettingsDto, Error> {
        let house = self.find_house(slug).await?;

        let sections = SectionRepository::new(self.db)
            .get_many_by_house_id(house.id, true)
            .await?;
        let section_ids: Vec<i32> = sections.iter().map(|s| s.id).collect();

        let tasks = TaskRepository::new(self.db)
            .get_many_by_section_ids(&section_ids)
            .await?;

        let mut tasks_by_section: HashMap<i32, Vec<TaskDto>> = HashMap::new();
        for task in tasks {
            tasks_by_section
                .entry(task.section_id)
                .or_default()
                .push(TaskDto::from(task));
        }

        let sections = sections
            .into_iter()
            .map(|section| SettingsSectionDto {
                id: section.id,
                tasks: tasks_by_section.remove(&section.id).unwrap_or_default(),
                name: section.name,
                archived: section.archived,
                created_at: section.created_at,
            })
            .collect();

        Ok(HouseSettingsDto {
            id: house.id,
            name: house.name,
            created_at: house.created_at,
            sections,
        })
    }

    async fn find_house(&self, slug: &str) -> Result<entity::house::Model, Error> {
        let slug = house_slug(slug);

        HouseRepository::new(self.db)
            .get_by_name(&slug)
            .await?
            .ok_or_else(|| NotFoundError::HouseSlug(slug).into())
    }
}
