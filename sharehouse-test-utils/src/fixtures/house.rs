use chrono::Utc;
use entity::star_color::StarColor;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn house<'a>(&'a mut self) -> HouseFixtures<'a> {
        HouseFixtures { setup: self }
    }
}

pub struct HouseFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> HouseFixtures<'a> {
    pub async fn insert_house(&self, name: &str) -> Result<entity::house::Model, TestError> {
        Ok(entity::prelude::House::insert(entity::house::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_section(
        &self,
        house_id: i32,
        name: &str,
    ) -> Result<entity::house_section::Model, TestError> {
        self.insert_section_with_archived(house_id, name, false)
            .await
    }

    pub async fn insert_archived_section(
        &self,
        house_id: i32,
        name: &str,
    ) -> Result<entity::house_section::Model, TestError> {
        self.insert_section_with_archived(house_id, name, true)
            .await
    }

    async fn insert_section_with_archived(
        &self,
        house_id: i32,
        name: &str,
        archived: bool,
    ) -> Result<entity::house_section::Model, TestError> {
        Ok(
            entity::prelude::HouseSection::insert(entity::house_section::ActiveModel {
                house_id: ActiveValue::Set(house_id),
                name: ActiveValue::Set(name.to_string()),
                archived: ActiveValue::Set(archived),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_task(
        &self,
        section_id: i32,
        name: &str,
    ) -> Result<entity::task::Model, TestError> {
        Ok(entity::prelude::Task::insert(entity::task::ActiveModel {
            section_id: ActiveValue::Set(section_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a star with zero rotation and offsets
    pub async fn insert_star(
        &self,
        task_id: i32,
        color: StarColor,
    ) -> Result<entity::star::Model, TestError> {
        Ok(entity::prelude::Star::insert(entity::star::ActiveModel {
            task_id: ActiveValue::Set(task_id),
            color: ActiveValue::Set(color),
            rotation_degrees: ActiveValue::Set(0.0),
            x_offset: ActiveValue::Set(0.0),
            y_offset: ActiveValue::Set(0.0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_house_user(
        &self,
        house_id: i32,
        name: &str,
        color: StarColor,
    ) -> Result<entity::house_user::Model, TestError> {
        Ok(
            entity::prelude::HouseUser::insert(entity::house_user::ActiveModel {
                house_id: ActiveValue::Set(house_id),
                name: ActiveValue::Set(name.to_string()),
                color: ActiveValue::Set(color),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a house with one section holding one task
    pub async fn insert_house_with_task(
        &self,
        name: &str,
    ) -> Result<
        (
            entity::house::Model,
            entity::house_section::Model,
            entity::task::Model,
        ),
        TestError,
    > {
        let house_model = self.insert_house(name).await?;
        let section_model = self.insert_section(house_model.id, "Kitchen").await?;
        let task_model = self.insert_task(section_model.id, "Dishes").await?;

        Ok((house_model, section_model, task_model))
    }
}
