use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct SectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SectionRepository<'a, C> {
    /// Creates a new instance of [`SectionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new, non-archived section for a house
    pub async fn create(
        &self,
        house_id: i32,
        name: String,
    ) -> Result<entity::house_section::Model, DbErr> {
        let section = entity::house_section::ActiveModel {
            house_id: ActiveValue::Set(house_id),
            name: ActiveValue::Set(name),
            archived: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        section.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        section_id: i32,
    ) -> Result<Option<entity::house_section::Model>, DbErr> {
        entity::prelude::HouseSection::find_by_id(section_id)
            .one(self.db)
            .await
    }

    /// Gets the sections of a house in creation order
    ///
    /// # Arguments
    /// - `house_id`: ID of the house the sections belong to
    /// - `include_archived`: Whether archived sections are part of the result
    pub async fn get_many_by_house_id(
        &self,
        house_id: i32,
        include_archived: bool,
    ) -> Result<Vec<entity::house_section::Model>, DbErr> {
        let mut query = entity::prelude::HouseSection::find()
            .filter(entity::house_section::Column::HouseId.eq(house_id));

        if !include_archived {
            query = query.filter(entity::house_section::Column::Archived.eq(false));
        }

        query
            .order_by_asc(entity::house_section::Column::CreatedAt)
            .order_by_asc(entity::house_section::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the archived flag of a section
    ///
    /// # Returns
    /// - `Some`: The updated section
    /// - `None`: No section exists with the provided ID
    pub async fn update_archived(
        &self,
        section_id: i32,
        archived: bool,
    ) -> Result<Option<entity::house_section::Model>, DbErr> {
        let section = match entity::prelude::HouseSection::find_by_id(section_id)
            .one(self.db)
            .await?
        {
            Some(section) => section,
            None => return Ok(None),
        };

        let mut section_am = section.into_active_model();
        section_am.archived = ActiveValue::Set(archived);

        let section = section_am.update(self.db).await?;

        Ok(Some(section))
    }
}
