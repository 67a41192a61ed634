use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct HouseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HouseRepository<'a, C> {
    /// Creates a new instance of [`HouseRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new house
    ///
    /// Fails with a unique constraint violation if the name is already in use.
    pub async fn create(&self, name: String) -> Result<entity::house::Model, DbErr> {
        let house = entity::house::ActiveModel {
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        house.insert(self.db).await
    }

    pub async fn get_by_id(&self, house_id: i32) -> Result<Option<entity::house::Model>, DbErr> {
        entity::prelude::House::find_by_id(house_id)
            .one(self.db)
            .await
    }

    /// Get a house by its slug
    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::house::Model>, DbErr> {
        entity::prelude::House::find()
            .filter(entity::house::Column::Name.eq(name))
            .one(self.db)
            .await
    }
}
