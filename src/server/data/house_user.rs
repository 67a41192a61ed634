use chrono::Utc;
use entity::star_color::StarColor;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct HouseUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HouseUserRepository<'a, C> {
    /// Creates a new instance of [`HouseUserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new house user
    ///
    /// Fails with a unique constraint violation if the color is already in use within the house.
    pub async fn create(
        &self,
        house_id: i32,
        name: String,
        color: StarColor,
    ) -> Result<entity::house_user::Model, DbErr> {
        let user = entity::house_user::ActiveModel {
            house_id: ActiveValue::Set(house_id),
            name: ActiveValue::Set(name),
            color: ActiveValue::Set(color),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::house_user::Model>, DbErr> {
        entity::prelude::HouseUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_house_and_color(
        &self,
        house_id: i32,
        color: StarColor,
    ) -> Result<Option<entity::house_user::Model>, DbErr> {
        entity::prelude::HouseUser::find()
            .filter(entity::house_user::Column::HouseId.eq(house_id))
            .filter(entity::house_user::Column::Color.eq(color))
            .one(self.db)
            .await
    }

    /// Gets the users of a house in the order they joined
    pub async fn get_many_by_house_id(
        &self,
        house_id: i32,
    ) -> Result<Vec<entity::house_user::Model>, DbErr> {
        entity::prelude::HouseUser::find()
            .filter(entity::house_user::Column::HouseId.eq(house_id))
            .order_by_asc(entity::house_user::Column::CreatedAt)
            .order_by_asc(entity::house_user::Column::Id)
            .all(self.db)
            .await
    }
}
