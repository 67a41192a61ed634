use chrono::Utc;
use entity::star_color::StarColor;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Placement of a star on top of a task's pile, generated by the client
pub struct StarPlacement {
    pub rotation_degrees: f64,
    pub x_offset: f64,
    pub y_offset: f64,
}

pub struct StarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarRepository<'a, C> {
    /// Creates a new instance of [`StarRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        task_id: i32,
        color: StarColor,
        placement: StarPlacement,
    ) -> Result<entity::star::Model, DbErr> {
        let star = entity::star::ActiveModel {
            task_id: ActiveValue::Set(task_id),
            color: ActiveValue::Set(color),
            rotation_degrees: ActiveValue::Set(placement.rotation_degrees),
            x_offset: ActiveValue::Set(placement.x_offset),
            y_offset: ActiveValue::Set(placement.y_offset),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        star.insert(self.db).await
    }

    /// Gets the stars of the provided tasks, newest first
    pub async fn get_many_by_task_ids(
        &self,
        task_ids: &[i32],
    ) -> Result<Vec<entity::star::Model>, DbErr> {
        if task_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Star::find()
            .filter(entity::star::Column::TaskId.is_in(task_ids.iter().copied()))
            .order_by_desc(entity::star::Column::CreatedAt)
            .order_by_desc(entity::star::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every star given for a task, returning the amount deleted
    pub async fn delete_by_task_id(&self, task_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Star::delete_many()
            .filter(entity::star::Column::TaskId.eq(task_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
