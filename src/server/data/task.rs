use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct TaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskRepository<'a, C> {
    /// Creates a new instance of [`TaskRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        section_id: i32,
        name: String,
    ) -> Result<entity::task::Model, DbErr> {
        let task = entity::task::ActiveModel {
            section_id: ActiveValue::Set(section_id),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        task.insert(self.db).await
    }

    /// Inserts several tasks for one section, keeping the order of `names`
    pub async fn create_many(&self, section_id: i32, names: &[&str]) -> Result<(), DbErr> {
        if names.is_empty() {
            return Ok(());
        }

        let now = Utc::now().naive_utc();
        let tasks = names.iter().map(|name| entity::task::ActiveModel {
            section_id: ActiveValue::Set(section_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::Task::insert_many(tasks).exec(self.db).await?;

        Ok(())
    }

    pub async fn get_by_id(&self, task_id: i32) -> Result<Option<entity::task::Model>, DbErr> {
        entity::prelude::Task::find_by_id(task_id).one(self.db).await
    }

    /// Gets the tasks of the provided sections in creation order
    pub async fn get_many_by_section_ids(
        &self,
        section_ids: &[i32],
    ) -> Result<Vec<entity::task::Model>, DbErr> {
        if section_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Task::find()
            .filter(entity::task::Column::SectionId.is_in(section_ids.iter().copied()))
            .order_by_asc(entity::task::Column::CreatedAt)
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a task
    ///
    /// # Returns
    /// - `true`: The task existed and was deleted
    /// - `false`: No task exists with the provided ID
    pub async fn delete(&self, task_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Task::delete_by_id(task_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
