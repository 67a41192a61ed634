use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::house::TaskDto,
    server::{
        data::{section::SectionRepository, star::StarRepository, task::TaskRepository},
        error::{not_found::NotFoundError, Error},
        util::validation::non_blank,
    },
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a task to the end of a section
    ///
    /// Archived sections accept new tasks, they show up in the settings view.
    pub async fn create_task(&self, section_id: i32, name: &str) -> Result<TaskDto, Error> {
        let name = non_blank(name)?;

        if SectionRepository::new(self.db)
            .get_by_id(section_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Section(section_id).into());
        }

        let task = TaskRepository::new(self.db)
            .create(section_id, name)
            .await?;

        tracing::info!(
            "Created task {} with ID {} in section ID {}",
            task.name,
            task.id,
            section_id
        );

        Ok(TaskDto::from(task))
    }

    /// Resolves the ID of the house a task belongs to through its section
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the task's house
    /// - `Err(Error::NotFoundError)` - Task does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_house_id(&self, task_id: i32) -> Result<i32, Error> {
        let Some(task) = TaskRepository::new(self.db).get_by_id(task_id).await? else {
            return Err(NotFoundError::Task(task_id).into());
        };

        let section = SectionRepository::new(self.db)
            .get_by_id(task.section_id)
            .await?
            .ok_or(NotFoundError::Section(task.section_id))?;

        Ok(section.house_id)
    }

    /// Permanently deletes a task along with every star given for it
    ///
    /// # Returns
    /// - `Ok(())` - Task and its stars were deleted
    /// - `Err(Error::NotFoundError)` - Task does not exist
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete_task(&self, task_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let task_repo = TaskRepository::new(&txn);

        if task_repo.get_by_id(task_id).await?.is_none() {
            return Err(NotFoundError::Task(task_id).into());
        }

        let deleted_stars = StarRepository::new(&txn).delete_by_task_id(task_id).await?;
        task_repo.delete(task_id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted task ID {} along with {} stars",
            task_id,
            deleted_stars
        );

        Ok(())
    }
}
