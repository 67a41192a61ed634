use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_task::Task;

static IDX_STAR_TASK_ID: &str = "idx_star_task_id";
static FK_STAR_TASK_ID: &str = "fk_star_task_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Star::Table)
                    .if_not_exists()
                    .col(pk_auto(Star::Id))
                    .col(integer(Star::TaskId))
                    .col(string_len(Star::Color, 16))
                    .col(double(Star::RotationDegrees))
                    .col(double(Star::XOffset))
                    .col(double(Star::YOffset))
                    .col(timestamp(Star::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STAR_TASK_ID)
                            .from(Star::Table, Star::TaskId)
                            .to(Task::Table, Task::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STAR_TASK_ID)
                    .table(Star::Table)
                    .col(Star::TaskId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STAR_TASK_ID)
                    .table(Star::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Star::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Star {
    Table,
    Id,
    TaskId,
    Color,
    RotationDegrees,
    XOffset,
    YOffset,
    CreatedAt,
}
