use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_house_section::HouseSection;

static IDX_TASK_SECTION_ID: &str = "idx_task_section_id";
static FK_TASK_SECTION_ID: &str = "fk_task_section_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(pk_auto(Task::Id))
                    .col(integer(Task::SectionId))
                    .col(string(Task::Name))
                    .col(timestamp(Task::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TASK_SECTION_ID)
                            .from(Task::Table, Task::SectionId)
                            .to(HouseSection::Table, HouseSection::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TASK_SECTION_ID)
                    .table(Task::Table)
                    .col(Task::SectionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TASK_SECTION_ID)
                    .table(Task::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Task::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Task {
    Table,
    Id,
    SectionId,
    Name,
    CreatedAt,
}
