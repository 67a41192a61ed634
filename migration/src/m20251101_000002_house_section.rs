use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_house::House;

static IDX_HOUSE_SECTION_HOUSE_ID: &str = "idx_house_section_house_id";
static FK_HOUSE_SECTION_HOUSE_ID: &str = "fk_house_section_house_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HouseSection::Table)
                    .if_not_exists()
                    .col(pk_auto(HouseSection::Id))
                    .col(integer(HouseSection::HouseId))
                    .col(string(HouseSection::Name))
                    .col(boolean(HouseSection::Archived).default(false))
                    .col(timestamp(HouseSection::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_HOUSE_SECTION_HOUSE_ID)
                            .from(HouseSection::Table, HouseSection::HouseId)
                            .to(House::Table, House::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HOUSE_SECTION_HOUSE_ID)
                    .table(HouseSection::Table)
                    .col(HouseSection::HouseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_HOUSE_SECTION_HOUSE_ID)
                    .table(HouseSection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HouseSection::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HouseSection {
    Table,
    Id,
    HouseId,
    Name,
    Archived,
    CreatedAt,
}
