use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_house::House;

static IDX_HOUSE_USER_HOUSE_ID_COLOR: &str = "idx_house_user_house_id_color";
static FK_HOUSE_USER_HOUSE_ID: &str = "fk_house_user_house_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HouseUser::Table)
                    .if_not_exists()
                    .col(pk_auto(HouseUser::Id))
                    .col(integer(HouseUser::HouseId))
                    .col(string(HouseUser::Name))
                    .col(string_len(HouseUser::Color, 16))
                    .col(timestamp(HouseUser::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_HOUSE_USER_HOUSE_ID)
                            .from(HouseUser::Table, HouseUser::HouseId)
                            .to(House::Table, House::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HOUSE_USER_HOUSE_ID_COLOR)
                    .table(HouseUser::Table)
                    .col(HouseUser::HouseId)
                    .col(HouseUser::Color)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_HOUSE_USER_HOUSE_ID_COLOR)
                    .table(HouseUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HouseUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum HouseUser {
    Table,
    Id,
    HouseId,
    Name,
    Color,
    CreatedAt,
}
