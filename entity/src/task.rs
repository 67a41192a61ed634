use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub section_id: i32,
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::house_section::Entity",
        from = "Column::SectionId",
        to = "super::house_section::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    HouseSection,
    #[sea_orm(has_many = "super::star::Entity")]
    Star,
}

impl Related<super::house_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HouseSection.def()
    }
}

impl Related<super::star::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Star.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
