use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "house")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Lowercase slug, also used as the house URL path segment
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::house_section::Entity")]
    HouseSection,
    #[sea_orm(has_many = "super::house_user::Entity")]
    HouseUser,
}

impl Related<super::house_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HouseSection.def()
    }
}

impl Related<super::house_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HouseUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
