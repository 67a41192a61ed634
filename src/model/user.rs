use chrono::NaiveDateTime;
use entity::star_color::StarColor;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HouseUserDto {
    pub id: i32,
    pub house_id: i32,
    pub name: String,
    /// Color id, unique within the house
    pub color: String,
    pub created_at: NaiveDateTime,
}

/// Display information for one of the fixed star colors
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ColorDto {
    pub id: String,
    pub name: String,
    pub class: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHouseUserDto {
    pub house_id: Option<i32>,
    pub name: Option<String>,
    pub color: Option<String>,
}

impl From<entity::house_user::Model> for HouseUserDto {
    fn from(user: entity::house_user::Model) -> Self {
        Self {
            id: user.id,
            house_id: user.house_id,
            name: user.name,
            color: user.color.id().to_string(),
            created_at: user.created_at,
        }
    }
}

impl From<StarColor> for ColorDto {
    fn from(color: StarColor) -> Self {
        Self {
            id: color.id().to_string(),
            name: color.name().to_string(),
            class: color.style_class().to_string(),
        }
    }
}
