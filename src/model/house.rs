use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::user::{ColorDto, HouseUserDto};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HouseDto {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionDto {
    pub id: i32,
    pub house_id: i32,
    pub name: String,
    pub archived: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: i32,
    pub section_id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StarDto {
    pub id: i32,
    pub task_id: i32,
    /// Color id, one of the ids listed by [`ColorDto`]
    pub color: String,
    pub rotation_degrees: f64,
    pub x_offset: f64,
    pub y_offset: f64,
    pub created_at: NaiveDateTime,
}

/// Everything the house page renders: active sections with their tasks & star piles,
/// the house's users and the colors nobody has claimed yet.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HouseViewDto {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    /// Non-archived sections, oldest first
    pub sections: Vec<SectionViewDto>,
    /// Users of the house, oldest first
    pub users: Vec<HouseUserDto>,
    pub available_colors: Vec<ColorDto>,
    /// The user this browser session belongs to in this house, if onboarding was completed
    pub current_user: Option<HouseUserDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionViewDto {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    /// Tasks, oldest first
    pub tasks: Vec<TaskViewDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskViewDto {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    /// Stars given for the task, newest first so the latest lands on top of the pile
    pub stars: Vec<StarDto>,
}

/// Management view of a house, includes archived sections but no stars or users.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HouseSettingsDto {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub sections: Vec<SettingsSectionDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSectionDto {
    pub id: i32,
    pub name: String,
    pub archived: bool,
    pub created_at: NaiveDateTime,
    pub tasks: Vec<TaskDto>,
}

/// Form submitted by the landing page to create a new house
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHouseDto {
    pub house_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionDto {
    pub house_id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveSectionDto {
    pub section_id: Option<i32>,
    pub archived: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskDto {
    pub section_id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskDto {
    pub task_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStarDto {
    pub task_id: Option<i32>,
    pub color: Option<String>,
    pub rotation_degrees: Option<f64>,
    pub x_offset: Option<f64>,
    pub y_offset: Option<f64>,
}

impl From<entity::house::Model> for HouseDto {
    fn from(house: entity::house::Model) -> Self {
        Self {
            id: house.id,
            name: house.name,
            created_at: house.created_at,
        }
    }
}

impl From<entity::house_section::Model> for SectionDto {
    fn from(section: entity::house_section::Model) -> Self {
        Self {
            id: section.id,
            house_id: section.house_id,
            name: section.name,
            archived: section.archived,
            created_at: section.created_at,
        }
    }
}

impl From<entity::task::Model> for TaskDto {
    fn from(task: entity::task::Model) -> Self {
        Self {
            id: task.id,
            section_id: task.section_id,
            name: task.name,
            created_at: task.created_at,
        }
    }
}

impl From<entity::star::Model> for StarDto {
    fn from(star: entity::star::Model) -> Self {
        Self {
            id: star.id,
            task_id: star.task_id,
            color: star.color.id().to_string(),
            rotation_degrees: star.rotation_degrees,
            x_offset: star.x_offset,
            y_offset: star.y_offset,
            created_at: star.created_at,
        }
    }
}
