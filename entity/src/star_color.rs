use sea_orm::entity::prelude::*;

/// Closed set of colors shared by house users (as their identity badge) and stars.
///
/// Stored as the lowercase color id. The order of [`StarColor::ALL`] is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum StarColor {
    #[sea_orm(string_value = "red")]
    Red,
    #[sea_orm(string_value = "blue")]
    Blue,
    #[sea_orm(string_value = "green")]
    Green,
    #[sea_orm(string_value = "yellow")]
    Yellow,
    #[sea_orm(string_value = "purple")]
    Purple,
    #[sea_orm(string_value = "pink")]
    Pink,
}

impl StarColor {
    pub const ALL: [StarColor; 6] = [
        StarColor::Red,
        StarColor::Blue,
        StarColor::Green,
        StarColor::Yellow,
        StarColor::Purple,
        StarColor::Pink,
    ];

    /// Identifier used on the wire and in the database
    pub const fn id(&self) -> &'static str {
        match self {
            StarColor::Red => "red",
            StarColor::Blue => "blue",
            StarColor::Green => "green",
            StarColor::Yellow => "yellow",
            StarColor::Purple => "purple",
            StarColor::Pink => "pink",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            StarColor::Red => "Red",
            StarColor::Blue => "Blue",
            StarColor::Green => "Green",
            StarColor::Yellow => "Yellow",
            StarColor::Purple => "Purple",
            StarColor::Pink => "Pink",
        }
    }

    /// Style token the frontend renders the star with
    pub const fn style_class(&self) -> &'static str {
        match self {
            StarColor::Red => "text-red-500",
            StarColor::Blue => "text-blue-500",
            StarColor::Green => "text-green-500",
            StarColor::Yellow => "text-yellow-500",
            StarColor::Purple => "text-purple-500",
            StarColor::Pink => "text-pink-500",
        }
    }

    /// Looks up a color by its exact id, `None` for anything outside the set.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.id() == id)
    }
}
