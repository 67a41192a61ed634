pub use super::house::Entity as House;
pub use super::house_section::Entity as HouseSection;
pub use super::house_user::Entity as HouseUser;
pub use super::star::Entity as Star;
pub use super::star_color::StarColor;
pub use super::task::Entity as Task;
