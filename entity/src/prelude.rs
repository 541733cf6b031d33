pub use super::category::Entity as Category;
pub use super::member::Entity as Member;
pub use super::todo::Entity as Todo;
