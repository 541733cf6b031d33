pub mod category;
pub mod daily;
pub mod member;
pub mod todo;
