use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::{category::CategoryDto, todo::TodoDto};

/// Daily log page: all of a member's todos for one date plus their categories.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyPageDto {
    pub todo_year: i32,
    pub todo_month: i32,
    pub todo_day: i32,
    pub categories: Vec<CategoryDto>,
    pub todos: Vec<TodoDto>,
}

/// Daily log narrowed to a single category.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDailyDto {
    pub category: CategoryDto,
    pub todos: Vec<TodoDto>,
}

/// Data backing the "add todo" form: the target date and category choices.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoCreatePageDto {
    pub todo_year: i32,
    pub todo_month: i32,
    pub todo_day: i32,
    pub categories: Vec<CategoryDto>,
}

/// Data backing the "edit todo" form: the current todo and category choices.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoUpdatePageDto {
    pub todo: TodoDto,
    pub categories: Vec<CategoryDto>,
}
