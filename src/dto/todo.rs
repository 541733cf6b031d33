use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
    pub todo_id: i64,
    pub category_id: Option<i64>,
    pub todo_content: String,
    pub todo_year: i32,
    pub todo_month: i32,
    pub todo_day: i32,
    pub is_completed: bool,
    pub is_favorite: bool,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoDto {
    #[serde(default)]
    pub category_id: Option<i64>,
    pub todo_content: String,
    pub todo_year: i32,
    pub todo_month: i32,
    pub todo_day: i32,
}

/// Full replacement payload for a todo; every mutable field is applied.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoDto {
    pub todo_id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    pub todo_content: String,
    pub todo_year: i32,
    pub todo_month: i32,
    pub todo_day: i32,
    pub is_completed: bool,
    pub is_favorite: bool,
}

/// Lightweight projection for client-side search and filtering.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchTodoDto {
    pub todo_id: i64,
    pub todo_content: String,
    pub todo_year: i32,
    pub todo_month: i32,
    pub todo_day: i32,
    pub category_id: Option<i64>,
}

/// Request body for loading a favorite (routine) todo onto a target date.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoadFavoriteDto {
    pub favorite_id: i64,
    pub year: i32,
    pub month: i32,
    pub day: i32,
}
