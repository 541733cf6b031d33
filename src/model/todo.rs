use chrono::{Datelike, Local};

use crate::dto::todo::{CreateTodoDto, SearchTodoDto, TodoDto, UpdateTodoDto};

/// A calendar date as stored on a todo (year/month/day columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl TodoDate {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// The server's local date, used for the default daily view.
    pub fn today() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month() as i32,
            day: today.day() as i32,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Todo {
    pub id: i64,
    pub member_id: i64,
    pub category_id: Option<i64>,
    pub content: String,
    pub date: TodoDate,
    pub is_completed: bool,
    pub is_favorite: bool,
}

impl Todo {
    pub fn from_entity(entity: entity::todo::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            category_id: entity.category_id,
            content: entity.todo_content,
            date: TodoDate::new(entity.todo_year, entity.todo_month, entity.todo_day),
            is_completed: entity.is_completed,
            is_favorite: entity.is_favorite,
        }
    }

    pub fn into_dto(self) -> TodoDto {
        TodoDto {
            todo_id: self.id,
            category_id: self.category_id,
            todo_content: self.content,
            todo_year: self.date.year,
            todo_month: self.date.month,
            todo_day: self.date.day,
            is_completed: self.is_completed,
            is_favorite: self.is_favorite,
        }
    }

    pub fn into_search_dto(self) -> SearchTodoDto {
        SearchTodoDto {
            todo_id: self.id,
            todo_content: self.content,
            todo_year: self.date.year,
            todo_month: self.date.month,
            todo_day: self.date.day,
            category_id: self.category_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTodoParams {
    pub member_id: i64,
    pub category_id: Option<i64>,
    pub content: String,
    pub date: TodoDate,
}

impl CreateTodoParams {
    pub fn from_dto(member_id: i64, dto: CreateTodoDto) -> Self {
        Self {
            member_id,
            category_id: dto.category_id,
            content: dto.todo_content,
            date: TodoDate::new(dto.todo_year, dto.todo_month, dto.todo_day),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTodoParams {
    pub todo_id: i64,
    pub member_id: i64,
    pub category_id: Option<i64>,
    pub content: String,
    pub date: TodoDate,
    pub is_completed: bool,
    pub is_favorite: bool,
}

impl UpdateTodoParams {
    pub fn from_dto(member_id: i64, dto: UpdateTodoDto) -> Self {
        Self {
            todo_id: dto.todo_id,
            member_id,
            category_id: dto.category_id,
            content: dto.todo_content,
            date: TodoDate::new(dto.todo_year, dto.todo_month, dto.todo_day),
            is_completed: dto.is_completed,
            is_favorite: dto.is_favorite,
        }
    }
}
