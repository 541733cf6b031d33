//! Derived daily view models.
//!
//! These are projections assembled from a member's todos and categories for one
//! calendar date; nothing here is persisted.

use crate::{
    dto::daily::{CategoryDailyDto, DailyPageDto, TodoCreatePageDto, TodoUpdatePageDto},
    model::{
        category::Category,
        todo::{Todo, TodoDate},
    },
};

pub struct DailyPage {
    pub date: TodoDate,
    pub categories: Vec<Category>,
    pub todos: Vec<Todo>,
}

impl DailyPage {
    pub fn into_dto(self) -> DailyPageDto {
        DailyPageDto {
            todo_year: self.date.year,
            todo_month: self.date.month,
            todo_day: self.date.day,
            categories: self.categories.into_iter().map(Category::into_dto).collect(),
            todos: self.todos.into_iter().map(Todo::into_dto).collect(),
        }
    }
}

pub struct CategoryDaily {
    pub category: Category,
    pub todos: Vec<Todo>,
}

impl CategoryDaily {
    pub fn into_dto(self) -> CategoryDailyDto {
        CategoryDailyDto {
            category: self.category.into_dto(),
            todos: self.todos.into_iter().map(Todo::into_dto).collect(),
        }
    }
}

pub struct TodoCreatePage {
    pub date: TodoDate,
    pub categories: Vec<Category>,
}

impl TodoCreatePage {
    pub fn into_dto(self) -> TodoCreatePageDto {
        TodoCreatePageDto {
            todo_year: self.date.year,
            todo_month: self.date.month,
            todo_day: self.date.day,
            categories: self.categories.into_iter().map(Category::into_dto).collect(),
        }
    }
}

pub struct TodoUpdatePage {
    pub todo: Todo,
    pub categories: Vec<Category>,
}

impl TodoUpdatePage {
    pub fn into_dto(self) -> TodoUpdatePageDto {
        TodoUpdatePageDto {
            todo: self.todo.into_dto(),
            categories: self.categories.into_iter().map(Category::into_dto).collect(),
        }
    }
}
