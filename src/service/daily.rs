//! Daily view composition.
//!
//! Assembles a member's todos for one calendar date, optionally narrowed by
//! category, together with the member's category list. Purely a filtered
//! projection; nothing here mutates state, and empty days are valid results.

use sea_orm::DatabaseConnection;

use crate::{
    data::{category::CategoryRepository, todo::TodoRepository},
    error::AppError,
    model::{
        daily::{CategoryDaily, DailyPage, TodoCreatePage, TodoUpdatePage},
        todo::TodoDate,
    },
};

pub struct DailyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DailyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Daily page for the server's current date.
    pub async fn show_daily_page(&self, member_id: i64) -> Result<DailyPage, AppError> {
        self.show_daily(member_id, TodoDate::today()).await
    }

    /// Daily page for an arbitrary date.
    pub async fn show_daily(&self, member_id: i64, date: TodoDate) -> Result<DailyPage, AppError> {
        let categories = CategoryRepository::new(self.db)
            .find_all_by_member(member_id)
            .await?;

        let todos = TodoRepository::new(self.db)
            .find_by_member_and_date(member_id, &date)
            .await?;

        Ok(DailyPage {
            date,
            categories,
            todos,
        })
    }

    /// Daily page narrowed to one category.
    ///
    /// The category is resolved through the member-scoped lookup first, so a
    /// category owned by another member fails with NotFound before any todos
    /// are read.
    pub async fn show_daily_by_category(
        &self,
        member_id: i64,
        category_id: i64,
        date: TodoDate,
    ) -> Result<CategoryDaily, AppError> {
        let category = CategoryRepository::new(self.db)
            .find_by_id_and_member(category_id, member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        let todos = TodoRepository::new(self.db)
            .find_by_member_category_and_date(member_id, category_id, &date)
            .await?;

        Ok(CategoryDaily { category, todos })
    }

    /// Data for the "add todo" form: target date plus category choices.
    pub async fn show_todo_create_page(
        &self,
        member_id: i64,
        date: TodoDate,
    ) -> Result<TodoCreatePage, AppError> {
        let categories = CategoryRepository::new(self.db)
            .find_all_by_member(member_id)
            .await?;

        Ok(TodoCreatePage { date, categories })
    }

    /// Data for the "edit todo" form: the todo plus category choices.
    pub async fn show_todo_update_page(
        &self,
        todo_id: i64,
        member_id: i64,
    ) -> Result<TodoUpdatePage, AppError> {
        let todo = TodoRepository::new(self.db)
            .find_by_id_and_member(todo_id, member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))?;

        let categories = CategoryRepository::new(self.db)
            .find_all_by_member(member_id)
            .await?;

        Ok(TodoUpdatePage { todo, categories })
    }
}
