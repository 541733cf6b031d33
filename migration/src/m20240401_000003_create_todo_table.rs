use sea_orm_migration::{prelude::*, schema::*};

use super::m20240401_000001_create_member_table::Member;
use super::m20240401_000002_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Todo::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Todo::Id))
                    .col(big_integer(Todo::MemberId))
                    .col(big_integer_null(Todo::CategoryId))
                    .col(string(Todo::TodoContent))
                    .col(integer(Todo::TodoYear))
                    .col(integer(Todo::TodoMonth))
                    .col(integer(Todo::TodoDay))
                    .col(boolean(Todo::IsCompleted))
                    .col(boolean(Todo::IsFavorite))
                    .col(timestamp(Todo::CreatedAt))
                    .col(timestamp(Todo::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_todo_member_id")
                            .from(Todo::Table, Todo::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_todo_category_id")
                            .from(Todo::Table, Todo::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_todo_member_date")
                            .col(Todo::MemberId)
                            .col(Todo::TodoYear)
                            .col(Todo::TodoMonth)
                            .col(Todo::TodoDay),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Todo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Todo {
    Table,
    Id,
    MemberId,
    CategoryId,
    TodoContent,
    TodoYear,
    TodoMonth,
    TodoDay,
    IsCompleted,
    IsFavorite,
    CreatedAt,
    UpdatedAt,
}
