use sea_orm_migration::{prelude::*, schema::*};

use super::m20240401_000001_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Category::Id))
                    .col(big_integer(Category::MemberId))
                    .col(string(Category::CategoryName))
                    .col(string(Category::CategoryColor))
                    .col(timestamp(Category::CreatedAt))
                    .col(timestamp(Category::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_member_id")
                            .from(Category::Table, Category::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Id,
    MemberId,
    CategoryName,
    CategoryColor,
    CreatedAt,
    UpdatedAt,
}
