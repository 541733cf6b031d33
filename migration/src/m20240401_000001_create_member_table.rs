use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Member::Id))
                    .col(string_uniq(Member::Email))
                    .col(string(Member::Password))
                    .col(string(Member::Nickname))
                    .col(string_null(Member::ProfileImage))
                    .col(timestamp(Member::CreatedAt))
                    .col(timestamp(Member::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    Email,
    Password,
    Nickname,
    ProfileImage,
    CreatedAt,
    UpdatedAt,
}
