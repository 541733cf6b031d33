use crate::{
    data::todo::TodoRepository,
    model::todo::{CreateTodoParams, TodoDate, UpdateTodoParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::todo::TodoFactory};

mod delete_by_id_and_member;
mod find_all_by_member;
mod update;
