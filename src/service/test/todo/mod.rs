use crate::{
    error::AppError,
    model::todo::{CreateTodoParams, TodoDate, UpdateTodoParams},
    service::todo::TodoService,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::todo::TodoFactory};

mod update;
