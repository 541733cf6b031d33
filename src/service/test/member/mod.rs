use crate::{
    error::AppError,
    model::member::{LoginParams, SignupParams},
    service::member::MemberService,
    util::password,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod login;
