use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    dto::{
        api::Envelope,
        daily::{CategoryDailyDto, DailyPageDto, TodoCreatePageDto, TodoUpdatePageDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::todo::TodoDate,
    service::daily::DailyService,
    state::AppState,
};

/// Tag for grouping daily view endpoints in OpenAPI documentation
pub static DAILY_TAG: &str = "daily";

#[derive(Deserialize)]
pub struct DateQuery {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

/// Get the main page (today's daily view).
///
/// Returns the logged-in member's categories and todos for the server's
/// current date.
///
/// # Returns
/// - `200 OK` - Daily view for today
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/main",
    tag = DAILY_TAG,
    responses(
        (status = 200, description = "Daily view for today", body = Envelope<DailyPageDto>),
        (status = 401, description = "Login is required"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn main_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let page = DailyService::new(&state.db)
        .show_daily_page(member.id)
        .await?;

    Ok(Envelope::success(
        StatusCode::OK,
        "success",
        page.into_dto(),
    ))
}

/// Get today's daily view.
///
/// Same composition as the main page: categories plus today's todos.
#[utoipa::path(
    get,
    path = "/api/dailys",
    tag = DAILY_TAG,
    responses(
        (status = 200, description = "Daily view for today", body = Envelope<DailyPageDto>),
        (status = 401, description = "Login is required"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn daily_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let page = DailyService::new(&state.db)
        .show_daily_page(member.id)
        .await?;

    Ok(Envelope::success(
        StatusCode::OK,
        "success",
        page.into_dto(),
    ))
}

/// Get the daily view for a specific date.
///
/// A date with no todos returns an empty list, not an error.
///
/// # Returns
/// - `200 OK` - Daily view for the date
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/dailys/{year}/{month}/{day}",
    tag = DAILY_TAG,
    params(
        ("year" = i32, Path, description = "Todo year"),
        ("month" = i32, Path, description = "Todo month"),
        ("day" = i32, Path, description = "Todo day")
    ),
    responses(
        (status = 200, description = "Daily view for the date", body = Envelope<DailyPageDto>),
        (status = 401, description = "Login is required"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn daily_by_date(
    State(state): State<AppState>,
    session: Session,
    Path((year, month, day)): Path<(i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let page = DailyService::new(&state.db)
        .show_daily(member.id, TodoDate::new(year, month, day))
        .await?;

    Ok(Envelope::success(
        StatusCode::OK,
        "success",
        page.into_dto(),
    ))
}

/// Get the daily view narrowed to one category.
///
/// The category must belong to the logged-in member.
///
/// # Returns
/// - `200 OK` - Category plus its todos for the date
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Category missing or owned by another member
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/dailys/{year}/{month}/{day}/{category_id}",
    tag = DAILY_TAG,
    params(
        ("year" = i32, Path, description = "Todo year"),
        ("month" = i32, Path, description = "Todo month"),
        ("day" = i32, Path, description = "Todo day"),
        ("category_id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Daily view for the category", body = Envelope<CategoryDailyDto>),
        (status = 401, description = "Login is required"),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn daily_by_category(
    State(state): State<AppState>,
    session: Session,
    Path((year, month, day, category_id)): Path<(i32, i32, i32, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let daily = DailyService::new(&state.db)
        .show_daily_by_category(member.id, category_id, TodoDate::new(year, month, day))
        .await?;

    Ok(Envelope::success(
        StatusCode::OK,
        "success",
        daily.into_dto(),
    ))
}

/// Get the data backing the "add todo" form.
///
/// Returns the target date and the member's category choices.
///
/// # Returns
/// - `200 OK` - Date and category choices
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/dailys/todo",
    tag = DAILY_TAG,
    params(
        ("year" = i32, Query, description = "Todo year"),
        ("month" = i32, Query, description = "Todo month"),
        ("day" = i32, Query, description = "Todo day")
    ),
    responses(
        (status = 200, description = "Todo create page data", body = Envelope<TodoCreatePageDto>),
        (status = 401, description = "Login is required"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn todo_create_page(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DateQuery>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let page = DailyService::new(&state.db)
        .show_todo_create_page(member.id, TodoDate::new(query.year, query.month, query.day))
        .await?;

    Ok(Envelope::success(
        StatusCode::OK,
        "success",
        page.into_dto(),
    ))
}

/// Get the data backing the "edit todo" form.
///
/// Returns the todo plus the member's category choices. The todo must belong
/// to the logged-in member.
///
/// # Returns
/// - `200 OK` - Todo and category choices
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Todo missing or owned by another member
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/dailys/todo/{todo_id}",
    tag = DAILY_TAG,
    params(
        ("todo_id" = i64, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo update page data", body = Envelope<TodoUpdatePageDto>),
        (status = 401, description = "Login is required"),
        (status = 404, description = "Todo not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn todo_update_page(
    State(state): State<AppState>,
    session: Session,
    Path(todo_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let page = DailyService::new(&state.db)
        .show_todo_update_page(todo_id, member.id)
        .await?;

    Ok(Envelope::success(
        StatusCode::OK,
        "success",
        page.into_dto(),
    ))
}
