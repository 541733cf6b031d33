use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    dto::{
        api::Envelope,
        todo::{CreateTodoDto, LoadFavoriteDto, SearchTodoDto, TodoDto, UpdateTodoDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::todo::{CreateTodoParams, Todo, TodoDate, UpdateTodoParams},
    service::todo::TodoService,
    state::AppState,
};

/// Tag for grouping todo endpoints in OpenAPI documentation
pub static TODO_TAG: &str = "todo";

/// Create a new todo.
///
/// The category, when provided, must belong to the logged-in member; otherwise
/// nothing is persisted.
///
/// # Returns
/// - `201 Created` - Todo created
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Category missing or owned by another member
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/dailys/todo",
    tag = TODO_TAG,
    request_body = CreateTodoDto,
    responses(
        (status = 201, description = "Todo created", body = Envelope<TodoDto>),
        (status = 401, description = "Login is required"),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn create_todo(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTodoDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let params = CreateTodoParams::from_dto(member.id, payload);

    let todo = TodoService::new(&state.db).create(params).await?;

    Ok(Envelope::success(
        StatusCode::CREATED,
        "Todo created",
        todo.into_dto(),
    ))
}

/// Update an existing todo.
///
/// Applies every mutable field from the payload. Both the todo and the
/// incoming category must belong to the logged-in member.
///
/// # Returns
/// - `200 OK` - Todo updated
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Todo or category missing, or owned by another member
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/dailys/todo",
    tag = TODO_TAG,
    request_body = UpdateTodoDto,
    responses(
        (status = 200, description = "Todo updated", body = Envelope<TodoDto>),
        (status = 401, description = "Login is required"),
        (status = 404, description = "Todo or category not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn update_todo(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateTodoDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let params = UpdateTodoParams::from_dto(member.id, payload);

    let todo = TodoService::new(&state.db).update(params).await?;

    Ok(Envelope::success(
        StatusCode::OK,
        "Todo updated",
        todo.into_dto(),
    ))
}

/// Delete a todo.
///
/// Deletion is scoped to the logged-in member; another member's todo id
/// reports not found and deletes nothing.
///
/// # Returns
/// - `200 OK` - Todo deleted
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Todo missing or owned by another member
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/dailys/todo/{todo_id}",
    tag = TODO_TAG,
    params(
        ("todo_id" = i64, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo deleted"),
        (status = 401, description = "Login is required"),
        (status = 404, description = "Todo not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    session: Session,
    Path(todo_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    TodoService::new(&state.db).delete(todo_id, member.id).await?;

    Ok(Envelope::message(StatusCode::OK, "Todo deleted"))
}

/// Load a favorite (routine) todo onto a target date.
///
/// Clones the favorite's content and category into a fresh todo on the given
/// date. The favorite must belong to the logged-in member.
///
/// # Returns
/// - `201 Created` - New todo created from the favorite
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Favorite missing or owned by another member
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/dailys/favorites",
    tag = TODO_TAG,
    request_body = LoadFavoriteDto,
    responses(
        (status = 201, description = "Todo created from favorite", body = Envelope<TodoDto>),
        (status = 401, description = "Login is required"),
        (status = 404, description = "Favorite todo not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn load_favorite(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoadFavoriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let date = TodoDate::new(payload.year, payload.month, payload.day);

    let todo = TodoService::new(&state.db)
        .load_favorite(payload.favorite_id, member.id, date)
        .await?;

    Ok(Envelope::success(
        StatusCode::CREATED,
        "Todo created from favorite",
        todo.into_dto(),
    ))
}

/// Get all of the member's todos for client-side search.
///
/// A member with no todos gets an empty list.
///
/// # Returns
/// - `200 OK` - Every todo owned by the member
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/todos",
    tag = TODO_TAG,
    responses(
        (status = 200, description = "All todos for the member", body = Envelope<Vec<SearchTodoDto>>),
        (status = 401, description = "Login is required"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn search_todos(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let todos = TodoService::new(&state.db)
        .find_all_by_member(member.id)
        .await?;

    Ok(Envelope::success(
        StatusCode::OK,
        "success",
        todos
            .into_iter()
            .map(Todo::into_search_dto)
            .collect::<Vec<_>>(),
    ))
}
