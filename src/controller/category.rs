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
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
    service::category::CategoryService,
    state::AppState,
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Get all categories owned by the member.
///
/// # Returns
/// - `200 OK` - The member's categories
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories for the member", body = Envelope<Vec<CategoryDto>>),
        (status = 401, description = "Login is required"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let categories = CategoryService::new(&state.db)
        .find_all_by_member(member.id)
        .await?;

    Ok(Envelope::success(
        StatusCode::OK,
        "success",
        categories
            .into_iter()
            .map(Category::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Create a new category.
///
/// # Returns
/// - `201 Created` - Category created
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = Envelope<CategoryDto>),
        (status = 401, description = "Login is required"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let params = CreateCategoryParams::from_dto(member.id, payload);

    let category = CategoryService::new(&state.db).create(params).await?;

    Ok(Envelope::success(
        StatusCode::CREATED,
        "Category created",
        category.into_dto(),
    ))
}

/// Update a category.
///
/// The category must belong to the logged-in member.
///
/// # Returns
/// - `200 OK` - Category updated
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Category missing or owned by another member
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i64, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = Envelope<CategoryDto>),
        (status = 401, description = "Login is required"),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i64>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let params = UpdateCategoryParams::from_dto(category_id, member.id, payload);

    let category = CategoryService::new(&state.db).update(params).await?;

    Ok(Envelope::success(
        StatusCode::OK,
        "Category updated",
        category.into_dto(),
    ))
}

/// Delete a category.
///
/// Deletion is scoped to the logged-in member. Todos referencing the deleted
/// category keep existing with their category cleared.
///
/// # Returns
/// - `200 OK` - Category deleted
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Category missing or owned by another member
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 401, description = "Login is required"),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    CategoryService::new(&state.db)
        .delete(category_id, member.id)
        .await?;

    Ok(Envelope::message(StatusCode::OK, "Category deleted"))
}
