use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{category, daily, member, todo},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        member::signup,
        member::email_validate,
        member::verify_code,
        member::login,
        member::logout,
        daily::main_page,
        daily::daily_page,
        daily::daily_by_date,
        daily::daily_by_category,
        daily::todo_create_page,
        daily::todo_update_page,
        todo::create_todo,
        todo::update_todo,
        todo::delete_todo,
        todo::load_favorite,
        todo::search_todos,
        category::get_categories,
        category::create_category,
        category::update_category,
        category::delete_category,
    ),
    tags(
        (name = "member", description = "Signup, email verification and login"),
        (name = "daily", description = "Daily log views"),
        (name = "todo", description = "Todo lifecycle"),
        (name = "category", description = "Category management")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/members/signup", post(member::signup))
        .route(
            "/api/members/signup/email-validate",
            post(member::email_validate),
        )
        .route("/api/members/signup/verifycode", post(member::verify_code))
        .route("/api/members/login", post(member::login))
        .route("/api/members/logout", post(member::logout))
        .route("/api/main", get(daily::main_page))
        .route("/api/dailys", get(daily::daily_page))
        .route("/api/dailys/{year}/{month}/{day}", get(daily::daily_by_date))
        .route(
            "/api/dailys/{year}/{month}/{day}/{category_id}",
            get(daily::daily_by_category),
        )
        .route(
            "/api/dailys/todo",
            get(daily::todo_create_page)
                .post(todo::create_todo)
                .put(todo::update_todo),
        )
        .route(
            "/api/dailys/todo/{todo_id}",
            get(daily::todo_update_page).delete(todo::delete_todo),
        )
        .route("/api/dailys/favorites", post(todo::load_favorite))
        .route("/api/todos", get(todo::search_todos))
        .route(
            "/api/categories",
            get(category::get_categories).post(category::create_category),
        )
        .route(
            "/api/categories/{category_id}",
            put(category::update_category).delete(category::delete_category),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
