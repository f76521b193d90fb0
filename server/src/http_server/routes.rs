use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::get,
    Router,
};

use super::{admin, TAILWIND_STYLES};
use crate::AppState;

pub(crate) fn make_router() -> Router<AppState> {
    Router::new()
        .route("/styles/tailwind.css", get(|| async { TAILWIND_STYLES }))
        .route("/", get(|| async { Redirect::permanent("/admin/posts") }))
        .route("/admin/posts", get(admin::posts::posts_index))
        .route(
            "/admin/posts/{id}/delete",
            get(admin::posts::delete_post_confirm).post(admin::posts::delete_post),
        )
        .fallback(fallback)
}

async fn fallback() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
