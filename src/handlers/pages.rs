use std::any::Any;

use axum::{
    extract::Query,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::templates::{error_page, home_page};

use super::NoticeQuery;

/// Landing page, with the notice left by the last create if any
pub async fn index(Query(query): Query<NoticeQuery>) -> Html<String> {
    Html(home_page(query.message()).into_string())
}

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> (StatusCode, Html<String>) {
    tracing::debug!("No route for {}", uri);
    (
        StatusCode::NOT_FOUND,
        Html(error_page(StatusCode::NOT_FOUND, "The page you are looking for does not exist.").into_string()),
    )
}

/// Turns a handler panic into the generic 500 page.
pub fn panic_page(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(error_page(StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred.").into_string()),
    )
        .into_response()
}
