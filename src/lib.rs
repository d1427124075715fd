//! Fyyur: a booking directory for live-music venues, artists and the shows
//! that connect them.
//!
//! The library holds everything the server binary runs and what the
//! integration tests drive.

pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod logging;
pub mod services;
pub mod state;
pub mod templates;
pub mod test_utils;

use axum::Router;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, services::ServeDir,
    trace::TraceLayer,
};

use state::AppState;

/// The full application: pages, static assets, 404 fallback and middleware.
pub fn create_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(handlers::html_routes())
        .nest_service("/static", static_dir)
        .fallback(handlers::pages::not_found)
        .layer(CatchPanicLayer::custom(handlers::pages::panic_page))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
