pub mod artists;
pub mod pages;
pub mod shows;
pub mod venues;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::Redirect,
    routing::{get, post},
    Router,
};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, state::AppState};

pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))

        // Venues
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route("/venues/create", get(venues::create_venue_form).post(venues::create_venue_submission))
        .route("/venues/:id", get(venues::show_venue))
        .route("/venues/:id/edit", get(venues::edit_venue_form).post(venues::edit_venue_submission))
        .route("/venues/:id/delete", get(venues::delete_venue))

        // Artists
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route("/artists/create", get(artists::create_artist_form).post(artists::create_artist_submission))
        .route("/artists/:id", get(artists::show_artist))
        .route("/artists/:id/edit", get(artists::edit_artist_form).post(artists::edit_artist_submission))
        .route("/artists/:id/delete", get(artists::delete_artist))

        // Shows
        .route("/shows", get(shows::list_shows))
        .route("/shows/create", get(shows::create_show_form).post(shows::create_show_submission))
}

/// The `:id` segment of a record route. Anything that is not an `i32`
/// is answered with the 404 page, as if the route did not exist.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                tracing::debug!("Unusable record id in {}: {}", parts.uri, rejection);
                Err(AppError::NotFound(
                    "The page you are looking for does not exist.".to_string(),
                ))
            }
        }
    }
}

/// One-shot message carried on a redirect target.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

impl NoticeQuery {
    pub fn message(&self) -> Option<&str> {
        self.notice.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// Answer to the delete buttons' fetch: where the browser goes next.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub url: String,
}

/// `path?notice=<message>`, URL-encoded.
pub fn redirect_with_notice(path: &str, notice: &str) -> Redirect {
    Redirect::to(&format!("{}?notice={}", path, urlencoding::encode(notice)))
}

/// Evaluation instant for past/upcoming splits; start times are stored as UTC.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
