use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};

use crate::{
    error::Result,
    forms::{FormPairs, ShowForm},
    services::{in_transaction, mutations, queries},
    state::AppState,
    templates::{show_form_page, shows_page},
};

use super::redirect_with_notice;

/// Every booked show, soonest first
pub async fn list_shows(State(state): State<AppState>) -> Result<Html<String>> {
    let shows = queries::list_shows(&state.db).await?;
    Ok(Html(shows_page(&shows).into_string()))
}

pub async fn create_show_form(State(state): State<AppState>) -> Result<Html<String>> {
    let artists = queries::list_artists(&state.db).await?;
    let venues = queries::venue_choices(&state.db).await?;
    Ok(Html(show_form_page(&artists, &venues).into_string()))
}

/// Malformed ids or start times are rejected before any transaction starts
pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(pairs): Form<FormPairs>,
) -> Result<Redirect> {
    let form = ShowForm::from_pairs(&pairs)?;
    let (artist_id, venue_id) = (form.artist_id, form.venue_id);

    let change = in_transaction(&state.db, move |txn| {
        Box::pin(async move { mutations::create_show(txn, &form).await })
    })
    .await
    .map_err(|e| {
        tracing::error!(
            "Show for artist {} at venue {} could not be listed: {}",
            artist_id,
            venue_id,
            e
        );
        e
    })?;

    Ok(redirect_with_notice("/", &change.to_string()))
}
