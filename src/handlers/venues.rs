use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};

use crate::{
    error::{AppError, Result},
    forms::{FormPairs, SearchForm, VenueForm},
    services::{genres, in_transaction, mutations, queries},
    state::AppState,
    templates::{search_results_page, venue_detail_page, venue_form_page, venues_page, VenueFormValues},
};

use super::{now, redirect_with_notice, DeleteResponse, NoticeQuery, RecordId};

/// Venues grouped by city and state
pub async fn list_venues(State(state): State<AppState>) -> Result<Html<String>> {
    let areas = queries::list_venues(&state.db, now()).await?;
    Ok(Html(venues_page(&areas).into_string()))
}

pub async fn search_venues(
    State(state): State<AppState>,
    Form(search): Form<SearchForm>,
) -> Result<Html<String>> {
    let results = queries::search_venues(&state.db, search.term()).await?;
    tracing::debug!("Venue search '{}' matched {}", search.term(), results.count);

    Ok(Html(search_results_page("/venues", search.term(), &results).into_string()))
}

/// Venue page; unknown ids go back to the landing page
pub async fn show_venue(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Query(query): Query<NoticeQuery>,
) -> Result<Response> {
    match queries::venue_detail(&state.db, id, now()).await? {
        Some(venue) => Ok(Html(venue_detail_page(&venue, query.message()).into_string()).into_response()),
        None => Ok(Redirect::to("/").into_response()),
    }
}

pub async fn create_venue_form(State(state): State<AppState>) -> Result<Html<String>> {
    let choices = genres::genre_choices(&state.db).await?;
    let page = venue_form_page("List a new venue", "/venues/create", &VenueFormValues::default(), &choices);
    Ok(Html(page.into_string()))
}

pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(pairs): Form<FormPairs>,
) -> Result<Redirect> {
    let form = VenueForm::from_pairs(&pairs);
    let name = form.name.clone();

    let change = in_transaction(&state.db, move |txn| {
        Box::pin(async move { mutations::create_venue(txn, &form).await })
    })
    .await
    .map_err(|e| {
        tracing::error!("Venue {} could not be listed: {}", name, e);
        e
    })?;

    Ok(redirect_with_notice("/", &change.to_string()))
}

pub async fn edit_venue_form(State(state): State<AppState>, RecordId(id): RecordId) -> Result<Response> {
    let Some((venue, selected)) = queries::find_venue_with_genres(&state.db, id).await? else {
        return Ok(Redirect::to("/").into_response());
    };
    let choices = genres::genre_choices(&state.db).await?;

    let heading = format!("Edit venue {}", venue.name);
    let action = format!("/venues/{}/edit", id);
    let values = VenueFormValues::from_model(venue, selected);

    Ok(Html(venue_form_page(&heading, &action, &values, &choices).into_string()).into_response())
}

pub async fn edit_venue_submission(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Form(pairs): Form<FormPairs>,
) -> Result<Response> {
    let form = VenueForm::from_pairs(&pairs);

    let result = in_transaction(&state.db, move |txn| {
        Box::pin(async move { mutations::update_venue(txn, id, &form).await })
    })
    .await;

    match result {
        Ok(change) => Ok(redirect_with_notice(&format!("/venues/{}", id), &change.to_string()).into_response()),
        Err(AppError::NotFound(_)) => Ok(Redirect::to("/").into_response()),
        Err(e) => {
            tracing::error!("Venue {} could not be updated: {}", id, e);
            Err(e)
        }
    }
}

/// Answers the delete button with JSON; unknown ids redirect home
pub async fn delete_venue(State(state): State<AppState>, RecordId(id): RecordId) -> Result<Response> {
    let deleted = in_transaction(&state.db, move |txn| {
        Box::pin(async move { mutations::delete_venue(txn, id).await })
    })
    .await
    .map_err(|e| {
        tracing::error!("Venue {} could not be deleted: {}", id, e);
        e
    })?;

    match deleted {
        Some(_) => Ok(Json(DeleteResponse {
            deleted: true,
            url: "/venues".to_string(),
        })
        .into_response()),
        None => Ok(Redirect::to("/").into_response()),
    }
}
