use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};

use crate::{
    error::{AppError, Result},
    forms::{ArtistForm, FormPairs, SearchForm},
    services::{genres, in_transaction, mutations, queries},
    state::AppState,
    templates::{artist_detail_page, artist_form_page, artists_page, search_results_page, ArtistFormValues},
};

use super::{now, redirect_with_notice, DeleteResponse, NoticeQuery, RecordId};

pub async fn list_artists(State(state): State<AppState>) -> Result<Html<String>> {
    let artists = queries::list_artists(&state.db).await?;
    Ok(Html(artists_page(&artists).into_string()))
}

/// Name search, with each hit's upcoming show count
pub async fn search_artists(
    State(state): State<AppState>,
    Form(search): Form<SearchForm>,
) -> Result<Html<String>> {
    let results = queries::search_artists(&state.db, search.term(), now()).await?;
    tracing::debug!("Artist search '{}' matched {}", search.term(), results.count);

    Ok(Html(search_results_page("/artists", search.term(), &results).into_string()))
}

pub async fn show_artist(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Query(query): Query<NoticeQuery>,
) -> Result<Response> {
    let Some(artist) = queries::artist_detail(&state.db, id, now()).await? else {
        return Ok(Redirect::to("/").into_response());
    };

    Ok(Html(artist_detail_page(&artist, query.message()).into_string()).into_response())
}

pub async fn create_artist_form(State(state): State<AppState>) -> Result<Html<String>> {
    let choices = genres::genre_choices(&state.db).await?;
    let page = artist_form_page("List a new artist", "/artists/create", &ArtistFormValues::default(), &choices);
    Ok(Html(page.into_string()))
}

pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(pairs): Form<FormPairs>,
) -> Result<Redirect> {
    let form = ArtistForm::from_pairs(&pairs);
    let name = form.name.clone();

    let change = in_transaction(&state.db, move |txn| {
        Box::pin(async move { mutations::create_artist(txn, &form).await })
    })
    .await
    .map_err(|e| {
        tracing::error!("Artist {} could not be listed: {}", name, e);
        e
    })?;

    Ok(redirect_with_notice("/", &change.to_string()))
}

pub async fn edit_artist_form(State(state): State<AppState>, RecordId(id): RecordId) -> Result<Response> {
    let Some((artist, selected)) = queries::find_artist_with_genres(&state.db, id).await? else {
        return Ok(Redirect::to("/").into_response());
    };
    let choices = genres::genre_choices(&state.db).await?;

    let heading = format!("Edit artist {}", artist.name);
    let action = format!("/artists/{}/edit", id);
    let values = ArtistFormValues::from_model(artist, selected);

    Ok(Html(artist_form_page(&heading, &action, &values, &choices).into_string()).into_response())
}

pub async fn edit_artist_submission(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Form(pairs): Form<FormPairs>,
) -> Result<Response> {
    let form = ArtistForm::from_pairs(&pairs);

    let result = in_transaction(&state.db, move |txn| {
        Box::pin(async move { mutations::update_artist(txn, id, &form).await })
    })
    .await;

    match result {
        Ok(change) => Ok(redirect_with_notice(&format!("/artists/{}", id), &change.to_string()).into_response()),
        Err(AppError::NotFound(_)) => Ok(Redirect::to("/").into_response()),
        Err(e) => {
            tracing::error!("Artist {} could not be updated: {}", id, e);
            Err(e)
        }
    }
}

pub async fn delete_artist(State(state): State<AppState>, RecordId(id): RecordId) -> Result<Response> {
    let deleted = in_transaction(&state.db, move |txn| {
        Box::pin(async move { mutations::delete_artist(txn, id).await })
    })
    .await
    .map_err(|e| {
        tracing::error!("Artist {} could not be deleted: {}", id, e);
        e
    })?;

    let Some(_) = deleted else {
        return Ok(Redirect::to("/").into_response());
    };

    Ok(Json(DeleteResponse {
        deleted: true,
        url: "/artists".to_string(),
    })
    .into_response())
}
