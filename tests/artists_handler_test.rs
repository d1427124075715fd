//! Integration tests for artist routes
//!
//! Tests listing, search, detail, create, edit and delete through the router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use fake::{faker::name::en::Name, Fake};
use pretty_assertions::assert_eq;
use sea_orm::EntityTrait;
use tower::util::ServiceExt;

use fyyur::db::entities::artist;
use fyyur::handlers::DeleteResponse;
use fyyur::services::genres;
use fyyur::state::AppState;
use fyyur::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    fyyur::create_router(state.clone())
}

async fn body_string(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn location(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_list_artists() {
    let state = setup_test_app_state().await;
    let name: String = Name().fake();
    create_test_artist(&state.db, "Guns N Petals").await;
    create_test_artist(&state.db, &name).await;
    let app = create_test_router(&state);

    let response = app.oneshot(get("/artists")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains(r#"href="/artists/2""#));
}

#[tokio::test]
async fn test_search_artists_shows_upcoming_count() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    create_test_artist(&state.db, "Matt Quevedo").await;
    let tomorrow = Utc::now().naive_utc() + Duration::days(1);
    create_test_show(&state.db, artist.id, venue.id, tomorrow).await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(post_form("/artists/search", "search_term=PETALS"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Guns N Petals"));
    assert!(!body.contains("Matt Quevedo"));
    assert!(body.contains("1 upcoming"));
}

#[tokio::test]
async fn test_search_artists_no_match() {
    let state = setup_test_app_state().await;
    create_test_artist(&state.db, "Guns N Petals").await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(post_form("/artists/search", "search_term=zzz"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(": 0"));
    assert!(!body.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_show_artist_detail() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "The Wild Sax Band").await;
    let next_week = Utc::now().naive_utc() + Duration::days(7);
    create_test_show(&state.db, artist.id, venue.id, next_week).await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(get(&format!("/artists/{}", artist.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("The Wild Sax Band"));
    assert!(body.contains("326-123-5000"));
    assert!(body.contains("1 Upcoming shows"));
    assert!(body.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_show_missing_artist_redirects_home() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app.oneshot(get("/artists/31")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_create_artist_submission() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(post_form(
            "/artists/create",
            "name=Guns+N+Petals&city=San+Francisco&state=CA&phone=326.123.5000\
             &genres=Rock+n+Roll&genres=Nonexistent&seeking_venue=Yes",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "/?notice=Artist%20Guns%20N%20Petals%20was%20successfully%20listed%21"
    );

    let artists = artist::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].phone.as_deref(), Some("3261235000"));
    assert!(artists[0].seeking_venue);

    let names = genres::artist_genre_names(&state.db, &artists[0]).await.unwrap();
    assert_eq!(names, vec!["Rock n Roll".to_string()]);
}

#[tokio::test]
async fn test_edit_artist_submission() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Matt Quevedo").await;
    attach_artist_genres(&state.db, artist.id, &["Jazz"]).await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(post_form(
            &format!("/artists/{}/edit", artist.id),
            "name=Matt+Quevedo&city=New+York&state=NY&genres=Blues&seeking_venue=yes",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with(&format!("/artists/{}?notice=", artist.id)));

    let stored = artist::Entity::find_by_id(artist.id).one(&state.db).await.unwrap().unwrap();
    assert_eq!(stored.state, "NY");
    // Only an exact "Yes" counts
    assert!(!stored.seeking_venue);

    let names = genres::artist_genre_names(&state.db, &stored).await.unwrap();
    assert_eq!(names, vec!["Blues".to_string()]);
}

#[tokio::test]
async fn test_delete_artist() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Matt Quevedo").await;
    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(get(&format!("/artists/{}/delete", artist.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: DeleteResponse = serde_json::from_slice(&body).unwrap();
    assert!(body.deleted);
    assert_eq!(body.url, "/artists");

    // A second delete finds nothing and goes home
    let response = app
        .oneshot(get(&format!("/artists/{}/delete", artist.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_non_numeric_artist_id_is_404() {
    let state = setup_test_app_state().await;

    for uri in ["/artists/abc", "/artists/abc/edit", "/artists/abc/delete"] {
        let response = create_test_router(&state).oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        assert!(body_string(response).await.contains("Page not found"));
    }
}
