//! Integration tests for the write side
//!
//! Covers:
//! - Genre resolution on create and edit
//! - Deletes, including the no-op on unknown ids
//! - Transaction rollback when a step fails

use chrono::NaiveDate;
use fake::{
    faker::{address::en::CityName, phone_number::en::PhoneNumber},
    Fake,
};
use pretty_assertions::assert_eq;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use tokio_test::assert_ok;

use fyyur::db::entities::{artist, show, venue, venue_genre};
use fyyur::error::AppError;
use fyyur::forms::{ArtistForm, SeekingAnswer, ShowForm, VenueForm};
use fyyur::services::{genres, in_transaction, mutations, ChangeKind, RecordKind};
use fyyur::test_utils::*;

fn venue_form(name: &str, genres: &[&str]) -> VenueForm {
    VenueForm {
        name: name.to_string(),
        city: CityName().fake(),
        state: "CA".to_string(),
        address: Some("1015 Folsom Street".to_string()),
        phone: Some("1231231234".to_string()),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        seeking_talent: SeekingAnswer::Yes,
        seeking_description: Some("We are on the lookout for a local artist".to_string()),
        ..Default::default()
    }
}

fn artist_form(name: &str, genres: &[&str]) -> ArtistForm {
    let phone: String = PhoneNumber().fake();
    ArtistForm {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some(fyyur::forms::digits_only(&phone)).filter(|p| !p.is_empty()),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_venue_persists_submitted_name() {
    let db = setup_test_db().await;

    let change = mutations::create_venue(&db, &venue_form("The Musical Hop", &["Jazz", "Reggae"]))
        .await
        .unwrap();

    assert_eq!(change.record, RecordKind::Venue);
    assert_eq!(change.kind, ChangeKind::Listed);
    assert_eq!(change.to_string(), "Venue The Musical Hop was successfully listed!");

    let stored = venue::Entity::find_by_id(change.id).one(&db).await.unwrap().unwrap();
    assert_eq!(stored.name, "The Musical Hop");
    assert!(stored.seeking_talent);

    let names = genres::venue_genre_names(&db, &stored).await.unwrap();
    assert_eq!(names, vec!["Jazz".to_string(), "Reggae".to_string()]);
}

#[tokio::test]
async fn test_create_artist_skips_unknown_genres() {
    let db = setup_test_db().await;

    let change = mutations::create_artist(&db, &artist_form("Guns N Petals", &["Jazz", "Nonexistent"]))
        .await
        .unwrap();

    let stored = artist::Entity::find_by_id(change.id).one(&db).await.unwrap().unwrap();
    let names = genres::artist_genre_names(&db, &stored).await.unwrap();

    assert_eq!(names, vec!["Jazz".to_string()]);
}

#[tokio::test]
async fn test_duplicate_genres_attach_once() {
    let db = setup_test_db().await;

    let change = mutations::create_venue(&db, &venue_form("The Musical Hop", &["Jazz", "Jazz"]))
        .await
        .unwrap();

    let links = venue_genre::Entity::find()
        .filter(venue_genre::Column::VenueId.eq(change.id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(links.len(), 1);
}

#[tokio::test]
async fn test_update_venue_replaces_genre_set() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Dueling Pianos Bar", "New York", "NY").await;
    attach_venue_genres(&db, venue.id, &["Classical", "R&B"]).await;

    let mut form = venue_form("The Dueling Pianos Bar", &["Hip-Hop"]);
    form.city = "Brooklyn".to_string();
    form.seeking_talent = SeekingAnswer::No;
    form.seeking_description = None;

    let change = mutations::update_venue(&db, venue.id, &form).await.unwrap();
    assert_eq!(change.to_string(), "Venue The Dueling Pianos Bar was successfully updated!");

    let stored = venue::Entity::find_by_id(venue.id).one(&db).await.unwrap().unwrap();
    assert_eq!(stored.city, "Brooklyn");
    assert!(!stored.seeking_talent);
    assert_eq!(stored.seeking_description, None);

    let names = genres::venue_genre_names(&db, &stored).await.unwrap();
    assert_eq!(names, vec!["Hip-Hop".to_string()]);
}

#[tokio::test]
async fn test_update_missing_venue_is_not_found() {
    let db = setup_test_db().await;

    let result = mutations::update_venue(&db, 404, &venue_form("Nowhere", &[])).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(venue::Entity::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_artist_overwrites_fields() {
    let db = setup_test_db().await;
    let artist = create_test_artist(&db, "Matt Quevedo").await;
    attach_artist_genres(&db, artist.id, &["Jazz"]).await;

    let mut form = artist_form("Matt Quevedo", &["Folk", "Blues"]);
    form.seeking_venue = SeekingAnswer::Yes;
    form.phone = None;

    assert_ok!(mutations::update_artist(&db, artist.id, &form).await);

    let stored = artist::Entity::find_by_id(artist.id).one(&db).await.unwrap().unwrap();
    assert!(stored.seeking_venue);
    assert_eq!(stored.phone, None);

    let names = genres::artist_genre_names(&db, &stored).await.unwrap();
    assert_eq!(names, vec!["Blues".to_string(), "Folk".to_string()]);
}

#[tokio::test]
async fn test_delete_missing_venue_is_noop() {
    let db = setup_test_db().await;
    create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;

    let deleted = mutations::delete_venue(&db, 999).await.unwrap();

    assert!(deleted.is_none());
    assert_eq!(venue::Entity::find().all(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_venue_removes_row_and_links() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    attach_venue_genres(&db, venue.id, &["Jazz", "Reggae", "Soul", "Folk"]).await;

    let change = mutations::delete_venue(&db, venue.id).await.unwrap().unwrap();
    assert_eq!(change.kind, ChangeKind::Deleted);

    assert!(venue::Entity::find_by_id(venue.id).one(&db).await.unwrap().is_none());
    let links = venue_genre::Entity::find()
        .filter(venue_genre::Column::VenueId.eq(venue.id))
        .all(&db)
        .await
        .unwrap();
    assert!(links.is_empty());
}

#[tokio::test]
async fn test_delete_artist_removes_row() {
    let db = setup_test_db().await;
    let artist = create_test_artist(&db, "The Wild Sax Band").await;
    attach_artist_genres(&db, artist.id, &["Jazz", "Classical"]).await;

    let change = mutations::delete_artist(&db, artist.id).await.unwrap();

    assert!(change.is_some());
    assert!(artist::Entity::find_by_id(artist.id).one(&db).await.unwrap().is_none());
}

#[tokio::test]
async fn test_failed_delete_rolls_back_genre_links() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;
    attach_venue_genres(&db, venue.id, &["Jazz", "Reggae"]).await;
    let start = NaiveDate::from_ymd_opt(2019, 5, 21).unwrap().and_hms_opt(21, 30, 0).unwrap();
    create_test_show(&db, artist.id, venue.id, start).await;

    let venue_id = venue.id;
    let result = in_transaction(&db, move |txn| {
        Box::pin(async move { mutations::delete_venue(txn, venue_id).await })
    })
    .await;

    assert!(result.is_err(), "The show still references the venue");

    assert!(venue::Entity::find_by_id(venue.id).one(&db).await.unwrap().is_some());
    let links = venue_genre::Entity::find()
        .filter(venue_genre::Column::VenueId.eq(venue.id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(links.len(), 2);
}

#[tokio::test]
async fn test_create_show_commits_in_transaction() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;
    let form = ShowForm {
        artist_id: artist.id,
        venue_id: venue.id,
        start_time: NaiveDate::from_ymd_opt(2035, 4, 1).unwrap().and_hms_opt(20, 0, 0).unwrap(),
    };

    let change = in_transaction(&db, move |txn| {
        Box::pin(async move { mutations::create_show(txn, &form).await })
    })
    .await
    .unwrap();

    assert_eq!(change.kind, ChangeKind::Created);
    assert_eq!(change.to_string(), "Show was successfully created!");
    assert_eq!(show::Entity::find().all(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_dangling_show_rolls_back() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let form = ShowForm {
        artist_id: 77,
        venue_id: venue.id,
        start_time: NaiveDate::from_ymd_opt(2035, 4, 1).unwrap().and_hms_opt(20, 0, 0).unwrap(),
    };

    let result = in_transaction(&db, move |txn| {
        Box::pin(async move { mutations::create_show(txn, &form).await })
    })
    .await;

    assert!(matches!(result, Err(AppError::Database(_))));
    assert!(show::Entity::find().all(&db).await.unwrap().is_empty());
}
