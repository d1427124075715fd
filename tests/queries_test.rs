//! Integration tests for the read side
//!
//! Covers:
//! - Venue listing grouped by city/state with upcoming counts
//! - Case-insensitive name search, trimmed and empty terms
//! - Past/upcoming partition around the evaluation instant
//! - Phone display formatting and show listing

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

use fyyur::services::queries;
use fyyur::test_utils::*;

fn instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 6, 15).unwrap().and_hms_opt(20, 0, 0).unwrap()
}

#[tokio::test]
async fn test_list_venues_groups_by_area() {
    let db = setup_test_db().await;
    let hop = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let pianos = create_test_venue(&db, "The Dueling Pianos Bar", "New York", "NY").await;
    let park = create_test_venue(&db, "Park Square Live Music & Coffee", "San Francisco", "CA").await;

    let areas = queries::list_venues(&db, instant()).await.unwrap();

    assert_eq!(areas.len(), 2);
    assert_eq!((areas[0].city.as_str(), areas[0].state.as_str()), ("San Francisco", "CA"));
    assert_eq!(
        areas[0].venues.iter().map(|v| v.id).collect::<Vec<_>>(),
        vec![hop.id, park.id]
    );
    assert_eq!((areas[1].city.as_str(), areas[1].state.as_str()), ("New York", "NY"));
    assert_eq!(areas[1].venues[0].id, pianos.id);
}

#[tokio::test]
async fn test_list_venues_counts_only_upcoming() {
    let db = setup_test_db().await;
    let now = instant();
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;

    create_test_show(&db, artist.id, venue.id, offset_seconds(now, -86_400)).await;
    create_test_show(&db, artist.id, venue.id, offset_seconds(now, 3_600)).await;
    create_test_show(&db, artist.id, venue.id, offset_seconds(now, 86_400)).await;

    let areas = queries::list_venues(&db, now).await.unwrap();

    assert_eq!(areas[0].venues[0].num_upcoming_shows, 2);
}

#[tokio::test]
async fn test_list_venues_empty() {
    let db = setup_test_db().await;
    let areas = queries::list_venues(&db, instant()).await.unwrap();
    assert!(areas.is_empty());
}

#[tokio::test]
async fn test_search_venues_case_insensitive() {
    let db = setup_test_db().await;
    let hop = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_venue(&db, "The Dueling Pianos Bar", "New York", "NY").await;

    let results = queries::search_venues(&db, "hop").await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].id, hop.id);
    assert_eq!(results.data[0].num_upcoming_shows, None);

    let results = queries::search_venues(&db, "MUSICAL").await.unwrap();
    assert_eq!(results.count, 1);

    let results = queries::search_venues(&db, "zzz").await.unwrap();
    assert_eq!(results.count, 0);
    assert!(results.data.is_empty());
}

#[tokio::test]
async fn test_search_trims_padded_term() {
    let db = setup_test_db().await;
    let hop = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_venue(&db, "The Dueling Pianos Bar", "New York", "NY").await;

    let results = queries::search_venues(&db, "  hop  ").await.unwrap();

    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].id, hop.id);
}

#[tokio::test]
async fn test_empty_search_matches_everything() {
    let db = setup_test_db().await;
    create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_venue(&db, "The Dueling Pianos Bar", "New York", "NY").await;
    create_test_artist(&db, "Guns N Petals").await;
    create_test_artist(&db, "Matt Quevedo").await;
    create_test_artist(&db, "The Wild Sax Band").await;

    let venues = queries::search_venues(&db, "").await.unwrap();
    assert_eq!(venues.count, 2);
    assert_eq!(venues.data.len(), 2);

    let artists = queries::search_artists(&db, "", instant()).await.unwrap();
    assert_eq!(artists.count, 3);
    assert_eq!(artists.data.len(), 3);
}

#[tokio::test]
async fn test_search_non_ascii_term_on_sqlite() {
    let db = setup_test_db().await;
    let etoile = create_test_venue(&db, "Théâtre ÉTOILE", "Paris", "NY").await;

    let results = queries::search_venues(&db, "ÉTOILE").await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].id, etoile.id);

    let results = queries::search_venues(&db, "THéâTRE").await.unwrap();
    assert_eq!(results.count, 1);
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let db = setup_test_db().await;
    create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_artist(&db, "100% Jazz").await;
    create_test_artist(&db, "Matt Quevedo").await;

    let venues = queries::search_venues(&db, "%").await.unwrap();
    assert_eq!(venues.count, 0);

    let artists = queries::search_artists(&db, "100%", instant()).await.unwrap();
    assert_eq!(artists.count, 1);
    assert_eq!(artists.data[0].name, "100% Jazz");
}

#[tokio::test]
async fn test_search_artists_reports_upcoming() {
    let db = setup_test_db().await;
    let now = instant();
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let petals = create_test_artist(&db, "Guns N Petals").await;
    let sax = create_test_artist(&db, "The Wild Sax Band").await;

    create_test_show(&db, petals.id, venue.id, offset_seconds(now, 60)).await;
    create_test_show(&db, sax.id, venue.id, offset_seconds(now, -60)).await;

    let results = queries::search_artists(&db, "A", now).await.unwrap();

    assert_eq!(results.count, 2);
    assert_eq!(results.data[0].id, petals.id);
    assert_eq!(results.data[0].num_upcoming_shows, Some(1));
    assert_eq!(results.data[1].id, sax.id);
    assert_eq!(results.data[1].num_upcoming_shows, Some(0));
}

#[tokio::test]
async fn test_venue_detail_boundary_instant_is_past() {
    let db = setup_test_db().await;
    let now = instant();
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;

    create_test_show(&db, artist.id, venue.id, offset_seconds(now, -1)).await;
    create_test_show(&db, artist.id, venue.id, now).await;
    create_test_show(&db, artist.id, venue.id, offset_seconds(now, 1)).await;

    let detail = queries::venue_detail(&db, venue.id, now).await.unwrap().unwrap();

    assert_eq!(detail.shows.past_count(), 2);
    assert_eq!(detail.shows.upcoming_count(), 1);
    assert_eq!(
        detail.shows.past.iter().map(|b| b.start_time).collect::<Vec<_>>(),
        vec![offset_seconds(now, -1), now]
    );
    assert_eq!(detail.shows.upcoming[0].start_time, offset_seconds(now, 1));
    assert_eq!(detail.shows.upcoming[0].artist_name, "Guns N Petals");
}

#[tokio::test]
async fn test_artist_detail_boundary_instant_is_past() {
    let db = setup_test_db().await;
    let now = instant();
    let venue = create_test_venue(&db, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    let artist = create_test_artist(&db, "The Wild Sax Band").await;

    create_test_show(&db, artist.id, venue.id, offset_seconds(now, -1)).await;
    create_test_show(&db, artist.id, venue.id, now).await;
    create_test_show(&db, artist.id, venue.id, offset_seconds(now, 1)).await;

    let detail = queries::artist_detail(&db, artist.id, now).await.unwrap().unwrap();

    assert_eq!(detail.shows.past_count(), 2);
    assert_eq!(detail.shows.upcoming_count(), 1);
    assert_eq!(detail.shows.upcoming[0].venue_name, "Park Square Live Music & Coffee");
}

#[tokio::test]
async fn test_venue_detail_formats_phone_and_genres() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    attach_venue_genres(&db, venue.id, &["Jazz", "Reggae"]).await;

    let detail = queries::venue_detail(&db, venue.id, instant()).await.unwrap().unwrap();

    // Stored digits stay untouched; the view gets dashes
    assert_eq!(venue.phone.as_deref(), Some("1231231234"));
    assert_eq!(detail.phone.as_deref(), Some("123-123-1234"));

    let mut genres = detail.genres.clone();
    genres.sort();
    assert_eq!(genres, vec!["Jazz".to_string(), "Reggae".to_string()]);
    assert!(detail.shows.past.is_empty());
    assert!(detail.shows.upcoming.is_empty());
}

#[tokio::test]
async fn test_detail_of_missing_id_is_none() {
    let db = setup_test_db().await;

    assert!(queries::venue_detail(&db, 42, instant()).await.unwrap().is_none());
    assert!(queries::artist_detail(&db, 42, instant()).await.unwrap().is_none());
    assert!(queries::find_venue_with_genres(&db, 42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_shows_resolves_names() {
    let db = setup_test_db().await;
    let now = instant();
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let petals = create_test_artist(&db, "Guns N Petals").await;
    let sax = create_test_artist(&db, "The Wild Sax Band").await;

    create_test_show(&db, sax.id, venue.id, offset_seconds(now, 7_200)).await;
    create_test_show(&db, petals.id, venue.id, offset_seconds(now, 3_600)).await;

    let shows = queries::list_shows(&db).await.unwrap();

    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0].artist_name, "Guns N Petals");
    assert_eq!(shows[0].venue_name, "The Musical Hop");
    assert_eq!(shows[1].artist_name, "The Wild Sax Band");
}

#[tokio::test]
async fn test_find_artist_with_genres_for_prefill() {
    let db = setup_test_db().await;
    let artist = create_test_artist(&db, "Matt Quevedo").await;
    attach_artist_genres(&db, artist.id, &["Jazz"]).await;

    let (model, genres) = queries::find_artist_with_genres(&db, artist.id).await.unwrap().unwrap();

    assert_eq!(model.name, "Matt Quevedo");
    assert_eq!(genres, vec!["Jazz".to_string()]);
}
