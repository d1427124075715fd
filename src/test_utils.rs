//! Test utilities for Fyyur
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test), migrated and genre-seeded
//! - AppState factories
//! - Venue, artist and show factories

use chrono::{Duration, NaiveDateTime};
use migration::MigratorTrait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::{
    config::Config,
    db::entities::{artist, artist_genre, genre, show, venue, venue_genre},
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 5000,
        static_dir: "static".to_string(),
        error_log: None,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState::new(db, test_config())
}

/// `base` shifted by a signed number of seconds
pub fn offset_seconds(base: NaiveDateTime, seconds: i64) -> NaiveDateTime {
    base + Duration::seconds(seconds)
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Look up a seeded genre by name
pub async fn find_genre(db: &DatabaseConnection, name: &str) -> genre::Model {
    genre::Entity::find()
        .filter(genre::Column::Name.eq(name))
        .one(db)
        .await
        .expect("Failed to query genres")
        .unwrap_or_else(|| panic!("Genre {} is not seeded", name))
}

/// Create a test venue in the database
pub async fn create_test_venue(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
) -> venue::Model {
    let venue = venue::ActiveModel {
        name: Set(name.to_string()),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        address: Set(Some("1015 Folsom Street".to_string())),
        phone: Set(Some("1231231234".to_string())),
        image_link: Set(None),
        facebook_link: Set(None),
        website: Set(None),
        seeking_talent: Set(false),
        seeking_description: Set(None),
        ..Default::default()
    };

    venue.insert(db).await.expect("Failed to insert test venue")
}

/// Create a test artist in the database
pub async fn create_test_artist(db: &DatabaseConnection, name: &str) -> artist::Model {
    let artist = artist::ActiveModel {
        name: Set(name.to_string()),
        city: Set("San Francisco".to_string()),
        state: Set("CA".to_string()),
        phone: Set(Some("3261235000".to_string())),
        image_link: Set(None),
        facebook_link: Set(None),
        website: Set(None),
        seeking_venue: Set(false),
        seeking_description: Set(None),
        ..Default::default()
    };

    artist.insert(db).await.expect("Failed to insert test artist")
}

/// Create a test show in the database
pub async fn create_test_show(
    db: &DatabaseConnection,
    artist_id: i32,
    venue_id: i32,
    start_time: NaiveDateTime,
) -> show::Model {
    let show = show::ActiveModel {
        start_time: Set(start_time),
        artist_id: Set(artist_id),
        venue_id: Set(venue_id),
        ..Default::default()
    };

    show.insert(db).await.expect("Failed to insert test show")
}

/// Link seeded genres to a venue by name
pub async fn attach_venue_genres(db: &DatabaseConnection, venue_id: i32, names: &[&str]) {
    for name in names {
        let genre = find_genre(db, name).await;
        venue_genre::ActiveModel {
            venue_id: Set(venue_id),
            genre_id: Set(genre.id),
        }
        .insert(db)
        .await
        .expect("Failed to link venue genre");
    }
}

/// Link seeded genres to an artist by name
pub async fn attach_artist_genres(db: &DatabaseConnection, artist_id: i32, names: &[&str]) {
    for name in names {
        let genre = find_genre(db, name).await;
        artist_genre::ActiveModel {
            artist_id: Set(artist_id),
            genre_id: Set(genre.id),
        }
        .insert(db)
        .await
        .expect("Failed to link artist genre");
    }
}
