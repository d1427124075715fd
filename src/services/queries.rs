//! Read side: listings, name search and detail views.
//!
//! Every function takes the connection (or transaction) to read from and,
//! where shows are split into past and upcoming, the evaluation instant.
//! Results are plain view structs; entities are never annotated in place.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
    ColumnTrait, ConnectionTrait, DatabaseBackend, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use serde::Serialize;

use crate::db::entities::{artist, show, venue};

use super::genres::{artist_genre_names, venue_genre_names};
use super::schedule::{format_phone, partition_shows, ShowSchedule};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: u64,
}

/// Venues sharing one city/state pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: i32,
    pub name: String,
    /// Only computed for artist searches.
    pub num_upcoming_shows: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

/// A show as seen from its venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistBooking {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// A show as seen from its artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueBooking {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    /// Display form, e.g. `123-123-1234`.
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub shows: ShowSchedule<ArtistBooking>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub shows: ShowSchedule<VenueBooking>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// All venues ordered by (state, city, id), bucketed by city/state.
pub async fn list_venues<C>(db: &C, now: NaiveDateTime) -> Result<Vec<VenueArea>, DbErr>
where
    C: ConnectionTrait,
{
    let venues = venue::Entity::find()
        .order_by_asc(venue::Column::State)
        .order_by_asc(venue::Column::City)
        .order_by_asc(venue::Column::Id)
        .all(db)
        .await?;

    let upcoming = upcoming_counts(db, show::Column::VenueId, now).await?;

    let mut areas: Vec<VenueArea> = Vec::new();
    for venue in venues {
        let summary = VenueSummary {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
        };

        match areas.last_mut() {
            Some(area) if area.state == venue.state && area.city == venue.city => {
                area.venues.push(summary)
            }
            _ => areas.push(VenueArea {
                city: venue.city,
                state: venue.state,
                venues: vec![summary],
            }),
        }
    }

    Ok(areas)
}

pub async fn list_artists<C>(db: &C) -> Result<Vec<ArtistSummary>, DbErr>
where
    C: ConnectionTrait,
{
    let artists = artist::Entity::find()
        .order_by_asc(artist::Column::Id)
        .all(db)
        .await?;

    Ok(artists
        .into_iter()
        .map(|a| ArtistSummary { id: a.id, name: a.name })
        .collect())
}

/// Venue id/name pairs ordered by name, for the show form.
pub async fn venue_choices<C>(db: &C) -> Result<Vec<VenueSummary>, DbErr>
where
    C: ConnectionTrait,
{
    let venues = venue::Entity::find()
        .order_by_asc(venue::Column::Name)
        .all(db)
        .await?;

    Ok(venues
        .into_iter()
        .map(|v| VenueSummary {
            id: v.id,
            name: v.name,
            num_upcoming_shows: 0,
        })
        .collect())
}

pub async fn search_venues<C>(db: &C, term: &str) -> Result<SearchResults, DbErr>
where
    C: ConnectionTrait,
{
    let venues = venue::Entity::find()
        .filter(name_contains(venue::Column::Name, term, db.get_database_backend()))
        .order_by_asc(venue::Column::Id)
        .all(db)
        .await?;

    let data: Vec<SearchHit> = venues
        .into_iter()
        .map(|v| SearchHit {
            id: v.id,
            name: v.name,
            num_upcoming_shows: None,
        })
        .collect();

    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

pub async fn search_artists<C>(db: &C, term: &str, now: NaiveDateTime) -> Result<SearchResults, DbErr>
where
    C: ConnectionTrait,
{
    let artists = artist::Entity::find()
        .filter(name_contains(artist::Column::Name, term, db.get_database_backend()))
        .order_by_asc(artist::Column::Id)
        .all(db)
        .await?;

    let upcoming = upcoming_counts(db, show::Column::ArtistId, now).await?;

    let data: Vec<SearchHit> = artists
        .into_iter()
        .map(|a| SearchHit {
            num_upcoming_shows: Some(upcoming.get(&a.id).copied().unwrap_or(0)),
            id: a.id,
            name: a.name,
        })
        .collect();

    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

/// Venue page data, or `None` when the id does not exist.
pub async fn venue_detail<C>(db: &C, id: i32, now: NaiveDateTime) -> Result<Option<VenueDetail>, DbErr>
where
    C: ConnectionTrait,
{
    let Some(venue) = venue::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let genres = venue_genre_names(db, &venue).await?;

    let bookings = show::Entity::find()
        .filter(show::Column::VenueId.eq(id))
        .order_by_asc(show::Column::StartTime)
        .find_also_related(artist::Entity)
        .all(db)
        .await?
        .into_iter()
        .filter_map(|(show, artist)| {
            artist.map(|a| ArtistBooking {
                artist_id: a.id,
                artist_name: a.name,
                artist_image_link: a.image_link,
                start_time: show.start_time,
            })
        });

    Ok(Some(VenueDetail {
        id: venue.id,
        name: venue.name,
        genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone.as_deref().map(format_phone),
        website: venue.website,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        shows: partition_shows(bookings, now, |b| b.start_time),
    }))
}

/// Artist page data, or `None` when the id does not exist.
pub async fn artist_detail<C>(db: &C, id: i32, now: NaiveDateTime) -> Result<Option<ArtistDetail>, DbErr>
where
    C: ConnectionTrait,
{
    let Some(artist) = artist::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let genres = artist_genre_names(db, &artist).await?;

    let bookings = show::Entity::find()
        .filter(show::Column::ArtistId.eq(id))
        .order_by_asc(show::Column::StartTime)
        .find_also_related(venue::Entity)
        .all(db)
        .await?
        .into_iter()
        .filter_map(|(show, venue)| {
            venue.map(|v| VenueBooking {
                venue_id: v.id,
                venue_name: v.name,
                venue_image_link: v.image_link,
                start_time: show.start_time,
            })
        });

    Ok(Some(ArtistDetail {
        id: artist.id,
        name: artist.name,
        genres,
        city: artist.city,
        state: artist.state,
        phone: artist.phone.as_deref().map(format_phone),
        website: artist.website,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        shows: partition_shows(bookings, now, |b| b.start_time),
    }))
}

/// The stored venue and its genre names, for prefilling the edit form.
pub async fn find_venue_with_genres<C>(db: &C, id: i32) -> Result<Option<(venue::Model, Vec<String>)>, DbErr>
where
    C: ConnectionTrait,
{
    match venue::Entity::find_by_id(id).one(db).await? {
        Some(venue) => {
            let genres = venue_genre_names(db, &venue).await?;
            Ok(Some((venue, genres)))
        }
        None => Ok(None),
    }
}

/// The stored artist and its genre names, for prefilling the edit form.
pub async fn find_artist_with_genres<C>(db: &C, id: i32) -> Result<Option<(artist::Model, Vec<String>)>, DbErr>
where
    C: ConnectionTrait,
{
    match artist::Entity::find_by_id(id).one(db).await? {
        Some(artist) => {
            let genres = artist_genre_names(db, &artist).await?;
            Ok(Some((artist, genres)))
        }
        None => Ok(None),
    }
}

/// Every show, soonest first, with venue and artist names resolved.
pub async fn list_shows<C>(db: &C) -> Result<Vec<ShowListing>, DbErr>
where
    C: ConnectionTrait,
{
    let shows = show::Entity::find()
        .order_by_asc(show::Column::StartTime)
        .order_by_asc(show::Column::Id)
        .find_also_related(venue::Entity)
        .all(db)
        .await?;

    if shows.is_empty() {
        return Ok(Vec::new());
    }

    let artist_ids: Vec<i32> = shows.iter().map(|(s, _)| s.artist_id).collect();
    let artists: HashMap<i32, artist::Model> = artist::Entity::find()
        .filter(artist::Column::Id.is_in(artist_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|a| (a.id, a))
        .collect();

    Ok(shows
        .into_iter()
        .filter_map(|(show, venue)| {
            let venue = venue?;
            let artist = artists.get(&show.artist_id)?;
            Some(ShowListing {
                id: show.id,
                venue_id: venue.id,
                venue_name: venue.name,
                artist_id: artist.id,
                artist_name: artist.name.clone(),
                artist_image_link: artist.image_link.clone(),
                start_time: show.start_time,
            })
        })
        .collect())
}

/// Upcoming show counts keyed by the owner column (`VenueId` or `ArtistId`).
async fn upcoming_counts<C>(db: &C, owner: show::Column, now: NaiveDateTime) -> Result<HashMap<i32, u64>, DbErr>
where
    C: ConnectionTrait,
{
    let rows: Vec<(i32, i64)> = show::Entity::find()
        .select_only()
        .column(owner)
        .column_as(show::Column::Id.count(), "upcoming")
        .filter(show::Column::StartTime.gt(now))
        .group_by(owner)
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, count)| (id, count.max(0) as u64))
        .collect())
}

const LIKE_ESCAPE: char = '!';

/// Case-insensitive substring match. LIKE wildcards in `term` match literally.
fn name_contains<T>(column: T, term: &str, backend: DatabaseBackend) -> SimpleExpr
where
    T: ColumnTrait,
{
    let escaped = fold_case(term.trim(), backend)
        .replace(LIKE_ESCAPE, "!!")
        .replace('%', "!%")
        .replace('_', "!_");

    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(format!("%{}%", escaped)).escape(LIKE_ESCAPE))
}

/// Lowercases `term` the way the backend's `lower()` folds the column.
/// SQLite only folds ASCII letters.
fn fold_case(term: &str, backend: DatabaseBackend) -> String {
    match backend {
        DatabaseBackend::Sqlite => term.to_ascii_lowercase(),
        _ => term.to_lowercase(),
    }
}
