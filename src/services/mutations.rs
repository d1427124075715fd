//! Write side: create, edit and delete for venues and artists, create for
//! shows.
//!
//! The operations take a connection handle and do not commit themselves.
//! Handlers run them through [`in_transaction`] so that a failure at any step
//! leaves the store untouched.

use std::{fmt, future::Future, pin::Pin};

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, ModelTrait, QueryFilter, Set, TransactionTrait,
};

use crate::{
    db::entities::{artist, artist_genre, show, venue, venue_genre},
    error::{AppError, Result},
    forms::{ArtistForm, ShowForm, VenueForm},
};

use super::genres::{replace_artist_genres, replace_venue_genres};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Venue,
    Artist,
    Show,
}

impl RecordKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Venue => "Venue",
            Self::Artist => "Artist",
            Self::Show => "Show",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Listed,
    Created,
    Updated,
    Deleted,
}

impl ChangeKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Listed => "listed",
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

/// What a successful mutation did, and to which record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub record: RecordKind,
    pub id: i32,
    pub name: String,
    pub kind: ChangeKind,
}

impl Change {
    fn new(record: RecordKind, id: i32, name: impl Into<String>, kind: ChangeKind) -> Self {
        Self {
            record,
            id,
            name: name.into(),
            kind,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.record {
            RecordKind::Show => write!(f, "Show was successfully {}!", self.kind.as_str()),
            _ => write!(
                f,
                "{} {} was successfully {}!",
                self.record.as_str(),
                self.name,
                self.kind.as_str()
            ),
        }
    }
}

/// Runs `op` in its own transaction: committed on `Ok`, rolled back on `Err`.
pub async fn in_transaction<T, F>(db: &DatabaseConnection, op: F) -> Result<T>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> Pin<Box<dyn Future<Output = Result<T>> + Send + 'c>>
        + Send,
    T: Send,
{
    db.transaction::<F, T, AppError>(op).await.map_err(AppError::from)
}

pub async fn create_venue<C>(db: &C, form: &VenueForm) -> Result<Change>
where
    C: ConnectionTrait,
{
    let venue = venue::ActiveModel {
        name: Set(form.name.clone()),
        city: Set(form.city.clone()),
        state: Set(form.state.clone()),
        address: Set(form.address.clone()),
        phone: Set(form.phone.clone()),
        image_link: Set(form.image_link.clone()),
        facebook_link: Set(form.facebook_link.clone()),
        website: Set(form.website.clone()),
        seeking_talent: Set(form.seeking_talent.is_seeking()),
        seeking_description: Set(form.seeking_description.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let genres = replace_venue_genres(db, venue.id, &form.genres).await?;
    tracing::info!(
        "Listed venue {} '{}' with {} genre(s)",
        venue.id,
        venue.name,
        genres.len()
    );

    Ok(Change::new(RecordKind::Venue, venue.id, venue.name, ChangeKind::Listed))
}

/// Overwrites every field of venue `id` and replaces its genre set.
pub async fn update_venue<C>(db: &C, id: i32, form: &VenueForm) -> Result<Change>
where
    C: ConnectionTrait,
{
    let existing = venue::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

    let mut active: venue::ActiveModel = existing.into();
    active.name = Set(form.name.clone());
    active.city = Set(form.city.clone());
    active.state = Set(form.state.clone());
    active.address = Set(form.address.clone());
    active.phone = Set(form.phone.clone());
    active.image_link = Set(form.image_link.clone());
    active.facebook_link = Set(form.facebook_link.clone());
    active.website = Set(form.website.clone());
    active.seeking_talent = Set(form.seeking_talent.is_seeking());
    active.seeking_description = Set(form.seeking_description.clone());
    let venue = active.update(db).await?;

    replace_venue_genres(db, venue.id, &form.genres).await?;
    tracing::info!("Updated venue {} '{}'", venue.id, venue.name);

    Ok(Change::new(RecordKind::Venue, venue.id, venue.name, ChangeKind::Updated))
}

/// Removes venue `id` and its genre links. `None` when there is no such venue.
///
/// A venue that still has shows cannot be removed; the foreign key rejects it.
pub async fn delete_venue<C>(db: &C, id: i32) -> Result<Option<Change>>
where
    C: ConnectionTrait,
{
    let Some(venue) = venue::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let name = venue.name.clone();

    venue_genre::Entity::delete_many()
        .filter(venue_genre::Column::VenueId.eq(id))
        .exec(db)
        .await?;
    venue.delete(db).await?;

    tracing::info!("Deleted venue {} '{}'", id, name);
    Ok(Some(Change::new(RecordKind::Venue, id, name, ChangeKind::Deleted)))
}

pub async fn create_artist<C>(db: &C, form: &ArtistForm) -> Result<Change>
where
    C: ConnectionTrait,
{
    let artist = artist::ActiveModel {
        name: Set(form.name.clone()),
        city: Set(form.city.clone()),
        state: Set(form.state.clone()),
        phone: Set(form.phone.clone()),
        image_link: Set(form.image_link.clone()),
        facebook_link: Set(form.facebook_link.clone()),
        website: Set(form.website.clone()),
        seeking_venue: Set(form.seeking_venue.is_seeking()),
        seeking_description: Set(form.seeking_description.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let genres = replace_artist_genres(db, artist.id, &form.genres).await?;
    tracing::info!(
        "Listed artist {} '{}' with {} genre(s)",
        artist.id,
        artist.name,
        genres.len()
    );

    Ok(Change::new(RecordKind::Artist, artist.id, artist.name, ChangeKind::Listed))
}

/// Overwrites every field of artist `id` and replaces its genre set.
pub async fn update_artist<C>(db: &C, id: i32, form: &ArtistForm) -> Result<Change>
where
    C: ConnectionTrait,
{
    let existing = artist::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))?;

    let mut active: artist::ActiveModel = existing.into();
    active.name = Set(form.name.clone());
    active.city = Set(form.city.clone());
    active.state = Set(form.state.clone());
    active.phone = Set(form.phone.clone());
    active.image_link = Set(form.image_link.clone());
    active.facebook_link = Set(form.facebook_link.clone());
    active.website = Set(form.website.clone());
    active.seeking_venue = Set(form.seeking_venue.is_seeking());
    active.seeking_description = Set(form.seeking_description.clone());
    let artist = active.update(db).await?;

    replace_artist_genres(db, artist.id, &form.genres).await?;
    tracing::info!("Updated artist {} '{}'", artist.id, artist.name);

    Ok(Change::new(RecordKind::Artist, artist.id, artist.name, ChangeKind::Updated))
}

/// Removes artist `id` and its genre links. `None` when there is no such artist.
pub async fn delete_artist<C>(db: &C, id: i32) -> Result<Option<Change>>
where
    C: ConnectionTrait,
{
    let Some(artist) = artist::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let name = artist.name.clone();

    artist_genre::Entity::delete_many()
        .filter(artist_genre::Column::ArtistId.eq(id))
        .exec(db)
        .await?;
    artist.delete(db).await?;

    tracing::info!("Deleted artist {} '{}'", id, name);
    Ok(Some(Change::new(RecordKind::Artist, id, name, ChangeKind::Deleted)))
}

/// Books a show. The referenced artist and venue are not checked here; the
/// store's foreign keys reject dangling ids.
pub async fn create_show<C>(db: &C, form: &ShowForm) -> Result<Change>
where
    C: ConnectionTrait,
{
    let show = show::ActiveModel {
        start_time: Set(form.start_time),
        artist_id: Set(form.artist_id),
        venue_id: Set(form.venue_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(
        "Listed show {} (artist {}, venue {}) at {}",
        show.id,
        show.artist_id,
        show.venue_id,
        show.start_time
    );

    Ok(Change::new(RecordKind::Show, show.id, String::new(), ChangeKind::Created))
}
