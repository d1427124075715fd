use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
};

use crate::db::entities::{artist, artist_genre, genre, venue, venue_genre};

/// Looks up each submitted genre name in the Genre table.
///
/// Names without a matching row are skipped, never created. A genre named
/// twice is returned once.
pub async fn resolve_genres<C>(db: &C, names: &[String]) -> Result<Vec<genre::Model>, DbErr>
where
    C: ConnectionTrait,
{
    let mut resolved: Vec<genre::Model> = Vec::with_capacity(names.len());

    for name in names {
        let found = genre::Entity::find()
            .filter(genre::Column::Name.eq(name.as_str()))
            .order_by_asc(genre::Column::Id)
            .one(db)
            .await?;

        match found {
            Some(genre) if !resolved.iter().any(|g| g.id == genre.id) => resolved.push(genre),
            Some(_) => {}
            None => tracing::debug!("Skipping unknown genre '{}'", name),
        }
    }

    Ok(resolved)
}

/// Replaces a venue's genre set with the resolved `names`.
pub async fn replace_venue_genres<C>(db: &C, venue_id: i32, names: &[String]) -> Result<Vec<genre::Model>, DbErr>
where
    C: ConnectionTrait,
{
    venue_genre::Entity::delete_many()
        .filter(venue_genre::Column::VenueId.eq(venue_id))
        .exec(db)
        .await?;

    let genres = resolve_genres(db, names).await?;
    if !genres.is_empty() {
        let links = genres.iter().map(|g| venue_genre::ActiveModel {
            genre_id: sea_orm::Set(g.id),
            venue_id: sea_orm::Set(venue_id),
        });
        venue_genre::Entity::insert_many(links)
            .exec_without_returning(db)
            .await?;
    }

    Ok(genres)
}

/// Replaces an artist's genre set with the resolved `names`.
pub async fn replace_artist_genres<C>(db: &C, artist_id: i32, names: &[String]) -> Result<Vec<genre::Model>, DbErr>
where
    C: ConnectionTrait,
{
    artist_genre::Entity::delete_many()
        .filter(artist_genre::Column::ArtistId.eq(artist_id))
        .exec(db)
        .await?;

    let genres = resolve_genres(db, names).await?;
    if !genres.is_empty() {
        let links = genres.iter().map(|g| artist_genre::ActiveModel {
            genre_id: sea_orm::Set(g.id),
            artist_id: sea_orm::Set(artist_id),
        });
        artist_genre::Entity::insert_many(links)
            .exec_without_returning(db)
            .await?;
    }

    Ok(genres)
}

pub async fn venue_genre_names<C>(db: &C, venue: &venue::Model) -> Result<Vec<String>, DbErr>
where
    C: ConnectionTrait,
{
    let genres = venue
        .find_related(genre::Entity)
        .order_by_asc(genre::Column::Name)
        .all(db)
        .await?;
    Ok(genres.into_iter().map(|g| g.name).collect())
}

pub async fn artist_genre_names<C>(db: &C, artist: &artist::Model) -> Result<Vec<String>, DbErr>
where
    C: ConnectionTrait,
{
    let genres = artist
        .find_related(genre::Entity)
        .order_by_asc(genre::Column::Name)
        .all(db)
        .await?;
    Ok(genres.into_iter().map(|g| g.name).collect())
}

/// Every genre name, alphabetical, for the form selects.
pub async fn genre_choices<C>(db: &C) -> Result<Vec<String>, DbErr>
where
    C: ConnectionTrait,
{
    let genres = genre::Entity::find()
        .order_by_asc(genre::Column::Name)
        .all(db)
        .await?;
    Ok(genres.into_iter().map(|g| g.name).collect())
}
