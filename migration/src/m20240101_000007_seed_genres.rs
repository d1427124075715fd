use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_genre_table::Genre;

/// Genres offered by the venue and artist forms. The application never
/// creates genres itself, so they have to exist before the first submission.
pub const GENRE_NAMES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Genre::Table).columns([Genre::Name]);
        for name in GENRE_NAMES {
            insert.values_panic([name.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Genre::Table)
            .and_where(Expr::col(Genre::Name).is_in(GENRE_NAMES))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
