use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_genre_table::Genre;
use super::m20240101_000003_create_artist_table::Artist;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArtistGenreTable::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ArtistGenreTable::GenreId).integer().not_null())
                    .col(ColumnDef::new(ArtistGenreTable::ArtistId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ArtistGenreTable::GenreId)
                            .col(ArtistGenreTable::ArtistId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_genre_genre_id")
                            .from(ArtistGenreTable::Table, ArtistGenreTable::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_genre_artist_id")
                            .from(ArtistGenreTable::Table, ArtistGenreTable::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArtistGenreTable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArtistGenreTable {
    Table,
    GenreId,
    ArtistId,
}
