use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_genre_table::Genre;
use super::m20240101_000002_create_venue_table::Venue;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VenueGenreTable::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(VenueGenreTable::GenreId).integer().not_null())
                    .col(ColumnDef::new(VenueGenreTable::VenueId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(VenueGenreTable::GenreId)
                            .col(VenueGenreTable::VenueId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_venue_genre_genre_id")
                            .from(VenueGenreTable::Table, VenueGenreTable::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_venue_genre_venue_id")
                            .from(VenueGenreTable::Table, VenueGenreTable::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VenueGenreTable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VenueGenreTable {
    Table,
    GenreId,
    VenueId,
}
