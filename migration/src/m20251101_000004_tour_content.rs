use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_tour::Tour;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TourImage::Table)
                    .if_not_exists()
                    .col(pk_auto(TourImage::Id))
                    .col(integer(TourImage::TourId))
                    .col(string(TourImage::Url))
                    .col(string_null(TourImage::Alt))
                    .col(string_null(TourImage::Caption))
                    .col(boolean(TourImage::IsMain).default(false))
                    .col(integer(TourImage::Position).default(0))
                    .col(timestamp(TourImage::CreatedAt))
                    .col(timestamp(TourImage::UpdatedAt))
                    .col(timestamp_null(TourImage::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tour_images-tour_id")
                            .from(TourImage::Table, TourImage::TourId)
                            .to(Tour::Table, Tour::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TourTag::Table)
                    .if_not_exists()
                    .col(pk_auto(TourTag::Id))
                    .col(integer(TourTag::TourId))
                    .col(string(TourTag::Tag))
                    .col(timestamp(TourTag::CreatedAt))
                    .col(timestamp(TourTag::UpdatedAt))
                    .col(timestamp_null(TourTag::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tour_tags-tour_id")
                            .from(TourTag::Table, TourTag::TourId)
                            .to(Tour::Table, Tour::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TourInclude::Table)
                    .if_not_exists()
                    .col(pk_auto(TourInclude::Id))
                    .col(integer(TourInclude::TourId))
                    .col(string(TourInclude::Item))
                    .col(timestamp(TourInclude::CreatedAt))
                    .col(timestamp(TourInclude::UpdatedAt))
                    .col(timestamp_null(TourInclude::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tour_includes-tour_id")
                            .from(TourInclude::Table, TourInclude::TourId)
                            .to(Tour::Table, Tour::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TourExclude::Table)
                    .if_not_exists()
                    .col(pk_auto(TourExclude::Id))
                    .col(integer(TourExclude::TourId))
                    .col(string(TourExclude::Item))
                    .col(timestamp(TourExclude::CreatedAt))
                    .col(timestamp(TourExclude::UpdatedAt))
                    .col(timestamp_null(TourExclude::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tour_excludes-tour_id")
                            .from(TourExclude::Table, TourExclude::TourId)
                            .to(Tour::Table, Tour::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TourExclude::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TourInclude::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TourTag::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TourImage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TourImage {
    #[sea_orm(iden = "tour_images")]
    Table,
    Id,
    TourId,
    Url,
    Alt,
    Caption,
    IsMain,
    Position,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum TourTag {
    #[sea_orm(iden = "tour_tags")]
    Table,
    Id,
    TourId,
    Tag,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum TourInclude {
    #[sea_orm(iden = "tour_includes")]
    Table,
    Id,
    TourId,
    Item,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum TourExclude {
    #[sea_orm(iden = "tour_excludes")]
    Table,
    Id,
    TourId,
    Item,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
