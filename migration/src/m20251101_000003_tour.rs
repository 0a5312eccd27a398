use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_user::User,
    m20251101_000002_tour_lookup::{TourCategory, TourDestination},
};

static IDX_TOUR_CATEGORY_ID: &str = "idx-tours-category_id";
static IDX_TOUR_DESTINATION_ID: &str = "idx-tours-destination_id";
static IDX_TOUR_GUIDE_ID: &str = "idx-tours-guide_id";
static FK_TOUR_CATEGORY_ID: &str = "fk-tours-category_id";
static FK_TOUR_DESTINATION_ID: &str = "fk-tours-destination_id";
static FK_TOUR_GUIDE_ID: &str = "fk-tours-guide_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tour::Table)
                    .if_not_exists()
                    .col(pk_auto(Tour::Id))
                    .col(string(Tour::Title))
                    .col(text(Tour::Description))
                    .col(string_null(Tour::ShortDescription))
                    .col(string_uniq(Tour::Slug))
                    .col(integer(Tour::CategoryId))
                    .col(integer(Tour::DestinationId))
                    .col(integer(Tour::GuideId))
                    .col(double(Tour::PriceAmount))
                    .col(string_len(Tour::PriceCurrency, 3).default("USD"))
                    .col(boolean(Tour::PricePerPerson).default(true))
                    .col(integer(Tour::DurationValue))
                    .col(string_len(Tour::DurationUnit, 10))
                    .col(integer_null(Tour::MaxParticipants))
                    .col(integer_null(Tour::MinParticipants))
                    .col(double(Tour::AverageRating).default(0.0))
                    .col(integer(Tour::TotalReviews).default(0))
                    .col(boolean(Tour::IsActive).default(true))
                    .col(boolean(Tour::IsListed).default(true))
                    .col(timestamp(Tour::CreatedAt))
                    .col(timestamp(Tour::UpdatedAt))
                    .col(timestamp_null(Tour::DeletedAt))
                    .to_owned(),
            )
            .await?;

        for (name, col) in [
            (IDX_TOUR_CATEGORY_ID, Tour::CategoryId),
            (IDX_TOUR_DESTINATION_ID, Tour::DestinationId),
            (IDX_TOUR_GUIDE_ID, Tour::GuideId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Tour::Table)
                        .col(col)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOUR_CATEGORY_ID)
                    .from_tbl(Tour::Table)
                    .from_col(Tour::CategoryId)
                    .to_tbl(TourCategory::Table)
                    .to_col(TourCategory::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOUR_DESTINATION_ID)
                    .from_tbl(Tour::Table)
                    .from_col(Tour::DestinationId)
                    .to_tbl(TourDestination::Table)
                    .to_col(TourDestination::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOUR_GUIDE_ID)
                    .from_tbl(Tour::Table)
                    .from_col(Tour::GuideId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [FK_TOUR_GUIDE_ID, FK_TOUR_DESTINATION_ID, FK_TOUR_CATEGORY_ID] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(name).table(Tour::Table).to_owned())
                .await?;
        }

        for name in [IDX_TOUR_GUIDE_ID, IDX_TOUR_DESTINATION_ID, IDX_TOUR_CATEGORY_ID] {
            manager
                .drop_index(Index::drop().name(name).table(Tour::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Tour::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Tour {
    #[sea_orm(iden = "tours")]
    Table,
    Id,
    Title,
    Description,
    ShortDescription,
    Slug,
    CategoryId,
    DestinationId,
    GuideId,
    PriceAmount,
    PriceCurrency,
    PricePerPerson,
    DurationValue,
    DurationUnit,
    MaxParticipants,
    MinParticipants,
    AverageRating,
    TotalReviews,
    IsActive,
    IsListed,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
