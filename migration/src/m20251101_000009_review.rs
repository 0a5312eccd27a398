use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_user::User, m20251101_000003_tour::Tour, m20251101_000006_booking::Booking,
};

static IDX_REVIEW_TOUR_ID: &str = "idx-reviews-tour_id";
static IDX_REVIEW_GUIDE_ID: &str = "idx-reviews-guide_id";
static IDX_REVIEW_BOOKING_ID: &str = "idx-reviews-booking_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::TourId))
                    .col(integer(Review::GuideId))
                    .col(integer_null(Review::BookingId))
                    .col(integer(Review::ReviewerId))
                    .col(string(Review::ReviewerName))
                    .col(string_null(Review::ReviewerImage))
                    .col(string(Review::Title))
                    .col(text(Review::Comment))
                    .col(integer(Review::Rating))
                    .col(integer(Review::HelpfulCount).default(0))
                    .col(boolean(Review::Verified).default(false))
                    .col(text_null(Review::GuideResponse))
                    .col(timestamp_null(Review::GuideResponseDate))
                    .col(timestamp(Review::CreatedAt))
                    .col(timestamp(Review::UpdatedAt))
                    .col(timestamp_null(Review::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reviews-tour_id")
                            .from(Review::Table, Review::TourId)
                            .to(Tour::Table, Tour::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reviews-guide_id")
                            .from(Review::Table, Review::GuideId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reviews-reviewer_id")
                            .from(Review::Table, Review::ReviewerId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reviews-booking_id")
                            .from(Review::Table, Review::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, col) in [
            (IDX_REVIEW_TOUR_ID, Review::TourId),
            (IDX_REVIEW_GUIDE_ID, Review::GuideId),
            (IDX_REVIEW_BOOKING_ID, Review::BookingId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Review::Table)
                        .col(col)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(ReviewDetailedRatings::Table)
                    .if_not_exists()
                    .col(pk_auto(ReviewDetailedRatings::Id))
                    .col(integer_uniq(ReviewDetailedRatings::ReviewId))
                    .col(integer_null(ReviewDetailedRatings::Accuracy))
                    .col(integer_null(ReviewDetailedRatings::Communication))
                    .col(integer_null(ReviewDetailedRatings::Cleanliness))
                    .col(integer_null(ReviewDetailedRatings::Location))
                    .col(integer_null(ReviewDetailedRatings::Value))
                    .col(timestamp(ReviewDetailedRatings::CreatedAt))
                    .col(timestamp(ReviewDetailedRatings::UpdatedAt))
                    .col(timestamp_null(ReviewDetailedRatings::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-review_detailed_ratings-review_id")
                            .from(ReviewDetailedRatings::Table, ReviewDetailedRatings::ReviewId)
                            .to(Review::Table, Review::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReviewImage::Table)
                    .if_not_exists()
                    .col(pk_auto(ReviewImage::Id))
                    .col(integer(ReviewImage::ReviewId))
                    .col(string(ReviewImage::ImageUrl))
                    .col(timestamp(ReviewImage::CreatedAt))
                    .col(timestamp(ReviewImage::UpdatedAt))
                    .col(timestamp_null(ReviewImage::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-review_images-review_id")
                            .from(ReviewImage::Table, ReviewImage::ReviewId)
                            .to(Review::Table, Review::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReviewImage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ReviewDetailedRatings::Table).to_owned())
            .await?;

        for name in [IDX_REVIEW_BOOKING_ID, IDX_REVIEW_GUIDE_ID, IDX_REVIEW_TOUR_ID] {
            manager
                .drop_index(Index::drop().name(name).table(Review::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Review {
    #[sea_orm(iden = "reviews")]
    Table,
    Id,
    TourId,
    GuideId,
    BookingId,
    ReviewerId,
    ReviewerName,
    ReviewerImage,
    Title,
    Comment,
    Rating,
    HelpfulCount,
    Verified,
    GuideResponse,
    GuideResponseDate,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum ReviewDetailedRatings {
    #[sea_orm(iden = "review_detailed_ratings")]
    Table,
    Id,
    ReviewId,
    Accuracy,
    Communication,
    Cleanliness,
    Location,
    Value,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum ReviewImage {
    #[sea_orm(iden = "review_images")]
    Table,
    Id,
    ReviewId,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
