use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_user::User, m20251101_000003_tour::Tour};

static IDX_BOOKING_STATUS: &str = "idx-bookings-status";
static IDX_BOOKING_TRAVELER_ID: &str = "idx-bookings-traveler_id";
static IDX_BOOKING_TOUR_ID: &str = "idx-bookings-tour_id";
static FK_BOOKING_TRAVELER_ID: &str = "fk-bookings-traveler_id";
static FK_BOOKING_GUIDE_ID: &str = "fk-bookings-guide_id";
static FK_BOOKING_TOUR_ID: &str = "fk-bookings-tour_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(string_len_uniq(Booking::BookingReference, 50))
                    .col(string_len(Booking::Status, 20).default("pending"))
                    .col(integer(Booking::TravelerId))
                    .col(string(Booking::TravelerName))
                    .col(string(Booking::TravelerEmail))
                    .col(string_null(Booking::TravelerPhone))
                    .col(integer(Booking::TourId))
                    .col(string(Booking::TourTitle))
                    .col(integer(Booking::GuideId))
                    .col(integer(Booking::TotalParticipants))
                    .col(integer(Booking::AdultCount))
                    .col(integer(Booking::ChildCount).default(0))
                    .col(date(Booking::StartDate))
                    .col(date(Booking::EndDate))
                    .col(double(Booking::TotalPrice))
                    .col(string_len(Booking::Currency, 3).default("USD"))
                    .col(text_null(Booking::SpecialRequests))
                    .col(text_null(Booking::Notes))
                    .col(boolean(Booking::IsCancelled).default(false))
                    .col(timestamp_null(Booking::CancelledAt))
                    .col(text_null(Booking::CancellationReason))
                    .col(double_null(Booking::RefundAmount))
                    .col(string_len_null(Booking::RefundStatus, 20))
                    .col(timestamp(Booking::CreatedAt))
                    .col(timestamp(Booking::UpdatedAt))
                    .col(timestamp_null(Booking::DeletedAt))
                    .to_owned(),
            )
            .await?;

        for (name, col) in [
            (IDX_BOOKING_STATUS, Booking::Status),
            (IDX_BOOKING_TRAVELER_ID, Booking::TravelerId),
            (IDX_BOOKING_TOUR_ID, Booking::TourId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Booking::Table)
                        .col(col)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKING_TRAVELER_ID)
                    .from_tbl(Booking::Table)
                    .from_col(Booking::TravelerId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKING_GUIDE_ID)
                    .from_tbl(Booking::Table)
                    .from_col(Booking::GuideId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKING_TOUR_ID)
                    .from_tbl(Booking::Table)
                    .from_col(Booking::TourId)
                    .to_tbl(Tour::Table)
                    .to_col(Tour::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [FK_BOOKING_TOUR_ID, FK_BOOKING_GUIDE_ID, FK_BOOKING_TRAVELER_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(name)
                        .table(Booking::Table)
                        .to_owned(),
                )
                .await?;
        }

        for name in [IDX_BOOKING_TOUR_ID, IDX_BOOKING_TRAVELER_ID, IDX_BOOKING_STATUS] {
            manager
                .drop_index(Index::drop().name(name).table(Booking::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    #[sea_orm(iden = "bookings")]
    Table,
    Id,
    BookingReference,
    Status,
    TravelerId,
    TravelerName,
    TravelerEmail,
    TravelerPhone,
    TourId,
    TourTitle,
    GuideId,
    TotalParticipants,
    AdultCount,
    ChildCount,
    StartDate,
    EndDate,
    TotalPrice,
    Currency,
    SpecialRequests,
    Notes,
    IsCancelled,
    CancelledAt,
    CancellationReason,
    RefundAmount,
    RefundStatus,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
