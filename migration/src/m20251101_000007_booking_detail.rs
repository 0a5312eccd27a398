use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000006_booking::Booking;

static IDX_PARTICIPANT_BOOKING_ID: &str = "idx-booking_participants-booking_id";
static IDX_PREFERENCE_BOOKING_ID: &str = "idx-booking_preferences-booking_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(BookingParticipant::Id))
                    .col(integer(BookingParticipant::BookingId))
                    .col(string(BookingParticipant::Name))
                    .col(integer_null(BookingParticipant::Age))
                    .col(string_len_null(BookingParticipant::PassportNumber, 50))
                    .col(timestamp(BookingParticipant::CreatedAt))
                    .col(timestamp(BookingParticipant::UpdatedAt))
                    .col(timestamp_null(BookingParticipant::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-booking_participants-booking_id")
                            .from(BookingParticipant::Table, BookingParticipant::BookingId)
                            .to(Booking::Table, Booking::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PARTICIPANT_BOOKING_ID)
                    .table(BookingParticipant::Table)
                    .col(BookingParticipant::BookingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BookingPricing::Table)
                    .if_not_exists()
                    .col(pk_auto(BookingPricing::Id))
                    .col(integer_uniq(BookingPricing::BookingId))
                    .col(double(BookingPricing::BasePrice))
                    .col(double(BookingPricing::PricePerPerson))
                    .col(double(BookingPricing::Subtotal))
                    .col(double_null(BookingPricing::Tax))
                    .col(double_null(BookingPricing::DiscountAmount))
                    .col(double_null(BookingPricing::DiscountPercentage))
                    .col(string_len_null(BookingPricing::DiscountCode, 50))
                    .col(double(BookingPricing::TotalPrice))
                    .col(string_len(BookingPricing::Currency, 3).default("USD"))
                    .col(timestamp(BookingPricing::CreatedAt))
                    .col(timestamp(BookingPricing::UpdatedAt))
                    .col(timestamp_null(BookingPricing::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-booking_pricing-booking_id")
                            .from(BookingPricing::Table, BookingPricing::BookingId)
                            .to(Booking::Table, Booking::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BookingHotelDetails::Table)
                    .if_not_exists()
                    .col(pk_auto(BookingHotelDetails::Id))
                    .col(integer_uniq(BookingHotelDetails::BookingId))
                    .col(string(BookingHotelDetails::HotelName))
                    .col(string_len_null(BookingHotelDetails::RoomNumber, 50))
                    .col(text_null(BookingHotelDetails::Address))
                    .col(timestamp(BookingHotelDetails::CreatedAt))
                    .col(timestamp(BookingHotelDetails::UpdatedAt))
                    .col(timestamp_null(BookingHotelDetails::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-booking_hotel_details-booking_id")
                            .from(BookingHotelDetails::Table, BookingHotelDetails::BookingId)
                            .to(Booking::Table, Booking::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BookingPreference::Table)
                    .if_not_exists()
                    .col(pk_auto(BookingPreference::Id))
                    .col(integer(BookingPreference::BookingId))
                    .col(string(BookingPreference::Preference))
                    .col(timestamp(BookingPreference::CreatedAt))
                    .col(timestamp(BookingPreference::UpdatedAt))
                    .col(timestamp_null(BookingPreference::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-booking_preferences-booking_id")
                            .from(BookingPreference::Table, BookingPreference::BookingId)
                            .to(Booking::Table, Booking::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PREFERENCE_BOOKING_ID)
                    .table(BookingPreference::Table)
                    .col(BookingPreference::BookingId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingPreference::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BookingHotelDetails::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BookingPricing::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BookingParticipant::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BookingParticipant {
    #[sea_orm(iden = "booking_participants")]
    Table,
    Id,
    BookingId,
    Name,
    Age,
    PassportNumber,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum BookingPricing {
    #[sea_orm(iden = "booking_pricing")]
    Table,
    Id,
    BookingId,
    BasePrice,
    PricePerPerson,
    Subtotal,
    Tax,
    DiscountAmount,
    DiscountPercentage,
    DiscountCode,
    TotalPrice,
    Currency,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum BookingHotelDetails {
    #[sea_orm(iden = "booking_hotel_details")]
    Table,
    Id,
    BookingId,
    HotelName,
    RoomNumber,
    Address,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum BookingPreference {
    #[sea_orm(iden = "booking_preferences")]
    Table,
    Id,
    BookingId,
    Preference,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
