use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000006_booking::Booking;

static IDX_PAYMENT_BOOKING_ID: &str = "idx-payments-booking_id";
static FK_PAYMENT_BOOKING_ID: &str = "fk-payments-booking_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer(Payment::BookingId))
                    .col(string_len(Payment::PaymentMethod, 50))
                    .col(string_len(Payment::Status, 20).default("pending"))
                    .col(string_null(Payment::TransactionId).unique_key())
                    .col(double(Payment::Amount))
                    .col(string_len(Payment::Currency, 3).default("USD"))
                    .col(timestamp_null(Payment::PaidAt))
                    .col(timestamp(Payment::CreatedAt))
                    .col(timestamp(Payment::UpdatedAt))
                    .col(timestamp_null(Payment::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PAYMENT_BOOKING_ID)
                    .table(Payment::Table)
                    .col(Payment::BookingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_BOOKING_ID)
                    .from_tbl(Payment::Table)
                    .from_col(Payment::BookingId)
                    .to_tbl(Booking::Table)
                    .to_col(Booking::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PAYMENT_BOOKING_ID)
                    .table(Payment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PAYMENT_BOOKING_ID)
                    .table(Payment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    #[sea_orm(iden = "payments")]
    Table,
    Id,
    BookingId,
    PaymentMethod,
    Status,
    TransactionId,
    Amount,
    Currency,
    PaidAt,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
