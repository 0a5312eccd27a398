//! Payment bookkeeping for bookings.
//!
//! Payments are records of settlement attempts; no gateway is contacted. A payment's status
//! moves independently of its booking's status.

use chrono::Utc;
use entity::sea_orm_active_enums::PaymentStatus;
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use crate::{
    model::payment::CreatePaymentDto,
    server::{
        data::booking::payment::PaymentRepository,
        error::{resource::Resource, Error},
        model::db::PaymentModel,
        service::booking::{find_live_booking, validate::validate_amount},
    },
};

const DEFAULT_CURRENCY: &str = "USD";

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    /// Creates a new instance of [`PaymentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment against a live booking
    ///
    /// # Returns
    /// - `Ok(PaymentModel)` - The recorded payment, `pending` unless another status is given
    /// - `Err(Error::NotFound)` - No live booking with the ID
    /// - `Err(Error::AlreadyExists)` - The transaction ID is already recorded
    /// - `Err(Error::MalformedInput)` - Empty payment method or invalid amount
    pub async fn create(
        &self,
        booking_id: i32,
        payload: CreatePaymentDto,
    ) -> Result<PaymentModel, Error> {
        if payload.payment_method.trim().is_empty() {
            return Err(Error::MalformedInput(
                "payment_method must not be empty".to_string(),
            ));
        }
        validate_amount("amount", payload.amount)?;

        let booking = find_live_booking(self.db, booking_id).await?;

        let payment_repo = PaymentRepository::new(self.db);
        if let Some(transaction_id) = &payload.transaction_id {
            if payment_repo.transaction_exists(transaction_id).await? {
                return Err(Error::AlreadyExists(Resource::Payment));
            }
        }

        let status = payload.status.unwrap_or(PaymentStatus::Pending);
        let paid_at = (status == PaymentStatus::Completed).then(|| Utc::now().naive_utc());

        let payment = payment_repo
            .create(entity::payment::ActiveModel {
                booking_id: ActiveValue::Set(booking.id),
                payment_method: ActiveValue::Set(payload.payment_method),
                status: ActiveValue::Set(status),
                transaction_id: ActiveValue::Set(payload.transaction_id),
                amount: ActiveValue::Set(payload.amount),
                currency: ActiveValue::Set(
                    payload
                        .currency
                        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
                ),
                paid_at: ActiveValue::Set(paid_at),
                ..Default::default()
            })
            .await?;

        tracing::info!(
            "Recorded {} payment {} for booking {}",
            payment.status,
            payment.id,
            booking.id
        );

        Ok(payment)
    }

    /// Gets the payments of a live booking, oldest first
    pub async fn list(&self, booking_id: i32) -> Result<Vec<PaymentModel>, Error> {
        let booking = find_live_booking(self.db, booking_id).await?;

        Ok(PaymentRepository::new(self.db)
            .get_by_booking(booking.id)
            .await?)
    }

    /// Gets a payment of a live booking
    pub async fn get(&self, booking_id: i32, payment_id: i32) -> Result<PaymentModel, Error> {
        let booking = find_live_booking(self.db, booking_id).await?;

        PaymentRepository::new(self.db)
            .get(booking.id, payment_id)
            .await?
            .ok_or(Error::NotFound(Resource::Payment))
    }

    /// Changes only the status of a payment
    ///
    /// `paid_at` is stamped the first time the payment becomes `completed` and kept
    /// afterwards, including when the payment is later refunded.
    pub async fn update_status(
        &self,
        booking_id: i32,
        payment_id: i32,
        status: PaymentStatus,
    ) -> Result<PaymentModel, Error> {
        let payment = self.get(booking_id, payment_id).await?;

        if payment.status == status {
            return Ok(payment);
        }

        let from = payment.status;
        let first_completion = status == PaymentStatus::Completed && payment.paid_at.is_none();

        let mut active = payment.into_active_model();
        active.status = ActiveValue::Set(status);
        if first_completion {
            active.paid_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
        }

        let payment = PaymentRepository::new(self.db).update(active).await?;

        tracing::info!("Payment {} moved from {} to {}", payment.id, from, status);

        Ok(payment)
    }
}
