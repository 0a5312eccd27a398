use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::PaymentStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentDto {
    pub id: i32,
    pub booking_id: i32,
    pub payment_method: String,
    #[schema(value_type = String, example = "completed")]
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub paid_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::payment::Model> for PaymentDto {
    fn from(payment: entity::payment::Model) -> Self {
        Self {
            id: payment.id,
            booking_id: payment.booking_id,
            payment_method: payment.payment_method,
            status: payment.status,
            transaction_id: payment.transaction_id,
            amount: payment.amount,
            currency: payment.currency,
            paid_at: payment.paid_at,
            created_at: payment.created_at,
            updated_at: payment.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentDto {
    pub payment_method: String,
    /// Defaults to `pending`
    #[schema(value_type = Option<String>, example = "pending")]
    pub status: Option<PaymentStatus>,
    pub transaction_id: Option<String>,
    pub amount: f64,
    /// Defaults to `USD`
    pub currency: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatePaymentStatusDto {
    #[schema(value_type = String, example = "completed")]
    pub status: PaymentStatus,
}
