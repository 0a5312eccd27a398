use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::{BookingStatus, RefundStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{payment::PaymentDto, review::ReviewDto, tour::TourDto, user::UserDto};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub booking_reference: String,
    #[schema(value_type = String, example = "pending")]
    pub status: BookingStatus,
    pub traveler_id: i32,
    pub traveler_name: String,
    pub traveler_email: String,
    pub traveler_phone: Option<String>,
    pub tour_id: i32,
    pub tour_title: String,
    pub guide_id: i32,
    pub total_participants: i32,
    pub adult_count: i32,
    pub child_count: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub currency: String,
    pub special_requests: Option<String>,
    pub notes: Option<String>,
    pub is_cancelled: bool,
    pub cancelled_at: Option<NaiveDateTime>,
    pub cancellation_reason: Option<String>,
    pub refund_amount: Option<f64>,
    #[schema(value_type = Option<String>, example = "pending")]
    pub refund_status: Option<RefundStatus>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::booking::Model> for BookingDto {
    fn from(booking: entity::booking::Model) -> Self {
        Self {
            id: booking.id,
            booking_reference: booking.booking_reference,
            status: booking.status,
            traveler_id: booking.traveler_id,
            traveler_name: booking.traveler_name,
            traveler_email: booking.traveler_email,
            traveler_phone: booking.traveler_phone,
            tour_id: booking.tour_id,
            tour_title: booking.tour_title,
            guide_id: booking.guide_id,
            total_participants: booking.total_participants,
            adult_count: booking.adult_count,
            child_count: booking.child_count,
            start_date: booking.start_date,
            end_date: booking.end_date,
            total_price: booking.total_price,
            currency: booking.currency,
            special_requests: booking.special_requests,
            notes: booking.notes,
            is_cancelled: booking.is_cancelled,
            cancelled_at: booking.cancelled_at,
            cancellation_reason: booking.cancellation_reason,
            refund_amount: booking.refund_amount,
            refund_status: booking.refund_status,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

/// Booking as returned by the collection endpoint
///
/// Preferences, payments and the review are left out of list results to keep pages small,
/// fetch a single booking for the full aggregate.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingSummaryDto {
    #[serde(flatten)]
    pub booking: BookingDto,
    pub traveler: Option<UserDto>,
    pub tour: Option<TourDto>,
    pub guide: Option<UserDto>,
    pub participants: Vec<ParticipantDto>,
    pub pricing: Option<PricingDto>,
    pub hotel_details: Option<HotelDetailsDto>,
}

/// Booking with every relation of the aggregate loaded
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingDetailDto {
    #[serde(flatten)]
    pub booking: BookingDto,
    pub traveler: Option<UserDto>,
    pub tour: Option<TourDto>,
    pub guide: Option<UserDto>,
    pub participants: Vec<ParticipantDto>,
    pub pricing: Option<PricingDto>,
    pub hotel_details: Option<HotelDetailsDto>,
    pub preferences: Vec<PreferenceDto>,
    pub payments: Vec<PaymentDto>,
    pub review: Option<ReviewDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingDto {
    /// Generated as `BK-XXXXXXXX` when omitted
    pub booking_reference: Option<String>,
    pub traveler_id: i32,
    pub tour_id: i32,
    /// Taken from the tour when omitted, must match the tour's guide otherwise
    pub guide_id: Option<i32>,
    pub traveler_name: Option<String>,
    pub traveler_email: Option<String>,
    pub traveler_phone: Option<String>,
    pub tour_title: Option<String>,
    pub total_participants: i32,
    /// Defaults to `total_participants - child_count`
    pub adult_count: Option<i32>,
    pub child_count: Option<i32>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    /// Defaults to `USD`
    pub currency: Option<String>,
    pub special_requests: Option<String>,
    pub notes: Option<String>,
}

/// A booking together with its initial sub-records, persisted in one transaction
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingAggregateDto {
    #[serde(flatten)]
    pub booking: CreateBookingDto,
    #[serde(default)]
    pub participants: Vec<CreateParticipantDto>,
    pub pricing: Option<CreatePricingDto>,
    pub hotel_details: Option<CreateHotelDetailsDto>,
    #[serde(default)]
    pub preferences: Vec<String>,
}

/// Descriptive booking fields which may be edited after creation
///
/// Status, cancellation metadata and the tour, traveler and guide references are not part of
/// this payload; lifecycle changes go through the confirm, complete and cancel operations.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateBookingDto {
    pub traveler_name: Option<String>,
    pub traveler_email: Option<String>,
    pub traveler_phone: Option<String>,
    pub total_participants: Option<i32>,
    pub adult_count: Option<i32>,
    pub child_count: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_price: Option<f64>,
    pub currency: Option<String>,
    pub special_requests: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CancelBookingDto {
    #[serde(alias = "cancellation_reason")]
    pub reason: Option<String>,
    pub refund_amount: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ParticipantDto {
    pub id: i32,
    pub booking_id: i32,
    pub name: String,
    pub age: Option<i32>,
    pub passport_number: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::booking_participant::Model> for ParticipantDto {
    fn from(participant: entity::booking_participant::Model) -> Self {
        Self {
            id: participant.id,
            booking_id: participant.booking_id,
            name: participant.name,
            age: participant.age,
            passport_number: participant.passport_number,
            created_at: participant.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateParticipantDto {
    pub name: String,
    pub age: Option<i32>,
    pub passport_number: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PricingDto {
    pub id: i32,
    pub booking_id: i32,
    pub base_price: f64,
    pub price_per_person: f64,
    pub subtotal: f64,
    pub tax: Option<f64>,
    pub discount_amount: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub discount_code: Option<String>,
    pub total_price: f64,
    pub currency: String,
    pub updated_at: NaiveDateTime,
}

impl From<entity::booking_pricing::Model> for PricingDto {
    fn from(pricing: entity::booking_pricing::Model) -> Self {
        Self {
            id: pricing.id,
            booking_id: pricing.booking_id,
            base_price: pricing.base_price,
            price_per_person: pricing.price_per_person,
            subtotal: pricing.subtotal,
            tax: pricing.tax,
            discount_amount: pricing.discount_amount,
            discount_percentage: pricing.discount_percentage,
            discount_code: pricing.discount_code,
            total_price: pricing.total_price,
            currency: pricing.currency,
            updated_at: pricing.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePricingDto {
    pub base_price: f64,
    pub price_per_person: f64,
    pub subtotal: f64,
    pub tax: Option<f64>,
    pub discount_amount: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub discount_code: Option<String>,
    pub total_price: f64,
    /// Defaults to `USD`
    pub currency: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdatePricingDto {
    pub base_price: Option<f64>,
    pub price_per_person: Option<f64>,
    pub subtotal: Option<f64>,
    pub tax: Option<f64>,
    pub discount_amount: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub discount_code: Option<String>,
    pub total_price: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HotelDetailsDto {
    pub id: i32,
    pub booking_id: i32,
    pub hotel_name: String,
    pub room_number: Option<String>,
    pub address: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<entity::booking_hotel_details::Model> for HotelDetailsDto {
    fn from(hotel: entity::booking_hotel_details::Model) -> Self {
        Self {
            id: hotel.id,
            booking_id: hotel.booking_id,
            hotel_name: hotel.hotel_name,
            room_number: hotel.room_number,
            address: hotel.address,
            updated_at: hotel.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateHotelDetailsDto {
    pub hotel_name: String,
    pub room_number: Option<String>,
    pub address: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateHotelDetailsDto {
    pub hotel_name: Option<String>,
    pub room_number: Option<String>,
    pub address: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PreferenceDto {
    pub id: i32,
    pub booking_id: i32,
    pub preference: String,
}

impl From<entity::booking_preference::Model> for PreferenceDto {
    fn from(preference: entity::booking_preference::Model) -> Self {
        Self {
            id: preference.id,
            booking_id: preference.booking_id,
            preference: preference.preference,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePreferenceDto {
    pub preference: String,
}
