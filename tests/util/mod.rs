//! Payload builders and response helpers shared by the integration tests.

use axum::{body::to_bytes, response::Response};
use chrono::NaiveDate;
use tourbook::model::booking::{CreateBookingDto, CreateParticipantDto, CreatePricingDto};

/// Booking payload for two adults on 2024-06-01, priced at 200 USD
pub fn booking_payload(traveler_id: i32, tour_id: i32, reference: Option<&str>) -> CreateBookingDto {
    CreateBookingDto {
        booking_reference: reference.map(str::to_string),
        traveler_id,
        tour_id,
        guide_id: None,
        traveler_name: None,
        traveler_email: None,
        traveler_phone: None,
        tour_title: None,
        total_participants: 2,
        adult_count: None,
        child_count: None,
        start_date: date(2024, 6, 1),
        end_date: date(2024, 6, 1),
        total_price: 200.0,
        currency: None,
        special_requests: None,
        notes: None,
    }
}

pub fn participant_payload(name: &str, age: Option<i32>) -> CreateParticipantDto {
    CreateParticipantDto {
        name: name.to_string(),
        age,
        passport_number: None,
    }
}

/// Pricing of two people at 100 each with no tax or discount
pub fn pricing_payload() -> CreatePricingDto {
    CreatePricingDto {
        base_price: 100.0,
        price_per_person: 100.0,
        subtotal: 200.0,
        tax: None,
        discount_amount: None,
        discount_percentage: None,
        discount_code: None,
        total_price: 200.0,
        currency: None,
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Reads a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
