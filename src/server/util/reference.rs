//! Booking reference generation.

use rand::Rng;

/// Prefix carried by every generated booking reference.
pub const BOOKING_REFERENCE_PREFIX: &str = "BK-";

const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const REFERENCE_LENGTH: usize = 8;

/// Generates a booking reference such as `BK-7Q2XK9LM`.
///
/// Uniqueness is not guaranteed; callers check the generated value against stored
/// references before using it.
pub fn generate_booking_reference() -> String {
    let mut rng = rand::rng();

    let code: String = (0..REFERENCE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..REFERENCE_CHARSET.len());
            REFERENCE_CHARSET[idx] as char
        })
        .collect();

    format!("{BOOKING_REFERENCE_PREFIX}{code}")
}
