//! Shape checks applied to booking payloads before anything is read or written.

use chrono::NaiveDate;

use crate::server::error::Error;

/// Participant counts, dates and price of a booking, after defaults have been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingShape {
    pub total_participants: i32,
    pub adult_count: i32,
    pub child_count: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
}

impl BookingShape {
    /// Checks the counts, date range and price are consistent
    pub fn validate(&self) -> Result<(), Error> {
        if self.total_participants < 1 {
            return Err(malformed("total_participants must be at least 1"));
        }

        if self.adult_count < 0 || self.child_count < 0 {
            return Err(malformed("adult_count and child_count must not be negative"));
        }

        let counted = self
            .adult_count
            .checked_add(self.child_count)
            .ok_or_else(|| malformed("participant counts are out of range"))?;
        if counted > self.total_participants {
            return Err(malformed(
                "adult_count and child_count must not exceed total_participants",
            ));
        }

        if self.end_date < self.start_date {
            return Err(malformed("end_date must not be before start_date"));
        }

        validate_amount("total_price", self.total_price)
    }
}

/// Adult count when only the child count is given: everyone else is an adult
pub fn default_adult_count(total_participants: i32, child_count: i32) -> Result<i32, Error> {
    if child_count < 0 {
        return Err(malformed("adult_count and child_count must not be negative"));
    }

    total_participants
        .checked_sub(child_count)
        .ok_or_else(|| malformed("participant counts are out of range"))
}

/// Fails unless `amount` is a finite, non-negative number
pub fn validate_amount(field: &str, amount: f64) -> Result<(), Error> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::MalformedInput(format!(
            "{field} must be a non-negative number"
        )));
    }

    Ok(())
}

fn malformed(message: &str) -> Error {
    Error::MalformedInput(message.to_string())
}
