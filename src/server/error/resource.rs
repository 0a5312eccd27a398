use std::fmt;

/// Record kinds which may be looked up by id or business key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// A booking
    Booking,
    /// A participant attached to a booking
    Participant,
    /// The pricing breakdown of a booking
    Pricing,
    /// The hotel details of a booking
    HotelDetails,
    /// A payment recorded against a booking
    Payment,
    /// A review of a tour
    Review,
    /// A tour offering
    Tour,
    /// A user account
    User,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Booking => "Booking",
            Self::Participant => "Participant",
            Self::Pricing => "Pricing",
            Self::HotelDetails => "Hotel details",
            Self::Payment => "Payment",
            Self::Review => "Review",
            Self::Tour => "Tour",
            Self::User => "User",
        };

        f.write_str(name)
    }
}

/// Foreign references carried by a create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// The tour being booked or reviewed
    Tour,
    /// The traveler making a booking
    Traveler,
    /// The local expert running a tour
    Guide,
    /// The user writing a review
    Reviewer,
    /// The booking a review originates from
    Booking,
    /// The category a tour is listed under
    Category,
    /// The destination a tour takes place in
    Destination,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tour => "Tour",
            Self::Traveler => "Traveler",
            Self::Guide => "Guide",
            Self::Reviewer => "Reviewer",
            Self::Booking => "Booking",
            Self::Category => "Category",
            Self::Destination => "Destination",
        };

        f.write_str(name)
    }
}
