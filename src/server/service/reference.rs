//! Resolution of the foreign keys carried by create requests.
//!
//! Every lookup only accepts live rows; a soft-deleted tour or user cannot be referenced by a
//! new booking or review. Failures name the reference that did not resolve so the client can
//! tell a missing tour from a missing traveler.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::ConnectionTrait;

use crate::server::{
    data::{
        booking::booking::BookingRepository,
        tour::{
            category::TourCategoryRepository, destination::TourDestinationRepository,
            tour::TourRepository,
        },
        user::UserRepository,
    },
    error::{resource::ReferenceKind, Error},
    model::db::{BookingModel, TourCategoryModel, TourDestinationModel, TourModel, UserModel},
};

pub struct ReferenceValidator<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReferenceValidator<'a, C> {
    /// Creates a new instance of [`ReferenceValidator`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Resolves a live tour or fails with `ReferenceNotFound(Tour)`
    pub async fn tour(&self, tour_id: i32) -> Result<TourModel, Error> {
        TourRepository::new(self.db)
            .get(tour_id)
            .await?
            .ok_or(Error::ReferenceNotFound(ReferenceKind::Tour))
    }

    /// Resolves the live user making a booking
    pub async fn traveler(&self, traveler_id: i32) -> Result<UserModel, Error> {
        self.user(traveler_id, ReferenceKind::Traveler).await
    }

    /// Resolves the live user writing a review
    pub async fn reviewer(&self, reviewer_id: i32) -> Result<UserModel, Error> {
        self.user(reviewer_id, ReferenceKind::Reviewer).await
    }

    /// Resolves a live local expert
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The guide
    /// - `Err(Error::ReferenceNotFound)` - No live user with the ID
    /// - `Err(Error::MalformedInput)` - The user exists but is not a local expert
    pub async fn guide(&self, guide_id: i32) -> Result<UserModel, Error> {
        let guide = self.user(guide_id, ReferenceKind::Guide).await?;

        if guide.role != UserRole::LocalExpert {
            return Err(Error::MalformedInput(format!(
                "User {} is not a local expert",
                guide.id
            )));
        }

        Ok(guide)
    }

    /// Resolves a live booking referenced by a review
    pub async fn booking(&self, booking_id: i32) -> Result<BookingModel, Error> {
        BookingRepository::new(self.db)
            .get(booking_id)
            .await?
            .ok_or(Error::ReferenceNotFound(ReferenceKind::Booking))
    }

    pub async fn category(&self, category_id: i32) -> Result<TourCategoryModel, Error> {
        TourCategoryRepository::new(self.db)
            .get(category_id)
            .await?
            .ok_or(Error::ReferenceNotFound(ReferenceKind::Category))
    }

    pub async fn destination(&self, destination_id: i32) -> Result<TourDestinationModel, Error> {
        TourDestinationRepository::new(self.db)
            .get(destination_id)
            .await?
            .ok_or(Error::ReferenceNotFound(ReferenceKind::Destination))
    }

    async fn user(&self, user_id: i32, kind: ReferenceKind) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(Error::ReferenceNotFound(kind))
    }
}
