//! Booking aggregate lifecycle.
//!
//! A booking is created against a live tour and traveler, then moves through the status
//! operations defined in [`lifecycle`]. Sub-records are attached either in the same
//! transaction through [`BookingService::create_with_details`] or one at a time by the
//! sub-record services, which resolve the parent booking with [`find_live_booking`] before
//! writing.

pub mod lifecycle;
pub mod validate;

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use entity::sea_orm_active_enums::{BookingStatus, RefundStatus};
use sea_orm::{
    ActiveValue, ConnectionTrait, DatabaseConnection, IntoActiveModel, TransactionTrait,
};

use crate::{
    model::{
        booking::{
            BookingDetailDto, BookingDto, BookingSummaryDto, CancelBookingDto,
            CreateBookingAggregateDto, CreateBookingDto, ParticipantDto, UpdateBookingDto,
        },
        tour::TourDto,
        user::UserDto,
    },
    server::{
        data::{
            booking::{
                booking::BookingRepository, hotel::HotelDetailsRepository,
                participant::ParticipantRepository, payment::PaymentRepository,
                preference::PreferenceRepository, pricing::PricingRepository,
            },
            query::{BookingFilter, ListQuery, QueryParams},
            review::review::ReviewRepository,
            tour::tour::TourRepository,
            user::UserRepository,
        },
        error::{resource::Resource, Error},
        model::db::{BookingModel, TourModel, UserModel},
        service::{
            booking::{
                lifecycle::{transition, StatusOperation, Transition},
                validate::{default_adult_count, validate_amount, BookingShape},
            },
            hotel::hotel_details_model,
            participant::participant_model,
            pricing::pricing_model,
            reference::ReferenceValidator,
            review::assemble_reviews,
        },
        util::reference::generate_booking_reference,
    },
};

const DEFAULT_CURRENCY: &str = "USD";
const REFERENCE_ATTEMPTS: usize = 5;

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new instance of [`BookingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking after validating its payload and references
    ///
    /// Sub-records are not created; attach them afterwards through their own services.
    ///
    /// # Returns
    /// - `Ok(BookingModel)` - The persisted booking in `pending` status
    /// - `Err(Error::MalformedInput)` - Inconsistent counts, dates, price or guide
    /// - `Err(Error::ReferenceNotFound)` - Tour, traveler or the tour's guide is not live
    /// - `Err(Error::AlreadyExists)` - The supplied booking reference is taken
    pub async fn create(&self, payload: CreateBookingDto) -> Result<BookingModel, Error> {
        let booking = insert_booking(self.db, payload).await?;

        tracing::info!(
            "Created booking {} ({}) for tour {}",
            booking.id,
            booking.booking_reference,
            booking.tour_id
        );

        Ok(booking)
    }

    /// Creates a booking together with its participants, pricing, hotel details and
    /// preferences in one transaction
    ///
    /// Nothing is persisted unless every record is written.
    pub async fn create_with_details(
        &self,
        payload: CreateBookingAggregateDto,
    ) -> Result<BookingDetailDto, Error> {
        let CreateBookingAggregateDto {
            booking,
            participants,
            pricing,
            hotel_details,
            preferences,
        } = payload;

        let txn = self.db.begin().await?;

        let booking = insert_booking(&txn, booking).await?;

        let participant_repo = ParticipantRepository::new(&txn);
        for participant in participants {
            participant_repo
                .create(participant_model(booking.id, participant)?)
                .await?;
        }

        if let Some(pricing) = pricing {
            PricingRepository::new(&txn)
                .create(pricing_model(booking.id, pricing)?)
                .await?;
        }

        if let Some(hotel_details) = hotel_details {
            HotelDetailsRepository::new(&txn)
                .create(hotel_details_model(booking.id, hotel_details)?)
                .await?;
        }

        let preference_repo = PreferenceRepository::new(&txn);
        for preference in preferences {
            preference_repo.create(booking.id, preference).await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Created booking {} ({}) with details for tour {}",
            booking.id,
            booking.booking_reference,
            booking.tour_id
        );

        self.load_detail(booking).await
    }

    /// Gets a live booking with every relation of the aggregate
    pub async fn get(&self, booking_id: i32) -> Result<BookingDetailDto, Error> {
        let booking = find_live_booking(self.db, booking_id).await?;

        self.load_detail(booking).await
    }

    /// Gets a live booking by its business reference with every relation of the aggregate
    pub async fn get_by_reference(&self, reference: &str) -> Result<BookingDetailDto, Error> {
        let booking = BookingRepository::new(self.db)
            .get_by_reference(reference)
            .await?
            .ok_or(Error::NotFound(Resource::Booking))?;

        self.load_detail(booking).await
    }

    /// Lists a page of live bookings with their summary relations
    ///
    /// Preferences, payments and reviews are not loaded for list results.
    pub async fn list(&self, params: &QueryParams) -> Result<Vec<BookingSummaryDto>, Error> {
        let bookings = BookingRepository::new(self.db)
            .list(ListQuery::<BookingFilter>::from_params(params))
            .await?;

        if bookings.is_empty() {
            return Ok(Vec::new());
        }

        let booking_ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
        let user_ids: Vec<i32> = bookings
            .iter()
            .flat_map(|b| [b.traveler_id, b.guide_id])
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let tour_ids: Vec<i32> = bookings
            .iter()
            .map(|b| b.tour_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let users: HashMap<i32, UserModel> = UserRepository::new(self.db)
            .get_many_including_deleted(user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();
        let tours: HashMap<i32, TourModel> = TourRepository::new(self.db)
            .get_many_including_deleted(tour_ids)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        let mut participants: HashMap<i32, Vec<ParticipantDto>> = HashMap::new();
        for participant in ParticipantRepository::new(self.db)
            .get_by_bookings(booking_ids.clone())
            .await?
        {
            participants
                .entry(participant.booking_id)
                .or_default()
                .push(participant.into());
        }

        let mut pricing: HashMap<i32, _> = PricingRepository::new(self.db)
            .get_by_bookings(booking_ids.clone())
            .await?
            .into_iter()
            .map(|p| (p.booking_id, p))
            .collect();
        let mut hotel_details: HashMap<i32, _> = HotelDetailsRepository::new(self.db)
            .get_by_bookings(booking_ids)
            .await?
            .into_iter()
            .map(|h| (h.booking_id, h))
            .collect();

        let summaries = bookings
            .into_iter()
            .map(|booking| BookingSummaryDto {
                traveler: users.get(&booking.traveler_id).cloned().map(UserDto::from),
                tour: tours.get(&booking.tour_id).cloned().map(TourDto::from),
                guide: users.get(&booking.guide_id).cloned().map(UserDto::from),
                participants: participants.remove(&booking.id).unwrap_or_default(),
                pricing: pricing.remove(&booking.id).map(Into::into),
                hotel_details: hotel_details.remove(&booking.id).map(Into::into),
                booking: BookingDto::from(booking),
            })
            .collect();

        Ok(summaries)
    }

    /// Edits the descriptive fields of a live booking
    ///
    /// Status, cancellation metadata and references cannot be changed here.
    pub async fn update(
        &self,
        booking_id: i32,
        payload: UpdateBookingDto,
    ) -> Result<BookingModel, Error> {
        let booking = find_live_booking(self.db, booking_id).await?;

        let shape = BookingShape {
            total_participants: payload
                .total_participants
                .unwrap_or(booking.total_participants),
            adult_count: payload.adult_count.unwrap_or(booking.adult_count),
            child_count: payload.child_count.unwrap_or(booking.child_count),
            start_date: payload.start_date.unwrap_or(booking.start_date),
            end_date: payload.end_date.unwrap_or(booking.end_date),
            total_price: payload.total_price.unwrap_or(booking.total_price),
        };
        shape.validate()?;

        if shape.total_participants != booking.total_participants {
            let tour = TourRepository::new(self.db)
                .get_many_including_deleted(vec![booking.tour_id])
                .await?
                .into_iter()
                .next();
            if let Some(tour) = tour {
                check_tour_capacity(&tour, shape.total_participants)?;
            }
        }

        let mut active = booking.into_active_model();
        active.total_participants = ActiveValue::Set(shape.total_participants);
        active.adult_count = ActiveValue::Set(shape.adult_count);
        active.child_count = ActiveValue::Set(shape.child_count);
        active.start_date = ActiveValue::Set(shape.start_date);
        active.end_date = ActiveValue::Set(shape.end_date);
        active.total_price = ActiveValue::Set(shape.total_price);

        if let Some(traveler_name) = payload.traveler_name {
            active.traveler_name = ActiveValue::Set(traveler_name);
        }
        if let Some(traveler_email) = payload.traveler_email {
            active.traveler_email = ActiveValue::Set(traveler_email);
        }
        if let Some(traveler_phone) = payload.traveler_phone {
            active.traveler_phone = ActiveValue::Set(Some(traveler_phone));
        }
        if let Some(currency) = payload.currency {
            active.currency = ActiveValue::Set(currency);
        }
        if let Some(special_requests) = payload.special_requests {
            active.special_requests = ActiveValue::Set(Some(special_requests));
        }
        if let Some(notes) = payload.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }

        Ok(BookingRepository::new(self.db).update(active).await?)
    }

    /// Moves a pending booking to `confirmed`
    pub async fn confirm(&self, booking_id: i32) -> Result<BookingModel, Error> {
        self.advance(booking_id, StatusOperation::Confirm).await
    }

    /// Moves a confirmed booking to `completed`
    pub async fn complete(&self, booking_id: i32) -> Result<BookingModel, Error> {
        self.advance(booking_id, StatusOperation::Complete).await
    }

    /// Cancels a pending or confirmed booking, recording the reason and a pending refund
    ///
    /// Cancelling a booking that is already cancelled returns it unchanged; the reason,
    /// refund amount and timestamp of the first cancellation are kept.
    ///
    /// # Returns
    /// - `Ok(BookingModel)` - The cancelled booking
    /// - `Err(Error::NotFound)` - No live booking with the ID
    /// - `Err(Error::MalformedInput)` - Negative refund amount
    /// - `Err(Error::Lifecycle)` - The booking is completed
    pub async fn cancel(
        &self,
        booking_id: i32,
        payload: CancelBookingDto,
    ) -> Result<BookingModel, Error> {
        if let Some(refund_amount) = payload.refund_amount {
            validate_amount("refund_amount", refund_amount)?;
        }

        let booking = find_live_booking(self.db, booking_id).await?;

        let status = match transition(booking.status, StatusOperation::Cancel)? {
            Transition::Apply(status) => status,
            Transition::Unchanged => {
                tracing::warn!(
                    "Booking {} is already cancelled; keeping the original cancellation",
                    booking.id
                );

                return Ok(booking);
            }
        };

        let mut active = booking.into_active_model();
        active.status = ActiveValue::Set(status);
        active.is_cancelled = ActiveValue::Set(true);
        active.cancelled_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
        active.cancellation_reason = ActiveValue::Set(payload.reason);
        active.refund_amount = ActiveValue::Set(payload.refund_amount);
        active.refund_status = ActiveValue::Set(Some(RefundStatus::Pending));

        let booking = BookingRepository::new(self.db).update(active).await?;

        tracing::info!("Cancelled booking {}", booking.id);

        Ok(booking)
    }

    /// Soft-deletes a live booking, leaving its sub-records and review in place
    pub async fn delete(&self, booking_id: i32) -> Result<(), Error> {
        let result = BookingRepository::new(self.db)
            .soft_delete(booking_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound(Resource::Booking));
        }

        tracing::info!("Deleted booking {}", booking_id);

        Ok(())
    }

    async fn advance(
        &self,
        booking_id: i32,
        operation: StatusOperation,
    ) -> Result<BookingModel, Error> {
        let booking = find_live_booking(self.db, booking_id).await?;

        let status = match transition(booking.status, operation)? {
            Transition::Apply(status) => status,
            Transition::Unchanged => return Ok(booking),
        };

        let from = booking.status;
        let mut active = booking.into_active_model();
        active.status = ActiveValue::Set(status);

        let booking = BookingRepository::new(self.db).update(active).await?;

        tracing::info!("Booking {} moved from {} to {}", booking.id, from, status);

        Ok(booking)
    }

    async fn load_detail(&self, booking: BookingModel) -> Result<BookingDetailDto, Error> {
        let users: HashMap<i32, UserModel> = UserRepository::new(self.db)
            .get_many_including_deleted(vec![booking.traveler_id, booking.guide_id])
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();
        let tour = TourRepository::new(self.db)
            .get_many_including_deleted(vec![booking.tour_id])
            .await?
            .into_iter()
            .next();

        let participants = ParticipantRepository::new(self.db)
            .get_by_booking(booking.id)
            .await?;
        let pricing = PricingRepository::new(self.db)
            .get_by_booking(booking.id)
            .await?;
        let hotel_details = HotelDetailsRepository::new(self.db)
            .get_by_booking(booking.id)
            .await?;
        let preferences = PreferenceRepository::new(self.db)
            .get_by_booking(booking.id)
            .await?;
        let payments = PaymentRepository::new(self.db)
            .get_by_booking(booking.id)
            .await?;

        let review = match ReviewRepository::new(self.db)
            .get_by_booking(booking.id)
            .await?
        {
            Some(review) => assemble_reviews(self.db, vec![review])
                .await?
                .into_iter()
                .next(),
            None => None,
        };

        Ok(BookingDetailDto {
            traveler: users.get(&booking.traveler_id).cloned().map(UserDto::from),
            tour: tour.map(TourDto::from),
            guide: users.get(&booking.guide_id).cloned().map(UserDto::from),
            participants: participants.into_iter().map(Into::into).collect(),
            pricing: pricing.map(Into::into),
            hotel_details: hotel_details.map(Into::into),
            preferences: preferences.into_iter().map(Into::into).collect(),
            payments: payments.into_iter().map(Into::into).collect(),
            review,
            booking: BookingDto::from(booking),
        })
    }
}

/// Resolves a live booking or fails with `NotFound(Booking)`
pub(crate) async fn find_live_booking<C: ConnectionTrait>(
    db: &C,
    booking_id: i32,
) -> Result<BookingModel, Error> {
    BookingRepository::new(db)
        .get(booking_id)
        .await?
        .ok_or(Error::NotFound(Resource::Booking))
}

fn check_tour_capacity(tour: &TourModel, total_participants: i32) -> Result<(), Error> {
    if let Some(max_participants) = tour.max_participants {
        if total_participants > max_participants {
            return Err(Error::MalformedInput(format!(
                "total_participants exceeds the tour maximum of {}",
                max_participants
            )));
        }
    }

    Ok(())
}

async fn insert_booking<C: ConnectionTrait>(
    db: &C,
    payload: CreateBookingDto,
) -> Result<BookingModel, Error> {
    let child_count = payload.child_count.unwrap_or(0);
    let shape = BookingShape {
        total_participants: payload.total_participants,
        adult_count: match payload.adult_count {
            Some(adult_count) => adult_count,
            None => default_adult_count(payload.total_participants, child_count)?,
        },
        child_count,
        start_date: payload.start_date,
        end_date: payload.end_date,
        total_price: payload.total_price,
    };
    shape.validate()?;

    let validator = ReferenceValidator::new(db);
    let tour = validator.tour(payload.tour_id).await?;
    let traveler = validator.traveler(payload.traveler_id).await?;

    if let Some(guide_id) = payload.guide_id {
        if guide_id != tour.guide_id {
            return Err(Error::MalformedInput(format!(
                "guide_id {} does not match the guide of tour {}",
                guide_id, tour.id
            )));
        }
    }
    let guide = validator.guide(tour.guide_id).await?;

    check_tour_capacity(&tour, shape.total_participants)?;

    let booking_reference = resolve_reference(db, payload.booking_reference).await?;

    let booking = entity::booking::ActiveModel {
        booking_reference: ActiveValue::Set(booking_reference),
        status: ActiveValue::Set(BookingStatus::Pending),
        traveler_id: ActiveValue::Set(traveler.id),
        traveler_name: ActiveValue::Set(
            payload
                .traveler_name
                .unwrap_or_else(|| format!("{} {}", traveler.first_name, traveler.last_name)),
        ),
        traveler_email: ActiveValue::Set(payload.traveler_email.unwrap_or(traveler.email)),
        traveler_phone: ActiveValue::Set(payload.traveler_phone.or(traveler.phone)),
        tour_id: ActiveValue::Set(tour.id),
        tour_title: ActiveValue::Set(payload.tour_title.unwrap_or(tour.title)),
        guide_id: ActiveValue::Set(guide.id),
        total_participants: ActiveValue::Set(shape.total_participants),
        adult_count: ActiveValue::Set(shape.adult_count),
        child_count: ActiveValue::Set(shape.child_count),
        start_date: ActiveValue::Set(shape.start_date),
        end_date: ActiveValue::Set(shape.end_date),
        total_price: ActiveValue::Set(shape.total_price),
        currency: ActiveValue::Set(
            payload
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        ),
        special_requests: ActiveValue::Set(payload.special_requests),
        notes: ActiveValue::Set(payload.notes),
        is_cancelled: ActiveValue::Set(false),
        ..Default::default()
    };

    Ok(BookingRepository::new(db).create(booking).await?)
}

/// Uses the supplied reference if it is free, otherwise generates an unused one
async fn resolve_reference<C: ConnectionTrait>(
    db: &C,
    requested: Option<String>,
) -> Result<String, Error> {
    let booking_repo = BookingRepository::new(db);

    if let Some(reference) = requested {
        let reference = reference.trim().to_string();
        if reference.is_empty() {
            return Err(Error::MalformedInput(
                "booking_reference must not be empty".to_string(),
            ));
        }

        if booking_repo.reference_exists(&reference).await? {
            return Err(Error::AlreadyExists(Resource::Booking));
        }

        return Ok(reference);
    }

    for _ in 0..REFERENCE_ATTEMPTS {
        let reference = generate_booking_reference();
        if !booking_repo.reference_exists(&reference).await? {
            return Ok(reference);
        }
    }

    tracing::error!(
        "Failed to generate an unused booking reference after {} attempts",
        REFERENCE_ATTEMPTS
    );

    Err(Error::AlreadyExists(Resource::Booking))
}
