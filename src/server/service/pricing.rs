use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use crate::{
    model::booking::{CreatePricingDto, UpdatePricingDto},
    server::{
        data::booking::pricing::PricingRepository,
        error::{resource::Resource, Error},
        model::db::PricingModel,
        service::booking::{find_live_booking, validate::validate_amount},
    },
};

const DEFAULT_CURRENCY: &str = "USD";

pub struct PricingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PricingService<'a> {
    /// Creates a new instance of [`PricingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the pricing breakdown of a live booking
    ///
    /// # Returns
    /// - `Ok(PricingModel)` - The stored pricing
    /// - `Err(Error::NotFound)` - No live booking with the ID
    /// - `Err(Error::AlreadyExists)` - The booking already has pricing
    /// - `Err(Error::MalformedInput)` - A negative or non-finite amount
    pub async fn create(
        &self,
        booking_id: i32,
        payload: CreatePricingDto,
    ) -> Result<PricingModel, Error> {
        let model = pricing_model(booking_id, payload)?;
        let booking = find_live_booking(self.db, booking_id).await?;

        let pricing_repo = PricingRepository::new(self.db);
        if pricing_repo.get_by_booking(booking.id).await?.is_some() {
            return Err(Error::AlreadyExists(Resource::Pricing));
        }

        Ok(pricing_repo.create(model).await?)
    }

    /// Gets the pricing breakdown of a live booking
    pub async fn get(&self, booking_id: i32) -> Result<PricingModel, Error> {
        let booking = find_live_booking(self.db, booking_id).await?;

        PricingRepository::new(self.db)
            .get_by_booking(booking.id)
            .await?
            .ok_or(Error::NotFound(Resource::Pricing))
    }

    /// Updates the supplied fields of a live booking's pricing
    pub async fn update(
        &self,
        booking_id: i32,
        payload: UpdatePricingDto,
    ) -> Result<PricingModel, Error> {
        let pricing = self.get(booking_id).await?;

        let mut active = pricing.into_active_model();
        for (field, value, column) in [
            ("base_price", payload.base_price, &mut active.base_price),
            (
                "price_per_person",
                payload.price_per_person,
                &mut active.price_per_person,
            ),
            ("subtotal", payload.subtotal, &mut active.subtotal),
            ("total_price", payload.total_price, &mut active.total_price),
        ] {
            if let Some(value) = value {
                validate_amount(field, value)?;
                *column = ActiveValue::Set(value);
            }
        }

        for (field, value, column) in [
            ("tax", payload.tax, &mut active.tax),
            (
                "discount_amount",
                payload.discount_amount,
                &mut active.discount_amount,
            ),
            (
                "discount_percentage",
                payload.discount_percentage,
                &mut active.discount_percentage,
            ),
        ] {
            if let Some(value) = value {
                validate_amount(field, value)?;
                *column = ActiveValue::Set(Some(value));
            }
        }

        if let Some(discount_code) = payload.discount_code {
            active.discount_code = ActiveValue::Set(Some(discount_code));
        }
        if let Some(currency) = payload.currency {
            active.currency = ActiveValue::Set(currency);
        }

        Ok(PricingRepository::new(self.db).update(active).await?)
    }
}

/// Builds a pricing row for the booking after checking every amount
pub(crate) fn pricing_model(
    booking_id: i32,
    payload: CreatePricingDto,
) -> Result<entity::booking_pricing::ActiveModel, Error> {
    validate_amount("base_price", payload.base_price)?;
    validate_amount("price_per_person", payload.price_per_person)?;
    validate_amount("subtotal", payload.subtotal)?;
    validate_amount("total_price", payload.total_price)?;
    for (field, value) in [
        ("tax", payload.tax),
        ("discount_amount", payload.discount_amount),
        ("discount_percentage", payload.discount_percentage),
    ] {
        if let Some(value) = value {
            validate_amount(field, value)?;
        }
    }

    Ok(entity::booking_pricing::ActiveModel {
        booking_id: ActiveValue::Set(booking_id),
        base_price: ActiveValue::Set(payload.base_price),
        price_per_person: ActiveValue::Set(payload.price_per_person),
        subtotal: ActiveValue::Set(payload.subtotal),
        tax: ActiveValue::Set(payload.tax),
        discount_amount: ActiveValue::Set(payload.discount_amount),
        discount_percentage: ActiveValue::Set(payload.discount_percentage),
        discount_code: ActiveValue::Set(payload.discount_code),
        total_price: ActiveValue::Set(payload.total_price),
        currency: ActiveValue::Set(
            payload
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        ),
        ..Default::default()
    })
}
