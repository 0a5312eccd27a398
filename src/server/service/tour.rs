//! Tour offerings published by local experts.
//!
//! A tour owns its images, itinerary, tags, includes and excludes; they are written together
//! with the tour and loaded with it. Deleting a tour is soft and leaves bookings and reviews
//! that reference it untouched.

use std::collections::{HashMap, HashSet};

use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel, TransactionTrait};

use crate::{
    model::{
        tour::{
            CategoryDto, CreateTourDto, DestinationDto, ItineraryDayDto, TourDetailDto, TourDto,
            TourImageDto, TourSummaryDto, UpdateTourDto,
        },
        user::UserDto,
    },
    server::{
        data::{
            query::{ListQuery, QueryParams, TourFilter},
            tour::{
                category::TourCategoryRepository, content::TourContentRepository,
                destination::TourDestinationRepository, tour::TourRepository,
            },
            user::UserRepository,
        },
        error::{resource::Resource, Error},
        model::db::{TourModel, UserModel},
        service::{booking::validate::validate_amount, reference::ReferenceValidator},
    },
};

const DEFAULT_CURRENCY: &str = "USD";

pub struct TourService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TourService<'a> {
    /// Creates a new instance of [`TourService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tour with every owned collection in one transaction
    ///
    /// # Returns
    /// - `Ok(TourDetailDto)` - The stored tour with its collections
    /// - `Err(Error::MalformedInput)` - Invalid price, duration or participant bounds, or a
    ///   guide who is not a local expert
    /// - `Err(Error::ReferenceNotFound)` - Guide, category or destination does not exist
    /// - `Err(Error::AlreadyExists)` - The slug is taken
    pub async fn create(&self, payload: CreateTourDto) -> Result<TourDetailDto, Error> {
        validate_amount("price_amount", payload.price_amount)?;
        validate_bounds(
            payload.duration_value,
            payload.min_participants,
            payload.max_participants,
        )?;
        if payload.title.trim().is_empty() || payload.slug.trim().is_empty() {
            return Err(Error::MalformedInput(
                "title and slug must not be empty".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let validator = ReferenceValidator::new(&txn);
        let guide = validator.guide(payload.guide_id).await?;
        let category = validator.category(payload.category_id).await?;
        let destination = validator.destination(payload.destination_id).await?;

        let tour_repo = TourRepository::new(&txn);
        if tour_repo.slug_exists(&payload.slug).await? {
            return Err(Error::AlreadyExists(Resource::Tour));
        }

        let tour = tour_repo
            .create(entity::tour::ActiveModel {
                title: ActiveValue::Set(payload.title),
                description: ActiveValue::Set(payload.description),
                short_description: ActiveValue::Set(payload.short_description),
                slug: ActiveValue::Set(payload.slug),
                category_id: ActiveValue::Set(category.id),
                destination_id: ActiveValue::Set(destination.id),
                guide_id: ActiveValue::Set(guide.id),
                price_amount: ActiveValue::Set(payload.price_amount),
                price_currency: ActiveValue::Set(
                    payload
                        .price_currency
                        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
                ),
                price_per_person: ActiveValue::Set(payload.price_per_person.unwrap_or(true)),
                duration_value: ActiveValue::Set(payload.duration_value),
                duration_unit: ActiveValue::Set(payload.duration_unit),
                max_participants: ActiveValue::Set(payload.max_participants),
                min_participants: ActiveValue::Set(payload.min_participants),
                average_rating: ActiveValue::Set(0.0),
                total_reviews: ActiveValue::Set(0),
                is_active: ActiveValue::Set(true),
                is_listed: ActiveValue::Set(true),
                ..Default::default()
            })
            .await?;

        let content_repo = TourContentRepository::new(&txn);
        for (position, image) in (0..).zip(payload.images) {
            content_repo
                .create_image(
                    tour.id,
                    position,
                    image.url,
                    image.alt,
                    image.caption,
                    image.is_main,
                )
                .await?;
        }
        for day in payload.itinerary {
            content_repo
                .create_itinerary_day(
                    tour.id,
                    day.day,
                    day.title,
                    day.description,
                    day.activities,
                    day.meals,
                )
                .await?;
        }
        for tag in payload.tags {
            content_repo.create_tag(tour.id, tag).await?;
        }
        for item in payload.includes {
            content_repo.create_include(tour.id, item).await?;
        }
        for item in payload.excludes {
            content_repo.create_exclude(tour.id, item).await?;
        }

        txn.commit().await?;

        tracing::info!("Created tour {} ({}) for guide {}", tour.id, tour.slug, guide.id);

        self.get(tour.id).await
    }

    /// Gets a live tour with its guide, category, destination and every owned collection
    pub async fn get(&self, tour_id: i32) -> Result<TourDetailDto, Error> {
        let tour = self.find(tour_id).await?;

        let guide = UserRepository::new(self.db)
            .get_many_including_deleted(vec![tour.guide_id])
            .await?
            .into_iter()
            .next();
        let category = TourCategoryRepository::new(self.db)
            .get_many(vec![tour.category_id])
            .await?
            .into_iter()
            .next();
        let destination = TourDestinationRepository::new(self.db)
            .get_many(vec![tour.destination_id])
            .await?
            .into_iter()
            .next();

        let content_repo = TourContentRepository::new(self.db);
        let images = content_repo.images(vec![tour.id]).await?;
        let itinerary = content_repo.itinerary(tour.id).await?;
        let tags = content_repo.tags(tour.id).await?;
        let includes = content_repo.includes(tour.id).await?;
        let excludes = content_repo.excludes(tour.id).await?;

        Ok(TourDetailDto {
            guide: guide.map(UserDto::from),
            category: category.map(CategoryDto::from),
            destination: destination.map(DestinationDto::from),
            images: images.into_iter().map(TourImageDto::from).collect(),
            itinerary: itinerary
                .into_iter()
                .map(|(day, activities, meals)| ItineraryDayDto {
                    id: day.id,
                    day: day.day,
                    title: day.title,
                    description: day.description,
                    activities: activities.into_iter().map(|a| a.activity).collect(),
                    meals: meals.into_iter().map(|m| m.meal).collect(),
                })
                .collect(),
            tags: tags.into_iter().map(|t| t.tag).collect(),
            includes: includes.into_iter().map(|i| i.item).collect(),
            excludes: excludes.into_iter().map(|e| e.item).collect(),
            tour: TourDto::from(tour),
        })
    }

    /// Lists a page of live tours with their guide, category, destination and images
    pub async fn list(&self, params: &QueryParams) -> Result<Vec<TourSummaryDto>, Error> {
        let tours = TourRepository::new(self.db)
            .list(ListQuery::<TourFilter>::from_params(params))
            .await?;

        if tours.is_empty() {
            return Ok(Vec::new());
        }

        let tour_ids: Vec<i32> = tours.iter().map(|t| t.id).collect();
        let guide_ids = unique(tours.iter().map(|t| t.guide_id));
        let category_ids = unique(tours.iter().map(|t| t.category_id));
        let destination_ids = unique(tours.iter().map(|t| t.destination_id));

        let guides: HashMap<i32, UserModel> = UserRepository::new(self.db)
            .get_many_including_deleted(guide_ids)
            .await?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();
        let categories: HashMap<i32, _> = TourCategoryRepository::new(self.db)
            .get_many(category_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        let destinations: HashMap<i32, _> = TourDestinationRepository::new(self.db)
            .get_many(destination_ids)
            .await?
            .into_iter()
            .map(|d| (d.id, d))
            .collect();

        let mut images: HashMap<i32, Vec<TourImageDto>> = HashMap::new();
        for image in TourContentRepository::new(self.db).images(tour_ids).await? {
            images.entry(image.tour_id).or_default().push(image.into());
        }

        Ok(tours
            .into_iter()
            .map(|tour| TourSummaryDto {
                guide: guides.get(&tour.guide_id).cloned().map(UserDto::from),
                category: categories.get(&tour.category_id).cloned().map(CategoryDto::from),
                destination: destinations
                    .get(&tour.destination_id)
                    .cloned()
                    .map(DestinationDto::from),
                images: images.remove(&tour.id).unwrap_or_default(),
                tour: TourDto::from(tour),
            })
            .collect())
    }

    /// Updates the supplied scalar fields of a live tour
    pub async fn update(&self, tour_id: i32, payload: UpdateTourDto) -> Result<TourModel, Error> {
        let tour = self.find(tour_id).await?;

        if let Some(price_amount) = payload.price_amount {
            validate_amount("price_amount", price_amount)?;
        }
        validate_bounds(
            payload.duration_value.unwrap_or(tour.duration_value),
            payload.min_participants.or(tour.min_participants),
            payload.max_participants.or(tour.max_participants),
        )?;

        let mut active = tour.into_active_model();
        if let Some(title) = payload.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = payload.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(short_description) = payload.short_description {
            active.short_description = ActiveValue::Set(Some(short_description));
        }
        if let Some(price_amount) = payload.price_amount {
            active.price_amount = ActiveValue::Set(price_amount);
        }
        if let Some(price_currency) = payload.price_currency {
            active.price_currency = ActiveValue::Set(price_currency);
        }
        if let Some(price_per_person) = payload.price_per_person {
            active.price_per_person = ActiveValue::Set(price_per_person);
        }
        if let Some(duration_value) = payload.duration_value {
            active.duration_value = ActiveValue::Set(duration_value);
        }
        if let Some(duration_unit) = payload.duration_unit {
            active.duration_unit = ActiveValue::Set(duration_unit);
        }
        if let Some(max_participants) = payload.max_participants {
            active.max_participants = ActiveValue::Set(Some(max_participants));
        }
        if let Some(min_participants) = payload.min_participants {
            active.min_participants = ActiveValue::Set(Some(min_participants));
        }
        if let Some(is_active) = payload.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        if let Some(is_listed) = payload.is_listed {
            active.is_listed = ActiveValue::Set(is_listed);
        }

        Ok(TourRepository::new(self.db).update(active).await?)
    }

    /// Soft-deletes a live tour
    pub async fn delete(&self, tour_id: i32) -> Result<(), Error> {
        let result = TourRepository::new(self.db).soft_delete(tour_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound(Resource::Tour));
        }

        tracing::info!("Deleted tour {}", tour_id);

        Ok(())
    }

    async fn find(&self, tour_id: i32) -> Result<TourModel, Error> {
        TourRepository::new(self.db)
            .get(tour_id)
            .await?
            .ok_or(Error::NotFound(Resource::Tour))
    }
}

fn validate_bounds(
    duration_value: i32,
    min_participants: Option<i32>,
    max_participants: Option<i32>,
) -> Result<(), Error> {
    if duration_value < 1 {
        return Err(Error::MalformedInput(
            "duration_value must be at least 1".to_string(),
        ));
    }

    if min_participants.is_some_and(|min| min < 1) || max_participants.is_some_and(|max| max < 1)
    {
        return Err(Error::MalformedInput(
            "participant bounds must be at least 1".to_string(),
        ));
    }

    if let (Some(min), Some(max)) = (min_participants, max_participants) {
        if min > max {
            return Err(Error::MalformedInput(
                "min_participants must not exceed max_participants".to_string(),
            ));
        }
    }

    Ok(())
}

fn unique(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    ids.collect::<HashSet<_>>().into_iter().collect()
}
