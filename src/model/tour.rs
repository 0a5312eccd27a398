use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::DurationUnit;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TourDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub short_description: Option<String>,
    pub slug: String,
    pub category_id: i32,
    pub destination_id: i32,
    pub guide_id: i32,
    pub price_amount: f64,
    pub price_currency: String,
    pub price_per_person: bool,
    pub duration_value: i32,
    #[schema(value_type = String, example = "days")]
    pub duration_unit: DurationUnit,
    pub max_participants: Option<i32>,
    pub min_participants: Option<i32>,
    pub average_rating: f64,
    pub total_reviews: i32,
    pub is_active: bool,
    pub is_listed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::tour::Model> for TourDto {
    fn from(tour: entity::tour::Model) -> Self {
        Self {
            id: tour.id,
            title: tour.title,
            description: tour.description,
            short_description: tour.short_description,
            slug: tour.slug,
            category_id: tour.category_id,
            destination_id: tour.destination_id,
            guide_id: tour.guide_id,
            price_amount: tour.price_amount,
            price_currency: tour.price_currency,
            price_per_person: tour.price_per_person,
            duration_value: tour.duration_value,
            duration_unit: tour.duration_unit,
            max_participants: tour.max_participants,
            min_participants: tour.min_participants,
            average_rating: tour.average_rating,
            total_reviews: tour.total_reviews,
            is_active: tour.is_active,
            is_listed: tour.is_listed,
            created_at: tour.created_at,
            updated_at: tour.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<entity::tour_category::Model> for CategoryDto {
    fn from(category: entity::tour_category::Model) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DestinationDto {
    pub id: i32,
    pub city: String,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<entity::tour_destination::Model> for DestinationDto {
    fn from(destination: entity::tour_destination::Model) -> Self {
        Self {
            id: destination.id,
            city: destination.city,
            country: destination.country,
            latitude: destination.latitude,
            longitude: destination.longitude,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TourImageDto {
    pub id: i32,
    pub url: String,
    pub alt: Option<String>,
    pub caption: Option<String>,
    pub is_main: bool,
}

impl From<entity::tour_image::Model> for TourImageDto {
    fn from(image: entity::tour_image::Model) -> Self {
        Self {
            id: image.id,
            url: image.url,
            alt: image.alt,
            caption: image.caption,
            is_main: image.is_main,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ItineraryDayDto {
    pub id: i32,
    pub day: i32,
    pub title: String,
    pub description: Option<String>,
    pub activities: Vec<String>,
    pub meals: Vec<String>,
}

/// Tour as returned by the collection endpoint, with the relations shown on listing cards
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TourSummaryDto {
    #[serde(flatten)]
    pub tour: TourDto,
    pub guide: Option<UserDto>,
    pub category: Option<CategoryDto>,
    pub destination: Option<DestinationDto>,
    pub images: Vec<TourImageDto>,
}

/// Tour with every owned collection loaded
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TourDetailDto {
    #[serde(flatten)]
    pub tour: TourDto,
    pub guide: Option<UserDto>,
    pub category: Option<CategoryDto>,
    pub destination: Option<DestinationDto>,
    pub images: Vec<TourImageDto>,
    pub itinerary: Vec<ItineraryDayDto>,
    pub tags: Vec<String>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTourImageDto {
    pub url: String,
    pub alt: Option<String>,
    pub caption: Option<String>,
    #[serde(default)]
    pub is_main: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateItineraryDayDto {
    pub day: i32,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub meals: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTourDto {
    pub title: String,
    pub description: String,
    pub short_description: Option<String>,
    pub slug: String,
    pub category_id: i32,
    pub destination_id: i32,
    pub guide_id: i32,
    pub price_amount: f64,
    /// Defaults to `USD`
    pub price_currency: Option<String>,
    /// Defaults to `true`
    pub price_per_person: Option<bool>,
    pub duration_value: i32,
    #[schema(value_type = String, example = "days")]
    pub duration_unit: DurationUnit,
    pub max_participants: Option<i32>,
    pub min_participants: Option<i32>,
    #[serde(default)]
    pub images: Vec<CreateTourImageDto>,
    #[serde(default)]
    pub itinerary: Vec<CreateItineraryDayDto>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateTourDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub price_amount: Option<f64>,
    pub price_currency: Option<String>,
    pub price_per_person: Option<bool>,
    pub duration_value: Option<i32>,
    #[schema(value_type = Option<String>, example = "hours")]
    pub duration_unit: Option<DurationUnit>,
    pub max_participants: Option<i32>,
    pub min_participants: Option<i32>,
    pub is_active: Option<bool>,
    pub is_listed: Option<bool>,
}
