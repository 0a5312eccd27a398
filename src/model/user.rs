use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    #[schema(value_type = String, example = "traveler")]
    pub role: UserRole,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub is_verified: bool,
    pub is_active: bool,
    pub years_of_experience: Option<i32>,
    pub average_rating: f64,
    pub total_reviews: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            role: user.role,
            profile_image: user.profile_image,
            bio: user.bio,
            is_verified: user.is_verified,
            is_active: user.is_active,
            years_of_experience: user.years_of_experience,
            average_rating: user.average_rating,
            total_reviews: user.total_reviews,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Defaults to `traveler`
    #[schema(value_type = Option<String>, example = "local-expert")]
    pub role: Option<UserRole>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub years_of_experience: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub years_of_experience: Option<i32>,
    pub is_verified: Option<bool>,
    pub is_active: Option<bool>,
}
