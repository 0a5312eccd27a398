//! Translation of collection query strings into bounded, filtered, ordered selects.
//!
//! Collection endpoints accept an open map of query parameters. Each list has a filter type
//! which picks out the keys it understands and ignores the rest, and every list shares the
//! same [`Pagination`]. Filters are combined with AND semantics; a value that cannot be
//! parsed for its key (for example `status=unknown`) matches no rows rather than failing the
//! request, so an empty page is returned.

use std::{collections::HashMap, str::FromStr};

use entity::sea_orm_active_enums::{BookingStatus, UserRole};
use sea_orm::{
    sea_query::Expr,
    ActiveEnum, ColumnTrait, Condition, EntityTrait, Order, QueryOrder,
    QuerySelect, Select,
};

/// Raw query string parameters as received by a collection endpoint.
pub type QueryParams = HashMap<String, String>;

/// Page returned when `page` is absent or invalid.
pub const DEFAULT_PAGE: u64 = 1;
/// Page size used when `limit` is absent or invalid.
pub const DEFAULT_LIMIT: u64 = 10;
/// Largest page size a client may request.
pub const MAX_LIMIT: u64 = 100;

/// Page selection shared by every collection endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub page: u64,
    /// Maximum rows per page
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Reads `page` and `limit`, falling back to defaults for missing, unparseable or
    /// non-positive values and capping `limit` at [`MAX_LIMIT`].
    ///
    /// `page` is clamped so the offset stays within a signed 64-bit column; a page past the
    /// end is simply empty.
    pub fn from_params(params: &QueryParams) -> Self {
        let limit = positive(params, "limit")
            .map(|limit| limit.min(MAX_LIMIT))
            .unwrap_or(DEFAULT_LIMIT);
        let page = positive(params, "page")
            .map(|page| page.min(i64::MAX as u64 / limit))
            .unwrap_or(DEFAULT_PAGE);

        Self { page, limit }
    }

    /// Number of rows skipped before this page, `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit).min(i64::MAX as u64)
    }

    /// Applies offset and limit to a select.
    pub fn apply<E: EntityTrait>(&self, select: Select<E>) -> Select<E> {
        select.offset(self.offset()).limit(self.limit)
    }
}

fn positive(params: &QueryParams, key: &str) -> Option<u64> {
    params
        .get(key)
        .and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value >= 1)
        .map(|value| value as u64)
}

/// A single optional filter parsed from the query string.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter<T> {
    /// Key absent or empty, no restriction
    Any,
    /// Restrict to rows matching the parsed value
    Value(T),
    /// Key present but its value could not be parsed, nothing can match
    Unmatchable,
}

impl<T> Filter<T> {
    /// Parses `key` with the given parser.
    pub fn parse_with(params: &QueryParams, key: &str, parse: impl Fn(&str) -> Option<T>) -> Self {
        match params.get(key).map(|value| value.trim()) {
            None | Some("") => Self::Any,
            Some(raw) => parse(raw).map(Self::Value).unwrap_or(Self::Unmatchable),
        }
    }

    /// Adds this filter to `condition` using `to_expr` to build the comparison.
    fn add_to<X: Into<Condition>>(
        self,
        condition: Condition,
        to_expr: impl FnOnce(T) -> X,
    ) -> Condition {
        match self {
            Self::Any => condition,
            Self::Value(value) => condition.add(to_expr(value)),
            Self::Unmatchable => condition.add(Expr::cust("1 = 0")),
        }
    }
}

impl<T: FromStr> Filter<T> {
    /// Parses `key` with the value type's `FromStr` implementation.
    pub fn parse(params: &QueryParams, key: &str) -> Self {
        Self::parse_with(params, key, |raw| raw.parse().ok())
    }
}

fn parse_enum<E: ActiveEnum<Value = String>>(raw: &str) -> Option<E> {
    E::try_from_value(&raw.to_lowercase()).ok()
}

/// Filters understood by a collection endpoint.
pub trait ListFilter: Sized {
    /// Picks the keys this filter understands out of the query string.
    fn from_params(params: &QueryParams) -> Self;
}

/// Filter and page selection for one collection request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F> {
    /// Conjunctive filters
    pub filter: F,
    /// Page selection
    pub pagination: Pagination,
}

impl<F: ListFilter> ListQuery<F> {
    /// Builds the query from raw query string parameters, ignoring unknown keys.
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            filter: F::from_params(params),
            pagination: Pagination::from_params(params),
        }
    }
}

impl<F: ListFilter> Default for ListQuery<F> {
    fn default() -> Self {
        Self::from_params(&QueryParams::new())
    }
}

/// Booking collection filters: `status`, `traveler_id`, `tour_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingFilter {
    pub status: Filter<BookingStatus>,
    pub traveler_id: Filter<i32>,
    pub tour_id: Filter<i32>,
}

impl ListFilter for BookingFilter {
    fn from_params(params: &QueryParams) -> Self {
        Self {
            status: Filter::parse_with(params, "status", parse_enum::<BookingStatus>),
            traveler_id: Filter::parse(params, "traveler_id"),
            tour_id: Filter::parse(params, "tour_id"),
        }
    }
}

impl BookingFilter {
    /// Live bookings matching every filter.
    pub fn condition(self) -> Condition {
        use entity::booking::Column;

        let condition = Condition::all().add(Column::DeletedAt.is_null());
        let condition = self.status.add_to(condition, |s| Column::Status.eq(s));
        let condition = self
            .traveler_id
            .add_to(condition, |id| Column::TravelerId.eq(id));

        self.tour_id.add_to(condition, |id| Column::TourId.eq(id))
    }
}

/// Review collection filters: `tour_id`, `guide_id`, `verified`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewFilter {
    pub tour_id: Filter<i32>,
    pub guide_id: Filter<i32>,
    pub verified: Filter<bool>,
}

impl ListFilter for ReviewFilter {
    fn from_params(params: &QueryParams) -> Self {
        Self {
            tour_id: Filter::parse(params, "tour_id"),
            guide_id: Filter::parse(params, "guide_id"),
            verified: Filter::parse_with(params, "verified", |raw| {
                match raw.to_lowercase().as_str() {
                    "true" | "1" => Some(true),
                    "false" | "0" => Some(false),
                    _ => None,
                }
            }),
        }
    }
}

impl ReviewFilter {
    /// Live reviews matching every filter.
    pub fn condition(self) -> Condition {
        use entity::review::Column;

        let condition = Condition::all().add(Column::DeletedAt.is_null());
        let condition = self.tour_id.add_to(condition, |id| Column::TourId.eq(id));
        let condition = self.guide_id.add_to(condition, |id| Column::GuideId.eq(id));

        self.verified.add_to(condition, |v| Column::Verified.eq(v))
    }
}

/// User collection filters: `role`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFilter {
    pub role: Filter<UserRole>,
}

impl ListFilter for UserFilter {
    fn from_params(params: &QueryParams) -> Self {
        Self {
            role: Filter::parse_with(params, "role", parse_enum::<UserRole>),
        }
    }
}

impl UserFilter {
    /// Live users matching every filter.
    pub fn condition(self) -> Condition {
        use entity::user::Column;

        let condition = Condition::all().add(Column::DeletedAt.is_null());

        self.role.add_to(condition, |role| Column::Role.eq(role))
    }
}

/// Tour fields a client may sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourSortField {
    CreatedAt,
    PriceAmount,
    AverageRating,
    Title,
    DurationValue,
}

impl TourSortField {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "created_at" => Some(Self::CreatedAt),
            "price" | "price_amount" => Some(Self::PriceAmount),
            "rating" | "average_rating" => Some(Self::AverageRating),
            "title" => Some(Self::Title),
            "duration" | "duration_value" => Some(Self::DurationValue),
            _ => None,
        }
    }

    fn column(self) -> entity::tour::Column {
        use entity::tour::Column;

        match self {
            Self::CreatedAt => Column::CreatedAt,
            Self::PriceAmount => Column::PriceAmount,
            Self::AverageRating => Column::AverageRating,
            Self::Title => Column::Title,
            Self::DurationValue => Column::DurationValue,
        }
    }
}

/// Tour collection filters and ordering.
///
/// Filters: `category`, `destination`, `guide_id`, `min_price`, `max_price`. Ordering: `sort`
/// names a whitelisted field and `order` is `asc` or `desc`; unknown values fall back to
/// `created_at desc`.
#[derive(Debug, Clone, PartialEq)]
pub struct TourFilter {
    pub category: Filter<i32>,
    pub destination: Filter<i32>,
    pub guide_id: Filter<i32>,
    pub min_price: Filter<f64>,
    pub max_price: Filter<f64>,
    pub sort: TourSortField,
    pub descending: bool,
}

impl ListFilter for TourFilter {
    fn from_params(params: &QueryParams) -> Self {
        let sort = params
            .get("sort")
            .or_else(|| params.get("sort_by"))
            .and_then(|raw| TourSortField::parse(raw.trim()))
            .unwrap_or(TourSortField::CreatedAt);

        let descending = !params
            .get("order")
            .is_some_and(|raw| raw.trim().eq_ignore_ascii_case("asc"));

        Self {
            category: Filter::parse(params, "category"),
            destination: Filter::parse(params, "destination"),
            guide_id: Filter::parse(params, "guide_id"),
            min_price: Filter::parse(params, "min_price"),
            max_price: Filter::parse(params, "max_price"),
            sort,
            descending,
        }
    }
}

impl TourFilter {
    /// Orders a tour select by the requested field, with the id as tie-breaker.
    pub fn order(&self, select: Select<entity::tour::Entity>) -> Select<entity::tour::Entity> {
        let order = if self.descending {
            Order::Desc
        } else {
            Order::Asc
        };

        select
            .order_by(self.sort.column(), order.clone())
            .order_by(entity::tour::Column::Id, order)
    }

    /// Live tours matching every filter.
    pub fn condition(self) -> Condition {
        use entity::tour::Column;

        let condition = Condition::all().add(Column::DeletedAt.is_null());
        let condition = self
            .category
            .add_to(condition, |id| Column::CategoryId.eq(id));
        let condition = self
            .destination
            .add_to(condition, |id| Column::DestinationId.eq(id));
        let condition = self.guide_id.add_to(condition, |id| Column::GuideId.eq(id));
        let condition = self
            .min_price
            .add_to(condition, |min| Column::PriceAmount.gte(min));

        self.max_price
            .add_to(condition, |max| Column::PriceAmount.lte(max))
    }
}
