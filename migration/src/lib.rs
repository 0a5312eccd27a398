pub use sea_orm_migration::prelude::*;

mod m20251101_000001_user;
mod m20251101_000002_tour_lookup;
mod m20251101_000003_tour;
mod m20251101_000004_tour_content;
mod m20251101_000005_tour_itinerary;
mod m20251101_000006_booking;
mod m20251101_000007_booking_detail;
mod m20251101_000008_payment;
mod m20251101_000009_review;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_user::Migration),
            Box::new(m20251101_000002_tour_lookup::Migration),
            Box::new(m20251101_000003_tour::Migration),
            Box::new(m20251101_000004_tour_content::Migration),
            Box::new(m20251101_000005_tour_itinerary::Migration),
            Box::new(m20251101_000006_booking::Migration),
            Box::new(m20251101_000007_booking_detail::Migration),
            Box::new(m20251101_000008_payment::Migration),
            Box::new(m20251101_000009_review::Migration),
        ]
    }
}
