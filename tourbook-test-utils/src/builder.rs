//! Declarative test builder.
//!
//! The builder collects the tables a test needs and creates them in foreign key order
//! during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Groups of tables, each depending on the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum TableSet {
    None,
    User,
    Tour,
    Booking,
}

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create an in-memory
/// database holding the requested tables.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    table_set: TableSet,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            table_set: TableSet::None,
        }
    }

    /// Add the users table.
    pub fn with_user_tables(mut self) -> Self {
        self.table_set = self.table_set.max(TableSet::User);
        self
    }

    /// Add the users table and every tour table: categories, destinations, tours and
    /// their images, tags, includes, excludes and itinerary.
    pub fn with_tour_tables(mut self) -> Self {
        self.table_set = self.table_set.max(TableSet::Tour);
        self
    }

    /// Add every table of the schema: users, tours, the booking aggregate, payments and
    /// reviews.
    pub fn with_booking_tables(mut self) -> Self {
        self.table_set = TableSet::Booking;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Custom tables are created after the grouped tables, so they may reference them.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tourbook_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), tourbook_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context, creating every configured table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with all tables created
    /// - `Err(TestError::DbErr)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;
        let schema = Schema::new(DbBackend::Sqlite);

        let mut all_tables = Vec::new();

        if self.table_set >= TableSet::User {
            all_tables.push(schema.create_table_from_entity(entity::prelude::User));
        }

        if self.table_set >= TableSet::Tour {
            all_tables.extend([
                schema.create_table_from_entity(entity::prelude::TourCategory),
                schema.create_table_from_entity(entity::prelude::TourDestination),
                schema.create_table_from_entity(entity::prelude::Tour),
                schema.create_table_from_entity(entity::prelude::TourImage),
                schema.create_table_from_entity(entity::prelude::TourTag),
                schema.create_table_from_entity(entity::prelude::TourInclude),
                schema.create_table_from_entity(entity::prelude::TourExclude),
                schema.create_table_from_entity(entity::prelude::TourItinerary),
                schema.create_table_from_entity(entity::prelude::TourItineraryActivity),
                schema.create_table_from_entity(entity::prelude::TourItineraryMeal),
            ]);
        }

        if self.table_set >= TableSet::Booking {
            all_tables.extend([
                schema.create_table_from_entity(entity::prelude::Booking),
                schema.create_table_from_entity(entity::prelude::BookingParticipant),
                schema.create_table_from_entity(entity::prelude::BookingPricing),
                schema.create_table_from_entity(entity::prelude::BookingHotelDetails),
                schema.create_table_from_entity(entity::prelude::BookingPreference),
                schema.create_table_from_entity(entity::prelude::Payment),
                schema.create_table_from_entity(entity::prelude::Review),
                schema.create_table_from_entity(entity::prelude::ReviewDetailedRatings),
                schema.create_table_from_entity(entity::prelude::ReviewImage),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
