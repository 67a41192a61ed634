//! Declarative test builder.
//!
//! The builder collects table definitions and fixtures, all of which are created during the
//! final `build()` call.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_house_tables: bool,

    // Database fixtures to insert
    houses: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_house_tables: false,
            houses: Vec::new(),
        }
    }

    /// Add all house related tables to the test database.
    ///
    /// Creates House, HouseSection, Task, Star and HouseUser along with the
    /// `(house_id, color)` unique index on house users.
    pub fn with_house_tables(mut self) -> Self {
        self.include_house_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sharehouse_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), sharehouse_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(House)
    ///     .with_table(HouseSection)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a house with no sections into the database.
    ///
    /// Requires the house tables, see [`TestBuilder::with_house_tables`].
    pub fn with_house(mut self, name: impl Into<String>) -> Self {
        self.houses.push(name.into());
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();
        let mut all_indexes: Vec<IndexCreateStatement> = Vec::new();

        if self.include_house_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::House),
                schema.create_table_from_entity(entity::prelude::HouseSection),
                schema.create_table_from_entity(entity::prelude::Task),
                schema.create_table_from_entity(entity::prelude::Star),
                schema.create_table_from_entity(entity::prelude::HouseUser),
            ]);
            all_indexes.push(
                Index::create()
                    .name("idx_house_user_house_id_color")
                    .table(entity::prelude::HouseUser)
                    .col(entity::house_user::Column::HouseId)
                    .col(entity::house_user::Column::Color)
                    .unique()
                    .to_owned(),
            );
        }

        all_tables.extend(self.tables);
        setup.with_schema(all_tables).await?;
        setup.with_schema(all_indexes).await?;

        // 2. Insert database fixtures
        for name in self.houses {
            setup.house().insert_house(&name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
