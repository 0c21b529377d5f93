//! Declarative test database setup.
//!
//! The builder queues table creation statements and executes them against a
//! fresh in-memory SQLite database during `build()`. Fixture insertion then
//! happens through the returned [`TestContext`](crate::TestContext).

use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for test database initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Add one entity's table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add every Gjallar table.
    pub fn with_all_tables(self) -> Self {
        self.with_table(entity::prelude::LeagueTeam)
            .with_table(entity::prelude::LeaguePlayer)
            .with_table(entity::prelude::LeagueMatch)
            .with_table(entity::prelude::MatchLineup)
            .with_table(entity::prelude::MatchSuggestion)
            .with_table(entity::prelude::MatchComment)
            .with_table(entity::prelude::TeamChannel)
            .with_table(entity::prelude::TeamSetting)
    }

    /// Connect to a fresh in-memory database and create the queued tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for stmt in &self.tables {
            db.execute(stmt).await?;
        }

        Ok(TestContext { db })
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
