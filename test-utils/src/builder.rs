use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Fluent builder for test contexts backed by an in-memory SQLite database.
///
/// Tables are generated from the SeaORM entities, so column types, unique indexes, and
/// foreign keys match what the entity declares. Add tables in dependency order: a table
/// with a foreign key must come after the table it references.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Character};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Character)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the table for one entity.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues every application table in dependency order:
    /// User, Character, WildcardInvitation, GameMatch, Goal.
    pub fn with_game_tables(self) -> Self {
        self.with_table(User)
            .with_table(Character)
            .with_table(WildcardInvitation)
            .with_table(GameMatch)
            .with_table(Goal)
    }

    /// Connects to a fresh in-memory database and creates the queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the database ready
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}
