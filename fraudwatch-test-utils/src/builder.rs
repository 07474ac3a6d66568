use sea_orm::{DbBackend, Schema};

use crate::{error::TestError, setup::TestSetup};

/// Declarative setup for integration tests; chain configuration and finish
/// with `build()`.
pub struct TestBuilder {
    include_registry_tables: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            include_registry_tables: false,
        }
    }

    /// Create every registry table (driver, customer, confirmation,
    /// complaint, evidence) in the test database.
    pub fn with_registry_tables(mut self) -> Self {
        self.include_registry_tables = true;
        self
    }

    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        if self.include_registry_tables {
            let schema = Schema::new(DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Driver),
                schema.create_table_from_entity(entity::prelude::Customer),
                schema.create_table_from_entity(entity::prelude::CustomerConfirmation),
                schema.create_table_from_entity(entity::prelude::Complaint),
                schema.create_table_from_entity(entity::prelude::ComplaintEvidence),
            ];
            setup.with_tables(stmts).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
