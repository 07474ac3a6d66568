use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    constant::TEST_JWT_SECRET,
    error::TestError,
    fixtures::{ComplaintFixtures, CustomerFixtures, DriverFixtures},
};

/// Test environment: an in-memory SQLite database plus the signing secret
/// matching every token the fixtures issue.
pub struct TestSetup {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            db,
            jwt_secret: TEST_JWT_SECRET.to_string(),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Convert into any state type constructible from the connection and the
    /// signing secret. This allows conversion to the application's state type
    /// without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String)>,
    {
        T::from((self.db.clone(), self.jwt_secret.clone()))
    }

    pub fn drivers(&self) -> DriverFixtures<'_> {
        DriverFixtures::new(&self.db)
    }

    pub fn customers(&self) -> CustomerFixtures<'_> {
        CustomerFixtures::new(&self.db)
    }

    pub fn complaints(&self) -> ComplaintFixtures<'_> {
        ComplaintFixtures::new(&self.db)
    }
}

#[macro_export]
macro_rules! test_setup {
    () => {{
        $crate::TestSetup::new().await
    }};
}

#[macro_export]
macro_rules! test_setup_with_tables {
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_registry_tables {
    () => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Driver),
                schema.create_table_from_entity(entity::prelude::Customer),
                schema.create_table_from_entity(entity::prelude::CustomerConfirmation),
                schema.create_table_from_entity(entity::prelude::Complaint),
                schema.create_table_from_entity(entity::prelude::ComplaintEvidence),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
