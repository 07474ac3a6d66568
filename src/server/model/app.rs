use sea_orm::DatabaseConnection;

use crate::server::model::auth::JwtKeys;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt: JwtKeys,
}

// Tuple conversion lets the test-utils crate build an AppState without
// depending on this crate's key type.
impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, jwt_secret): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            jwt: JwtKeys::from_secret(&jwt_secret),
        }
    }
}
