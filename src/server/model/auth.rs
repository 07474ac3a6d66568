use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, Error};

/// Fixed bearer-token lifetime. There is no refresh or revocation; an expired
/// token simply forces a new login.
pub const TOKEN_TTL_DAYS: i64 = 30;

/// Claims embedded in every issued token. `sub` is the driver id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(driver_id: i32) -> Self {
        let now = Utc::now();
        Self {
            sub: driver_id,
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        }
    }
}

/// HS256 signing and verification keys derived from the configured secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed token carrying the driver id.
    pub fn issue(&self, driver_id: i32) -> Result<String, Error> {
        encode(&Header::default(), &Claims::new(driver_id), &self.encoding)
            .map_err(|e| Error::InternalError(format!("Failed to sign token: {}", e)))
    }

    /// Verify signature and expiry; any failure collapses to `InvalidToken`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
