use rand::RngCore;
use sea_orm::ConnectionTrait;

use crate::{
    model::driver::{DriverDto, LoginDto, RegisterDriverDto},
    server::{
        data::driver::DriverRepository,
        error::{auth::AuthError, Error},
        model::auth::JwtKeys,
    },
};

/// Registration and login. Issues bearer tokens on success.
pub struct AuthService<'a, C: ConnectionTrait> {
    db: &'a C,
    jwt: &'a JwtKeys,
}

impl<'a, C: ConnectionTrait> AuthService<'a, C> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a C, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Registers a new driver and returns a token plus their identity.
    ///
    /// # Errors
    /// - `Error::Validation` - a required field is missing or malformed
    /// - `Error::AuthError(EmailRegistered)` - the email is already in use
    pub async fn register(
        &self,
        payload: &RegisterDriverDto,
    ) -> Result<(String, DriverDto), Error> {
        validate_registration(payload)?;

        let driver_repository = DriverRepository::new(self.db);

        // Check-then-insert without a transaction; a concurrent registration
        // with the same email lands on the unique index instead.
        if driver_repository
            .get_by_email(payload.email.trim())
            .await?
            .is_some()
        {
            return Err(AuthError::EmailRegistered.into());
        }

        let password_hash = hash_password(&payload.password)?;
        let phone = payload
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
            .map(str::to_string);

        let driver = driver_repository
            .create(
                payload.name.trim(),
                payload.email.trim(),
                &password_hash,
                payload.company.trim(),
                phone,
            )
            .await?;

        let token = self.jwt.issue(driver.id)?;

        Ok((token, driver_dto(&driver)))
    }

    /// Authenticates by email and password.
    ///
    /// Unknown email and wrong password both produce
    /// `AuthError::InvalidCredentials`; callers must not be able to tell
    /// which one failed.
    pub async fn login(&self, payload: &LoginDto) -> Result<(String, DriverDto), Error> {
        let driver = match DriverRepository::new(self.db)
            .get_by_email(payload.email.trim())
            .await?
        {
            Some(driver) => driver,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        if !verify_password(&payload.password, &driver.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.jwt.issue(driver.id)?;

        Ok((token, driver_dto(&driver)))
    }
}

fn driver_dto(driver: &entity::driver::Model) -> DriverDto {
    DriverDto {
        id: driver.id,
        name: driver.name.clone(),
        email: driver.email.clone(),
        company: driver.company.clone(),
    }
}

fn validate_registration(payload: &RegisterDriverDto) -> Result<(), Error> {
    if payload.name.trim().is_empty() {
        return Err(Error::Validation("Name is required".to_string()));
    }
    if payload.email.trim().is_empty() {
        return Err(Error::Validation("Email is required".to_string()));
    }
    if payload.company.trim().is_empty() {
        return Err(Error::Validation("Company name is required".to_string()));
    }
    if payload.password.len() < 6 {
        return Err(Error::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    if !is_plausible_email(payload.email.trim()) {
        return Err(Error::Validation("Invalid email".to_string()));
    }

    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Argon2id with a fresh random salt; the output encodes algorithm,
/// parameters, and salt alongside the digest.
pub fn hash_password(password: &str) -> Result<String, Error> {
    use argon2::{
        password_hash::{PasswordHasher as _, SaltString},
        Argon2,
    };

    let mut salt_bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| Error::InternalError(format!("Failed to encode password salt: {}", e)))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::InternalError(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    use argon2::{
        password_hash::{PasswordHash, PasswordVerifier as _},
        Argon2,
    };

    let parsed = PasswordHash::new(hash)
        .map_err(|e| Error::InternalError(format!("Stored password hash is invalid: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
