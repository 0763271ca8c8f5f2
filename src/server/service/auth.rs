//! Authentication service: registration, credential checks, password resets.
//!
//! Passwords are hashed with Argon2id and never stored or logged in plaintext.
//! Password reset links carry a short-lived purpose-tagged JWT so a leaked
//! token cannot be replayed for anything else after expiry.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{NaiveDate, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use entity::types::DietPreference;

use crate::server::{
    data::{location::LocationRepository, user::UserRepository},
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{CreateUserParam, User},
    service::mail::MailClient,
    util::code::generate_location_code,
};

/// Lifetime of a password reset token in seconds.
const RESET_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Purpose tag embedded in reset tokens.
const RESET_TOKEN_PURPOSE: &str = "password_reset";

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 8;

/// Claims carried by a password reset token.
#[derive(Debug, Serialize, Deserialize)]
struct ResetClaims {
    /// User id the token was issued for.
    sub: i32,
    /// Token purpose; must equal `RESET_TOKEN_PURPOSE`.
    purpose: String,
    /// Expiry as Unix timestamp.
    exp: i64,
    /// Issue time as Unix timestamp.
    iat: i64,
}

/// Parameters for registering a new user.
///
/// Exactly one of `location_code` or `location_name` must be set; controllers
/// validate the payload shape before building this.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub name: String,
    pub email: String,
    pub password: String,
    pub diet: DietPreference,
    pub birthday: Option<NaiveDate>,
    pub location_code: Option<String>,
    pub location_name: Option<String>,
}

/// Service providing business logic for authentication flows.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    mail: &'a MailClient,
    jwt_secret: &'a str,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `mail` - Mail client for welcome and reset emails
    /// - `jwt_secret` - Secret used to sign password reset tokens
    pub fn new(db: &'a DatabaseConnection, mail: &'a MailClient, jwt_secret: &'a str) -> Self {
        Self {
            db,
            mail,
            jwt_secret,
        }
    }

    /// Registers a new user under an existing or freshly founded location.
    ///
    /// Joining happens through a location's short code. Founding a new
    /// location takes a unique name, generates its join code, and makes the
    /// registering user its first admin. A welcome email goes out after the
    /// account exists; mail failures are logged but never fail registration.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Validation)` - Field-level validation failure
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let location_repo = LocationRepository::new(self.db);

        validate_name(&param.name)?;
        validate_email(&param.email)?;
        validate_password(&param.password)?;

        if user_repo.email_exists(&param.email).await? {
            return Err(AppError::validation(
                "email",
                "This email address is already registered",
            ));
        }

        let (location_id, admin) = match (&param.location_code, &param.location_name) {
            (Some(code), _) => {
                let location = location_repo
                    .find_by_code(code.trim())
                    .await?
                    .ok_or_else(|| {
                        AppError::validation("location_code", "No location with this code")
                    })?;
                (location.id, false)
            }
            (None, Some(name)) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(AppError::validation(
                        "location_name",
                        "Location name must not be empty",
                    ));
                }
                if location_repo.name_exists(name).await? {
                    return Err(AppError::validation(
                        "location_name",
                        "A location with this name already exists",
                    ));
                }

                let code = self.unique_location_code(&location_repo).await?;
                let location = location_repo.create(name.to_string(), code).await?;
                // Founder of a location administers it
                (location.id, true)
            }
            (None, None) => {
                return Err(AppError::validation(
                    "location_code",
                    "Provide a location code to join or a name to create one",
                ));
            }
        };

        let password_hash = hash_password(&param.password)?;

        let user = user_repo
            .create(CreateUserParam {
                location_id,
                name: param.name.trim().to_string(),
                email: param.email.trim().to_lowercase(),
                password_hash,
                diet: param.diet,
                birthday: param.birthday,
                admin,
            })
            .await?;

        if let Err(e) = self.mail.send_welcome(&user.email, &user.name).await {
            tracing::warn!("Failed to send welcome email to {}: {}", user.email, e);
        }

        Ok(user)
    }

    /// Checks credentials and returns the matching user.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials matched
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password;
    ///   deliberately indistinguishable
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(entity) = user_repo.find_by_email(email.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &entity.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(User::from_entity(entity))
    }

    /// Issues a password reset token and emails the reset link.
    ///
    /// Silently succeeds for unknown email addresses so the endpoint cannot
    /// be used to probe which emails are registered.
    pub async fn forgot_password(&self, email: &str, app_url: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email.trim()).await? else {
            return Ok(());
        };

        let token = self.sign_reset_token(user.id)?;
        let reset_url = format!("{}/reset-password?token={}", app_url, token);

        if let Err(e) = self
            .mail
            .send_password_reset(&user.email, &user.name, &reset_url)
            .await
        {
            tracing::warn!("Failed to send reset email to {}: {}", user.email, e);
        }

        Ok(())
    }

    /// Validates a reset token and stores the new password.
    ///
    /// # Returns
    /// - `Ok(User)` - Password replaced; caller may log the user in
    /// - `Err(AppError::AuthErr(InvalidResetToken))` - Bad signature, expiry, or purpose
    /// - `Err(AppError::Validation)` - New password too short
    pub async fn reset_password(&self, token: &str, password: &str) -> Result<User, AppError> {
        validate_password(password)?;

        let user_id = self.verify_reset_token(token)?;

        let user_repo = UserRepository::new(self.db);
        let Some(entity) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::InvalidResetToken.into());
        };

        let password_hash = hash_password(password)?;
        user_repo.set_password_hash(entity.id, password_hash).await?;

        Ok(User::from_entity(entity))
    }

    /// Generates a location join code that is not yet taken.
    async fn unique_location_code(
        &self,
        location_repo: &LocationRepository<'_>,
    ) -> Result<String, AppError> {
        loop {
            let code = generate_location_code();
            if !location_repo.code_exists(&code).await? {
                return Ok(code);
            }
        }
    }

    fn sign_reset_token(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = ResetClaims {
            sub: user_id,
            purpose: RESET_TOKEN_PURPOSE.to_string(),
            exp: now + RESET_TOKEN_TTL_SECS,
            iat: now,
        };

        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| InternalError::TokenSigning {
            reason: e.to_string(),
        })?;

        Ok(token)
    }

    fn verify_reset_token(&self, token: &str) -> Result<i32, AppError> {
        let data = jsonwebtoken::decode::<ResetClaims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AuthError::InvalidResetToken)?;

        if data.claims.purpose != RESET_TOKEN_PURPOSE {
            return Err(AuthError::InvalidResetToken.into());
        }

        Ok(data.claims.sub)
    }
}

/// Hashes a password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash {
            reason: e.to_string(),
        })?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored Argon2id hash.
///
/// A malformed stored hash is an internal error; a mismatching password is
/// an `Ok(false)`.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| InternalError::PasswordHash {
        reason: e.to_string(),
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("name", "Name must not be empty"));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), AppError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(AppError::validation("email", "Enter a valid email address"));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(
            "password",
            "Password must be at least 8 characters",
        ));
    }
    Ok(())
}
