use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Permission required by a request beyond plain authentication.
pub enum Permission {
    Admin,
}

/// Session-backed authentication guard for request handlers.
///
/// Resolves the session's user id to a full user record and checks the
/// required permissions. Controllers call `require` at the top of every
/// protected handler and receive the authenticated user back.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Authenticates the request and enforces the given permissions.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated user satisfying all permissions
    /// - `Err(AppError::AuthErr(UserNotInSession))` - No user id in the session
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Session user no longer exists
    /// - `Err(AppError::AuthErr(AccessDenied))` - User lacks a required permission
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "admin permission required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
