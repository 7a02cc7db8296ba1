use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::user::User,
        service::{auth::AuthService, auth::JwtKeys, user::UserService},
    },
};

pub enum Permission<'p> {
    Admin,
    Instructor,
    Student,
    /// The caller's email must equal this one exactly.
    Owner(&'p str),
}

/// Verified caller of a guarded endpoint.
#[derive(Debug, Clone)]
pub struct Identity {
    pub email: String,
    /// Loaded only when a role permission was checked.
    pub user: Option<User>,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    keys: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { db, keys, headers }
    }

    /// Verifies the bearer token and checks every permission in turn.
    ///
    /// An empty permission list only requires a valid token.
    pub async fn require(&self, permissions: &[Permission<'_>]) -> Result<Identity, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = AuthService::new(self.keys).verify_token(token)?;

        let mut identity = Identity {
            email: claims.email,
            user: None,
        };

        for permission in permissions {
            let required_role = match permission {
                Permission::Admin => Role::Admin,
                Permission::Instructor => Role::Instructor,
                Permission::Student => Role::Student,
                Permission::Owner(email) => {
                    if identity.email != *email {
                        return Err(AuthError::IdentityMismatch {
                            identity: identity.email,
                            requested: email.to_string(),
                        }
                        .into());
                    }
                    continue;
                }
            };

            if identity.user.is_none() {
                let Some(user) = UserService::new(self.db)
                    .get_by_email(&identity.email)
                    .await?
                else {
                    return Err(AuthError::UserNotInDatabase(identity.email).into());
                };
                identity.user = Some(user);
            }

            if let Some(user) = &identity.user {
                if user.role != required_role {
                    return Err(AuthError::AccessDenied(
                        identity.email.clone(),
                        format!("Requires role {} but has {}", required_role, user.role),
                    )
                    .into());
                }
            }
        }

        Ok(identity)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
