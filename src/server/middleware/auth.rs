use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

const ROLE_MODERATOR: &str = "MODERATOR";
const ROLE_ADMIN: &str = "ADMIN";

/// Claims carried by the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: usize,
}

impl Claims {
    fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(role))
    }
}

pub enum Permission {
    /// Write access to the catalog. Granted to moderators and admins.
    Moderator,
    /// Deletes. Granted to admins only.
    Admin,
}

/// Checks the request's bearer token against a set of required permissions.
pub struct AuthGuard<'a> {
    key: &'a DecodingKey,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(key: &'a DecodingKey, headers: &'a HeaderMap) -> Self {
        Self { key, headers }
    }

    /// Decodes the bearer token and requires every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token valid and all permissions granted
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired or malformed claims
    /// - `Err(AuthError::AccessDenied)` - Token lacks a required role
    pub fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let Some(token) = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
        else {
            return Err(AuthError::MissingToken.into());
        };

        let validation = Validation::new(Algorithm::HS256);
        let claims = jsonwebtoken::decode::<Claims>(token.trim(), self.key, &validation)
            .map_err(AuthError::from)?
            .claims;

        for permission in permissions {
            match permission {
                Permission::Moderator => {
                    if !claims.has_role(ROLE_MODERATOR) && !claims.has_role(ROLE_ADMIN) {
                        return Err(AuthError::AccessDenied {
                            subject: claims.sub,
                            reason: "catalog writes require the MODERATOR or ADMIN role"
                                .to_string(),
                        }
                        .into());
                    }
                }
                Permission::Admin => {
                    if !claims.has_role(ROLE_ADMIN) {
                        return Err(AuthError::AccessDenied {
                            subject: claims.sub,
                            reason: "deletes require the ADMIN role".to_string(),
                        }
                        .into());
                    }
                }
            }
        }

        Ok(claims)
    }
}
