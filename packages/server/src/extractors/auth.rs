use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;

/// Name of the header carrying the caller's user id.
pub const USER_ID_HEADER: &str = "userId";

/// Caller identity taken from the `userId` header.
///
/// The header is trusted as-is: a gateway in front of this service is expected
/// to authenticate the user and set it. Nothing here verifies a signature, so
/// do not expose the service directly to clients.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i32,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or(AppError::Unauthorized)?
            .to_str()
            .map_err(|_| AppError::Validation("userId header must be an integer".into()))?;

        let user_id = parse_user_id(raw)?;
        Ok(AuthUser { user_id })
    }
}

fn parse_user_id(raw: &str) -> Result<i32, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::Unauthorized);
    }
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            tracing::debug!(header = raw, "Rejected invalid userId header");
            Err(AppError::Validation(
                "userId header must be a positive integer".into(),
            ))
        }
    }
}
