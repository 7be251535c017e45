use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
};

use crate::auth::claims::AuthUser;

/// Implements extraction of `AuthUser` from request headers.
///
/// The `Authorization` header is resolved through [`crate::auth::authenticate`],
/// which fails soft: a tampered, expired, or malformed token behaves exactly
/// like an absent one, so the only rejection a caller ever sees is `401`.
///
/// # Errors
/// - Returns `401 Unauthorized` if the header is missing or the token does not verify.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or((
                StatusCode::UNAUTHORIZED,
                "Missing or invalid Authorization header",
            ))?;

        let claims = crate::auth::authenticate(header)
            .ok_or((StatusCode::UNAUTHORIZED, "Invalid or expired token"))?;

        Ok(AuthUser(claims))
    }
}
