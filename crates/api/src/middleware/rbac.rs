//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the minimum requirement. Use these in route handlers to enforce
//! authorization at the type level: anonymous callers are rejected with 401
//! by the inner [`AuthUser`] extraction, under-privileged callers with 403.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use skyport_core::error::CoreError;
use skyport_core::roles::ROLE_STAFF;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `staff` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn staff_only(RequireStaff(user): RequireStaff) -> AppResult<Json<()>> {
///     // user is guaranteed to be staff here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireStaff(pub AuthUser);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_STAFF {
            return Err(AppError::Core(CoreError::Forbidden(
                "Staff role required".into(),
            )));
        }
        Ok(RequireStaff(user))
    }
}

/// Requires any authenticated caller (any valid role).
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for use in
/// route definitions where the intent "this route requires authentication"
/// should be self-documenting.
///
/// ```ignore
/// async fn any_authed(RequireAuth(user): RequireAuth) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}
