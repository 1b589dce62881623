use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum::http::request::Parts;
use scribe_core::{AuthValidator, Claims, UserId};

use super::{
    error::ApiError,
    state::{AppState, Ports},
};

/// Who is making the request.
#[derive(Debug, Clone, Default)]
pub enum Identity {
    #[default]
    Anonymous,
    Authenticated(Claims),
}

/// Per-request facts gathered before the handler runs.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub identity: Identity,
}

impl RequestContext {
    pub fn claims(&self) -> Option<&Claims> {
        match &self.identity {
            Identity::Anonymous => None,
            Identity::Authenticated(claims) => Some(claims),
        }
    }
}

/// Resolves the bearer token, if any, into a [`RequestContext`].
///
/// Never rejects: routes that need an identity use [`CurrentUser`] or
/// [`AdminUser`].
pub async fn identify<P: Ports>(
    State(state): State<AppState<P>>,
    request: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = request.into_parts();

    let identity = match state.validator().validate(&parts).await {
        Ok(claims) => Identity::Authenticated(claims),
        Err(e) => {
            tracing::debug!(reason = %e, "request is anonymous");
            Identity::Anonymous
        }
    };
    parts.extensions.insert(RequestContext { identity });

    next.run(Request::from_parts(parts, body)).await
}

fn context(parts: &Parts) -> RequestContext {
    parts
        .extensions
        .get::<RequestContext>()
        .cloned()
        .unwrap_or_default()
}

/// Claims of a request carrying a valid access token.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

impl CurrentUser {
    pub fn user_id(&self) -> &UserId {
        &self.0.user_id
    }

    /// Whether this caller may act on the account `id`.
    pub fn may_manage(&self, id: &UserId) -> bool {
        self.0.is_admin || &self.0.user_id == id
    }
}

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match context(parts).identity {
            Identity::Authenticated(claims) => Ok(Self(claims)),
            Identity::Anonymous => Err(ApiError::Unauthorized(
                "A valid access token is required".to_owned(),
            )),
        }
    }
}

/// Claims of an authenticated administrator.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

impl<S: Send + Sync> FromRequestParts<S> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentUser(claims) = CurrentUser::from_request_parts(parts, state).await?;
        if !claims.is_admin {
            return Err(ApiError::Forbidden);
        }
        Ok(Self(claims))
    }
}
