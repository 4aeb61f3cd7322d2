use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use networksync_auth::IdentityResolver;

use crate::app::errors::ApiError;
use crate::context::IdentityContext;

#[derive(Clone)]
pub struct AuthState {
    pub resolver: Arc<dyn IdentityResolver>,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(req.headers()).ok_or(ApiError::Unauthorized)?;

    let identity = state.resolver.resolve(token, Utc::now()).map_err(|e| {
        tracing::debug!(error = %e, "bearer credential rejected");
        ApiError::Unauthorized
    })?;

    let ctx = IdentityContext::new(identity);
    tracing::debug!(user_id = %ctx.user_id(), email = ?ctx.email(), "identity resolved");
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}

pub(crate) fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;

    // The auth scheme is case-insensitive.
    let (scheme, token) = header.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();

    if token.is_empty() {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header::AUTHORIZATION};
    use proptest::prelude::*;

    fn headers(value: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        map
    }

    #[test]
    fn missing_header_is_rejected() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }

    #[test]
    fn other_schemes_are_rejected() {
        assert_eq!(extract_bearer(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(extract_bearer(&headers("Bearerabc")), None);
        assert_eq!(extract_bearer(&headers("abc")), None);
    }

    #[test]
    fn scheme_matches_case_insensitively() {
        assert_eq!(extract_bearer(&headers("bearer abc")), Some("abc"));
        assert_eq!(extract_bearer(&headers("BEARER abc")), Some("abc"));
        assert_eq!(extract_bearer(&headers("BeArEr abc")), Some("abc"));
    }

    #[test]
    fn blank_token_is_rejected() {
        assert_eq!(extract_bearer(&headers("Bearer    ")), None);
    }

    #[test]
    fn token_is_trimmed() {
        assert_eq!(extract_bearer(&headers("Bearer  abc.def ")), Some("abc.def"));
    }

    proptest! {
        #[test]
        fn any_visible_token_is_extracted(token in "[A-Za-z0-9._~+/=-]{1,64}") {
            let map = headers(&format!("Bearer {token}"));
            prop_assert_eq!(extract_bearer(&map), Some(token.as_str()));
        }
    }
}
