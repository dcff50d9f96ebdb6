use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::{from_fn, Next},
    Router,
};

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(|mut request: Request, next: Next| {
        let client_key = ClientKey::from_headers(request.headers());
        request.extensions_mut().insert(client_key);
        next.run(request)
    }))
}

/// Identifies the submitting client for rate limiting.
///
/// Taken from the proxy headers without validation, so it is only as
/// trustworthy as the reverse proxy in front of the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientKey(pub String);

impl ClientKey {
    pub const UNKNOWN: &'static str = "unknown";

    /// Uses the first entry of `X-Forwarded-For` if that header is present,
    /// otherwise `X-Real-IP`.
    fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .filter(|value| !value.is_empty())
        };

        let key = match header("x-forwarded-for") {
            Some(forwarded) => forwarded
                .split(',')
                .next()
                .map(str::trim)
                .filter(|first| !first.is_empty())
                .unwrap_or(Self::UNKNOWN),
            None => header("x-real-ip").unwrap_or(Self::UNKNOWN),
        };

        Self(key.into())
    }
}
