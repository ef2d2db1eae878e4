// Copyright (c) 2019-2024 Dropbox, Inc.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use crate::types::auth::{AccessError, AuthError, RateLimitReason};

/// An error occurred in the process of making an API call.
/// This is different from the case where your call succeeded, but the operation returned an error.
#[derive(thiserror::Error, Debug)]
pub enum Error<E = NoError> {
    /// An error returned by the API. Its type depends on the endpoint being called.
    #[error("Dropbox API endpoint returned an error: {0}")]
    Api(#[source] E),

    /// Some error from the internals of the HTTP client.
    #[error("error from HTTP client: {0}")]
    HttpClient(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Something went wrong in the process of transforming your arguments into a JSON string, or
    /// transforming the response into the expected type.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The Dropbox API response was unexpected or malformed in some way.
    #[error("Dropbox API returned something unexpected: {0}")]
    UnexpectedResponse(String),

    /// The Dropbox API indicated that your request was malformed in some way. This holds the raw
    /// response body, which is usually plain text.
    #[error("Dropbox API indicated that the request was malformed: {0}")]
    BadRequest(String),

    /// Errors occurred during authentication.
    #[error("Dropbox API indicated a problem with authentication: {0}")]
    Authentication(#[source] AuthError),

    /// Your request was rejected due to rate-limiting. You can retry it later.
    #[error("Dropbox API declined the request due to rate-limiting ({reason}), \
        retry after {retry_after_seconds}s")]
    RateLimited {
        /// The server-given reason for the rate-limiting.
        reason: RateLimitReason,

        /// You can retry this request after this many seconds.
        retry_after_seconds: u32,
    },

    /// The user or team account doesn't have access to the endpoint or feature.
    #[error("Dropbox API denied access to the resource: {0}")]
    AccessDenied(#[source] AccessError),

    /// The Dropbox API server had an internal error.
    #[error("Dropbox API had an internal server error: {0}")]
    ServerError(String),

    /// The Dropbox API returned an unexpected HTTP status with the generic error envelope.
    #[error("Dropbox API returned HTTP {code}: {summary}")]
    ErrorSummary {
        /// HTTP status code returned.
        code: u16,

        /// The `error_summary` field of the response.
        summary: String,
    },

    /// The Dropbox API returned an unexpected HTTP response code.
    #[error("Dropbox API returned HTTP {code} - {response}")]
    UnexpectedHttpError {
        /// HTTP status code returned.
        code: u16,

        /// The response body.
        response: String,
    },
}

/// When Dropbox returns an error with HTTP 401, 403, 409 or 429, it uses an implicit JSON object
/// with the following structure, which contains the actual error as a field.
#[derive(Debug, Deserialize)]
pub(crate) struct TopLevelError<T> {
    pub error: T,

    #[serde(default)]
    pub error_summary: String,
}

/// The generic error envelope, used when there is no structured error to go with it.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error_summary: String,
}

/// Mostly `auth::RateLimitError`, except that `retry_after` is not present in every response.
#[derive(Debug, Deserialize)]
struct RateLimitedError {
    reason: RateLimitReason,

    #[serde(default)] // too_many_write_operations errors don't include this field; default to 0.
    retry_after: u32,
}

fn structured<T: DeserializeOwned, E>(
    response: &str,
    wrap: impl FnOnce(T) -> Error<E>,
) -> Error<E> {
    match serde_json::from_str::<TopLevelError<T>>(response) {
        Ok(deserialized) => {
            if !deserialized.error_summary.is_empty() {
                error!("error summary: {}", deserialized.error_summary);
            }
            wrap(deserialized.error)
        }
        Err(de_error) => {
            error!("Failed to deserialize JSON from API error: {de_error}");
            Error::Json(de_error)
        }
    }
}

impl<E: DeserializeOwned> Error<E> {
    /// Classify a non-2xx response by its status code. `response` is the full response body.
    pub(crate) fn from_status(code: u16, response: String) -> Self {
        match code {
            400 => Error::BadRequest(response),
            401 => structured(&response, Error::Authentication),
            403 => structured(&response, Error::AccessDenied),
            409 => structured(&response, Error::Api),
            429 => structured(&response, |e: RateLimitedError| Error::RateLimited {
                reason: e.reason,
                retry_after_seconds: e.retry_after,
            }),
            _ => match serde_json::from_str::<ErrorEnvelope>(&response) {
                Ok(envelope) => {
                    error!("HTTP {code}: {}", envelope.error_summary);
                    Error::ErrorSummary { code, summary: envelope.error_summary }
                }
                Err(_) if (500..=599).contains(&code) => Error::ServerError(response),
                Err(_) => Error::UnexpectedHttpError { code, response },
            },
        }
    }
}

/// An [`Error`] without a single concrete type for the API error response, using a boxed trait
/// object instead.
///
/// This is useful if a function needs to return some combination of different error types. They
/// can be extracted later by using
/// [`std::error::Error::downcast_ref`](https://doc.rust-lang.org/std/error/trait.Error.html#method.downcast_ref)
/// or [`Error::downcast_ref_inner`] if desired.
///
/// See [`Error::boxed`] for how to convert a concretely-typed version of [`Error`] into this.
pub type BoxedError = Error<Box<dyn std::error::Error + Send + Sync>>;

/// Re-state every variant except `Api`, which has a different type parameter on each side.
macro_rules! map_api_error {
    ($value:expr, $api:pat => $mapped:expr) => {
        match $value {
            $api => $mapped,
            Error::HttpClient(e) => Error::HttpClient(e),
            Error::Json(e) => Error::Json(e),
            Error::UnexpectedResponse(e) => Error::UnexpectedResponse(e),
            Error::BadRequest(e) => Error::BadRequest(e),
            Error::Authentication(e) => Error::Authentication(e),
            Error::RateLimited { reason, retry_after_seconds } => Error::RateLimited { reason, retry_after_seconds },
            Error::AccessDenied(e) => Error::AccessDenied(e),
            Error::ServerError(e) => Error::ServerError(e),
            Error::ErrorSummary { code, summary } => Error::ErrorSummary { code, summary },
            Error::UnexpectedHttpError { code, response } => Error::UnexpectedHttpError { code, response },
        }
    };
}

impl<E: std::error::Error + Send + Sync + 'static> Error<E> {
    /// Look for an inner error of the given type anywhere within this error, by walking the chain
    /// of [`std::error::Error::source`] recursively until something matches the desired type.
    pub fn downcast_ref_inner<E2: std::error::Error + 'static>(&self) -> Option<&E2> {
        let mut inner = Some(self as &dyn std::error::Error);
        while let Some(e) = inner {
            if let Some(e) = e.downcast_ref() {
                return Some(e);
            }
            inner = e.source();
        }
        None
    }

    /// Change the concretely-typed API error, if any, into a boxed trait object.
    ///
    /// This makes it possible to combine dissimilar errors into one type, which can be broken out
    /// later using
    /// [`std::error::Error::downcast_ref`](https://doc.rust-lang.org/std/error/trait.Error.html#method.downcast_ref)
    /// if desired.
    pub fn boxed(self) -> BoxedError {
        map_api_error!(self, Error::Api(e) => Error::Api(Box::new(e)))
    }
}

impl Error<NoError> {
    /// Lift an error with no possible API error value to a typed error of any type.
    ///
    /// Ideally this would just be `impl<E> From<Error<NoError>> for Error<E>` but that conflicts
    /// with the reflexive conversion (E could be NoError), and Rust doesn't have negative type
    /// bounds or specialization, so it has to be this method instead.
    pub fn typed<E>(self) -> Error<E> {
        map_api_error!(self, Error::Api(x) => unreachable(x))
    }
}

/// A special error type for a method that doesn't have any defined error return. You can't
/// actually encounter a value of this type in real life; it's here to satisfy type requirements.
#[derive(Copy, Clone)]
pub enum NoError {}

impl PartialEq<NoError> for NoError {
    fn eq(&self, _: &NoError) -> bool {
        unreachable(*self)
    }
}

impl std::error::Error for NoError {}

impl std::fmt::Debug for NoError {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        unreachable(*self)
    }
}

impl std::fmt::Display for NoError {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        unreachable(*self)
    }
}

// This is the reason we can't just use the otherwise-identical `void` crate's Void type: we need
// to implement this trait.
impl<'de> serde::de::Deserialize<'de> for NoError {
    fn deserialize<D: serde::de::Deserializer<'de>>(_: D)
        -> Result<Self, D::Error>
    {
        Err(serde::de::Error::custom(
            "method has no defined error type, but an error was returned"))
    }
}

#[inline(always)]
fn unreachable(x: NoError) -> ! {
    match x {}
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bad_request_keeps_plain_text() {
        let e = Error::<NoError>::from_status(400, "Error in call to API function: bad".to_owned());
        match e {
            Error::BadRequest(text) => assert_eq!(text, "Error in call to API function: bad"),
            other => panic!("wrong error: {other:?}"),
        }
    }

    #[test]
    fn unauthorized_decodes_auth_error() {
        let body = r#"{"error_summary": "expired_access_token/..", "error": {".tag": "expired_access_token"}}"#;
        match Error::<NoError>::from_status(401, body.to_owned()) {
            Error::Authentication(AuthError::ExpiredAccessToken) => (),
            other => panic!("wrong error: {other:?}"),
        }
    }

    #[test]
    fn rate_limit_without_retry_after() {
        let body = r#"{"error_summary": "too_many_write_operations/..",
            "error": {"reason": {".tag": "too_many_write_operations"}}}"#;
        match Error::<NoError>::from_status(429, body.to_owned()) {
            Error::RateLimited { reason: RateLimitReason::TooManyWriteOperations, retry_after_seconds: 0 } => (),
            other => panic!("wrong error: {other:?}"),
        }
    }

    #[test]
    fn unknown_status_uses_envelope_when_possible() {
        let body = r#"{"error_summary": "path_root_error/.."}"#;
        match Error::<NoError>::from_status(422, body.to_owned()) {
            Error::ErrorSummary { code: 422, summary } => assert_eq!(summary, "path_root_error/.."),
            other => panic!("wrong error: {other:?}"),
        }
        match Error::<NoError>::from_status(418, "teapot".to_owned()) {
            Error::UnexpectedHttpError { code: 418, response } => assert_eq!(response, "teapot"),
            other => panic!("wrong error: {other:?}"),
        }
    }

    #[test]
    fn server_error_keeps_body() {
        match Error::<NoError>::from_status(503, "unavailable".to_owned()) {
            Error::ServerError(body) => assert_eq!(body, "unavailable"),
            other => panic!("wrong error: {other:?}"),
        }
    }

    #[test]
    fn server_error_with_envelope() {
        let body = r#"{"error_summary": "internal_error/.."}"#.to_owned();
        match Error::<NoError>::from_status(500, body) {
            Error::ErrorSummary { code: 500, summary } => assert_eq!(summary, "internal_error/.."),
            other => panic!("wrong error: {other:?}"),
        }
    }
}
