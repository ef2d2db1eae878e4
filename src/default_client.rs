// Copyright (c) 2019-2024 Dropbox, Inc.

//! Ready-made blocking clients, one per authentication kind, backed by `ureq`.
//!
//! Which HTTP library sits underneath is not part of the API. Programs that already carry an HTTP
//! stack can implement [`crate::client_trait`] over it and pass that to the route functions
//! instead.
//!
//! Only built with the `default_client` Cargo feature.

use crate::Error;
use crate::client_trait::{
    AppAuthClient, HttpClient, HttpRequestResultRaw, NoauthClient, TeamAuthClient, UserAuthClient,
};
use crate::client_trait_common::{HttpRequest, TeamSelect};
use crate::default_client_common::{impl_set_path_root, response_headers, set_header_escaped};

/// Implements [`HttpClient`] for a client holding a `UreqClient` in `inner`, plus the given
/// accessors, and the marker trait for its authentication kind.
macro_rules! forward_to_ureq {
    ($client:ty, $marker:ident, { $($accessor:tt)* }) => {
        impl HttpClient for $client {
            type Request = UreqRequest;

            fn execute(&self, request: UreqRequest, body: &[u8]) -> Result<HttpRequestResultRaw, Error> {
                self.inner.execute(request, body)
            }

            fn new_request(&self, url: &str) -> UreqRequest {
                self.inner.new_request(url)
            }

            $($accessor)*
        }

        impl $marker for $client {}
    };
}

/// Default HTTP client using User authorization.
#[derive(Debug)]
pub struct UserAuthDefaultClient {
    inner: UreqClient,
    token: String,
    path_root: Option<String>,
}

impl UserAuthDefaultClient {
    /// Create a new client using the given OAuth2 access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self { inner: UreqClient::default(), token: token.into(), path_root: None }
    }

    impl_set_path_root!(self);
}

forward_to_ureq!(UserAuthDefaultClient, UserAuthClient, {
    fn token(&self) -> Option<&str> { Some(&self.token) }
    fn path_root(&self) -> Option<&str> { self.path_root.as_deref() }
});

/// Default HTTP client using Team authorization. Team routes may act as a member or as an admin
/// via [`select`](Self::select).
#[derive(Debug)]
pub struct TeamAuthDefaultClient {
    inner: UreqClient,
    token: String,
    path_root: Option<String>,
    selected: Option<TeamSelect>,
}

impl TeamAuthDefaultClient {
    /// Create a new client using the given OAuth2 access token, acting as the team itself.
    pub fn new(token: impl Into<String>) -> Self {
        Self { inner: UreqClient::default(), token: token.into(), path_root: None, selected: None }
    }

    /// Act as the given team member or admin on subsequent team routes, or as the team if `None`.
    pub fn select(&mut self, selected: Option<TeamSelect>) {
        self.selected = selected;
    }

    impl_set_path_root!(self);
}

forward_to_ureq!(TeamAuthDefaultClient, TeamAuthClient, {
    fn token(&self) -> Option<&str> { Some(&self.token) }
    fn path_root(&self) -> Option<&str> { self.path_root.as_deref() }
    fn team_select(&self) -> Option<&TeamSelect> { self.selected.as_ref() }
});

/// Default HTTP client using App authorization: the app key and secret, sent as HTTP Basic
/// credentials.
#[derive(Debug)]
pub struct AppAuthDefaultClient {
    inner: UreqClient,
    key: String,
    secret: String,
}

impl AppAuthDefaultClient {
    /// Create a new client using the given app key and secret.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { inner: UreqClient::default(), key: key.into(), secret: secret.into() }
    }
}

forward_to_ureq!(AppAuthDefaultClient, AppAuthClient, {
    fn app_credentials(&self) -> Option<(&str, &str)> { Some((&self.key, &self.secret)) }
});

/// Default HTTP client for unauthenticated API calls, such as the OAuth2 token exchange and
/// `files/list_folder/longpoll`.
#[derive(Debug, Default)]
pub struct NoauthDefaultClient {
    inner: UreqClient,
    path_root: Option<String>,
}

impl NoauthDefaultClient {
    impl_set_path_root!(self);
}

forward_to_ureq!(NoauthDefaultClient, NoauthClient, {
    fn path_root(&self) -> Option<&str> { self.path_root.as_deref() }
});

#[derive(Debug)]
struct UreqClient {
    agent: ureq::Agent,
}

impl Default for UreqClient {
    fn default() -> Self {
        // Non-2xx responses carry the Dropbox error envelope; hand them back instead of failing.
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();
        Self {
            agent: config.into(),
        }
    }
}

impl UreqClient {
    fn execute(&self, request: UreqRequest, body: &[u8]) -> Result<HttpRequestResultRaw, Error> {
        let resp = request.req.send(body).map_err(|e| RequestError { inner: e })?;
        let (result_header, content_length) =
            response_headers(|name| resp.headers().get(name).map(|v| v.to_str()))?;
        Ok(HttpRequestResultRaw {
            status: resp.status().as_u16(),
            result_header,
            content_length,
            body: Box::new(resp.into_body().into_reader()),
        })
    }

    fn new_request(&self, url: &str) -> UreqRequest {
        UreqRequest {
            req: self.agent.post(url),
        }
    }
}

/// This is an implementation detail of the HTTP client.
pub struct UreqRequest {
    req: ureq::RequestBuilder<ureq::typestate::WithBody>,
}

impl HttpRequest for UreqRequest {
    fn set_header(mut self, name: &str, value: &str) -> Self {
        self.req = set_header_escaped(name, value, |name, value| self.req.header(name, value));
        self
    }
}

/// Errors from the HTTP client encountered in the course of making a request.
#[derive(thiserror::Error, Debug)]
pub enum DefaultClientError {
    /// The HTTP client encountered some I/O error.
    #[error("I/O error: {0}")]
    #[allow(clippy::upper_case_acronyms)]
    IO(#[from] std::io::Error),

    /// Some other error from the HTTP client implementation.
    #[error(transparent)]
    Request(#[from] RequestError),
}

macro_rules! wrap_error {
    ($e:ty) => {
        impl From<$e> for crate::Error {
            fn from(e: $e) -> Self {
                Self::HttpClient(Box::new(DefaultClientError::from(e)))
            }
        }
    }
}

wrap_error!(std::io::Error);
wrap_error!(RequestError);

/// Something went wrong making the request, or the server returned a response we didn't expect.
/// Use the `Display` or `Debug` impls to see more details.
/// Note that this type is intentionally vague about the details beyond these string
/// representations, to allow implementation changes in the future.
pub struct RequestError {
    inner: ureq::Error,
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <ureq::Error as std::fmt::Display>::fmt(&self.inner, f)
    }
}

impl std::fmt::Debug for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <ureq::Error as std::fmt::Debug>::fmt(&self.inner, f)
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}
