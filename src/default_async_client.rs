// Copyright (c) 2019-2024 Dropbox, Inc.

//! Ready-made async clients, one per authentication kind, backed by `reqwest`.
//!
//! Which HTTP library sits underneath is not part of the API. Programs that already carry an HTTP
//! stack can implement [`crate::async_client_trait`] over it and pass that to the route functions
//! instead.
//!
//! Only built with the `default_async_client` Cargo feature.

use std::future::Future;
use bytes::Bytes;
use futures::TryStreamExt;
use crate::async_client_trait::{
    AppAuthClient, HttpClient, HttpRequestResultRaw, NoauthClient, TeamAuthClient, UserAuthClient,
};
use crate::client_trait_common::{HttpRequest, TeamSelect};
use crate::default_client_common::{impl_set_path_root, response_headers, set_header_escaped};

/// Implements [`HttpClient`] for a client holding a `ReqwestClient` in `inner`, plus the given
/// accessors, and the marker trait for its authentication kind.
macro_rules! forward_to_reqwest {
    ($client:ty, $marker:ident, { $($accessor:tt)* }) => {
        impl HttpClient for $client {
            type Request = ReqwestRequest;

            fn execute(
                &self,
                request: ReqwestRequest,
                body: Bytes,
            ) -> impl Future<Output = crate::Result<HttpRequestResultRaw>> + Send {
                self.inner.execute(request, body)
            }

            fn new_request(&self, url: &str) -> ReqwestRequest {
                self.inner.new_request(url)
            }

            $($accessor)*
        }

        impl $marker for $client {}
    };
}

/// Default async HTTP client using User authorization.
#[derive(Debug)]
pub struct UserAuthDefaultClient {
    inner: ReqwestClient,
    token: String,
    path_root: Option<String>,
}

impl UserAuthDefaultClient {
    /// Create a new client using the given OAuth2 access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self { inner: ReqwestClient::default(), token: token.into(), path_root: None }
    }

    impl_set_path_root!(self);
}

forward_to_reqwest!(UserAuthDefaultClient, UserAuthClient, {
    fn token(&self) -> Option<&str> { Some(&self.token) }
    fn path_root(&self) -> Option<&str> { self.path_root.as_deref() }
});

/// Default async HTTP client using Team authorization. Team routes may act as a member or as an
/// admin via [`select`](Self::select).
#[derive(Debug)]
pub struct TeamAuthDefaultClient {
    inner: ReqwestClient,
    token: String,
    path_root: Option<String>,
    selected: Option<TeamSelect>,
}

impl TeamAuthDefaultClient {
    /// Create a new client using the given OAuth2 access token, acting as the team itself.
    pub fn new(token: impl Into<String>) -> Self {
        Self { inner: ReqwestClient::default(), token: token.into(), path_root: None, selected: None }
    }

    /// Act as the given team member or admin on subsequent team routes, or as the team if `None`.
    pub fn select(&mut self, selected: Option<TeamSelect>) {
        self.selected = selected;
    }

    impl_set_path_root!(self);
}

forward_to_reqwest!(TeamAuthDefaultClient, TeamAuthClient, {
    fn token(&self) -> Option<&str> { Some(&self.token) }
    fn path_root(&self) -> Option<&str> { self.path_root.as_deref() }
    fn team_select(&self) -> Option<&TeamSelect> { self.selected.as_ref() }
});

/// Default async HTTP client using App authorization (HTTP Basic with the app key and secret).
#[derive(Debug)]
pub struct AppAuthDefaultClient {
    inner: ReqwestClient,
    key: String,
    secret: String,
}

impl AppAuthDefaultClient {
    /// Create a new client using the given app key and secret.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { inner: ReqwestClient::default(), key: key.into(), secret: secret.into() }
    }
}

forward_to_reqwest!(AppAuthDefaultClient, AppAuthClient, {
    fn app_credentials(&self) -> Option<(&str, &str)> { Some((&self.key, &self.secret)) }
});

/// Default async HTTP client for unauthenticated API calls.
#[derive(Debug, Default)]
pub struct NoauthDefaultClient {
    inner: ReqwestClient,
    path_root: Option<String>,
}

impl NoauthDefaultClient {
    impl_set_path_root!(self);
}

forward_to_reqwest!(NoauthDefaultClient, NoauthClient, {
    fn path_root(&self) -> Option<&str> { self.path_root.as_deref() }
});

#[derive(Debug)]
struct ReqwestClient {
    inner: reqwest::Client,
}

impl Default for ReqwestClient {
    fn default() -> Self {
        let inner = reqwest::Client::builder()
            .https_only(true)
            .http2_prior_knowledge()
            .build()
            .unwrap_or_else(|e| {
                warn!("failed to build HTTP/2 client, falling back to defaults: {e}");
                reqwest::Client::default()
            });
        Self { inner }
    }
}

impl ReqwestClient {
    fn execute(
        &self,
        request: ReqwestRequest,
        body: Bytes,
    ) -> impl Future<Output = crate::Result<HttpRequestResultRaw>> + Send {
        let client = self.inner.clone();
        async move {
            let mut req = request.req.build().map_err(|e| crate::Error::HttpClient(Box::new(e)))?;
            debug!("request for {}", req.url());
            if !body.is_empty() {
                *req.body_mut() = Some(reqwest::Body::from(body));
            }

            let resp = client.execute(req).await
                .map_err(|e| crate::Error::HttpClient(Box::new(e)))?;
            let (result_header, content_length) =
                response_headers(|name| resp.headers().get(name).map(|v| v.to_str()))?;
            let status = resp.status().as_u16();
            let body = resp.bytes_stream()
                .map_err(std::io::Error::other)
                .into_async_read();

            Ok::<_, crate::Error>(HttpRequestResultRaw {
                status,
                result_header,
                content_length,
                body: Box::new(body),
            })
        }
    }

    fn new_request(&self, url: &str) -> ReqwestRequest {
        ReqwestRequest {
            req: self.inner.post(url),
        }
    }
}

/// This is an implementation detail of the HTTP client.
pub struct ReqwestRequest {
    req: reqwest::RequestBuilder,
}

impl HttpRequest for ReqwestRequest {
    fn set_header(mut self, name: &str, value: &str) -> Self {
        self.req = set_header_escaped(name, value, |name, value| self.req.header(name, value));
        self
    }
}
