// Copyright (c) 2019-2024 Dropbox, Inc.

#![deny(
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms,
)]
#![recursion_limit = "256"]

// Enable a nightly feature for docs.rs which enables decorating feature-gated items.
// To enable this manually, run e.g. `cargo rustdoc --all-features -- --cfg docsrs`.
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Typed bindings to the Dropbox HTTP API v2.
//!
//! Every API route is a function taking a client (anything implementing one of the traits in
//! [`client_trait`] or [`async_client_trait`]) and a typed argument, returning the route's typed
//! result or an [`Error`] carrying the route's typed error.
//!
//! The routes of each namespace are declared once, in a table under [`routes`], and expanded into
//! the blocking functions in [`sync_routes`], the async functions in [`async_routes`], and a list
//! of [`route::Route`] descriptors.

/// Feature-gate something and also decorate it with the feature name on docs.rs.
macro_rules! if_feature {
    ($feature_name:expr, $($item:item)*) => {
        $(
            #[cfg(feature = $feature_name)]
            #[cfg_attr(docsrs, doc(cfg(feature = $feature_name)))]
            $item
        )*
    }
}

#[macro_use] extern crate log;

#[macro_use]
mod codec;

mod error;
pub use error::{BoxedError, Error, NoError};

/// Shorthand for the result of a route with no declared error type.
pub type Result<T> = std::result::Result<T, Error>;

pub mod client_trait_common;
pub mod client_trait;
pub mod async_client_trait;
pub(crate) mod client_helpers;
pub mod oauth2;

#[macro_use]
pub mod route;

if_feature! { "default_client", pub mod default_client; }
if_feature! { "default_async_client", pub mod default_async_client; }

#[cfg(any(feature = "default_client", feature = "default_async_client"))]
mod default_client_common;

pub mod types;

#[macro_use]
pub mod routes;

// Not wrapped in `if_feature!`: these expand the route table macros, which must be in textual
// scope at the module declaration.
#[cfg(feature = "sync_routes")]
#[cfg_attr(docsrs, doc(cfg(feature = "sync_routes")))]
pub mod sync_routes;

#[cfg(feature = "async_routes")]
#[cfg_attr(docsrs, doc(cfg(feature = "async_routes")))]
pub mod async_routes;

#[cfg(feature = "sync_routes_in_root")]
pub use sync_routes::*;

#[cfg(all(feature = "async_routes", not(feature = "sync_routes_in_root")))]
pub use async_routes::*;

// When no route flavour is re-exported at the root, at least make the types available there.
#[cfg(not(any(feature = "sync_routes_in_root", feature = "async_routes")))]
pub use types::*;
