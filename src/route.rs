// Copyright (c) 2019-2024 Dropbox, Inc.

//! Route descriptors, and the macros that expand a namespace's route table into functions.
//!
//! Each namespace under [`crate::routes`] declares its routes exactly once, in a table of entries
//! like
//!
//! ```ignore
//! /// Doc comment for the generated function.
//! rpc get_metadata(&GetMetadataArg) -> Metadata, GetMetadataError
//!     = UserAuthClient Api "files/get_metadata";
//! ```
//!
//! The entry kind (`rpc`, `upload` or `download`) is the request [`Style`]; then come the function
//! name, the argument type (or `()` for routes that take none), the result and error types, the
//! client trait the route requires, the host [`Endpoint`] and the route path. The same table is
//! expanded three times: into blocking functions, async functions, and a `ROUTES` list of
//! [`Route`] values.

use crate::client_trait_common::{Endpoint, Style};

/// The kind of authentication a route requires.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthKind {
    /// No authentication.
    Noauth,

    /// A user's OAuth2 bearer token.
    User,

    /// A team's OAuth2 bearer token, optionally acting as a member or admin.
    Team,

    /// The app's key and secret, as HTTP Basic authentication.
    App,
}

/// Everything the request machinery needs to know about a route, apart from its types.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Route {
    /// Namespace and route name, e.g. `files/list_folder`.
    pub path: &'static str,

    /// Which host the route lives on.
    pub endpoint: Endpoint,

    /// How arguments and results are carried.
    pub style: Style,

    /// Which credentials the route needs.
    pub auth: AuthKind,
}

impl Route {
    /// The namespace part of the route path.
    pub fn namespace(&self) -> &'static str {
        match self.path.split_once('/') {
            Some((namespace, _)) => namespace,
            None => self.path,
        }
    }

    /// The route name within its namespace, e.g. `list_folder/continue`.
    pub fn name(&self) -> &'static str {
        match self.path.split_once('/') {
            Some((_, name)) => name,
            None => "",
        }
    }

    /// The full URL requests to this route go to.
    pub fn url(&self) -> String {
        self.endpoint.route_url(self.path)
    }
}

/// Map a client trait name from a route table to the [`AuthKind`] it stands for.
macro_rules! auth_kind {
    (NoauthClient) => { $crate::route::AuthKind::Noauth };
    (UserAuthClient) => { $crate::route::AuthKind::User };
    (TeamAuthClient) => { $crate::route::AuthKind::Team };
    (AppAuthClient) => { $crate::route::AuthKind::App };
}

macro_rules! route_style {
    (rpc) => { $crate::client_trait_common::Style::Rpc };
    (upload) => { $crate::client_trait_common::Style::Upload };
    (download) => { $crate::client_trait_common::Style::Download };
}

macro_rules! route_descriptor {
    ($kind:ident, $auth:ident, $ep:ident, $path:literal) => {
        $crate::route::Route {
            path: $path,
            endpoint: $crate::client_trait_common::Endpoint::$ep,
            style: route_style!($kind),
            auth: auth_kind!($auth),
        }
    };
}

/// Expand a route table into blocking functions.
macro_rules! sync_route_fns {
    () => {};

    (
        $(#[$m:meta])*
        rpc $name:ident() -> $ret:ty, $err:ty = $auth:ident $ep:ident $path:literal;
        $($rest:tt)*
    ) => {
        $(#[$m])*
        pub fn $name(
            client: &impl $crate::client_trait::$auth,
        ) -> ::std::result::Result<$ret, $crate::Error<$err>> {
            const ROUTE: $crate::route::Route = route_descriptor!(rpc, $auth, $ep, $path);
            $crate::client_helpers::sync_request(client, &ROUTE, &(), None)
        }

        sync_route_fns!($($rest)*);
    };

    (
        $(#[$m:meta])*
        rpc $name:ident(&$arg:ty) -> $ret:ty, $err:ty = $auth:ident $ep:ident $path:literal;
        $($rest:tt)*
    ) => {
        $(#[$m])*
        pub fn $name(
            client: &impl $crate::client_trait::$auth,
            arg: &$arg,
        ) -> ::std::result::Result<$ret, $crate::Error<$err>> {
            const ROUTE: $crate::route::Route = route_descriptor!(rpc, $auth, $ep, $path);
            $crate::client_helpers::sync_request(client, &ROUTE, arg, None)
        }

        sync_route_fns!($($rest)*);
    };

    (
        $(#[$m:meta])*
        upload $name:ident(&$arg:ty, body) -> $ret:ty, $err:ty = $auth:ident $ep:ident $path:literal;
        $($rest:tt)*
    ) => {
        $(#[$m])*
        pub fn $name(
            client: &impl $crate::client_trait::$auth,
            arg: &$arg,
            body: &[u8],
        ) -> ::std::result::Result<$ret, $crate::Error<$err>> {
            const ROUTE: $crate::route::Route = route_descriptor!(upload, $auth, $ep, $path);
            $crate::client_helpers::sync_request(client, &ROUTE, arg, Some(body))
        }

        sync_route_fns!($($rest)*);
    };

    (
        $(#[$m:meta])*
        download $name:ident(&$arg:ty, range) -> $ret:ty, $err:ty = $auth:ident $ep:ident $path:literal;
        $($rest:tt)*
    ) => {
        $(#[$m])*
        ///
        /// The content is in the `body` of the result; `range_start` and `range_end` request only
        /// part of it.
        pub fn $name(
            client: &impl $crate::client_trait::$auth,
            arg: &$arg,
            range_start: Option<u64>,
            range_end: Option<u64>,
        ) -> ::std::result::Result<
            $crate::client_trait::HttpRequestResult<$ret>,
            $crate::Error<$err>,
        > {
            const ROUTE: $crate::route::Route = route_descriptor!(download, $auth, $ep, $path);
            $crate::client_helpers::sync_request_with_body(
                client, &ROUTE, arg, None, range_start, range_end)
        }

        sync_route_fns!($($rest)*);
    };
}

/// Expand a route table into async functions.
macro_rules! async_route_fns {
    () => {};

    (
        $(#[$m:meta])*
        rpc $name:ident() -> $ret:ty, $err:ty = $auth:ident $ep:ident $path:literal;
        $($rest:tt)*
    ) => {
        $(#[$m])*
        pub async fn $name(
            client: &impl $crate::async_client_trait::$auth,
        ) -> ::std::result::Result<$ret, $crate::Error<$err>> {
            const ROUTE: $crate::route::Route = route_descriptor!(rpc, $auth, $ep, $path);
            $crate::client_helpers::request(client, &ROUTE, &(), None).await
        }

        async_route_fns!($($rest)*);
    };

    (
        $(#[$m:meta])*
        rpc $name:ident(&$arg:ty) -> $ret:ty, $err:ty = $auth:ident $ep:ident $path:literal;
        $($rest:tt)*
    ) => {
        $(#[$m])*
        pub async fn $name(
            client: &impl $crate::async_client_trait::$auth,
            arg: &$arg,
        ) -> ::std::result::Result<$ret, $crate::Error<$err>> {
            const ROUTE: $crate::route::Route = route_descriptor!(rpc, $auth, $ep, $path);
            $crate::client_helpers::request(client, &ROUTE, arg, None).await
        }

        async_route_fns!($($rest)*);
    };

    (
        $(#[$m:meta])*
        upload $name:ident(&$arg:ty, body) -> $ret:ty, $err:ty = $auth:ident $ep:ident $path:literal;
        $($rest:tt)*
    ) => {
        $(#[$m])*
        pub async fn $name(
            client: &impl $crate::async_client_trait::$auth,
            arg: &$arg,
            body: ::bytes::Bytes,
        ) -> ::std::result::Result<$ret, $crate::Error<$err>> {
            const ROUTE: $crate::route::Route = route_descriptor!(upload, $auth, $ep, $path);
            $crate::client_helpers::request(client, &ROUTE, arg, Some(body)).await
        }

        async_route_fns!($($rest)*);
    };

    (
        $(#[$m:meta])*
        download $name:ident(&$arg:ty, range) -> $ret:ty, $err:ty = $auth:ident $ep:ident $path:literal;
        $($rest:tt)*
    ) => {
        $(#[$m])*
        ///
        /// The content is in the `body` of the result; `range_start` and `range_end` request only
        /// part of it.
        pub async fn $name(
            client: &impl $crate::async_client_trait::$auth,
            arg: &$arg,
            range_start: Option<u64>,
            range_end: Option<u64>,
        ) -> ::std::result::Result<
            $crate::async_client_trait::HttpRequestResult<$ret>,
            $crate::Error<$err>,
        > {
            const ROUTE: $crate::route::Route = route_descriptor!(download, $auth, $ep, $path);
            $crate::client_helpers::request_with_body(
                client, &ROUTE, arg, None, range_start, range_end).await
        }

        async_route_fns!($($rest)*);
    };
}

/// Expand a route table into a `ROUTES` constant listing every route's descriptor.
macro_rules! route_index {
    (@acc [$($acc:tt)*]) => {
        /// Descriptors of every route in this namespace, in declaration order.
        pub const ROUTES: &[$crate::route::Route] = &[$($acc)*];
    };

    (
        @acc [$($acc:tt)*]
        $(#[$m:meta])*
        $kind:ident $name:ident $args:tt -> $ret:ty, $err:ty = $auth:ident $ep:ident $path:literal;
        $($rest:tt)*
    ) => {
        route_index!(@acc [$($acc)* route_descriptor!($kind, $auth, $ep, $path),] $($rest)*);
    };

    ($($entries:tt)*) => {
        route_index!(@acc [] $($entries)*);
    };
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn path_parts() {
        let route = Route {
            path: "files/list_folder/continue",
            endpoint: Endpoint::Api,
            style: Style::Rpc,
            auth: AuthKind::User,
        };
        assert_eq!(route.namespace(), "files");
        assert_eq!(route.name(), "list_folder/continue");
        assert_eq!(route.url(), "https://api.dropboxapi.com/2/files/list_folder/continue");
    }
}
