// Copyright (c) 2019-2024 Dropbox, Inc.

//! Route tables, one per namespace.
//!
//! Each namespace module defines a `<namespace>_routes!` macro holding the namespace's table and
//! exports the table's [`Route`](crate::route::Route) descriptors as `ROUTES`. The blocking and
//! async functions generated from the same tables live in [`crate::sync_routes`] and
//! [`crate::async_routes`].

// Plain `#[cfg]` rather than `if_feature!`: the `#[macro_use]` must apply to the module declaration
// itself so the table macros stay in textual scope for the route modules declared after this one.

#[macro_use]
pub mod auth;

#[cfg(feature = "dbx_check")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_check")))]
#[macro_use]
pub mod check;

#[cfg(feature = "dbx_contacts")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_contacts")))]
#[macro_use]
pub mod contacts;

#[cfg(feature = "dbx_file_properties")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_file_properties")))]
#[macro_use]
pub mod file_properties;

#[cfg(feature = "dbx_files")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_files")))]
#[macro_use]
pub mod files;

#[cfg(feature = "dbx_sharing")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_sharing")))]
#[macro_use]
pub mod sharing;

#[cfg(feature = "dbx_team")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_team")))]
#[macro_use]
pub mod team;

#[cfg(feature = "dbx_users")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_users")))]
#[macro_use]
pub mod users;

/// Every route descriptor of every enabled namespace.
pub fn all() -> impl Iterator<Item = &'static crate::route::Route> {
    let tables: &[&'static [crate::route::Route]] = &[
        auth::ROUTES,
        #[cfg(feature = "dbx_check")] check::ROUTES,
        #[cfg(feature = "dbx_contacts")] contacts::ROUTES,
        #[cfg(feature = "dbx_file_properties")] file_properties::ROUTES,
        #[cfg(feature = "dbx_files")] files::ROUTES,
        #[cfg(feature = "dbx_sharing")] sharing::ROUTES,
        #[cfg(feature = "dbx_team")] team::ROUTES,
        #[cfg(feature = "dbx_users")] users::ROUTES,
    ];
    tables.to_vec().into_iter().flatten()
}
