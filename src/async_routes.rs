// Copyright (c) 2019-2024 Dropbox, Inc.

//! Async route functions, one module per namespace.
//!
//! Each module re-exports the namespace's types, so `async_routes::files::ListFolderArg` and
//! `async_routes::files::list_folder` sit side by side. Await the functions with a client
//! implementing the matching trait from [`crate::async_client_trait`]. Upload routes take their
//! content as [`bytes::Bytes`].

pub mod auth {
    pub use crate::types::auth::*;
    auth_routes!(async_route_fns);
}

pub mod common {
    pub use crate::types::common::*;
}

#[cfg(feature = "dbx_async")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_async")))]
pub mod dbx_async {
    pub use crate::types::dbx_async::*;
}

#[cfg(feature = "dbx_check")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_check")))]
pub mod check {
    pub use crate::types::check::*;
    check_routes!(async_route_fns);
}

#[cfg(feature = "dbx_contacts")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_contacts")))]
pub mod contacts {
    pub use crate::types::contacts::*;
    contacts_routes!(async_route_fns);
}

#[cfg(feature = "dbx_file_properties")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_file_properties")))]
pub mod file_properties {
    pub use crate::types::file_properties::*;
    file_properties_routes!(async_route_fns);
}

#[cfg(feature = "dbx_files")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_files")))]
pub mod files {
    pub use crate::types::files::*;
    files_routes!(async_route_fns);
}

#[cfg(feature = "dbx_sharing")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_sharing")))]
pub mod sharing {
    pub use crate::types::sharing::*;
    sharing_routes!(async_route_fns);
}

#[cfg(feature = "dbx_team")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_team")))]
pub mod team {
    pub use crate::types::team::*;
    team_routes!(async_route_fns);
}

#[cfg(feature = "dbx_team_common")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_team_common")))]
pub mod team_common {
    pub use crate::types::team_common::*;
}

#[cfg(feature = "dbx_team_policies")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_team_policies")))]
pub mod team_policies {
    pub use crate::types::team_policies::*;
}

#[cfg(feature = "dbx_users")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_users")))]
pub mod users {
    pub use crate::types::users::*;
    users_routes!(async_route_fns);
}

#[cfg(feature = "dbx_users_common")]
#[cfg_attr(docsrs, doc(cfg(feature = "dbx_users_common")))]
pub mod users_common {
    pub use crate::types::users_common::*;
}
