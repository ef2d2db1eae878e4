// Copyright (c) 2019-2024 Dropbox, Inc.

//! Argument, result and error types of every API namespace.
//!
//! Structs map to JSON objects field by field. Unions map to JSON objects with a `.tag`
//! discriminator; see the `codec` module for the exact encoding.

pub mod auth;
pub mod common;

if_feature! { "dbx_async",
    /// Types of the `async` namespace, shared by routes which start long-running jobs.
    pub mod dbx_async;
}

if_feature! { "dbx_check", pub mod check; }
if_feature! { "dbx_contacts", pub mod contacts; }
if_feature! { "dbx_file_properties", pub mod file_properties; }
if_feature! { "dbx_files", pub mod files; }
if_feature! { "dbx_sharing", pub mod sharing; }
if_feature! { "dbx_team", pub mod team; }
if_feature! { "dbx_team_common", pub mod team_common; }
if_feature! { "dbx_team_policies", pub mod team_policies; }
if_feature! { "dbx_users", pub mod users; }
if_feature! { "dbx_users_common", pub mod users_common; }
