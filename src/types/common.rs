// Copyright (c) 2019-2024 Dropbox, Inc.

//! Types shared across namespaces.

use serde::{Deserialize, Serialize};

pub type Date = String;
pub type DisplayName = String;
pub type DropboxTimestamp = String;
pub type EmailAddress = String;
pub type NamespaceId = String;
pub type PathRootId = NamespaceId;
pub type SessionId = String;
pub type SharedFolderId = NamespaceId;

tagged_union! {
    /// Selects the root that paths in a request are evaluated relative to. Sent in the
    /// `Dropbox-API-Path-Root` header.
    pub enum PathRoot: open {
        /// Paths are relative to the authenticating user's home namespace, whether or not that
        /// user belongs to a team.
        Home = "home",
        /// Paths are relative to the authenticating user's root namespace. This fails with
        /// [`PathRootError::InvalidRoot`] if the given ID is not the user's root namespace.
        Root(NamespaceId) = "root",
        /// Paths are relative to the given namespace ID, if the user has access to it.
        NamespaceId(NamespaceId) = "namespace_id",
    }
}

tagged_union! {
    pub enum PathRootError: open {
        /// The root namespace id in the `Dropbox-API-Path-Root` header is not valid. The value of
        /// this error is the user's latest root info.
        InvalidRoot(RootInfo) = "invalid_root",
        /// You don't have permission to access the namespace in the `Dropbox-API-Path-Root` header.
        NoPermission = "no_permission",
    }
}

api_error!(PathRootError);

tagged_union! {
    /// Information about the current root of an account.
    pub enum RootInfo: open {
        Team{TeamRootInfo} = "team",
        User{UserRootInfo} = "user",
    }
}

/// Root info when the user is a member of a team with a separate root namespace and home
/// namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TeamRootInfo {
    /// The namespace ID for user's root namespace. It will be the namespace ID of the shared team
    /// root if the user is member of a team with a separate team root.
    pub root_namespace_id: NamespaceId,
    /// The namespace ID for user's home namespace.
    pub home_namespace_id: NamespaceId,
    /// The path for user's home directory under the shared team root.
    pub home_path: String,
}

impl TeamRootInfo {
    pub fn new(
        root_namespace_id: NamespaceId,
        home_namespace_id: NamespaceId,
        home_path: String,
    ) -> Self {
        TeamRootInfo { root_namespace_id, home_namespace_id, home_path }
    }
}

/// Root info when the user is not a member of a team, or the user is a member of a team and the
/// team does not have a separate root namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct UserRootInfo {
    pub root_namespace_id: NamespaceId,
    pub home_namespace_id: NamespaceId,
}

impl UserRootInfo {
    pub fn new(root_namespace_id: NamespaceId, home_namespace_id: NamespaceId) -> Self {
        UserRootInfo { root_namespace_id, home_namespace_id }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_root_encoding() {
        assert_eq!(serde_json::to_value(PathRoot::Home).unwrap(), json!({".tag": "home"}));
        assert_eq!(
            serde_json::to_value(PathRoot::NamespaceId("1".to_owned())).unwrap(),
            json!({".tag": "namespace_id", "namespace_id": "1"}));
    }

    #[test]
    fn invalid_root_carries_root_info() {
        let e: PathRootError = serde_json::from_value(json!({
            ".tag": "invalid_root",
            "invalid_root": {
                ".tag": "team",
                "root_namespace_id": "7",
                "home_namespace_id": "8",
                "home_path": "/Alice"
            }
        })).unwrap();
        assert_eq!(
            e,
            PathRootError::InvalidRoot(RootInfo::Team(TeamRootInfo::new(
                "7".to_owned(), "8".to_owned(), "/Alice".to_owned()))));
    }
}
