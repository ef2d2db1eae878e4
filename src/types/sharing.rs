// Copyright (c) 2019-2024 Dropbox, Inc.

//! Types of the `sharing` namespace: shared links and shared folders.

use serde::{Deserialize, Serialize};
use crate::codec::is_false;
use crate::types::common::{DropboxTimestamp, SharedFolderId};
use crate::types::dbx_async::AsyncJobId;
use crate::types::files::{self, FileId, LookupError, Path};
use crate::types::users::Team;

pub type ReadPath = String;

tagged_union! {
    /// Who can access a shared link.
    pub enum LinkAudience: open {
        /// Link is accessible by anyone.
        Public = "public",
        /// Link is accessible only by team members.
        Team = "team",
        /// The link can be used by no one. The link merely points the user to the content, and
        /// does not grant additional rights to the user. Members of the content who use this link
        /// can only access the content with their pre-existing access rights.
        NoOne = "no_one",
        /// Link is accessible only by members of the content.
        Members = "members",
    }
}

tagged_union! {
    pub enum RequestedLinkAccessLevel: open {
        /// Users who use the link can view and comment on the content.
        Viewer = "viewer",
        /// Users who use the link can edit, view and comment on the content.
        Editor = "editor",
        /// Request for the maximum access level you can set the link to.
        Max = "max",
        /// Request for the default access level the user has set.
        Default = "default",
    }
}

tagged_union! {
    /// The access permission that can be requested by the caller for the shared link.
    pub enum RequestedVisibility: open {
        /// Anyone who has received the link can access it. No login required.
        Public = "public",
        /// Only members of the same team can access the link. Login is required.
        TeamOnly = "team_only",
        /// A link-specific password is required to access the link. Login is not required.
        Password = "password",
    }
}

tagged_union! {
    /// The actual access permissions values of shared links after taking into account user
    /// preferences and the team and shared folder settings.
    pub enum ResolvedVisibility: open {
        Public = "public",
        TeamOnly = "team_only",
        Password = "password",
        /// Only members of the same team who have the link-specific password can access the link.
        TeamAndPassword = "team_and_password",
        /// Only members of the shared folder containing the linked file can access the link.
        SharedFolderOnly = "shared_folder_only",
        /// The link merely points the user to the content, and does not grant any additional
        /// rights.
        NoOne = "no_one",
        /// Only the current user can view this link.
        OnlyYou = "only_you",
    }
}

tagged_union! {
    pub enum LinkAccessLevel: open {
        /// Users who use the link can view and comment on the content.
        Viewer = "viewer",
        /// Users who use the link can edit, view and comment on the content.
        Editor = "editor",
    }
}

tagged_union! {
    pub enum SharedLinkAccessFailureReason: open {
        /// User is not logged in.
        LoginRequired = "login_required",
        /// This user's email address is not verified. This functionality is only available on
        /// accounts with a verified email address.
        EmailVerifyRequired = "email_verify_required",
        /// The link is password protected.
        PasswordRequired = "password_required",
        /// Access is allowed for team members only.
        TeamOnly = "team_only",
        /// Access is allowed for the shared link's owner only.
        OwnerOnly = "owner_only",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct SharedLinkSettings {
    /// Boolean flag to enable or disable password protection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_password: Option<bool>,
    /// If `require_password` is true, this is needed to specify the password to access the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_password: Option<String>,
    /// Expiration time of the shared link. By default the link won't expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DropboxTimestamp>,
    /// The new audience who can benefit from the access level specified by the link's access
    /// level specified in the `link_access_level` field of `LinkPermissions`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<LinkAudience>,
    /// Requested access level you want the audience to gain from this link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<RequestedLinkAccessLevel>,
    /// Use `audience` instead. The requested access for this shared link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_visibility: Option<RequestedVisibility>,
    /// Boolean flag to allow or not download capabilities for shared links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_download: Option<bool>,
}

impl SharedLinkSettings {
    pub fn with_require_password(mut self, value: bool) -> Self {
        self.require_password = Some(value);
        self
    }

    pub fn with_link_password(mut self, value: String) -> Self {
        self.link_password = Some(value);
        self
    }

    pub fn with_expires(mut self, value: DropboxTimestamp) -> Self {
        self.expires = Some(value);
        self
    }

    pub fn with_audience(mut self, value: LinkAudience) -> Self {
        self.audience = Some(value);
        self
    }

    pub fn with_access(mut self, value: RequestedLinkAccessLevel) -> Self {
        self.access = Some(value);
        self
    }

    pub fn with_allow_download(mut self, value: bool) -> Self {
        self.allow_download = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct CreateSharedLinkWithSettingsArg {
    /// The path to be shared by the shared link.
    pub path: ReadPath,
    /// The requested settings for the newly created shared link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SharedLinkSettings>,
}

impl CreateSharedLinkWithSettingsArg {
    pub fn new(path: ReadPath) -> Self {
        CreateSharedLinkWithSettingsArg { path, settings: None }
    }

    pub fn with_settings(mut self, value: SharedLinkSettings) -> Self {
        self.settings = Some(value);
        self
    }
}

/// Permissions for actions that can be performed on a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct LinkPermissions {
    /// Whether the caller can revoke the shared link.
    pub can_revoke: bool,
    /// Whether the user can set the expiry settings of the link.
    #[serde(default, skip_serializing_if = "is_false")]
    pub can_set_expiry: bool,
    /// Whether the user can remove the expiry of the link.
    #[serde(default, skip_serializing_if = "is_false")]
    pub can_remove_expiry: bool,
    /// Whether the link can be downloaded or not.
    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_download: bool,
    /// Whether the user can allow downloads via the link.
    #[serde(default, skip_serializing_if = "is_false")]
    pub can_allow_download: bool,
    /// Whether the user can disallow downloads via the link.
    #[serde(default, skip_serializing_if = "is_false")]
    pub can_disallow_download: bool,
    /// Whether comments are enabled for the linked file.
    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_comments: bool,
    /// Whether the team has disabled comments globally.
    #[serde(default, skip_serializing_if = "is_false")]
    pub team_restricts_comments: bool,
    /// The current visibility of the link after considering the shared links policies of the
    /// team (in case the link's owner is part of a team) and the shared folder (in case the linked
    /// file is part of a shared folder).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_visibility: Option<ResolvedVisibility>,
    /// The shared link's requested visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_visibility: Option<RequestedVisibility>,
    /// The failure reason for revoking the link, if the caller can't revoke it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revoke_failure_reason: Option<SharedLinkAccessFailureReason>,
    /// The type of audience who can benefit from the access level specified by the
    /// `link_access_level` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_audience: Option<LinkAudience>,
    /// The access level that the link will grant to its users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_access_level: Option<LinkAccessLevel>,
}

impl LinkPermissions {
    pub fn new(can_revoke: bool) -> Self {
        LinkPermissions {
            can_revoke,
            can_set_expiry: false,
            can_remove_expiry: false,
            allow_download: false,
            can_allow_download: false,
            can_disallow_download: false,
            allow_comments: false,
            team_restricts_comments: false,
            resolved_visibility: None,
            requested_visibility: None,
            revoke_failure_reason: None,
            effective_audience: None,
            link_access_level: None,
        }
    }
}

/// Information about a team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TeamMemberInfo {
    /// Information about the member's team.
    pub team_info: Team,
    /// The display name of the user.
    pub display_name: String,
    /// ID of user as a member of a team. This field will only be present if the member is in the
    /// same team as current user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
}

/// The metadata of a file shared link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct FileLinkMetadata {
    /// URL of the shared link.
    pub url: String,
    /// The linked file name (including extension). This never contains a slash.
    pub name: String,
    /// The link's access permissions.
    pub link_permissions: LinkPermissions,
    /// The modification time set by the desktop client when the file was added to Dropbox.
    pub client_modified: DropboxTimestamp,
    /// The last time the file was modified on Dropbox.
    pub server_modified: DropboxTimestamp,
    /// A unique identifier for the current revision of a file.
    pub rev: files::Rev,
    /// The file size in bytes.
    pub size: u64,
    /// A unique identifier for the linked file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FileId>,
    /// Expiration time, if set. By default the link won't expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DropboxTimestamp>,
    /// The lowercased full path in the user's Dropbox. This always starts with a slash. This field
    /// will only be present only if the linked file is in the authenticated user's Dropbox.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    /// The team membership information of the link's owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_member_info: Option<TeamMemberInfo>,
    /// The team information of the content's owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_owner_team_info: Option<Team>,
}

/// The metadata of a folder shared link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct FolderLinkMetadata {
    pub url: String,
    pub name: String,
    pub link_permissions: LinkPermissions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FileId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DropboxTimestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_member_info: Option<TeamMemberInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_owner_team_info: Option<Team>,
}

tagged_union! {
    /// The metadata of a shared link.
    pub enum SharedLinkMetadata: open {
        File{FileLinkMetadata} = "file",
        Folder{FolderLinkMetadata} = "folder",
    }
}

impl SharedLinkMetadata {
    /// URL of the shared link, if the link's kind is known.
    pub fn url(&self) -> Option<&str> {
        match self {
            SharedLinkMetadata::File(m) => Some(&m.url),
            SharedLinkMetadata::Folder(m) => Some(&m.url),
            SharedLinkMetadata::Other => None,
        }
    }
}

tagged_union! {
    pub enum SharedLinkAlreadyExistsMetadata: open {
        /// Metadata of the shared link that already exists.
        Metadata(SharedLinkMetadata) = "metadata",
    }
}

tagged_union! {
    pub enum SharedLinkSettingsError: open {
        /// The given settings are invalid (for example, all attributes of the `SharedLinkSettings`
        /// are empty, the requested visibility is `RequestedVisibility::Password` but the
        /// `SharedLinkSettings::link_password` is missing, `SharedLinkSettings::expires` is set to
        /// the past, etc.).
        InvalidSettings = "invalid_settings",
        /// User is not allowed to modify the settings of this link. Note that basic users can only
        /// set `RequestedVisibility::Public` as the `SharedLinkSettings::requested_visibility` and
        /// cannot set `SharedLinkSettings::expires`.
        NotAuthorized = "not_authorized",
    }
}

tagged_union! {
    pub enum CreateSharedLinkWithSettingsError: open {
        Path(LookupError) = "path",
        /// This user's email address is not verified. This functionality is only available on
        /// accounts with a verified email address.
        EmailNotVerified = "email_not_verified",
        /// The shared link already exists. You can call `list_shared_links` to get the existing
        /// link, or use the provided metadata if it is returned.
        SharedLinkAlreadyExists(Option<SharedLinkAlreadyExistsMetadata>) = "shared_link_already_exists",
        /// There is an error with the given settings.
        SettingsError(SharedLinkSettingsError) = "settings_error",
        /// The user is not allowed to create a shared link to the specified file.
        AccessDenied = "access_denied",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ListSharedLinksArg {
    /// See `list_shared_links` description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<ReadPath>,
    /// The cursor returned by your last call to `list_shared_links`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// See `list_shared_links` description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_only: Option<bool>,
}

impl ListSharedLinksArg {
    pub fn with_path(mut self, value: ReadPath) -> Self {
        self.path = Some(value);
        self
    }

    pub fn with_cursor(mut self, value: String) -> Self {
        self.cursor = Some(value);
        self
    }

    pub fn with_direct_only(mut self, value: bool) -> Self {
        self.direct_only = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ListSharedLinksResult {
    /// Shared links applicable to the path argument.
    pub links: Vec<SharedLinkMetadata>,
    /// Is true if there are additional shared links that have not been returned yet. Pass the
    /// cursor into `list_shared_links` to retrieve them.
    pub has_more: bool,
    /// Pass the cursor into `list_shared_links` to obtain the additional links. Cursor is returned
    /// only if no path is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

tagged_union! {
    pub enum ListSharedLinksError: open {
        Path(LookupError) = "path",
        /// Indicates that the cursor has been invalidated. Call `list_shared_links` to obtain a new
        /// cursor.
        Reset = "reset",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct RevokeSharedLinkArg {
    /// URL of the shared link.
    pub url: String,
}

impl RevokeSharedLinkArg {
    pub fn new(url: String) -> Self {
        RevokeSharedLinkArg { url }
    }
}

tagged_union! {
    pub enum RevokeSharedLinkError: open {
        /// The shared link wasn't found.
        SharedLinkNotFound = "shared_link_not_found",
        /// The caller is not allowed to access this shared link.
        SharedLinkAccessDenied = "shared_link_access_denied",
        /// This type of link is not supported; use `files::export` instead.
        UnsupportedLinkType = "unsupported_link_type",
        /// Shared link is malformed.
        SharedLinkMalformed = "shared_link_malformed",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct GetSharedLinkMetadataArg {
    /// URL of the shared link.
    pub url: String,
    /// If the shared link is to a folder, this parameter can be used to retrieve the metadata for
    /// a specific file or sub-folder in this folder. A relative path should be used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Path>,
    /// If the shared link has a password, this parameter can be used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_password: Option<String>,
}

impl GetSharedLinkMetadataArg {
    pub fn new(url: String) -> Self {
        GetSharedLinkMetadataArg { url, path: None, link_password: None }
    }

    pub fn with_path(mut self, value: Path) -> Self {
        self.path = Some(value);
        self
    }

    pub fn with_link_password(mut self, value: String) -> Self {
        self.link_password = Some(value);
        self
    }
}

tagged_union! {
    pub enum SharedLinkError: open {
        /// The shared link wasn't found.
        SharedLinkNotFound = "shared_link_not_found",
        /// The caller is not allowed to access this shared link.
        SharedLinkAccessDenied = "shared_link_access_denied",
        /// This type of link is not supported; use `files::export` instead.
        UnsupportedLinkType = "unsupported_link_type",
    }
}

tagged_union! {
    pub enum GetSharedLinkFileError: open {
        SharedLinkNotFound = "shared_link_not_found",
        SharedLinkAccessDenied = "shared_link_access_denied",
        UnsupportedLinkType = "unsupported_link_type",
        /// Directories cannot be retrieved by this endpoint.
        SharedLinkIsDirectory = "shared_link_is_directory",
    }
}

tagged_union! {
    /// Who can change a shared folder's access control list (ACL). In other words, who can add,
    /// remove, or change the privileges of members.
    pub enum AclUpdatePolicy: open {
        /// Only the owner can update the ACL.
        Owner = "owner",
        /// Any editor can update the ACL. This may be further restricted to editors on the same
        /// team.
        Editors = "editors",
    }
}

tagged_union! {
    /// Policy governing who can be a member of a shared folder. Only applicable to folders owned
    /// by a user on a team.
    pub enum MemberPolicy: open {
        /// Only a teammate can become a member.
        Team = "team",
        /// Anyone can become a member.
        Anyone = "anyone",
    }
}

tagged_union! {
    /// Who can view shared links in this folder.
    pub enum SharedLinkPolicy: open {
        /// Links can be shared with anyone.
        Anyone = "anyone",
        /// Links can be shared with anyone on the same team as the owner.
        Team = "team",
        /// Links can only be shared among members of the shared folder.
        Members = "members",
    }
}

tagged_union! {
    pub enum ViewerInfoPolicy: open {
        /// Viewer information is available on this file.
        Enabled = "enabled",
        /// Viewer information is disabled on this file.
        Disabled = "disabled",
    }
}

tagged_union! {
    /// Information about the inheritance policy of a shared folder.
    pub enum AccessInheritance: open {
        /// The shared folder inherits its members from the parent folder.
        Inherit = "inherit",
        /// The shared folder does not inherit its members from the parent folder.
        NoInherit = "no_inherit",
    }
}

tagged_union! {
    /// Actions that may be taken on shared folders.
    pub enum FolderAction: open {
        ChangeOptions = "change_options",
        DisableViewerInfo = "disable_viewer_info",
        EditContents = "edit_contents",
        EnableViewerInfo = "enable_viewer_info",
        InviteEditor = "invite_editor",
        InviteViewer = "invite_viewer",
        InviteViewerNoComment = "invite_viewer_no_comment",
        RelinquishMembership = "relinquish_membership",
        Unmount = "unmount",
        Unshare = "unshare",
        LeaveACopy = "leave_a_copy",
        ShareLink = "share_link",
        CreateLink = "create_link",
        SetAccessInheritance = "set_access_inheritance",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ShareFolderArg {
    /// The path or the file id to the folder to share. If it does not exist, then a new one is
    /// created.
    pub path: files::WritePath,
    /// Who can add and remove members of this shared folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl_update_policy: Option<AclUpdatePolicy>,
    /// Whether to force the share to happen asynchronously.
    #[serde(default, skip_serializing_if = "is_false")]
    pub force_async: bool,
    /// Who can be a member of this shared folder. Only applicable if the current user is on a
    /// team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_policy: Option<MemberPolicy>,
    /// The policy to apply to shared links created for content inside this shared folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_link_policy: Option<SharedLinkPolicy>,
    /// Who can enable/disable viewer info for this shared folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_info_policy: Option<ViewerInfoPolicy>,
    /// The access inheritance settings for the folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_inheritance: Option<AccessInheritance>,
    /// A list of `FolderAction`s corresponding to `FolderPermission`s that should appear in the
    /// response's `SharedFolderMetadata::permissions` field describing the actions the
    /// authenticated user can perform on the folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<FolderAction>>,
}

impl ShareFolderArg {
    pub fn new(path: files::WritePath) -> Self {
        ShareFolderArg {
            path,
            acl_update_policy: None,
            force_async: false,
            member_policy: None,
            shared_link_policy: None,
            viewer_info_policy: None,
            access_inheritance: None,
            actions: None,
        }
    }

    pub fn with_acl_update_policy(mut self, value: AclUpdatePolicy) -> Self {
        self.acl_update_policy = Some(value);
        self
    }

    pub fn with_force_async(mut self, value: bool) -> Self {
        self.force_async = value;
        self
    }

    pub fn with_member_policy(mut self, value: MemberPolicy) -> Self {
        self.member_policy = Some(value);
        self
    }

    pub fn with_shared_link_policy(mut self, value: SharedLinkPolicy) -> Self {
        self.shared_link_policy = Some(value);
        self
    }

    pub fn with_access_inheritance(mut self, value: AccessInheritance) -> Self {
        self.access_inheritance = Some(value);
        self
    }
}

tagged_union! {
    /// Defines the access levels for collaborators.
    pub enum AccessLevel: open {
        /// The collaborator is the owner of the shared folder. Owners can view and edit the shared
        /// folder as well as set the folder's policies using `update_folder_policy`.
        Owner = "owner",
        /// The collaborator can both view and edit the shared folder.
        Editor = "editor",
        /// The collaborator can only view the shared folder.
        Viewer = "viewer",
        /// The collaborator can only view the shared folder and does not have any access to
        /// comments.
        ViewerNoComment = "viewer_no_comment",
        /// The collaborator can only view the shared folder that they have access to.
        Traverse = "traverse",
        /// The collaborator has no access, but may join through a link to the folder.
        NoAccess = "no_access",
    }
}

/// A set of policies governing membership and privileges for a shared folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct FolderPolicy {
    /// Who can add and remove members from this shared folder.
    pub acl_update_policy: AclUpdatePolicy,
    /// Who links can be shared with.
    pub shared_link_policy: SharedLinkPolicy,
    /// Who can be a member of this shared folder, as set on the folder itself. The effective
    /// policy may differ from this value if the team-wide policy is more restrictive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_policy: Option<MemberPolicy>,
    /// Who can be a member of this shared folder, taking into account both the folder and the
    /// team-wide policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_member_policy: Option<MemberPolicy>,
    /// Who can enable/disable viewer info for this shared folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_info_policy: Option<ViewerInfoPolicy>,
}

/// The metadata which includes basic information about the shared folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct SharedFolderMetadata {
    /// The current user's access level for this shared folder.
    pub access_type: AccessLevel,
    /// Whether this folder is inside of a team folder.
    pub is_inside_team_folder: bool,
    /// Whether this folder is a team folder.
    pub is_team_folder: bool,
    /// The name of the this shared folder.
    pub name: String,
    /// Policies governing this shared folder.
    pub policy: FolderPolicy,
    /// URL for displaying a web preview of the shared folder.
    pub preview_url: String,
    /// The ID of the shared folder.
    pub shared_folder_id: SharedFolderId,
    /// Timestamp indicating when the current user was invited to this shared folder.
    pub time_invited: DropboxTimestamp,
    /// The display names of the users that own the folder. If the folder is part of a team
    /// folder, the display names of the team admins are also included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_display_names: Option<Vec<String>>,
    /// The team that owns the folder. This field is not present if the folder is not owned by a
    /// team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_team: Option<Team>,
    /// The ID of the parent shared folder. This field is present only if the folder is contained
    /// within another shared folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_shared_folder_id: Option<SharedFolderId>,
    /// The full path of this shared folder. Absent for unmounted folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
    /// The lower-cased full path of this shared folder. Absent for unmounted folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    /// Display name for the parent folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_folder_name: Option<String>,
    /// Whether the folder inherits its members from its parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_inheritance: Option<AccessInheritance>,
}

tagged_union! {
    pub enum ShareFolderLaunch: open {
        /// This response indicates that the processing is asynchronous. The string is an id that
        /// can be used to obtain the status of the asynchronous job.
        AsyncJobId(AsyncJobId) = "async_job_id",
        Complete{SharedFolderMetadata} = "complete",
    }
}

tagged_union! {
    pub enum SharePathError: open {
        /// A file is at the specified path.
        IsFile = "is_file",
        /// We do not support sharing a folder inside a shared folder.
        InsideSharedFolder = "inside_shared_folder",
        /// We do not support shared folders that contain shared folders.
        ContainsSharedFolder = "contains_shared_folder",
        /// We do not support shared folders that contain app folders.
        ContainsAppFolder = "contains_app_folder",
        /// We do not support shared folders that contain team folders.
        ContainsTeamFolder = "contains_team_folder",
        /// We do not support sharing an app folder.
        IsAppFolder = "is_app_folder",
        /// We do not support sharing a folder inside an app folder.
        InsideAppFolder = "inside_app_folder",
        /// A public folder can't be shared this way. Use a public link instead.
        IsPublicFolder = "is_public_folder",
        /// A folder inside a public folder can't be shared this way. Use a public link instead.
        InsidePublicFolder = "inside_public_folder",
        /// Folder is already shared. Contains metadata about the existing shared folder.
        AlreadyShared{SharedFolderMetadata} = "already_shared",
        /// Path is not valid.
        InvalidPath = "invalid_path",
        /// We do not support sharing a Mac OS X package.
        IsOsxPackage = "is_osx_package",
        /// We do not support sharing a folder inside a Mac OS X package.
        InsideOsxPackage = "inside_osx_package",
        /// We do not support sharing the Vault folder.
        IsVault = "is_vault",
        /// We do not support sharing a folder inside a locked Vault.
        IsVaultLocked = "is_vault_locked",
        /// We do not support sharing the Family folder.
        IsFamily = "is_family",
    }
}

tagged_union! {
    pub enum ShareFolderError: open {
        /// This user's email address is not verified. This functionality is only available on
        /// accounts with a verified email address.
        EmailUnverified = "email_unverified",
        /// `ShareFolderArg::path` is invalid.
        BadPath(SharePathError) = "bad_path",
        /// Team policy is more restrictive than `ShareFolderArg::member_policy`.
        TeamPolicyDisallowsMemberPolicy = "team_policy_disallows_member_policy",
        /// The current user's account is not allowed to select the specified
        /// `ShareFolderArg::shared_link_policy`.
        DisallowedSharedLinkPolicy = "disallowed_shared_link_policy",
        /// The current user does not have permission to perform this action.
        NoPermission = "no_permission",
    }
}

tagged_union! {
    pub enum ShareFolderJobStatus: open {
        /// The asynchronous job is still in progress.
        InProgress = "in_progress",
        /// The share job has finished. The value is the metadata for the folder.
        Complete{SharedFolderMetadata} = "complete",
        Failed(ShareFolderError) = "failed",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ListFoldersArg {
    /// The maximum number of results to return per request.
    #[serde(default = "default_list_folders_limit", skip_serializing_if = "is_default_list_folders_limit")]
    pub limit: u32,
    /// A list of `FolderAction`s corresponding to `FolderPermission`s that should appear in the
    /// response's `SharedFolderMetadata::permissions` field describing the actions the
    /// authenticated user can perform on the folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<FolderAction>>,
}

fn default_list_folders_limit() -> u32 {
    1000
}

fn is_default_list_folders_limit(value: &u32) -> bool {
    *value == default_list_folders_limit()
}

impl Default for ListFoldersArg {
    fn default() -> Self {
        ListFoldersArg { limit: default_list_folders_limit(), actions: None }
    }
}

impl ListFoldersArg {
    pub fn with_limit(mut self, value: u32) -> Self {
        self.limit = value;
        self
    }

    pub fn with_actions(mut self, value: Vec<FolderAction>) -> Self {
        self.actions = Some(value);
        self
    }
}

/// Result for `list_folders` or `list_mountable_folders`, depending on which endpoint was
/// requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ListFoldersResult {
    /// List of all shared folders the authenticated user has access to.
    pub entries: Vec<SharedFolderMetadata>,
    /// Present if there are additional shared folders that have not been returned yet. Pass the
    /// cursor into the corresponding continue endpoint to list additional shared folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ListFoldersContinueArg {
    /// The cursor returned by the previous API call specified in the endpoint description.
    pub cursor: String,
}

impl ListFoldersContinueArg {
    pub fn new(cursor: String) -> Self {
        ListFoldersContinueArg { cursor }
    }
}

tagged_union! {
    pub enum ListFoldersContinueError: open {
        /// `ListFoldersContinueArg::cursor` is invalid.
        InvalidCursor = "invalid_cursor",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct GetMetadataArgs {
    /// The ID for the shared folder.
    pub shared_folder_id: SharedFolderId,
    /// A list of `FolderAction`s corresponding to `FolderPermission`s that should appear in the
    /// response's `SharedFolderMetadata::permissions` field describing the actions the
    /// authenticated user can perform on the folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<FolderAction>>,
}

impl GetMetadataArgs {
    pub fn new(shared_folder_id: SharedFolderId) -> Self {
        GetMetadataArgs { shared_folder_id, actions: None }
    }

    pub fn with_actions(mut self, value: Vec<FolderAction>) -> Self {
        self.actions = Some(value);
        self
    }
}

tagged_union! {
    /// There is an error accessing the shared folder.
    pub enum SharedFolderAccessError: open {
        /// This shared folder ID is invalid.
        InvalidId = "invalid_id",
        /// The user is not a member of the shared folder thus cannot access it.
        NotAMember = "not_a_member",
        /// The user does not exist or their account is disabled.
        InvalidMember = "invalid_member",
        /// Never set.
        EmailUnverified = "email_unverified",
        /// The shared folder is unmounted.
        Unmounted = "unmounted",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct UnshareFolderArg {
    /// The ID for the shared folder.
    pub shared_folder_id: SharedFolderId,
    /// If true, members of this shared folder will get a copy of this folder after it's
    /// unshared. Otherwise, it will be removed from their Dropbox. The current user, who is an
    /// owner, will always retain their copy.
    #[serde(default, skip_serializing_if = "is_false")]
    pub leave_a_copy: bool,
}

impl UnshareFolderArg {
    pub fn new(shared_folder_id: SharedFolderId) -> Self {
        UnshareFolderArg { shared_folder_id, leave_a_copy: false }
    }

    pub fn with_leave_a_copy(mut self, value: bool) -> Self {
        self.leave_a_copy = value;
        self
    }
}

tagged_union! {
    pub enum UnshareFolderError: open {
        AccessError(SharedFolderAccessError) = "access_error",
        /// This action cannot be performed on a team shared folder.
        TeamFolder = "team_folder",
        /// The current user does not have permission to perform this action.
        NoPermission = "no_permission",
        /// This shared folder has too many files to be unshared.
        TooManyFiles = "too_many_files",
    }
}

tagged_union! {
    /// Includes different ways to identify a member of a shared folder.
    pub enum MemberSelector: open {
        /// Dropbox account, team member, or group ID of member.
        DropboxId(String) = "dropbox_id",
        /// Email address of member.
        Email(String) = "email",
    }
}

/// The member and type of access the member should have when added to a shared folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct AddMember {
    /// The member to add to the shared folder.
    pub member: MemberSelector,
    /// The access level to grant `member` to the shared folder. `AccessLevel::Owner` is disallowed.
    #[serde(default = "default_access_level", skip_serializing_if = "is_default_access_level")]
    pub access_level: AccessLevel,
}

fn default_access_level() -> AccessLevel {
    AccessLevel::Viewer
}

fn is_default_access_level(value: &AccessLevel) -> bool {
    *value == default_access_level()
}

impl AddMember {
    pub fn new(member: MemberSelector) -> Self {
        AddMember { member, access_level: default_access_level() }
    }

    pub fn with_access_level(mut self, value: AccessLevel) -> Self {
        self.access_level = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct AddFolderMemberArg {
    /// The ID for the shared folder.
    pub shared_folder_id: SharedFolderId,
    /// The intended list of members to add. Added members will receive invites to join the shared
    /// folder.
    pub members: Vec<AddMember>,
    /// Whether added members should be notified via email and device notifications of their
    /// invite.
    #[serde(default, skip_serializing_if = "is_false")]
    pub quiet: bool,
    /// Optional message to display to added members in their invitation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

impl AddFolderMemberArg {
    pub fn new(shared_folder_id: SharedFolderId, members: Vec<AddMember>) -> Self {
        AddFolderMemberArg { shared_folder_id, members, quiet: false, custom_message: None }
    }

    pub fn with_quiet(mut self, value: bool) -> Self {
        self.quiet = value;
        self
    }

    pub fn with_custom_message(mut self, value: String) -> Self {
        self.custom_message = Some(value);
        self
    }
}

tagged_union! {
    pub enum AddMemberSelectorError: open {
        /// Automatically created groups can only be added to team folders.
        AutomaticGroup = "automatic_group",
        /// The value is the ID that could not be identified.
        InvalidDropboxId(String) = "invalid_dropbox_id",
        /// The value is the e-email address that is malformed.
        InvalidEmail(String) = "invalid_email",
        /// The value is the ID of the Dropbox user with an unverified email address. Invite
        /// unverified users by email address instead of by their Dropbox ID.
        UnverifiedDropboxId(String) = "unverified_dropbox_id",
        /// At least one of the specified groups in `AddFolderMemberArg::members` is deleted.
        GroupDeleted = "group_deleted",
        /// Sharing to a group that is not on the current user's team.
        GroupNotOnTeam = "group_not_on_team",
    }
}

tagged_union! {
    pub enum AddFolderMemberError: open {
        /// Unable to access shared folder.
        AccessError(SharedFolderAccessError) = "access_error",
        /// This user's email address is not verified. This functionality is only available on
        /// accounts with a verified email address.
        EmailUnverified = "email_unverified",
        /// The current user has been banned.
        BannedMember = "banned_member",
        /// `AddFolderMemberArg::members` contains a bad invitation recipient.
        BadMember(AddMemberSelectorError) = "bad_member",
        /// Your team policy does not allow sharing outside of the team.
        CantShareOutsideTeam = "cant_share_outside_team",
        /// The value is the member limit that was reached.
        TooManyMembers(u64) = "too_many_members",
        /// The value is the pending invite limit that was reached.
        TooManyPendingInvites(u64) = "too_many_pending_invites",
        /// The current user has hit the limit of invites they can send per day.
        RateLimit = "rate_limit",
        /// The current user is trying to share with too many people at once.
        TooManyInvitees = "too_many_invitees",
        /// The current user's account doesn't support this action.
        InsufficientPlan = "insufficient_plan",
        /// This action cannot be performed on a team shared folder.
        TeamFolder = "team_folder",
        /// The current user does not have permission to perform this action.
        NoPermission = "no_permission",
        /// Invalid shared folder error will be returned as an access_error.
        InvalidSharedFolder = "invalid_shared_folder",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct RemoveFolderMemberArg {
    /// The ID for the shared folder.
    pub shared_folder_id: SharedFolderId,
    /// The member to remove from the folder.
    pub member: MemberSelector,
    /// If true, the removed user will keep their copy of the folder after it's unshared, assuming
    /// it was mounted. Otherwise, it will be removed from their Dropbox. This must be set to false
    /// when removing a group, or when the folder is within a team folder or another shared folder.
    pub leave_a_copy: bool,
}

impl RemoveFolderMemberArg {
    pub fn new(shared_folder_id: SharedFolderId, member: MemberSelector, leave_a_copy: bool) -> Self {
        RemoveFolderMemberArg { shared_folder_id, member, leave_a_copy }
    }
}

tagged_union! {
    pub enum SharedFolderMemberError: open {
        /// The target dropbox_id is invalid.
        InvalidDropboxId = "invalid_dropbox_id",
        /// The target dropbox_id is not a member of the shared folder.
        NotAMember = "not_a_member",
        /// The target member only has inherited access to the shared folder.
        NoExplicitAccess{MemberAccessLevelResult} = "no_explicit_access",
    }
}

/// Contains information about a member's access level to content after an operation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct MemberAccessLevelResult {
    /// The member still has this level of access to the content through a parent folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessLevel>,
    /// A localized string with additional information about why the user has this access level to
    /// the content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

tagged_union! {
    pub enum RemoveFolderMemberError: open {
        AccessError(SharedFolderAccessError) = "access_error",
        MemberError(SharedFolderMemberError) = "member_error",
        /// The target user is the owner of the shared folder. You can't remove this user until
        /// ownership has been transferred to another member.
        FolderOwner = "folder_owner",
        /// The target user has access to the shared folder via a group.
        GroupAccess = "group_access",
        /// This action cannot be performed on a team shared folder.
        TeamFolder = "team_folder",
        /// The current user does not have permission to perform this action.
        NoPermission = "no_permission",
        /// This shared folder has too many files for leaving a copy. You can still remove this user
        /// without leaving a copy.
        TooManyFiles = "too_many_files",
    }
}

api_error!(
    SharedLinkSettingsError,
    CreateSharedLinkWithSettingsError,
    ListSharedLinksError,
    RevokeSharedLinkError,
    SharedLinkError,
    GetSharedLinkFileError,
    SharePathError,
    ShareFolderError,
    ListFoldersContinueError,
    SharedFolderAccessError,
    UnshareFolderError,
    AddMemberSelectorError,
    AddFolderMemberError,
    SharedFolderMemberError,
    RemoveFolderMemberError,
);

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn shared_link_metadata_file() {
        let link: SharedLinkMetadata = serde_json::from_value(json!({
            ".tag": "file",
            "url": "https://www.dropbox.com/s/2sn712vy1ovegw8/Prime_Numbers.txt?dl=0",
            "name": "Prime_Numbers.txt",
            "link_permissions": {
                "can_revoke": false,
                "resolved_visibility": {".tag": "public"},
                "revoke_failure_reason": {".tag": "owner_only"}
            },
            "client_modified": "2015-05-12T15:50:38Z",
            "server_modified": "2015-05-12T15:50:38Z",
            "rev": "a1c10ce0dd78",
            "size": 7212,
            "id": "id:a4ayc_80_OEAAAAAAAAAXw",
            "path_lower": "/homework/math/prime_numbers.txt",
            "team_member_info": {
                "team_info": {"id": "dbtid:AAFdgehTzw7WlXhZJsbGCLePe8RvQGYDr-I", "name": "Acme, Inc."},
                "display_name": "Roger Rabbit",
                "member_id": "dbmid:abcd1234"
            }
        })).unwrap();
        assert_eq!(
            link.url(),
            Some("https://www.dropbox.com/s/2sn712vy1ovegw8/Prime_Numbers.txt?dl=0"));
        let SharedLinkMetadata::File(file) = link else { panic!("not a file link") };
        assert_eq!(
            file.link_permissions.revoke_failure_reason,
            Some(SharedLinkAccessFailureReason::OwnerOnly));
        assert_eq!(file.team_member_info.map(|t| t.team_info.name), Some("Acme, Inc.".to_owned()));
    }

    #[test]
    fn already_exists_may_carry_metadata() {
        let e: CreateSharedLinkWithSettingsError = serde_json::from_value(json!({
            ".tag": "shared_link_already_exists"
        })).unwrap();
        assert_eq!(e, CreateSharedLinkWithSettingsError::SharedLinkAlreadyExists(None));

        let e: CreateSharedLinkWithSettingsError = serde_json::from_value(json!({
            ".tag": "shared_link_already_exists",
            "shared_link_already_exists": {
                ".tag": "metadata",
                "metadata": {".tag": "some_future_kind", "url": "x"}
            }
        })).unwrap();
        assert_eq!(
            e,
            CreateSharedLinkWithSettingsError::SharedLinkAlreadyExists(Some(
                SharedLinkAlreadyExistsMetadata::Metadata(SharedLinkMetadata::Other))));
    }

    #[test]
    fn add_member_defaults_to_viewer() {
        let arg = AddFolderMemberArg::new(
            "84528192421".to_owned(),
            vec![
                AddMember::new(MemberSelector::Email("justin@example.com".to_owned())),
                AddMember::new(MemberSelector::DropboxId("dbid:x".to_owned()))
                    .with_access_level(AccessLevel::Editor),
            ]);
        assert_eq!(
            serde_json::to_value(arg).unwrap(),
            json!({
                "shared_folder_id": "84528192421",
                "members": [
                    {"member": {".tag": "email", "email": "justin@example.com"}},
                    {
                        "member": {".tag": "dropbox_id", "dropbox_id": "dbid:x"},
                        "access_level": {".tag": "editor"}
                    }
                ]
            }));
    }

    #[test]
    fn share_job_status() {
        let status: ShareFolderJobStatus = serde_json::from_value(json!({
            ".tag": "failed",
            "failed": {".tag": "bad_path", "bad_path": {".tag": "is_file"}}
        })).unwrap();
        assert_eq!(status, ShareFolderJobStatus::Failed(ShareFolderError::BadPath(SharePathError::IsFile)));
    }
}
