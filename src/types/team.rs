// Copyright (c) 2019-2024 Dropbox, Inc.

//! Types of the `team` namespace: team info, members, groups, team folders and namespaces.

use serde::{Deserialize, Serialize};
use crate::codec::is_false;
use crate::types::common::{DropboxTimestamp, NamespaceId, SharedFolderId};
use crate::types::files::ContentSyncSetting;
use crate::types::team_common::{
    GroupSummary, MemberExternalId, TeamMemberId,
};
use crate::types::team_policies::TeamMemberPolicies;
use crate::types::users::Name;
use crate::types::users_common::AccountId;

fn default_limit() -> u32 {
    1000
}

fn is_default_limit(value: &u32) -> bool {
    *value == default_limit()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TeamGetInfoResult {
    /// The name of the team.
    pub name: String,
    /// The ID of the team.
    pub team_id: String,
    /// The number of licenses available to the team.
    pub num_licensed_users: u32,
    /// The number of accounts that have been invited or are already active members of the team.
    pub num_provisioned_users: u32,
    pub policies: TeamMemberPolicies,
    /// The number of licenses used on the team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_used_licenses: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct MembersListArg {
    /// Number of results to return per call.
    #[serde(default = "default_limit", skip_serializing_if = "is_default_limit")]
    pub limit: u32,
    /// Whether to return removed members.
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_removed: bool,
}

impl Default for MembersListArg {
    fn default() -> Self {
        MembersListArg { limit: default_limit(), include_removed: false }
    }
}

impl MembersListArg {
    pub fn with_limit(mut self, value: u32) -> Self {
        self.limit = value;
        self
    }

    pub fn with_include_removed(mut self, value: bool) -> Self {
        self.include_removed = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct SecondaryEmail {
    /// Secondary email address.
    pub email: String,
    /// Whether or not the secondary email address is verified to be owned by a user.
    pub is_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct RemovedStatus {
    /// True if the removed team member is recoverable.
    pub is_recoverable: bool,
    /// True if the team member's account was converted to individual account.
    pub is_disconnected: bool,
}

tagged_union! {
    /// The user's status as a member of a specific team.
    pub enum TeamMemberStatus: open {
        /// User has successfully joined the team.
        Active = "active",
        /// User has been invited to a team, but has not joined the team yet.
        Invited = "invited",
        /// User is no longer a member of the team, but the account can be un-suspended,
        /// re-establishing the user as a team member.
        Suspended = "suspended",
        /// User is no longer a member of the team. Removed users are only listed when
        /// include_removed is true in members/list.
        Removed{RemovedStatus} = "removed",
    }
}

tagged_union! {
    pub enum TeamMembershipType: open {
        /// User uses a license and has full access to team resources like the shared quota.
        Full = "full",
        /// User does not have access to the shared quota and team admins have restricted
        /// administrative control.
        Limited = "limited",
    }
}

/// Profile of a user as a member of a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TeamMemberProfile {
    /// ID of user as a member of a team.
    pub team_member_id: TeamMemberId,
    /// Email address of user.
    pub email: String,
    /// Is true if the user's email is verified to be owned by the user.
    pub email_verified: bool,
    /// The user's status as a member of a specific team.
    pub status: TeamMemberStatus,
    /// Representations for a person's name.
    pub name: Name,
    /// The user's membership type: full (normal team member) vs limited (does not use a license;
    /// no access to the team's shared quota).
    pub membership_type: TeamMembershipType,
    /// A user's account identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    /// External ID that a team can attach to the user. An application using the API may find it
    /// easier to use their own IDs instead of Dropbox IDs like account_id or team_member_id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<MemberExternalId>,
    /// Secondary emails of a user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_emails: Option<Vec<SecondaryEmail>>,
    /// The date and time the user was invited to the team (contains value only when the member's
    /// status matches `TeamMemberStatus::Invited`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invited_on: Option<DropboxTimestamp>,
    /// The date and time the user joined as a member of a specific team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_on: Option<DropboxTimestamp>,
    /// The date and time the user was suspended from the team (contains value only when the
    /// member's status matches `TeamMemberStatus::Suspended`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspended_on: Option<DropboxTimestamp>,
    /// Persistent ID that a team can attach to the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_id: Option<String>,
    /// Whether the user is a directory restricted user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_directory_restricted: Option<bool>,
    /// URL for the photo representing the user, if one is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
}

/// A role which can be attached to a team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TeamMemberRole {
    /// A string containing encoded role ID. For roles defined by Dropbox, this is the same across
    /// all teams.
    pub role_id: String,
    /// The role display name.
    pub name: String,
    /// Role description. Describes which permissions come with this role.
    pub description: String,
}

/// Information about a team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TeamMemberInfoV2 {
    /// Profile of a user as a member of a team.
    pub profile: TeamMemberProfile,
    /// The user's roles in the team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<TeamMemberRole>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct MembersListV2Result {
    /// List of team members.
    pub members: Vec<TeamMemberInfoV2>,
    /// Pass the cursor into `members/list/continue_v2` to obtain the additional members.
    pub cursor: String,
    /// Is true if there are additional team members that have not been returned yet. An
    /// additional call to `members/list/continue_v2` can retrieve them.
    pub has_more: bool,
}

tagged_union! {
    pub enum MembersListError: open {
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct MembersListContinueArg {
    /// Indicates from what point to get the next set of members.
    pub cursor: String,
}

impl MembersListContinueArg {
    pub fn new(cursor: String) -> Self {
        MembersListContinueArg { cursor }
    }
}

tagged_union! {
    pub enum MembersListContinueError: open {
        /// The cursor is invalid.
        InvalidCursor = "invalid_cursor",
    }
}

tagged_union! {
    /// Argument for selecting a single user, either by team_member_id, external_id or email.
    pub enum UserSelectorArg: open {
        TeamMemberId(TeamMemberId) = "team_member_id",
        ExternalId(MemberExternalId) = "external_id",
        Email(String) = "email",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct MembersGetInfoV2Arg {
    /// List of team members.
    pub members: Vec<UserSelectorArg>,
}

impl MembersGetInfoV2Arg {
    pub fn new(members: Vec<UserSelectorArg>) -> Self {
        MembersGetInfoV2Arg { members }
    }
}

tagged_union! {
    /// Describes a result obtained for a single user whose id was specified in the parameter of
    /// `members/get_info_v2`.
    pub enum TeamMemberInfoV2OrError: open {
        /// An ID that was provided as a parameter to `members/get_info_v2`, and did not match a
        /// corresponding user. This might be a team_member_id, an email, or an external ID,
        /// depending on how the method was called.
        IdNotFound(String) = "id_not_found",
        /// Info about a team member.
        MemberInfo{TeamMemberInfoV2} = "member_info",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct MembersGetInfoV2Result {
    /// List of team members info.
    pub members_info: Vec<TeamMemberInfoV2OrError>,
}

tagged_union! {
    pub enum MembersGetInfoError: open {
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct GroupsListArg {
    /// Number of results to return per call.
    #[serde(default = "default_limit", skip_serializing_if = "is_default_limit")]
    pub limit: u32,
}

impl Default for GroupsListArg {
    fn default() -> Self {
        GroupsListArg { limit: default_limit() }
    }
}

impl GroupsListArg {
    pub fn with_limit(mut self, value: u32) -> Self {
        self.limit = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct GroupsListResult {
    pub groups: Vec<GroupSummary>,
    /// Pass the cursor into `groups/list/continue` to obtain the additional groups.
    pub cursor: String,
    /// Is true if there are additional groups that have not been returned yet. An additional call
    /// to `groups/list/continue` can retrieve them.
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct GroupsListContinueArg {
    /// Indicates from what point to get the next set of groups.
    pub cursor: String,
}

impl GroupsListContinueArg {
    pub fn new(cursor: String) -> Self {
        GroupsListContinueArg { cursor }
    }
}

tagged_union! {
    pub enum GroupsListContinueError: open {
        /// The cursor is invalid.
        InvalidCursor = "invalid_cursor",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TeamFolderListArg {
    /// The maximum number of results to return per request.
    #[serde(default = "default_limit", skip_serializing_if = "is_default_limit")]
    pub limit: u32,
}

impl Default for TeamFolderListArg {
    fn default() -> Self {
        TeamFolderListArg { limit: default_limit() }
    }
}

impl TeamFolderListArg {
    pub fn with_limit(mut self, value: u32) -> Self {
        self.limit = value;
        self
    }
}

tagged_union! {
    pub enum TeamFolderStatus: open {
        /// The team folder and sub-folders are available to all members.
        Active = "active",
        /// The team folder is not accessible outside of the team folder manager.
        Archived = "archived",
        /// The team folder is not accessible outside of the team folder manager.
        ArchiveInProgress = "archive_in_progress",
    }
}

/// Properties of a team folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TeamFolderMetadata {
    /// The ID of the team folder.
    pub team_folder_id: SharedFolderId,
    /// The name of the team folder.
    pub name: String,
    /// The status of the team folder.
    pub status: TeamFolderStatus,
    /// True if this team folder is a shared team root.
    pub is_team_shared_dropbox: bool,
    /// The sync setting applied to this team folder.
    pub sync_setting: crate::types::files::SyncSetting,
    /// Sync settings applied to contents of this team folder.
    pub content_sync_settings: Vec<ContentSyncSetting>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TeamFolderListResult {
    /// List of all team folders in the authenticated team.
    pub team_folders: Vec<TeamFolderMetadata>,
    /// Pass the cursor into `team_folder/list/continue` to obtain additional team folders.
    pub cursor: String,
    /// Is true if there are additional team folders that have not been returned yet.
    pub has_more: bool,
}

tagged_union! {
    pub enum TeamFolderAccessError: open {
        /// The team folder ID is invalid.
        InvalidTeamFolderId = "invalid_team_folder_id",
        /// The authenticated app does not have permission to manage that team folder.
        NoAccess = "no_access",
    }
}

/// Error of `team_folder/list`. Unlike most endpoint errors this is a struct, not a union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TeamFolderListError {
    pub access_error: TeamFolderAccessError,
}

impl std::fmt::Display for TeamFolderListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "team folder access error: {}", self.access_error)
    }
}

impl std::error::Error for TeamFolderListError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TeamNamespacesListArg {
    /// Specifying a value here has no effect.
    #[serde(default = "default_limit", skip_serializing_if = "is_default_limit")]
    pub limit: u32,
}

impl Default for TeamNamespacesListArg {
    fn default() -> Self {
        TeamNamespacesListArg { limit: default_limit() }
    }
}

tagged_union! {
    pub enum NamespaceType: open {
        AppFolder = "app_folder",
        SharedFolder = "shared_folder",
        TeamFolder = "team_folder",
        TeamMemberFolder = "team_member_folder",
    }
}

/// Properties of a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct NamespaceMetadata {
    /// The name of this namespace.
    pub name: String,
    /// The ID of this namespace.
    pub namespace_id: NamespaceId,
    /// The type of this namespace.
    pub namespace_type: NamespaceType,
    /// If this is a team member or app folder, the ID of the owning team member. Otherwise, this
    /// field is not present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_member_id: Option<TeamMemberId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TeamNamespacesListResult {
    /// List of all namespaces the team can access.
    pub namespaces: Vec<NamespaceMetadata>,
    /// Pass the cursor into `namespaces/list/continue` to obtain additional namespaces. Note that
    /// duplicate namespaces may be returned.
    pub cursor: String,
    /// Is true if there are additional namespaces that have not been returned yet.
    pub has_more: bool,
}

tagged_union! {
    pub enum TeamNamespacesListError: open {
        /// Argument passed in is invalid.
        InvalidArg = "invalid_arg",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TokenGetAuthenticatedAdminResult {
    /// The admin who authorized the token.
    pub admin_profile: TeamMemberProfile,
}

tagged_union! {
    /// Error returned by `token/get_authenticated_admin`.
    pub enum TokenGetAuthenticatedAdminError: open {
        /// The current token is not associated with a team admin, because mappings were not
        /// recorded when the token was created. Consider re-authorizing a new access token to
        /// record its authenticating admin.
        MappingNotFound = "mapping_not_found",
        /// Either the team admin that authorized this token is no longer an active member of the
        /// team or no longer a team admin.
        AdminNotActive = "admin_not_active",
    }
}

api_error!(
    MembersListError,
    MembersListContinueError,
    MembersGetInfoError,
    GroupsListContinueError,
    TeamFolderAccessError,
    TeamNamespacesListError,
    TokenGetAuthenticatedAdminError,
);

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn limit_defaults_to_1000() {
        assert_eq!(serde_json::to_value(MembersListArg::default()).unwrap(), json!({}));
        assert_eq!(
            serde_json::to_value(MembersListArg::default().with_limit(5).with_include_removed(true))
                .unwrap(),
            json!({"limit": 5, "include_removed": true}));
        let arg: GroupsListArg = serde_json::from_value(json!({})).unwrap();
        assert_eq!(arg.limit, 1000);
    }

    #[test]
    fn member_status_removed_is_inline() {
        let status: TeamMemberStatus = serde_json::from_value(json!({
            ".tag": "removed",
            "is_recoverable": true,
            "is_disconnected": false
        })).unwrap();
        assert_eq!(
            status,
            TeamMemberStatus::Removed(RemovedStatus { is_recoverable: true, is_disconnected: false }));
    }

    #[test]
    fn member_selector() {
        assert_eq!(
            serde_json::to_value(MembersGetInfoV2Arg::new(vec![
                UserSelectorArg::Email("a@example.com".to_owned()),
            ])).unwrap(),
            json!({"members": [{".tag": "email", "email": "a@example.com"}]}));
    }

    #[test]
    fn error_without_members_only_has_other() {
        let e: MembersListError = serde_json::from_value(json!({".tag": "other"})).unwrap();
        assert_eq!(e, MembersListError::Other);
        assert!(serde_json::to_value(&e).is_err());
    }

    #[test]
    fn team_folder_list_error_is_a_struct() {
        let e: TeamFolderListError = serde_json::from_value(json!({
            "access_error": {".tag": "no_access"}
        })).unwrap();
        assert_eq!(e.access_error, TeamFolderAccessError::NoAccess);
        assert_eq!(e.to_string(), "team folder access error: no_access");
    }
}
