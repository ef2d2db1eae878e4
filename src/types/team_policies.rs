// Copyright (c) 2019-2024 Dropbox, Inc.

use serde::{Deserialize, Serialize};

/// Policies governing team members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TeamMemberPolicies {
    /// Policies governing sharing.
    pub sharing: TeamSharingPolicies,
    /// This describes the Enterprise Mobility Management (EMM) state for this team.
    pub emm_state: EmmState,
    /// The admin policy around the Dropbox Office Add-In for this team.
    pub office_addin: OfficeAddInPolicy,
    /// The team policy on if teammembers are allowed to suggest users for admins to invite to
    /// the team.
    pub suggest_members_policy: SuggestMembersPolicy,
}

impl TeamMemberPolicies {
    pub fn new(
        sharing: TeamSharingPolicies,
        emm_state: EmmState,
        office_addin: OfficeAddInPolicy,
        suggest_members_policy: SuggestMembersPolicy,
    ) -> Self {
        TeamMemberPolicies { sharing, emm_state, office_addin, suggest_members_policy }
    }
}

/// Policies governing sharing within and outside of the team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TeamSharingPolicies {
    /// Who can join folders shared by team members.
    pub shared_folder_member_policy: SharedFolderMemberPolicy,
    /// Which shared folders team members can join.
    pub shared_folder_join_policy: SharedFolderJoinPolicy,
    /// Who can view shared links owned by team members.
    pub shared_link_create_policy: SharedLinkCreatePolicy,
}

impl TeamSharingPolicies {
    pub fn new(
        shared_folder_member_policy: SharedFolderMemberPolicy,
        shared_folder_join_policy: SharedFolderJoinPolicy,
        shared_link_create_policy: SharedLinkCreatePolicy,
    ) -> Self {
        TeamSharingPolicies {
            shared_folder_member_policy,
            shared_folder_join_policy,
            shared_link_create_policy,
        }
    }
}

tagged_union! {
    /// Policy governing who can be a member of a folder shared by a team member.
    pub enum SharedFolderMemberPolicy: open {
        /// Only a teammate can be a member of a folder shared by a team member.
        Team = "team",
        /// Anyone can be a member of a folder shared by a team member.
        Anyone = "anyone",
    }
}

tagged_union! {
    /// Policy governing which shared folders a team member can join.
    pub enum SharedFolderJoinPolicy: open {
        /// Team members can only join folders shared by teammates.
        FromTeamOnly = "from_team_only",
        /// Team members can join any shared folder, including those shared by users outside the
        /// team.
        FromAnyone = "from_anyone",
    }
}

tagged_union! {
    /// Policy governing the visibility of shared links. This policy can apply to newly created
    /// shared links, or all shared links.
    pub enum SharedLinkCreatePolicy: open {
        /// By default, anyone can access newly created shared links. No login will be required
        /// to access the shared links unless overridden.
        DefaultPublic = "default_public",
        /// By default, only members of the same team can access newly created shared links.
        DefaultTeamOnly = "default_team_only",
        /// Only members of the same team can access all shared links.
        TeamOnly = "team_only",
        /// By default, only people invited can access newly created links.
        DefaultNoOne = "default_no_one",
    }
}

tagged_union! {
    pub enum EmmState: open {
        /// Emm token is disabled.
        Disabled = "disabled",
        /// Emm token is optional.
        Optional = "optional",
        /// Emm token is required.
        Required = "required",
    }
}

tagged_union! {
    pub enum OfficeAddInPolicy: open {
        /// Office Add-In is disabled.
        Disabled = "disabled",
        /// Office Add-In is enabled.
        Enabled = "enabled",
    }
}

tagged_union! {
    pub enum SuggestMembersPolicy: open {
        /// Suggest members is disabled.
        Disabled = "disabled",
        /// Suggest members is enabled.
        Enabled = "enabled",
    }
}
