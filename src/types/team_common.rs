// Copyright (c) 2019-2024 Dropbox, Inc.

use serde::{Deserialize, Serialize};

pub type GroupExternalId = String;
pub type GroupId = String;
pub type MemberExternalId = String;
pub type TeamMemberId = String;

tagged_union! {
    /// The group type determines how a group is managed.
    pub enum GroupManagementType: open {
        /// A group which is managed by selected users.
        UserManaged = "user_managed",
        /// A group which is managed by team admins only.
        CompanyManaged = "company_managed",
        /// A group which is managed automatically by Dropbox.
        SystemManaged = "system_managed",
    }
}

tagged_union! {
    /// The group type determines how a group is created and managed.
    pub enum GroupType: open {
        /// A group to which team members are automatically added. Applicable to team folders
        /// only.
        Team = "team",
        /// A group is created and managed by a user.
        UserManaged = "user_managed",
    }
}

tagged_union! {
    /// The type of the space limit imposed on a team member.
    pub enum MemberSpaceLimitType: open {
        /// The team member does not have imposed space limit.
        Off = "off",
        /// The team member has soft imposed space limit - the limit is used for display and for
        /// notifications.
        AlertOnly = "alert_only",
        /// The team member has hard imposed space limit - Dropbox file sync will stop after the
        /// limit is reached.
        StopSync = "stop_sync",
    }
}

/// Information about a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct GroupSummary {
    pub group_name: String,
    pub group_id: GroupId,
    /// Who is allowed to manage the group.
    pub group_management_type: GroupManagementType,
    /// External ID of group. This is an arbitrary ID that an admin can attach to a group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_external_id: Option<GroupExternalId>,
    /// The number of members in the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
}

impl GroupSummary {
    pub fn new(
        group_name: String,
        group_id: GroupId,
        group_management_type: GroupManagementType,
    ) -> Self {
        GroupSummary {
            group_name,
            group_id,
            group_management_type,
            group_external_id: None,
            member_count: None,
        }
    }

    pub fn with_group_external_id(mut self, value: GroupExternalId) -> Self {
        self.group_external_id = Some(value);
        self
    }

    pub fn with_member_count(mut self, value: u32) -> Self {
        self.member_count = Some(value);
        self
    }
}
