// Copyright (c) 2019-2024 Dropbox, Inc.

//! Routes of the `team` namespace. These need a team token; set a [`TeamSelect`] on the client to
//! act as a member or admin of the team.
//!
//! [`TeamSelect`]: crate::client_trait_common::TeamSelect

macro_rules! team_routes {
    ($gen:ident) => {
        $gen! {
            /// Retrieves information about a team.
            rpc get_info() -> TeamGetInfoResult, crate::NoError
                = TeamAuthClient Api "team/get_info";

            /// Lists members of a team.
            rpc members_list_v2(&MembersListArg) -> MembersListV2Result, MembersListError
                = TeamAuthClient Api "team/members/list_v2";

            /// Once a cursor has been retrieved from `members_list_v2`, use this to paginate
            /// through all team members.
            rpc members_list_continue_v2(&MembersListContinueArg) -> MembersListV2Result, MembersListContinueError
                = TeamAuthClient Api "team/members/list/continue_v2";

            /// Returns information about multiple team members. This endpoint will return
            /// `TeamMemberInfoV2OrError::IdNotFound`, for IDs (or emails) that cannot be matched to
            /// a valid team member.
            rpc members_get_info_v2(&MembersGetInfoV2Arg) -> MembersGetInfoV2Result, MembersGetInfoError
                = TeamAuthClient Api "team/members/get_info_v2";

            /// Lists groups on a team.
            rpc groups_list(&GroupsListArg) -> GroupsListResult, crate::NoError
                = TeamAuthClient Api "team/groups/list";

            /// Once a cursor has been retrieved from `groups_list`, use this to paginate through
            /// all groups.
            rpc groups_list_continue(&GroupsListContinueArg) -> GroupsListResult, GroupsListContinueError
                = TeamAuthClient Api "team/groups/list/continue";

            /// Lists all team folders.
            rpc team_folder_list(&TeamFolderListArg) -> TeamFolderListResult, TeamFolderListError
                = TeamAuthClient Api "team/team_folder/list";

            /// Returns a list of all team-accessible namespaces. This list includes team folders,
            /// shared folders containing team members, team members' home namespaces, and team
            /// members' app folders.
            rpc namespaces_list(&TeamNamespacesListArg) -> TeamNamespacesListResult, TeamNamespacesListError
                = TeamAuthClient Api "team/namespaces/list";

            /// Returns the member profile of the admin who generated the team access token used to
            /// make the call.
            rpc token_get_authenticated_admin() -> TokenGetAuthenticatedAdminResult, TokenGetAuthenticatedAdminError
                = TeamAuthClient Api "team/token/get_authenticated_admin";
        }
    };
}

team_routes!(route_index);
