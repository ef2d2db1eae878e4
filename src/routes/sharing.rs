// Copyright (c) 2019-2024 Dropbox, Inc.

//! Routes of the `sharing` namespace: shared links and shared folders.

macro_rules! sharing_routes {
    ($gen:ident) => {
        $gen! {
            /// Create a shared link with custom settings. If no settings are given then the default
            /// visibility is `RequestedVisibility::Public`.
            rpc create_shared_link_with_settings(&CreateSharedLinkWithSettingsArg) -> SharedLinkMetadata, CreateSharedLinkWithSettingsError
                = UserAuthClient Api "sharing/create_shared_link_with_settings";

            /// List shared links of this user. If no path is given, returns a list of all shared
            /// links for the current user.
            rpc list_shared_links(&ListSharedLinksArg) -> ListSharedLinksResult, ListSharedLinksError
                = UserAuthClient Api "sharing/list_shared_links";

            /// Revoke a shared link. Note that even after revoking a shared link to a file, the
            /// file may be accessible if there are shared links leading to any of the file parent
            /// folders.
            rpc revoke_shared_link(&RevokeSharedLinkArg) -> (), RevokeSharedLinkError
                = UserAuthClient Api "sharing/revoke_shared_link";

            /// Get the shared link's metadata.
            rpc get_shared_link_metadata(&GetSharedLinkMetadataArg) -> SharedLinkMetadata, SharedLinkError
                = UserAuthClient Api "sharing/get_shared_link_metadata";

            /// Download the shared link's file from a user's Dropbox.
            download get_shared_link_file(&GetSharedLinkMetadataArg, range) -> SharedLinkMetadata, GetSharedLinkFileError
                = UserAuthClient Content "sharing/get_shared_link_file";

            /// Share a folder with collaborators. Most sharing will be completed synchronously.
            /// Large folders will be completed asynchronously. To make testing the async case
            /// simpler, set `ShareFolderArg::force_async`. If a `ShareFolderLaunch::AsyncJobId` is
            /// returned, you'll need to call `check_share_job_status` until the action completes
            /// to get the metadata for the folder.
            rpc share_folder(&ShareFolderArg) -> ShareFolderLaunch, ShareFolderError
                = UserAuthClient Api "sharing/share_folder";

            /// Returns the current status of an asynchronous job for sharing a folder.
            rpc check_share_job_status(&crate::types::dbx_async::PollArg) -> ShareFolderJobStatus, crate::types::dbx_async::PollError
                = UserAuthClient Api "sharing/check_share_job_status";

            /// Return the list of all shared folders the current user has access to.
            rpc list_folders(&ListFoldersArg) -> ListFoldersResult, crate::NoError
                = UserAuthClient Api "sharing/list_folders";

            /// Once a cursor has been retrieved from `list_folders`, use this to paginate through
            /// all shared folders.
            rpc list_folders_continue(&ListFoldersContinueArg) -> ListFoldersResult, ListFoldersContinueError
                = UserAuthClient Api "sharing/list_folders/continue";

            /// Returns shared folder metadata by its folder ID.
            rpc get_folder_metadata(&GetMetadataArgs) -> SharedFolderMetadata, SharedFolderAccessError
                = UserAuthClient Api "sharing/get_folder_metadata";

            /// Allows a shared folder owner to unshare the folder. Unshare will not work in
            /// following cases: the shared folder contains shared folders or the shared folder is
            /// inside another shared folder.
            rpc unshare_folder(&UnshareFolderArg) -> crate::types::dbx_async::LaunchEmptyResult, UnshareFolderError
                = UserAuthClient Api "sharing/unshare_folder";

            /// Allows an owner or editor (if the ACL update policy allows) of a shared folder to add
            /// another member.
            rpc add_folder_member(&AddFolderMemberArg) -> (), AddFolderMemberError
                = UserAuthClient Api "sharing/add_folder_member";

            /// Allows an owner or editor (if the ACL update policy allows) of a shared folder to
            /// remove another member.
            rpc remove_folder_member(&RemoveFolderMemberArg) -> crate::types::dbx_async::LaunchResultBase, RemoveFolderMemberError
                = UserAuthClient Api "sharing/remove_folder_member";
        }
    };
}

sharing_routes!(route_index);
