// Copyright (c) 2019-2024 Dropbox, Inc.

//! Routes of the `files` namespace.
//!
//! `download` and `get_thumbnail` return their content as a streaming body next to the decoded
//! metadata. `upload` and the `upload_session` routes send raw bytes as the request body; an upload
//! session is started, appended to any number of times, and finished, with the caller tracking the
//! offset.

macro_rules! files_routes {
    ($gen:ident) => {
        $gen! {
            /// Returns the metadata for a file or folder. Metadata for the root folder is
            /// unsupported.
            rpc get_metadata(&GetMetadataArg) -> Metadata, GetMetadataError
                = UserAuthClient Api "files/get_metadata";

            /// Starts returning the contents of a folder. If the result's `has_more` field is
            /// `true`, call `list_folder_continue` with the returned cursor to retrieve more
            /// entries.
            rpc list_folder(&ListFolderArg) -> ListFolderResult, ListFolderError
                = UserAuthClient Api "files/list_folder";

            /// Once a cursor has been retrieved from `list_folder`, use this to paginate through
            /// all files and retrieve updates to the folder.
            rpc list_folder_continue(&ListFolderContinueArg) -> ListFolderResult, ListFolderContinueError
                = UserAuthClient Api "files/list_folder/continue";

            /// A way to quickly get a cursor for the folder's state. Unlike `list_folder`, this
            /// doesn't return any entries. This endpoint is for apps which only need to know about
            /// new files and modifications and don't need to know about files that already exist
            /// in Dropbox.
            rpc list_folder_get_latest_cursor(&ListFolderArg) -> ListFolderGetLatestCursorResult, ListFolderError
                = UserAuthClient Api "files/list_folder/get_latest_cursor";

            /// A longpoll endpoint to wait for changes on an account. In conjunction with
            /// `list_folder_continue`, this call gives you a low-latency way to monitor an account
            /// for file changes. The connection will block until there are changes available or a
            /// timeout occurs. This endpoint is useful mostly for client-side apps.
            rpc list_folder_longpoll(&ListFolderLongpollArg) -> ListFolderLongpollResult, ListFolderLongpollError
                = NoauthClient Notify "files/list_folder/longpoll";

            /// Download a file from a user's Dropbox.
            download download(&DownloadArg, range) -> FileMetadata, DownloadError
                = UserAuthClient Content "files/download";

            /// Get a thumbnail for an image. This method currently supports files with the
            /// following file extensions: jpg, jpeg, png, tiff, tif, gif, webp, ppm and bmp.
            /// Photos that are larger than 20MB in size won't be converted to a thumbnail.
            download get_thumbnail(&ThumbnailArg, range) -> FileMetadata, ThumbnailError
                = UserAuthClient Content "files/get_thumbnail";

            /// Create a new file with the contents provided in the request. Do not use this to
            /// upload a file larger than 150 MB. Instead, create an upload session with
            /// `upload_session_start`.
            upload upload(&UploadArg, body) -> FileMetadata, UploadError
                = UserAuthClient Content "files/upload";

            /// Upload sessions allow you to upload a single file in one or more requests, for
            /// example where the size of the file is greater than 150 MB. This call starts a new
            /// upload session with the given data. You can then use `upload_session_append_v2` to
            /// add more data and `upload_session_finish` to save all the data to a file in
            /// Dropbox.
            upload upload_session_start(&UploadSessionStartArg, body) -> UploadSessionStartResult, UploadSessionStartError
                = UserAuthClient Content "files/upload_session/start";

            /// Append more data to an upload session. When the parameter close is set, this call
            /// will close the session. A single request should not upload more than 150 MB.
            upload upload_session_append_v2(&UploadSessionAppendArg, body) -> (), UploadSessionAppendError
                = UserAuthClient Content "files/upload_session/append_v2";

            /// Finish an upload session and save the uploaded data to the given file path. A
            /// single request should not upload more than 150 MB.
            upload upload_session_finish(&UploadSessionFinishArg, body) -> FileMetadata, UploadSessionFinishError
                = UserAuthClient Content "files/upload_session/finish";

            /// This route helps you commit many files at once into a user's Dropbox. Use
            /// `upload_session_start` and `upload_session_append_v2` to upload file contents, and
            /// close each session before calling this.
            rpc upload_session_finish_batch_v2(&UploadSessionFinishBatchArg) -> UploadSessionFinishBatchResult, crate::NoError
                = UserAuthClient Api "files/upload_session/finish_batch_v2";

            /// Delete the file or folder at a given path. If the path is a folder, all its
            /// contents will be deleted too.
            rpc delete_v2(&DeleteArg) -> DeleteResult, DeleteError
                = UserAuthClient Api "files/delete_v2";

            /// Delete multiple files/folders at once. This route is asynchronous, which returns a
            /// job ID immediately and runs the delete batch asynchronously. Use
            /// `delete_batch_check` to check the job status.
            rpc delete_batch(&DeleteBatchArg) -> DeleteBatchLaunch, crate::NoError
                = UserAuthClient Api "files/delete_batch";

            /// Returns the status of an asynchronous job for `delete_batch`. If success, it
            /// returns list of result for each entry.
            rpc delete_batch_check(&crate::types::dbx_async::PollArg) -> DeleteBatchJobStatus, crate::types::dbx_async::PollError
                = UserAuthClient Api "files/delete_batch/check";

            /// Permanently delete the file or folder at a given path. Note: This endpoint is only
            /// available for Dropbox Business apps.
            rpc permanently_delete(&DeleteArg) -> (), DeleteError
                = UserAuthClient Api "files/permanently_delete";

            /// Create a folder at a given path.
            rpc create_folder_v2(&CreateFolderArg) -> CreateFolderResult, CreateFolderError
                = UserAuthClient Api "files/create_folder_v2";

            /// Copy a file or folder to a different location in the user's Dropbox. If the source
            /// path is a folder all its contents will be copied.
            rpc copy_v2(&RelocationArg) -> RelocationResult, RelocationError
                = UserAuthClient Api "files/copy_v2";

            /// Move a file or folder to a different location in the user's Dropbox. If the source
            /// path is a folder all its contents will be moved.
            rpc move_v2(&RelocationArg) -> RelocationResult, RelocationError
                = UserAuthClient Api "files/move_v2";

            /// Searches for files and folders.
            rpc search_v2(&SearchV2Arg) -> SearchV2Result, SearchError
                = UserAuthClient Api "files/search_v2";

            /// Fetches the next page of search results returned from `search_v2`.
            rpc search_continue_v2(&SearchV2ContinueArg) -> SearchV2Result, SearchError
                = UserAuthClient Api "files/search/continue_v2";

            /// Returns revisions for files based on a file path or a file id.
            rpc list_revisions(&ListRevisionsArg) -> ListRevisionsResult, ListRevisionsError
                = UserAuthClient Api "files/list_revisions";

            /// Restore a specific revision of a file to the given path.
            rpc restore(&RestoreArg) -> FileMetadata, RestoreError
                = UserAuthClient Api "files/restore";

            /// Get a temporary link to stream content of a file. This link will expire in four
            /// hours and afterwards you will get 410 Gone.
            rpc get_temporary_link(&GetTemporaryLinkArg) -> GetTemporaryLinkResult, GetTemporaryLinkError
                = UserAuthClient Api "files/get_temporary_link";
        }
    };
}

files_routes!(route_index);
