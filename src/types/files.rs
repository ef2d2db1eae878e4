// Copyright (c) 2019-2024 Dropbox, Inc.

//! Types of the `files` namespace: metadata, listing, transfer, upload sessions and file
//! operations.

use serde::{Deserialize, Serialize};
use crate::codec::{default_true, is_default, is_false, is_true};
use crate::types::common::{DropboxTimestamp, SessionId, SharedFolderId};
use crate::types::dbx_async::AsyncJobId;
use crate::types::file_properties::{
    InvalidPropertyGroupError, PropertyGroup, TemplateError, TemplateFilterBase,
};
use crate::types::users_common::AccountId;

pub type FileId = String;
pub type ListFolderCursor = String;
pub type Path = String;
pub type ReadPath = String;
pub type Rev = String;
pub type SearchV2Cursor = String;
pub type Sha256HexHash = String;
pub type WritePath = String;

tagged_union! {
    /// Metadata for a file, folder or deleted entry.
    pub enum Metadata: open {
        File{FileMetadata} = "file",
        Folder{FolderMetadata} = "folder",
        Deleted{DeletedMetadata} = "deleted",
    }
}

impl Metadata {
    /// The last component of the path, including extension. `None` for entry kinds these
    /// bindings do not know.
    pub fn name(&self) -> Option<&str> {
        match self {
            Metadata::File(m) => Some(&m.name),
            Metadata::Folder(m) => Some(&m.name),
            Metadata::Deleted(m) => Some(&m.name),
            Metadata::Other => None,
        }
    }

    /// The cased path to be used for display purposes only, if known.
    pub fn path_display(&self) -> Option<&str> {
        match self {
            Metadata::File(m) => m.path_display.as_deref(),
            Metadata::Folder(m) => m.path_display.as_deref(),
            Metadata::Deleted(m) => m.path_display.as_deref(),
            Metadata::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct FileMetadata {
    /// The last component of the path (including extension). This never contains a slash.
    pub name: String,
    /// A unique identifier for the file.
    pub id: FileId,
    /// For files, this is the modification time set by the desktop client when the file was added
    /// to Dropbox. Since this time is not verified, it should be used for display purposes only.
    pub client_modified: DropboxTimestamp,
    /// The last time the file was modified on Dropbox.
    pub server_modified: DropboxTimestamp,
    /// A unique identifier for the current revision of a file.
    pub rev: Rev,
    /// The file size in bytes.
    pub size: u64,
    /// The lowercased full path in the user's Dropbox. This always starts with a slash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    /// The cased path to be used for display purposes only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_shared_folder_id: Option<SharedFolderId>,
    /// The preview URL of the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    /// Set if this file is contained in a shared folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_info: Option<FileSharingInfo>,
    /// If true, file can be downloaded directly; else the file must be exported.
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub is_downloadable: bool,
    /// Additional information if the file has custom properties with the property template
    /// specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_groups: Option<Vec<PropertyGroup>>,
    /// This flag will only be present if include_has_explicit_shared_members is true in
    /// `list_folder` or `get_metadata`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_explicit_shared_members: Option<bool>,
    /// A hash of the file content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<Sha256HexHash>,
}

impl FileMetadata {
    pub fn new(
        name: String,
        id: FileId,
        client_modified: DropboxTimestamp,
        server_modified: DropboxTimestamp,
        rev: Rev,
        size: u64,
    ) -> Self {
        FileMetadata {
            name,
            id,
            client_modified,
            server_modified,
            rev,
            size,
            path_lower: None,
            path_display: None,
            parent_shared_folder_id: None,
            preview_url: None,
            sharing_info: None,
            is_downloadable: true,
            property_groups: None,
            has_explicit_shared_members: None,
            content_hash: None,
        }
    }

    pub fn with_path_lower(mut self, value: String) -> Self {
        self.path_lower = Some(value);
        self
    }

    pub fn with_path_display(mut self, value: String) -> Self {
        self.path_display = Some(value);
        self
    }

    pub fn with_sharing_info(mut self, value: FileSharingInfo) -> Self {
        self.sharing_info = Some(value);
        self
    }

    pub fn with_is_downloadable(mut self, value: bool) -> Self {
        self.is_downloadable = value;
        self
    }

    pub fn with_content_hash(mut self, value: Sha256HexHash) -> Self {
        self.content_hash = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct FolderMetadata {
    pub name: String,
    /// A unique identifier for the folder.
    pub id: FileId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_shared_folder_id: Option<SharedFolderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    /// If this folder is a shared folder mount point, the ID of the shared folder mounted at this
    /// location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_folder_id: Option<SharedFolderId>,
    /// Set if the folder is contained in a shared folder or is a shared folder mount point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_info: Option<FolderSharingInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_groups: Option<Vec<PropertyGroup>>,
}

impl FolderMetadata {
    pub fn new(name: String, id: FileId) -> Self {
        FolderMetadata {
            name,
            id,
            path_lower: None,
            path_display: None,
            parent_shared_folder_id: None,
            preview_url: None,
            shared_folder_id: None,
            sharing_info: None,
            property_groups: None,
        }
    }

    pub fn with_path_lower(mut self, value: String) -> Self {
        self.path_lower = Some(value);
        self
    }

    pub fn with_path_display(mut self, value: String) -> Self {
        self.path_display = Some(value);
        self
    }

    pub fn with_shared_folder_id(mut self, value: SharedFolderId) -> Self {
        self.shared_folder_id = Some(value);
        self
    }
}

/// Indicates that there used to be a file or folder at this path, but it no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct DeletedMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_shared_folder_id: Option<SharedFolderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

impl DeletedMetadata {
    pub fn new(name: String) -> Self {
        DeletedMetadata {
            name,
            path_lower: None,
            path_display: None,
            parent_shared_folder_id: None,
            preview_url: None,
        }
    }

    pub fn with_path_display(mut self, value: String) -> Self {
        self.path_display = Some(value);
        self
    }
}

/// Sharing info for a file which is contained by a shared folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct FileSharingInfo {
    /// True if the file or folder is inside a read-only shared folder.
    pub read_only: bool,
    /// ID of shared folder that holds this file.
    pub parent_shared_folder_id: SharedFolderId,
    /// The last user who modified the file. This field will be null if the user's account has
    /// been deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<AccountId>,
}

impl FileSharingInfo {
    pub fn new(read_only: bool, parent_shared_folder_id: SharedFolderId) -> Self {
        FileSharingInfo { read_only, parent_shared_folder_id, modified_by: None }
    }
}

/// Sharing info for a folder which is contained in a shared folder or is a shared folder mount
/// point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct FolderSharingInfo {
    pub read_only: bool,
    /// Set if the folder is contained by a shared folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_shared_folder_id: Option<SharedFolderId>,
    /// If this folder is a shared folder mount point, the ID of the shared folder mounted at this
    /// location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_folder_id: Option<SharedFolderId>,
    /// Specifies that the folder can only be traversed and the user can only see a limited subset
    /// of the contents of this folder because they don't have read access to this folder.
    #[serde(default, skip_serializing_if = "is_false")]
    pub traverse_only: bool,
    /// Specifies that the folder cannot be accessed by the user.
    #[serde(default, skip_serializing_if = "is_false")]
    pub no_access: bool,
}

impl FolderSharingInfo {
    pub fn new(read_only: bool) -> Self {
        FolderSharingInfo {
            read_only,
            parent_shared_folder_id: None,
            shared_folder_id: None,
            traverse_only: false,
            no_access: false,
        }
    }
}

tagged_union! {
    pub enum LookupError: open {
        /// The given path does not satisfy the required path format.
        MalformedPath(Option<String>) = "malformed_path",
        /// There is nothing at the given path.
        NotFound = "not_found",
        /// We were expecting a file, but the given path refers to something that isn't a file.
        NotFile = "not_file",
        /// We were expecting a folder, but the given path refers to something that isn't a folder.
        NotFolder = "not_folder",
        /// The file cannot be transferred because the content is restricted.
        RestrictedContent = "restricted_content",
        /// This operation is not supported for this content type.
        UnsupportedContentType = "unsupported_content_type",
        /// The given path is locked.
        Locked = "locked",
    }
}

tagged_union! {
    pub enum WriteError: open {
        /// The given path does not satisfy the required path format.
        MalformedPath(Option<String>) = "malformed_path",
        /// Couldn't write to the target path because there was something in the way.
        Conflict(WriteConflictError) = "conflict",
        /// The user doesn't have permissions to write to the target location.
        NoWritePermission = "no_write_permission",
        /// The user doesn't have enough available space (bytes) to write more data.
        InsufficientSpace = "insufficient_space",
        /// Dropbox will not save the file or folder because of its name.
        DisallowedName = "disallowed_name",
        /// This endpoint cannot move or delete team folders.
        TeamFolder = "team_folder",
        /// This file operation is not allowed at this path.
        OperationSuppressed = "operation_suppressed",
        /// There are too many write operations in user's Dropbox. Please retry this request.
        TooManyWriteOperations = "too_many_write_operations",
    }
}

tagged_union! {
    pub enum WriteConflictError: open {
        /// There's a file in the way.
        File = "file",
        /// There's a folder in the way.
        Folder = "folder",
        /// There's a file at an ancestor path, so we couldn't create the required parent folders.
        FileAncestor = "file_ancestor",
    }
}

/// Arguments for `get_metadata`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct GetMetadataArg {
    /// The path of a file or folder on Dropbox.
    pub path: ReadPath,
    /// If true, `FileMetadata::media_info` is set for photo and video.
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_media_info: bool,
    /// If true, `DeletedMetadata` will be returned for deleted file or folder, otherwise
    /// `LookupError::NotFound` will be returned.
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_deleted: bool,
    /// If true, the results will include a flag for each file indicating whether or not that file
    /// has any explicit members.
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_has_explicit_shared_members: bool,
    /// If set to a valid list of template IDs, `FileMetadata::property_groups` is set if there
    /// exists property data associated with the file and each of the listed templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_property_groups: Option<TemplateFilterBase>,
}

impl GetMetadataArg {
    pub fn new(path: ReadPath) -> Self {
        GetMetadataArg {
            path,
            include_media_info: false,
            include_deleted: false,
            include_has_explicit_shared_members: false,
            include_property_groups: None,
        }
    }

    pub fn with_include_media_info(mut self, value: bool) -> Self {
        self.include_media_info = value;
        self
    }

    pub fn with_include_deleted(mut self, value: bool) -> Self {
        self.include_deleted = value;
        self
    }

    pub fn with_include_has_explicit_shared_members(mut self, value: bool) -> Self {
        self.include_has_explicit_shared_members = value;
        self
    }

    pub fn with_include_property_groups(mut self, value: TemplateFilterBase) -> Self {
        self.include_property_groups = Some(value);
        self
    }
}

tagged_union! {
    pub enum GetMetadataError: open {
        Path(LookupError) = "path",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct SharedLink {
    /// Shared link url.
    pub url: String,
    /// Password for the shared link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl SharedLink {
    pub fn new(url: String) -> Self {
        SharedLink { url, password: None }
    }

    pub fn with_password(mut self, value: String) -> Self {
        self.password = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ListFolderArg {
    /// A unique identifier for the file.
    pub path: Path,
    /// If true, the list folder operation will be applied recursively to all subfolders and the
    /// response will contain contents of all subfolders.
    #[serde(default, skip_serializing_if = "is_false")]
    pub recursive: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_media_info: bool,
    /// If true, the results will include entries for files and folders that used to exist but were
    /// deleted.
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_deleted: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_has_explicit_shared_members: bool,
    /// If true, the results will include entries under mounted folders which includes app folder,
    /// shared folder and team folder.
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub include_mounted_folders: bool,
    /// The maximum number of results to return per request. Note: This is an approximate number
    /// and there can be slightly more entries returned in some cases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// A shared link to list the contents of. If the link is password-protected, the password
    /// must be provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_link: Option<SharedLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_property_groups: Option<TemplateFilterBase>,
    /// If true, include files that are not downloadable, i.e. Google Docs.
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub include_non_downloadable_files: bool,
}

impl ListFolderArg {
    pub fn new(path: Path) -> Self {
        ListFolderArg {
            path,
            recursive: false,
            include_media_info: false,
            include_deleted: false,
            include_has_explicit_shared_members: false,
            include_mounted_folders: true,
            limit: None,
            shared_link: None,
            include_property_groups: None,
            include_non_downloadable_files: true,
        }
    }

    pub fn with_recursive(mut self, value: bool) -> Self {
        self.recursive = value;
        self
    }

    pub fn with_include_deleted(mut self, value: bool) -> Self {
        self.include_deleted = value;
        self
    }

    pub fn with_include_mounted_folders(mut self, value: bool) -> Self {
        self.include_mounted_folders = value;
        self
    }

    pub fn with_limit(mut self, value: u32) -> Self {
        self.limit = Some(value);
        self
    }

    pub fn with_shared_link(mut self, value: SharedLink) -> Self {
        self.shared_link = Some(value);
        self
    }

    pub fn with_include_non_downloadable_files(mut self, value: bool) -> Self {
        self.include_non_downloadable_files = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ListFolderResult {
    /// The files and (direct) subfolders in the folder.
    pub entries: Vec<Metadata>,
    /// Pass the cursor into `list_folder/continue` to see what's changed in the folder since your
    /// previous query.
    pub cursor: ListFolderCursor,
    /// If true, then there are more entries available. Pass the cursor to `list_folder/continue`
    /// to retrieve the rest.
    pub has_more: bool,
}

tagged_union! {
    pub enum ListFolderError: open {
        Path(LookupError) = "path",
        TemplateError(TemplateError) = "template_error",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ListFolderContinueArg {
    /// The cursor returned by your last call to `list_folder` or `list_folder/continue`.
    pub cursor: ListFolderCursor,
}

impl ListFolderContinueArg {
    pub fn new(cursor: ListFolderCursor) -> Self {
        ListFolderContinueArg { cursor }
    }
}

tagged_union! {
    pub enum ListFolderContinueError: open {
        Path(LookupError) = "path",
        /// Indicates that the cursor has been invalidated. Call `list_folder` to obtain a new
        /// cursor.
        Reset = "reset",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ListFolderGetLatestCursorResult {
    /// Pass the cursor into `list_folder/continue` to see what's changed in the folder since your
    /// previous query.
    pub cursor: ListFolderCursor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ListFolderLongpollArg {
    /// A cursor as returned by `list_folder` or `list_folder/continue`. Cursors retrieved by
    /// setting `ListFolderArg::include_media_info` to true are not supported.
    pub cursor: ListFolderCursor,
    /// A timeout in seconds. The request will block for at most this length of time, plus up to 90
    /// seconds of random jitter added to avoid the thundering herd problem.
    #[serde(default = "default_longpoll_timeout", skip_serializing_if = "is_default_longpoll_timeout")]
    pub timeout: u64,
}

fn default_longpoll_timeout() -> u64 {
    30
}

fn is_default_longpoll_timeout(value: &u64) -> bool {
    *value == default_longpoll_timeout()
}

impl ListFolderLongpollArg {
    pub fn new(cursor: ListFolderCursor) -> Self {
        ListFolderLongpollArg { cursor, timeout: default_longpoll_timeout() }
    }

    pub fn with_timeout(mut self, value: u64) -> Self {
        self.timeout = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ListFolderLongpollResult {
    /// Indicates whether new changes are available. If true, call `list_folder/continue` to
    /// retrieve the changes.
    pub changes: bool,
    /// If present, backoff for at least this many seconds before calling
    /// `list_folder/longpoll` again.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backoff: Option<u64>,
}

tagged_union! {
    pub enum ListFolderLongpollError: open {
        /// Indicates that the cursor has been invalidated. Call `list_folder` to obtain a new
        /// cursor.
        Reset = "reset",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct DownloadArg {
    /// The path of the file to download.
    pub path: ReadPath,
}

impl DownloadArg {
    pub fn new(path: ReadPath) -> Self {
        DownloadArg { path }
    }
}

tagged_union! {
    pub enum DownloadError: open {
        Path(LookupError) = "path",
        /// This file type cannot be downloaded directly; use `export` instead.
        UnsupportedFile = "unsupported_file",
    }
}

tagged_union! {
    pub enum ThumbnailFormat: open {
        Jpeg = "jpeg",
        Png = "png",
        Webp = "webp",
    }
}

impl Default for ThumbnailFormat {
    fn default() -> Self {
        ThumbnailFormat::Jpeg
    }
}

tagged_union! {
    pub enum ThumbnailSize: open {
        /// 32 by 32 px.
        W32H32 = "w32h32",
        /// 64 by 64 px.
        W64H64 = "w64h64",
        /// 128 by 128 px.
        W128H128 = "w128h128",
        /// 256 by 256 px.
        W256H256 = "w256h256",
        /// 480 by 320 px.
        W480H320 = "w480h320",
        /// 640 by 480 px.
        W640H480 = "w640h480",
        /// 960 by 640 px.
        W960H640 = "w960h640",
        /// 1024 by 768 px.
        W1024H768 = "w1024h768",
        /// 2048 by 1536 px.
        W2048H1536 = "w2048h1536",
    }
}

impl Default for ThumbnailSize {
    fn default() -> Self {
        ThumbnailSize::W64H64
    }
}

tagged_union! {
    pub enum ThumbnailMode: open {
        /// Scale down the image to fit within the given size.
        Strict = "strict",
        /// Scale down the image to fit within the given size or its transpose.
        Bestfit = "bestfit",
        /// Scale down the image to completely cover the given size or its transpose.
        FitoneBestfit = "fitone_bestfit",
    }
}

impl Default for ThumbnailMode {
    fn default() -> Self {
        ThumbnailMode::Strict
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ThumbnailArg {
    /// The path to the image file you want to thumbnail.
    pub path: ReadPath,
    /// The format for the thumbnail image, jpeg (default) or png. For images that are photos,
    /// jpeg should be preferred, while png is better for screenshots and digital arts.
    #[serde(default, skip_serializing_if = "is_default")]
    pub format: ThumbnailFormat,
    /// The size for the thumbnail image.
    #[serde(default, skip_serializing_if = "is_default")]
    pub size: ThumbnailSize,
    /// How to resize and crop the image to achieve the desired size.
    #[serde(default, skip_serializing_if = "is_default")]
    pub mode: ThumbnailMode,
}

impl ThumbnailArg {
    pub fn new(path: ReadPath) -> Self {
        ThumbnailArg {
            path,
            format: ThumbnailFormat::default(),
            size: ThumbnailSize::default(),
            mode: ThumbnailMode::default(),
        }
    }

    pub fn with_format(mut self, value: ThumbnailFormat) -> Self {
        self.format = value;
        self
    }

    pub fn with_size(mut self, value: ThumbnailSize) -> Self {
        self.size = value;
        self
    }

    pub fn with_mode(mut self, value: ThumbnailMode) -> Self {
        self.mode = value;
        self
    }
}

tagged_union! {
    pub enum ThumbnailError: open {
        /// An error occurs when downloading metadata for the image.
        Path(LookupError) = "path",
        /// The file extension doesn't allow conversion to a thumbnail.
        UnsupportedExtension = "unsupported_extension",
        /// The image cannot be converted to a thumbnail.
        UnsupportedImage = "unsupported_image",
        /// An error occurs during thumbnail conversion.
        ConversionError = "conversion_error",
    }
}

tagged_union! {
    /// Your intent when writing a file to some path. This is used to determine what constitutes a
    /// conflict and what the autorename strategy is.
    pub enum WriteMode: open {
        /// Do not overwrite an existing file if there is a conflict. The autorename strategy is to
        /// append a number to the file name.
        Add = "add",
        /// Always overwrite the existing file. The autorename strategy is the same as it is for
        /// `Add`.
        Overwrite = "overwrite",
        /// Overwrite if the given "rev" matches the existing file's "rev". The supplied value
        /// should be the latest known "rev" of the file.
        Update(Rev) = "update",
    }
}

impl Default for WriteMode {
    fn default() -> Self {
        WriteMode::Add
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct CommitInfo {
    /// Path in the user's Dropbox to save the file.
    pub path: WritePath,
    /// Selects what to do if the file already exists.
    #[serde(default, skip_serializing_if = "is_default")]
    pub mode: WriteMode,
    /// If there's a conflict, as determined by `mode`, have the Dropbox server try to autorename
    /// the file to avoid conflict.
    #[serde(default, skip_serializing_if = "is_false")]
    pub autorename: bool,
    /// The value to store as the `client_modified` timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_modified: Option<DropboxTimestamp>,
    /// Normally, users are made aware of any file modifications in their Dropbox account via
    /// notifications in the client software. If true, this tells the clients that this
    /// modification shouldn't result in a user notification.
    #[serde(default, skip_serializing_if = "is_false")]
    pub mute: bool,
    /// List of custom properties to add to file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_groups: Option<Vec<PropertyGroup>>,
    /// Be more strict about how each `WriteMode` detects conflict.
    #[serde(default, skip_serializing_if = "is_false")]
    pub strict_conflict: bool,
}

impl CommitInfo {
    pub fn new(path: WritePath) -> Self {
        CommitInfo {
            path,
            mode: WriteMode::default(),
            autorename: false,
            client_modified: None,
            mute: false,
            property_groups: None,
            strict_conflict: false,
        }
    }

    pub fn with_mode(mut self, value: WriteMode) -> Self {
        self.mode = value;
        self
    }

    pub fn with_autorename(mut self, value: bool) -> Self {
        self.autorename = value;
        self
    }

    pub fn with_client_modified(mut self, value: DropboxTimestamp) -> Self {
        self.client_modified = Some(value);
        self
    }

    pub fn with_mute(mut self, value: bool) -> Self {
        self.mute = value;
        self
    }

    pub fn with_strict_conflict(mut self, value: bool) -> Self {
        self.strict_conflict = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct UploadArg {
    /// Path in the user's Dropbox to save the file.
    pub path: WritePath,
    #[serde(default, skip_serializing_if = "is_default")]
    pub mode: WriteMode,
    #[serde(default, skip_serializing_if = "is_false")]
    pub autorename: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_modified: Option<DropboxTimestamp>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub mute: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_groups: Option<Vec<PropertyGroup>>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strict_conflict: bool,
    /// A hash of the file content uploaded in this call. If provided and the uploaded content does
    /// not match this hash, an error will be returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<Sha256HexHash>,
}

impl UploadArg {
    pub fn new(path: WritePath) -> Self {
        UploadArg {
            path,
            mode: WriteMode::default(),
            autorename: false,
            client_modified: None,
            mute: false,
            property_groups: None,
            strict_conflict: false,
            content_hash: None,
        }
    }

    pub fn with_mode(mut self, value: WriteMode) -> Self {
        self.mode = value;
        self
    }

    pub fn with_autorename(mut self, value: bool) -> Self {
        self.autorename = value;
        self
    }

    pub fn with_client_modified(mut self, value: DropboxTimestamp) -> Self {
        self.client_modified = Some(value);
        self
    }

    pub fn with_mute(mut self, value: bool) -> Self {
        self.mute = value;
        self
    }

    pub fn with_content_hash(mut self, value: Sha256HexHash) -> Self {
        self.content_hash = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct UploadWriteFailed {
    /// The reason why the file couldn't be saved.
    pub reason: WriteError,
    /// The upload session ID; data has already been uploaded to the corresponding upload session
    /// and this ID may be used to retry the commit with `upload_session/finish`.
    pub upload_session_id: SessionId,
}

tagged_union! {
    pub enum UploadError: open {
        /// Unable to save the uploaded contents to a file.
        Path{UploadWriteFailed} = "path",
        /// The supplied property group is invalid. The file has uploaded without property groups.
        PropertiesError(InvalidPropertyGroupError) = "properties_error",
        /// The request payload must be at most 150 MB.
        PayloadTooLarge = "payload_too_large",
        /// The content received by the Dropbox server in this call does not match the provided
        /// content hash.
        ContentHashMismatch = "content_hash_mismatch",
        /// The file is required to be encrypted, which is not supported in our public API.
        EncryptionNotSupported = "encryption_not_supported",
    }
}

tagged_union! {
    pub enum UploadSessionType: open {
        /// Pieces of data are uploaded sequentially one after another. This is the default
        /// behavior.
        Sequential = "sequential",
        /// Pieces of data can be uploaded in concurrent RPCs in any order.
        Concurrent = "concurrent",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct UploadSessionStartArg {
    /// If true, the current session will be closed, at which point you won't be able to call
    /// `upload_session/append_v2` anymore with the current session.
    #[serde(default, skip_serializing_if = "is_false")]
    pub close: bool,
    /// Type of upload session you want to start. If not specified, default is
    /// `UploadSessionType::Sequential`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_type: Option<UploadSessionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<Sha256HexHash>,
}

impl UploadSessionStartArg {
    pub fn with_close(mut self, value: bool) -> Self {
        self.close = value;
        self
    }

    pub fn with_session_type(mut self, value: UploadSessionType) -> Self {
        self.session_type = Some(value);
        self
    }

    pub fn with_content_hash(mut self, value: Sha256HexHash) -> Self {
        self.content_hash = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct UploadSessionStartResult {
    /// A unique identifier for the upload session. Pass this to `upload_session/append_v2` and
    /// `upload_session/finish` to add more data and commit the upload.
    pub session_id: SessionId,
}

tagged_union! {
    pub enum UploadSessionStartError: open {
        /// Uploading data not allowed when starting concurrent upload session.
        ConcurrentSessionDataNotAllowed = "concurrent_session_data_not_allowed",
        /// Can not start a closed concurrent upload session.
        ConcurrentSessionCloseNotAllowed = "concurrent_session_close_not_allowed",
        /// The request payload must be at most 150 MB.
        PayloadTooLarge = "payload_too_large",
        ContentHashMismatch = "content_hash_mismatch",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct UploadSessionCursor {
    /// The upload session ID (returned by `upload_session/start`).
    pub session_id: SessionId,
    /// Offset in bytes at which data should be appended. We use this to make sure upload data
    /// isn't lost or duplicated in the event of a network error.
    pub offset: u64,
}

impl UploadSessionCursor {
    pub fn new(session_id: SessionId, offset: u64) -> Self {
        UploadSessionCursor { session_id, offset }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct UploadSessionAppendArg {
    /// Contains the upload session ID and the offset.
    pub cursor: UploadSessionCursor,
    /// If true, the current session will be closed, at which point you won't be able to call
    /// `upload_session/append_v2` anymore with the current session.
    #[serde(default, skip_serializing_if = "is_false")]
    pub close: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<Sha256HexHash>,
}

impl UploadSessionAppendArg {
    pub fn new(cursor: UploadSessionCursor) -> Self {
        UploadSessionAppendArg { cursor, close: false, content_hash: None }
    }

    pub fn with_close(mut self, value: bool) -> Self {
        self.close = value;
        self
    }

    pub fn with_content_hash(mut self, value: Sha256HexHash) -> Self {
        self.content_hash = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct UploadSessionOffsetError {
    /// The offset up to which data has been collected.
    pub correct_offset: u64,
}

tagged_union! {
    pub enum UploadSessionLookupError: open {
        /// The upload session ID was not found or has expired. Upload sessions are valid for 7
        /// days.
        NotFound = "not_found",
        /// The specified offset was incorrect. See the value for the correct offset. This error
        /// may occur when a previous request was received and processed successfully but the
        /// client did not receive the response, e.g. due to a network error.
        IncorrectOffset{UploadSessionOffsetError} = "incorrect_offset",
        /// You are attempting to append data to an upload session that has already been closed.
        Closed = "closed",
        /// The session must be closed before calling `upload_session/finish_batch_v2`.
        NotClosed = "not_closed",
        /// You can not append to the upload session because the size of a file should not exceed
        /// the max file size limit (i.e. 2^41 - 2^22 or 2,199,019,061,248 bytes).
        TooLarge = "too_large",
        /// For concurrent upload sessions, offset needs to be multiple of 4194304 bytes.
        ConcurrentSessionInvalidOffset = "concurrent_session_invalid_offset",
        /// For concurrent upload sessions, only chunks with size multiple of 4194304 bytes can be
        /// uploaded.
        ConcurrentSessionInvalidDataSize = "concurrent_session_invalid_data_size",
        PayloadTooLarge = "payload_too_large",
    }
}

tagged_union! {
    pub enum UploadSessionAppendError: open {
        NotFound = "not_found",
        IncorrectOffset{UploadSessionOffsetError} = "incorrect_offset",
        Closed = "closed",
        NotClosed = "not_closed",
        TooLarge = "too_large",
        ConcurrentSessionInvalidOffset = "concurrent_session_invalid_offset",
        ConcurrentSessionInvalidDataSize = "concurrent_session_invalid_data_size",
        PayloadTooLarge = "payload_too_large",
        /// The content received by the Dropbox server in this call does not match the provided
        /// content hash.
        ContentHashMismatch = "content_hash_mismatch",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct UploadSessionFinishArg {
    /// Contains the upload session ID and the offset.
    pub cursor: UploadSessionCursor,
    /// Contains the path and other optional modifiers for the commit.
    pub commit: CommitInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<Sha256HexHash>,
}

impl UploadSessionFinishArg {
    pub fn new(cursor: UploadSessionCursor, commit: CommitInfo) -> Self {
        UploadSessionFinishArg { cursor, commit, content_hash: None }
    }

    pub fn with_content_hash(mut self, value: Sha256HexHash) -> Self {
        self.content_hash = Some(value);
        self
    }
}

tagged_union! {
    pub enum UploadSessionFinishError: open {
        /// The session arguments are incorrect; the value explains the reason.
        LookupFailed(UploadSessionLookupError) = "lookup_failed",
        /// Unable to save the uploaded contents to a file. Data has already been appended to the
        /// upload session. Please retry with empty data body and updated offset.
        Path(WriteError) = "path",
        /// The supplied property group is invalid. The file has uploaded without property groups.
        PropertiesError(InvalidPropertyGroupError) = "properties_error",
        /// The batch request commits files into too many different shared folders. Please limit
        /// your batch request to files contained in a single shared folder.
        TooManySharedFolderTargets = "too_many_shared_folder_targets",
        /// There are too many write operations happening in the user's Dropbox. You should retry
        /// uploading this file.
        TooManyWriteOperations = "too_many_write_operations",
        /// Uploading data not allowed when finishing concurrent upload session.
        ConcurrentSessionDataNotAllowed = "concurrent_session_data_not_allowed",
        /// Concurrent upload sessions need to be closed before finishing.
        ConcurrentSessionNotClosed = "concurrent_session_not_closed",
        /// Not all pieces of data were uploaded before trying to finish the session.
        ConcurrentSessionMissingData = "concurrent_session_missing_data",
        PayloadTooLarge = "payload_too_large",
        ContentHashMismatch = "content_hash_mismatch",
        EncryptionNotSupported = "encryption_not_supported",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct UploadSessionFinishBatchArg {
    /// Commit information for each file in the batch.
    pub entries: Vec<UploadSessionFinishArg>,
}

impl UploadSessionFinishBatchArg {
    pub fn new(entries: Vec<UploadSessionFinishArg>) -> Self {
        UploadSessionFinishBatchArg { entries }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct UploadSessionFinishBatchResult {
    /// Each entry in `UploadSessionFinishBatchArg::entries` will appear at the same position
    /// inside `UploadSessionFinishBatchResult::entries`.
    pub entries: Vec<UploadSessionFinishBatchResultEntry>,
}

tagged_union! {
    pub enum UploadSessionFinishBatchResultEntry: open {
        Success{FileMetadata} = "success",
        Failure(UploadSessionFinishError) = "failure",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct DeleteArg {
    /// Path in the user's Dropbox to delete.
    pub path: WritePath,
    /// Perform delete if given "rev" matches the existing file's latest "rev". This field does
    /// not support deleting a folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_rev: Option<Rev>,
}

impl DeleteArg {
    pub fn new(path: WritePath) -> Self {
        DeleteArg { path, parent_rev: None }
    }

    pub fn with_parent_rev(mut self, value: Rev) -> Self {
        self.parent_rev = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct DeleteResult {
    /// Metadata of the deleted object.
    pub metadata: Metadata,
}

tagged_union! {
    pub enum DeleteError: open {
        PathLookup(LookupError) = "path_lookup",
        PathWrite(WriteError) = "path_write",
        /// There are too many write operations in user's Dropbox. Please retry this request.
        TooManyWriteOperations = "too_many_write_operations",
        /// There are too many files in one request. Please retry with fewer files.
        TooManyFiles = "too_many_files",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct DeleteBatchArg {
    pub entries: Vec<DeleteArg>,
}

impl DeleteBatchArg {
    pub fn new(entries: Vec<DeleteArg>) -> Self {
        DeleteBatchArg { entries }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct DeleteBatchResultData {
    /// Metadata of the deleted object.
    pub metadata: Metadata,
}

tagged_union! {
    pub enum DeleteBatchResultEntry: open {
        Success{DeleteBatchResultData} = "success",
        Failure(DeleteError) = "failure",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct DeleteBatchResult {
    /// Each entry in `DeleteBatchArg::entries` will appear at the same position inside
    /// `DeleteBatchResult::entries`.
    pub entries: Vec<DeleteBatchResultEntry>,
}

tagged_union! {
    /// Result returned by `delete_batch` that may either launch an asynchronous job or complete
    /// synchronously.
    pub enum DeleteBatchLaunch: open {
        AsyncJobId(AsyncJobId) = "async_job_id",
        Complete{DeleteBatchResult} = "complete",
    }
}

tagged_union! {
    pub enum DeleteBatchError: open {
        /// Use `DeleteError::TooManyWriteOperations`. `delete_batch` now provides smaller
        /// granularity about which entry has failed because of this.
        TooManyWriteOperations = "too_many_write_operations",
    }
}

tagged_union! {
    /// Result returned by `delete_batch/check` that may either be in progress or completed with
    /// result for each entry.
    pub enum DeleteBatchJobStatus: open {
        /// The asynchronous job is still in progress.
        InProgress = "in_progress",
        /// The batch delete has finished.
        Complete{DeleteBatchResult} = "complete",
        /// The batch delete has failed.
        Failed(DeleteBatchError) = "failed",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct CreateFolderArg {
    /// Path in the user's Dropbox to create.
    pub path: WritePath,
    /// If there's a conflict, have the Dropbox server try to autorename the folder to avoid the
    /// conflict.
    #[serde(default, skip_serializing_if = "is_false")]
    pub autorename: bool,
}

impl CreateFolderArg {
    pub fn new(path: WritePath) -> Self {
        CreateFolderArg { path, autorename: false }
    }

    pub fn with_autorename(mut self, value: bool) -> Self {
        self.autorename = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct CreateFolderResult {
    /// Metadata of the created folder.
    pub metadata: FolderMetadata,
}

tagged_union! {
    pub enum CreateFolderError: open {
        Path(WriteError) = "path",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct RelocationArg {
    /// Path in the user's Dropbox to be copied or moved.
    pub from_path: WritePath,
    /// Path in the user's Dropbox that is the destination.
    pub to_path: WritePath,
    /// This flag has no effect.
    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_shared_folder: bool,
    /// If there's a conflict, have the Dropbox server try to autorename the file to avoid the
    /// conflict.
    #[serde(default, skip_serializing_if = "is_false")]
    pub autorename: bool,
    /// Allow moves by owner even if it would result in an ownership transfer for the content being
    /// moved. This does not apply to copies.
    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_ownership_transfer: bool,
}

impl RelocationArg {
    pub fn new(from_path: WritePath, to_path: WritePath) -> Self {
        RelocationArg {
            from_path,
            to_path,
            allow_shared_folder: false,
            autorename: false,
            allow_ownership_transfer: false,
        }
    }

    pub fn with_autorename(mut self, value: bool) -> Self {
        self.autorename = value;
        self
    }

    pub fn with_allow_ownership_transfer(mut self, value: bool) -> Self {
        self.allow_ownership_transfer = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct RelocationResult {
    /// Metadata of the relocated object.
    pub metadata: Metadata,
}

tagged_union! {
    pub enum RelocationError: open {
        FromLookup(LookupError) = "from_lookup",
        FromWrite(WriteError) = "from_write",
        To(WriteError) = "to",
        /// Shared folders can't be copied.
        CantCopySharedFolder = "cant_copy_shared_folder",
        /// Your move operation would result in nested shared folders. This is not allowed.
        CantNestSharedFolder = "cant_nest_shared_folder",
        /// You cannot move a folder into itself.
        CantMoveFolderIntoItself = "cant_move_folder_into_itself",
        /// The operation would involve more than 10,000 files and folders.
        TooManyFiles = "too_many_files",
        /// There are duplicated/nested paths among `RelocationArg::from_path` and
        /// `RelocationArg::to_path`.
        DuplicatedOrNestedPaths = "duplicated_or_nested_paths",
        /// Your move operation would result in an ownership transfer. You may reissue the request
        /// with the field `RelocationArg::allow_ownership_transfer` to true.
        CantTransferOwnership = "cant_transfer_ownership",
        /// The current user does not have enough space to move or copy the files.
        InsufficientQuota = "insufficient_quota",
        /// Something went wrong with the job on Dropbox's end. You'll need to verify that the
        /// action you were taking succeeded, and if not, try again.
        InternalError = "internal_error",
        /// Can't move the shared folder to the given destination.
        CantMoveSharedFolder = "cant_move_shared_folder",
    }
}

tagged_union! {
    pub enum SearchOrderBy: open {
        Relevance = "relevance",
        LastModifiedTime = "last_modified_time",
    }
}

tagged_union! {
    pub enum FileStatus: open {
        Active = "active",
        Deleted = "deleted",
    }
}

impl Default for FileStatus {
    fn default() -> Self {
        FileStatus::Active
    }
}

tagged_union! {
    pub enum FileCategory: open {
        /// jpg, png, gif, and more.
        Image = "image",
        /// doc, docx, txt, and more.
        Document = "document",
        /// pdf.
        Pdf = "pdf",
        /// xlsx, xls, csv, and more.
        Spreadsheet = "spreadsheet",
        /// ppt, pptx, key, and more.
        Presentation = "presentation",
        /// mp3, wav, mid, and more.
        Audio = "audio",
        /// mov, wmv, mp4, and more.
        Video = "video",
        /// dropbox folder.
        Folder = "folder",
        /// dropbox paper doc.
        Paper = "paper",
        /// any file not in one of the categories above.
        Others = "others",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct SearchOptions {
    /// Scopes the search to a path in the user's Dropbox. Searches the entire Dropbox if not
    /// specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Path>,
    /// The maximum number of search results to return.
    #[serde(default = "default_max_results", skip_serializing_if = "is_default_max_results")]
    pub max_results: u64,
    /// Specified property of the order of search results. By default, results are sorted by
    /// relevance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<SearchOrderBy>,
    /// Restricts search to the given file status.
    #[serde(default, skip_serializing_if = "is_default")]
    pub file_status: FileStatus,
    /// Restricts search to only match on filenames.
    #[serde(default, skip_serializing_if = "is_false")]
    pub filename_only: bool,
    /// Restricts search to only the extensions specified. Only supported for active file search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_extensions: Option<Vec<String>>,
    /// Restricts search to only the file categories specified. Only supported for active file
    /// search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_categories: Option<Vec<FileCategory>>,
    /// Restricts results to the given account id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
}

fn default_max_results() -> u64 {
    100
}

fn is_default_max_results(value: &u64) -> bool {
    *value == default_max_results()
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            path: None,
            max_results: default_max_results(),
            order_by: None,
            file_status: FileStatus::default(),
            filename_only: false,
            file_extensions: None,
            file_categories: None,
            account_id: None,
        }
    }
}

impl SearchOptions {
    pub fn with_path(mut self, value: Path) -> Self {
        self.path = Some(value);
        self
    }

    pub fn with_max_results(mut self, value: u64) -> Self {
        self.max_results = value;
        self
    }

    pub fn with_order_by(mut self, value: SearchOrderBy) -> Self {
        self.order_by = Some(value);
        self
    }

    pub fn with_file_status(mut self, value: FileStatus) -> Self {
        self.file_status = value;
        self
    }

    pub fn with_filename_only(mut self, value: bool) -> Self {
        self.filename_only = value;
        self
    }

    pub fn with_file_extensions(mut self, value: Vec<String>) -> Self {
        self.file_extensions = Some(value);
        self
    }

    pub fn with_file_categories(mut self, value: Vec<FileCategory>) -> Self {
        self.file_categories = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct SearchMatchFieldOptions {
    /// Whether to include highlight span from file title.
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_highlights: bool,
}

impl SearchMatchFieldOptions {
    pub fn with_include_highlights(mut self, value: bool) -> Self {
        self.include_highlights = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct SearchV2Arg {
    /// The string to search for. May match across multiple fields based on the request arguments.
    pub query: String,
    /// Options for more targeted search results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<SearchOptions>,
    /// Options for search results match fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_field_options: Option<SearchMatchFieldOptions>,
}

impl SearchV2Arg {
    pub fn new(query: String) -> Self {
        SearchV2Arg { query, options: None, match_field_options: None }
    }

    pub fn with_options(mut self, value: SearchOptions) -> Self {
        self.options = Some(value);
        self
    }

    pub fn with_match_field_options(mut self, value: SearchMatchFieldOptions) -> Self {
        self.match_field_options = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct SearchV2ContinueArg {
    /// The cursor returned by your last call to `search_v2`. Used to fetch the next page of
    /// results.
    pub cursor: SearchV2Cursor,
}

impl SearchV2ContinueArg {
    pub fn new(cursor: SearchV2Cursor) -> Self {
        SearchV2ContinueArg { cursor }
    }
}

tagged_union! {
    pub enum MetadataV2: open {
        Metadata(Metadata) = "metadata",
    }
}

tagged_union! {
    /// Indicates what type of match was found for a given item.
    pub enum SearchMatchTypeV2: open {
        /// This item was matched on its file or folder name.
        Filename = "filename",
        /// This item was matched based on its file contents.
        FileContent = "file_content",
        /// This item was matched based on both its contents and its file name.
        FilenameAndContent = "filename_and_content",
        /// This item was matched on image content.
        ImageContent = "image_content",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct HighlightSpan {
    /// String to be determined whether it should be highlighted or not.
    pub highlight_str: String,
    /// The string should be highlighted or not.
    pub is_highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct SearchMatchV2 {
    /// The metadata for the matched file or folder.
    pub metadata: MetadataV2,
    /// The type of the match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<SearchMatchTypeV2>,
    /// The list of HighlightSpan determines which parts of the file title should be highlighted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_spans: Option<Vec<HighlightSpan>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct SearchV2Result {
    /// A list (possibly empty) of matches for the query.
    pub matches: Vec<SearchMatchV2>,
    /// Used for paging. If true, indicates there is another page of results available that can be
    /// fetched by calling `search/continue_v2` with the cursor.
    pub has_more: bool,
    /// Pass the cursor into `search/continue_v2` to fetch the next page of results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<SearchV2Cursor>,
}

tagged_union! {
    pub enum SearchError: open {
        Path(LookupError) = "path",
        InvalidArgument(Option<String>) = "invalid_argument",
        /// Something went wrong, please try again.
        InternalError = "internal_error",
    }
}

tagged_union! {
    pub enum ListRevisionsMode: open {
        /// Returns revisions with the same file path as identified by the latest file entry at the
        /// given file path or id.
        Path = "path",
        /// Returns revisions with the same file id as identified by the latest file entry at the
        /// given file path or id.
        Id = "id",
    }
}

impl Default for ListRevisionsMode {
    fn default() -> Self {
        ListRevisionsMode::Path
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ListRevisionsArg {
    /// The path to the file you want to see the revisions of.
    pub path: Path,
    /// Determines the behavior of the API in listing the revisions for a given file path or id.
    #[serde(default, skip_serializing_if = "is_default")]
    pub mode: ListRevisionsMode,
    /// The maximum number of revision entries returned.
    #[serde(default = "default_revisions_limit", skip_serializing_if = "is_default_revisions_limit")]
    pub limit: u64,
    /// If set, `ListRevisionsResult::entries` will only contain the revisions prior to this
    /// revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_rev: Option<Rev>,
}

fn default_revisions_limit() -> u64 {
    10
}

fn is_default_revisions_limit(value: &u64) -> bool {
    *value == default_revisions_limit()
}

impl ListRevisionsArg {
    pub fn new(path: Path) -> Self {
        ListRevisionsArg {
            path,
            mode: ListRevisionsMode::default(),
            limit: default_revisions_limit(),
            before_rev: None,
        }
    }

    pub fn with_mode(mut self, value: ListRevisionsMode) -> Self {
        self.mode = value;
        self
    }

    pub fn with_limit(mut self, value: u64) -> Self {
        self.limit = value;
        self
    }

    pub fn with_before_rev(mut self, value: Rev) -> Self {
        self.before_rev = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ListRevisionsResult {
    /// If the file identified by the latest revision in the response is either deleted or moved.
    pub is_deleted: bool,
    /// The revisions for the file. Only revisions that are not deleted will show up here.
    pub entries: Vec<FileMetadata>,
    /// The time of deletion if the file was deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_deleted: Option<DropboxTimestamp>,
}

tagged_union! {
    pub enum ListRevisionsError: open {
        Path(LookupError) = "path",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct RestoreArg {
    /// The path to save the restored file.
    pub path: WritePath,
    /// The revision to restore.
    pub rev: Rev,
}

impl RestoreArg {
    pub fn new(path: WritePath, rev: Rev) -> Self {
        RestoreArg { path, rev }
    }
}

tagged_union! {
    pub enum RestoreError: open {
        /// An error occurs when downloading metadata for the file.
        PathLookup(LookupError) = "path_lookup",
        /// An error occurs when trying to restore the file to that path.
        PathWrite(WriteError) = "path_write",
        /// The revision is invalid. It may not exist or may point to a deleted file.
        InvalidRevision = "invalid_revision",
        /// The restore is currently executing, but has not yet completed.
        InProgress = "in_progress",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct GetTemporaryLinkArg {
    /// The path to the file you want a temporary link to.
    pub path: ReadPath,
}

impl GetTemporaryLinkArg {
    pub fn new(path: ReadPath) -> Self {
        GetTemporaryLinkArg { path }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct GetTemporaryLinkResult {
    /// Metadata of the file.
    pub metadata: FileMetadata,
    /// The temporary link which can be used to stream content the file.
    pub link: String,
}

tagged_union! {
    pub enum GetTemporaryLinkError: open {
        Path(LookupError) = "path",
        /// This user's email address is not verified.
        EmailNotVerified = "email_not_verified",
        /// Cannot get temporary link to this file type.
        UnsupportedFile = "unsupported_file",
        /// The user is not allowed to request a temporary link to the specified file.
        NotAllowed = "not_allowed",
    }
}

tagged_union! {
    pub enum SyncSetting: open {
        /// On first sync to members' computers, the specified folder will follow its parent
        /// folder's setting or otherwise follow default sync behavior.
        Default = "default",
        /// On first sync to members' computers, the specified folder will be set to not sync with
        /// selective sync.
        NotSynced = "not_synced",
        /// The specified folder's not_synced setting is inactive due to its location or other
        /// configuration changes. It will follow its parent folder's setting.
        NotSyncedInactive = "not_synced_inactive",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ContentSyncSetting {
    /// Id of the item this setting is applied to.
    pub id: FileId,
    /// Setting for this item.
    pub sync_setting: SyncSetting,
}

impl ContentSyncSetting {
    pub fn new(id: FileId, sync_setting: SyncSetting) -> Self {
        ContentSyncSetting { id, sync_setting }
    }
}

api_error!(
    LookupError,
    WriteError,
    WriteConflictError,
    GetMetadataError,
    ListFolderError,
    ListFolderContinueError,
    ListFolderLongpollError,
    DownloadError,
    ThumbnailError,
    UploadError,
    UploadSessionStartError,
    UploadSessionLookupError,
    UploadSessionAppendError,
    UploadSessionFinishError,
    DeleteError,
    DeleteBatchError,
    CreateFolderError,
    RelocationError,
    SearchError,
    ListRevisionsError,
    RestoreError,
    GetTemporaryLinkError,
);

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn metadata_variants_are_inline() {
        let entry: Metadata = serde_json::from_value(json!({
            ".tag": "folder",
            "name": "Photos",
            "id": "id:a4ayc_80_OEAAAAAAAAAXw",
            "path_lower": "/photos",
            "path_display": "/Photos",
            "some_future_field": 1
        })).unwrap();
        assert_eq!(
            entry,
            Metadata::Folder(FolderMetadata::new(
                "Photos".to_owned(), "id:a4ayc_80_OEAAAAAAAAAXw".to_owned())
                .with_path_lower("/photos".to_owned())
                .with_path_display("/Photos".to_owned())));
        assert_eq!(entry.name(), Some("Photos"));
    }

    #[test]
    fn unknown_entry_kind_keeps_the_page() {
        let page: ListFolderResult = serde_json::from_value(json!({
            "entries": [
                {".tag": "symlink", "name": "x", "target": "/y"},
                {".tag": "deleted", "name": "gone"}
            ],
            "cursor": "c1",
            "has_more": false
        })).unwrap();
        assert_eq!(page.entries.len(), 2);
        assert_eq!(page.entries[0], Metadata::Other);
        assert_eq!(page.entries[0].name(), None);
        assert_eq!(page.entries[1].name(), Some("gone"));
    }

    #[test]
    fn file_metadata_defaults() {
        let entry: Metadata = serde_json::from_value(json!({
            ".tag": "file",
            "name": "a.txt",
            "id": "id:1",
            "client_modified": "2024-01-01T00:00:00Z",
            "server_modified": "2024-01-01T00:00:01Z",
            "rev": "015f",
            "size": 12
        })).unwrap();
        let Metadata::File(file) = entry else { panic!("not a file") };
        assert!(file.is_downloadable);
        assert_eq!(file.path_display, None);
        assert_eq!(file.size, 12);
    }

    #[test]
    fn args_omit_defaults() {
        assert_eq!(
            serde_json::to_value(ListFolderArg::new(String::new())).unwrap(),
            json!({"path": ""}));
        assert_eq!(
            serde_json::to_value(ThumbnailArg::new("/a.jpg".to_owned())).unwrap(),
            json!({"path": "/a.jpg"}));
        assert_eq!(
            serde_json::to_value(SearchV2Arg::new("q".to_owned())
                .with_options(SearchOptions::default())).unwrap(),
            json!({"query": "q", "options": {}}));
        assert_eq!(
            serde_json::to_value(CommitInfo::new("/x".to_owned())
                .with_mode(WriteMode::Overwrite)
                .with_mute(true)).unwrap(),
            json!({"path": "/x", "mode": {".tag": "overwrite"}, "mute": true}));
    }

    #[test]
    fn nested_lookup_error() {
        let e: DeleteError = serde_json::from_value(json!({
            ".tag": "path_lookup",
            "path_lookup": {".tag": "malformed_path"}
        })).unwrap();
        assert_eq!(e, DeleteError::PathLookup(LookupError::MalformedPath(None)));
    }

    #[test]
    fn write_mode_from_bare_string() {
        let mode: WriteMode = serde_json::from_value(json!("overwrite")).unwrap();
        assert_eq!(mode, WriteMode::Overwrite);
        assert_eq!(
            serde_json::to_value(WriteMode::Update("015f".to_owned())).unwrap(),
            json!({".tag": "update", "update": "015f"}));
    }

    #[test]
    fn batch_entries() {
        let result: DeleteBatchJobStatus = serde_json::from_value(json!({
            ".tag": "complete",
            "entries": [
                {".tag": "success", "metadata": {".tag": "deleted", "name": "x"}},
                {".tag": "failure", "failure": {".tag": "too_many_files"}}
            ]
        })).unwrap();
        let DeleteBatchJobStatus::Complete(DeleteBatchResult { entries, .. }) = result else {
            panic!("wrong status");
        };
        assert_eq!(entries.len(), 2);
        assert!(matches!(&entries[1], DeleteBatchResultEntry::Failure(DeleteError::TooManyFiles)));
    }
}
