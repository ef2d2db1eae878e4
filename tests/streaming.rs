//! Upload and download routes move raw bytes; their arguments and results travel in headers.

mod common;

use std::io::Read;
use common::{Canned, ScriptedClient};
use dropbox_bindings::sync_routes::files;

const FILE_METADATA: &str = r#"{
    "name": "big.bin",
    "id": "id:big",
    "client_modified": "2024-01-01T00:00:00Z",
    "server_modified": "2024-01-01T00:00:00Z",
    "rev": "0123456789abc",
    "size": 12,
    "content_hash": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
}"#;

#[test]
fn download_with_range() {
    let client = ScriptedClient::new([Canned::download(FILE_METADATA, b"4567")]);
    let result = files::download(
        &client, &files::DownloadArg::new("/big.bin".to_owned()), Some(4), Some(7)).unwrap();

    assert_eq!(result.result.id, "id:big");
    assert_eq!(result.content_length, Some(4));
    let mut content = vec![];
    result.body.expect("download has a body").read_to_end(&mut content).unwrap();
    assert_eq!(content, b"4567");

    let sent = client.last_request();
    assert_eq!(sent.url, "https://content.dropboxapi.com/2/files/download");
    assert_eq!(sent.header("Range"), Some("bytes=4-7"));
    assert_eq!(sent.header("Dropbox-API-Arg"), Some(r#"{"path":"/big.bin"}"#));
    assert!(sent.body.is_empty());
}

#[test]
fn download_without_result_header_fails() {
    let client = ScriptedClient::new([Canned::ok("file contents")]);
    let err = files::download(&client, &files::DownloadArg::new("/a".to_owned()), None, None)
        .err()
        .expect("download must fail");
    assert!(matches!(err, dropbox_bindings::Error::UnexpectedResponse(_)), "{err:?}");
}

#[test]
fn thumbnail_is_a_download() {
    let client = ScriptedClient::new([Canned::download(FILE_METADATA, b"\xff\xd8\xff")]);
    let arg = files::ThumbnailArg::new("/photo.jpg".to_owned())
        .with_size(files::ThumbnailSize::W640H480);
    let result = files::get_thumbnail(&client, &arg, None, None).unwrap();
    assert!(result.body.is_some());

    let sent = client.last_request();
    let api_arg: serde_json::Value = serde_json::from_str(sent.header("Dropbox-API-Arg").unwrap())
        .unwrap();
    assert_eq!(api_arg["size"], serde_json::json!({".tag": "w640h480"}));
}

#[test]
fn upload_session_lifecycle() {
    let client = ScriptedClient::new([
        Canned::ok(r#"{"session_id": "sess:1"}"#),
        Canned::ok("null"),
        Canned::ok(FILE_METADATA),
    ]);

    let start = files::upload_session_start(
        &client, &files::UploadSessionStartArg::default(), b"0123").unwrap();
    assert_eq!(start.session_id, "sess:1");

    let cursor = files::UploadSessionCursor::new(start.session_id.clone(), 4);
    files::upload_session_append_v2(
        &client, &files::UploadSessionAppendArg::new(cursor), b"4567").unwrap();

    let cursor = files::UploadSessionCursor::new(start.session_id, 8);
    let commit = files::CommitInfo::new("/big.bin".to_owned())
        .with_mode(files::WriteMode::Overwrite);
    let meta = files::upload_session_finish(
        &client, &files::UploadSessionFinishArg::new(cursor, commit), b"89ab").unwrap();
    assert_eq!(meta.size, 12);

    let requests = client.requests();
    let urls: Vec<&str> = requests.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, [
        "https://content.dropboxapi.com/2/files/upload_session/start",
        "https://content.dropboxapi.com/2/files/upload_session/append_v2",
        "https://content.dropboxapi.com/2/files/upload_session/finish",
    ]);
    let bodies: Vec<&[u8]> = requests.iter().map(|r| r.body.as_slice()).collect();
    assert_eq!(bodies, [&b"0123"[..], &b"4567"[..], &b"89ab"[..]]);

    let finish_arg: serde_json::Value =
        serde_json::from_str(requests[2].header("Dropbox-API-Arg").unwrap()).unwrap();
    assert_eq!(finish_arg, serde_json::json!({
        "cursor": {"session_id": "sess:1", "offset": 8},
        "commit": {"path": "/big.bin", "mode": {".tag": "overwrite"}},
    }));
}

#[test]
fn upload_session_wrong_offset() {
    let client = ScriptedClient::new([Canned::status(409, r#"{
        "error_summary": "incorrect_offset/..",
        "error": {".tag": "incorrect_offset", "correct_offset": 4}
    }"#)]);
    let cursor = files::UploadSessionCursor::new("sess:1".to_owned(), 3);
    let err = files::upload_session_append_v2(
        &client, &files::UploadSessionAppendArg::new(cursor), b"x").unwrap_err();
    let dropbox_bindings::Error::Api(files::UploadSessionAppendError::IncorrectOffset(e)) = err else {
        panic!("wrong error");
    };
    assert_eq!(e.correct_offset, 4);
}

#[test]
fn non_ascii_path_in_header_argument() {
    // Header escaping is up to the HTTP client; the argument itself is plain JSON.
    let client = ScriptedClient::new([Canned::download(FILE_METADATA, b"")]);
    files::download(&client, &files::DownloadArg::new("/naïve.txt".to_owned()), None, None)
        .unwrap();
    assert_eq!(
        client.last_request().header("Dropbox-API-Arg"),
        Some(r#"{"path":"/naïve.txt"}"#));
}
