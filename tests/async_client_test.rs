mod common;

use bytes::Bytes;
use futures::AsyncReadExt;
use common::{Canned, ScriptedClient};
use dropbox_bindings::async_routes::{check, files};

#[tokio::test]
async fn echo() {
    let client = ScriptedClient::new([Canned::ok(r#"{"result":"foobar"}"#)]);
    let req = check::EchoArg::default().with_query("foobar".to_owned());
    let resp = check::user(&client, &req).await.expect("request must not fail");
    assert_eq!(resp.result, req.query);
    assert_eq!(client.last_request().url, "https://api.dropboxapi.com/2/check/user");
}

#[tokio::test]
async fn upload_sends_raw_body() {
    let client = ScriptedClient::new([Canned::ok(r#"{
        "name": "a.txt",
        "id": "id:1",
        "client_modified": "2024-01-01T00:00:00Z",
        "server_modified": "2024-01-01T00:00:00Z",
        "rev": "0123456789abc",
        "size": 5
    }"#)]);
    let meta = files::upload(
        &client,
        &files::UploadArg::new("/a.txt".to_owned()),
        Bytes::from_static(b"hello"),
    ).await.unwrap();
    assert_eq!(meta.size, 5);

    let sent = client.last_request();
    assert_eq!(sent.url, "https://content.dropboxapi.com/2/files/upload");
    assert_eq!(sent.body, b"hello");
    assert_eq!(sent.header("Content-Type"), Some("application/octet-stream"));
    assert_eq!(sent.header("Dropbox-API-Arg"), Some(r#"{"path":"/a.txt"}"#));
}

#[tokio::test]
async fn download_streams_body() {
    let client = ScriptedClient::new([Canned::download(r#"{
        "name": "a.txt",
        "id": "id:1",
        "client_modified": "2024-01-01T00:00:00Z",
        "server_modified": "2024-01-01T00:00:00Z",
        "rev": "0123456789abc",
        "size": 11
    }"#, b"hello world")]);
    let result = files::download(
        &client, &files::DownloadArg::new("/a.txt".to_owned()), Some(6), None).await.unwrap();
    assert_eq!(result.result.name, "a.txt");
    assert_eq!(result.content_length, Some(11));

    let mut content = String::new();
    result.body.expect("download has a body")
        .read_to_string(&mut content).await.unwrap();
    assert_eq!(content, "hello world");
    assert_eq!(client.last_request().header("Range"), Some("bytes=6-"));
}

#[tokio::test]
async fn route_error_is_typed() {
    let client = ScriptedClient::new([Canned::status(409, r#"{
        "error_summary": "path/not_found/..",
        "error": {".tag": "path", "path": {".tag": "not_found"}}
    }"#)]);
    let err = files::get_metadata(&client, &files::GetMetadataArg::new("/nope".to_owned()))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        dropbox_bindings::Error::Api(files::GetMetadataError::Path(files::LookupError::NotFound))),
        "{err:?}");
}
