//! How each kind of non-2xx response surfaces from a route call.

mod common;

use common::{Canned, ScriptedClient};
use dropbox_bindings::{Error, NoError};
use dropbox_bindings::auth::{AccessError, AuthError, RateLimitReason};
use dropbox_bindings::sync_routes::{check, files, users};

fn echo(status: u16, body: &str) -> Error<NoError> {
    let client = ScriptedClient::new([Canned::status(status, body)]);
    check::user(&client, &check::EchoArg::default()).unwrap_err()
}

#[test]
fn bad_request_keeps_raw_text() {
    let err = echo(400, "Error in call to API function \"check/user\": bad JSON");
    let Error::BadRequest(msg) = err else { panic!("wrong error") };
    assert!(msg.contains("bad JSON"));
}

#[test]
fn unauthorized() {
    let err = echo(401, r#"{
        "error_summary": "expired_access_token/...",
        "error": {".tag": "expired_access_token"}
    }"#);
    assert!(matches!(err, Error::Authentication(AuthError::ExpiredAccessToken)), "{err:?}");
}

#[test]
fn unauthorized_missing_scope() {
    let err = echo(401, r#"{
        "error_summary": "missing_scope/...",
        "error": {".tag": "missing_scope", "required_scope": "files.content.read"}
    }"#);
    let Error::Authentication(AuthError::MissingScope(scope)) = err else {
        panic!("wrong error");
    };
    assert_eq!(scope.required_scope, "files.content.read");
}

#[test]
fn forbidden() {
    let err = echo(403, r#"{
        "error_summary": "no_permission/...",
        "error": {".tag": "no_permission"}
    }"#);
    assert!(matches!(err, Error::AccessDenied(AccessError::NoPermission)), "{err:?}");
}

#[test]
fn rate_limited() {
    let err = echo(429, r#"{
        "error_summary": "too_many_requests/...",
        "error": {"reason": {".tag": "too_many_requests"}, "retry_after": 300}
    }"#);
    let Error::RateLimited { reason, retry_after_seconds } = err else {
        panic!("wrong error");
    };
    assert_eq!(reason, RateLimitReason::TooManyRequests);
    assert_eq!(retry_after_seconds, 300);
}

#[test]
fn other_status_with_envelope() {
    let err = echo(422, r#"{"error_summary": "invalid_root/..", "error": {".tag": "invalid_root"}}"#);
    let Error::ErrorSummary { code, summary } = err else { panic!("wrong error") };
    assert_eq!(code, 422);
    assert_eq!(summary, "invalid_root/..");
}

#[test]
fn other_status_without_envelope() {
    let err = echo(418, "I'm a teapot");
    assert!(matches!(err, Error::UnexpectedHttpError { code: 418, .. }), "{err:?}");
    assert_eq!(err.to_string(), "Dropbox API returned HTTP 418 - I'm a teapot");
}

#[test]
fn malformed_structured_error_is_json_error() {
    let err = echo(401, "not json at all");
    assert!(matches!(err, Error::Json(_)), "{err:?}");
}

#[test]
fn route_error_with_payload() {
    let client = ScriptedClient::new([Canned::status(409, r#"{
        "error_summary": "no_account/..",
        "error": {".tag": "no_account"}
    }"#)]);
    let err = users::get_account(&client, &users::GetAccountArg::new("dbid:x".to_owned()))
        .unwrap_err();
    assert!(matches!(err, Error::Api(users::GetAccountError::NoAccount)), "{err:?}");
    assert_eq!(err.to_string(), "Dropbox API endpoint returned an error: no_account");
}

#[test]
fn route_error_unknown_tag_is_other() {
    let client = ScriptedClient::new([Canned::status(409, r#"{
        "error_summary": "brand_new/..",
        "error": {".tag": "brand_new"}
    }"#)]);
    let err = users::get_account(&client, &users::GetAccountArg::new("dbid:x".to_owned()))
        .unwrap_err();
    assert!(matches!(err, Error::Api(users::GetAccountError::Other)), "{err:?}");
}

#[test]
fn new_error_reason_on_create_folder_is_api_error() {
    let client = ScriptedClient::new([Canned::status(409, r#"{
        "error_summary": "brand_new_reason/..",
        "error": {".tag": "brand_new_reason"}
    }"#)]);
    let err = files::create_folder_v2(&client, &files::CreateFolderArg::new("/a".to_owned()))
        .unwrap_err();
    assert!(matches!(err, Error::Api(files::CreateFolderError::Other)), "{err:?}");
}

#[test]
fn new_nested_reason_on_get_metadata_is_api_error() {
    let client = ScriptedClient::new([Canned::status(409, r#"{
        "error_summary": "path/quarantined/..",
        "error": {".tag": "path", "path": {".tag": "quarantined"}}
    }"#)]);
    let err = files::get_metadata(&client, &files::GetMetadataArg::new("/a".to_owned()))
        .unwrap_err();
    assert!(
        matches!(err, Error::Api(files::GetMetadataError::Path(files::LookupError::Other))),
        "{err:?}");
}

#[test]
fn download_error_comes_from_body() {
    // Errors on download routes are in the body even though results are in a header.
    let client = ScriptedClient::new([Canned::status(409, r#"{
        "error_summary": "unsupported_file/..",
        "error": {".tag": "unsupported_file"}
    }"#)]);
    let err = files::download(&client, &files::DownloadArg::new("/x.gdoc".to_owned()), None, None)
        .err()
        .expect("download must fail");
    assert!(matches!(err, Error::Api(files::DownloadError::UnsupportedFile)), "{err:?}");
}

#[test]
fn boxed_and_downcast() {
    let client = ScriptedClient::new([Canned::status(409, r#"{
        "error_summary": "path/not_found/..",
        "error": {".tag": "path", "path": {".tag": "not_found"}}
    }"#)]);
    let err = files::list_folder(&client, &files::ListFolderArg::new("/nope".to_owned()))
        .unwrap_err();
    let expected = files::ListFolderError::Path(files::LookupError::NotFound);
    assert_eq!(err.downcast_ref_inner::<files::ListFolderError>(), Some(&expected));

    let Error::Api(boxed) = err.boxed() else { panic!("wrong error") };
    assert_eq!(boxed.downcast_ref::<files::ListFolderError>(), Some(&expected));
}
