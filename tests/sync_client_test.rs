mod common;

use common::{Canned, ScriptedClient};
use dropbox_bindings::client_trait_common::TeamSelect;
use dropbox_bindings::sync_routes::{auth, check, files, team, users};

#[test]
fn echo() {
    let client = ScriptedClient::new([Canned::ok(r#"{"result":"foobar"}"#)]);
    let req = check::EchoArg::default().with_query("foobar".to_owned());
    let resp = check::user(&client, &req).expect("request must not fail");
    assert_eq!(resp.result, req.query);

    let sent = client.last_request();
    assert_eq!(sent.url, "https://api.dropboxapi.com/2/check/user");
    assert_eq!(sent.header("Authorization"), Some("Bearer test-token"));
    assert_eq!(sent.header("Content-Type"), Some("application/json"));
    assert_eq!(sent.body_json(), serde_json::json!({"query": "foobar"}));
}

#[test]
fn no_argument_route_sends_null() {
    let client = ScriptedClient::new([Canned::ok(r#"{
        "used": 1,
        "allocation": {".tag": "individual", "allocated": 2}
    }"#)]);
    let usage = users::get_space_usage(&client).unwrap();
    assert_eq!(usage.used, 1);
    assert_eq!(client.last_request().body, b"null");
}

#[test]
fn unit_result_from_empty_body() {
    let client = ScriptedClient::new([Canned::ok("")]);
    auth::token_revoke(&client).unwrap();
    assert_eq!(client.last_request().url, "https://api.dropboxapi.com/2/auth/token/revoke");
}

#[test]
fn app_auth_uses_basic_credentials() {
    let mut client = ScriptedClient::new([Canned::ok(r#"{"result":""}"#)]);
    client.token = None;
    client.app_credentials = Some(("key".to_owned(), "secret".to_owned()));
    check::app(&client, &check::EchoArg::default()).unwrap();
    assert_eq!(client.last_request().header("Authorization"), Some("Basic a2V5OnNlY3JldA=="));
}

#[test]
fn path_root_header() {
    let mut client = ScriptedClient::new([Canned::ok(r#"{"entries":[],"cursor":"c","has_more":false}"#)]);
    client.path_root = Some(r#"{".tag":"namespace_id","namespace_id":"42"}"#.to_owned());
    let result = files::list_folder(&client, &files::ListFolderArg::new(String::new())).unwrap();
    assert!(result.entries.is_empty());
    assert_eq!(
        client.last_request().header("Dropbox-API-Path-Root"),
        Some(r#"{".tag":"namespace_id","namespace_id":"42"}"#));
}

#[test]
fn longpoll_goes_to_notify_without_credentials() {
    let client = ScriptedClient::new([Canned::ok(r#"{"changes":true}"#)]);
    let result = files::list_folder_longpoll(
        &client, &files::ListFolderLongpollArg::new("cursor".to_owned()).with_timeout(60)).unwrap();
    assert!(result.changes);

    let sent = client.last_request();
    assert_eq!(sent.url, "https://notify.dropboxapi.com/2/files/list_folder/longpoll");
    assert_eq!(sent.header("Authorization"), None);
    assert_eq!(sent.body_json(), serde_json::json!({"cursor": "cursor", "timeout": 60}));
}

#[test]
fn team_select_header() {
    let mut client = ScriptedClient::new([
        Canned::ok(r#"{"groups":[],"cursor":"c","has_more":false}"#),
    ]);
    client.team_select = Some(TeamSelect::User("dbmid:abc".to_owned()));
    team::groups_list(&client, &team::GroupsListArg::default()).unwrap();
    let sent = client.last_request();
    assert_eq!(sent.header("Dropbox-API-Select-User"), Some("dbmid:abc"));
    assert_eq!(sent.header("Dropbox-API-Select-Admin"), None);
}

#[test]
fn rpc_result_in_header_is_rejected() {
    let client = ScriptedClient::new([Canned::download(r#"{"result":"x"}"#, b"")]);
    let err = check::user(&client, &check::EchoArg::default()).unwrap_err();
    assert!(matches!(err, dropbox_bindings::Error::UnexpectedResponse(_)), "{err:?}");
}

#[test]
fn transport_failure_is_http_client_error() {
    let client = ScriptedClient::new([]);
    let err = check::user(&client, &check::EchoArg::default()).unwrap_err();
    assert!(matches!(err, dropbox_bindings::Error::HttpClient(_)), "{err:?}");
}
