//! Invariants of the route tables as a whole.

use std::collections::HashSet;
use dropbox_bindings::client_trait_common::{Endpoint, Style};
use dropbox_bindings::route::AuthKind;
use dropbox_bindings::routes;

#[test]
fn paths_are_unique() {
    let mut seen = HashSet::new();
    for route in routes::all() {
        assert!(seen.insert(route.path), "duplicate route {}", route.path);
    }
}

#[test]
fn each_table_stays_in_its_namespace() {
    let tables = [
        ("auth", routes::auth::ROUTES),
        ("check", routes::check::ROUTES),
        ("contacts", routes::contacts::ROUTES),
        ("file_properties", routes::file_properties::ROUTES),
        ("files", routes::files::ROUTES),
        ("sharing", routes::sharing::ROUTES),
        ("team", routes::team::ROUTES),
        ("users", routes::users::ROUTES),
    ];
    for (namespace, table) in tables {
        assert!(!table.is_empty(), "{namespace} has no routes");
        for route in table {
            assert_eq!(route.namespace(), namespace, "{} is in the wrong table", route.path);
            assert!(!route.name().is_empty());
        }
    }
}

#[test]
fn content_routes_move_bytes() {
    for route in routes::all() {
        let moves_bytes = matches!(route.style, Style::Upload | Style::Download);
        assert_eq!(
            moves_bytes,
            route.endpoint == Endpoint::Content,
            "{} is {:?} on {:?}", route.path, route.style, route.endpoint);
    }
}

#[test]
fn only_longpoll_uses_notify() {
    let notify: Vec<&str> = routes::all()
        .filter(|r| r.endpoint == Endpoint::Notify)
        .map(|r| r.path)
        .collect();
    assert_eq!(notify, ["files/list_folder/longpoll"]);
    assert!(routes::all().all(|r| r.endpoint != Endpoint::OAuth2));
}

#[test]
fn team_namespace_needs_team_auth() {
    for route in routes::team::ROUTES {
        assert_eq!(route.auth, AuthKind::Team, "{}", route.path);
    }
}

#[test]
fn known_routes() {
    let find = |path: &str| routes::all().find(|r| r.path == path).copied();

    let download = find("files/download").expect("files/download");
    assert_eq!(download.style, Style::Download);
    assert_eq!(download.url(), "https://content.dropboxapi.com/2/files/download");

    let app = find("check/app").expect("check/app");
    assert_eq!(app.auth, AuthKind::App);

    let longpoll = find("files/list_folder/longpoll").expect("longpoll");
    assert_eq!(longpoll.auth, AuthKind::Noauth);
}
