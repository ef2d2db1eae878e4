use dropbox_bindings::common::PathRoot;
use dropbox_bindings::default_client::UserAuthDefaultClient;
use dropbox_bindings::files::{self, ListFolderArg};

#[test]
#[ignore] // requires a pre-configured app token; should be run separately
fn invalid_path_root() {
    let token = std::env::var("DBX_OAUTH_TOKEN").expect("DBX_OAUTH_TOKEN must be set");
    let mut client = UserAuthDefaultClient::new(token);
    client.set_path_root(&PathRoot::NamespaceId("1".to_owned())).unwrap();
    match files::list_folder(&client, &ListFolderArg::new(String::new())) {
        // If the oauth token is for an app which only has access to its app folder, then the path
        // root cannot be specified.
        Err(dropbox_bindings::Error::BadRequest(msg))
            if msg.contains("Path root is not supported for sandbox app") => (),

        // If the oauth token is for a "whole dropbox" app, then we should get a 422 whose error
        // summary names "no_permission". A change in the user's home nsid gives "invalid_root"
        // instead, which is not what a bogus nsid should produce.
        Err(dropbox_bindings::Error::ErrorSummary { code: 422, summary }) => {
            assert!(summary.starts_with("no_permission"), "unexpected error {summary:?}");
        }

        // Any other result is a bug.
        otherwise => panic!("wrong result: {otherwise:?}"),
    }
}

#[test]
fn other_path_root_cannot_be_set() {
    let mut client = UserAuthDefaultClient::new("token");
    client.set_path_root(&PathRoot::Other).unwrap_err();
    client.set_path_root(&PathRoot::Home).unwrap();
    client.clear_path_root();
}
