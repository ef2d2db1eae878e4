#![deny(rust_2018_idioms)]

//! The async flavor of the basic demo: getting an OAuth2 token, listing the contents of a folder
//! recursively, stat-ing a path, and fetching a file given its path.

use std::io::{self, Write};
use tokio_util::compat::FuturesAsyncReadCompatExt;
use dropbox_bindings::async_routes::files;
use dropbox_bindings::default_async_client::{NoauthDefaultClient, UserAuthDefaultClient};
use dropbox_bindings::oauth2::{self, AuthorizeUrlBuilder, Oauth2Type, PkceCode};

enum Operation {
    Usage,
    List(String),
    Download(String),
    Stat(String),
}

fn parse_args() -> Operation {
    let mut ctor: Option<fn(String) -> Operation> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => return Operation::Usage,
            "--list" => {
                ctor = Some(Operation::List);
            }
            "--download" => {
                ctor = Some(Operation::Download);
            }
            "--stat" => {
                ctor = Some(Operation::Stat);
            }
            path if path.starts_with('/') => {
                return if let Some(ctor) = ctor {
                    ctor(arg)
                } else {
                    eprintln!("Either --download, --list or --stat must be specified");
                    Operation::Usage
                };
            }
            _ => {
                eprintln!("Unrecognized option {arg:?}");
                eprintln!();
                return Operation::Usage;
            }
        }
    }
    Operation::Usage
}

fn prompt(msg: &str) -> String {
    eprint!("{msg}: ");
    io::stderr().flush().unwrap();
    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();
    input.trim().to_owned()
}

async fn get_token() -> dropbox_bindings::Result<String> {
    if let Ok(token) = std::env::var("DBX_OAUTH_TOKEN") {
        return Ok(token);
    }
    let client_id = std::env::var("DBX_CLIENT_ID")
        .unwrap_or_else(|_| prompt("Give me a Dropbox API app key"));
    let flow = Oauth2Type::PKCE(PkceCode::new()?);
    let url = AuthorizeUrlBuilder::new(&client_id, &flow).build();
    eprintln!("Open this URL in your browser:");
    eprintln!("{url}");
    eprintln!();
    let auth_code = prompt("Then paste the code here");

    let token = oauth2::obtain_access_token_async(
        &NoauthDefaultClient::default(), &flow, &client_id, None, &auth_code, None).await?;
    eprintln!("Next time set this environment variable to reuse this token:");
    eprintln!("  DBX_OAUTH_TOKEN={}", token.access_token);
    Ok(token.access_token)
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let op = parse_args();

    if let Operation::Usage = op {
        eprintln!("usage: {} [option]", std::env::args().next().unwrap());
        eprintln!("    options:");
        eprintln!("        --help | -h          view this text");
        eprintln!("        --download <path>    copy the contents of <path> to stdout");
        eprintln!("        --list <path>        recursively list all files under <path>");
        eprintln!("        --stat <path>        list all metadata of <path>");
        eprintln!();
        eprintln!("    If a Dropbox OAuth token is given in the environment variable");
        eprintln!("    DBX_OAUTH_TOKEN, it will be used, otherwise you will be prompted for");
        eprintln!("    authentication interactively.");
        std::process::exit(1);
    }

    let token = match get_token().await {
        Ok(token) => token,
        Err(e) => {
            eprintln!("Error getting OAuth2 token: {e}");
            std::process::exit(1);
        }
    };
    let client = UserAuthDefaultClient::new(token);

    match op {
        Operation::Usage => (), // handled above
        Operation::Download(path) => {
            eprintln!("Copying file to stdout: {path}");
            eprintln!();

            match files::download(&client, &files::DownloadArg::new(path), None, None).await {
                Ok(result) => {
                    match tokio::io::copy(
                        &mut result.body.expect("there must be a response body").compat(),
                        &mut tokio::io::stdout(),
                    ).await {
                        Ok(n) => eprintln!("Downloaded {n} bytes"),
                        Err(e) => eprintln!("I/O error: {e}"),
                    }
                }
                Err(e) => eprintln!("Error from files/download: {e}"),
            }
        }
        Operation::List(mut path) => {
            eprintln!("Listing recursively: {path}");

            // Special case: the root folder is empty string. All other paths need to start with '/'.
            if path == "/" {
                path.clear();
            }

            let mut result = match files::list_folder(
                &client,
                &files::ListFolderArg::new(path).with_recursive(true),
            ).await {
                Ok(result) => result,
                Err(e) => {
                    eprintln!("Error from files/list_folder: {e}");
                    return;
                }
            };

            let mut num_entries = result.entries.len();
            let mut num_pages = 1;

            loop {
                for entry in result.entries {
                    match entry {
                        files::Metadata::Folder(entry) => {
                            println!("Folder: {}", entry.path_display.unwrap_or(entry.name));
                        }
                        files::Metadata::File(entry) => {
                            println!("File: {}", entry.path_display.unwrap_or(entry.name));
                        }
                        files::Metadata::Deleted(entry) => {
                            panic!("unexpected deleted entry: {entry:?}");
                        }
                        other => {
                            eprintln!("skipping unrecognized entry: {other:?}");
                        }
                    }
                }

                if !result.has_more {
                    break;
                }

                result = match files::list_folder_continue(
                    &client,
                    &files::ListFolderContinueArg::new(result.cursor),
                ).await {
                    Ok(result) => {
                        num_pages += 1;
                        num_entries += result.entries.len();
                        result
                    }
                    Err(e) => {
                        eprintln!("Error from files/list_folder_continue: {e}");
                        break;
                    }
                }
            }

            eprintln!("{num_entries} entries from {num_pages} result pages");
        }
        Operation::Stat(path) => {
            eprintln!("listing metadata for: {path}");

            let arg = files::GetMetadataArg::new(path)
                .with_include_media_info(true)
                .with_include_deleted(true)
                .with_include_has_explicit_shared_members(true);

            match files::get_metadata(&client, &arg).await {
                Ok(result) => println!("{result:#?}"),
                Err(e) => eprintln!("Error from files/get_metadata: {e}"),
            }
        }
    }
}
