#![deny(rust_2018_idioms)]

//! This example illustrates a few basic Dropbox API operations: getting an OAuth2 token, listing
//! the contents of a folder recursively, and fetching a file given its path.

use std::collections::VecDeque;
use std::io::{self, Read, Write};
use dropbox_bindings::default_client::UserAuthDefaultClient;
use dropbox_bindings::files;

fn main() {
    env_logger::init();

    let token = match dropbox_bindings::oauth2::get_token_from_env_or_prompt() {
        Ok(token) => token,
        Err(e) => {
            eprintln!("Error getting OAuth2 token: {e}");
            std::process::exit(1);
        }
    };
    let client = UserAuthDefaultClient::new(token);

    if let Some(path) = std::env::args().nth(1) {
        eprintln!("downloading file {path}");
        eprintln!();
        match files::download(&client, &files::DownloadArg::new(path), None, None) {
            Ok(result) => {
                let mut body = result.body.expect("there must be a response body");
                let mut buf = [0u8; 4096];
                loop {
                    match body.read(&mut buf) {
                        Ok(0) => break,
                        Ok(len) => io::stdout().write_all(&buf[0..len]).unwrap(),
                        Err(e) => panic!("read error: {e}"),
                    }
                }
            }
            Err(dropbox_bindings::Error::Api(e)) => eprintln!("Download error: {e}"),
            Err(e) => eprintln!("Failed to make the request: {e}"),
        }
    } else {
        eprintln!("listing all files");
        match list_directory(&client, "/", true) {
            Ok(iterator) => {
                for entry_result in iterator {
                    match entry_result {
                        Ok(files::Metadata::Folder(entry)) => {
                            println!("Folder: {}", entry.path_display.unwrap_or(entry.name));
                        }
                        Ok(files::Metadata::File(entry)) => {
                            println!("File: {}", entry.path_display.unwrap_or(entry.name));
                        }
                        Ok(files::Metadata::Deleted(entry)) => {
                            panic!("unexpected deleted entry: {entry:?}");
                        }
                        Ok(other) => {
                            eprintln!("skipping unrecognized entry: {other:?}");
                        }
                        Err(e) => {
                            eprintln!("Error from files/list_folder_continue: {e}");
                            break;
                        }
                    }
                }
            }
            Err(e) => eprintln!("Error from files/list_folder: {e}"),
        }
    }
}

fn list_directory<'a>(client: &'a UserAuthDefaultClient, path: &str, recursive: bool)
    -> Result<DirectoryIterator<'a>, dropbox_bindings::Error<files::ListFolderError>>
{
    assert!(path.starts_with('/'), "path needs to be absolute (start with a '/')");
    let requested_path = if path == "/" {
        // Root folder should be requested as empty string
        String::new()
    } else {
        path.to_owned()
    };
    let result = files::list_folder(
        client,
        &files::ListFolderArg::new(requested_path).with_recursive(recursive))?;
    let cursor = if result.has_more { Some(result.cursor) } else { None };
    Ok(DirectoryIterator {
        client,
        buffer: result.entries.into(),
        cursor,
    })
}

struct DirectoryIterator<'a> {
    client: &'a UserAuthDefaultClient,
    buffer: VecDeque<files::Metadata>,
    cursor: Option<String>,
}

impl Iterator for DirectoryIterator<'_> {
    type Item = Result<files::Metadata, dropbox_bindings::Error<files::ListFolderContinueError>>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.buffer.is_empty() {
            let cursor = self.cursor.take()?;
            eprintln!("requesting more entries");
            match files::list_folder_continue(self.client, &files::ListFolderContinueArg::new(cursor)) {
                Ok(result) => {
                    self.buffer.extend(result.entries);
                    if result.has_more {
                        self.cursor = Some(result.cursor);
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
        self.buffer.pop_front().map(Ok)
    }
}
