#![deny(rust_2018_idioms)]

//! This example uploads a local file of any size with an upload session: the file is sent in
//! chunks, each its own request, and committed to a path in Dropbox at the end.
//!
//! Rate limiting is handled here by sleeping for as long as the server asks; the bindings
//! themselves never retry.

use std::fs::File;
use std::io::{self, Read};
use std::process::exit;
use std::thread::sleep;
use std::time::{Duration, Instant, SystemTime};
use dropbox_bindings::default_client::UserAuthDefaultClient;
use dropbox_bindings::files;

/// Chunks must be a multiple of 4 MiB, and at most 150 MiB.
const CHUNK_SIZE: usize = 4 * 4 * 1024 * 1024;

macro_rules! fatal {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
        exit(2);
    }
}

fn human_number(n: u64) -> String {
    let mut f = n as f64;
    let prefixes = ['k', 'M', 'G', 'T', 'E'];
    let mut mag = 0;
    while mag < prefixes.len() {
        if f < 1000. {
            break;
        }
        f /= 1000.;
        mag += 1;
    }
    if mag == 0 {
        format!("{n} ")
    } else {
        format!("{:.02} {}", f, prefixes[mag - 1])
    }
}

fn iso8601(t: SystemTime) -> String {
    let timestamp: i64 = match t.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(duration) => duration.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    };

    chrono::DateTime::from_timestamp(timestamp, 0 /* nsecs */)
        .expect("timestamp out of range")
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}

/// Fill as much of the buffer as possible, stopping early only at the end of the input.
fn large_read(source: &mut impl Read, buffer: &mut [u8]) -> io::Result<usize> {
    let mut nread = 0;
    while nread < buffer.len() {
        match source.read(&mut buffer[nread..]) {
            Ok(0) => return Ok(nread),
            Ok(n) => nread += n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => (),
            Err(e) => return Err(e),
        }
    }
    Ok(nread)
}

/// Run the request until it is not rate limited.
fn with_backoff<T, E>(
    what: &str,
    mut f: impl FnMut() -> Result<T, dropbox_bindings::Error<E>>,
) -> Result<T, dropbox_bindings::Error<E>> {
    loop {
        match f() {
            Err(dropbox_bindings::Error::RateLimited { retry_after_seconds, .. }) => {
                let secs = retry_after_seconds.max(1);
                eprintln!("{what}: rate limited, sleeping {secs} seconds");
                sleep(Duration::from_secs(u64::from(secs)));
            }
            other => return other,
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(source), Some(dest)) = (args.next(), args.next()) else {
        eprintln!("usage: {} <local source file> <dropbox destination path>",
            std::env::args().next().unwrap_or_default());
        exit(1);
    };

    let mut file = match File::open(&source) {
        Ok(f) => f,
        Err(e) => {
            fatal!("failed to open {source}: {e}");
        }
    };
    let modified = file.metadata().and_then(|m| m.modified()).map(iso8601).ok();

    let token = match dropbox_bindings::oauth2::get_token_from_env_or_prompt() {
        Ok(token) => token,
        Err(e) => {
            fatal!("Error getting OAuth2 token: {e}");
        }
    };
    let client = UserAuthDefaultClient::new(token);

    let start_time = Instant::now();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut offset = 0u64;

    let len = large_read(&mut file, &mut buf).unwrap_or_else(|e| {
        fatal!("read error: {e}");
    });
    let session = match with_backoff("start", || files::upload_session_start(
        &client, &files::UploadSessionStartArg::default(), &buf[..len]))
    {
        Ok(result) => result,
        Err(e) => {
            fatal!("Error starting upload session: {e}");
        }
    };
    offset += len as u64;
    eprintln!("started session {}", session.session_id);

    let mut chunk = large_read(&mut file, &mut buf).unwrap_or_else(|e| {
        fatal!("read error: {e}");
    });
    // The last chunk goes with the finish call; every full chunk before it is appended.
    while chunk == CHUNK_SIZE {
        let cursor = files::UploadSessionCursor::new(session.session_id.clone(), offset);
        let arg = files::UploadSessionAppendArg::new(cursor);
        if let Err(e) = with_backoff("append", || files::upload_session_append_v2(
            &client, &arg, &buf[..chunk]))
        {
            fatal!("Error appending at offset {offset}: {e}");
        }
        offset += chunk as u64;

        let rate = offset as f64 / start_time.elapsed().as_secs_f64().max(0.001);
        eprintln!("{}B uploaded, {}B/s", human_number(offset), human_number(rate as u64));

        chunk = large_read(&mut file, &mut buf).unwrap_or_else(|e| {
            fatal!("read error: {e}");
        });
    }

    let cursor = files::UploadSessionCursor::new(session.session_id.clone(), offset);
    let mut commit = files::CommitInfo::new(dest).with_mode(files::WriteMode::Overwrite);
    if let Some(modified) = modified {
        commit = commit.with_client_modified(modified);
    }
    let arg = files::UploadSessionFinishArg::new(cursor, commit);
    match with_backoff("finish", || files::upload_session_finish(&client, &arg, &buf[..chunk])) {
        Ok(meta) => {
            eprintln!("upload done in {:.1}s", start_time.elapsed().as_secs_f64());
            println!("{meta:#?}");
        }
        Err(e) => {
            fatal!("Error finishing upload: {e}");
        }
    }
}
