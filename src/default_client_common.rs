// Copyright (c) 2019-2024 Dropbox, Inc.

use std::borrow::Cow;
use std::fmt::{Display, Write};

macro_rules! impl_set_path_root {
    ($self:ident) => {
        /// Set a root which all subsequent paths are evaluated relative to.
        ///
        /// The default, if this function is not called, is to behave as if it was called with
        /// [`PathRoot::Home`](crate::types::common::PathRoot::Home).
        ///
        /// See <https://www.dropbox.com/developers/reference/path-root-header-modes> for more
        /// information.
        ///
        /// Fails only for [`PathRoot::Other`](crate::types::common::PathRoot::Other), which cannot
        /// be sent to the server.
        pub fn set_path_root(
            &mut $self,
            path_root: &crate::types::common::PathRoot,
        ) -> crate::Result<()> {
            $self.path_root = Some(serde_json::to_string(path_root)?);
            Ok(())
        }

        /// Go back to evaluating paths relative to the user's home folder.
        pub fn clear_path_root(&mut $self) {
            $self.path_root = None;
        }
    }
}

pub(crate) use impl_set_path_root;

/// Set a header, escaping the one header whose value is JSON which may contain any character.
///
/// Non-ASCII and 0x7F in a header value need to be escaped per the HTTP spec, and neither HTTP
/// client does this for us. Only `Dropbox-API-Arg` can carry them.
pub(crate) fn set_header_escaped<R>(name: &str, value: &str, set: impl FnOnce(&str, &str) -> R) -> R {
    if name.eq_ignore_ascii_case("dropbox-api-arg") {
        set(name, json_escape_header(value).as_ref())
    } else {
        set(name, value)
    }
}

/// Pull `Dropbox-API-Result` and `Content-Length` out of a response, given a lookup of a header's
/// value as text.
pub(crate) fn response_headers<'a, E: Display>(
    get: impl Fn(&str) -> Option<Result<&'a str, E>>,
) -> crate::Result<(Option<String>, Option<u64>)> {
    let text = |name: &str| get(name)
        .transpose()
        .map_err(|e| crate::Error::UnexpectedResponse(format!("invalid {name} header: {e}")));

    let result_header = text("Dropbox-API-Result")?.map(str::to_owned);
    let content_length = text("Content-Length")?
        .map(|s| s.trim().parse::<u64>()
            .map_err(|e| crate::Error::UnexpectedResponse(
                format!("invalid Content-Length {s:?}: {e}"))))
        .transpose()?;
    Ok((result_header, content_length))
}

/// Replaces any non-ASCII characters (and 0x7f) with JSON-style '\uXXXX' sequence. Otherwise,
/// returns it unmodified without any additional allocation or copying.
fn json_escape_header(s: &str) -> Cow<'_, str> {
    // DEL (0x7F) is ASCII but still not allowed in a header value, so str::is_ascii() won't do.
    let Some(first) = s.find(|c: char| !c.is_ascii() || c == '\x7f') else {
        return Cow::Borrowed(s);
    };
    let mut out = String::with_capacity(s.len() + 8);
    out.push_str(&s[..first]);
    for c in s[first..].chars() {
        if !c.is_ascii() || c == '\x7f' {
            // Characters outside the BMP become a UTF-16 surrogate pair, as JSON requires.
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                // Writing to a String cannot fail.
                let _ = write!(out, "\\u{:04x}", unit);
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn response_header_lookup() {
        let headers = [("Dropbox-API-Result", "{}"), ("Content-Length", "12")];
        let get = |name: &str| headers.iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| Ok::<_, std::convert::Infallible>(*v));
        assert_eq!(response_headers(get).unwrap(), (Some("{}".to_owned()), Some(12)));

        let none = |_: &str| None::<Result<&str, std::convert::Infallible>>;
        assert_eq!(response_headers(none).unwrap(), (None, None));

        let bad = |name: &str| (name == "Content-Length").then_some(Ok::<_, std::convert::Infallible>("lots"));
        assert!(matches!(response_headers(bad), Err(crate::Error::UnexpectedResponse(_))));
    }

    #[test]
    fn json_escape() {
        assert_eq!(Cow::Borrowed("foobar"), json_escape_header("foobar"));
        assert_eq!(
            Cow::<'_, str>::Owned("tro\\u0161kovi".to_owned()),
            json_escape_header("troškovi"));
        assert_eq!(
            Cow::<'_, str>::Owned(
                "{\"path\": \"/\\u00fc\\u00f1\\u00eec\\u00f8d\\u00e9_and_\\u007f\"}".to_owned()),
            json_escape_header("{\"path\": \"/üñîcødé_and_\x7f\"}"));
        assert_eq!(
            Cow::<'_, str>::Owned("almost,\\u007f but not quite".to_owned()),
            json_escape_header("almost,\x7f but not quite"));
    }

    #[test]
    fn astral_chars_escape_as_surrogate_pairs() {
        assert_eq!(json_escape_header("/\u{1f600}"), "/\\ud83d\\ude00");
    }
}
