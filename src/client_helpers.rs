// Copyright (c) 2019-2024 Dropbox, Inc.

//! The request machinery shared by every route function, in sync and async flavors.

use std::io::{ErrorKind, Read};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use futures::{AsyncRead, AsyncReadExt};
use serde::de::DeserializeOwned;
use serde::ser::Serialize;
use crate::Error;
use crate::async_client_trait as nonblocking;
use crate::client_trait as sync;
use crate::client_trait_common::{HttpRequest, ParamsType, Style, TeamSelect};
use crate::route::{AuthKind, Route};

/// Everything a client knows which may end up in a request's headers.
pub(crate) struct RequestContext<'a> {
    pub token: Option<&'a str>,
    pub app_credentials: Option<(&'a str, &'a str)>,
    pub path_root: Option<&'a str>,
    pub team_select: Option<&'a TeamSelect>,
}

impl<'a> RequestContext<'a> {
    pub fn of_sync(client: &'a impl sync::HttpClient) -> Self {
        Self {
            token: client.token(),
            app_credentials: client.app_credentials(),
            path_root: client.path_root(),
            team_select: client.team_select(),
        }
    }

    pub fn of_async(client: &'a impl nonblocking::HttpClient) -> Self {
        Self {
            token: client.token(),
            app_credentials: client.app_credentials(),
            path_root: client.path_root(),
            team_select: client.team_select(),
        }
    }
}

/// Set all the headers a route needs on a fresh request.
pub(crate) fn prepare_request<R: HttpRequest>(
    mut req: R,
    route: &Route,
    ctx: &RequestContext<'_>,
    params: &str,
    params_type: ParamsType,
    range_start: Option<u64>,
    range_end: Option<u64>,
) -> R {
    req = req.set_header("User-Agent", concat!("Dropbox-API-Rust/", env!("CARGO_PKG_VERSION")));

    match route.auth {
        AuthKind::User | AuthKind::Team => {
            if let Some(token) = ctx.token {
                req = req.set_header("Authorization", &format!("Bearer {token}"));
            }
        }
        AuthKind::App => {
            if let Some((key, secret)) = ctx.app_credentials {
                let encoded = BASE64.encode(format!("{key}:{secret}"));
                req = req.set_header("Authorization", &format!("Basic {encoded}"));
            }
        }
        AuthKind::Noauth => (),
    }

    if let Some(path_root) = ctx.path_root {
        req = req.set_header("Dropbox-API-Path-Root", path_root);
    }

    if route.auth == AuthKind::Team {
        if let Some(team_select) = ctx.team_select {
            req = req.set_header(team_select.header_name(), team_select.member_id());
        }
    }

    req = match (range_start, range_end) {
        (Some(start), Some(end)) => req.set_header("Range", &format!("bytes={start}-{end}")),
        (Some(start), None) => req.set_header("Range", &format!("bytes={start}-")),
        (None, Some(end)) => req.set_header("Range", &format!("bytes=-{end}")),
        (None, None) => req,
    };

    match route.style {
        Style::Rpc => {
            req = req.set_header("Content-Type", params_type.content_type());
        }
        Style::Upload => {
            req = req.set_header("Dropbox-API-Arg", params);
            req = req.set_header("Content-Type", "application/octet-stream");
        }
        Style::Download => {
            req = req.set_header("Dropbox-API-Arg", params);
        }
    }

    req
}

/// Where the result of a successful call is to be found.
enum ResultLocation {
    Body,
    Header(String),
}

fn locate_result(style: Style, result_header: Option<String>) -> crate::Result<ResultLocation> {
    match (style, result_header) {
        (Style::Rpc | Style::Upload, None) => Ok(ResultLocation::Body),
        (Style::Rpc | Style::Upload, Some(header)) => Err(Error::UnexpectedResponse(format!(
            "unexpected response in header, expected it in the body: {header}"))),
        (Style::Download, Some(header)) => Ok(ResultLocation::Header(header)),
        (Style::Download, None) => Err(Error::UnexpectedResponse(
            "expected a Dropbox-API-Result header".to_owned())),
    }
}

/// Routes with no result send back `null` or sometimes nothing at all.
fn parse_result<T: DeserializeOwned>(json: &str) -> serde_json::Result<T> {
    if json.trim().is_empty() {
        serde_json::from_str("null")
    } else {
        serde_json::from_str(json)
    }
}

fn failure<E: DeserializeOwned>(route: &Route, code: u16, response: String) -> Error<E> {
    error!("HTTP {code} from {}", route.path);
    Error::from_status(code, response)
}

fn read_error(e: std::io::Error) -> Error {
    if e.kind() == ErrorKind::InvalidData {
        Error::UnexpectedResponse(format!("invalid response: {e}"))
    } else {
        Error::HttpClient(Box::new(e))
    }
}

pub(crate) fn sync_body_to_string(body: &mut (dyn Read + Send)) -> crate::Result<String> {
    let mut s = String::new();
    body.read_to_string(&mut s).map_err(read_error)?;
    Ok(s)
}

pub(crate) async fn body_to_string(body: &mut (dyn AsyncRead + Unpin + Send)) -> crate::Result<String> {
    let mut s = String::new();
    body.read_to_string(&mut s).await.map_err(read_error)?;
    Ok(s)
}

/// Which bytes go in the request body: the arguments for RPC routes, the content for uploads.
fn request_body<'a>(style: Style, params: &'a str, body: Option<&'a [u8]>) -> &'a [u8] {
    match style {
        Style::Rpc => params.as_bytes(),
        Style::Upload => body.unwrap_or_default(),
        Style::Download => &[],
    }
}

/// Make a call with already-encoded arguments, using a blocking client.
#[allow(clippy::too_many_arguments)]
pub(crate) fn sync_execute<T, E, C>(
    client: &C,
    route: &Route,
    params: String,
    params_type: ParamsType,
    body: Option<&[u8]>,
    range_start: Option<u64>,
    range_end: Option<u64>,
) -> Result<sync::HttpRequestResult<T>, Error<E>>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
    C: sync::HttpClient,
{
    let url = route.url();
    debug!("request for {url}");
    let ctx = RequestContext::of_sync(client);
    let req = prepare_request(
        client.new_request(&url), route, &ctx, &params, params_type, range_start, range_end);

    let sync::HttpRequestResultRaw { status, result_header, content_length, mut body } = client
        .execute(req, request_body(route.style, &params, body))
        .map_err(|e| e.typed())?;

    if !(200..300).contains(&status) {
        let response = sync_body_to_string(&mut body).map_err(|e| e.typed())?;
        return Err(failure(route, status, response));
    }

    match locate_result(route.style, result_header).map_err(|e| e.typed())? {
        ResultLocation::Body => {
            let response = sync_body_to_string(&mut body).map_err(|e| e.typed())?;
            Ok(sync::HttpRequestResult {
                result: parse_result(&response)?,
                content_length: None,
                body: None,
            })
        }
        ResultLocation::Header(json) => Ok(sync::HttpRequestResult {
            result: parse_result(&json)?,
            content_length,
            body: Some(body),
        }),
    }
}

/// Call a route using a blocking client, returning the result along with the response body if the
/// route has one.
pub fn sync_request_with_body<T, E, P, C>(
    client: &C,
    route: &Route,
    params: &P,
    body: Option<&[u8]>,
    range_start: Option<u64>,
    range_end: Option<u64>,
) -> Result<sync::HttpRequestResult<T>, Error<E>>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
    P: Serialize + ?Sized,
    C: sync::HttpClient,
{
    let params = serde_json::to_string(params)?;
    sync_execute(client, route, params, ParamsType::Json, body, range_start, range_end)
}

/// Call a route using a blocking client.
pub fn sync_request<T, E, P, C>(
    client: &C,
    route: &Route,
    params: &P,
    body: Option<&[u8]>,
) -> Result<T, Error<E>>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
    P: Serialize + ?Sized,
    C: sync::HttpClient,
{
    sync_request_with_body(client, route, params, body, None, None)
        .map(|sync::HttpRequestResult { result, .. }| result)
}

/// Make a call with already-encoded arguments, using an async client.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn execute<T, E, C>(
    client: &C,
    route: &Route,
    params: String,
    params_type: ParamsType,
    body: Option<Bytes>,
    range_start: Option<u64>,
    range_end: Option<u64>,
) -> Result<nonblocking::HttpRequestResult<T>, Error<E>>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
    C: nonblocking::HttpClient,
{
    let url = route.url();
    debug!("request for {url}");
    let req = {
        let ctx = RequestContext::of_async(client);
        prepare_request(
            client.new_request(&url), route, &ctx, &params, params_type, range_start, range_end)
    };

    let request_body = match route.style {
        Style::Rpc => Bytes::from(params),
        Style::Upload => body.unwrap_or_default(),
        Style::Download => Bytes::new(),
    };

    let nonblocking::HttpRequestResultRaw { status, result_header, content_length, mut body } = client
        .execute(req, request_body)
        .await
        .map_err(|e| e.typed())?;

    if !(200..300).contains(&status) {
        let response = body_to_string(&mut body).await.map_err(|e| e.typed())?;
        return Err(failure(route, status, response));
    }

    match locate_result(route.style, result_header).map_err(|e| e.typed())? {
        ResultLocation::Body => {
            let response = body_to_string(&mut body).await.map_err(|e| e.typed())?;
            Ok(nonblocking::HttpRequestResult {
                result: parse_result(&response)?,
                content_length: None,
                body: None,
            })
        }
        ResultLocation::Header(json) => Ok(nonblocking::HttpRequestResult {
            result: parse_result(&json)?,
            content_length,
            body: Some(body),
        }),
    }
}

/// Call a route using an async client, returning the result along with the response body if the
/// route has one.
pub async fn request_with_body<T, E, P, C>(
    client: &C,
    route: &Route,
    params: &P,
    body: Option<Bytes>,
    range_start: Option<u64>,
    range_end: Option<u64>,
) -> Result<nonblocking::HttpRequestResult<T>, Error<E>>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
    P: Serialize + ?Sized,
    C: nonblocking::HttpClient,
{
    let params = serde_json::to_string(params)?;
    execute(client, route, params, ParamsType::Json, body, range_start, range_end).await
}

/// Call a route using an async client.
pub async fn request<T, E, P, C>(
    client: &C,
    route: &Route,
    params: &P,
    body: Option<Bytes>,
) -> Result<T, Error<E>>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
    P: Serialize + ?Sized,
    C: nonblocking::HttpClient,
{
    request_with_body(client, route, params, body, None, None)
        .await
        .map(|nonblocking::HttpRequestResult { result, .. }| result)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::client_trait_common::Endpoint;

    #[derive(Default)]
    struct Recorder {
        headers: Vec<(String, String)>,
    }

    impl HttpRequest for Recorder {
        fn set_header(mut self, name: &str, value: &str) -> Self {
            self.headers.push((name.to_owned(), value.to_owned()));
            self
        }
    }

    impl Recorder {
        fn get(&self, name: &str) -> Option<&str> {
            self.headers.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
        }
    }

    const CTX: RequestContext<'static> = RequestContext {
        token: Some("tok"),
        app_credentials: Some(("key", "secret")),
        path_root: None,
        team_select: None,
    };

    fn route(style: Style, auth: AuthKind) -> Route {
        Route { path: "files/x", endpoint: Endpoint::Api, style, auth }
    }

    #[test]
    fn rpc_headers() {
        let req = prepare_request(
            Recorder::default(), &route(Style::Rpc, AuthKind::User), &CTX, "{}", ParamsType::Json,
            None, None);
        assert_eq!(req.get("Authorization"), Some("Bearer tok"));
        assert_eq!(req.get("Content-Type"), Some("application/json"));
        assert_eq!(req.get("Dropbox-API-Arg"), None);
        assert!(req.get("User-Agent").unwrap().starts_with("Dropbox-API-Rust/"));
    }

    #[test]
    fn app_auth_is_basic() {
        let req = prepare_request(
            Recorder::default(), &route(Style::Rpc, AuthKind::App), &CTX, "{}", ParamsType::Json,
            None, None);
        assert_eq!(req.get("Authorization"), Some("Basic a2V5OnNlY3JldA=="));
    }

    #[test]
    fn noauth_sends_no_credentials() {
        let req = prepare_request(
            Recorder::default(), &route(Style::Rpc, AuthKind::Noauth), &CTX, "{}", ParamsType::Json,
            None, None);
        assert_eq!(req.get("Authorization"), None);
    }

    #[test]
    fn download_headers_and_ranges() {
        let r = route(Style::Download, AuthKind::User);
        let req = prepare_request(
            Recorder::default(), &r, &CTX, r#"{"path":"/a"}"#, ParamsType::Json, Some(5), None);
        assert_eq!(req.get("Dropbox-API-Arg"), Some(r#"{"path":"/a"}"#));
        assert_eq!(req.get("Range"), Some("bytes=5-"));
        assert_eq!(req.get("Content-Type"), None);

        let req = prepare_request(
            Recorder::default(), &r, &CTX, "{}", ParamsType::Json, Some(0), Some(9));
        assert_eq!(req.get("Range"), Some("bytes=0-9"));

        let req = prepare_request(
            Recorder::default(), &r, &CTX, "{}", ParamsType::Json, None, Some(9));
        assert_eq!(req.get("Range"), Some("bytes=-9"));
    }

    #[test]
    fn team_select_only_on_team_routes() {
        let select = TeamSelect::Admin("dbmid:1".to_owned());
        let ctx = RequestContext { team_select: Some(&select), ..CTX };
        let req = prepare_request(
            Recorder::default(), &route(Style::Rpc, AuthKind::Team), &ctx, "{}", ParamsType::Json,
            None, None);
        assert_eq!(req.get("Dropbox-API-Select-Admin"), Some("dbmid:1"));

        let req = prepare_request(
            Recorder::default(), &route(Style::Rpc, AuthKind::User), &ctx, "{}", ParamsType::Json,
            None, None);
        assert_eq!(req.get("Dropbox-API-Select-Admin"), None);
    }

    #[test]
    fn result_location() {
        assert!(matches!(locate_result(Style::Rpc, None), Ok(ResultLocation::Body)));
        assert!(matches!(locate_result(Style::Upload, Some("{}".to_owned())),
            Err(Error::UnexpectedResponse(_))));
        assert!(matches!(locate_result(Style::Download, None), Err(Error::UnexpectedResponse(_))));
    }

    #[test]
    fn empty_result_is_unit() {
        let () = parse_result("").unwrap();
        let () = parse_result("null").unwrap();
    }
}
