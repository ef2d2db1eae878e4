#![allow(dead_code)]

//! A client which answers every request with the next of a list of canned responses, and records
//! what it was asked, so tests can check both directions of the wire.

use std::collections::VecDeque;
use std::sync::Mutex;
use bytes::Bytes;
use dropbox_bindings::client_trait_common::{HttpRequest, TeamSelect};
use dropbox_bindings::{async_client_trait as nonblocking, client_trait as sync};
use dropbox_bindings::Error;

/// One response the client will hand back.
pub struct Canned {
    pub status: u16,
    pub result_header: Option<String>,
    pub body: Vec<u8>,
}

impl Canned {
    /// A 200 with a JSON body.
    pub fn ok(json: &str) -> Self {
        Self::status(200, json)
    }

    /// Any status with the given body.
    pub fn status(status: u16, body: &str) -> Self {
        Self { status, result_header: None, body: body.as_bytes().to_vec() }
    }

    /// A 200 with the result in the `Dropbox-API-Result` header, and content in the body.
    pub fn download(result_json: &str, content: &[u8]) -> Self {
        Self {
            status: 200,
            result_header: Some(result_json.to_owned()),
            body: content.to_vec(),
        }
    }
}

/// What the client was asked to do.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

pub struct ScriptedRequest {
    url: String,
    headers: Vec<(String, String)>,
}

impl HttpRequest for ScriptedRequest {
    fn set_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }
}

#[derive(Default)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Canned>>,
    requests: Mutex<Vec<Recorded>>,
    pub token: Option<String>,
    pub app_credentials: Option<(String, String)>,
    pub path_root: Option<String>,
    pub team_select: Option<TeamSelect>,
}

impl ScriptedClient {
    pub fn new(responses: impl IntoIterator<Item = Canned>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            token: Some("test-token".to_owned()),
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request was made")
    }

    fn answer(&self, request: ScriptedRequest, body: &[u8]) -> Result<Canned, Error> {
        self.requests.lock().unwrap().push(Recorded {
            url: request.url,
            headers: request.headers,
            body: body.to_vec(),
        });
        self.responses.lock().unwrap()
            .pop_front()
            .ok_or_else(|| Error::HttpClient(Box::new(std::io::Error::other("no response left"))))
    }
}

impl sync::HttpClient for ScriptedClient {
    type Request = ScriptedRequest;

    fn execute(&self, request: Self::Request, body: &[u8]) -> Result<sync::HttpRequestResultRaw, Error> {
        let canned = self.answer(request, body)?;
        Ok(sync::HttpRequestResultRaw {
            status: canned.status,
            result_header: canned.result_header,
            content_length: Some(canned.body.len() as u64),
            body: Box::new(std::io::Cursor::new(canned.body)),
        })
    }

    fn new_request(&self, url: &str) -> Self::Request {
        ScriptedRequest { url: url.to_owned(), headers: vec![] }
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn app_credentials(&self) -> Option<(&str, &str)> {
        self.app_credentials.as_ref().map(|(k, s)| (k.as_str(), s.as_str()))
    }

    fn path_root(&self) -> Option<&str> {
        self.path_root.as_deref()
    }

    fn team_select(&self) -> Option<&TeamSelect> {
        self.team_select.as_ref()
    }
}

impl sync::NoauthClient for ScriptedClient {}
impl sync::UserAuthClient for ScriptedClient {}
impl sync::TeamAuthClient for ScriptedClient {}
impl sync::AppAuthClient for ScriptedClient {}

impl nonblocking::HttpClient for ScriptedClient {
    type Request = ScriptedRequest;

    async fn execute(
        &self,
        request: Self::Request,
        body: Bytes,
    ) -> Result<nonblocking::HttpRequestResultRaw, Error> {
        // ensure the future isn't immediately ready
        tokio::task::yield_now().await;

        let canned = self.answer(request, &body)?;
        Ok(nonblocking::HttpRequestResultRaw {
            status: canned.status,
            result_header: canned.result_header,
            content_length: Some(canned.body.len() as u64),
            body: Box::new(futures::io::Cursor::new(canned.body)),
        })
    }

    fn new_request(&self, url: &str) -> Self::Request {
        ScriptedRequest { url: url.to_owned(), headers: vec![] }
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn app_credentials(&self) -> Option<(&str, &str)> {
        self.app_credentials.as_ref().map(|(k, s)| (k.as_str(), s.as_str()))
    }

    fn path_root(&self) -> Option<&str> {
        self.path_root.as_deref()
    }

    fn team_select(&self) -> Option<&TeamSelect> {
        self.team_select.as_ref()
    }
}

impl nonblocking::NoauthClient for ScriptedClient {}
impl nonblocking::UserAuthClient for ScriptedClient {}
impl nonblocking::TeamAuthClient for ScriptedClient {}
impl nonblocking::AppAuthClient for ScriptedClient {}
