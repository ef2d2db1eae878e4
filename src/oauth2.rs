// Copyright (c) 2019-2024 Dropbox, Inc.

//! The minimum of OAuth2 needed to get an access token: building the URL the user visits to
//! authorize an app, and trading the resulting authorization code for a token.
//!
//! Tokens are not refreshed or cached here. Callers hand a token string to one of the clients and
//! get a new one when it stops working.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use ring::rand::{SecureRandom, SystemRandom};
use serde::Deserialize;
use url::Url;
use url::form_urlencoded::Serializer as UrlEncoder;
use crate::Error;
use crate::client_trait_common::{Endpoint, ParamsType, Style};
use crate::route::{AuthKind, Route};

const AUTHORIZE_URL: &str = "https://www.dropbox.com/oauth2/authorize";

const TOKEN_ROUTE: Route = Route {
    path: "oauth2/token",
    endpoint: Endpoint::OAuth2,
    style: Style::Rpc,
    auth: AuthKind::Noauth,
};

/// Which type of OAuth2 flow to use.
#[derive(Debug, Clone)]
pub enum Oauth2Type {
    /// Authorization yields a temporary authorization code which must be turned into an OAuth2
    /// token by making another call. This requires the app secret, so it is only suitable for
    /// server-side apps.
    AuthorizationCode,

    /// Like `AuthorizationCode`, but with a code verifier instead of the app secret. Suitable for
    /// apps which cannot keep a secret, like desktop or command-line programs.
    PKCE(PkceCode),

    /// Authorization directly returns an OAuth2 token. This can only be used with a redirect URI
    /// where the Dropbox server redirects the user's web browser to the program.
    ImplicitGrant,
}

impl Oauth2Type {
    /// The `response_type` query parameter for this flow.
    pub fn response_type_str(&self) -> &'static str {
        match self {
            Oauth2Type::AuthorizationCode | Oauth2Type::PKCE(_) => "code",
            Oauth2Type::ImplicitGrant => "token",
        }
    }
}

/// A proof key for the PKCE flow: 128 random characters from the unreserved URL alphabet.
#[derive(Debug, Clone)]
pub struct PkceCode {
    code: String,
}

impl PkceCode {
    /// Generate a new random code.
    pub fn new() -> crate::Result<Self> {
        let mut bytes = [0u8; 96];
        SystemRandom::new()
            .fill(&mut bytes)
            .map_err(|_| Error::HttpClient(Box::new(std::io::Error::other(
                "no secure random number source available"))))?;
        // 96 bytes base64-encode to exactly 128 characters.
        Ok(Self { code: URL_SAFE_NO_PAD.encode(bytes) })
    }

    /// The code verifier, sent when trading the authorization code for a token.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The S256 code challenge, sent with the authorization request.
    pub fn s256(&self) -> String {
        let digest = ring::digest::digest(&ring::digest::SHA256, self.code.as_bytes());
        URL_SAFE_NO_PAD.encode(digest.as_ref())
    }
}

/// Builds a URL that can be given to the user to visit to have Dropbox authorize your app.
#[derive(Debug)]
pub struct AuthorizeUrlBuilder<'a> {
    client_id: &'a str,
    flow_type: &'a Oauth2Type,
    token_access_type: Option<&'a str>,
    force_reapprove: bool,
    force_reauthentication: bool,
    disable_signup: bool,
    redirect_uri: Option<&'a str>,
    state: Option<&'a str>,
    require_role: Option<&'a str>,
    locale: Option<&'a str>,
    scope: Option<&'a str>,
}

impl<'a> AuthorizeUrlBuilder<'a> {
    /// Return a new builder for the given client ID and auth flow type, with all fields set to
    /// defaults.
    pub fn new(client_id: &'a str, flow_type: &'a Oauth2Type) -> Self {
        Self {
            client_id,
            flow_type,
            token_access_type: None,
            force_reapprove: false,
            force_reauthentication: false,
            disable_signup: false,
            redirect_uri: None,
            state: None,
            require_role: None,
            locale: None,
            scope: None,
        }
    }

    /// `online` or `offline`. Offline access also returns a refresh token, which these bindings
    /// pass through in [`TokenResponse`] but never use.
    pub fn token_access_type(mut self, value: &'a str) -> Self {
        self.token_access_type = Some(value);
        self
    }

    /// Force the user to approve the app again even if they previously approved it.
    pub fn force_reapprove(mut self, value: bool) -> Self {
        self.force_reapprove = value;
        self
    }

    /// Force the user to reauthenticate even if they are already signed in.
    pub fn force_reauthentication(mut self, value: bool) -> Self {
        self.force_reauthentication = value;
        self
    }

    /// Prevent the user from signing up for a new account from the authorization page.
    pub fn disable_signup(mut self, value: bool) -> Self {
        self.disable_signup = value;
        self
    }

    /// Where to redirect the user after authorization. Required for
    /// [`Oauth2Type::ImplicitGrant`].
    pub fn redirect_uri(mut self, value: &'a str) -> Self {
        self.redirect_uri = Some(value);
        self
    }

    /// Up to 500 bytes of arbitrary data passed back to the redirect URI.
    pub fn state(mut self, value: &'a str) -> Self {
        self.state = Some(value);
        self
    }

    /// `work` or `personal`: which kind of account the user must sign in with.
    pub fn require_role(mut self, value: &'a str) -> Self {
        self.require_role = Some(value);
        self
    }

    /// Locale of the authorization page, as an IETF language tag.
    pub fn locale(mut self, value: &'a str) -> Self {
        self.locale = Some(value);
        self
    }

    /// Space-separated list of scopes to request. Defaults to every scope the app has.
    pub fn scope(mut self, value: &'a str) -> Self {
        self.scope = Some(value);
        self
    }

    /// Build the URL.
    pub fn build(self) -> Url {
        let mut params = UrlEncoder::new(String::new());
        params.append_pair("response_type", self.flow_type.response_type_str());
        params.append_pair("client_id", self.client_id);
        if let Oauth2Type::PKCE(code) = self.flow_type {
            params.append_pair("code_challenge", &code.s256());
            params.append_pair("code_challenge_method", "S256");
        }
        if let Some(value) = self.token_access_type {
            params.append_pair("token_access_type", value);
        }
        if self.force_reapprove {
            params.append_pair("force_reapprove", "true");
        }
        if self.force_reauthentication {
            params.append_pair("force_reauthentication", "true");
        }
        if self.disable_signup {
            params.append_pair("disable_signup", "true");
        }
        if let Some(value) = self.redirect_uri {
            params.append_pair("redirect_uri", value);
        }
        if let Some(value) = self.state {
            params.append_pair("state", value);
        }
        if let Some(value) = self.require_role {
            params.append_pair("require_role", value);
        }
        if let Some(value) = self.locale {
            params.append_pair("locale", value);
        }
        if let Some(value) = self.scope {
            params.append_pair("scope", value);
        }

        // A constant, known-good URL.
        let mut url = Url::parse(AUTHORIZE_URL).unwrap_or_else(|_| unreachable!());
        url.set_query(Some(&params.finish()));
        url
    }
}

/// What the token endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TokenResponse {
    /// The token to use with [`UserAuthClient`](crate::client_trait::UserAuthClient) or
    /// [`TeamAuthClient`](crate::client_trait::TeamAuthClient) routes.
    pub access_token: String,

    /// Usually `bearer`.
    pub token_type: String,

    /// Seconds until `access_token` expires, for short-lived tokens.
    #[serde(default)]
    pub expires_in: Option<u64>,

    /// Present when `offline` access was requested.
    #[serde(default)]
    pub refresh_token: Option<String>,

    /// The account the token belongs to, for user tokens.
    #[serde(default)]
    pub account_id: Option<String>,

    /// The team the token belongs to, for team tokens.
    #[serde(default)]
    pub team_id: Option<String>,

    /// Space-separated scopes granted.
    #[serde(default)]
    pub scope: Option<String>,
}

/// The form body for trading an authorization code for a token.
fn token_form(
    flow_type: &Oauth2Type,
    client_id: &str,
    client_secret: Option<&str>,
    auth_code: &str,
    redirect_uri: Option<&str>,
) -> crate::Result<String> {
    let mut params = UrlEncoder::new(String::new());
    params.append_pair("code", auth_code);
    params.append_pair("grant_type", "authorization_code");
    params.append_pair("client_id", client_id);
    match flow_type {
        Oauth2Type::AuthorizationCode => {
            let secret = client_secret.ok_or_else(|| Error::UnexpectedResponse(
                "the authorization code flow needs the app secret".to_owned()))?;
            params.append_pair("client_secret", secret);
        }
        Oauth2Type::PKCE(code) => {
            params.append_pair("code_verifier", code.code());
        }
        Oauth2Type::ImplicitGrant => {
            return Err(Error::UnexpectedResponse(
                "the implicit grant flow returns the token directly; there is no code to trade"
                    .to_owned()));
        }
    }
    if let Some(value) = redirect_uri {
        params.append_pair("redirect_uri", value);
    }
    Ok(params.finish())
}

/// Trade an authorization code for an access token, using a blocking client.
///
/// `client_secret` is required for [`Oauth2Type::AuthorizationCode`] and ignored for PKCE.
/// `redirect_uri` must match the one given to [`AuthorizeUrlBuilder`], if any.
pub fn obtain_access_token(
    client: &impl crate::client_trait::NoauthClient,
    flow_type: &Oauth2Type,
    client_id: &str,
    client_secret: Option<&str>,
    auth_code: &str,
    redirect_uri: Option<&str>,
) -> crate::Result<TokenResponse> {
    let form = token_form(flow_type, client_id, client_secret, auth_code, redirect_uri)?;
    info!("requesting OAuth2 token");
    let resp = crate::client_helpers::sync_execute(
        client, &TOKEN_ROUTE, form, ParamsType::Form, None, None, None)?;
    info!("got OAuth2 token");
    Ok(resp.result)
}

/// Trade an authorization code for an access token, using an async client.
///
/// Same arguments as [`obtain_access_token`].
pub async fn obtain_access_token_async(
    client: &impl crate::async_client_trait::NoauthClient,
    flow_type: &Oauth2Type,
    client_id: &str,
    client_secret: Option<&str>,
    auth_code: &str,
    redirect_uri: Option<&str>,
) -> crate::Result<TokenResponse> {
    let form = token_form(flow_type, client_id, client_secret, auth_code, redirect_uri)?;
    info!("requesting OAuth2 token");
    let resp = crate::client_helpers::execute(
        client, &TOKEN_ROUTE, form, ParamsType::Form, None, None, None).await?;
    info!("got OAuth2 token");
    Ok(resp.result)
}

/// Get an access token from the `DBX_OAUTH_TOKEN` environment variable, or if that is not set,
/// by running the PKCE flow interactively on the terminal.
///
/// The app key is taken from `DBX_CLIENT_ID` or prompted for. Meant for demos and tests.
#[cfg(feature = "default_client")]
#[cfg_attr(docsrs, doc(cfg(feature = "default_client")))]
pub fn get_token_from_env_or_prompt() -> crate::Result<String> {
    if let Ok(token) = std::env::var("DBX_OAUTH_TOKEN") {
        info!("using token from DBX_OAUTH_TOKEN");
        return Ok(token);
    }

    let client_id = match std::env::var("DBX_CLIENT_ID") {
        Ok(id) => id,
        Err(_) => prompt("Give me a Dropbox API app key")?,
    };

    let flow_type = Oauth2Type::PKCE(PkceCode::new()?);
    let url = AuthorizeUrlBuilder::new(&client_id, &flow_type).build();
    eprintln!("Open this URL in your browser:");
    eprintln!("{url}");
    eprintln!();
    let auth_code = prompt("Then paste the code here")?;

    let client = crate::default_client::NoauthDefaultClient::default();
    let token = obtain_access_token(&client, &flow_type, &client_id, None, &auth_code, None)?;
    eprintln!("Next time set DBX_OAUTH_TOKEN to reuse this token.");
    Ok(token.access_token)
}

#[cfg(feature = "default_client")]
fn prompt(msg: &str) -> crate::Result<String> {
    use std::io::{self, Write};
    eprint!("{msg}: ");
    io::stderr().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_owned())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pkce_code_shape() {
        let code = PkceCode::new().unwrap();
        assert_eq!(code.code().len(), 128);
        assert!(code.code().bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'));
        assert_ne!(code.code(), PkceCode::new().unwrap().code());
    }

    #[test]
    fn s256_challenge() {
        // From RFC 7636, appendix B.
        let code = PkceCode { code: "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk".to_owned() };
        assert_eq!(code.s256(), "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
    }

    #[test]
    fn authorize_url() {
        let url = AuthorizeUrlBuilder::new("app key", &Oauth2Type::AuthorizationCode)
            .force_reapprove(true)
            .redirect_uri("https://localhost/cb")
            .build();
        assert_eq!(url.host_str(), Some("www.dropbox.com"));
        assert_eq!(url.path(), "/oauth2/authorize");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![
            ("response_type".to_owned(), "code".to_owned()),
            ("client_id".to_owned(), "app key".to_owned()),
            ("force_reapprove".to_owned(), "true".to_owned()),
            ("redirect_uri".to_owned(), "https://localhost/cb".to_owned()),
        ]);
    }

    #[test]
    fn pkce_url_carries_challenge() {
        let flow = Oauth2Type::PKCE(PkceCode::new().unwrap());
        let url = AuthorizeUrlBuilder::new("k", &flow).build();
        let challenge = url.query_pairs()
            .find(|(k, _)| k == "code_challenge")
            .map(|(_, v)| v.into_owned());
        let Oauth2Type::PKCE(code) = &flow else { unreachable!() };
        assert_eq!(challenge, Some(code.s256()));
        assert!(url.query_pairs().any(|(k, v)| k == "code_challenge_method" && v == "S256"));
    }

    #[test]
    fn implicit_grant_asks_for_token() {
        let url = AuthorizeUrlBuilder::new("k", &Oauth2Type::ImplicitGrant).build();
        assert!(url.query_pairs().any(|(k, v)| k == "response_type" && v == "token"));
    }

    #[test]
    fn token_forms() {
        let form = token_form(
            &Oauth2Type::AuthorizationCode, "id", Some("s3cret"), "the code", None).unwrap();
        assert_eq!(form, "code=the+code&grant_type=authorization_code&client_id=id&client_secret=s3cret");

        assert!(token_form(&Oauth2Type::AuthorizationCode, "id", None, "c", None).is_err());
        assert!(token_form(&Oauth2Type::ImplicitGrant, "id", None, "c", None).is_err());

        let code = PkceCode::new().unwrap();
        let form = token_form(
            &Oauth2Type::PKCE(code.clone()), "id", None, "c", Some("https://x/")).unwrap();
        assert!(form.contains(&format!("code_verifier={}", code.code())));
        assert!(form.ends_with("redirect_uri=https%3A%2F%2Fx%2F"));
    }

    #[test]
    fn token_response() {
        let resp: TokenResponse = serde_json::from_str(r#"{
            "access_token": "sl.abc",
            "token_type": "bearer",
            "expires_in": 14400,
            "scope": "files.content.read",
            "uid": "12345",
            "account_id": "dbid:x"
        }"#).unwrap();
        assert_eq!(resp.access_token, "sl.abc");
        assert_eq!(resp.expires_in, Some(14400));
        assert_eq!(resp.refresh_token, None);
    }
}
