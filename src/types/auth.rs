// Copyright (c) 2019-2024 Dropbox, Inc.

//! Types of the `auth` namespace, and the errors every route may return for authentication or
//! rate-limiting problems.

use serde::{Deserialize, Serialize};

tagged_union! {
    /// Errors occurred during authentication.
    pub enum AuthError: open {
        /// The access token is invalid.
        InvalidAccessToken = "invalid_access_token",
        /// The user specified in 'Dropbox-API-Select-User' is no longer on the team.
        InvalidSelectUser = "invalid_select_user",
        /// The user specified in 'Dropbox-API-Select-Admin' is not a Dropbox Business team admin.
        InvalidSelectAdmin = "invalid_select_admin",
        /// The user has been suspended.
        UserSuspended = "user_suspended",
        /// The access token has expired.
        ExpiredAccessToken = "expired_access_token",
        /// The access token does not have the required scope to access the route.
        MissingScope{TokenScopeError} = "missing_scope",
        /// The route is not available to public.
        RouteAccessDenied = "route_access_denied",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TokenScopeError {
    /// The required scope to access the route.
    pub required_scope: String,
}

impl TokenScopeError {
    pub fn new(required_scope: String) -> Self {
        TokenScopeError { required_scope }
    }
}

tagged_union! {
    /// Error occurred because the account doesn't have permission to access the resource.
    pub enum AccessError: open {
        /// Current account type cannot access the resource.
        InvalidAccountType(InvalidAccountTypeError) = "invalid_account_type",
        /// Current account cannot access Paper.
        PaperAccessDenied(PaperAccessError) = "paper_access_denied",
        /// Team doesn't have access to the resource.
        TeamAccessDenied = "team_access_denied",
        /// The caller lacks permission for the resource.
        NoPermission = "no_permission",
    }
}

tagged_union! {
    pub enum InvalidAccountTypeError: open {
        /// Current account type doesn't have permission to access this route endpoint.
        Endpoint = "endpoint",
        /// Current account type doesn't have permission to access this feature.
        Feature = "feature",
    }
}

tagged_union! {
    pub enum PaperAccessError: open {
        /// Paper is disabled.
        PaperDisabled = "paper_disabled",
        /// The provided user has not used Paper yet.
        NotPaperUser = "not_paper_user",
    }
}

tagged_union! {
    pub enum RateLimitReason: open {
        /// You are making too many requests in the past few minutes.
        TooManyRequests = "too_many_requests",
        /// There are currently too many write operations happening in the user's Dropbox.
        TooManyWriteOperations = "too_many_write_operations",
    }
}

/// Error occurred because the app is being rate limited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct RateLimitError {
    /// The reason why the app is being rate limited.
    pub reason: RateLimitReason,
    /// The number of seconds that the app should wait before making another request.
    #[serde(default = "default_retry_after")]
    pub retry_after: u64,
}

fn default_retry_after() -> u64 {
    1
}

impl RateLimitError {
    pub fn new(reason: RateLimitReason) -> Self {
        RateLimitError { reason, retry_after: default_retry_after() }
    }

    pub fn with_retry_after(mut self, value: u64) -> Self {
        self.retry_after = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TokenFromOAuth1Arg {
    /// The supplied OAuth 1.0 access token.
    pub oauth1_token: String,
    /// The token secret associated with the supplied access token.
    pub oauth1_token_secret: String,
}

impl TokenFromOAuth1Arg {
    pub fn new(oauth1_token: String, oauth1_token_secret: String) -> Self {
        TokenFromOAuth1Arg { oauth1_token, oauth1_token_secret }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TokenFromOAuth1Result {
    /// The OAuth 2.0 token generated from the supplied OAuth 1.0 token.
    pub oauth2_token: String,
}

tagged_union! {
    pub enum TokenFromOAuth1Error: open {
        /// Part or all of the OAuth 1.0 access token info is invalid.
        InvalidOauth1TokenInfo = "invalid_oauth1_token_info",
        /// The authorized app does not match the app associated with the supplied access token.
        AppIdMismatch = "app_id_mismatch",
    }
}

api_error!(AuthError, AccessError, InvalidAccountTypeError, PaperAccessError, TokenFromOAuth1Error);

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_scope_is_inline() {
        let e: AuthError = serde_json::from_value(json!({
            ".tag": "missing_scope",
            "required_scope": "files.content.read"
        })).unwrap();
        assert_eq!(e, AuthError::MissingScope(TokenScopeError::new("files.content.read".to_owned())));
    }

    #[test]
    fn rate_limit_retry_after_defaults() {
        let e: RateLimitError = serde_json::from_value(json!({
            "reason": {".tag": "too_many_requests"}
        })).unwrap();
        assert_eq!(e, RateLimitError::new(RateLimitReason::TooManyRequests));
    }
}
