// Copyright (c) 2019-2024 Dropbox, Inc.

//! Routes of the `auth` namespace.

macro_rules! auth_routes {
    ($gen:ident) => {
        $gen! {
            /// Disables the access token used to authenticate the call. If there is a corresponding
            /// refresh token for the access token, this disables that refresh token, as well as any
            /// other access tokens for that refresh token.
            rpc token_revoke() -> (), crate::NoError
                = UserAuthClient Api "auth/token/revoke";

            /// Creates an OAuth 2.0 access token from the supplied OAuth 1.0 access token.
            rpc token_from_oauth1(&TokenFromOAuth1Arg) -> TokenFromOAuth1Result, TokenFromOAuth1Error
                = AppAuthClient Api "auth/token/from_oauth1";
        }
    };
}

auth_routes!(route_index);
