// Copyright (c) 2019-2024 Dropbox, Inc.

macro_rules! check_routes {
    ($gen:ident) => {
        $gen! {
            /// This endpoint performs App Authentication, validating the supplied app key and
            /// secret, and returns the supplied string, to allow you to test your code and
            /// connection to the Dropbox API. It has no other effect.
            rpc app(&EchoArg) -> EchoResult, crate::NoError
                = AppAuthClient Api "check/app";

            /// This endpoint performs User Authentication, validating the supplied access token,
            /// and returns the supplied string, to allow you to test your code and connection to
            /// the Dropbox API. It has no other effect.
            rpc user(&EchoArg) -> EchoResult, crate::NoError
                = UserAuthClient Api "check/user";
        }
    };
}

check_routes!(route_index);
