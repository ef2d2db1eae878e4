// Copyright (c) 2019-2024 Dropbox, Inc.

macro_rules! users_routes {
    ($gen:ident) => {
        $gen! {
            /// Get information about a user's account.
            rpc get_account(&GetAccountArg) -> BasicAccount, GetAccountError
                = UserAuthClient Api "users/get_account";

            /// Get information about multiple user accounts. At most 300 accounts may be queried
            /// per request.
            rpc get_account_batch(&GetAccountBatchArg) -> Vec<BasicAccount>, GetAccountBatchError
                = UserAuthClient Api "users/get_account_batch";

            /// Get information about the current user's account.
            rpc get_current_account() -> FullAccount, crate::NoError
                = UserAuthClient Api "users/get_current_account";

            /// Get the space usage information for the current user's account.
            rpc get_space_usage() -> SpaceUsage, crate::NoError
                = UserAuthClient Api "users/get_space_usage";
        }
    };
}

users_routes!(route_index);
