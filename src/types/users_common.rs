// Copyright (c) 2019-2024 Dropbox, Inc.

pub type AccountId = String;

tagged_union! {
    /// What type of account this user has.
    pub enum AccountType: open {
        /// The basic account type.
        Basic = "basic",
        /// The Dropbox Pro account type.
        Pro = "pro",
        /// The Dropbox Business account type.
        Business = "business",
    }
}
