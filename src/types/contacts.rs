// Copyright (c) 2019-2024 Dropbox, Inc.

use serde::{Deserialize, Serialize};
use crate::types::common::EmailAddress;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct DeleteManualContactsArg {
    /// List of manually added contacts to be deleted.
    pub email_addresses: Vec<EmailAddress>,
}

impl DeleteManualContactsArg {
    pub fn new(email_addresses: Vec<EmailAddress>) -> Self {
        DeleteManualContactsArg { email_addresses }
    }
}

tagged_union! {
    pub enum DeleteManualContactsError: open {
        /// Can't delete contacts from this list. Make sure the list only has manually added
        /// contacts. The deletion was cancelled.
        ContactsNotFound(Vec<EmailAddress>) = "contacts_not_found",
    }
}

api_error!(DeleteManualContactsError);
