// Copyright (c) 2019-2024 Dropbox, Inc.

macro_rules! contacts_routes {
    ($gen:ident) => {
        $gen! {
            /// Removes all manually added contacts. You'll still keep contacts who are on your team
            /// or who you imported. New contacts will be added when you share.
            rpc delete_manual_contacts() -> (), crate::NoError
                = UserAuthClient Api "contacts/delete_manual_contacts";

            /// Removes manually added contacts from the given list.
            rpc delete_manual_contacts_batch(&DeleteManualContactsArg) -> (), DeleteManualContactsError
                = UserAuthClient Api "contacts/delete_manual_contacts_batch";
        }
    };
}

contacts_routes!(route_index);
