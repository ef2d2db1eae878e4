// Copyright (c) 2019-2024 Dropbox, Inc.

//! Routes of the `file_properties` namespace.

macro_rules! file_properties_routes {
    ($gen:ident) => {
        $gen! {
            /// Add property groups to a Dropbox file. See `templates_add_for_user` or
            /// `templates_add_for_team` to create new templates.
            rpc properties_add(&AddPropertiesArg) -> (), AddPropertiesError
                = UserAuthClient Api "file_properties/properties/add";

            /// Overwrite property groups associated with a file. This endpoint should be used
            /// instead of `properties_update` when property groups are being updated via a
            /// "snapshot" instead of via a "delta".
            rpc properties_overwrite(&OverwritePropertyGroupArg) -> (), InvalidPropertyGroupError
                = UserAuthClient Api "file_properties/properties/overwrite";

            /// Permanently removes the specified property group from the file.
            rpc properties_remove(&RemovePropertiesArg) -> (), RemovePropertiesError
                = UserAuthClient Api "file_properties/properties/remove";

            /// Get the template identifiers for a user.
            rpc templates_list_for_user() -> ListTemplateResult, TemplateError
                = UserAuthClient Api "file_properties/templates/list_for_user";

            /// Get the schema for a specified template.
            rpc templates_get_for_user(&GetTemplateArg) -> GetTemplateResult, TemplateError
                = UserAuthClient Api "file_properties/templates/get_for_user";
        }
    };
}

file_properties_routes!(route_index);
