// Copyright (c) 2019-2024 Dropbox, Inc.

//! Types of the `file_properties` namespace.
//!
//! Property templates describe a set of named fields; property groups are instances of a template
//! attached to a file or folder.

use serde::{Deserialize, Serialize};

pub type PathOrId = String;
pub type TemplateId = String;

/// Raw key/value data to be associated with a Dropbox file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct PropertyField {
    /// Key of the property field associated with a file and template.
    pub name: String,
    /// Value of the property field associated with a file and template.
    pub value: String,
}

impl PropertyField {
    pub fn new(name: String, value: String) -> Self {
        PropertyField { name, value }
    }
}

/// A subset of the property fields described by the corresponding template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct PropertyGroup {
    /// A unique identifier for the associated template.
    pub template_id: TemplateId,
    /// The actual properties associated with the template.
    pub fields: Vec<PropertyField>,
}

impl PropertyGroup {
    pub fn new(template_id: TemplateId, fields: Vec<PropertyField>) -> Self {
        PropertyGroup { template_id, fields }
    }
}

tagged_union! {
    /// Data type of the given property field added.
    pub enum PropertyType: open {
        /// The associated property field will be of type string. Unicode is supported.
        String = "string",
    }
}

/// Defines how a single property field may be structured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct PropertyFieldTemplate {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub type_field: PropertyType,
}

impl PropertyFieldTemplate {
    pub fn new(name: String, description: String, type_field: PropertyType) -> Self {
        PropertyFieldTemplate { name, description, type_field }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct GetTemplateResult {
    /// Display name for the template.
    pub name: String,
    /// Description for the template.
    pub description: String,
    /// Definitions of the property fields associated with this template.
    pub fields: Vec<PropertyFieldTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct GetTemplateArg {
    /// An identifier for template added by route `templates/add_for_user`.
    pub template_id: TemplateId,
}

impl GetTemplateArg {
    pub fn new(template_id: TemplateId) -> Self {
        GetTemplateArg { template_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct ListTemplateResult {
    /// List of identifiers for templates added by the user.
    pub template_ids: Vec<TemplateId>,
}

tagged_union! {
    /// Limits which property templates are returned alongside file metadata.
    pub enum TemplateFilterBase: open {
        /// Only templates with an ID in the supplied list will be returned (a subset of templates
        /// will be returned).
        FilterSome(Vec<TemplateId>) = "filter_some",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct AddPropertiesArg {
    /// A unique identifier for the file or folder.
    pub path: PathOrId,
    /// The property groups which are to be added to a Dropbox file. No two groups in the input
    /// should refer to the same template.
    pub property_groups: Vec<PropertyGroup>,
}

impl AddPropertiesArg {
    pub fn new(path: PathOrId, property_groups: Vec<PropertyGroup>) -> Self {
        AddPropertiesArg { path, property_groups }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct OverwritePropertyGroupArg {
    pub path: PathOrId,
    /// The property groups "snapshot" updates to force apply. No two groups in the input should
    /// refer to the same template.
    pub property_groups: Vec<PropertyGroup>,
}

impl OverwritePropertyGroupArg {
    pub fn new(path: PathOrId, property_groups: Vec<PropertyGroup>) -> Self {
        OverwritePropertyGroupArg { path, property_groups }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct RemovePropertiesArg {
    pub path: PathOrId,
    /// A list of identifiers for a template created by route `templates/add_for_user`.
    pub property_template_ids: Vec<TemplateId>,
}

impl RemovePropertiesArg {
    pub fn new(path: PathOrId, property_template_ids: Vec<TemplateId>) -> Self {
        RemovePropertiesArg { path, property_template_ids }
    }
}

tagged_union! {
    pub enum LookupError: open {
        MalformedPath(String) = "malformed_path",
        /// There is nothing at the given path.
        NotFound = "not_found",
        /// We were expecting a file, but the given path refers to something that isn't a file.
        NotFile = "not_file",
        /// We were expecting a folder, but the given path refers to something that isn't a folder.
        NotFolder = "not_folder",
        /// The file cannot be transferred because the content is restricted.
        RestrictedContent = "restricted_content",
    }
}

tagged_union! {
    pub enum TemplateError: open {
        /// Template does not exist for the given identifier.
        TemplateNotFound(TemplateId) = "template_not_found",
        /// You do not have permission to modify this template.
        RestrictedContent = "restricted_content",
    }
}

tagged_union! {
    pub enum InvalidPropertyGroupError: open {
        TemplateNotFound(TemplateId) = "template_not_found",
        RestrictedContent = "restricted_content",
        Path(LookupError) = "path",
        /// This folder cannot be tagged. Tagging folders is not supported for team-owned
        /// templates.
        UnsupportedFolder = "unsupported_folder",
        /// One or more of the supplied property field values is too large.
        PropertyFieldTooLarge = "property_field_too_large",
        /// One or more of the supplied property fields does not conform to the template
        /// specifications.
        DoesNotFitTemplate = "does_not_fit_template",
        /// There are 2 or more property groups referring to the same templates in the input.
        DuplicatePropertyGroups = "duplicate_property_groups",
    }
}

tagged_union! {
    pub enum AddPropertiesError: open {
        TemplateNotFound(TemplateId) = "template_not_found",
        RestrictedContent = "restricted_content",
        Path(LookupError) = "path",
        UnsupportedFolder = "unsupported_folder",
        PropertyFieldTooLarge = "property_field_too_large",
        DoesNotFitTemplate = "does_not_fit_template",
        DuplicatePropertyGroups = "duplicate_property_groups",
        /// A property group associated with this template and file already exists.
        PropertyGroupAlreadyExists = "property_group_already_exists",
    }
}

tagged_union! {
    pub enum LookUpPropertiesError: open {
        /// No property group was found.
        PropertyGroupNotFound = "property_group_not_found",
    }
}

tagged_union! {
    pub enum RemovePropertiesError: open {
        TemplateNotFound(TemplateId) = "template_not_found",
        RestrictedContent = "restricted_content",
        Path(LookupError) = "path",
        UnsupportedFolder = "unsupported_folder",
        PropertyGroupLookup(LookUpPropertiesError) = "property_group_lookup",
    }
}

api_error!(
    LookupError,
    TemplateError,
    InvalidPropertyGroupError,
    AddPropertiesError,
    LookUpPropertiesError,
    RemovePropertiesError,
);
