#![warn(rust_2018_idioms)]

//
// Various tests for forward-compatibility.
// The API may send structs with fields the receiver doesn't know about, and unions with tags it
// doesn't know about. Neither may fail to decode.
//

use dropbox_bindings::{common, files, users};

#[test]
fn extra_fields() {
    let json = r#"{
        ".tag": "deleted",
        "name": "f",
        "some extra field": "whatever",
        "some more": {"some": "complex", "other": "stuff"},
        "parent_shared_folder_id": "spaghetti",
        "one more extra": "~~~~"
    }"#;
    let x = serde_json::from_str::<files::Metadata>(json).unwrap();
    let files::Metadata::Deleted(d) = x else {
        panic!("wrong variant");
    };
    assert_eq!("f", &d.name);
    assert_eq!(Some("spaghetti"), d.parent_shared_folder_id.as_deref());
}

#[test]
fn open_union_void() {
    let json = r#"{
        ".tag": "some other variant",
        "some field": "some value"
    }"#;
    let x = serde_json::from_str::<files::ListFolderLongpollError>(json).unwrap();
    assert!(matches!(x, files::ListFolderLongpollError::Other));
}

#[test]
fn open_union_fields() {
    let json = r#"{
        ".tag": "some other variant",
        "some field": "some value",
        "another field": "another value"
    }"#;
    let x = serde_json::from_str::<users::SpaceAllocation>(json).unwrap();
    assert!(matches!(x, users::SpaceAllocation::Other));
}

#[test]
fn open_union_new_field() {
    let json = r#"{
        ".tag": "individual",
        "allocated": 9999,
        "something else": "some value"
    }"#;
    let x = serde_json::from_str::<users::SpaceAllocation>(json).unwrap();
    let users::SpaceAllocation::Individual(indiv) = x else {
        panic!("wrong variant");
    };
    assert_eq!(indiv.allocated, 9999);
}

#[test]
fn void_union_with_fields() {
    let json = r#"{
        ".tag": "reset",
        "some field": "some value",
        "another field": "another value"
    }"#;
    let x = serde_json::from_str::<files::ListFolderLongpollError>(json).unwrap();
    assert!(matches!(x, files::ListFolderLongpollError::Reset));
}

#[test]
fn open_polymorphic_struct() {
    let json = r#"{
        ".tag": "some other variant",
        "root_namespace_id": "12345",
        "home_namespace_id": "67890"
    }"#;
    let x = serde_json::from_str::<common::RootInfo>(json).unwrap();
    assert!(matches!(x, common::RootInfo::Other));
}

#[test]
fn unknown_metadata_kind() {
    let json = r#"{".tag": "symlink", "name": "x"}"#;
    let x = serde_json::from_str::<files::Metadata>(json).unwrap();
    assert_eq!(files::Metadata::Other, x);
    assert_eq!("unrecognized Metadata", x.to_string());
}

#[test]
fn unknown_tag_on_argument_union() {
    let json = r#"{".tag": "overwrite_maybe"}"#;
    let x = serde_json::from_str::<files::WriteMode>(json).unwrap();
    assert_eq!(files::WriteMode::Other, x);
}

#[test]
fn other_variant_cannot_be_sent() {
    serde_json::to_string(&files::ListFolderLongpollError::Other).unwrap_err();
}
