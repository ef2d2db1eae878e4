use dropbox_bindings::files::{self, Metadata};

#[test]
fn null_fields_elided() {
    // Struct fields with optional or default values don't need to be serialized.
    let value = Metadata::File(files::FileMetadata::new(
        "name".to_owned(),
        "id".to_owned(),
        "client_modified".to_owned(),
        "server_modified".to_owned(),
        "rev".to_owned(),
        1337,
        // Many other optional fields not populated.
    ));

    // Serialized value should only contain these fields, and should not have the optional fields
    // included, like `"path_lower": null`, or fields at their default, like
    // `"is_downloadable": true`.
    let expected = serde_json::json!({
        ".tag": "file",
        "name": "name",
        "id": "id",
        "client_modified": "client_modified",
        "server_modified": "server_modified",
        "rev": "rev",
        "size": 1337,
    });

    let s = serde_json::to_string_pretty(&value).unwrap();
    let deser = serde_json::from_str::<serde_json::Value>(&s).unwrap();
    assert_eq!(expected, deser);

    // Make sure deserializing it also works and we get our starting value back.
    let roundtrip = serde_json::from_str::<Metadata>(&s).unwrap();
    assert_eq!(roundtrip, value);
}

#[test]
fn missing_null_and_default() {
    let a = r#"{
        ".tag": "file",
        "name": "name",
        "id": "id",
        "client_modified": "client_modified",
        "server_modified": "server_modified",
        "rev": "rev",
        "size": 1337
    }"#;

    // Same as above, but add two more fields
    // path_lower, set to null
    // is_downloadable, set to the default value specified for this field
    let b = r#"{
        ".tag": "file",
        "name": "name",
        "id": "id",
        "client_modified": "client_modified",
        "server_modified": "server_modified",
        "rev": "rev",
        "size": 1337,
        "path_lower": null,
        "is_downloadable": true
    }"#;

    // These should both deserialize to the same value.
    let a_de = serde_json::from_str::<Metadata>(a).unwrap();
    let b_de = serde_json::from_str::<Metadata>(b).unwrap();
    assert_eq!(a_de, b_de);
}

#[test]
fn non_default_flag_is_sent() {
    let arg = files::ListFolderArg::new("/photos".to_owned())
        .with_recursive(true)
        .with_include_mounted_folders(false);
    let json = serde_json::to_value(&arg).unwrap();
    assert_eq!(json, serde_json::json!({
        "path": "/photos",
        "recursive": true,
        "include_mounted_folders": false,
    }));
}

#[test]
fn write_mode_update_carries_rev() {
    let arg = files::UploadArg::new("/a.txt".to_owned())
        .with_mode(files::WriteMode::Update("a1c10ce0dd78".to_owned()));
    let json = serde_json::to_value(&arg).unwrap();
    assert_eq!(json["mode"], serde_json::json!({".tag": "update", "update": "a1c10ce0dd78"}));
}
