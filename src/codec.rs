// Copyright (c) 2019-2024 Dropbox, Inc.

//! JSON encoding of Dropbox tagged unions.
//!
//! A union value is a JSON object with a `.tag` discriminator. Depending on the member, the payload
//! is either absent (void members), stored under a key named after the tag (union, list, primitive
//! and optional payloads), or inlined next to the tag (struct payloads). Void members may also be
//! sent as a bare string.
//!
//! The `tagged_union!` macro declares an enum and implements `Serialize`, `Deserialize` and
//! `Display` for it in terms of the helpers in this module.

use serde::de::{self, Deserialize, DeserializeOwned, Deserializer};
use serde::ser::{self, Serialize};
use serde_json::{Map, Value};

/// The discriminator key of every tagged union.
pub(crate) const TAG: &str = ".tag";

/// A union value split into its discriminator and the rest of its fields.
pub(crate) struct Tagged {
    tag: String,
    fields: Map<String, Value>,
}

impl Tagged {
    pub(crate) fn into_parts(self) -> (String, Map<String, Value>) {
        (self.tag, self.fields)
    }
}

impl<'de> Deserialize<'de> for Tagged {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(tag) => Ok(Tagged { tag, fields: Map::new() }),
            Value::Object(mut fields) => match fields.remove(TAG) {
                Some(Value::String(tag)) => Ok(Tagged { tag, fields }),
                Some(other) => Err(de::Error::invalid_type(unexpected(&other), &"a string tag")),
                None => Err(de::Error::missing_field(TAG)),
            },
            other => Err(de::Error::invalid_type(unexpected(&other), &"a tagged union")),
        }
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Null => de::Unexpected::Unit,
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Number(_) => de::Unexpected::Other("number"),
        Value::String(s) => de::Unexpected::Str(s),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Object(_) => de::Unexpected::Map,
    }
}

/// Decode a payload stored under the key named after its tag. A missing key reads as `null`, so
/// optional payloads come out as `None` and required ones fail.
pub(crate) fn decode_field<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    tag: &str,
) -> Result<T, serde_json::Error> {
    serde_json::from_value(fields.remove(tag).unwrap_or(Value::Null))
}

/// Decode a struct payload whose fields sit next to the tag.
pub(crate) fn decode_inline<T: DeserializeOwned>(
    fields: Map<String, Value>,
) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(fields))
}

fn tag_only(tag: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(TAG.to_owned(), Value::String(tag.to_owned()));
    map
}

pub(crate) fn encode_void(tag: &str) -> Result<Value, serde_json::Error> {
    Ok(Value::Object(tag_only(tag)))
}

pub(crate) fn encode_field<T: Serialize + ?Sized>(
    tag: &str,
    payload: &T,
) -> Result<Value, serde_json::Error> {
    let mut map = tag_only(tag);
    let value = serde_json::to_value(payload)?;
    if !value.is_null() {
        map.insert(tag.to_owned(), value);
    }
    Ok(Value::Object(map))
}

pub(crate) fn encode_inline<T: Serialize + ?Sized>(
    tag: &str,
    payload: &T,
) -> Result<Value, serde_json::Error> {
    match serde_json::to_value(payload)? {
        Value::Object(mut map) => {
            map.insert(TAG.to_owned(), Value::String(tag.to_owned()));
            Ok(Value::Object(map))
        }
        _ => Err(ser::Error::custom(format!("payload of {tag:?} did not serialize as an object"))),
    }
}

// Helpers for struct fields with server-side defaults: they are left out of the payload when equal
// to the default.

pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}

pub(crate) fn is_true(b: &bool) -> bool {
    *b
}

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Declare a tagged union.
///
/// ```ignore
/// tagged_union! {
///     /// Doc comment.
///     pub enum WriteMode: open {
///         Add = "add",                        // void member
///         Update(String) = "update",          // payload under the "update" key
///     }
/// }
/// tagged_union! {
///     pub enum Metadata: open {
///         File{FileMetadata} = "file",        // struct fields inlined next to ".tag"
///     }
/// }
/// ```
///
/// Every union gets a trailing `Other` variant which absorbs tags these bindings do not know, so a
/// server adding a member never breaks decoding of the value around it.
macro_rules! tagged_union {
    (@decode $fields:ident, $tag:literal, $name:ident::$var:ident) => {
        Ok($name::$var)
    };
    (@decode $fields:ident, $tag:literal, $name:ident::$var:ident ($fty:ty)) => {
        $crate::codec::decode_field::<$fty>(&mut $fields, $tag).map($name::$var)
    };
    (@decode $fields:ident, $tag:literal, $name:ident::$var:ident {$ity:ty}) => {
        $crate::codec::decode_inline::<$ity>($fields).map($name::$var)
    };

    (@pat $name:ident::$var:ident [$b:ident]) => { $name::$var };
    (@pat $name:ident::$var:ident [$b:ident] ($fty:ty)) => { $name::$var($b) };
    (@pat $name:ident::$var:ident [$b:ident] {$ity:ty}) => { $name::$var($b) };

    (@encode $tag:literal [$b:ident]) => { $crate::codec::encode_void($tag) };
    (@encode $tag:literal [$b:ident] ($fty:ty)) => { $crate::codec::encode_field($tag, $b) };
    (@encode $tag:literal [$b:ident] {$ity:ty}) => { $crate::codec::encode_inline($tag, $b) };

    (@display $f:ident, $tag:literal [$b:ident]) => { $f.write_str($tag) };
    (@display $f:ident, $tag:literal [$b:ident] ($fty:ty)) => { write!($f, "{}: {:?}", $tag, $b) };
    (@display $f:ident, $tag:literal [$b:ident] {$ity:ty}) => { write!($f, "{}: {:?}", $tag, $b) };

    (@impls $name:ident {
        $( $var:ident $( ($fty:ty) )? $( {$ity:ty} )? = $tag:literal ),*
    }) => {
        impl<'de> ::serde::de::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::de::Deserializer<'de>>(deserializer: D)
                -> ::std::result::Result<Self, D::Error>
            {
                let tagged = <$crate::codec::Tagged as ::serde::de::Deserialize>::deserialize(
                    deserializer)?;
                #[allow(unused_mut, unused_variables)]
                let (tag, mut fields) = tagged.into_parts();
                let decoded: ::std::result::Result<Self, ::serde_json::Error> = match tag.as_str() {
                    $(
                        $tag => tagged_union!(@decode fields, $tag, $name::$var $( ($fty) )? $( {$ity} )?),
                    )*
                    _ => {
                        debug!("unrecognized {} tag {:?}", stringify!($name), tag);
                        Ok($name::Other)
                    }
                };
                decoded.map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }

        impl ::serde::ser::Serialize for $name {
            #[allow(unreachable_code, unused_variables)] // unions whose only member is `Other`
            fn serialize<S: ::serde::ser::Serializer>(&self, serializer: S)
                -> ::std::result::Result<S::Ok, S::Error>
            {
                let encoded: ::std::result::Result<::serde_json::Value, ::serde_json::Error> = match self {
                    $(
                        tagged_union!(@pat $name::$var [payload] $( ($fty) )? $( {$ity} )?)
                            => tagged_union!(@encode $tag [payload] $( ($fty) )? $( {$ity} )?),
                    )*
                    $name::Other => return Err(<S::Error as ::serde::ser::Error>::custom(
                        concat!("cannot serialize 'Other' variant of ", stringify!($name)))),
                };
                let value = encoded.map_err(<S::Error as ::serde::ser::Error>::custom)?;
                ::serde::ser::Serialize::serialize(&value, serializer)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(
                        tagged_union!(@pat $name::$var [payload] $( ($fty) )? $( {$ity} )?)
                            => tagged_union!(@display f, $tag [payload] $( ($fty) )? $( {$ity} )?),
                    )*
                    $name::Other => write!(f, "unrecognized {}", stringify!($name)),
                }
            }
        }
    };

    (
        $(#[$attr:meta])*
        pub enum $name:ident: open {
            $(
                $(#[$vattr:meta])*
                $var:ident $( ($fty:ty) )? $( {$ity:ty} )? = $tag:literal
            ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        #[non_exhaustive] // variants may be added in the future
        pub enum $name {
            $(
                $(#[$vattr])*
                $var $( ($fty) )? $( ($ity) )?,
            )*
            /// Catch-all used for unrecognized values returned from the server. Encountering this
            /// value typically indicates that these bindings are out of date.
            Other,
        }

        tagged_union!(@impls $name {
            $( $var $( ($fty) )? $( {$ity} )? = $tag ),*
        });
    };
}

/// Mark union types as endpoint errors. Their `Display` comes from `tagged_union!`.
macro_rules! api_error {
    ($($name:ident),* $(,)?) => {
        $( impl ::std::error::Error for $name {} )*
    };
}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Offset {
        pub correct_offset: u64,
    }

    tagged_union! {
        pub enum Inner: open {
            NotFound = "not_found",
            Malformed(Option<String>) = "malformed",
        }
    }

    tagged_union! {
        pub enum Outer: open {
            Lookup(Inner) = "lookup",
            IncorrectOffset{Offset} = "incorrect_offset",
            Closed = "closed",
        }
    }

    tagged_union! {
        pub enum Mode: open {
            Add = "add",
            Update(String) = "update",
        }
    }

    #[test]
    fn decode_each_shape() {
        let v: Outer = serde_json::from_value(json!({
            ".tag": "lookup",
            "lookup": {".tag": "not_found"}
        })).unwrap();
        assert_eq!(v, Outer::Lookup(Inner::NotFound));

        let v: Outer = serde_json::from_value(json!({
            ".tag": "incorrect_offset",
            "correct_offset": 42
        })).unwrap();
        assert_eq!(v, Outer::IncorrectOffset(Offset { correct_offset: 42 }));

        let v: Outer = serde_json::from_value(json!({".tag": "closed"})).unwrap();
        assert_eq!(v, Outer::Closed);
    }

    #[test]
    fn void_member_as_bare_string() {
        let v: Mode = serde_json::from_str(r#""add""#).unwrap();
        assert_eq!(v, Mode::Add);
    }

    #[test]
    fn optional_payload_may_be_absent() {
        let v: Inner = serde_json::from_value(json!({".tag": "malformed"})).unwrap();
        assert_eq!(v, Inner::Malformed(None));
        let v: Inner = serde_json::from_value(json!({".tag": "malformed", "malformed": "x"}))
            .unwrap();
        assert_eq!(v, Inner::Malformed(Some("x".to_owned())));
    }

    #[test]
    fn required_payload_must_be_present() {
        assert!(serde_json::from_value::<Mode>(json!({".tag": "update"})).is_err());
    }

    #[test]
    fn unknown_tag_decodes_to_other() {
        let v: Outer = serde_json::from_value(json!({".tag": "brand_new", "x": 1})).unwrap();
        assert_eq!(v, Outer::Other);

        let v: Mode = serde_json::from_value(json!({".tag": "brand_new"})).unwrap();
        assert_eq!(v, Mode::Other);
        let v: Mode = serde_json::from_str(r#""brand_new""#).unwrap();
        assert_eq!(v, Mode::Other);
    }

    #[test]
    fn unknown_member_inside_known_one() {
        let v: Outer = serde_json::from_value(json!({
            ".tag": "lookup",
            "lookup": {".tag": "not_yet_invented"}
        })).unwrap();
        assert_eq!(v, Outer::Lookup(Inner::Other));
    }

    #[test]
    fn missing_tag_is_an_error() {
        assert!(serde_json::from_value::<Outer>(json!({"lookup": "x"})).is_err());
        assert!(serde_json::from_value::<Outer>(json!(17)).is_err());
    }

    #[test]
    fn encode_each_shape() {
        assert_eq!(
            serde_json::to_value(Outer::Lookup(Inner::NotFound)).unwrap(),
            json!({".tag": "lookup", "lookup": {".tag": "not_found"}}));
        assert_eq!(
            serde_json::to_value(Outer::IncorrectOffset(Offset { correct_offset: 7 })).unwrap(),
            json!({".tag": "incorrect_offset", "correct_offset": 7}));
        assert_eq!(
            serde_json::to_value(Inner::Malformed(None)).unwrap(),
            json!({".tag": "malformed"}));
        assert_eq!(
            serde_json::to_value(Mode::Update("rev1".to_owned())).unwrap(),
            json!({".tag": "update", "update": "rev1"}));
    }

    #[test]
    fn other_cannot_be_encoded() {
        assert!(serde_json::to_value(Outer::Other).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Outer::Closed.to_string(), "closed");
        assert_eq!(Outer::Lookup(Inner::NotFound).to_string(), "lookup: NotFound");
        assert_eq!(Outer::Other.to_string(), "unrecognized Outer");
    }
}
