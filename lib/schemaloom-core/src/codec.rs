//! JSON codec for the schema document model.
//!
//! Configuration is explicit: every encode call takes an [`EncodeOptions`],
//! never ambient state, so the codec stays referentially transparent and
//! testable in isolation. Decoding goes through `serde_path_to_error` so a
//! malformed document fails with the path of the offending field
//! (e.g. `properties.pet`), with no partial recovery.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CodecError;

/// Encoder configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Emit pretty-printed JSON instead of the compact default.
    pub pretty: bool,
}

impl EncodeOptions {
    /// Pretty-printed output.
    #[must_use]
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

/// Encodes a schema document (a [`Schema`](crate::Schema),
/// [`SchemaRef`](crate::SchemaRef), or any value of this model) to JSON.
///
/// # Errors
///
/// Returns [`CodecError::Json`] when serialization fails.
pub fn to_json_string<T: Serialize>(
    value: &T,
    options: &EncodeOptions,
) -> Result<String, CodecError> {
    let encoded = if options.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(encoded)
}

/// Encodes a schema document to a JSON document model value.
///
/// # Errors
///
/// Returns [`CodecError::Json`] when serialization fails.
pub fn to_json_value<T: Serialize>(value: &T) -> Result<serde_json::Value, CodecError> {
    Ok(serde_json::to_value(value)?)
}

/// Decodes a schema document from a JSON string.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] naming the offending field path when the
/// input cannot be mapped onto the model.
pub fn from_json_str<T: DeserializeOwned>(input: &str) -> Result<T, CodecError> {
    let mut deserializer = serde_json::Deserializer::from_str(input);
    serde_path_to_error::deserialize(&mut deserializer).map_err(decode_error)
}

/// Decodes a schema document from a JSON document model value.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] naming the offending field path when the
/// value cannot be mapped onto the model.
pub fn from_json_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, CodecError> {
    serde_path_to_error::deserialize(value).map_err(decode_error)
}

fn decode_error(error: serde_path_to_error::Error<serde_json::Error>) -> CodecError {
    let path = error.path().to_string();
    CodecError::Decode {
        path,
        source: error.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Ref, Schema, SchemaRef};

    #[test]
    fn test_compact_and_pretty_encode_the_same_document() {
        let schema = Schema::string().description("a name");

        let compact =
            to_json_string(&schema, &EncodeOptions::default()).expect("should serialize");
        let pretty = to_json_string(&schema, &EncodeOptions::pretty()).expect("should serialize");

        assert_eq!(compact, r#"{"type":"string","description":"a name"}"#);
        let reparsed: serde_json::Value = serde_json::from_str(&pretty).expect("valid JSON");
        assert_eq!(reparsed, serde_json::from_str::<serde_json::Value>(&compact).expect("valid"));
    }

    #[test]
    fn test_decode_names_the_offending_field_path() {
        // properties must be an object, not an array
        let result = from_json_str::<Schema>(r#"{"properties": []}"#);

        let error = result.expect_err("should fail");
        let CodecError::Decode { path, .. } = error else {
            panic!("expected a decode error, got {error}");
        };
        assert_eq!(path, "properties");
    }

    #[test]
    fn test_decode_names_nested_field_paths() {
        let result = from_json_str::<Schema>(r#"{"properties":{"pet":{"required": 42}}}"#);

        let error = result.expect_err("should fail");
        let CodecError::Decode { path, source } = error else {
            panic!("expected a decode error, got {error}");
        };
        // The tracked path reaches the pet sub-schema; the field inside it
        // that failed is carried by the source message.
        assert_eq!(path, "properties.pet");
        let message = source.to_string();
        assert!(message.contains("required"), "got: {message}");
    }

    #[test]
    fn test_decode_schema_ref_dispatches_on_ref_key() {
        let pointer: SchemaRef =
            from_json_str(r##"{"$ref":"#/components/schemas/Pet"}"##).expect("should decode");
        assert_eq!(pointer.ref_path(), Some("#/components/schemas/Pet"));

        let inline: SchemaRef = from_json_str(r#"{"type":"string"}"#).expect("should decode");
        assert!(matches!(inline, SchemaRef::Inline(_)));
    }

    #[test]
    fn test_value_round_trip() {
        let schema = Schema::object()
            .property("id", SchemaRef::inline(Schema::integer().format("int64")))
            .property(
                "tag",
                SchemaRef::Ref(Ref::from_schema_name("Tag").expect("valid")),
            )
            .required_property("id");

        let value = to_json_value(&schema).expect("should serialize");
        let decoded: Schema = from_json_value(value).expect("should decode");
        assert_eq!(decoded, schema);
    }
}
