/// Errors raised while building schemas, references, or discriminators.
///
/// All construction-time contract violations are reported synchronously at the
/// call that introduced the bad value, never deferred to encode time.
#[derive(Debug, derive_more::Error, derive_more::Display)]
pub enum SchemaError {
    /// A reference path or component name was empty or whitespace-only.
    ///
    /// Occurs in [`Ref::new`](crate::Ref::new) and
    /// [`Ref::from_schema_name`](crate::Ref::from_schema_name).
    #[display("Invalid schema reference: identifier must not be blank")]
    InvalidReference,

    /// A discriminator was created with an empty property name.
    ///
    /// Occurs in [`Discriminator::builder`](crate::Discriminator::builder) and
    /// [`Schema::discriminated_union`](crate::Schema::discriminated_union).
    #[display("Discriminator property name must not be blank")]
    EmptyDiscriminatorProperty,
}

/// Errors raised by the JSON codec.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum CodecError {
    /// JSON serialization failure from `serde_json`.
    ///
    /// Occurs when a schema tree cannot be rendered as a JSON document.
    Json(serde_json::Error),

    /// Deserialization failure with the path of the offending field.
    ///
    /// Occurs when a wire document cannot be mapped onto the schema model,
    /// e.g. `properties` given as an array. No partial recovery is attempted.
    #[display("Failed to decode schema at '{path}': {source}")]
    #[from(skip)]
    Decode {
        /// Path to the field that could not be decoded (e.g. `properties.pet`).
        path: String,
        /// The underlying JSON decoding error.
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_are_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<SchemaError>();
        assert_sync::<SchemaError>();
        assert_send::<CodecError>();
        assert_sync::<CodecError>();
    }

    #[test]
    fn test_decode_error_display_names_the_path() {
        let source = serde_json::from_str::<u32>("[]").expect_err("should fail");
        let error = CodecError::Decode {
            path: "properties.pet".to_string(),
            source,
        };

        let message = error.to_string();
        assert!(message.contains("properties.pet"), "got: {message}");
    }
}
