//! YAML serialization support using serde-saphyr.
//!
//! YAML is an isomorphic projection of the same document model the JSON codec
//! produces: the same fields, the same omission policy, the same
//! pointer-vs-inline shapes. Only available when the `yaml` feature is
//! enabled.
//!
//! # Example
//!
//! ```rust,ignore
//! use schemaloom_core::{Schema, ToYaml};
//!
//! let schema = Schema::string().description("a pet name");
//! let yaml = schema.to_yaml()?;
//! std::fs::write("schema.yml", yaml)?;
//! ```

use serde::Serialize;

/// Error type for YAML serialization operations.
pub type YamlError = serde_saphyr::ser_error::Error;

/// Extension trait for serializing types to YAML.
///
/// Implemented for all types that implement [`Serialize`].
pub trait ToYaml: Serialize + Sized {
    /// Serializes this value to a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`YamlError`] if serialization fails.
    fn to_yaml(&self) -> Result<String, YamlError> {
        serde_saphyr::to_string(self)
    }
}

impl<T: Serialize + Sized> ToYaml for T {}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::schema::{Ref, Schema, SchemaRef};

    #[test]
    fn should_serialize_schema_to_yaml() {
        let schema = Schema::object()
            .property("name", SchemaRef::inline(Schema::string()))
            .required_property("name");

        let yaml = schema.to_yaml().expect("should serialize to YAML");

        insta::assert_snapshot!(yaml, @r"
        type: object
        properties:
          name:
            type: string
        required:
          - name
        ");
    }

    #[test]
    fn should_serialize_composition_to_yaml() {
        let schema = Schema::default().one_of([
            SchemaRef::Ref(Ref::from_schema_name("Cat").expect("valid")),
            SchemaRef::inline(Schema::string()),
        ]);

        let yaml = schema.to_yaml().expect("should serialize to YAML");

        // Same projection as the JSON codec: oneOf with a pointer then an
        // inline schema, nothing else emitted.
        insta::assert_snapshot!(yaml, @r##"
        oneOf:
          - $ref: "#/components/schemas/Cat"
          - type: string
        "##);
    }
}
