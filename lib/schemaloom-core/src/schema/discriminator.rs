use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::schema::reference::Ref;

/// Discriminator metadata for a `oneOf` union.
///
/// Names the property whose value selects the applicable union member, plus an
/// explicit value-to-reference mapping. An absent mapping and an empty mapping
/// are distinct states and serialize differently (`mapping` key omitted vs
/// `"mapping": {}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discriminator {
    /// The property whose value discriminates between union members.
    pub property_name: String,
    /// Discriminator value to canonical reference string, insertion-ordered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<IndexMap<String, String>>,
}

impl Discriminator {
    /// Starts building a discriminator for the given property.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyDiscriminatorProperty`] when
    /// `property_name` is blank.
    pub fn builder(property_name: impl Into<String>) -> Result<DiscriminatorBuilder, SchemaError> {
        let property_name = property_name.into();
        if property_name.trim().is_empty() {
            return Err(SchemaError::EmptyDiscriminatorProperty);
        }
        Ok(DiscriminatorBuilder {
            property_name,
            mapping: None,
        })
    }
}

/// Accumulator for [`Discriminator`] values.
///
/// Entries are added one at a time; adding an existing key overwrites the
/// prior value (last write wins). A builder whose mapping was never populated
/// produces a discriminator with `mapping: None`.
#[derive(Debug, Clone)]
pub struct DiscriminatorBuilder {
    property_name: String,
    mapping: Option<IndexMap<String, String>>,
}

impl DiscriminatorBuilder {
    /// Associates a discriminator value with a schema reference.
    #[must_use]
    pub fn mapping(mut self, key: impl Into<String>, target: Ref) -> Self {
        self.mapping
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), target.ref_path);
        self
    }

    /// Produces the immutable discriminator.
    #[must_use]
    pub fn build(self) -> Discriminator {
        Discriminator {
            property_name: self.property_name,
            mapping: self.mapping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet_ref(name: &str) -> Ref {
        Ref::from_schema_name(name).expect("valid name")
    }

    #[test]
    fn test_blank_property_name_is_rejected() {
        assert!(matches!(
            Discriminator::builder(""),
            Err(SchemaError::EmptyDiscriminatorProperty)
        ));
        assert!(matches!(
            Discriminator::builder("  "),
            Err(SchemaError::EmptyDiscriminatorProperty)
        ));
    }

    #[test]
    fn test_unpopulated_mapping_stays_absent() {
        let discriminator = Discriminator::builder("petType")
            .expect("valid property")
            .build();

        assert_eq!(discriminator.property_name, "petType");
        assert_eq!(discriminator.mapping, None);

        let json = serde_json::to_string(&discriminator).expect("should serialize");
        assert_eq!(json, r#"{"propertyName":"petType"}"#);
    }

    #[test]
    fn test_empty_and_absent_mappings_are_distinct() {
        let absent = Discriminator {
            property_name: "petType".to_string(),
            mapping: None,
        };
        let empty = Discriminator {
            property_name: "petType".to_string(),
            mapping: Some(IndexMap::new()),
        };

        let absent_json = serde_json::to_string(&absent).expect("should serialize");
        let empty_json = serde_json::to_string(&empty).expect("should serialize");
        assert_ne!(absent_json, empty_json);
        assert_eq!(empty_json, r#"{"propertyName":"petType","mapping":{}}"#);

        let decoded_absent: Discriminator =
            serde_json::from_str(&absent_json).expect("should decode");
        let decoded_empty: Discriminator = serde_json::from_str(&empty_json).expect("should decode");
        assert_eq!(decoded_absent, absent);
        assert_eq!(decoded_empty, empty);
        assert_ne!(decoded_absent, decoded_empty);
    }

    #[test]
    fn test_mapping_overwrites_on_duplicate_key() {
        let discriminator = Discriminator::builder("petType")
            .expect("valid property")
            .mapping("k", pet_ref("X"))
            .mapping("k", pet_ref("Y"))
            .build();

        let mapping = discriminator.mapping.expect("mapping populated");
        assert_eq!(mapping.len(), 1);
        assert_eq!(
            mapping.get("k").map(String::as_str),
            Some("#/components/schemas/Y")
        );
    }

    #[test]
    fn test_mapping_preserves_insertion_order() {
        let discriminator = Discriminator::builder("kind")
            .expect("valid property")
            .mapping("cat", pet_ref("Cat"))
            .mapping("dog", pet_ref("Dog"))
            .mapping("bird", pet_ref("Bird"))
            .build();

        let keys = discriminator
            .mapping
            .expect("mapping populated")
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        assert_eq!(keys, ["cat", "dog", "bird"]);
    }
}
