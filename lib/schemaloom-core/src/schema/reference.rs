use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::describe::DescribeSchema;
use crate::error::SchemaError;
use crate::schema::Schema;

/// Fixed prefix of every canonical component reference.
pub(crate) const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// A `$ref` pointer to a schema defined elsewhere in the document.
///
/// The canonical form is `#/components/schemas/<Name>`. Strings passed to
/// [`Ref::new`] are used verbatim; bare component names go through
/// [`Ref::from_schema_name`], which prepends the canonical prefix. The
/// referent is never resolved here: whether the name actually exists in a
/// [`Components`](crate::Components) container is the document consumer's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ref {
    /// The reference path (e.g. `#/components/schemas/Pet`).
    #[serde(rename = "$ref")]
    pub ref_path: String,
}

impl Ref {
    /// Creates a reference from a verbatim path string.
    ///
    /// The string is used exactly as supplied; no prefix is added. Callers
    /// holding a bare component name should use [`Ref::from_schema_name`]
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidReference`] when `ref_path` is blank.
    pub fn new(ref_path: impl Into<String>) -> Result<Self, SchemaError> {
        let ref_path = ref_path.into();
        if ref_path.trim().is_empty() {
            return Err(SchemaError::InvalidReference);
        }
        Ok(Self { ref_path })
    }

    /// Creates a canonical reference from a bare component name.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidReference`] when `name` is blank.
    pub fn from_schema_name(name: impl AsRef<str>) -> Result<Self, SchemaError> {
        let name = name.as_ref();
        if name.trim().is_empty() {
            return Err(SchemaError::InvalidReference);
        }
        Ok(Self {
            ref_path: format!("{SCHEMA_REF_PREFIX}{name}"),
        })
    }

    /// Creates a canonical reference from a type's declared schema name.
    #[must_use]
    pub fn of<T: DescribeSchema>() -> Self {
        Self {
            ref_path: format!("{SCHEMA_REF_PREFIX}{}", T::schema_name()),
        }
    }

    /// The bare component name, when this is a canonical reference.
    #[must_use]
    pub fn schema_name(&self) -> Option<&str> {
        self.ref_path.strip_prefix(SCHEMA_REF_PREFIX)
    }
}

/// A schema that appears either as a `$ref` pointer or fully inline.
///
/// This is the element type of every composition list (`oneOf`, `allOf`,
/// `anyOf`), of `not`, of `properties` values, and of `items`. The two shapes
/// serialize differently and the distinction round-trips bit-for-bit:
///
/// - [`SchemaRef::Ref`] encodes as `{"$ref": "<path>"}` and nothing else;
/// - [`SchemaRef::Inline`] encodes as the flattened field set of the embedded
///   [`Schema`], with no wrapper key.
///
/// On decode, any object carrying a string `$ref` key is a pointer; sibling
/// keys are discarded (a deliberate, logged, lossy rule — see
/// [`Deserialize`](#impl-Deserialize%3C'de%3E-for-SchemaRef)). Any object
/// without `$ref` decodes as an inline schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaRef {
    /// A pointer to a schema defined elsewhere.
    Ref(Ref),
    /// A fully embedded schema definition.
    Inline(Box<Schema>),
}

impl SchemaRef {
    /// Creates a pointer from a verbatim reference path.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidReference`] when `ref_path` is blank.
    pub fn reference(ref_path: impl Into<String>) -> Result<Self, SchemaError> {
        Ref::new(ref_path).map(Self::Ref)
    }

    /// Creates a canonical pointer from a type's declared schema name.
    #[must_use]
    pub fn of<T: DescribeSchema>() -> Self {
        Self::Ref(Ref::of::<T>())
    }

    /// Embeds a schema inline.
    #[must_use]
    pub fn inline(schema: Schema) -> Self {
        Self::Inline(Box::new(schema))
    }

    /// The reference path, when this is a pointer.
    #[must_use]
    pub fn ref_path(&self) -> Option<&str> {
        match self {
            Self::Ref(reference) => Some(&reference.ref_path),
            Self::Inline(_) => None,
        }
    }
}

impl From<Ref> for SchemaRef {
    fn from(reference: Ref) -> Self {
        Self::Ref(reference)
    }
}

impl From<Schema> for SchemaRef {
    fn from(schema: Schema) -> Self {
        Self::inline(schema)
    }
}

/// Pointer-wins decoding.
///
/// `#[serde(untagged)]` would also dispatch on the `$ref` key, but it buffers
/// the whole subtree and reduces every failure to "data did not match any
/// variant". Decoding by hand keeps the dispatch rule explicit, and failures
/// inside the inline branch carry their own field path in the message so the
/// trail does not stop at this object.
impl<'de> Deserialize<'de> for SchemaRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SchemaRefVisitor;

        impl<'de> Visitor<'de> for SchemaRefVisitor {
            type Value = SchemaRef;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a schema object or a $ref object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut ref_path: Option<String> = None;
                let mut siblings: serde_json::Map<String, serde_json::Value> =
                    serde_json::Map::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "$ref" {
                        let value: serde_json::Value = map.next_value()?;
                        match value {
                            serde_json::Value::String(path) => ref_path = Some(path),
                            other => {
                                return Err(de::Error::custom(format!(
                                    "$ref: expected a string, found {}",
                                    json_type_name(&other)
                                )));
                            }
                        }
                    } else {
                        let value: serde_json::Value = map.next_value()?;
                        siblings.insert(key, value);
                    }
                }

                if let Some(path) = ref_path {
                    if !siblings.is_empty() {
                        let discarded = siblings.keys().cloned().collect::<Vec<_>>();
                        tracing::warn!(
                            ref_path = %path,
                            discarded = ?discarded,
                            "Discarding sibling keys next to $ref during decode"
                        );
                    }
                    let reference =
                        Ref::new(path).map_err(|_| de::Error::custom("$ref must not be blank"))?;
                    return Ok(SchemaRef::Ref(reference));
                }

                // The inline branch re-deserializes from a buffered value, so
                // an outer path tracker only sees this object as a leaf. Run
                // the inner decode through its own tracker and prepend the
                // inner path to the message, keeping the full field trail.
                let schema = serde_path_to_error::deserialize::<_, Schema>(
                    serde_json::Value::Object(siblings),
                )
                .map_err(|error| {
                    let path = error.path().to_string();
                    let source = error.into_inner();
                    if path == "." {
                        de::Error::custom(source)
                    } else {
                        de::Error::custom(format!("{path}: {source}"))
                    }
                })?;
                Ok(SchemaRef::Inline(Box::new(schema)))
            }
        }

        deserializer.deserialize_map(SchemaRefVisitor)
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
