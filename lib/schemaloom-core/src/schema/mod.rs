//! OpenAPI 3.1 Schema Object model and composition.
//!
//! [`Schema`] is the central recursive entity. Every place a sub-schema can
//! appear (composition lists, `not`, `properties`, `items`) takes a
//! [`SchemaRef`], so pointers and inline definitions mix freely and their
//! shape survives serialization unchanged.
//!
//! Composition keywords follow a single rule: **last full assignment wins**.
//! Calling [`Schema::one_of`] (or `all_of`/`any_of`/`not`) again replaces the
//! previous value wholesale, mirroring the overwrite semantics of
//! [`Discriminator`] mappings. Element order is caller order and is
//! observable in the encoded document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

mod discriminator;
pub(crate) mod reference;

pub use self::discriminator::{Discriminator, DiscriminatorBuilder};
pub use self::reference::{Ref, SchemaRef};

/// The `type` keyword of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// String type.
    String,
    /// Number type (floating point).
    Number,
    /// Integer type.
    Integer,
    /// Boolean type.
    Boolean,
    /// Array type.
    Array,
    /// Object type.
    Object,
    /// Null type.
    Null,
}

/// An OpenAPI 3.1 Schema Object.
///
/// All fields are optional; absent fields are omitted entirely from the
/// encoded document, recursively. A schema may combine structural fields with
/// `allOf` (the extending pattern). Combining `oneOf`/`anyOf` with `type` is
/// structurally permitted, though not idiomatic; the model does not forbid it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Schema type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    /// Format hint (`int64`, `date-time`, ...). Open-ended in OpenAPI 3.1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Short title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Named properties for object schemas, insertion-ordered.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaRef>,

    /// Names of required properties, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Element schema for array schemas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaRef>>,

    /// Permitted literal values.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<serde_json::Value>>,

    /// Exactly-one-of composition, caller-ordered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<SchemaRef>>,

    /// All-of composition, caller-ordered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<SchemaRef>>,

    /// Any-of composition, caller-ordered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<SchemaRef>>,

    /// Negated schema. A single object on the wire, never an array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<SchemaRef>>,

    /// Union discriminator metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Discriminator>,

    /// Default value.
    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,

    /// A single example value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,

    /// Multiple example values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<serde_json::Value>>,
}

impl Schema {
    /// Creates an empty schema with the given type.
    #[must_use]
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Self::default()
        }
    }

    /// An object schema.
    #[must_use]
    pub fn object() -> Self {
        Self::new(SchemaType::Object)
    }

    /// A string schema.
    #[must_use]
    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    /// An integer schema.
    #[must_use]
    pub fn integer() -> Self {
        Self::new(SchemaType::Integer)
    }

    /// A number schema.
    #[must_use]
    pub fn number() -> Self {
        Self::new(SchemaType::Number)
    }

    /// A boolean schema.
    #[must_use]
    pub fn boolean() -> Self {
        Self::new(SchemaType::Boolean)
    }

    /// A null schema.
    #[must_use]
    pub fn null() -> Self {
        Self::new(SchemaType::Null)
    }

    /// An array schema with the given element schema.
    #[must_use]
    pub fn array(items: impl Into<SchemaRef>) -> Self {
        let mut schema = Self::new(SchemaType::Array);
        schema.items = Some(Box::new(items.into()));
        schema
    }

    /// Sets the format hint.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a named property. Re-adding a name overwrites the prior schema.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, schema: impl Into<SchemaRef>) -> Self {
        self.properties.insert(name.into(), schema.into());
        self
    }

    /// Marks a property name as required.
    #[must_use]
    pub fn required_property(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    /// Sets the element schema.
    #[must_use]
    pub fn items(mut self, items: impl Into<SchemaRef>) -> Self {
        self.items = Some(Box::new(items.into()));
        self
    }

    /// Sets the permitted literal values (`enum` on the wire).
    #[must_use]
    pub fn enum_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<serde_json::Value>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets a single example value.
    #[must_use]
    pub fn example(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.example = Some(value.into());
        self
    }

    /// Sets multiple example values.
    #[must_use]
    pub fn examples<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<serde_json::Value>,
    {
        self.examples = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the `oneOf` list wholesale, preserving caller order.
    ///
    /// An empty iterator clears the keyword: composition lists, when present,
    /// are never empty.
    #[must_use]
    pub fn one_of<I>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = SchemaRef>,
    {
        self.one_of = non_empty(refs);
        self
    }

    /// Replaces the `allOf` list wholesale, preserving caller order.
    #[must_use]
    pub fn all_of<I>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = SchemaRef>,
    {
        self.all_of = non_empty(refs);
        self
    }

    /// Replaces the `anyOf` list wholesale, preserving caller order.
    #[must_use]
    pub fn any_of<I>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = SchemaRef>,
    {
        self.any_of = non_empty(refs);
        self
    }

    /// Replaces the `not` schema.
    #[must_use]
    pub fn not(mut self, schema: impl Into<SchemaRef>) -> Self {
        self.not = Some(Box::new(schema.into()));
        self
    }

    /// Starts an extending schema: `allOf` holds a pointer to the base, and
    /// further fluent calls add sibling structural fields to this schema
    /// (never nested under `allOf`).
    ///
    /// ```rust
    /// use schemaloom_core::{Ref, Schema, SchemaRef};
    ///
    /// # fn main() -> Result<(), schemaloom_core::SchemaError> {
    /// let schema = Schema::extending(Ref::from_schema_name("Base")?)
    ///     .property("p", SchemaRef::inline(Schema::string()));
    /// assert!(schema.all_of.is_some());
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn extending(base: Ref) -> Self {
        Self {
            all_of: Some(vec![SchemaRef::Ref(base)]),
            ..Self::default()
        }
    }

    /// Appends another base pointer to the `allOf` list, creating it when
    /// absent. Unlike [`Schema::all_of`], this concatenates.
    #[must_use]
    pub fn extend_with(mut self, base: Ref) -> Self {
        self.all_of
            .get_or_insert_with(Vec::new)
            .push(SchemaRef::Ref(base));
        self
    }

    /// Builds a discriminated union: `oneOf` holds a pointer for every arm in
    /// supplied order, and the discriminator mapping pairs each arm's value
    /// with the identical reference string, in the same order.
    ///
    /// The target sets of `oneOf` and the mapping are equal by construction. A
    /// discriminator built by hand through [`Discriminator::builder`] is not
    /// cross-validated against `oneOf`; that mismatch is a caller error this
    /// model does not detect.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyDiscriminatorProperty`] when
    /// `property_name` is blank.
    pub fn discriminated_union<I, K>(
        property_name: impl Into<String>,
        arms: I,
    ) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (K, Ref)>,
        K: Into<String>,
    {
        let mut builder = Discriminator::builder(property_name)?;
        let mut variants = Vec::new();
        for (value, target) in arms {
            builder = builder.mapping(value, target.clone());
            variants.push(SchemaRef::Ref(target));
        }

        Ok(Self {
            one_of: non_empty(variants),
            discriminator: Some(builder.build()),
            ..Self::default()
        })
    }

    /// Sets the discriminator, replacing any prior value.
    #[must_use]
    pub fn discriminator(mut self, discriminator: Discriminator) -> Self {
        self.discriminator = Some(discriminator);
        self
    }
}

fn non_empty<I>(refs: I) -> Option<Vec<SchemaRef>>
where
    I: IntoIterator<Item = SchemaRef>,
{
    let refs = refs.into_iter().collect::<Vec<_>>();
    if refs.is_empty() { None } else { Some(refs) }
}
