//! Named schema registry.
//!
//! The document assembler registers finished schemas here under their
//! component names; references minted elsewhere in the document point into
//! this container by naming convention only. Whether a referenced name
//! actually exists is not validated — resolution happens during document
//! consumption, outside this crate.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::describe::DescribeSchema;
use crate::schema::{Ref, SchemaRef};

/// The `components` container of an OpenAPI document, restricted to schemas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    /// Registered entries, keyed by component name, insertion-ordered.
    ///
    /// Values are [`SchemaRef`]s: an entry is usually an inline schema
    /// definition, but a pure `$ref` alias entry is legal in a wire document
    /// and must survive a decode/encode cycle unchanged.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, SchemaRef>,
}

impl Components {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema (or a `$ref` alias) under a name. The last
    /// registration for a given name wins (overwrite, not merge).
    pub fn register(&mut self, name: impl Into<String>, schema: impl Into<SchemaRef>) {
        let name = name.into();
        if self.schemas.contains_key(&name) {
            tracing::debug!(name = %name, "Replacing previously registered schema");
        }
        self.schemas.insert(name, schema.into());
    }

    /// Registers a type's schema under its declared name and returns the
    /// canonical reference to it.
    pub fn register_type<T: DescribeSchema>(&mut self) -> Ref {
        self.register(T::schema_name(), T::describe());
        Ref::of::<T>()
    }

    /// Looks up a registered entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaRef> {
        self.schemas.get(name)
    }

    /// Whether no schemas are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }
}
