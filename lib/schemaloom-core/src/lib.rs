//! # Schemaloom Core
//!
//! Compose OpenAPI 3.1 Schema Objects — boolean composition, discriminated
//! unions, inline vs. referenced sub-schemas — and serialize them with
//! round-trip fidelity.
//!
//! The model is built around one variant type: [`SchemaRef`], which is either
//! a `$ref` pointer or a fully inline [`Schema`]. Composition keywords
//! (`oneOf`/`allOf`/`anyOf`/`not`) accept any mix of the two, preserve caller
//! order, and follow a single mutation rule: last full assignment wins.
//!
//! ## Quick Start
//!
//! ```rust
//! use schemaloom_core::{codec, Ref, Schema, SchemaRef};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // A discriminated union over two referenced variants
//! let pet = Schema::discriminated_union(
//!     "petType",
//!     [
//!         ("cat", Ref::from_schema_name("Cat")?),
//!         ("dog", Ref::from_schema_name("Dog")?),
//!     ],
//! )?;
//!
//! let json = codec::to_json_string(&pet, &codec::EncodeOptions::default())?;
//! assert!(json.contains(r##"{"$ref":"#/components/schemas/Cat"}"##));
//!
//! // Extending a base schema: properties stay siblings of allOf
//! let extended = Schema::extending(Ref::from_schema_name("Pet")?)
//!     .property("bark", SchemaRef::inline(Schema::boolean()));
//! assert!(extended.all_of.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! ## Derivation seam
//!
//! Reflection-like schema derivation is injected, never hardwired: implement
//! [`DescribeSchema`] (by hand or with a derive macro from another crate) and
//! mint canonical references with [`Ref::of`] or register the schema in a
//! [`Components`] container via [`Components::register_type`].
//!
//! ## Feature Flags
//!
//! - `yaml`: YAML emission via `serde-saphyr` ([`ToYaml`] trait).
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod codec;
mod components;
mod describe;
mod error;
mod schema;
#[cfg(feature = "yaml")]
#[cfg_attr(docsrs, doc(cfg(feature = "yaml")))]
pub mod yaml;

pub use self::components::Components;
pub use self::describe::DescribeSchema;
pub use self::error::{CodecError, SchemaError};
pub use self::schema::{
    Discriminator, DiscriminatorBuilder, Ref, Schema, SchemaRef, SchemaType,
};
#[cfg(feature = "yaml")]
pub use self::yaml::ToYaml;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Schema>();
        assert_send_sync::<SchemaRef>();
        assert_send_sync::<Ref>();
        assert_send_sync::<Discriminator>();
        assert_send_sync::<Components>();
    }
}
