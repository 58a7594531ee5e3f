//! Pluggable schema derivation.
//!
//! Deriving a [`Schema`] from a Rust type (reflection, macros, hand-written
//! impls) is an external capability as far as this crate is concerned. The
//! [`DescribeSchema`] trait is the seam: anything that can answer "what is
//! your component name, and what does your schema look like" can be used to
//! mint canonical references and populate a
//! [`Components`](crate::Components) registry.

use std::borrow::Cow;

use crate::schema::{Schema, SchemaType};

/// A type that can describe itself as an OpenAPI schema.
///
/// # Example
///
/// ```rust
/// use schemaloom_core::{DescribeSchema, Schema, SchemaRef};
/// use std::borrow::Cow;
///
/// struct Pet;
///
/// impl DescribeSchema for Pet {
///     fn schema_name() -> Cow<'static, str> {
///         Cow::Borrowed("Pet")
///     }
///
///     fn describe() -> Schema {
///         Schema::object()
///             .property("name", SchemaRef::inline(Schema::string()))
///             .required_property("name")
///     }
/// }
/// ```
pub trait DescribeSchema {
    /// The component name used in `#/components/schemas/<Name>`.
    fn schema_name() -> Cow<'static, str>;

    /// The full schema definition for this type.
    fn describe() -> Schema;
}

macro_rules! describe_primitive {
    ($($ty:ty => ($name:literal, $constructor:ident $(, $format:literal)?)),* $(,)?) => {
        $(
            impl DescribeSchema for $ty {
                fn schema_name() -> Cow<'static, str> {
                    Cow::Borrowed($name)
                }

                fn describe() -> Schema {
                    Schema::new(SchemaType::$constructor)
                        $(.format($format))?
                }
            }
        )*
    };
}

describe_primitive! {
    bool => ("bool", Boolean),
    i8 => ("i8", Integer),
    i16 => ("i16", Integer),
    i32 => ("i32", Integer, "int32"),
    i64 => ("i64", Integer, "int64"),
    u8 => ("u8", Integer),
    u16 => ("u16", Integer),
    u32 => ("u32", Integer, "int32"),
    u64 => ("u64", Integer, "int64"),
    f32 => ("f32", Number, "float"),
    f64 => ("f64", Number, "double"),
    String => ("String", String),
    str => ("str", String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::string(String::schema_name(), "String")]
    #[case::signed(i64::schema_name(), "i64")]
    #[case::float(f64::schema_name(), "f64")]
    fn test_primitive_schema_names(#[case] name: Cow<'static, str>, #[case] expected: &str) {
        assert_eq!(name, expected);
    }

    #[test]
    fn test_primitive_schemas_carry_formats() {
        let schema = i64::describe();
        assert_eq!(schema.format.as_deref(), Some("int64"));
        assert_eq!(schema.schema_type, Some(SchemaType::Integer));

        let schema = bool::describe();
        assert_eq!(schema.format, None);
        assert_eq!(schema.schema_type, Some(SchemaType::Boolean));
    }
}
