//! # jsonscope
//!
//! A crate for performing JSON Schema (Draft-07) validation. A schema document is compiled once
//! into a tree of [`Schema`] nodes via [`SchemaStore`]; validating an instance against it is a
//! pure, read-only walk of that tree that collects every [`ValidationError`] it finds rather
//! than stopping at the first one.
//!
//! Supports the Draft-07 keyword set described in the crate's module docs, with local
//! (in-document) pointer resolution. Remote `$ref` resolution, format assertions, and a CLI
//! surface are out of scope for this crate.
//!
//! ## Example
//!
//! ```rust
//! use jsonscope::SchemaStore;
//! use serde_json::json;
//!
//! let schema = SchemaStore::compile(json!({"maxLength": 5})).unwrap();
//! let instance = json!("foo");
//! let errors = jsonscope::validate(&schema, &instance);
//! assert!(errors.is_empty());
//!
//! let instance = json!("too long");
//! let errors = jsonscope::validate(&schema, &instance);
//! for error in &errors {
//!     println!("Validation error: {}", error);
//! }
//! assert_eq!(errors.len(), 1);
//! ```
#![warn(
    clippy::redundant_closure,
    clippy::explicit_iter_loop,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::print_stdout,
    clippy::cast_possible_truncation,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]
mod error;
mod keywords;
mod pattern;
mod paths;
mod schema;
mod store;
mod type_tag;
mod validator;

pub use error::{CompilationError, ValidationError, ValidationErrorKind};
pub use schema::Schema;
pub use store::SchemaStore;
pub use type_tag::TypeTag;
pub use validator::{is_valid, validate};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compiles_and_validates_a_simple_schema() {
        let schema = SchemaStore::compile(json!({"minLength": 5})).unwrap();
        assert!(is_valid(&schema, &json!("foobar")));
        assert!(!is_valid(&schema, &json!("foo")));
    }

    #[test]
    fn invalid_schema_fails_to_compile() {
        assert!(SchemaStore::compile(json!(42)).is_err());
    }
}

/// End-to-end scenarios exercising one full compile-then-validate pass each, rather than a
/// single keyword in isolation.
#[cfg(test)]
mod scenario_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_property_type_mismatch_points_at_the_property() {
        let schema =
            SchemaStore::compile(json!({"properties": {"myValue": {"type": "integer"}}}))
                .unwrap();
        let errors = validate(&schema, &json!({"myValue": "x"}));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].pointer, "#/myValue");

        let errors = validate(&schema, &json!({"myValue": 1}));
        assert!(errors.is_empty());
    }

    #[test]
    fn multiple_of_rejects_non_divisible_integers() {
        let schema = SchemaStore::compile(json!({"type": "integer", "multipleOf": 2})).unwrap();
        assert_eq!(validate(&schema, &json!(3)).len(), 1);
        assert!(validate(&schema, &json!(4)).is_empty());
    }

    #[test]
    fn one_of_rejects_an_instance_that_passes_every_branch() {
        let schema =
            SchemaStore::compile(json!({"oneOf": [{"type": "integer"}, {"type": "number"}]}))
                .unwrap();
        // 1 is both an integer and a number: two branches pass, oneOf demands exactly one.
        assert_eq!(validate(&schema, &json!(1)).len(), 1);
        assert!(validate(&schema, &json!(1.5)).is_empty());
    }

    #[test]
    fn contains_requires_at_least_one_matching_element() {
        let schema =
            SchemaStore::compile(json!({"type": "array", "contains": {"const": 7}})).unwrap();
        assert!(validate(&schema, &json!([1, 2, 7])).is_empty());

        let errors = validate(&schema, &json!([1, 2, 3]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].pointer, "#");
    }

    #[test]
    fn array_form_dependency_requires_the_sibling_property() {
        let schema = SchemaStore::compile(json!({"dependencies": {"a": ["b"]}})).unwrap();
        assert_eq!(validate(&schema, &json!({"a": 1})).len(), 1);
        assert!(validate(&schema, &json!({"a": 1, "b": 2})).is_empty());
    }

    #[test]
    fn if_then_else_branches_on_the_condition_schema() {
        let schema = SchemaStore::compile(json!({
            "if": {"properties": {"k": {"const": 1}}, "required": ["k"]},
            "then": {"required": ["x"]},
            "else": {"required": ["y"]}
        }))
        .unwrap();
        assert_eq!(validate(&schema, &json!({"k": 1})).len(), 1);
        assert_eq!(validate(&schema, &json!({"k": 2})).len(), 1);
        assert!(validate(&schema, &json!({"k": 1, "x": true})).is_empty());
        assert!(validate(&schema, &json!({"k": 2, "y": true})).is_empty());
    }
}
