//! Thin façade over [`Schema`]: drives a single validation pass and collects its errors.
use crate::error::ValidationError;
use crate::schema::Schema;
use serde_json::Value;

/// Validate `instance` against `schema`, returning every error produced.
///
/// Validation is pure: calling this repeatedly with the same arguments always produces the
/// same sequence of errors, in the same order.
pub fn validate(schema: &Schema, instance: &Value) -> Vec<ValidationError> {
    let mut sink = Vec::new();
    schema.validate(instance, "#", &mut sink);
    sink
}

/// Shortcut for callers that only need a pass/fail verdict.
///
/// Built on top of `validate` rather than a separate early-exiting walk: the full error list is
/// still collected and then checked for emptiness. A from-scratch short-circuiting walk would
/// need its own copy of every keyword's pass/fail logic alongside the error-collecting one in
/// [`crate::schema`], which is not worth the duplication at this crate's scale.
pub fn is_valid(schema: &Schema, instance: &Value) -> bool {
    validate(schema, instance).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SchemaStore;
    use serde_json::json;

    #[test]
    fn validate_is_pure() {
        let schema = SchemaStore::compile(json!({"type": "integer"})).unwrap();
        let instance = json!("not an integer");
        let first = validate(&schema, &instance);
        let second = validate(&schema, &instance);
        assert_eq!(first, second);
    }

    #[test]
    fn is_valid_matches_validate() {
        let schema = SchemaStore::compile(json!({"type": "integer"})).unwrap();
        assert!(is_valid(&schema, &json!(1)));
        assert!(!is_valid(&schema, &json!("x")));
    }
}
