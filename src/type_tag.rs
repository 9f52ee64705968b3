//! Classification of JSON values into the seven JSON Schema type names.
use serde_json::Value;
use std::fmt;

/// One of the seven primitive type names recognized by the `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl TypeTag {
    /// Parse a JSON Schema type name (`"integer"`, `"array"`, ...).
    pub(crate) fn from_name(name: &str) -> Option<TypeTag> {
        match name {
            "null" => Some(TypeTag::Null),
            "boolean" => Some(TypeTag::Boolean),
            "integer" => Some(TypeTag::Integer),
            "number" => Some(TypeTag::Number),
            "string" => Some(TypeTag::String),
            "array" => Some(TypeTag::Array),
            "object" => Some(TypeTag::Object),
            _ => None,
        }
    }

    /// Classify a JSON value, returning every tag it satisfies.
    ///
    /// A JSON integer satisfies both `integer` and `number`; every other value satisfies
    /// exactly one tag. A NaN-producing number (not representable in JSON, but reachable if an
    /// instance was built programmatically) satisfies no numeric tag.
    pub(crate) fn classify(value: &Value) -> Vec<TypeTag> {
        match value {
            Value::Null => vec![TypeTag::Null],
            Value::Bool(_) => vec![TypeTag::Boolean],
            Value::String(_) => vec![TypeTag::String],
            Value::Array(_) => vec![TypeTag::Array],
            Value::Object(_) => vec![TypeTag::Object],
            Value::Number(number) => {
                if let Some(f) = number.as_f64() {
                    if f.is_nan() {
                        return vec![];
                    }
                }
                if is_integer(number) {
                    vec![TypeTag::Integer, TypeTag::Number]
                } else {
                    vec![TypeTag::Number]
                }
            }
        }
    }
}

/// `true` when a JSON number has a zero fractional part, per Draft-07's definition of
/// "integer" (`2.0` counts, not only values stored with an integer tag).
pub(crate) fn is_integer(number: &serde_json::Number) -> bool {
    if number.is_i64() || number.is_u64() {
        return true;
    }
    number.as_f64().map_or(false, |f| f.fract() == 0.0 && f.is_finite())
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Null => write!(f, "null"),
            TypeTag::Boolean => write!(f, "boolean"),
            TypeTag::Integer => write!(f, "integer"),
            TypeTag::Number => write!(f, "number"),
            TypeTag::String => write!(f, "string"),
            TypeTag::Array => write!(f, "array"),
            TypeTag::Object => write!(f, "object"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_integer_is_also_number() {
        let tags = TypeTag::classify(&json!(1));
        assert!(tags.contains(&TypeTag::Integer));
        assert!(tags.contains(&TypeTag::Number));
    }

    #[test]
    fn classify_float_is_only_number() {
        let tags = TypeTag::classify(&json!(1.5));
        assert_eq!(tags, vec![TypeTag::Number]);
    }

    #[test]
    fn classify_integer_valued_float_is_both() {
        let tags = TypeTag::classify(&json!(2.0));
        assert!(tags.contains(&TypeTag::Integer));
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert!(TypeTag::from_name("foo").is_none());
    }
}
