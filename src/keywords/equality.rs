//! Structural deep equality used by `const` and `enum`.
//!
//! Numeric comparison uses exact integer equality when both sides convert losslessly to an
//! `i64`/`u64`, and double-precision equality otherwise. This deviates from comparing serialized
//! forms, but produces the same verdict on every non-pathological input.
use serde_json::Value;

pub(crate) fn deep_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            // `as_i64()`/`as_u64()` are `None` for a number written with a decimal point
            // (`5.0`) even when it is integral, so a pair of such numbers must not be compared
            // by those accessors alone — that would make every float-tagged integral number
            // compare equal to every other one. Only trust the integer accessors when both
            // sides actually produce a value; otherwise fall back to the numeric value itself.
            if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
                x == y
            } else if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
                x == y
            } else {
                a.as_f64() == b.as_f64()
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, value)| b.get(key).map_or(false, |other| deep_equal(value, other)))
        }
        (a, b) => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_compare_exactly() {
        assert!(deep_equal(&json!(1), &json!(1)));
        assert!(!deep_equal(&json!(1), &json!(2)));
    }

    #[test]
    fn integer_and_integer_valued_float_are_equal() {
        assert!(deep_equal(&json!(1), &json!(1.0)));
    }

    #[test]
    fn objects_compare_regardless_of_key_order() {
        let a = json!({"x": 1, "y": 2});
        let b = json!({"y": 2, "x": 1});
        assert!(deep_equal(&a, &b));
    }

    #[test]
    fn arrays_compare_positionally() {
        assert!(deep_equal(&json!([1, 2, 3]), &json!([1, 2, 3])));
        assert!(!deep_equal(&json!([1, 2, 3]), &json!([1, 3, 2])));
    }

    #[test]
    fn distinct_float_tagged_integral_numbers_are_not_equal() {
        assert!(!deep_equal(&json!(9.0), &json!(5.0)));
        assert!(!deep_equal(&json!(9.0), &json!(7.0)));
        assert!(deep_equal(&json!(9.0), &json!(9.0)));
    }
}
