//! `minimum`, `maximum`, `exclusiveMinimum`, `exclusiveMaximum`, `multipleOf`.

/// `multipleOf` divisibility check.
///
/// The naive `value % multiple_of == 0.0` check is unreliable for non-integer multipliers
/// because of IEEE-754 rounding. When both operands are representable integers, exact integer
/// modulus is used; otherwise the check compares `round(value / multiple_of) * multiple_of` to
/// `value` within a tolerance proportional to the instance's magnitude.
pub(crate) fn is_multiple_of(value: f64, multiple_of: f64) -> bool {
    if value.fract() == 0.0 && multiple_of.fract() == 0.0 && multiple_of != 0.0 {
        let value_int = value as i64;
        let divisor = multiple_of as i64;
        if value_int as f64 == value && divisor as f64 == multiple_of {
            return value_int % divisor == 0;
        }
    }
    let quotient = value / multiple_of;
    let rounded = quotient.round();
    let tolerance = 1e-10 * value.abs().max(1.0);
    (rounded * multiple_of - value).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(4.0, 2.0, true)]
    #[test_case(3.0, 2.0, false)]
    #[test_case(0.0075, 0.0001, true)]
    #[test_case(1.5, 0.5, true)]
    #[test_case(1.51, 0.5, false)]
    fn multiple_of(value: f64, multiple_of: f64, expected: bool) {
        assert_eq!(is_multiple_of(value, multiple_of), expected);
    }
}
