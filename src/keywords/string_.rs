//! `minLength`, `maxLength` — measured in Unicode code points, not UTF-8 code units.

#[inline]
pub(crate) fn code_point_length(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_code_points_not_bytes() {
        // "é" here is a single code point that takes two UTF-8 bytes.
        assert_eq!(code_point_length("café"), 4);
    }

    #[test]
    fn counts_surrogate_pair_characters_as_one() {
        // An emoji outside the BMP is one Rust `char` (one Unicode scalar value).
        assert_eq!(code_point_length("😀"), 1);
    }
}
