//! Gurmukhi digit transliteration.

/// Gurmukhi digits zero through nine (U+0A66..U+0A6F).
pub const GURMUKHI_DIGITS: [char; 10] = ['੦', '੧', '੨', '੩', '੪', '੫', '੬', '੭', '੮', '੯'];

/// Render an integer with Gurmukhi digit glyphs.
///
/// Total over all integers; the minus sign passes through unchanged.
pub fn to_gurmukhi_num(number: i64) -> String {
    number
        .to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => GURMUKHI_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_gurmukhi(s: &str) -> String {
        s.chars()
            .map(|c| match GURMUKHI_DIGITS.iter().position(|&g| g == c) {
                Some(d) => char::from_digit(d as u32, 10).unwrap(),
                None => c,
            })
            .collect()
    }

    #[test]
    fn known_values() {
        assert_eq!(to_gurmukhi_num(0), "੦");
        assert_eq!(to_gurmukhi_num(15), "੧੫");
        assert_eq!(to_gurmukhi_num(2080), "੨੦੮੦");
    }

    #[test]
    fn negative_keeps_sign() {
        assert_eq!(to_gurmukhi_num(-42), "-੪੨");
    }

    #[test]
    fn transliteration_is_bijective() {
        for n in [0, 7, 10, 135, 3179, 588_465, i64::from(i32::MAX)] {
            let gurmukhi = to_gurmukhi_num(n);
            assert_eq!(from_gurmukhi(&gurmukhi), n.to_string());
            assert_eq!(gurmukhi.chars().count(), n.to_string().len());
        }
    }
}
