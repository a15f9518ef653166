//! Splits converted text into fixed-width groups.

/// Width of the traditional cipher groups.
pub const GROUP_WIDTH: usize = 5;

/// Returns `msg` split into groups of `width` symbols separated by single
/// spaces. The last group may be shorter. A `width` of 0 leaves `msg` as is.
///
/// # Examples
///
/// ```
/// use enigma::utils::grouping::group;
///
/// assert_eq!(group("ILBDAAMTAZ", 4), "ILBD AAMT AZ");
/// ```
pub fn group(msg: &str, width: usize) -> String {
    if width == 0 {
        return msg.to_string();
    }
    let count = msg.chars().count();
    let mut output = String::with_capacity(msg.len() + count / width);
    for (i, ch) in msg.chars().enumerate() {
        if i > 0 && i % width == 0 {
            output.push(' ');
        }
        output.push(ch);
    }
    output
}

/// Returns `msg` in groups of five.
pub fn group_in_fives(msg: &str) -> String {
    group(msg, GROUP_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_in_fives() {
        assert_eq!(
            group_in_fives("QVPQSOKOILPUBKJZPISFXDW"),
            "QVPQS OKOIL PUBKJ ZPISF XDW"
        );
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_space() {
        assert_eq!(group_in_fives("ABCDEFGHIJ"), "ABCDE FGHIJ");
    }

    #[test]
    fn test_short_and_empty() {
        assert_eq!(group_in_fives("ABC"), "ABC");
        assert_eq!(group_in_fives(""), "");
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(group("ABCDEF", 0), "ABCDEF");
    }

    #[test]
    fn test_multibyte_symbols() {
        assert_eq!(group("ÄÖÜßÉ", 2), "ÄÖ Üß É");
    }
}
