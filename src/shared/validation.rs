use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for strings made only of ASCII decimal digits
    /// - Valid: "3273015501990001", "0"
    /// - Invalid: "", "3273-01", "32730155019900O1", "３２"
    pub static ref DIGITS_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();

    /// Regex for two-digit administrative region codes (province or city)
    pub static ref REGION_CODE_REGEX: Regex = Regex::new(r"^[0-9]{2}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_regex_valid() {
        assert!(DIGITS_REGEX.is_match("3273015501990001"));
        assert!(DIGITS_REGEX.is_match("0"));
        assert!(DIGITS_REGEX.is_match("0000000000000000"));
    }

    #[test]
    fn test_digits_regex_invalid() {
        assert!(!DIGITS_REGEX.is_match("")); // empty
        assert!(!DIGITS_REGEX.is_match("3273-01")); // hyphen
        assert!(!DIGITS_REGEX.is_match("32730155019900O1")); // letter O
        assert!(!DIGITS_REGEX.is_match(" 3273")); // leading space
        assert!(!DIGITS_REGEX.is_match("３２")); // fullwidth digits
        assert!(!DIGITS_REGEX.is_match("٣٢")); // arabic-indic digits
    }

    #[test]
    fn test_region_code_regex() {
        assert!(REGION_CODE_REGEX.is_match("32"));
        assert!(REGION_CODE_REGEX.is_match("01"));
        assert!(!REGION_CODE_REGEX.is_match("3"));
        assert!(!REGION_CODE_REGEX.is_match("321"));
        assert!(!REGION_CODE_REGEX.is_match("3a"));
    }
}
