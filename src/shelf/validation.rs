//! Pure predicates behind the input prompts.
//!
//! The patterns are intentionally narrow: names are plain ASCII letters and
//! emails are `letters@lowercase.com`. Nothing here trims whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

static ALPHABETIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]*$").expect("alphabetic pattern is valid"));

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+@[a-z]+\.com$").expect("email pattern is valid"));

/// Parses the whole line as a base-10 signed integer.
pub fn parse_int(input: &str) -> Option<i32> {
    input.parse().ok()
}

/// ASCII letters only. The empty string passes.
pub fn is_alphabetic(input: &str) -> bool {
    ALPHABETIC.is_match(input)
}

pub fn is_email(input: &str) -> bool {
    EMAIL.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_accepts_signed_decimal() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("0"), Some(0));
    }

    #[test]
    fn int_rejects_anything_else() {
        assert_eq!(parse_int("12a"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("  3"), None);
        assert_eq!(parse_int("3 "), None);
        assert_eq!(parse_int("1.5"), None);
        assert_eq!(parse_int("99999999999"), None);
    }

    #[test]
    fn alphabetic_rules() {
        assert!(is_alphabetic("OOP"));
        assert!(is_alphabetic("ada"));
        assert!(is_alphabetic(""));
        assert!(!is_alphabetic("Ada Lovelace"));
        assert!(!is_alphabetic("R2D2"));
        assert!(!is_alphabetic("café"));
    }

    #[test]
    fn email_accepts_the_narrow_shape() {
        assert!(is_email("abc@xyz.com"));
        assert!(is_email("ABC@xyz.com"));
    }

    #[test]
    fn email_rejects_everything_else() {
        assert!(!is_email("abc@xyz.CO"));
        assert!(!is_email("a.b@xyz.com"));
        assert!(!is_email("abc@xy1.com"));
        assert!(!is_email("abc@XYZ.com"));
        assert!(!is_email("abc@xyz.org"));
        assert!(!is_email("@xyz.com"));
        assert!(!is_email("abc@.com"));
        assert!(!is_email(""));
    }
}
