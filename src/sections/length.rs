//! Length section - checks password minimum length.

use super::SectionResult;

/// Minimum accepted length of a new password.
pub const MIN_LENGTH: usize = 8;

/// Length from which a password earns the long-password bonus.
pub const LONG_LENGTH: usize = 12;

/// Length of a password in UTF-16 code units, so characters outside the
/// Basic Multilingual Plane (emoji) count as two.
pub fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Checks if the password meets minimum length requirements.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &str) -> SectionResult {
    if password_length(password) < MIN_LENGTH {
        return Some("Password must be at least 8 characters");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(
            length_section("Short1!"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section("12345678"), None);
    }

    #[test]
    fn test_length_section_counts_utf16_units() {
        // 7 characters, 14 bytes, 7 code units
        assert_eq!(password_length("ééééééé"), 7);
        assert!(length_section("ééééééé").is_some());

        // each emoji is a surrogate pair
        assert_eq!(password_length("🔑"), 2);
        assert_eq!(password_length("🔑🔑🔑🔑Aa1"), 11);
        assert_eq!(length_section("🔑🔑🔑🔑Aa1"), None);
        assert_eq!(password_length("𝔸𝔹𝔺"), 6);
        assert!(length_section("𝔸𝔹𝔺").is_some());
    }
}
