//! Character variety sections - lowercase, uppercase, digits and symbols.
//!
//! Character classes are ASCII: a symbol is anything outside `[a-zA-Z0-9]`,
//! so accented letters count as symbols.

use super::SectionResult;

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}

pub fn lowercase_section(password: &str) -> SectionResult {
    if !has_lowercase(password) {
        return Some("Password must contain at least one lowercase letter");
    }
    None
}

pub fn uppercase_section(password: &str) -> SectionResult {
    if !has_uppercase(password) {
        return Some("Password must contain at least one uppercase letter");
    }
    None
}

pub fn digit_section(password: &str) -> SectionResult {
    if !has_digit(password) {
        return Some("Password must contain at least one number");
    }
    None
}

pub fn symbol_section(password: &str) -> SectionResult {
    if !has_symbol(password) {
        return Some("Password must contain at least one symbol");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_section_missing_uppercase() {
        let reason = uppercase_section("lowercase123!").expect("should fail");
        assert!(reason.contains("uppercase"));
        assert_eq!(lowercase_section("lowercase123!"), None);
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let reason = lowercase_section("UPPERCASE123!").expect("should fail");
        assert!(reason.contains("lowercase"));
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        let reason = digit_section("NoNumbers!").expect("should fail");
        assert!(reason.contains("number"));
    }

    #[test]
    fn test_variety_section_missing_symbol() {
        let reason = symbol_section("NoSpecial123").expect("should fail");
        assert!(reason.contains("symbol"));
    }

    #[test]
    fn test_variety_section_all_categories() {
        let pwd = "HasAll123!@#";
        assert_eq!(lowercase_section(pwd), None);
        assert_eq!(uppercase_section(pwd), None);
        assert_eq!(digit_section(pwd), None);
        assert_eq!(symbol_section(pwd), None);
    }

    #[test]
    fn test_non_ascii_letters_are_symbols() {
        assert!(has_symbol("passé"));
        assert!(!has_uppercase("ÉÀÜ"));
        assert!(!has_lowercase("éàü"));
        assert!(!has_lowercase("ÉÀÜ"));
        assert!(has_symbol("ÉÀÜ"));
        assert!(!has_digit("٣"));
    }

    #[test]
    fn test_whitespace_is_a_symbol() {
        assert!(has_symbol("two words"));
    }
}
