//! Password strength evaluator - additive scoring for live feedback.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{
    has_digit, has_lowercase, has_symbol, has_uppercase, password_length, LONG_LENGTH, MIN_LENGTH,
};
use crate::types::PasswordScore;

const MIN_LENGTH_POINTS: i64 = 25;
const LONG_LENGTH_POINTS: i64 = 15;
const MIXED_CASE_POINTS: i64 = 20;
const DIGIT_POINTS: i64 = 20;
const SYMBOL_POINTS: i64 = 20;

/// Evaluates password strength on a `0..=100` scale.
///
/// Points are additive:
/// - 25 for at least 8 characters, plus 15 more for at least 12
/// - 20 when both lowercase and uppercase letters are present
/// - 20 for a digit
/// - 20 for a symbol (anything outside `[a-zA-Z0-9]`)
///
/// An empty password scores 0. The score only informs the user; acceptance is
/// decided by [`crate::validate_password_change`].
pub fn evaluate_password_strength(password: &SecretString) -> PasswordScore {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return PasswordScore::default();
    }

    let pwd_len = password_length(pwd);
    let mut score = 0;

    if pwd_len >= MIN_LENGTH {
        score += MIN_LENGTH_POINTS;
    }
    if pwd_len >= LONG_LENGTH {
        score += LONG_LENGTH_POINTS;
    }
    if has_lowercase(pwd) && has_uppercase(pwd) {
        score += MIXED_CASE_POINTS;
    }
    if has_digit(pwd) {
        score += DIGIT_POINTS;
    }
    if has_symbol(pwd) {
        score += SYMBOL_POINTS;
    }

    PasswordScore::new(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PasswordStrength;

    fn score(pwd: &str) -> u8 {
        evaluate_password_strength(&SecretString::new(pwd.to_string().into())).value()
    }

    #[test]
    fn test_evaluate_empty_password() {
        assert_eq!(score(""), 0);
    }

    #[test]
    fn test_evaluate_lowercase_only() {
        assert_eq!(score("abcdefgh"), 25);
    }

    #[test]
    fn test_evaluate_mixed_case() {
        assert_eq!(score("Abcdefgh"), 45);
    }

    #[test]
    fn test_evaluate_mixed_case_digit() {
        assert_eq!(score("Abcdefgh1"), 65);
    }

    #[test]
    fn test_evaluate_all_classes() {
        assert_eq!(score("Abcdefgh1!"), 85);
    }

    #[test]
    fn test_evaluate_long_all_classes() {
        assert_eq!(score("Abcdefghijk1!"), 100);
    }

    #[test]
    fn test_evaluate_short_password_still_scores_classes() {
        // no length points, but digit and symbol
        assert_eq!(score("a1!"), 40);
        // single case gets nothing for case
        assert_eq!(score("A"), 0);
    }

    #[test]
    fn test_evaluate_emoji_length_in_utf16_units() {
        // 4 emoji count as 8 units, 11 in total
        assert_eq!(score("🔑🔑🔑🔑Aa1"), 85);
        // 6 emoji reach the long-password bonus
        assert_eq!(score("🔑🔑🔑🔑🔑🔑"), 60);
    }

    #[test]
    fn test_evaluate_long_single_class() {
        assert_eq!(score("abcdefghijkl"), 40);
    }

    #[test]
    fn test_evaluate_strength_tiers() {
        let weak = evaluate_password_strength(&SecretString::new("abcdefgh".to_string().into()));
        let medium = evaluate_password_strength(&SecretString::new("Abcdefgh1".to_string().into()));
        let strong = evaluate_password_strength(&SecretString::new("Abcdefgh1!".to_string().into()));
        assert_eq!(weak.strength(), PasswordStrength::Weak);
        assert_eq!(medium.strength(), PasswordStrength::Medium);
        assert_eq!(strong.strength(), PasswordStrength::Strong);
    }

    #[test]
    fn test_evaluate_score_boundaries() {
        let test_passwords = [
            "",
            "a",
            " ",
            "password",
            "MyPass123!",
            "VeryStrongPassword123!@#",
            "ÀÉÎÕÜàéîõü",
            "🔑🔑🔑🔑🔑🔑🔑🔑🔑🔑🔑🔑Aa1",
        ];

        for pwd_str in test_passwords {
            let value = score(pwd_str);
            assert!(
                value <= 100,
                "Score {} out of bounds for password '{}'",
                value,
                pwd_str
            );
        }
    }
}
