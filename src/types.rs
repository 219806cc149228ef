//! Strength score and tier types.

use std::fmt;

/// Password strength score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 100;

    /// Creates a score, clamping the raw total into `0..=100`.
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(*self)
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Feedback tier shown next to the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// `< 40` is weak, `40..70` is medium, `>= 70` is strong.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0..=39 => PasswordStrength::Weak,
            40..=69 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(PasswordScore::new(140).value(), 100);
        assert_eq!(PasswordScore::new(-10).value(), 0);
        assert_eq!(PasswordScore::new(65).value(), 65);
    }

    #[test]
    fn test_strength_tier_boundaries() {
        assert_eq!(PasswordScore::new(0).strength(), PasswordStrength::Weak);
        assert_eq!(PasswordScore::new(39).strength(), PasswordStrength::Weak);
        assert_eq!(PasswordScore::new(40).strength(), PasswordStrength::Medium);
        assert_eq!(PasswordScore::new(69).strength(), PasswordStrength::Medium);
        assert_eq!(PasswordScore::new(70).strength(), PasswordStrength::Strong);
        assert_eq!(PasswordScore::new(100).strength(), PasswordStrength::Strong);
    }

    #[test]
    fn test_strength_label() {
        assert_eq!(PasswordStrength::Medium.to_string(), "Medium");
    }
}
