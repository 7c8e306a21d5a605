//! Password strength scoring.

use serde::Serialize;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters accepted by the special-character requirement.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Score at or above which a password is accepted.
pub const VALID_SCORE: u8 = 4;

/// One of the five checks a password is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl Requirement {
    /// Display order of the requirement list on the register page.
    pub const ALL: [Requirement; 5] = [
        Requirement::Length,
        Requirement::Uppercase,
        Requirement::Lowercase,
        Requirement::Number,
        Requirement::Special,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Requirement::Length => "length",
            Requirement::Uppercase => "uppercase",
            Requirement::Lowercase => "lowercase",
            Requirement::Number => "number",
            Requirement::Special => "special",
        }
    }

    pub fn is_met_by(&self, password: &str) -> bool {
        match self {
            Requirement::Length => password.chars().count() >= MIN_PASSWORD_LENGTH,
            Requirement::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Requirement::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Requirement::Number => password.chars().any(|c| c.is_ascii_digit()),
            Requirement::Special => password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PasswordRequirements {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordRequirements {
    pub fn evaluate(password: &str) -> Self {
        Self {
            length: Requirement::Length.is_met_by(password),
            uppercase: Requirement::Uppercase.is_met_by(password),
            lowercase: Requirement::Lowercase.is_met_by(password),
            number: Requirement::Number.is_met_by(password),
            special: Requirement::Special.is_met_by(password),
        }
    }

    pub fn get(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::Length => self.length,
            Requirement::Uppercase => self.uppercase,
            Requirement::Lowercase => self.lowercase,
            Requirement::Number => self.number,
            Requirement::Special => self.special,
        }
    }

    /// Requirements paired with their outcome, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Requirement, bool)> + '_ {
        Requirement::ALL.into_iter().map(move |req| (req, self.get(req)))
    }

    pub fn met_count(&self) -> u8 {
        self.iter().filter(|(_, met)| *met).count() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => PasswordStrength::Weak,
            3 => PasswordStrength::Fair,
            4 => PasswordStrength::Good,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Fair => "fair",
            PasswordStrength::Good => "good",
            PasswordStrength::Strong => "strong",
        }
    }

    /// Class list for the strength meter fill element.
    pub fn css_class(&self) -> String {
        format!("strength-fill strength-{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReport {
    pub requirements: PasswordRequirements,
    pub score: u8,
    pub strength: PasswordStrength,
    pub is_valid: bool,
}

/// Scores `password` from scratch. Every input, including the empty
/// string, yields a report.
pub fn score_password(password: &str) -> PasswordReport {
    let requirements = PasswordRequirements::evaluate(password);
    let score = requirements.met_count();
    PasswordReport {
        requirements,
        score,
        strength: PasswordStrength::from_score(score),
        is_valid: score >= VALID_SCORE,
    }
}
