//! Password policy rules shown next to sign-up and reset forms.
//!
//! Display only. Nothing here checks a candidate password.

use std::fmt;

/// Minimum number of characters the policy asks for.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRequirement {
    MinLength(usize),
    Uppercase,
    Lowercase,
    Digit,
    SpecialCharacter,
}

impl fmt::Display for PasswordRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordRequirement::MinLength(n) => write!(f, "At least {n} characters long"),
            PasswordRequirement::Uppercase => write!(f, "At least one uppercase letter"),
            PasswordRequirement::Lowercase => write!(f, "At least one lowercase letter"),
            PasswordRequirement::Digit => write!(f, "At least one number"),
            PasswordRequirement::SpecialCharacter => {
                write!(f, "At least one special character (e.g. !@#$%^&*)")
            }
        }
    }
}

/// The rules in the order they are shown.
pub fn password_requirements() -> [PasswordRequirement; 5] {
    [
        PasswordRequirement::MinLength(MIN_PASSWORD_LENGTH),
        PasswordRequirement::Uppercase,
        PasswordRequirement::Lowercase,
        PasswordRequirement::Digit,
        PasswordRequirement::SpecialCharacter,
    ]
}

/// Heading plus one bullet per rule.
pub fn render_password_requirements() -> String {
    let mut out = String::from("Password must contain:\n");
    for rule in password_requirements() {
        out.push_str("  • ");
        out.push_str(&rule.to_string());
        out.push('\n');
    }
    out
}
