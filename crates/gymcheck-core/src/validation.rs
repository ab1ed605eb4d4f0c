use std::collections::BTreeMap;

use crate::constants::{CLASS_REMINDER_OPTIONS, MIN_PASSWORD_LENGTH, PASSWORD_SPECIAL_CHARS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordValidation {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_special_char: bool,
}

impl PasswordValidation {
    /// Special characters are reported but not required.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.min_length && self.has_uppercase && self.has_lowercase && self.has_number
    }

    /// Message for the first failing rule, checked in display order.
    #[must_use]
    pub const fn first_error(&self) -> Option<&'static str> {
        if !self.min_length {
            Some("Password must be at least 8 characters")
        } else if !self.has_uppercase {
            Some("Password must contain at least one uppercase letter")
        } else if !self.has_lowercase {
            Some("Password must contain at least one lowercase letter")
        } else if !self.has_number {
            Some("Password must contain at least one number")
        } else {
            None
        }
    }
}

#[must_use]
pub fn validate_password(password: &str) -> PasswordValidation {
    PasswordValidation {
        min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
        has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        has_number: password.chars().any(|c| c.is_ascii_digit()),
        has_special_char: password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)),
    }
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot in the domain with
/// something on both sides of it.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(idx, c)| c == '.' && idx > 0 && idx + 1 < domain.len())
}

/// `HH:00` on the hour, as offered for coach daily summaries.
#[must_use]
pub fn is_valid_daily_summary_time(value: &str) -> bool {
    let Some((hour, minute)) = value.split_once(':') else {
        return false;
    };
    hour.len() == 2 && minute == "00" && hour.parse::<u8>().is_ok_and(|hour| hour < 24)
}

#[must_use]
pub fn is_valid_reminder_minutes(minutes: u32) -> bool {
    CLASS_REMINDER_OPTIONS.contains(&minutes)
}

/// Field name to message, one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .fields
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&rendered)
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.insert("email", "Please enter a valid email");
        }
        if let Some(message) = validate_password(&self.password).first_error() {
            errors.insert("password", message);
        }
        if self.password != self.confirm_password {
            errors.insert("confirmPassword", "Passwords do not match");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.email.trim().is_empty() || self.password.is_empty() {
            errors.insert("general", "Please enter email and password");
        }
        errors.into_result()
    }
}

#[must_use]
pub fn forgot_password_email_error(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some("Please enter your email")
    } else if !is_valid_email(email.trim()) {
        Some("Please enter a valid email")
    } else {
        None
    }
}
