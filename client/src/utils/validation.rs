//! Validation utilities for user input, run before anything is dispatched.

use crate::core::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result`, for `?` in handlers.
    pub fn into_result(self) -> Result<(), AppError> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate a phone number: optional leading `+`, then 10 to 14 digits.
pub fn validate_phone(phone: &str) -> ValidationResult {
    let phone = phone.trim();
    if phone.is_empty() {
        return ValidationResult::err("Phone number is required");
    }

    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Phone number can only contain digits");
    }

    if !(10..=14).contains(&digits.len()) {
        return ValidationResult::err("Invalid phone number");
    }

    ValidationResult::ok()
}

/// Login identifier: either an email or a phone number.
pub fn validate_identifier(value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err("Email or phone number is required");
    }

    if value.contains('@') {
        validate_email(value)
    } else {
        validate_phone(value)
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.len() < 8 {
        return ValidationResult::err("Password must be at least 8 characters");
    }

    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_numeric());

    if !has_uppercase {
        return ValidationResult::err("Password must contain at least one uppercase letter");
    }

    if !has_lowercase {
        return ValidationResult::err("Password must contain at least one lowercase letter");
    }

    if !has_digit {
        return ValidationResult::err("Password must contain at least one number");
    }

    ValidationResult::ok()
}

/// Transaction passcode: exactly 4 or 6 digits.
pub fn validate_passcode(passcode: &str) -> ValidationResult {
    if passcode.is_empty() {
        return ValidationResult::err("Passcode is required");
    }

    if !passcode.chars().all(|c| c.is_ascii_digit()) || !matches!(passcode.len(), 4 | 6) {
        return ValidationResult::err("Passcode must be 4 or 6 digits");
    }

    ValidationResult::ok()
}

/// NUBAN account number: 10 digits.
pub fn validate_account_number(account_number: &str) -> ValidationResult {
    if account_number.is_empty() {
        return ValidationResult::err("Account number is required");
    }

    if account_number.len() != 10 || !account_number.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Account number must be 10 digits");
    }

    ValidationResult::ok()
}

pub fn validate_amount(amount: f64) -> ValidationResult {
    if !amount.is_finite() || amount <= 0.0 {
        return ValidationResult::err("Amount must be greater than zero");
    }

    ValidationResult::ok()
}

pub fn validate_required(field: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", field));
    }

    ValidationResult::ok()
}
