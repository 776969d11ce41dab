//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen based on:
//! - Reasonable UX limits for names, customers, product labels
//! - The document store has no built-in length enforcement

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product, resharpening item, salesperson, customer, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate an email address: non-empty, bounded, and shaped like `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;

    // Same shape check the admin forms apply: one '@', non-empty local part,
    // domain with at least one dot and no whitespace anywhere.
    let mut parts = email.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    let valid = parts.next().is_none()
        && !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace);

    if !valid {
        return Err(AppError::validation("Invalid email format".to_string()));
    }
    Ok(())
}

/// Validate a password at registration time.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.trim().is_empty() {
        return Err(AppError::validation("password must not be empty".to_string()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password is too long (max {MAX_PASSWORD_LEN} chars)"
        )));
    }
    Ok(())
}

/// Validate an order quantity (must be at least 1).
pub fn validate_quantity(quantity: i64) -> Result<(), AppError> {
    if quantity < 1 {
        return Err(AppError::validation(
            "quantity must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Validate a monetary amount that must not be negative.
pub fn validate_non_negative_price(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be a non-negative amount"
        )));
    }
    Ok(())
}

/// Validate a monetary amount that must be strictly positive.
pub fn validate_positive_price(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be a positive amount"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("sales@toolworks.in").is_ok());
        assert!(validate_email("a.b+c@shop.example.com").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("two@@signs.com").is_err());
        assert!(validate_email("@missing-local.com").is_err());
        assert!(validate_email("no-dot@domain").is_err());
        assert!(validate_email("space in@local.com").is_err());
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Blade A", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(300), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_quantity_and_prices() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());

        assert!(validate_non_negative_price(0.0, "rawPrice").is_ok());
        assert!(validate_non_negative_price(-0.01, "rawPrice").is_err());
        assert!(validate_non_negative_price(f64::NAN, "rawPrice").is_err());

        assert!(validate_positive_price(12.5, "rate").is_ok());
        assert!(validate_positive_price(0.0, "rate").is_err());
    }
}
