//! Input validation helpers
//!
//! The checks the services run before committing a record. Every failure
//! is an [`AppError`] bound to the offending field.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use validator::ValidateEmail;

use super::messages;

/// Validate that a required string is non-empty after trimming.
///
/// No upper length bound applies to any text field.
pub fn validate_required_text(value: &str, field: &str, required_msg: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required(field, required_msg));
    }
    Ok(())
}

/// Required email: non-empty first, then syntactically valid.
pub fn validate_email(value: &str, field: &str) -> AppResult<()> {
    validate_required_text(value, field, messages::EMAIL_REQUIRED)?;
    if !value.trim().to_string().validate_email() {
        return Err(AppError::for_field(
            ErrorCode::InvalidFormat,
            field,
            messages::EMAIL_INVALID,
        ));
    }
    Ok(())
}

/// Lower bound on a money amount.
pub fn validate_min_decimal(value: Decimal, min: Decimal, field: &str, msg: &str) -> AppResult<()> {
    if value < min {
        return Err(AppError::for_field(ErrorCode::ValueOutOfRange, field, msg));
    }
    Ok(())
}

/// Lower bound on a count.
pub fn validate_min_count(value: u32, min: u32, field: &str, msg: &str) -> AppResult<()> {
    if value < min {
        return Err(AppError::for_field(ErrorCode::ValueOutOfRange, field, msg));
    }
    Ok(())
}

/// Profile password strength: length first, then each character class.
pub fn validate_password_strength(value: &str, field: &str) -> AppResult<()> {
    if value.chars().count() < messages::PASSWORD_MIN_LEN {
        return Err(AppError::for_field(
            ErrorCode::PasswordTooShort,
            field,
            messages::PASSWORD_TOO_SHORT,
        ));
    }

    let checks: [(fn(&char) -> bool, &str); 4] = [
        (char::is_ascii_uppercase, messages::PASSWORD_NEEDS_UPPERCASE),
        (char::is_ascii_lowercase, messages::PASSWORD_NEEDS_LOWERCASE),
        (char::is_ascii_digit, messages::PASSWORD_NEEDS_DIGIT),
        (is_special, messages::PASSWORD_NEEDS_SPECIAL),
    ];
    for (class, msg) in checks {
        if !value.chars().any(|c| class(&c)) {
            return Err(AppError::for_field(ErrorCode::PasswordTooWeak, field, msg));
        }
    }
    Ok(())
}

/// Anything that is not an ASCII letter or digit counts as special.
pub fn is_special(c: &char) -> bool {
    !c.is_ascii_alphanumeric()
}

/// Name comparison used by every uniqueness check.
pub fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        let err = validate_required_text("   ", "name", "Name is required").unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "Name is required");
        assert_eq!(err.field(), Some("name"));

        assert!(validate_required_text("Dishes", "name", "x").is_ok());
    }

    #[test]
    fn test_long_text_accepted() {
        let long = "x".repeat(5000);
        assert!(validate_required_text(&long, "name", "Name is required").is_ok());

        let password = format!("Aa1!{}", "z".repeat(300));
        assert!(validate_password_strength(&password, "password").is_ok());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("owner@kedai.my", "email").is_ok());
        let err = validate_email("", "email").unwrap_err();
        assert_eq!(err.message, "Email is required");
        let err = validate_email("not-an-email", "email").unwrap_err();
        assert_eq!(err.message, "Invalid email address");
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_password_strength_order() {
        let err = validate_password_strength("Ab1!", "password").unwrap_err();
        assert_eq!(err.code, ErrorCode::PasswordTooShort);

        let err = validate_password_strength("abcdefghijk1!", "password").unwrap_err();
        assert_eq!(err.message, messages::PASSWORD_NEEDS_UPPERCASE);

        let err = validate_password_strength("ABCDEFGHIJK1!", "password").unwrap_err();
        assert_eq!(err.message, messages::PASSWORD_NEEDS_LOWERCASE);

        let err = validate_password_strength("Abcdefghijkl!", "password").unwrap_err();
        assert_eq!(err.message, messages::PASSWORD_NEEDS_DIGIT);

        let err = validate_password_strength("Abcdefghijk12", "password").unwrap_err();
        assert_eq!(err.message, messages::PASSWORD_NEEDS_SPECIAL);
        assert_eq!(err.code, ErrorCode::PasswordTooWeak);

        assert!(validate_password_strength("Abcdefghij1!", "password").is_ok());
    }

    #[test]
    fn test_min_bounds() {
        assert!(validate_min_decimal(Decimal::ZERO, Decimal::ZERO, "price", "m").is_ok());
        assert!(validate_min_decimal(Decimal::new(-1, 2), Decimal::ZERO, "price", "m").is_err());
        assert!(validate_min_count(0, 1, "seats", "m").is_err());
        assert!(validate_min_count(1, 1, "seats", "m").is_ok());
    }

    #[test]
    fn test_same_name_ignores_case() {
        assert!(same_name("Dishes", "dishes"));
        assert!(same_name(" Add On", "add on "));
        assert!(!same_name("Dishes", "Drinks"));
    }
}
