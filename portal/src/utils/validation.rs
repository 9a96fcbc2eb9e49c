//! Input validation helpers
//!
//! Form dialogs only check that required fields are present. Blank or
//! whitespace-only text counts as missing.

use shared::error::AppError;

/// Validate that a required string is non-empty.
pub fn validate_required_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    Ok(())
}

/// Validate that a required selection was made.
pub fn validate_required<T: Copy>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::required_field(field))
}

/// Validate several required text fields at once, reporting the first missing one.
pub fn validate_required_fields(fields: &[(&str, &str)]) -> Result<(), AppError> {
    for (field, value) in fields {
        validate_required_text(value, field)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_blank_is_missing() {
        assert!(validate_required_text("Sarah", "name").is_ok());
        let err = validate_required_text("   ", "name").unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.detail("field").unwrap(), "name");
    }

    #[test]
    fn test_first_missing_field_is_reported() {
        let err = validate_required_fields(&[("name", "A"), ("email", ""), ("department", "")])
            .unwrap_err();
        assert_eq!(err.detail("field").unwrap(), "email");
    }

    #[test]
    fn test_required_selection() {
        assert_eq!(validate_required(Some(3), "category").unwrap(), 3);
        assert!(validate_required::<u8>(None, "category").is_err());
    }
}
