//! Field validators shared by the request DTOs.
//!
//! Plugged into `validator` derives via `#[validate(custom(function = ...))]`.

use validator::ValidationError;

/// Reject empty or whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_text() {
        assert!(not_blank("Taro").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(not_blank("").is_err());
    }

    #[test]
    fn rejects_whitespace_only() {
        let err = not_blank(" \t\u{3000}").unwrap_err();
        assert_eq!(err.code, "blank");
    }
}
