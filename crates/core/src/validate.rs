//! Shared field-presence validation.

use crate::error::CoreError;

/// Require a string field to be present and non-empty.
///
/// The public form contract treats an empty string the same as a missing
/// field, so both are rejected.
pub fn require_str(field: &'static str, value: Option<&str>) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(format!(
            "Missing required field: {field}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_value_is_returned() {
        assert_eq!(require_str("name", Some("Asha")).unwrap(), "Asha");
    }

    #[test]
    fn missing_value_is_rejected() {
        let err = require_str("email", None).unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn empty_value_is_rejected() {
        assert!(require_str("message", Some("")).is_err());
    }
}
