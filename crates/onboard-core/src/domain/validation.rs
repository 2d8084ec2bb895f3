//! Field validation rules for business records
//!
//! Every rule is a pure function over the raw input string, so the rules
//! can be checked before any state is persisted.

use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::fmt;

lazy_static! {
    // International phone format: optional +, optional country code 1, then 9-15 digits
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?1?\d{9,15}$").unwrap();
}

/// Represents a validation error for a single field of a business record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code (should be a constant identifier)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Optional name of the field that failed validation (e.g., "contact.phone")
    pub field: Option<&'static str>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = self.field {
            write!(f, "{}: {} (field {})", self.code, self.message, field)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl Error for ValidationError {}

/// Validation error codes
pub mod error_codes {
    /// FEIN is not a string of exactly nine decimal digits
    pub const INVALID_FEIN: &str = "ERR_VALIDATION_INVALID_FEIN";

    /// Phone number does not match the international phone format
    pub const INVALID_PHONE: &str = "ERR_VALIDATION_INVALID_PHONE";

    /// Industry is not one of the supported choices
    pub const INVALID_INDUSTRY: &str = "ERR_VALIDATION_INVALID_INDUSTRY";

    /// A required name field is empty or whitespace
    pub const BLANK_NAME: &str = "ERR_VALIDATION_BLANK_NAME";
}

/// Check if a FEIN has the correct format: exactly nine decimal digits.
pub fn is_valid_fein(value: &str) -> bool {
    value.len() == 9 && value.chars().all(|c| c.is_ascii_digit())
}

/// Check if a phone number has the correct format.
///
/// Valid formats include:
/// - "+15551234567"
/// - "5551234567"
/// - "+442071838750"
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Validate a FEIN, returning a field-level error when it is malformed
pub fn validate_fein(value: &str) -> Result<(), ValidationError> {
    if is_valid_fein(value) {
        Ok(())
    } else {
        Err(ValidationError {
            code: error_codes::INVALID_FEIN,
            message: "FEIN must be a 9-digit number.".to_string(),
            field: Some("fein"),
        })
    }
}

/// Validate a contact phone number, returning a field-level error when it is malformed
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if is_valid_phone(value) {
        Ok(())
    } else {
        Err(ValidationError {
            code: error_codes::INVALID_PHONE,
            message: "Phone number must be entered in the format: '+999999999'. Up to 15 digits allowed."
                .to_string(),
            field: Some("contact.phone"),
        })
    }
}

/// Validate a business name, rejecting empty or whitespace-only values
pub fn validate_business_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError {
            code: error_codes::BLANK_NAME,
            message: "Name may not be blank.".to_string(),
            field: Some("name"),
        })
    } else {
        Ok(())
    }
}

/// Validate a contact name, rejecting empty or whitespace-only values
pub fn validate_contact_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError {
            code: error_codes::BLANK_NAME,
            message: "Contact name may not be blank.".to_string(),
            field: Some("contact.name"),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_feins() {
        assert!(is_valid_fein("123456789"));
        assert!(is_valid_fein("000000000"));
        assert!(is_valid_fein("999999999"));
    }

    #[test]
    fn test_invalid_feins() {
        assert!(!is_valid_fein("12345678")); // too short
        assert!(!is_valid_fein("1234567890")); // too long
        assert!(!is_valid_fein("12345678a"));
        assert!(!is_valid_fein("12 456789"));
        assert!(!is_valid_fein("12-345678"));
        // Edge cases
        assert!(!is_valid_fein(""));
        assert!(!is_valid_fein("١٢٣٤٥٦٧٨٩")); // non-ASCII digits
    }

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone("+15551234567"));
        assert!(is_valid_phone("15551234567"));
        assert!(is_valid_phone("5551234567"));
        assert!(is_valid_phone("123456789")); // minimum nine digits
        assert!(is_valid_phone("+442071838750"));
        assert!(is_valid_phone("+1234567890123456")); // maximum length
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid_phone("555-123-4567"));
        assert!(!is_valid_phone("+1 555 1234567"));
        assert!(!is_valid_phone("12345678")); // eight digits
        assert!(!is_valid_phone("2234567890123456")); // sixteen digits
        assert!(!is_valid_phone("abcdefghij"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("+"));
        assert!(!is_valid_phone("++15551234567"));
    }

    #[test]
    fn test_validate_fein_error() {
        let error = validate_fein("12345").unwrap_err();
        assert_eq!(error.code, error_codes::INVALID_FEIN);
        assert_eq!(error.message, "FEIN must be a 9-digit number.");
        assert_eq!(error.field, Some("fein"));

        assert!(validate_fein("123456789").is_ok());
    }

    #[test]
    fn test_validate_phone_error() {
        let error = validate_phone("555-1234").unwrap_err();
        assert_eq!(error.code, error_codes::INVALID_PHONE);
        assert_eq!(
            error.message,
            "Phone number must be entered in the format: '+999999999'. Up to 15 digits allowed."
        );
        assert_eq!(error.field, Some("contact.phone"));
    }

    #[test]
    fn test_blank_names_rejected() {
        assert!(validate_business_name("Acme Foods LLC").is_ok());
        assert!(validate_business_name("").is_err());
        assert!(validate_business_name("   ").is_err());

        assert!(validate_contact_name("Dana Smith").is_ok());
        assert!(validate_contact_name("").is_err());
    }

    #[test]
    fn test_display_includes_field() {
        let error = validate_fein("x").unwrap_err();
        assert_eq!(
            error.to_string(),
            "ERR_VALIDATION_INVALID_FEIN: FEIN must be a 9-digit number. (field fein)"
        );
    }
}
