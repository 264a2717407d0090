use crate::sanitize::sanitize;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Why a submission was refused before any delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields")]
    MissingRequiredFields,

    #[error("bad email format")]
    InvalidEmail,
}

/// Form fields as they arrive, before sanitization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOrderFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub clothing_type: Option<String>,
    pub custom_text: Option<String>,
}

/// A customer's order with every text field sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSubmission {
    pub name: String,
    pub email: String,
    pub clothing_type: String,
    /// Empty when the customer left the field blank.
    pub custom_text: String,
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"))
}

/// Basic `local@domain.tld` shape check. Not RFC 5322 validation.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

impl OrderSubmission {
    /// Sanitize raw form fields. Absent fields become empty strings.
    pub fn from_fields(fields: &RawOrderFields) -> Self {
        let clean = |field: &Option<String>| sanitize(field.as_deref().unwrap_or_default());

        Self {
            name: clean(&fields.name),
            email: clean(&fields.email),
            clothing_type: clean(&fields.clothing_type),
            custom_text: clean(&fields.custom_text),
        }
    }

    /// Check required fields first, then the email shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.clothing_type.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, clothing_type: &str) -> RawOrderFields {
        RawOrderFields {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            clothing_type: Some(clothing_type.to_string()),
            custom_text: None,
        }
    }

    // ==================== Email Format Tests ====================

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("ann@x.com"));
        assert!(is_valid_email("first.last+tag@shop.example.it"));
    }

    #[test]
    fn test_email_without_at_is_rejected() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("ann.x.com"));
    }

    #[test]
    fn test_email_without_dot_after_at_is_rejected() {
        assert!(!is_valid_email("ann@localhost"));
        assert!(!is_valid_email("ann.smith@host"));
    }

    #[test]
    fn test_email_with_whitespace_or_double_at_is_rejected() {
        assert!(!is_valid_email("ann smith@x.com"));
        assert!(!is_valid_email("ann@@x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("ann@x."));
    }

    // ==================== Sanitization Tests ====================

    #[test]
    fn test_from_fields_sanitizes_every_field() {
        let raw = RawOrderFields {
            name: Some("  <b>Ann</b> ".to_string()),
            email: Some(" ann@x.com ".to_string()),
            clothing_type: Some("<i>Hoodie</i>".to_string()),
            custom_text: Some("<script>x</script>Ciao".to_string()),
        };

        let submission = OrderSubmission::from_fields(&raw);
        assert_eq!(submission.name, "Ann");
        assert_eq!(submission.email, "ann@x.com");
        assert_eq!(submission.clothing_type, "Hoodie");
        assert_eq!(submission.custom_text, "xCiao");
    }

    #[test]
    fn test_absent_fields_become_empty() {
        let submission = OrderSubmission::from_fields(&RawOrderFields::default());
        assert_eq!(submission.name, "");
        assert!(submission.custom_text.is_empty());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_complete_submission_is_valid() {
        let submission = OrderSubmission::from_fields(&fields("Ann", "ann@x.com", "Hoodie"));
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn test_missing_each_required_field() {
        for raw in [
            fields("", "ann@x.com", "Hoodie"),
            fields("Ann", "", "Hoodie"),
            fields("Ann", "ann@x.com", ""),
        ] {
            let submission = OrderSubmission::from_fields(&raw);
            assert_eq!(
                submission.validate(),
                Err(ValidationError::MissingRequiredFields)
            );
        }
    }

    #[test]
    fn test_field_that_sanitizes_to_empty_counts_as_missing() {
        let submission = OrderSubmission::from_fields(&fields("<b></b>", "ann@x.com", "Hoodie"));
        assert_eq!(
            submission.validate(),
            Err(ValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_bad_email_is_rejected() {
        let submission = OrderSubmission::from_fields(&fields("Ann", "not-an-email", "Hoodie"));
        assert_eq!(submission.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_missing_fields_reported_before_bad_email() {
        let submission = OrderSubmission::from_fields(&fields("", "not-an-email", "Hoodie"));
        assert_eq!(
            submission.validate(),
            Err(ValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_custom_text_is_optional() {
        let mut raw = fields("Ann", "ann@x.com", "T-Shirt");
        raw.custom_text = Some("   ".to_string());
        let submission = OrderSubmission::from_fields(&raw);
        assert!(submission.validate().is_ok());
        assert!(submission.custom_text.is_empty());
    }
}
