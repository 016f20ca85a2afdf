//! Common validation utilities.

use regex::Regex;
use validator::ValidationError;

use crate::dates::parse_iso_date;

/// Largest accepted upload (2 MB) for images embedded as data URLs.
pub const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

lazy_static::lazy_static! {
    /// Phone numbers: optional leading `+`, then digits, spaces, dashes or parentheses.
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9 ()\-]{6,20}$").unwrap();
}

/// Validates that a required text field contains something other than whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Please fill in required fields".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates a contact phone number.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let phone = phone.trim();
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if PHONE_REGEX.is_match(phone) && digits >= 6 {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_format");
        err.message = Some("Phone number must contain 6-20 digits".into());
        Err(err)
    }
}

/// Validates an event date in `YYYY-MM-DD` form.
pub fn validate_event_date(date: &str) -> Result<(), ValidationError> {
    if parse_iso_date(date).is_some() {
        Ok(())
    } else {
        let mut err = ValidationError::new("date_format");
        err.message = Some("Date must be in YYYY-MM-DD format".into());
        Err(err)
    }
}

/// Validates an image reference.
///
/// Accepts absolute http(s) URLs, site-relative paths, and `data:image/...`
/// URLs produced by uploads. Uploaded images larger than [`MAX_UPLOAD_BYTES`]
/// are rejected.
pub fn validate_image_source(source: &str) -> Result<(), ValidationError> {
    if let Some(payload) = source.strip_prefix("data:image/") {
        // base64 expands 3 bytes into 4 characters
        let encoded = payload.split_once(',').map(|(_, data)| data).unwrap_or("");
        if encoded.len() / 4 * 3 > MAX_UPLOAD_BYTES {
            let mut err = ValidationError::new("image_too_large");
            err.message = Some("File size too large. Please upload an image smaller than 2MB.".into());
            return Err(err);
        }
        return Ok(());
    }

    if source.starts_with("https://") || source.starts_with("http://") || source.starts_with('/') {
        Ok(())
    } else {
        let mut err = ValidationError::new("image_source");
        err.message = Some("Please upload an image.".into());
        Err(err)
    }
}

/// Like [`validate_image_source`], but an empty string means "no image".
pub fn validate_optional_image_source(source: &str) -> Result<(), ValidationError> {
    if source.is_empty() {
        Ok(())
    } else {
        validate_image_source(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Rajesh").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn test_validate_phone_accepts_seed_formats() {
        assert!(validate_phone("+91 9876543210").is_ok());
        assert!(validate_phone("+91 98399 87117").is_ok());
        assert!(validate_phone("(022) 555-0199").is_ok());
    }

    #[test]
    fn test_validate_phone_rejects_garbage() {
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("12").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_validate_event_date() {
        assert!(validate_event_date("2024-11-15").is_ok());
        assert!(validate_event_date("15-11-2024").is_err());
        assert!(validate_event_date("").is_err());
    }

    #[test]
    fn test_validate_image_source_urls() {
        assert!(validate_image_source("https://picsum.photos/800/600?random=10").is_ok());
        assert!(validate_image_source("/uploads/stage.jpg").is_ok());
        assert!(validate_image_source("").is_err());
        assert!(validate_image_source("ftp://example.com/a.png").is_err());
    }

    #[test]
    fn test_validate_optional_image_source() {
        assert!(validate_optional_image_source("").is_ok());
        assert!(validate_optional_image_source("not-a-url").is_err());
    }

    #[test]
    fn test_validate_image_source_data_url_size() {
        assert!(validate_image_source("data:image/png;base64,iVBORw0KGgo=").is_ok());

        let oversized = format!("data:image/png;base64,{}", "A".repeat(MAX_UPLOAD_BYTES * 2));
        let err = validate_image_source(&oversized).unwrap_err();
        assert_eq!(err.code, "image_too_large");
    }
}
