//! Booking domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A confirmed or quoted event booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub client: String,
    pub event: String,
    pub date: String,
    pub guests: u32,
    pub budget: String,
    pub status: BookingStatus,
}

status_enum! {
    /// Booking lifecycle stage.
    BookingStatus("booking") default Quoted { Quoted, Confirmed, Completed, Cancelled }
}

impl BookingStatus {
    /// Quoted and confirmed bookings count as active on the dashboard.
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Quoted | BookingStatus::Confirmed)
    }
}

/// Create/edit payload from the booking modal.
///
/// Client and event name are required; everything else may be left blank.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingInput {
    /// Caller-chosen id for new bookings; generated when absent.
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub client: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub event: String,

    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub guests: u32,

    #[serde(default)]
    pub budget: String,

    #[validate(custom(function = "crate::models::validate_known_status"))]
    #[serde(default)]
    pub status: BookingStatus,
}

impl BookingInput {
    pub fn into_booking(self, id: i64) -> Booking {
        Booking {
            id,
            client: self.client,
            event: self.event,
            date: self.date,
            guests: self.guests,
            budget: self.budget,
            status: self.status,
        }
    }
}

/// Request payload for the status-only update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBookingStatusRequest {
    #[validate(custom(function = "crate::models::validate_known_status"))]
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_status_serialization() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Confirmed).unwrap(),
            "\"Confirmed\""
        );
        let status: BookingStatus = serde_json::from_str("\"Cancelled\"").unwrap();
        assert_eq!(status, BookingStatus::Cancelled);
    }

    #[test]
    fn test_booking_status_is_active() {
        assert!(BookingStatus::Quoted.is_active());
        assert!(BookingStatus::Confirmed.is_active());
        assert!(!BookingStatus::Completed.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
    }

    #[test]
    fn test_booking_input_requires_client_and_event() {
        let input: BookingInput = serde_json::from_value(json!({
            "client": "",
            "event": "Annual Gala"
        }))
        .unwrap();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("client"));
        assert!(!errors.field_errors().contains_key("event"));
    }

    #[test]
    fn test_booking_input_defaults() {
        let input: BookingInput = serde_json::from_value(json!({
            "client": "Rajesh Kumar",
            "event": "Wedding Reception"
        }))
        .unwrap();
        assert!(input.validate().is_ok());
        assert_eq!(input.id, None);

        let booking = input.into_booking(0);
        assert_eq!(booking.status, BookingStatus::Quoted);
        assert_eq!(booking.guests, 0);
    }
}
