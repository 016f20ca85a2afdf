//! Inquiry (sales lead) domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A lead submitted through the contact form or entered by staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub date: String,
    pub city: String,
    pub status: InquiryStatus,
    pub message: Option<String>,
}

status_enum! {
    /// Pipeline stage of an inquiry.
    InquiryStatus("inquiry") default New { New, Contacted, Converted, Lost }
}

fn default_event_type() -> String {
    "Wedding".to_string()
}

/// Public "Get A Free Quote" form submission.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiryRequest {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[serde(rename = "type", default = "default_event_type")]
    pub event_type: String,

    #[validate(custom(function = "shared::validation::validate_event_date"))]
    pub date: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub city: String,

    pub message: Option<String>,
}

impl NewInquiryRequest {
    /// Builds an unsaved inquiry (id 0, status New).
    pub fn into_inquiry(self) -> Inquiry {
        Inquiry {
            id: 0,
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.unwrap_or_default(),
            event_type: self.event_type,
            date: self.date,
            city: self.city.trim().to_string(),
            status: InquiryStatus::New,
            message: self.message.filter(|m| !m.trim().is_empty()),
        }
    }
}

/// Admin edit of every inquiry field.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InquiryInput {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub phone: String,

    #[serde(default)]
    pub email: String,

    #[serde(rename = "type")]
    pub event_type: String,

    pub date: String,

    pub city: String,

    #[validate(custom(function = "crate::models::validate_known_status"))]
    #[serde(default)]
    pub status: InquiryStatus,

    pub message: Option<String>,
}

impl InquiryInput {
    pub fn into_inquiry(self, id: i64) -> Inquiry {
        Inquiry {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            event_type: self.event_type,
            date: self.date,
            city: self.city,
            status: self.status,
            message: self.message,
        }
    }
}

/// Request payload for the status-only update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateInquiryStatusRequest {
    #[validate(custom(function = "crate::models::validate_known_status"))]
    pub status: InquiryStatus,
}

/// Query parameters for the admin inquiry list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListInquiriesQuery {
    pub search: Option<String>,
}

/// Case-insensitive match on name or event type.
pub fn matches_search(inquiry: &Inquiry, term: &str) -> bool {
    let term = term.to_lowercase();
    inquiry.name.to_lowercase().contains(&term) || inquiry.event_type.to_lowercase().contains(&term)
}
