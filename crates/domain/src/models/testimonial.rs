//! Testimonial (client review) domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A client review. Only approved reviews appear on the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub location: String,
    pub rating: u8,
    pub text: String,
    pub image: Option<String>,
    #[serde(default)]
    pub status: TestimonialStatus,
}

impl Testimonial {
    pub fn is_approved(&self) -> bool {
        self.status == TestimonialStatus::Approved
    }
}

status_enum! {
    /// Moderation state of a review.
    TestimonialStatus("testimonial") default Pending { Pending, Approved, Rejected }
}

/// Review submission and edit payload. The status is not accepted from
/// callers; new reviews start out pending and edits keep the current status.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonialRequest {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,

    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub location: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub text: String,

    #[validate(custom(function = "shared::validation::validate_optional_image_source"))]
    pub image: Option<String>,
}

impl NewTestimonialRequest {
    pub fn into_testimonial(self) -> Testimonial {
        self.into_existing(0, TestimonialStatus::Pending)
    }

    /// Builds the edited version of a stored review.
    pub fn into_existing(self, id: i64, status: TestimonialStatus) -> Testimonial {
        Testimonial {
            id,
            name: self.name,
            role: self.role,
            location: self.location,
            rating: self.rating,
            text: self.text,
            image: self.image.filter(|i| !i.is_empty()),
            status,
        }
    }
}

/// Request payload for moderation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTestimonialStatusRequest {
    #[validate(custom(function = "crate::models::validate_known_status"))]
    pub status: TestimonialStatus,
}
