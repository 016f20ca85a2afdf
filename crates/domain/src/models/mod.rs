//! Domain models for the MK Events site.
//!
//! Every collection record implements [`Record`], which is what lets the
//! persistence layer store, look up and remove records generically.

/// Declares a workflow status stored as its bare name.
///
/// Values other than the listed variants are kept verbatim in `Other`, so a
/// collection holding a hand-edited status still loads. Parsing through
/// [`std::str::FromStr`] only accepts the listed names.
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) default $default:ident { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                    $name::Other(value) => value,
                }
            }
        }

        impl $crate::models::KnownStatus for $name {
            fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match $name::from(s.to_string()) {
                    $name::Other(other) => Err(format!("Unknown {} status: {}", $label, other)),
                    known => Ok(known),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $(stringify!($variant) => $name::$variant,)+
                    _ => $name::Other(value),
                }
            }
        }

        impl From<$name> for String {
            fn from(status: $name) -> Self {
                match status {
                    $name::Other(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }
    };
}

pub mod about;
pub mod booking;
pub mod faq;
pub mod gallery;
pub mod inquiry;
pub mod service;
pub mod site_settings;
pub mod team;
pub mod testimonial;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use shared::ids::IdGenerator;
use std::fmt;
use validator::ValidationError;

pub use about::AboutData;
pub use booking::{Booking, BookingStatus};
pub use faq::Faq;
pub use gallery::GalleryImage;
pub use inquiry::{Inquiry, InquiryStatus};
pub use service::Service;
pub use site_settings::{SiteSettings, TrustedHtml};
pub use team::TeamMember;
pub use testimonial::{Testimonial, TestimonialStatus};

/// A record held in one of the site's ordered collections.
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Identity type: `i64` for most collections, `String` for services.
    type Id: Clone + PartialEq + fmt::Display + fmt::Debug + Send + Sync;

    fn id(&self) -> &Self::Id;

    /// Whether the caller supplied an id (`0` and `""` mean "none").
    fn has_id(&self) -> bool;

    /// Replaces the id with a freshly generated one.
    fn assign_id(&mut self, ids: &IdGenerator);
}

/// Distinguishes statuses this service writes from ones it merely preserves.
pub trait KnownStatus {
    fn is_known(&self) -> bool;
}

/// Rejects request statuses outside the listed workflow values.
pub fn validate_known_status<S: KnownStatus + fmt::Display>(
    status: &S,
) -> Result<(), ValidationError> {
    if status.is_known() {
        Ok(())
    } else {
        let mut err = ValidationError::new("unknown_status");
        err.message = Some(format!("Unknown status: {}", status).into());
        Err(err)
    }
}

/// Implements [`Record`] for a struct with a numeric `id: i64` field.
macro_rules! numeric_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::Record for $ty {
                type Id = i64;

                fn id(&self) -> &i64 {
                    &self.id
                }

                fn has_id(&self) -> bool {
                    self.id != 0
                }

                fn assign_id(&mut self, ids: &shared::ids::IdGenerator) {
                    self.id = ids.next_numeric();
                }
            }
        )+
    };
}

numeric_record!(Inquiry, Booking, GalleryImage, Testimonial, TeamMember, Faq);

/// Request payload for removing several records at once.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteRequest<Id> {
    pub ids: Vec<Id>,
}

/// Response for bulk deletes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteResponse {
    pub requested: usize,
    pub removed: usize,
    pub remaining: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_survives_round_trip() {
        let status: InquiryStatus = serde_json::from_str("\"Follow-up\"").unwrap();
        assert_eq!(status, InquiryStatus::Other("Follow-up".to_string()));
        assert_eq!(status.to_string(), "Follow-up");
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"Follow-up\"");
        assert!(validate_known_status(&status).is_err());
    }

    #[test]
    fn test_known_status_is_not_other() {
        let status: BookingStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(status, BookingStatus::Completed);
        assert!(validate_known_status(&status).is_ok());
        assert!("Follow-up".parse::<BookingStatus>().is_err());
    }
}
