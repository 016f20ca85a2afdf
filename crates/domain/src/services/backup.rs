//! Full-system JSON backup.
//!
//! A backup holds the seven record collections (not the settings or about
//! singletons) with a capture timestamp and a fixed format version. There is
//! no restore path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Booking, Faq, GalleryImage, Inquiry, Service, TeamMember, Testimonial};

/// Format version written to every backup.
pub const BACKUP_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupMeta {
    pub timestamp: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupData {
    pub inquiries: Vec<Inquiry>,
    pub bookings: Vec<Booking>,
    pub testimonials: Vec<Testimonial>,
    pub services: Vec<Service>,
    pub gallery: Vec<GalleryImage>,
    pub team: Vec<TeamMember>,
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemBackup {
    pub meta: BackupMeta,
    pub data: BackupData,
}

impl SystemBackup {
    pub fn new(data: BackupData, at: DateTime<Utc>) -> Self {
        Self {
            meta: BackupMeta {
                timestamp: shared::dates::iso_timestamp(at),
                version: BACKUP_VERSION.to_string(),
            },
            data,
        }
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// File name for a backup download: `mk_event_backup_<YYYY-MM-DD>.json`.
pub fn backup_file_name(at: DateTime<Utc>) -> String {
    format!("mk_event_backup_{}.json", shared::dates::iso_date(at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::TimeZone;

    fn seeded_data() -> BackupData {
        BackupData {
            inquiries: seed::default_inquiries(),
            bookings: seed::default_bookings(),
            testimonials: seed::default_testimonials(),
            services: seed::default_services(),
            gallery: seed::default_gallery(),
            team: seed::default_team(),
            faqs: seed::default_faqs(),
        }
    }

    #[test]
    fn test_backup_document_shape() {
        let at = Utc.with_ymd_and_hms(2024, 12, 25, 10, 30, 0).unwrap();
        let backup = SystemBackup::new(seeded_data(), at);
        let json = backup.to_pretty_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["meta"]["version"], "1.0");
        assert_eq!(value["meta"]["timestamp"], "2024-12-25T10:30:00.000Z");
        let data = value["data"].as_object().unwrap();
        let keys: Vec<&str> = data.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["inquiries", "bookings", "testimonials", "services", "gallery", "team", "faqs"]
        );
        assert!(value.get("settings").is_none());
        assert!(json.contains("\n  \"meta\""));
    }

    #[test]
    fn test_backup_parses_back() {
        let backup = SystemBackup::new(seeded_data(), Utc::now());
        let json = backup.to_pretty_json().unwrap();
        let parsed: SystemBackup = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, backup);
        assert_eq!(parsed.data.gallery.len(), 9);
        assert_eq!(parsed.data.bookings[1].id, 102);
    }

    #[test]
    fn test_backup_file_name() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(backup_file_name(at), "mk_event_backup_2025-03-01.json");
    }
}
