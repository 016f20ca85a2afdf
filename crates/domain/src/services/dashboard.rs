//! Admin dashboard statistics.

use serde::Serialize;

use crate::models::{Booking, GalleryImage, Inquiry, InquiryStatus, Service};

/// Number of inquiries listed under "recent" on the dashboard.
pub const RECENT_INQUIRY_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_inquiries: usize,
    pub new_inquiries: usize,
    pub active_bookings: usize,
    pub total_services: usize,
    pub gallery_images: usize,
    pub recent_inquiries: Vec<Inquiry>,
}

impl DashboardStats {
    /// Counts are taken from the collections as stored; "recent" is the first
    /// five inquiries in collection order.
    pub fn compute(
        inquiries: &[Inquiry],
        bookings: &[Booking],
        services: &[Service],
        gallery: &[GalleryImage],
    ) -> Self {
        Self {
            total_inquiries: inquiries.len(),
            new_inquiries: inquiries
                .iter()
                .filter(|i| i.status == InquiryStatus::New)
                .count(),
            active_bookings: bookings.iter().filter(|b| b.status.is_active()).count(),
            total_services: services.len(),
            gallery_images: gallery.len(),
            recent_inquiries: inquiries.iter().take(RECENT_INQUIRY_LIMIT).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;
    use crate::seed;

    #[test]
    fn test_seeded_dashboard() {
        let stats = DashboardStats::compute(
            &seed::default_inquiries(),
            &seed::default_bookings(),
            &seed::default_services(),
            &seed::default_gallery(),
        );
        assert_eq!(stats.total_inquiries, 3);
        assert_eq!(stats.new_inquiries, 1);
        assert_eq!(stats.active_bookings, 2);
        assert_eq!(stats.total_services, 6);
        assert_eq!(stats.gallery_images, 9);
        assert_eq!(stats.recent_inquiries.len(), 3);
    }

    #[test]
    fn test_completed_bookings_are_not_active() {
        let mut bookings = seed::default_bookings();
        bookings[0].status = BookingStatus::Completed;
        bookings[1].status = BookingStatus::Cancelled;
        let stats = DashboardStats::compute(&[], &bookings, &[], &[]);
        assert_eq!(stats.active_bookings, 0);
    }

    #[test]
    fn test_recent_is_capped() {
        let mut inquiries = Vec::new();
        for id in 1..=8 {
            let mut inquiry = seed::default_inquiries().remove(0);
            inquiry.id = id;
            inquiries.push(inquiry);
        }
        let stats = DashboardStats::compute(&inquiries, &[], &[], &[]);
        assert_eq!(stats.recent_inquiries.len(), RECENT_INQUIRY_LIMIT);
        assert_eq!(stats.recent_inquiries[0].id, 1);
        assert_eq!(stats.new_inquiries, 8);
    }
}
