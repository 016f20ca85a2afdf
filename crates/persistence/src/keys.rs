//! Storage keys, one per collection or singleton.

pub const INQUIRIES: &str = "mk_inquiries";
pub const BOOKINGS: &str = "mk_bookings";
pub const SERVICES: &str = "mk_services";
pub const GALLERY: &str = "mk_gallery";
pub const TESTIMONIALS: &str = "mk_testimonials";
pub const TEAM: &str = "mk_team";
pub const FAQS: &str = "mk_faqs";
pub const SETTINGS: &str = "mk_settings";
pub const ABOUT: &str = "mk_about";

/// Access gate flag. Holds `"true"` while an admin is logged in.
pub const ADMIN_AUTHENTICATED: &str = "isAdminAuthenticated";

pub const ALL: [&str; 10] = [
    INQUIRIES,
    BOOKINGS,
    SERVICES,
    GALLERY,
    TESTIMONIALS,
    TEAM,
    FAQS,
    SETTINGS,
    ABOUT,
    ADMIN_AUTHENTICATED,
];
