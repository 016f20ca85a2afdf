//! Domain layer for the MK Events backend.
//!
//! This crate contains:
//! - Domain models (inquiries, bookings, services, gallery, testimonials, team, FAQs,
//!   site settings, about content)
//! - Seed content for first start
//! - Services: notifications, CSV export, backup, dashboard stats, admin credentials

pub mod models;
pub mod seed;
pub mod services;
