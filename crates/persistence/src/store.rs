//! The site's content store.
//!
//! [`ContentStore`] owns the seven record collections and the two singleton
//! records, each bound to its own storage key. Every mutating operation writes
//! the affected key back and raises exactly one notice through the configured
//! [`NotificationSink`]. Operations never fail: an unknown id makes an update
//! or delete a no-op, and storage problems are logged by [`Persisted`].
//!
//! Callers are expected to validate input before calling in.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use domain::models::inquiry::matches_search;
use domain::models::{
    AboutData, Booking, BookingStatus, Faq, GalleryImage, Inquiry, InquiryStatus, Record, Service,
    SiteSettings, TeamMember, Testimonial, TestimonialStatus,
};
use domain::seed;
use domain::services::backup::{backup_file_name, BackupData, SystemBackup};
use domain::services::dashboard::DashboardStats;
use domain::services::export::{csv_file_name, render_csv, ExportCollection, ExportError};
use domain::services::notification::{Notice, NotificationSink};
use shared::ids::IdGenerator;

use crate::keys;
use crate::persisted::Persisted;
use crate::storage::KeyValueStorage;

/// A rendered download.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub file_name: String,
    pub content: String,
}

pub struct ContentStore {
    inquiries: Persisted<Vec<Inquiry>>,
    bookings: Persisted<Vec<Booking>>,
    services: Persisted<Vec<Service>>,
    gallery: Persisted<Vec<GalleryImage>>,
    testimonials: Persisted<Vec<Testimonial>>,
    team: Persisted<Vec<TeamMember>>,
    faqs: Persisted<Vec<Faq>>,
    settings: Persisted<SiteSettings>,
    about: Persisted<AboutData>,
    notifier: Arc<dyn NotificationSink>,
    ids: IdGenerator,
}

impl ContentStore {
    /// Loads every key, seeding the ones that are absent or unreadable.
    pub fn open(
        storage: Arc<dyn KeyValueStorage>,
        notifier: Arc<dyn NotificationSink>,
        ids: IdGenerator,
    ) -> Self {
        let store = Self {
            inquiries: Persisted::load(storage.clone(), keys::INQUIRIES, seed::default_inquiries()),
            bookings: Persisted::load(storage.clone(), keys::BOOKINGS, seed::default_bookings()),
            services: Persisted::load(storage.clone(), keys::SERVICES, seed::default_services()),
            gallery: Persisted::load(storage.clone(), keys::GALLERY, seed::default_gallery()),
            testimonials: Persisted::load(
                storage.clone(),
                keys::TESTIMONIALS,
                seed::default_testimonials(),
            ),
            team: Persisted::load(storage.clone(), keys::TEAM, seed::default_team()),
            faqs: Persisted::load(storage.clone(), keys::FAQS, seed::default_faqs()),
            settings: Persisted::load(storage.clone(), keys::SETTINGS, seed::default_settings()),
            about: Persisted::load(storage, keys::ABOUT, seed::default_about()),
            notifier,
            ids,
        };
        debug!(
            inquiries = store.inquiries().len(),
            bookings = store.bookings().len(),
            services = store.services().len(),
            gallery = store.gallery().len(),
            testimonials = store.testimonials().len(),
            team = store.team().len(),
            faqs = store.faqs().len(),
            "Content store loaded"
        );
        store
    }

    fn success(&self, message: impl Into<String>) {
        self.notifier.notify(Notice::success(message));
    }

    fn error(&self, message: impl Into<String>) {
        self.notifier.notify(Notice::error(message));
    }

    // ========================================================================
    // Readers
    // ========================================================================

    pub fn inquiries(&self) -> &[Inquiry] {
        self.inquiries.get()
    }

    pub fn bookings(&self) -> &[Booking] {
        self.bookings.get()
    }

    pub fn services(&self) -> &[Service] {
        self.services.get()
    }

    pub fn gallery(&self) -> &[GalleryImage] {
        self.gallery.get()
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        self.testimonials.get()
    }

    pub fn team(&self) -> &[TeamMember] {
        self.team.get()
    }

    pub fn faqs(&self) -> &[Faq] {
        self.faqs.get()
    }

    pub fn settings(&self) -> &SiteSettings {
        self.settings.get()
    }

    pub fn about(&self) -> &AboutData {
        self.about.get()
    }

    pub fn inquiry(&self, id: i64) -> Option<&Inquiry> {
        find(self.inquiries(), &id)
    }

    pub fn booking(&self, id: i64) -> Option<&Booking> {
        find(self.bookings(), &id)
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services().iter().find(|s| s.id == id)
    }

    pub fn gallery_image(&self, id: i64) -> Option<&GalleryImage> {
        find(self.gallery(), &id)
    }

    pub fn testimonial(&self, id: i64) -> Option<&Testimonial> {
        find(self.testimonials(), &id)
    }

    pub fn team_member(&self, id: i64) -> Option<&TeamMember> {
        find(self.team(), &id)
    }

    pub fn faq(&self, id: i64) -> Option<&Faq> {
        find(self.faqs(), &id)
    }

    /// Inquiries whose name or event type contains `term`, ignoring case.
    pub fn search_inquiries(&self, term: &str) -> Vec<Inquiry> {
        self.inquiries()
            .iter()
            .filter(|i| matches_search(i, term))
            .cloned()
            .collect()
    }

    /// Testimonials shown on the public site.
    pub fn approved_testimonials(&self) -> Vec<Testimonial> {
        self.testimonials()
            .iter()
            .filter(|t| t.is_approved())
            .cloned()
            .collect()
    }

    /// Gallery images in `filter`; `"all"` returns everything.
    pub fn gallery_by_category(&self, filter: &str) -> Vec<GalleryImage> {
        self.gallery()
            .iter()
            .filter(|img| img.in_category(filter))
            .cloned()
            .collect()
    }

    pub fn dashboard(&self) -> DashboardStats {
        DashboardStats::compute(
            self.inquiries(),
            self.bookings(),
            self.services(),
            self.gallery(),
        )
    }

    // ========================================================================
    // Inquiries
    // ========================================================================

    pub fn add_inquiry(&mut self, inquiry: Inquiry) -> Inquiry {
        let stored = append(&mut self.inquiries, inquiry, &self.ids);
        self.success("New inquiry received!");
        stored
    }

    pub fn update_inquiry(&mut self, inquiry: Inquiry) {
        replace(&mut self.inquiries, inquiry);
        self.success("Inquiry details updated successfully!");
    }

    pub fn update_inquiry_status(&mut self, id: i64, status: InquiryStatus) {
        let message = format!("Status updated to {}", status);
        modify(&mut self.inquiries, &id, |i| i.status = status);
        self.success(message);
    }

    pub fn delete_inquiry(&mut self, id: i64) {
        remove_many(&mut self.inquiries, &[id]);
        self.success("Inquiry deleted successfully!");
    }

    pub fn delete_inquiries(&mut self, ids: &[i64]) -> usize {
        let removed = remove_many(&mut self.inquiries, ids);
        self.success(format!("{} inquiries deleted successfully!", ids.len()));
        removed
    }

    // ========================================================================
    // Bookings
    // ========================================================================

    pub fn add_booking(&mut self, booking: Booking) -> Booking {
        let stored = append(&mut self.bookings, booking, &self.ids);
        self.success("New booking created!");
        stored
    }

    pub fn update_booking(&mut self, booking: Booking) {
        replace(&mut self.bookings, booking);
        self.success("Booking details updated successfully!");
    }

    pub fn update_booking_status(&mut self, id: i64, status: BookingStatus) {
        let message = format!("Booking marked as {}", status);
        modify(&mut self.bookings, &id, |b| b.status = status);
        self.success(message);
    }

    pub fn delete_booking(&mut self, id: i64) {
        remove_many(&mut self.bookings, &[id]);
        self.success("Booking deleted successfully!");
    }

    pub fn delete_bookings(&mut self, ids: &[i64]) -> usize {
        let removed = remove_many(&mut self.bookings, ids);
        self.success(format!("{} bookings deleted successfully!", ids.len()));
        removed
    }

    // ========================================================================
    // Services
    // ========================================================================

    pub fn add_service(&mut self, service: Service) -> Service {
        let stored = append(&mut self.services, service, &self.ids);
        self.success("Service added successfully!");
        stored
    }

    pub fn update_service(&mut self, service: Service) {
        replace(&mut self.services, service);
        self.success("Service updated successfully!");
    }

    pub fn delete_service(&mut self, id: &str) {
        remove_many(&mut self.services, &[id.to_string()]);
        self.success("Service removed successfully!");
    }

    pub fn delete_services(&mut self, ids: &[String]) -> usize {
        let removed = remove_many(&mut self.services, ids);
        self.success(format!("{} services deleted successfully!", ids.len()));
        removed
    }

    // ========================================================================
    // Gallery
    // ========================================================================

    /// New uploads go to the front of the gallery.
    pub fn add_gallery_image(&mut self, image: GalleryImage) -> GalleryImage {
        let stored = prepend(&mut self.gallery, image, &self.ids);
        self.success("Image uploaded successfully!");
        stored
    }

    /// Edits an image in place; its position in the gallery is unchanged.
    pub fn update_gallery_image(&mut self, image: GalleryImage) {
        replace(&mut self.gallery, image);
        self.success("Image details updated!");
    }

    pub fn delete_gallery_image(&mut self, id: i64) {
        remove_many(&mut self.gallery, &[id]);
        self.success("Image deleted successfully!");
    }

    pub fn delete_gallery_images(&mut self, ids: &[i64]) -> usize {
        let removed = remove_many(&mut self.gallery, ids);
        self.success(format!("{} images deleted successfully!", ids.len()));
        removed
    }

    // ========================================================================
    // Testimonials
    // ========================================================================

    /// New testimonials always start out pending, whatever status they carry.
    pub fn add_testimonial(&mut self, mut testimonial: Testimonial) -> Testimonial {
        testimonial.status = TestimonialStatus::Pending;
        let stored = append(&mut self.testimonials, testimonial, &self.ids);
        self.success("Testimonial added! Status: Pending");
        stored
    }

    /// Replaces the review text and details. Moderation goes through
    /// [`ContentStore::update_testimonial_status`].
    pub fn update_testimonial(&mut self, testimonial: Testimonial) {
        replace(&mut self.testimonials, testimonial);
        self.success("Testimonial updated!");
    }

    pub fn update_testimonial_status(&mut self, id: i64, status: TestimonialStatus) {
        let message = format!("Testimonial {}", status);
        modify(&mut self.testimonials, &id, |t| t.status = status);
        self.success(message);
    }

    pub fn delete_testimonial(&mut self, id: i64) {
        remove_many(&mut self.testimonials, &[id]);
        self.success("Testimonial deleted!");
    }

    pub fn delete_testimonials(&mut self, ids: &[i64]) -> usize {
        let removed = remove_many(&mut self.testimonials, ids);
        self.success(format!("{} testimonials deleted successfully!", ids.len()));
        removed
    }

    // ========================================================================
    // Team
    // ========================================================================

    pub fn add_team_member(&mut self, member: TeamMember) -> TeamMember {
        let stored = append(&mut self.team, member, &self.ids);
        self.success("Team member added!");
        stored
    }

    pub fn update_team_member(&mut self, member: TeamMember) {
        replace(&mut self.team, member);
        self.success("Team member updated!");
    }

    pub fn delete_team_member(&mut self, id: i64) {
        remove_many(&mut self.team, &[id]);
        self.success("Team member removed!");
    }

    pub fn delete_team_members(&mut self, ids: &[i64]) -> usize {
        let removed = remove_many(&mut self.team, ids);
        self.success(format!("{} team members removed!", ids.len()));
        removed
    }

    // ========================================================================
    // FAQs
    // ========================================================================

    pub fn add_faq(&mut self, faq: Faq) -> Faq {
        let stored = append(&mut self.faqs, faq, &self.ids);
        self.success("FAQ added successfully!");
        stored
    }

    pub fn update_faq(&mut self, faq: Faq) {
        replace(&mut self.faqs, faq);
        self.success("FAQ updated successfully!");
    }

    pub fn delete_faq(&mut self, id: i64) {
        remove_many(&mut self.faqs, &[id]);
        self.success("FAQ deleted successfully!");
    }

    pub fn delete_faqs(&mut self, ids: &[i64]) -> usize {
        let removed = remove_many(&mut self.faqs, ids);
        self.success(format!("{} FAQs deleted successfully!", ids.len()));
        removed
    }

    // ========================================================================
    // Singletons
    // ========================================================================

    pub fn update_settings(&mut self, settings: SiteSettings) {
        self.settings.replace(settings);
        self.success("Site settings saved successfully!");
    }

    pub fn update_about(&mut self, about: AboutData) {
        self.about.replace(about);
        self.success("About page content updated!");
    }

    // ========================================================================
    // Export and backup
    // ========================================================================

    /// Renders one collection as CSV. An empty collection raises an error
    /// notice and produces no file.
    pub fn export_csv(
        &self,
        collection: ExportCollection,
        at: DateTime<Utc>,
    ) -> Result<ExportFile, ExportError> {
        let rendered = match collection {
            ExportCollection::Inquiries => render_csv(collection, self.inquiries()),
            ExportCollection::Bookings => render_csv(collection, self.bookings()),
            ExportCollection::Testimonials => render_csv(collection, self.testimonials()),
            ExportCollection::Services => render_csv(collection, self.services()),
            ExportCollection::Gallery => render_csv(collection, self.gallery()),
            ExportCollection::Team => render_csv(collection, self.team()),
            ExportCollection::Faqs => render_csv(collection, self.faqs()),
        };

        match rendered {
            Ok(content) => {
                self.success(format!("{} exported successfully!", collection));
                Ok(ExportFile {
                    file_name: csv_file_name(collection, at),
                    content,
                })
            }
            Err(e) => {
                self.error(e.to_string());
                Err(e)
            }
        }
    }

    /// Captures the seven collections as a backup document.
    pub fn backup(&self, at: DateTime<Utc>) -> SystemBackup {
        let backup = SystemBackup::new(
            BackupData {
                inquiries: self.inquiries().to_vec(),
                bookings: self.bookings().to_vec(),
                testimonials: self.testimonials().to_vec(),
                services: self.services().to_vec(),
                gallery: self.gallery().to_vec(),
                team: self.team().to_vec(),
                faqs: self.faqs().to_vec(),
            },
            at,
        );
        self.success("Full system backup downloaded!");
        backup
    }

    /// Renders [`ContentStore::backup`] as a pretty-printed download.
    pub fn backup_file(&self, at: DateTime<Utc>) -> Result<ExportFile, ExportError> {
        let content = self.backup(at).to_pretty_json()?;
        Ok(ExportFile {
            file_name: backup_file_name(at),
            content,
        })
    }

    /// Resetting data is disabled; this only raises an error notice.
    pub fn reset_all_data(&self) {
        warn!("Reset requested but disabled");
        self.error("Reset functionality is disabled in demo mode.");
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("inquiries", &self.inquiries().len())
            .field("bookings", &self.bookings().len())
            .field("services", &self.services().len())
            .field("gallery", &self.gallery().len())
            .field("testimonials", &self.testimonials().len())
            .field("team", &self.team().len())
            .field("faqs", &self.faqs().len())
            .finish()
    }
}

fn find<'a, T: Record>(items: &'a [T], id: &T::Id) -> Option<&'a T> {
    items.iter().find(|r| r.id() == id)
}

/// Gives `record` an id if it has none, or a fresh one if its id is taken.
fn with_unique_id<T: Record>(items: &[T], mut record: T, ids: &IdGenerator) -> T {
    if !record.has_id() {
        record.assign_id(ids);
    } else if find(items, record.id()).is_some() {
        warn!(id = %record.id(), "Supplied id already exists, assigning a new one");
        record.assign_id(ids);
    }
    while find(items, record.id()).is_some() {
        record.assign_id(ids);
    }
    record
}

fn append<T: Record>(collection: &mut Persisted<Vec<T>>, record: T, ids: &IdGenerator) -> T {
    let record = with_unique_id(collection.get(), record, ids);
    collection.update(|items| items.push(record.clone()));
    record
}

fn prepend<T: Record>(collection: &mut Persisted<Vec<T>>, record: T, ids: &IdGenerator) -> T {
    let record = with_unique_id(collection.get(), record, ids);
    collection.update(|items| items.insert(0, record.clone()));
    record
}

/// Replaces the record with the same id. Returns whether one matched.
fn replace<T: Record>(collection: &mut Persisted<Vec<T>>, record: T) -> bool {
    let Some(pos) = collection.get().iter().position(|r| r.id() == record.id()) else {
        debug!(key = collection.key(), id = %record.id(), "Update for unknown id ignored");
        return false;
    };
    collection.update(|items| items[pos] = record);
    true
}

fn modify<T: Record>(
    collection: &mut Persisted<Vec<T>>,
    id: &T::Id,
    change: impl FnOnce(&mut T),
) -> bool {
    let Some(pos) = collection.get().iter().position(|r| r.id() == id) else {
        debug!(key = collection.key(), id = %id, "Update for unknown id ignored");
        return false;
    };
    collection.update(|items| change(&mut items[pos]));
    true
}

/// Removes every record whose id is listed. Returns how many were removed.
fn remove_many<T: Record>(collection: &mut Persisted<Vec<T>>, ids: &[T::Id]) -> usize {
    let before = collection.get().len();
    if !collection.get().iter().any(|r| ids.contains(r.id())) {
        return 0;
    }
    collection.update(|items| items.retain(|r| !ids.contains(r.id())));
    before - collection.get().len()
}
