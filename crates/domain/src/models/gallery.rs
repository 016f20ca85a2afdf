//! Gallery image domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Category filters offered on the public gallery page, besides "all".
pub const GALLERY_FILTERS: [&str; 3] = ["wedding", "birthday", "corporate"];

/// Filter value that matches every image.
pub const ALL_CATEGORIES: &str = "all";

/// An image in the portfolio gallery.
///
/// `category` is a free string; it is only loosely matched against
/// [`GALLERY_FILTERS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: i64,
    pub category: String,
    pub image_url: String,
    pub title: String,
}

impl GalleryImage {
    /// Whether the image is shown under the given filter (`"all"` shows everything).
    pub fn in_category(&self, filter: &str) -> bool {
        filter == ALL_CATEGORIES || self.category == filter
    }
}

fn default_category() -> String {
    "wedding".to_string()
}

/// Upload and edit payload from the gallery manager.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewGalleryImageRequest {
    #[serde(default = "default_category")]
    pub category: String,

    #[validate(custom(function = "shared::validation::validate_image_source"))]
    pub image_url: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: String,
}

impl NewGalleryImageRequest {
    pub fn into_image(self) -> GalleryImage {
        self.into_image_with_id(0)
    }

    pub fn into_image_with_id(self, id: i64) -> GalleryImage {
        GalleryImage {
            id,
            category: self.category,
            image_url: self.image_url,
            title: self.title,
        }
    }
}

/// Query parameters for gallery listings.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryQuery {
    #[serde(default = "default_filter")]
    pub category: String,
}

fn default_filter() -> String {
    ALL_CATEGORIES.to_string()
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self {
            category: default_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_in_category() {
        let image = GalleryImage {
            id: 1,
            category: "wedding".to_string(),
            image_url: "https://picsum.photos/800/600?random=10".to_string(),
            title: "Royal Wedding Stage".to_string(),
        };
        assert!(image.in_category("all"));
        assert!(image.in_category("wedding"));
        assert!(!image.in_category("birthday"));
    }

    #[test]
    fn test_new_gallery_image_requires_title_and_image() {
        let request: NewGalleryImageRequest = serde_json::from_value(json!({
            "imageUrl": "",
            "title": ""
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("image_url"));
        assert!(fields.contains_key("title"));
    }

    #[test]
    fn test_new_gallery_image_default_category() {
        let request: NewGalleryImageRequest = serde_json::from_value(json!({
            "imageUrl": "https://picsum.photos/800/600?random=99",
            "title": "Mehendi Night"
        }))
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.into_image().category, "wedding");
    }

    #[test]
    fn test_gallery_query_default() {
        let query: GalleryQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.category, "all");
    }
}
