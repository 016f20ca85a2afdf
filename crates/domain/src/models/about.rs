//! About-page content.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Singleton about-page record. Counters are display strings ("5", "200+").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AboutData {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub headline: String,
    pub intro: String,
    pub vision: String,
    pub mission: String,
    pub years_exp: String,
    pub events_count: String,
    pub team_count: String,
    #[validate(custom(function = "shared::validation::validate_optional_image_source"))]
    pub image_url: String,
}
