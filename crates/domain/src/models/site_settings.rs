//! Site-wide settings (contact details, SEO metadata, hero copy).

use serde::{Deserialize, Serialize};
use validator::Validate;

/// An HTML fragment supplied by the site operator and rendered verbatim.
///
/// The contents are never sanitized. Only operator-controlled settings may
/// hold this type; visitor input must never be converted into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Wraps markup that the operator vouches for.
    pub fn operator_supplied(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Singleton settings record. Overwritten wholesale, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub company_name: String,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub address: String,

    pub map_embed: TrustedHtml,

    pub meta_title: String,

    #[validate(length(max = 320, message = "Meta description must be at most 320 characters"))]
    pub meta_desc: String,

    pub keywords: String,

    pub hero_headline: String,

    pub hero_sub_headline: String,

    pub hero_btn1: String,

    pub hero_btn2: String,
}

impl SiteSettings {
    /// Phone number with every non-digit removed, as used in WhatsApp links.
    pub fn whatsapp_number(&self) -> String {
        self.phone.chars().filter(char::is_ascii_digit).collect()
    }
}
