//! Service offering domain model.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// A service listed on the public services page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub features: Vec<String>,
    pub icon_name: String,
    pub image: Option<String>,
    pub category: Option<String>,
}

impl crate::models::Record for Service {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }

    fn assign_id(&mut self, ids: &shared::ids::IdGenerator) {
        self.id = ids.next_service_id();
    }
}

/// Splits an editor's comma separated feature text into trimmed, non-empty items.
pub fn parse_features(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FeaturesField {
    List(Vec<String>),
    Text(String),
}

/// Accepts either a JSON array or a comma separated string.
fn deserialize_features<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match FeaturesField::deserialize(deserializer)? {
        FeaturesField::List(items) => items,
        FeaturesField::Text(text) => parse_features(&text),
    })
}

fn default_icon_name() -> String {
    "Award".to_string()
}

fn default_category() -> Option<String> {
    Some("General".to_string())
}

/// Create/edit payload from the service editor.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    #[serde(default)]
    pub id: Option<String>,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: String,

    #[serde(default)]
    pub short_description: String,

    #[serde(default)]
    pub full_description: String,

    #[serde(default, deserialize_with = "deserialize_features")]
    pub features: Vec<String>,

    #[serde(default = "default_icon_name")]
    pub icon_name: String,

    #[validate(custom(function = "shared::validation::validate_optional_image_source"))]
    pub image: Option<String>,

    #[serde(default = "default_category")]
    pub category: Option<String>,
}

impl ServiceInput {
    /// Builds a service; an empty image string is treated as "no image".
    pub fn into_service(self, id: String) -> Service {
        Service {
            id,
            title: self.title,
            short_description: self.short_description,
            full_description: self.full_description,
            features: self.features,
            icon_name: self.icon_name,
            image: self.image.filter(|i| !i.is_empty()),
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use serde_json::json;
    use shared::ids::IdGenerator;

    #[test]
    fn test_parse_features() {
        assert_eq!(
            parse_features(" Buffet Setup, Live Stations ,, Waitstaff ,"),
            vec!["Buffet Setup", "Live Stations", "Waitstaff"]
        );
        assert!(parse_features("").is_empty());
    }

    #[test]
    fn test_service_input_accepts_feature_text() {
        let input: ServiceInput = serde_json::from_value(json!({
            "title": "Catering Management",
            "features": "Buffet Setup, Custom Menus"
        }))
        .unwrap();
        assert_eq!(input.features, vec!["Buffet Setup", "Custom Menus"]);
        assert_eq!(input.icon_name, "Award");
        assert_eq!(input.category.as_deref(), Some("General"));
    }

    #[test]
    fn test_service_input_accepts_feature_list() {
        let input: ServiceInput = serde_json::from_value(json!({
            "title": "DJ & Sound System",
            "features": ["Pro Sound System", "DJ Services"]
        }))
        .unwrap();
        assert_eq!(input.features.len(), 2);
    }

    #[test]
    fn test_service_input_requires_title() {
        let input: ServiceInput = serde_json::from_value(json!({ "title": "" })).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_service_id_assignment() {
        let input: ServiceInput = serde_json::from_value(json!({ "title": "Decor" })).unwrap();
        let mut service = input.into_service(String::new());
        assert!(!service.has_id());

        service.assign_id(&IdGenerator::new());
        assert!(service.id.starts_with("svc_"));
        assert!(service.has_id());
    }

    #[test]
    fn test_service_serializes_camel_case() {
        let input: ServiceInput = serde_json::from_value(json!({
            "title": "Wedding Planning",
            "shortDescription": "Complete wedding management"
        }))
        .unwrap();
        let value = serde_json::to_value(input.into_service("wedding".into())).unwrap();
        assert_eq!(value["shortDescription"], "Complete wedding management");
        assert_eq!(value["iconName"], "Award");
        assert!(value["image"].is_null());
    }
}
