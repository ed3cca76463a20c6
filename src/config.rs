use crate::error::ComponentResult;
use serde::{Deserialize, Serialize};

/// Brand prefix and default texts shared by every component.
///
/// Any field left out of a YAML file keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Class prefix, `govuk` for GOV.UK Frontend
    pub brand: String,
    pub default_accordion_heading_level: u8,
    pub default_back_link_href: String,
    pub default_back_link_text: String,
    pub default_breadcrumbs_collapse_on_mobile: bool,
    pub default_breadcrumbs_label_text: String,
    pub default_error_summary_title: String,
    pub default_notification_banner_title: String,
    pub default_notification_banner_success_title: String,
    pub default_pagination_landmark_label: String,
    pub default_pagination_next_text: String,
    pub default_pagination_previous_text: String,
    pub default_panel_heading_level: u8,
    pub default_skip_link_href: String,
    pub default_skip_link_text: String,
    pub default_summary_list_borders: bool,
    pub default_summary_card_heading_level: u8,
    pub default_tabs_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tag_colour: Option<String>,
    pub default_task_list_id_prefix: String,
    pub default_warning_text_icon_fallback_text: String,
    pub default_character_count_rows: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brand: "govuk".to_string(),
            default_accordion_heading_level: 2,
            default_back_link_href: "#".to_string(),
            default_back_link_text: "Back".to_string(),
            default_breadcrumbs_collapse_on_mobile: false,
            default_breadcrumbs_label_text: "Breadcrumb".to_string(),
            default_error_summary_title: "There is a problem".to_string(),
            default_notification_banner_title: "Important".to_string(),
            default_notification_banner_success_title: "Success".to_string(),
            default_pagination_landmark_label: "Pagination".to_string(),
            default_pagination_next_text: "Next".to_string(),
            default_pagination_previous_text: "Previous".to_string(),
            default_panel_heading_level: 1,
            default_skip_link_href: "#main-content".to_string(),
            default_skip_link_text: "Skip to main content".to_string(),
            default_summary_list_borders: true,
            default_summary_card_heading_level: 2,
            default_tabs_title: "Contents".to_string(),
            default_tag_colour: None,
            default_task_list_id_prefix: "task-list".to_string(),
            default_warning_text_icon_fallback_text: "Warning".to_string(),
            default_character_count_rows: 5,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML configuration file
    pub fn from_yaml(yaml: &str) -> ComponentResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(yaml)?;
        tracing::debug!(brand = %config.brand, "loaded component configuration");
        Ok(config)
    }

    /// Brand-prefixed class name, e.g. `class("tag")` is `govuk-tag`
    pub fn class(&self, block: &str) -> String {
        format!("{}-{}", self.brand, block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_uses_brand() {
        let mut config = Config::new();
        assert_eq!(config.class("tag"), "govuk-tag");
        config.brand = "nhsuk".to_string();
        assert_eq!(config.class("tag"), "nhsuk-tag");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "brand: moj\ndefault_back_link_text: Go back\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.brand, "moj");
        assert_eq!(config.default_back_link_text, "Go back");
        assert_eq!(config.default_pagination_next_text, "Next");
        assert!(config.default_summary_list_borders);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = Config::from_yaml("brand: [unclosed").unwrap_err();
        assert!(matches!(err, crate::error::ComponentError::Config(_)));
    }
}
