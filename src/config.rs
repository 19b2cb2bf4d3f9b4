//! UI configuration
//!
//! Read at build time from the `FLEXGET_UI_CONFIG` environment variable (a JSON
//! object) so the server-rendered markup and the hydrated WASM bundle agree.

use serde::Deserialize;

use crate::domain::models::layout::{
    CONTENT_PADDING, HEADER_HEIGHT, SIDEBAR_MINI_WIDTH, SIDEBAR_WIDTH,
};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_config_error, log_config_loaded};

/// Upper bound for every pixel metric
pub const MAX_METRIC_PX: u32 = 4096;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub header_height: u32,
    pub sidebar_width: u32,
    pub sidebar_mini_width: u32,
    pub content_padding: u32,
    pub show_version: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "FlexGet".to_string(),
            header_height: HEADER_HEIGHT,
            sidebar_width: SIDEBAR_WIDTH,
            sidebar_mini_width: SIDEBAR_MINI_WIDTH,
            content_padding: CONTENT_PADDING,
            show_version: true,
        }
    }
}

impl UiConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: UiConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidConfig("title must not be empty".into()));
        }
        if self.header_height == 0 || self.sidebar_mini_width == 0 {
            return Err(AppError::InvalidConfig("sizes must be positive".into()));
        }
        for (name, value) in [
            ("header_height", self.header_height),
            ("sidebar_width", self.sidebar_width),
            ("sidebar_mini_width", self.sidebar_mini_width),
            ("content_padding", self.content_padding),
        ] {
            if value > MAX_METRIC_PX {
                return Err(AppError::InvalidConfig(format!(
                    "{name} ({value}) exceeds {MAX_METRIC_PX}px"
                )));
            }
        }
        if self.sidebar_mini_width >= self.sidebar_width {
            return Err(AppError::InvalidConfig(format!(
                "sidebar_mini_width ({}) must be smaller than sidebar_width ({})",
                self.sidebar_mini_width, self.sidebar_width
            )));
        }
        Ok(())
    }

    /// Build-time config if present and valid, defaults otherwise.
    pub fn load() -> Self {
        match option_env!("FLEXGET_UI_CONFIG") {
            Some(raw) => match Self::from_json_str(raw) {
                Ok(config) => {
                    log_config_loaded("FLEXGET_UI_CONFIG", &config.title);
                    config
                }
                Err(e) => {
                    log_config_error(&e.to_string());
                    Self::default()
                }
            },
            None => {
                let config = Self::default();
                log_config_loaded("defaults", &config.title);
                config
            }
        }
    }

    /// Stacked logo + navbar on narrow screens
    pub fn mobile_header_height(&self) -> u32 {
        self.header_height.saturating_mul(2).saturating_sub(2)
    }

    /// Metrics as CSS custom properties for the layout root's `style`
    pub fn css_variables(&self) -> String {
        format!(
            "--header-height: {}px; --mobile-header-height: {}px; --sidebar-width: {}px; --sidebar-mini-width: {}px; --content-padding: {}px;",
            self.header_height,
            self.mobile_header_height(),
            self.sidebar_width,
            self.sidebar_mini_width,
            self.content_padding,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_layout_metrics() {
        let config = UiConfig::default();
        assert_eq!(config.title, "FlexGet");
        assert_eq!(config.mobile_header_height(), 98);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = UiConfig::from_json_str(r#"{"title": "Media Box", "show_version": false}"#).unwrap();
        assert_eq!(config.title, "Media Box");
        assert!(!config.show_version);
        assert_eq!(config.sidebar_width, SIDEBAR_WIDTH);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = UiConfig::from_json_str("{title:");
        assert!(matches!(result, Err(AppError::SerializationError(_))));
    }

    #[test]
    fn test_rejects_mini_width_wider_than_sidebar() {
        let result = UiConfig::from_json_str(r#"{"sidebar_width": 40, "sidebar_mini_width": 50}"#);
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_sizes() {
        for raw in [r#"{"header_height": 0}"#, r#"{"sidebar_mini_width": 0}"#] {
            let result = UiConfig::from_json_str(raw);
            assert!(matches!(result, Err(AppError::InvalidConfig(_))), "{raw} was accepted");
        }
    }

    #[test]
    fn test_rejects_oversized_metrics() {
        for raw in [
            r#"{"header_height": 3000000000}"#,
            r#"{"sidebar_width": 5000}"#,
            r#"{"content_padding": 4097}"#,
        ] {
            let result = UiConfig::from_json_str(raw);
            assert!(matches!(result, Err(AppError::InvalidConfig(_))), "{raw} was accepted");
        }
        assert!(UiConfig::from_json_str(r#"{"header_height": 4096}"#).is_ok());
    }

    #[test]
    fn test_mobile_header_height_saturates() {
        let config = UiConfig {
            header_height: u32::MAX,
            ..UiConfig::default()
        };
        assert_eq!(config.mobile_header_height(), u32::MAX - 2);
        assert!(config.css_variables().contains("--header-height: 4294967295px;"));
    }

    #[test]
    fn test_rejects_blank_title() {
        let result = UiConfig::from_json_str(r#"{"title": "  "}"#);
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn test_css_variables_include_every_metric() {
        let vars = UiConfig::default().css_variables();
        assert!(vars.contains("--header-height: 50px;"));
        assert!(vars.contains("--mobile-header-height: 98px;"));
        assert!(vars.contains("--sidebar-width: 190px;"));
        assert!(vars.contains("--sidebar-mini-width: 50px;"));
        assert!(vars.contains("--content-padding: 10px;"));
    }
}
