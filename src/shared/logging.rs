//! Structured logging helpers for the FlexGet web UI shell
//!
//! Every event carries an `operation` field so UI interactions can be
//! filtered the same way on the server (SSR) and in the browser console.

use crate::domain::models::Viewport;

/// Operation tags attached to every log event
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    NavValidation,
    SidebarToggle,
    Navigation,
    ConfigLoad,
    ViewportDetect,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::NavValidation => "nav_validation",
            LogOperation::SidebarToggle => "sidebar_toggle",
            LogOperation::Navigation => "navigation",
            LogOperation::ConfigLoad => "config_load",
            LogOperation::ViewportDetect => "viewport_detect",
        }
    }
}

/// Log the outcome of checking the static menu
pub fn log_nav_validation(link_count: usize, error: Option<&str>) {
    match error {
        None => tracing::debug!(
            operation = LogOperation::NavValidation.as_str(),
            link_count = link_count,
            "Navigation items validated"
        ),
        Some(error) => tracing::error!(
            operation = LogOperation::NavValidation.as_str(),
            link_count = link_count,
            error = error,
            "Navigation items are invalid"
        ),
    }
}

/// Log a sidebar open/close transition
pub fn log_sidebar_toggle(open: bool, trigger: &str) {
    tracing::debug!(
        operation = LogOperation::SidebarToggle.as_str(),
        open = open,
        trigger = trigger,
        "Sidebar toggled"
    );
}

/// Log a click on a navigation link
pub fn log_navigation(link: &str, viewport: Option<Viewport>) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        link = link,
        viewport = viewport.map(|v| v.as_str()).unwrap_or("unknown"),
        "Navigation link selected"
    );
}

/// Log where the UI configuration came from
pub fn log_config_loaded(source: &str, title: &str) {
    tracing::info!(
        operation = LogOperation::ConfigLoad.as_str(),
        source = source,
        title = title,
        "UI configuration loaded"
    );
}

/// Log a rejected configuration (defaults are used instead)
pub fn log_config_error(error: &str) {
    tracing::warn!(
        operation = LogOperation::ConfigLoad.as_str(),
        error = error,
        "Invalid UI configuration, falling back to defaults"
    );
}

/// Log the viewport seen at startup
pub fn log_viewport_detected(viewport: Option<Viewport>) {
    match viewport {
        Some(viewport) => tracing::debug!(
            operation = LogOperation::ViewportDetect.as_str(),
            viewport = viewport.as_str(),
            "Viewport detected"
        ),
        None => tracing::trace!(
            operation = LogOperation::ViewportDetect.as_str(),
            "matchMedia unavailable, viewport unknown"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::NavValidation.as_str(), "nav_validation");
        assert_eq!(LogOperation::SidebarToggle.as_str(), "sidebar_toggle");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::ConfigLoad.as_str(), "config_load");
        assert_eq!(LogOperation::ViewportDetect.as_str(), "viewport_detect");
    }
}
