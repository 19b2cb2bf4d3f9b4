use dioxus::prelude::*;

use crate::domain::models::StatusBanners;

/// Install the shared status banners; called once at the app root
pub fn use_status_provider() -> Signal<StatusBanners> {
    use_context_provider(|| Signal::new(StatusBanners::default()))
}

/// Status banners shown by the layout around routed content
pub fn use_status() -> Signal<StatusBanners> {
    use_context::<Signal<StatusBanners>>()
}
