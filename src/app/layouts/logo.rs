use dioxus::prelude::*;

use crate::app::pages::routes::Route;
use crate::config::UiConfig;
use crate::domain::models::SidebarState;

/// Collapses to the title's initial when the sidebar is closed
#[component]
pub fn Logo(open: bool) -> Element {
    let config = use_context::<UiConfig>();
    let logo_class = SidebarState { open }.logo_class();
    let initial = config.title.chars().next().unwrap_or('F');

    rsx! {
        Link {
            to: Route::Home {},
            class: "{logo_class}",
            span { class: "c-logo__mark", "{initial}" }
            span { class: "c-logo__text", "{config.title}" }
        }
    }
}
