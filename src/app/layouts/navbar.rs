use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant};
use crate::app::pages::routes::Route;
use crate::config::UiConfig;
use crate::domain::models::nav::find_by_link;
use crate::domain::models::SIDENAV_ITEMS;

/// Header bar with the sidebar toggle and the current page title
#[component]
pub fn Navbar(open: bool, on_toggle: EventHandler<()>) -> Element {
    let config = use_context::<UiConfig>();
    let route = use_route::<Route>();

    let title = find_by_link(SIDENAV_ITEMS, &route.to_string())
        .map(|item| item.label.to_string())
        .unwrap_or(config.title);

    rsx! {
        div { class: "c-navbar",
            Button {
                variant: ButtonVariant::Primary,
                class: "c-navbar__toggle",
                label: "Toggle navigation",
                expanded: open,
                onclick: move |_| on_toggle.call(()),
                i { class: "fa fa-bars" }
            }
            h1 { class: "c-navbar__title", "{title}" }
        }
    }
}
