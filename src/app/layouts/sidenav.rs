use dioxus::prelude::*;

use crate::app::pages::routes::Route;
use crate::config::UiConfig;
use crate::domain::models::nav::group_contains;
use crate::domain::models::{NavEntry, NavLink, SidebarState, SIDENAV_ITEMS};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Side navigation: full width labels when open, icon rail (desktop) or hidden (mobile) when closed
#[component]
pub fn SideNav(open: bool, on_navigate: EventHandler<&'static str>) -> Element {
    let config = use_context::<UiConfig>();
    let state = SidebarState { open };

    rsx! {
        div { class: state.sidenav_class(),
            ul { class: "c-sidenav__list",
                for entry in SIDENAV_ITEMS.iter() {
                    SideNavEntry {
                        key: "{entry.label()}",
                        entry: *entry,
                        open,
                        on_navigate,
                    }
                }
            }
            if config.show_version {
                div { class: state.version_class(),
                    span { class: "c-sidenav__version-text", "v{VERSION}" }
                }
            }
        }
    }
}

#[component]
fn SideNavEntry(entry: NavEntry, open: bool, on_navigate: EventHandler<&'static str>) -> Element {
    match entry {
        NavEntry::Link(item) => rsx! {
            SideNavLink { item, open, on_navigate }
        },
        NavEntry::Group { .. } => rsx! {
            SideNavGroup { entry, open, on_navigate }
        },
    }
}

#[component]
fn SideNavLink(
    item: NavLink,
    open: bool,
    on_navigate: EventHandler<&'static str>,
    #[props(default = false)]
    nested: bool,
) -> Element {
    let state = SidebarState { open };
    let label_class = state.label_class();
    let target = item.link;

    rsx! {
        li { class: if nested { "c-sidenav__item c-sidenav__item--nested" } else { "c-sidenav__item" },
            Link {
                to: item.link,
                class: "c-sidenav__link",
                active_class: "c-sidenav__link--active",
                onclick: move |_| on_navigate.call(target),
                i { class: "fa fa-{item.icon} c-sidenav__icon" }
                span { class: "{label_class}", "{item.label}" }
            }
        }
    }
}

/// Collapsible group, expanded on load when it owns the current page
#[component]
fn SideNavGroup(entry: NavEntry, open: bool, on_navigate: EventHandler<&'static str>) -> Element {
    let route = use_route::<Route>();
    let mut expanded = use_signal(|| group_contains(&entry, &route.to_string()));

    let NavEntry::Group { label, icon, children } = entry else {
        return rsx! {};
    };
    let state = SidebarState { open };
    let is_expanded = expanded();
    let caret = if is_expanded { "fa-caret-down" } else { "fa-caret-right" };

    rsx! {
        li { class: "c-sidenav__item c-sidenav__group",
            button {
                class: "c-sidenav__link c-sidenav__group-toggle",
                r#type: "button",
                aria_expanded: "{is_expanded}",
                onclick: move |_| expanded.set(!is_expanded),
                i { class: "fa fa-{icon} c-sidenav__icon" }
                span { class: state.label_class(), "{label}" }
                i { class: "fa {caret} c-sidenav__caret" }
            }
            if is_expanded {
                ul { class: "c-sidenav__sublist",
                    for item in children.iter() {
                        SideNavLink {
                            key: "{item.link}",
                            item: *item,
                            open,
                            on_navigate,
                            nested: true,
                        }
                    }
                }
            }
        }
    }
}
