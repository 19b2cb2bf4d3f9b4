//! Page bodies for the routed links. The dashboard pages themselves live
//! outside this shell, so each route renders a titled empty page.

use dioxus::prelude::*;

use super::routes::Route;
use crate::domain::models::nav::find_by_link;
use crate::domain::models::{NavEntry, NavLink, SIDENAV_ITEMS};

#[component]
fn PagePlaceholder(path: &'static str) -> Element {
    let Some(item) = find_by_link(SIDENAV_ITEMS, path) else {
        return rsx! {
            PageNotFound { segments: Vec::new() }
        };
    };

    rsx! {
        article { class: "c-page",
            h2 { class: "c-page__title",
                i { class: "fa fa-{item.icon} c-page__icon" }
                "{item.label}"
            }
            p { class: "c-page__empty", "Nothing to show yet." }
        }
    }
}

/// Landing page listing every menu entry
#[component]
pub fn Home() -> Element {
    rsx! {
        article { class: "c-page c-page--home",
            ul { class: "c-page__menu",
                for entry in SIDENAV_ITEMS.iter() {
                    HomeMenuEntry { key: "{entry.label()}", entry: *entry }
                }
            }
        }
    }
}

#[component]
fn HomeMenuEntry(entry: NavEntry) -> Element {
    match entry {
        NavEntry::Link(item) => rsx! {
            li { HomeMenuLink { item } }
        },
        NavEntry::Group { label, children, .. } => rsx! {
            li {
                span { class: "c-page__menu-group", "{label}" }
                ul {
                    for item in children.iter() {
                        li { key: "{item.link}",
                            HomeMenuLink { item: *item }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn HomeMenuLink(item: NavLink) -> Element {
    rsx! {
        Link { to: item.link, class: "c-page__menu-link",
            i { class: "fa fa-{item.icon}" }
            " {item.label}"
        }
    }
}

#[component]
pub fn Config() -> Element {
    rsx! { PagePlaceholder { path: "/config" } }
}

#[component]
pub fn History() -> Element {
    rsx! { PagePlaceholder { path: "/history" } }
}

#[component]
pub fn Log() -> Element {
    rsx! { PagePlaceholder { path: "/log" } }
}

#[component]
pub fn Movies() -> Element {
    rsx! { PagePlaceholder { path: "/movies" } }
}

#[component]
pub fn Pending() -> Element {
    rsx! { PagePlaceholder { path: "/pending" } }
}

#[component]
pub fn Seen() -> Element {
    rsx! { PagePlaceholder { path: "/seen" } }
}

#[component]
pub fn Series() -> Element {
    rsx! { PagePlaceholder { path: "/series" } }
}

#[component]
pub fn Execute() -> Element {
    rsx! { PagePlaceholder { path: "/execute" } }
}

#[component]
pub fn Schedule() -> Element {
    rsx! { PagePlaceholder { path: "/schedule" } }
}

#[component]
pub fn Status() -> Element {
    rsx! { PagePlaceholder { path: "/status" } }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        article { class: "c-page c-page--not-found",
            h2 { class: "c-page__title", "Page not found" }
            p { class: "c-page__empty", "Nothing lives at {path}." }
            Link { to: Route::Home {}, class: "c-page__menu-link", "Back to the dashboard" }
        }
    }
}
