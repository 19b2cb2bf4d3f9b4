use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use crate::shared::hooks::use_status;

/// Indeterminate progress bar under the navbar
#[component]
pub fn LoadingBar() -> Element {
    let status = use_status();

    rsx! {
        div {
            class: "c-loading-bar",
            role: "progressbar",
            if status.read().is_loading() {
                div { class: "c-loading-bar__indicator" }
            }
        }
    }
}

#[component]
pub fn ErrorStatus() -> Element {
    let mut status = use_status();
    let message = status.read().error.clone();

    rsx! {
        if let Some(message) = message {
            div { class: "c-status c-status--error", role: "alert",
                i { class: "fa fa-exclamation-triangle c-status__icon" }
                p { class: "c-status__text", "{message}" }
                Button {
                    class: "c-status__dismiss",
                    label: "Dismiss error",
                    onclick: move |_| status.write().dismiss_error(),
                    i { class: "fa fa-times" }
                }
            }
        }
    }
}

#[component]
pub fn InfoStatus() -> Element {
    let mut status = use_status();
    let message = status.read().info.clone();

    rsx! {
        if let Some(message) = message {
            div { class: "c-status c-status--info", role: "status",
                i { class: "fa fa-info-circle c-status__icon" }
                p { class: "c-status__text", "{message}" }
                Button {
                    variant: ButtonVariant::Accent,
                    class: "c-status__dismiss",
                    label: "Dismiss message",
                    onclick: move |_| status.write().dismiss_info(),
                    i { class: "fa fa-times" }
                }
            }
        }
    }
}
