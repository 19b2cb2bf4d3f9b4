use dioxus::prelude::*;

use super::{Logo, Navbar, SideNav};
use crate::app::components::{ErrorStatus, InfoStatus, LoadingBar};
use crate::app::pages::routes::Route;
use crate::config::UiConfig;
use crate::shared::hooks::use_sidebar;

const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css";

/// Page chrome wrapping every routed page.
///
/// ```text
/// +--------+-------------------------------+
/// | Logo   | Navbar                        |
/// |        | LoadingBar                    |
/// +--------+-------------------------------+
/// | SideNav| Content (Outlet)              |
/// |        |            ErrorStatus        |
/// |        |            InfoStatus         |
/// +--------+-------------------------------+
/// ```
///
/// Below the 600px breakpoint the header stacks and an open sidebar takes the
/// full width, hiding the content until a link is followed or it is toggled.
#[component]
pub fn Layout() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/bundle.css");

    let config = use_context::<UiConfig>();
    let mut sidebar = use_sidebar();

    let state = sidebar.current();
    let css_variables = config.css_variables();

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS },
        document::Link { rel: "stylesheet", href: FONT_AWESOME_CSS },
        document::Title { "{config.title}" },
        div { class: "c-layout", style: "{css_variables}",
            header { class: "c-layout__header",
                div { class: "c-layout__logo",
                    Logo { open: state.open }
                }
                nav { class: "c-layout__navbar",
                    Navbar {
                        open: state.open,
                        on_toggle: move |_| sidebar.toggle(),
                    }
                    LoadingBar {}
                }
            }
            main { class: "c-layout__main",
                aside { class: "c-layout__sidebar",
                    SideNav {
                        open: state.open,
                        on_navigate: move |link: &'static str| sidebar.navigated(link),
                    }
                }
                section { class: state.content_class(),
                    Outlet::<Route> {}
                }
                ErrorStatus {}
                InfoStatus {}
            }
        }
    }
}
