use dioxus::prelude::*;

use super::placeholders::{
    Config, Execute, History, Home, Log, Movies, PageNotFound, Pending, Schedule, Seen, Series,
    Status,
};
use crate::app::layouts::Layout;
use crate::config::UiConfig;
use crate::domain::models::nav::{links, validate};
use crate::domain::models::SIDENAV_ITEMS;
use crate::shared::hooks::use_status_provider;
use crate::shared::logging::log_nav_validation;

/// One route per side navigation link, all rendered inside the layout shell
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/config")]
    Config {},
    #[route("/history")]
    History {},
    #[route("/log")]
    Log {},
    #[route("/movies")]
    Movies {},
    #[route("/pending")]
    Pending {},
    #[route("/seen")]
    Seen {},
    #[route("/series")]
    Series {},

    // Tasks group
    #[route("/execute")]
    Execute {},
    #[route("/schedule")]
    Schedule {},
    #[route("/status")]
    Status {},

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(UiConfig::load);
    let mut status = use_status_provider();

    use_effect(move || {
        let error = validate(SIDENAV_ITEMS).err().map(|e| e.to_string());
        log_nav_validation(links(SIDENAV_ITEMS).count(), error.as_deref());
        if let Some(error) = error {
            status.write().show_error(error);
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_nav_link_has_a_route() {
        for item in links(SIDENAV_ITEMS) {
            let route: Route = item
                .link
                .parse()
                .unwrap_or_else(|_| panic!("{} does not parse", item.link));
            assert!(
                !matches!(route, Route::PageNotFound { .. }),
                "{} falls through to the not-found page",
                item.link
            );
            assert_eq!(route.to_string(), item.link);
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route: Route = "/plugins/trakt".parse().unwrap();
        assert_eq!(
            route,
            Route::PageNotFound {
                segments: vec!["plugins".to_string(), "trakt".to_string()]
            }
        );
    }

    #[test]
    fn test_root_is_home() {
        let route: Route = "/".parse().unwrap();
        assert_eq!(route, Route::Home {});
    }
}
