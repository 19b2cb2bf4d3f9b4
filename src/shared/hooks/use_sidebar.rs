use dioxus::prelude::*;

use crate::domain::models::{SidebarState, Viewport};
use crate::shared::logging::{log_navigation, log_sidebar_toggle, log_viewport_detected};

#[derive(Clone, Copy)]
pub struct UseSidebarReturn {
    pub state: Signal<SidebarState>,
}

impl UseSidebarReturn {
    pub fn current(&self) -> SidebarState {
        (self.state)()
    }

    pub fn toggle(&mut self) {
        let next = self.current().toggle();
        self.state.set(next);
        log_sidebar_toggle(next.open, "toggle_button");
    }

    /// Called after a navigation link was clicked
    pub fn navigated(&mut self, link: &str) {
        let viewport = current_viewport();
        log_navigation(link, viewport);

        let before = self.current();
        let next = before.after_navigate(viewport);
        if next != before {
            self.state.set(next);
            log_sidebar_toggle(next.open, "navigation");
        }
    }
}

/// Sidebar open/closed state, starting collapsed and expanded after mount on desktop
pub fn use_sidebar() -> UseSidebarReturn {
    let mut state = use_signal(SidebarState::default);

    // Detect after mount so the hydrated markup matches the server render
    use_effect(move || {
        let viewport = current_viewport();
        log_viewport_detected(viewport);
        state.set(SidebarState::initial(viewport));
    });

    UseSidebarReturn { state }
}

/// Viewport class from `matchMedia`, `None` where it is unavailable
#[cfg(target_arch = "wasm32")]
pub fn current_viewport() -> Option<Viewport> {
    use crate::domain::models::layout::MEDIA_QUERY_DESKTOP;

    let window = web_sys::window()?;
    let query = window.match_media(MEDIA_QUERY_DESKTOP).ok().flatten()?;
    Some(Viewport::from_desktop_match(query.matches()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_viewport() -> Option<Viewport> {
    // No viewport on server or desktop shell
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn SidebarHarness(toggles: usize, follow_link: bool) -> Element {
        let mut sidebar = use_sidebar();
        use_hook(move || {
            for _ in 0..toggles {
                sidebar.toggle();
            }
            if follow_link {
                sidebar.navigated("/log");
            }
        });

        let state = sidebar.current();
        rsx! {
            div { class: state.sidenav_class() }
        }
    }

    fn render(toggles: usize, follow_link: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            SidebarHarness,
            SidebarHarnessProps { toggles, follow_link },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_sidebar_renders_collapsed_before_viewport_is_known() {
        let html = render(0, false);
        assert!(html.contains("c-sidenav--mini"), "{html}");
    }

    #[test]
    fn test_toggle_expands_rendered_sidebar() {
        let html = render(1, false);
        assert!(html.contains("c-sidenav"), "{html}");
        assert!(!html.contains("c-sidenav--mini"), "{html}");
    }

    #[test]
    fn test_second_toggle_collapses_again() {
        let html = render(2, false);
        assert!(html.contains("c-sidenav--mini"), "{html}");
    }

    #[test]
    fn test_navigation_without_viewport_keeps_sidebar_open() {
        assert_eq!(current_viewport(), None);
        let html = render(1, true);
        assert!(!html.contains("c-sidenav--mini"), "{html}");
    }
}
