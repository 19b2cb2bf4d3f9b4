//! Layout metrics and the sidebar's responsive open/closed state

pub const HEADER_HEIGHT: u32 = 50;
/// On mobile the logo and navbar stack, sharing one border
pub const MOBILE_HEADER_HEIGHT: u32 = HEADER_HEIGHT * 2 - 2;
pub const CONTENT_PADDING: u32 = 10;
pub const SIDEBAR_WIDTH: u32 = 190;
pub const SIDEBAR_MINI_WIDTH: u32 = 50;
/// Must match the media queries in `assets/css/layout.css`
pub const MOBILE_BREAKPOINT: u32 = 600;
pub const MEDIA_QUERY_DESKTOP: &str = "(min-width: 600px)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Desktop,
}

impl Viewport {
    pub fn from_desktop_match(matches: bool) -> Viewport {
        if matches {
            Viewport::Desktop
        } else {
            Viewport::Mobile
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Viewport::Mobile => "mobile",
            Viewport::Desktop => "desktop",
        }
    }
}

/// Whether the side navigation is expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    /// Expanded on desktop; collapsed on mobile or when the viewport is unknown (SSR).
    pub fn initial(viewport: Option<Viewport>) -> SidebarState {
        SidebarState {
            open: viewport == Some(Viewport::Desktop),
        }
    }

    pub fn toggle(self) -> SidebarState {
        SidebarState { open: !self.open }
    }

    /// On mobile the open sidebar covers the page, so following a link closes it.
    pub fn after_navigate(self, viewport: Option<Viewport>) -> SidebarState {
        match viewport {
            Some(Viewport::Mobile) => SidebarState { open: false },
            _ => self,
        }
    }

    pub fn sidenav_class(&self) -> &'static str {
        if self.open {
            "c-sidenav"
        } else {
            "c-sidenav c-sidenav--mini"
        }
    }

    pub fn label_class(&self) -> &'static str {
        if self.open {
            "c-sidenav__label"
        } else {
            "c-sidenav__label c-sidenav__label--mini"
        }
    }

    pub fn version_class(&self) -> &'static str {
        if self.open {
            "c-sidenav__version"
        } else {
            "c-sidenav__version c-sidenav__version--hidden"
        }
    }

    pub fn content_class(&self) -> &'static str {
        if self.open {
            "c-layout__content c-layout__content--covered"
        } else {
            "c-layout__content"
        }
    }

    pub fn logo_class(&self) -> &'static str {
        if self.open { "c-logo" } else { "c-logo c-logo--mini" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_header_stacks_two_rows() {
        assert_eq!(MOBILE_HEADER_HEIGHT, 98);
    }

    #[test]
    fn test_desktop_query_starts_at_breakpoint() {
        assert_eq!(
            MEDIA_QUERY_DESKTOP,
            format!("(min-width: {MOBILE_BREAKPOINT}px)")
        );
        assert_eq!(Viewport::from_desktop_match(true), Viewport::Desktop);
        assert_eq!(Viewport::from_desktop_match(false), Viewport::Mobile);
    }

    #[test]
    fn test_initial_state_depends_on_viewport() {
        assert!(SidebarState::initial(Some(Viewport::Desktop)).open);
        assert!(!SidebarState::initial(Some(Viewport::Mobile)).open);
        assert!(!SidebarState::initial(None).open);
    }

    #[test]
    fn test_toggle_flips_visibility() {
        let closed = SidebarState::default();
        let open = closed.toggle();
        assert!(open.open);
        assert_eq!(open.toggle(), closed);
    }

    #[test]
    fn test_navigation_closes_sidebar_only_on_mobile() {
        let open = SidebarState { open: true };
        assert!(!open.after_navigate(Some(Viewport::Mobile)).open);
        assert!(open.after_navigate(Some(Viewport::Desktop)).open);
        assert!(open.after_navigate(None).open);

        let closed = SidebarState::default();
        assert!(!closed.after_navigate(Some(Viewport::Mobile)).open);
    }

    #[test]
    fn test_closed_sidebar_uses_mini_classes() {
        let closed = SidebarState::default();
        assert_eq!(closed.sidenav_class(), "c-sidenav c-sidenav--mini");
        assert!(closed.label_class().ends_with("c-sidenav__label--mini"));
        assert!(closed.version_class().ends_with("--hidden"));
        assert_eq!(closed.content_class(), "c-layout__content");
        assert_eq!(closed.logo_class(), "c-logo c-logo--mini");
    }

    #[test]
    fn test_open_sidebar_covers_content() {
        let open = SidebarState { open: true };
        assert_eq!(open.sidenav_class(), "c-sidenav");
        assert_eq!(open.label_class(), "c-sidenav__label");
        assert_eq!(open.version_class(), "c-sidenav__version");
        assert!(open.content_class().contains("c-layout__content--covered"));
    }
}
