pub mod layout;
pub mod nav;
pub mod status;

pub use layout::{SidebarState, Viewport};
pub use nav::{NavEntry, NavLink, SIDENAV_ITEMS};
pub use status::StatusBanners;
