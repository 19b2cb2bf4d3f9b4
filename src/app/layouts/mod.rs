pub mod layout;
pub mod logo;
pub mod navbar;
pub mod sidenav;

pub use layout::Layout;
pub use logo::Logo;
pub use navbar::Navbar;
pub use sidenav::SideNav;
