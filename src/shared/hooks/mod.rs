// Custom Dioxus hooks
pub mod use_sidebar;
pub mod use_status;

pub use use_sidebar::{use_sidebar, current_viewport, UseSidebarReturn};
pub use use_status::{use_status, use_status_provider};
