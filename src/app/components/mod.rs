pub mod button;
pub mod status;

pub use button::{Button, ButtonVariant};
pub use status::{ErrorStatus, InfoStatus, LoadingBar};
