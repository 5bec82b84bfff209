pub mod auto_scroll;
pub mod status;
pub mod viewport;

pub use auto_scroll::{Engagement, GestureTracker};
pub use status::{ScrollStatus, StatusAction};
pub use viewport::Viewport;
