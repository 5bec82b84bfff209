//! Middle-button auto-scroll for Yew apps.
//!
//! [`state::GestureTracker`] is the framework-free state machine;
//! [`components::auto_scroll_area::AutoScrollArea`] wires it to DOM mouse events.

pub mod components;
pub mod model;
pub mod state;
pub mod util;

pub use model::{AutoScrollConfig, Buttons, Point, PointerInput, PointerKind, ScrollEvent};
pub use state::{Engagement, GestureTracker};
