//! Core data models for auto-scroll.
//! Pointer input, gesture notifications and the owner-supplied configuration.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Pressed-button bitmask, laid out like `MouseEvent.buttons`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Buttons(pub u16);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const PRIMARY: Buttons = Buttons(1);
    pub const SECONDARY: Buttons = Buttons(2);
    /// Engagement button (bit index 2).
    pub const MIDDLE: Buttons = Buttons(4);

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Press,
    Move,
    Release,
    /// Movement with no button held.
    Hover,
}

impl PointerKind {
    /// DOM event type to kind. `mousemove` with nothing held counts as hover.
    pub fn from_dom(event_type: &str, buttons: Buttons) -> Option<Self> {
        match event_type {
            "mousedown" => Some(PointerKind::Press),
            "mouseup" => Some(PointerKind::Release),
            "mousemove" if buttons.is_none() => Some(PointerKind::Hover),
            "mousemove" => Some(PointerKind::Move),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub position: Point,
    pub buttons: Buttons,
    pub kind: PointerKind,
}

impl PointerInput {
    pub fn new(kind: PointerKind, position: Point, buttons: Buttons) -> Self {
        Self {
            position,
            buttons,
            kind,
        }
    }

    pub fn press(position: Point, buttons: Buttons) -> Self {
        Self::new(PointerKind::Press, position, buttons)
    }

    pub fn moved(position: Point, buttons: Buttons) -> Self {
        Self::new(PointerKind::Move, position, buttons)
    }

    pub fn release(position: Point, buttons: Buttons) -> Self {
        Self::new(PointerKind::Release, position, buttons)
    }

    pub fn hover(position: Point) -> Self {
        Self::new(PointerKind::Hover, position, Buttons::NONE)
    }

    pub fn from_mouse(event_type: &str, e: &web_sys::MouseEvent) -> Option<Self> {
        let buttons = Buttons(e.buttons());
        let kind = PointerKind::from_dom(event_type, buttons)?;
        let position = Point::new(e.client_x() as f64, e.client_y() as f64);
        Some(Self::new(kind, position, buttons))
    }
}

/// Notification emitted to the tracker's owner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollEvent {
    Start(Point),
    Move { start: Point, current: Point },
    End,
}

pub const DEFAULT_DEAD_ZONE_RADIUS: f64 = 10.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScrollConfig {
    pub enabled: bool,
    pub hide_cursor_while_active: bool,
    /// Same unit as pointer coordinates.
    pub dead_zone_radius: f64,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hide_cursor_while_active: false,
            dead_zone_radius: DEFAULT_DEAD_ZONE_RADIUS,
        }
    }
}

impl AutoScrollConfig {
    /// Parses a (possibly partial) JSON object; absent fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let cfg: AutoScrollConfig = serde_json::from_str(raw)?;
        Ok(cfg.sanitized())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn with_dead_zone_radius(mut self, radius: f64) -> Self {
        self.dead_zone_radius = radius;
        self.sanitized()
    }

    fn sanitized(mut self) -> Self {
        if !self.dead_zone_radius.is_finite() || self.dead_zone_radius < 0.0 {
            self.dead_zone_radius = 0.0;
        }
        self
    }
}
