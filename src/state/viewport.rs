// Scroll position driven by an active gesture
use crate::model::Point;

/// Pixels per second at 100px past the dead zone.
const BASE_SPEED: f64 = 600.0;

#[derive(Debug, Clone, Default)]
pub struct Viewport {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scrolling: bool,
    pub start: Point,
    pub current: Point,
}

impl Viewport {
    pub fn begin(&mut self, start: Point) {
        self.scrolling = true;
        self.start = start;
        self.current = start;
    }

    pub fn track(&mut self, start: Point, current: Point) {
        self.start = start;
        self.current = current;
    }

    pub fn end(&mut self) {
        self.scrolling = false;
    }

    /// Adopts the element's real scroll position.
    pub fn sync(&mut self, x: f64, y: f64) {
        self.offset_x = x;
        self.offset_y = y;
    }

    pub fn clamp(&mut self, max_x: f64, max_y: f64) {
        self.offset_x = self.offset_x.clamp(0.0, max_x.max(0.0));
        self.offset_y = self.offset_y.clamp(0.0, max_y.max(0.0));
    }

    /// Scroll delta for `dt` seconds. Quadratic in the Euclidean distance beyond the
    /// dead zone (the same circle the tracker uses), split along the displacement.
    pub fn velocity(&self, dead_zone: f64, dt: f64) -> (f64, f64) {
        if !self.scrolling {
            return (0.0, 0.0);
        }
        let dx = self.current.x - self.start.x;
        let dy = self.current.y - self.start.y;
        let distance = dx.hypot(dy);
        let past = distance - dead_zone;
        if past <= 0.0 {
            return (0.0, 0.0);
        }
        let speed = (past / 100.0).powi(2) * BASE_SPEED * dt;
        (speed * dx / distance, speed * dy / distance)
    }

    /// Advances the offset; returns the applied delta.
    pub fn step(&mut self, dead_zone: f64, dt: f64) -> (f64, f64) {
        let (dx, dy) = self.velocity(dead_zone, dt);
        self.offset_x += dx;
        self.offset_y += dy;
        (dx, dy)
    }
}
