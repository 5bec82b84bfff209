// Middle-button auto-scroll gesture state
use crate::model::{AutoScrollConfig, Buttons, Point, PointerInput, PointerKind, ScrollEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Engagement {
    #[default]
    Idle,
    Active {
        start: Point,
        /// Latches once the pointer has been further than the dead-zone radius from `start`.
        left_dead_zone: bool,
    },
}

/// Turns pointer events into scroll start / move / end notifications.
///
/// Every handler returns at most one [`ScrollEvent`]; `None` means nothing
/// changed that the owner needs to hear about.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    config: AutoScrollConfig,
    engagement: Engagement,
}

impl GestureTracker {
    pub fn new(config: AutoScrollConfig) -> Self {
        Self {
            config,
            engagement: Engagement::Idle,
        }
    }

    pub fn config(&self) -> &AutoScrollConfig {
        &self.config
    }

    /// Takes effect on the next delivered event; an open gesture is not closed here.
    pub fn set_config(&mut self, config: AutoScrollConfig) {
        self.config = config;
    }

    pub fn engagement(&self) -> Engagement {
        self.engagement
    }

    pub fn is_active(&self) -> bool {
        matches!(self.engagement, Engagement::Active { .. })
    }

    pub fn start_position(&self) -> Option<Point> {
        match self.engagement {
            Engagement::Active { start, .. } => Some(start),
            Engagement::Idle => None,
        }
    }

    pub fn left_dead_zone(&self) -> bool {
        matches!(
            self.engagement,
            Engagement::Active {
                left_dead_zone: true,
                ..
            }
        )
    }

    pub fn handle(&mut self, input: PointerInput) -> Option<ScrollEvent> {
        match input.kind {
            PointerKind::Press => self.on_press(input),
            PointerKind::Move => self.on_move(input),
            PointerKind::Release => self.on_release(input),
            PointerKind::Hover => self.on_hover(input),
        }
    }

    pub fn on_press(&mut self, input: PointerInput) -> Option<ScrollEvent> {
        // A second press closes the open gesture, as does any press while disabled.
        if !self.config.enabled || self.is_active() {
            return Some(self.force_stop());
        }
        if input.buttons != Buttons::MIDDLE {
            return None;
        }
        self.engagement = Engagement::Active {
            start: input.position,
            left_dead_zone: false,
        };
        Some(ScrollEvent::Start(input.position))
    }

    /// Releasing inside the dead zone keeps the gesture open (click-to-engage).
    pub fn on_release(&mut self, input: PointerInput) -> Option<ScrollEvent> {
        if !self.config.enabled || self.dead_zone_check(input) {
            return Some(self.force_stop());
        }
        None
    }

    pub fn on_move(&mut self, input: PointerInput) -> Option<ScrollEvent> {
        if !self.config.enabled {
            return Some(self.force_stop());
        }
        if input.buttons != Buttons::MIDDLE {
            return None;
        }
        let start = self.start_position()?;
        self.dead_zone_check(input);
        Some(ScrollEvent::Move {
            start,
            current: input.position,
        })
    }

    pub fn on_hover(&mut self, input: PointerInput) -> Option<ScrollEvent> {
        if !self.config.enabled {
            return Some(self.force_stop());
        }
        let start = self.start_position()?;
        Some(ScrollEvent::Move {
            start,
            current: input.position,
        })
    }

    /// Records whether `input` lies outside the dead zone and returns the latched flag.
    /// Always false while idle.
    pub fn dead_zone_check(&mut self, input: PointerInput) -> bool {
        let radius = self.config.dead_zone_radius;
        match &mut self.engagement {
            Engagement::Idle => false,
            Engagement::Active {
                start,
                left_dead_zone,
            } => {
                let outside = input.position.distance_to(*start) > radius;
                *left_dead_zone = *left_dead_zone || outside;
                *left_dead_zone
            }
        }
    }

    /// Ends the gesture. Yields `End` even when already idle.
    pub fn force_stop(&mut self) -> ScrollEvent {
        self.engagement = Engagement::Idle;
        ScrollEvent::End
    }

    pub fn cursor_visible(&self) -> bool {
        !(self.config.enabled && self.config.hide_cursor_while_active && self.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn engaged_at(x: f64, y: f64) -> GestureTracker {
        let mut t = GestureTracker::default();
        assert_eq!(
            t.on_press(PointerInput::press(p(x, y), Buttons::MIDDLE)),
            Some(ScrollEvent::Start(p(x, y)))
        );
        t
    }

    fn disabled(mut cfg: AutoScrollConfig) -> AutoScrollConfig {
        cfg.enabled = false;
        cfg
    }

    #[test]
    fn middle_press_engages() {
        let t = engaged_at(0.0, 0.0);
        assert_eq!(
            t.engagement(),
            Engagement::Active {
                start: p(0.0, 0.0),
                left_dead_zone: false
            }
        );
        assert_eq!(t.start_position(), Some(p(0.0, 0.0)));
    }

    #[test]
    fn move_inside_dead_zone_keeps_flag_clear() {
        let mut t = engaged_at(0.0, 0.0);
        let ev = t.on_move(PointerInput::moved(p(3.0, 4.0), Buttons::MIDDLE));
        assert_eq!(
            ev,
            Some(ScrollEvent::Move {
                start: p(0.0, 0.0),
                current: p(3.0, 4.0)
            })
        );
        assert!(!t.left_dead_zone());
    }

    #[test]
    fn move_past_dead_zone_sets_flag() {
        let mut t = engaged_at(0.0, 0.0);
        t.on_move(PointerInput::moved(p(3.0, 4.0), Buttons::MIDDLE));
        let ev = t.on_move(PointerInput::moved(p(0.0, 11.0), Buttons::MIDDLE));
        assert_eq!(
            ev,
            Some(ScrollEvent::Move {
                start: p(0.0, 0.0),
                current: p(0.0, 11.0)
            })
        );
        assert!(t.left_dead_zone());
    }

    #[test]
    fn exactly_on_radius_is_still_inside() {
        let mut t = engaged_at(0.0, 0.0);
        t.on_move(PointerInput::moved(p(10.0, 0.0), Buttons::MIDDLE));
        assert!(!t.left_dead_zone());
    }

    #[test]
    fn release_inside_dead_zone_keeps_gesture_open() {
        let mut t = engaged_at(0.0, 0.0);
        assert_eq!(t.on_release(PointerInput::release(p(0.0, 0.0), Buttons::NONE)), None);
        assert!(t.is_active());
        assert_eq!(t.start_position(), Some(p(0.0, 0.0)));
    }

    #[test]
    fn hover_after_click_engage_moves() {
        let mut t = engaged_at(0.0, 0.0);
        t.on_release(PointerInput::release(p(0.0, 0.0), Buttons::NONE));
        let ev = t.on_hover(PointerInput::hover(p(5.0, 5.0)));
        assert_eq!(
            ev,
            Some(ScrollEvent::Move {
                start: p(0.0, 0.0),
                current: p(5.0, 5.0)
            })
        );
        assert!(t.is_active());
    }

    #[test]
    fn hover_never_checks_dead_zone() {
        let mut t = engaged_at(0.0, 0.0);
        t.on_hover(PointerInput::hover(p(500.0, 0.0)));
        assert!(!t.left_dead_zone());
        assert!(t.is_active());
    }

    #[test]
    fn hover_while_idle_is_ignored() {
        let mut t = GestureTracker::default();
        assert_eq!(t.on_hover(PointerInput::hover(p(1.0, 1.0))), None);
    }

    #[test]
    fn release_after_drag_out_ends_gesture() {
        let mut t = engaged_at(0.0, 0.0);
        t.on_move(PointerInput::moved(p(0.0, 50.0), Buttons::MIDDLE));
        assert_eq!(
            t.on_release(PointerInput::release(p(0.0, 50.0), Buttons::NONE)),
            Some(ScrollEvent::End)
        );
        assert_eq!(t.engagement(), Engagement::Idle);
        assert_eq!(t.start_position(), None);
    }

    #[test]
    fn release_far_away_ends_gesture_without_moves() {
        let mut t = engaged_at(0.0, 0.0);
        assert_eq!(
            t.on_release(PointerInput::release(p(20.0, 0.0), Buttons::NONE)),
            Some(ScrollEvent::End)
        );
        assert!(!t.is_active());
    }

    #[test]
    fn dead_zone_flag_latches_within_engagement() {
        let mut t = engaged_at(0.0, 0.0);
        t.on_move(PointerInput::moved(p(30.0, 0.0), Buttons::MIDDLE));
        assert!(t.left_dead_zone());
        t.on_move(PointerInput::moved(p(1.0, 0.0), Buttons::MIDDLE));
        assert!(t.left_dead_zone());
        // Back inside, but the gesture already left the dead zone once.
        assert_eq!(
            t.on_release(PointerInput::release(p(1.0, 0.0), Buttons::NONE)),
            Some(ScrollEvent::End)
        );
    }

    #[test]
    fn dead_zone_flag_resets_after_end() {
        let mut t = engaged_at(0.0, 0.0);
        t.on_move(PointerInput::moved(p(30.0, 0.0), Buttons::MIDDLE));
        t.force_stop();
        assert!(!t.left_dead_zone());
        t.on_press(PointerInput::press(p(30.0, 0.0), Buttons::MIDDLE));
        assert!(!t.left_dead_zone());
    }

    #[test]
    fn dead_zone_check_while_idle_is_false() {
        let mut t = GestureTracker::default();
        assert!(!t.dead_zone_check(PointerInput::moved(p(100.0, 100.0), Buttons::MIDDLE)));
        assert_eq!(t.engagement(), Engagement::Idle);
    }

    #[test]
    fn zero_radius_leaves_on_any_motion() {
        let mut t = GestureTracker::new(AutoScrollConfig::default().with_dead_zone_radius(0.0));
        t.on_press(PointerInput::press(p(0.0, 0.0), Buttons::MIDDLE));
        assert!(!t.dead_zone_check(PointerInput::moved(p(0.0, 0.0), Buttons::MIDDLE)));
        assert!(t.dead_zone_check(PointerInput::moved(p(0.1, 0.0), Buttons::MIDDLE)));
    }

    #[test]
    fn move_needs_middle_button_and_engagement() {
        let mut t = GestureTracker::default();
        assert_eq!(t.on_move(PointerInput::moved(p(1.0, 1.0), Buttons::MIDDLE)), None);
        let mut t = engaged_at(0.0, 0.0);
        assert_eq!(t.on_move(PointerInput::moved(p(50.0, 0.0), Buttons::PRIMARY)), None);
        assert_eq!(
            t.on_move(PointerInput::moved(p(50.0, 0.0), Buttons(Buttons::MIDDLE.0 | 1))),
            None
        );
        assert!(!t.left_dead_zone());
    }

    #[test]
    fn other_buttons_never_engage() {
        for mask in [0u16, 1, 2, 3, 5, 6, 7, 8, 16] {
            let mut t = GestureTracker::default();
            assert_eq!(t.on_press(PointerInput::press(p(0.0, 0.0), Buttons(mask))), None);
            assert!(!t.is_active(), "mask {mask} engaged");
        }
    }

    #[test]
    fn second_press_stops_instead_of_restarting() {
        let mut t = engaged_at(0.0, 0.0);
        assert_eq!(
            t.on_press(PointerInput::press(p(9.0, 9.0), Buttons::MIDDLE)),
            Some(ScrollEvent::End)
        );
        assert!(!t.is_active());
        // Any button closes the gesture.
        let mut t = engaged_at(0.0, 0.0);
        assert_eq!(
            t.on_press(PointerInput::press(p(0.0, 0.0), Buttons::PRIMARY)),
            Some(ScrollEvent::End)
        );
    }

    #[test]
    fn force_stop_when_idle_still_reports_end() {
        let mut t = GestureTracker::default();
        assert_eq!(t.force_stop(), ScrollEvent::End);
        assert_eq!(t.force_stop(), ScrollEvent::End);
        assert_eq!(t.engagement(), Engagement::Idle);
    }

    #[test]
    fn disabled_press_never_engages() {
        let mut t = GestureTracker::new(disabled(AutoScrollConfig::default()));
        assert_eq!(
            t.on_press(PointerInput::press(p(0.0, 0.0), Buttons::MIDDLE)),
            Some(ScrollEvent::End)
        );
        assert!(!t.is_active());
    }

    #[test]
    fn disabling_stops_on_next_event_of_any_kind() {
        let inputs = [
            PointerInput::press(p(1.0, 1.0), Buttons::MIDDLE),
            PointerInput::moved(p(1.0, 1.0), Buttons::MIDDLE),
            PointerInput::release(p(1.0, 1.0), Buttons::NONE),
            PointerInput::hover(p(1.0, 1.0)),
        ];
        for input in inputs {
            let mut t = engaged_at(0.0, 0.0);
            t.set_config(disabled(t.config().clone()));
            assert!(t.is_active(), "config change alone must not stop");
            assert_eq!(t.handle(input), Some(ScrollEvent::End), "{:?}", input.kind);
            assert!(!t.is_active());
        }
    }

    #[test]
    fn cursor_hidden_only_when_enabled_configured_and_active() {
        let hide = AutoScrollConfig {
            hide_cursor_while_active: true,
            ..Default::default()
        };
        let mut t = GestureTracker::new(hide.clone());
        assert!(t.cursor_visible());
        t.on_press(PointerInput::press(p(0.0, 0.0), Buttons::MIDDLE));
        assert!(!t.cursor_visible());
        t.set_config(disabled(hide));
        assert!(t.cursor_visible());

        let mut t = engaged_at(0.0, 0.0);
        assert!(t.cursor_visible(), "hiding is off by default");
        t.force_stop();
        assert!(t.cursor_visible());
    }

    #[test]
    fn starts_never_nest() {
        let seq = [
            PointerInput::press(p(0.0, 0.0), Buttons::MIDDLE),
            PointerInput::moved(p(2.0, 0.0), Buttons::MIDDLE),
            PointerInput::release(p(2.0, 0.0), Buttons::NONE),
            PointerInput::hover(p(8.0, 3.0)),
            PointerInput::press(p(8.0, 3.0), Buttons::MIDDLE),
            PointerInput::press(p(8.0, 3.0), Buttons::MIDDLE),
            PointerInput::moved(p(40.0, 3.0), Buttons::MIDDLE),
            PointerInput::release(p(40.0, 3.0), Buttons::NONE),
            PointerInput::release(p(40.0, 3.0), Buttons::NONE),
            PointerInput::press(p(0.0, 0.0), Buttons::PRIMARY),
            PointerInput::press(p(0.0, 0.0), Buttons::MIDDLE),
        ];
        let mut t = GestureTracker::default();
        let mut open = false;
        for input in seq {
            match t.handle(input) {
                Some(ScrollEvent::Start(_)) => {
                    assert!(!open, "start while a gesture is open");
                    open = true;
                }
                Some(ScrollEvent::End) => open = false,
                Some(ScrollEvent::Move { .. }) => assert!(open),
                None => {}
            }
            assert_eq!(open, t.is_active());
        }
    }
}
