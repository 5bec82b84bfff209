// What the demo shows about the current gesture
use std::rc::Rc;
use yew::Reducible;

use crate::model::{Point, ScrollEvent};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollStatus {
    pub active: bool,
    pub start: Option<Point>,
    pub current: Option<Point>,
    pub offset_y: f64,
}

pub enum StatusAction {
    Gesture(ScrollEvent),
    Scrolled { offset_y: f64 },
}

impl Reducible for ScrollStatus {
    type Action = StatusAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            StatusAction::Gesture(ScrollEvent::Start(start)) => {
                new.active = true;
                new.start = Some(start);
                new.current = Some(start);
            }
            StatusAction::Gesture(ScrollEvent::Move { start, current }) => {
                new.start = Some(start);
                new.current = Some(current);
            }
            StatusAction::Gesture(ScrollEvent::End) => {
                new.active = false;
                new.start = None;
                new.current = None;
            }
            StatusAction::Scrolled { offset_y } => {
                // Whole pixels only, to avoid a re-render per sub-pixel step.
                new.offset_y = offset_y.round();
            }
        }
        if new == *self {
            return self;
        }
        Rc::new(new)
    }
}
