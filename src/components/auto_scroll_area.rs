use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::model::{AutoScrollConfig, Point, PointerInput, ScrollEvent};
use crate::state::GestureTracker;
use crate::util::{clog, format_point};

#[derive(Properties, PartialEq, Clone)]
pub struct AutoScrollAreaProps {
    #[prop_or_default]
    pub config: AutoScrollConfig,
    #[prop_or_default]
    pub on_scroll_start: Callback<Point>,
    /// (start, current)
    #[prop_or_default]
    pub on_scroll_move: Callback<(Point, Point)>,
    #[prop_or_default]
    pub on_scroll_end: Callback<()>,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[derive(Clone, Default)]
struct Listeners {
    start: Callback<Point>,
    moved: Callback<(Point, Point)>,
    end: Callback<()>,
}

impl Listeners {
    fn emit(&self, event: ScrollEvent) {
        match event {
            ScrollEvent::Start(start) => self.start.emit(start),
            ScrollEvent::Move { start, current } => self.moved.emit((start, current)),
            ScrollEvent::End => self.end.emit(()),
        }
    }
}

// Console line for an engagement change. Redundant ends (idle, e.g. every
// mousemove while disabled) and moves stay quiet.
fn transition_log(was_active: bool, event: &ScrollEvent) -> Option<String> {
    match event {
        ScrollEvent::Start(start) => {
            Some(format!("auto-scroll start at {}", format_point(*start)))
        }
        ScrollEvent::End if was_active => Some("auto-scroll end".to_string()),
        _ => None,
    }
}

// Everything a DOM listener needs to feed the tracker and report back.
#[derive(Clone)]
struct Dispatcher {
    tracker: Rc<RefCell<GestureTracker>>,
    listeners: Rc<RefCell<Listeners>>,
    cursor_flag: Rc<RefCell<bool>>,
    cursor_visible: UseStateHandle<bool>,
}

impl Dispatcher {
    fn deliver(&self, input: PointerInput) {
        let (was_active, event, visible) = {
            let mut tracker = self.tracker.borrow_mut();
            let was_active = tracker.is_active();
            let event = tracker.handle(input);
            (was_active, event, tracker.cursor_visible())
        };
        if let Some(event) = event {
            if let Some(line) = transition_log(was_active, &event) {
                clog(&line);
            }
            let listeners = self.listeners.borrow().clone();
            listeners.emit(event);
        }
        // Re-render only when the cursor actually flips.
        if *self.cursor_flag.borrow() != visible {
            *self.cursor_flag.borrow_mut() = visible;
            self.cursor_visible.set(visible);
        }
    }

    fn deliver_mouse(&self, event_type: &str, e: &MouseEvent) {
        if let Some(input) = PointerInput::from_mouse(event_type, e) {
            self.deliver(input);
        }
    }
}

/// Wraps `children` and turns middle-button presses inside it into auto-scroll gestures.
///
/// Presses are taken from the area itself; moves and releases are observed on the
/// window so a drag that leaves the area still ends the gesture.
#[function_component(AutoScrollArea)]
pub fn auto_scroll_area(props: &AutoScrollAreaProps) -> Html {
    let tracker = use_mut_ref(|| GestureTracker::new(props.config.clone()));
    let listeners = use_mut_ref(Listeners::default);
    let cursor_flag = use_mut_ref(|| true);
    let cursor_visible = use_state(|| true);

    // Always hand the newest callbacks to the window listeners.
    *listeners.borrow_mut() = Listeners {
        start: props.on_scroll_start.clone(),
        moved: props.on_scroll_move.clone(),
        end: props.on_scroll_end.clone(),
    };

    // Config changes apply from the next delivered event.
    {
        let tracker = tracker.clone();
        use_effect_with(props.config.clone(), move |cfg| {
            tracker.borrow_mut().set_config(cfg.clone());
            || ()
        });
    }

    let dispatcher = Dispatcher {
        tracker: tracker.clone(),
        listeners: listeners.clone(),
        cursor_flag: cursor_flag.clone(),
        cursor_visible: cursor_visible.clone(),
    };

    // Window listeners: mousemove + mouseup
    {
        let dispatcher = dispatcher.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let mousemove_cb = {
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    dispatcher.deliver_mouse("mousemove", &e);
                }) as Box<dyn FnMut(_)>)
            };
            let mouseup_cb = {
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    dispatcher.deliver_mouse("mouseup", &e);
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(win) = &window {
                win.add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .ok();
                win.add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                    .ok();
            }
            // Cleanup
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "mousemove",
                        mousemove_cb.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "mouseup",
                        mouseup_cb.as_ref().unchecked_ref(),
                    );
                }
                let _keep_alive = (&mousemove_cb, &mouseup_cb);
            }
        });
    }

    let onmousedown = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: MouseEvent| {
            // Keep the browser's own middle-click autoscroll out of the way.
            if e.button() == 1 && dispatcher.tracker.borrow().config().enabled {
                e.prevent_default();
            }
            dispatcher.deliver_mouse("mousedown", &e);
        })
    };

    let cursor = if *cursor_visible { "" } else { " cursor:none;" };
    html! {
        <div style={format!("{}{}", props.style, cursor)} {onmousedown}>
            { props.children.clone() }
        </div>
    }
}
