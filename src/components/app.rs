use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::{
    auto_scroll_area::AutoScrollArea, origin_marker::OriginMarker, settings_panel::SettingsPanel,
    status_panel::StatusPanel,
};
use crate::model::{AutoScrollConfig, Point, ScrollEvent};
use crate::state::{ScrollStatus, StatusAction, Viewport};
use crate::util::clog;

const CONFIG_ATTR: &str = "data-auto-scroll-config";
// Longest frame gap fed to the scroll step (seconds)
const MAX_FRAME_DT: f64 = 0.1;

// Initial config from `<body data-auto-scroll-config='{...}'>`, defaults otherwise
fn load_config() -> AutoScrollConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
        .and_then(|body| body.get_attribute(CONFIG_ATTR));
    match raw {
        Some(raw) => match AutoScrollConfig::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                clog(&format!("ignoring {}: {}", CONFIG_ATTR, err));
                AutoScrollConfig::default()
            }
        },
        None => AutoScrollConfig::default(),
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(load_config);
    let config_ref = use_mut_ref(|| (*config).clone());
    let viewport = use_mut_ref(Viewport::default);
    let status = use_reducer(ScrollStatus::default);
    let content_ref = use_node_ref();

    {
        let config_ref = config_ref.clone();
        use_effect_with((*config).clone(), move |cfg| {
            *config_ref.borrow_mut() = cfg.clone();
            || ()
        });
    }

    // RAF loop: advance the content while a gesture is open
    {
        let viewport = viewport.clone();
        let config_ref = config_ref.clone();
        let content_ref = content_ref.clone();
        let status = status.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let raf_id = Rc::new(RefCell::new(None));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                Rc::new(RefCell::new(None));
            if let Some(window) = window.clone() {
                let raf_id_clone = raf_id.clone();
                let closure_cell_clone = closure_cell.clone();
                let last_frame = RefCell::new(js_sys::Date::now());
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    let now = js_sys::Date::now();
                    let dt = ((now - last_frame.replace(now)) / 1000.0).clamp(0.0, MAX_FRAME_DT);
                    let mut vp = viewport.borrow_mut();
                    if vp.scrolling {
                        if let Some(el) = content_ref.cast::<web_sys::Element>() {
                            let radius = config_ref.borrow().dead_zone_radius;
                            let (dx, dy) = vp.step(radius, dt);
                            if dx != 0.0 || dy != 0.0 {
                                vp.clamp(
                                    (el.scroll_width() - el.client_width()) as f64,
                                    (el.scroll_height() - el.client_height()) as f64,
                                );
                                el.set_scroll_left(vp.offset_x.round() as i32);
                                el.set_scroll_top(vp.offset_y.round() as i32);
                                status.dispatch(StatusAction::Scrolled {
                                    offset_y: vp.offset_y,
                                });
                            }
                        }
                    }
                    drop(vp);
                    if let Some(cb) = closure_cell_clone.borrow().as_ref() {
                        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref())
                        {
                            *raf_id_clone.borrow_mut() = Some(id);
                        }
                    }
                }) as Box<dyn FnMut()>));
            }
            if let (Some(win), Some(cb)) = (&window, closure_cell.borrow().as_ref()) {
                if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }
            // Cleanup
            move || {
                if let (Some(win), Some(id)) = (&window, *raf_id.borrow()) {
                    let _ = win.cancel_animation_frame(id);
                }
                // Break the closure's reference to itself.
                closure_cell.borrow_mut().take();
            }
        });
    }

    let on_scroll_start = {
        let viewport = viewport.clone();
        let content_ref = content_ref.clone();
        let status = status.clone();
        Callback::from(move |start: Point| {
            let mut vp = viewport.borrow_mut();
            if let Some(el) = content_ref.cast::<web_sys::Element>() {
                vp.sync(el.scroll_left() as f64, el.scroll_top() as f64);
            }
            vp.begin(start);
            status.dispatch(StatusAction::Gesture(ScrollEvent::Start(start)));
        })
    };
    let on_scroll_move = {
        let viewport = viewport.clone();
        let status = status.clone();
        Callback::from(move |(start, current): (Point, Point)| {
            viewport.borrow_mut().track(start, current);
            status.dispatch(StatusAction::Gesture(ScrollEvent::Move { start, current }));
        })
    };
    let on_scroll_end = {
        let viewport = viewport.clone();
        let status = status.clone();
        Callback::from(move |_| {
            viewport.borrow_mut().end();
            status.dispatch(StatusAction::Gesture(ScrollEvent::End));
        })
    };
    let on_config_change = {
        let config = config.clone();
        Callback::from(move |cfg: AutoScrollConfig| config.set(cfg))
    };

    let paragraphs = (1..=120).map(|i| {
        html! {<p style="margin:0 0 14px 0; line-height:1.6;">
            { format!("Paragraph {}. Middle-click anywhere and move the pointer away from the marker to scroll; the further you go, the faster it moves.", i) }
        </p>}
    });

    html! {<>
        <AutoScrollArea
            config={(*config).clone()}
            {on_scroll_start}
            {on_scroll_move}
            {on_scroll_end}
            style="position:fixed; inset:0; background:#0d1117; color:#c9d1d9;"
        >
            <div ref={content_ref} style="height:100%; overflow:auto; padding:80px 280px 40px 280px; box-sizing:border-box;">
                <div style="width:1400px;">
                    { for paragraphs }
                </div>
            </div>
        </AutoScrollArea>
        <OriginMarker at={status.start} dead_zone_radius={config.dead_zone_radius} />
        <StatusPanel active={status.active} start={status.start} current={status.current} offset_y={status.offset_y} />
        <SettingsPanel config={(*config).clone()} on_change={on_config_change} />
    </>}
}
