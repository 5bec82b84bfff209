use crate::model::Point;
use yew::prelude::*;

const MARKER_SIZE: f64 = 24.0;

#[derive(Properties, PartialEq, Clone)]
pub struct OriginMarkerProps {
    pub at: Option<Point>,
    pub dead_zone_radius: f64,
}

/// Engagement point indicator, with a ring showing the dead zone.
#[function_component(OriginMarker)]
pub fn origin_marker(props: &OriginMarkerProps) -> Html {
    let Some(at) = props.at else {
        return html! {};
    };
    let ring = props.dead_zone_radius * 2.0;
    html! {<>
        <div style={format!("position:fixed; left:{}px; top:{}px; width:{}px; height:{}px; border:1px dashed rgba(88,166,255,0.6); border-radius:50%; pointer-events:none; z-index:30;",
            at.x - props.dead_zone_radius, at.y - props.dead_zone_radius, ring, ring)}></div>
        <div style={format!("position:fixed; left:{}px; top:{}px; width:{}px; height:{}px; display:flex; align-items:center; justify-content:center; background:rgba(22,27,34,0.9); border:1px solid #58a6ff; border-radius:50%; color:#58a6ff; font-size:12px; pointer-events:none; z-index:31;",
            at.x - MARKER_SIZE / 2.0, at.y - MARKER_SIZE / 2.0, MARKER_SIZE, MARKER_SIZE)}>{"↕"}</div>
    </>}
}
