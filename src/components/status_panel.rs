use crate::model::Point;
use crate::util::format_point;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusPanelProps {
    pub active: bool,
    pub start: Option<Point>,
    pub current: Option<Point>,
    pub offset_y: f64,
}

#[function_component]
pub fn StatusPanel(props: &StatusPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:90px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let show = |p: Option<Point>| p.map(format_point).unwrap_or_else(|| "-".to_string());
    let (state_label, state_color) = if props.active {
        ("Scrolling", "#2ea043")
    } else {
        ("Idle", "#8b949e")
    };
    html! {
        <div style="position:fixed; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px; z-index:20;">
            <div style={row_style}>
                <span style={label_style}>{"State"}</span>
                <span style={format!("{} color:{};", value_style, state_color)}>{ state_label }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Origin"}</span>
                <span style={value_style}>{ show(props.start) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Cursor"}</span>
                <span style={value_style}>{ show(props.current) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Scrolled"}</span>
                <span style={value_style}>{ format!("{:.0}px", props.offset_y) }</span>
            </div>
        </div>
    }
}
