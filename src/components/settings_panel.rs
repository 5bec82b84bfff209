use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::model::AutoScrollConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsPanelProps {
    pub config: AutoScrollConfig,
    pub on_change: Callback<AutoScrollConfig>,
}

#[function_component]
pub fn SettingsPanel(props: &SettingsPanelProps) -> Html {
    let toggle_enabled_cb = {
        let cb = props.on_change.clone();
        let cfg = props.config.clone();
        Callback::from(move |_| {
            cb.emit(AutoScrollConfig {
                enabled: !cfg.enabled,
                ..cfg.clone()
            })
        })
    };
    let toggle_hide_cursor_cb = {
        let cb = props.on_change.clone();
        let cfg = props.config.clone();
        Callback::from(move |_| {
            cb.emit(AutoScrollConfig {
                hide_cursor_while_active: !cfg.hide_cursor_while_active,
                ..cfg.clone()
            })
        })
    };
    let radius_cb = {
        let cb = props.on_change.clone();
        let cfg = props.config.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            // Empty or half-typed values are ignored.
            if let Ok(radius) = input.value().parse::<f64>() {
                cb.emit(cfg.clone().with_dead_zone_radius(radius));
            }
        })
    };

    html! {<div style="position:fixed; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:220px; display:flex; flex-direction:column; gap:10px; font-size:14px; z-index:20;">
        <div style="font-weight:600;">{"Auto-scroll"}</div>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={props.config.enabled} onclick={toggle_enabled_cb} />
            <span>{"Enabled"}</span>
        </label>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={props.config.hide_cursor_while_active} onclick={toggle_hide_cursor_cb} />
            <span>{"Hide cursor while scrolling"}</span>
        </label>
        <label style="display:flex; align-items:center; gap:8px;">
            <span style="flex:1;">{"Dead zone (px)"}</span>
            <input type="number" min="0" step="1" style="width:64px;"
                value={props.config.dead_zone_radius.to_string()} oninput={radius_cb} />
        </label>
        <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Middle-click to engage. Release after dragging past the dead zone, or click again, to stop."}</div>
    </div>}
}
