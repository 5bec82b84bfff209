// Utility helpers shared by the components

pub fn format_point(p: crate::model::Point) -> String {
    format!("({:.0}, {:.0})", p.x, p.y)
}

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg; // console only exists in the browser
}
