pub mod app;
pub mod auto_scroll_area;
pub mod origin_marker;
pub mod settings_panel;
pub mod status_panel;
