// Entry points for other scripts on the page.

use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

use crate::components::notification::{show_notification, Severity};
use crate::loader::spawn_load_component;
use crate::phone::attach_phone_mask;

#[wasm_bindgen(js_name = loadComponent)]
pub fn load_component_js(path: String, target_selector: String) {
    spawn_load_component(path, target_selector);
}

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification_js(message: &str, severity: Option<String>) {
    let severity = severity.as_deref().map(Severity::from_name).unwrap_or_default();
    show_notification(message, severity);
}

#[wasm_bindgen(js_name = formatPhone)]
pub fn format_phone_js(input: &HtmlInputElement) {
    attach_phone_mask(input);
}
