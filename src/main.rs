use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

use hollywood_smile::{config, dom, init};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page enhancements");
    let Some(document) = dom::document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let doc: Document = document.clone();
        let on_ready = Closure::once(move || init(&doc));
        if document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .is_ok()
        {
            on_ready.forget();
        }
    } else {
        init(&document);
    }
}
