use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, ScrollLogicalPosition};

use crate::config::ANCHOR_SELECTOR;
use crate::dom;

/// Turns in-page `#fragment` links into smooth scrolls. Links whose fragment
/// matches nothing (or isn't a valid selector, like a bare `#`) just do nothing.
pub fn init_smooth_scroll(document: &Document) {
    let links = dom::select_all::<Element>(document, ANCHOR_SELECTOR);
    debug!("Wiring smooth scroll on {} anchor links", links.len());

    for link in links {
        let doc = document.clone();
        let anchor = link.clone();
        let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
            e.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(&href) {
                dom::smooth_scroll_to(&target, ScrollLogicalPosition::Start);
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        if link
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .is_ok()
        {
            on_click.forget();
        }
    }
}
