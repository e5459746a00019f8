use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config::{REVEALED_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::dom;

/// Fades sections, advantage cards and gallery items in the first time they
/// scroll into view. Each element is unobserved right after it is revealed.
///
/// Returns the observer so callers can watch elements added later; `None`
/// when the browser has no `IntersectionObserver`, in which case everything
/// keeps its static styling.
pub fn init_scroll_reveal(document: &Document) -> Option<IntersectionObserver> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let target = entry.target();
                reveal(&target);
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("IntersectionObserver unavailable, skipping scroll reveal: {:?}", e);
            return None;
        }
    };
    callback.forget();

    let targets = dom::select_all::<Element>(document, REVEAL_SELECTOR);
    debug!("Observing {} revealable elements", targets.len());
    for target in &targets {
        observer.observe(target);
    }
    Some(observer)
}

fn reveal(target: &Element) {
    let _ = target.class_list().add_1(REVEALED_CLASS);
}
