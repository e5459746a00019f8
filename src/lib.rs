//! Interactive bits of the Hollywood Smile clinic landing page: scroll
//! reveal, the implant price calculator, the contact form, phone masking
//! and smooth anchor scrolling.

pub mod config;
pub mod dom;
pub mod loader;
pub mod phone;
pub mod pricing;
mod bindings;

pub mod components {
    pub mod notification;
}
pub mod behaviors {
    pub mod anchors;
    pub mod calculator;
    pub mod contact;
    pub mod reveal;
}

pub use components::notification::{show_notification, NotificationHandle, Severity};
pub use loader::{load_component, spawn_load_component, LoadError};
pub use phone::{attach_phone_mask, format_phone};

use log::info;
use web_sys::{Document, HtmlInputElement};

/// Wires every behavior against the current markup. Each initializer looks
/// up its own elements and quietly skips itself when they are absent.
pub fn init(document: &Document) {
    behaviors::reveal::init_scroll_reveal(document);
    behaviors::calculator::init_pricing_calculator(document);
    behaviors::contact::init_contact_form(document);
    behaviors::anchors::init_smooth_scroll(document);

    let phone_inputs = dom::select_all::<HtmlInputElement>(document, config::PHONE_INPUT_SELECTOR);
    for input in &phone_inputs {
        attach_phone_mask(input);
    }
    info!("Page enhancements ready ({} phone fields)", phone_inputs.len());
}
