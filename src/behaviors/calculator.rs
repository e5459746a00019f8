use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    ScrollLogicalPosition,
};

use crate::config;
use crate::dom;
use crate::pricing::CalculatorSelection;

#[derive(Clone)]
struct CalculatorFields {
    implant_system: HtmlSelectElement,
    crown_type: HtmlSelectElement,
    teeth_count: HtmlInputElement,
    result: HtmlElement,
    result_price: Element,
}

impl CalculatorFields {
    fn lookup(document: &Document) -> Option<Self> {
        Some(Self {
            implant_system: dom::by_id(document, config::IMPLANT_SYSTEM_ID)?,
            crown_type: dom::by_id(document, config::CROWN_TYPE_ID)?,
            teeth_count: dom::by_id(document, config::TEETH_COUNT_ID)?,
            result: dom::by_id(document, config::CALCULATOR_RESULT_ID)?,
            result_price: document.get_element_by_id(config::RESULT_PRICE_ID)?,
        })
    }

    fn selection(&self) -> Option<CalculatorSelection> {
        CalculatorSelection::from_form(
            &self.implant_system.value(),
            &self.crown_type.value(),
            &self.teeth_count.value(),
        )
    }

    fn recalculate(&self) {
        let Some(selection) = self.selection() else {
            return;
        };
        let quote = selection.quote();
        debug!("Quote for {:?}: {:?}", selection, quote);
        if quote.discounted() {
            debug!("Multi-tooth discount applied: {} -> {}", quote.subtotal, quote.total);
        }
        self.result_price.set_text_content(Some(&quote.to_string()));

        let style = self.result.style();
        let was_hidden = style
            .get_property_value("display")
            .map(|display| display != "block")
            .unwrap_or(true);
        let _ = style.set_property("display", "block");
        if was_hidden {
            dom::smooth_scroll_to(&self.result, ScrollLogicalPosition::Nearest);
        }
    }
}

/// Wires the implant price calculator. No-op when the calculator form or
/// any of its fields is missing from the page.
pub fn init_pricing_calculator(document: &Document) {
    if dom::by_id::<HtmlFormElement>(document, config::CALCULATOR_FORM_ID).is_none() {
        debug!("No #{} on this page", config::CALCULATOR_FORM_ID);
        return;
    }
    let Some(fields) = CalculatorFields::lookup(document) else {
        debug!("Calculator form is missing fields, leaving it inert");
        return;
    };

    let listeners: [(Element, &str); 3] = [
        (fields.implant_system.clone().into(), "change"),
        (fields.crown_type.clone().into(), "change"),
        (fields.teeth_count.clone().into(), "input"),
    ];
    for (element, event) in listeners {
        let fields = fields.clone();
        let handler = Closure::wrap(Box::new(move |_: Event| {
            fields.recalculate();
        }) as Box<dyn FnMut(Event)>);
        if element
            .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            .is_ok()
        {
            handler.forget();
        }
    }
    info!("Price calculator ready");
}
