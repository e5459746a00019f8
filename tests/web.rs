//! Browser tests: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, EventInit, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement,
};

use hollywood_smile::behaviors::{anchors, calculator, contact, reveal};
use hollywood_smile::{attach_phone_mask, config, show_notification, Severity};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Replaces the body with `markup` and drops any toasts from earlier tests.
fn mount(markup: &str) -> Document {
    let document = document();
    document.body().unwrap().set_inner_html(markup);
    document
}

fn count(document: &Document, selector: &str) -> u32 {
    document.query_selector_all(selector).unwrap().length()
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> T {
    document.get_element_by_id(id).unwrap().dyn_into().unwrap()
}

fn input(document: &Document, id: &str) -> HtmlInputElement {
    by_id(document, id)
}

fn select(document: &Document, id: &str) -> HtmlSelectElement {
    by_id(document, id)
}

fn form_field(document: &Document, name: &str) -> HtmlInputElement {
    document
        .query_selector(&format!("input[name={}]", name))
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

/// Dispatches a bubbling, cancelable event. Returns `false` when a listener
/// called `prevent_default`.
fn fire(target: &Element, event: &str) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(event, &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

const CALCULATOR: &str = r#"
    <form id="calculatorForm">
        <select id="implantSystem">
            <option value="">--</option>
            <option value="straumann">Straumann</option>
            <option value="megagen">Megagen</option>
        </select>
        <select id="crownType">
            <option value="">--</option>
            <option value="metalCeramic">Metal-ceramic</option>
            <option value="zirconia">Zirconia</option>
        </select>
        <input id="teethCount" type="number" value="1">
    </form>
    <div id="calculatorResult" style="display: none"><span id="resultPrice"></span></div>
"#;

const CONTACT: &str = r#"
    <form id="contactForm">
        <input name="name">
        <input name="phone" type="tel">
        <input name="email">
        <select name="service">
            <option value="">--</option>
            <option value="implants">Implants</option>
        </select>
        <textarea name="message"></textarea>
    </form>
"#;

#[wasm_bindgen_test]
fn calculator_shows_discounted_total() {
    let document = mount(CALCULATOR);
    calculator::init_pricing_calculator(&document);

    select(&document, "implantSystem").set_value("straumann");
    fire(&select(&document, "implantSystem"), "change");
    let price = document.get_element_by_id("resultPrice").unwrap();
    assert_eq!(price.text_content().unwrap(), "");

    select(&document, "crownType").set_value("metalCeramic");
    fire(&select(&document, "crownType"), "change");
    assert_eq!(price.text_content().unwrap(), "2760 BYN");

    let result: HtmlElement = document
        .get_element_by_id("calculatorResult")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(result.style().get_property_value("display").unwrap(), "block");

    let teeth = input(&document, "teethCount");
    teeth.set_value("3");
    fire(&teeth, "input");
    assert_eq!(price.text_content().unwrap(), "7452 BYN");

    teeth.set_value("abc");
    fire(&teeth, "input");
    assert_eq!(price.text_content().unwrap(), "2760 BYN");
}

#[wasm_bindgen_test]
fn missing_calculator_leaves_other_behaviors_working() {
    let document = mount(
        r#"
        <div id="resultPrice"></div>
        <form id="contactForm"><input name="name"><input name="phone" type="tel"></form>
    "#,
    );
    hollywood_smile::init(&document);

    let phone = form_field(&document, "phone");
    phone.set_value("291234567");
    fire(&phone, "input");
    assert_eq!(phone.value(), "+375 (29) 123-45-67");

    let price = document.get_element_by_id("resultPrice").unwrap();
    assert_eq!(price.text_content().unwrap(), "");

    let form = document.get_element_by_id(config::CONTACT_FORM_ID).unwrap();
    assert!(!fire(&form, "submit"));
}

#[wasm_bindgen_test]
async fn contact_form_requires_name() {
    let document = mount(CONTACT);
    contact::init_contact_form(&document);
    let form: HtmlFormElement = by_id(&document, config::CONTACT_FORM_ID);
    let phone = form_field(&document, "phone");
    phone.set_value("0441234567");

    fire(&form, "submit");
    TimeoutFuture::new(50).await;

    assert_eq!(count(&document, ".notification-error"), 1);
    assert_eq!(phone.value(), "0441234567");
}

#[wasm_bindgen_test]
async fn contact_form_success_resets_fields() {
    let document = mount(CONTACT);
    contact::init_contact_form(&document);
    let form: HtmlFormElement = by_id(&document, config::CONTACT_FORM_ID);
    let name = form_field(&document, "name");
    let phone = form_field(&document, "phone");
    name.set_value("Jane");
    phone.set_value("0441234567");

    fire(&form, "submit");
    TimeoutFuture::new(50).await;

    assert_eq!(count(&document, ".notification-success"), 1);
    assert_eq!(name.value(), "");
    assert_eq!(phone.value(), "");
}

#[wasm_bindgen_test]
async fn notifications_close_independently() {
    let document = mount("");
    let first = show_notification("first", Severity::Info).unwrap();
    let second = show_notification("second", Severity::Error).unwrap();
    TimeoutFuture::new(50).await;

    assert_eq!(count(&document, ".notification-host"), 2);
    assert_eq!(count(&document, ".notification"), 2);
    assert_eq!(count(&document, "#notification-styles"), 1);

    // Hosts are appended in order, so the first one belongs to `first`
    let close = document
        .query_selector(".notification-host .notification-close")
        .unwrap()
        .unwrap();
    close.dyn_into::<HtmlElement>().unwrap().click();
    TimeoutFuture::new(50).await;

    assert!(!first.is_open());
    assert!(second.is_open());
    assert_eq!(count(&document, ".notification-host"), 1);

    // Second dismissal of the same toast is a no-op
    first.dismiss();
    second.dismiss();
    assert_eq!(count(&document, ".notification-host"), 0);
}

#[wasm_bindgen_test]
async fn notification_closes_itself_after_timeout() {
    let document = mount("");
    let toast = show_notification("bye", Severity::Success).unwrap();
    TimeoutFuture::new(config::NOTIFICATION_TIMEOUT_MS - 500).await;
    assert!(toast.is_open());

    TimeoutFuture::new(1_000).await;
    assert!(!toast.is_open());
    assert_eq!(count(&document, ".notification-host"), 0);

    toast.dismiss();
    assert_eq!(count(&document, ".notification-host"), 0);
}

#[wasm_bindgen_test]
fn phone_mask_formats_on_input() {
    let document = mount("<input id=\"phone\" type=\"tel\">");
    let phone = input(&document, "phone");
    attach_phone_mask(&phone);

    phone.set_value("375291234567");
    fire(&phone, "input");
    assert_eq!(phone.value(), "+375 (29) 123-45-67");

    fire(&phone, "input");
    assert_eq!(phone.value(), "+375 (29) 123-45-67");
}

#[wasm_bindgen_test]
async fn visible_section_is_revealed_once() {
    let document = mount(r#"<div class="section" style="height: 200px">hello</div>"#);
    let section = document.query_selector(".section").unwrap().unwrap();
    assert!(!section.class_list().contains(config::REVEALED_CLASS));

    let observer = reveal::init_scroll_reveal(&document);
    assert!(observer.is_some());
    TimeoutFuture::new(200).await;
    assert!(section.class_list().contains(config::REVEALED_CLASS));

    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 10_000.0);
    TimeoutFuture::new(100).await;
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    TimeoutFuture::new(100).await;
    assert!(section.class_list().contains(config::REVEALED_CLASS));
    assert_eq!(section.class_name(), format!("section {}", config::REVEALED_CLASS));
}

#[wasm_bindgen_test]
fn anchor_clicks_never_navigate() {
    let document = mount(
        r##"
        <a id="missing" href="#nowhere">missing</a>
        <a id="bare" href="#">bare</a>
        <a id="present" href="#target">present</a>
        <div id="target" style="margin-top: 3000px">target</div>
    "##,
    );
    anchors::init_smooth_scroll(&document);

    for id in ["missing", "bare", "present"] {
        let link = document.get_element_by_id(id).unwrap();
        assert!(!fire(&link, "click"), "default action of #{} not suppressed", id);
    }
    assert_eq!(document.location().unwrap().hash().unwrap(), "");
}
