use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

const NATIONAL_PREFIX: &str = "375";

/// Renders whatever is in a phone field as `+375 (DD) DDD-DD-DD`, growing
/// with the number of digits typed so far. Running it on its own output
/// gives the same string back.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = digits.strip_prefix(NATIONAL_PREFIX).unwrap_or(&digits);

    // All digits are ASCII, so byte slicing is safe
    match digits.len() {
        0 => String::new(),
        1..=2 => format!("+375 ({}", digits),
        3..=5 => format!("+375 ({}) {}", &digits[..2], &digits[2..]),
        6..=7 => format!("+375 ({}) {}-{}", &digits[..2], &digits[2..5], &digits[5..]),
        _ => format!(
            "+375 ({}) {}-{}-{}",
            &digits[..2],
            &digits[2..5],
            &digits[5..7],
            &digits[7..digits.len().min(9)]
        ),
    }
}

/// Re-formats the input's value on every keystroke.
pub fn attach_phone_mask(input: &HtmlInputElement) {
    let target = input.clone();
    let on_input = Closure::wrap(Box::new(move |_: Event| {
        let formatted = format_phone(&target.value());
        target.set_value(&formatted);
    }) as Box<dyn FnMut(Event)>);

    if input
        .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
        .is_ok()
    {
        on_input.forget();
    }
}
