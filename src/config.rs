use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Markup contract of the landing page
pub const CALCULATOR_FORM_ID: &str = "calculatorForm";
pub const IMPLANT_SYSTEM_ID: &str = "implantSystem";
pub const CROWN_TYPE_ID: &str = "crownType";
pub const TEETH_COUNT_ID: &str = "teethCount";
pub const CALCULATOR_RESULT_ID: &str = "calculatorResult";
pub const RESULT_PRICE_ID: &str = "resultPrice";
pub const CONTACT_FORM_ID: &str = "contactForm";

pub const REVEAL_SELECTOR: &str = ".section, .advantage-card, .gallery-item";
pub const REVEALED_CLASS: &str = "fade-in";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const PHONE_INPUT_SELECTOR: &str = "input[type=\"tel\"]";

pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;
pub const NOTIFICATION_STYLE_ID: &str = "notification-styles";

pub const CURRENCY: &str = "BYN";
// Multi-tooth discount: 10% off from three teeth up
pub const DISCOUNT_MIN_TEETH: u32 = 3;
pub const DISCOUNT_PERCENT: u64 = 10;
