use log::{debug, info};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, FormData, HtmlFormElement};

use crate::components::notification::{show_notification, Severity};
use crate::config::CONTACT_FORM_ID;
use crate::dom;

pub const MISSING_FIELDS_MESSAGE: &str = "Пожалуйста, заполните обязательные поля";
pub const SENT_MESSAGE: &str = "Спасибо! Ваша заявка отправлена. Мы свяжемся с вами в ближайшее время.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("required contact fields are empty")]
    MissingRequired,
}

impl ContactSubmission {
    pub fn from_form(form: &HtmlFormElement) -> Self {
        let data = FormData::new_with_form(form).ok();
        let field = |key: &str| {
            data.as_ref()
                .and_then(|d| d.get(key).as_string())
                .unwrap_or_default()
        };
        Self {
            name: field("name"),
            phone: field("phone"),
            email: field("email"),
            service: field("service"),
            message: field("message"),
        }
    }

    /// Only name and phone are required; the rest is passed through as typed.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.phone.is_empty() {
            return Err(ContactError::MissingRequired);
        }
        Ok(())
    }
}

/// Handles one submit: validates, "sends", and tells the visitor how it went.
/// There is no backend yet, so a valid submission always succeeds.
pub fn submit(form: &HtmlFormElement) -> Result<ContactSubmission, ContactError> {
    let submission = ContactSubmission::from_form(form);
    submission.validate()?;
    match serde_json::to_string(&submission) {
        Ok(payload) => info!("Contact request (simulated send): {}", payload),
        Err(e) => debug!("Could not serialize contact request: {}", e),
    }
    form.reset();
    Ok(submission)
}

pub fn init_contact_form(document: &Document) {
    let Some(form) = dom::by_id::<HtmlFormElement>(document, CONTACT_FORM_ID) else {
        debug!("No #{} on this page", CONTACT_FORM_ID);
        return;
    };

    let target = form.clone();
    let on_submit = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        match submit(&target) {
            Ok(_) => {
                show_notification(SENT_MESSAGE, Severity::Success);
            }
            Err(ContactError::MissingRequired) => {
                show_notification(MISSING_FIELDS_MESSAGE, Severity::Error);
            }
        }
    }) as Box<dyn FnMut(Event)>);

    if form
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .is_ok()
    {
        on_submit.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, phone: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn name_and_phone_are_required() {
        assert_eq!(submission("", "0441234567").validate(), Err(ContactError::MissingRequired));
        assert_eq!(submission("Jane", "").validate(), Err(ContactError::MissingRequired));
        assert_eq!(submission("", "").validate(), Err(ContactError::MissingRequired));
    }

    #[test]
    fn optional_fields_are_not_checked() {
        let mut s = submission("Jane", "0441234567");
        assert_eq!(s.validate(), Ok(()));
        s.email = "not an email".to_string();
        s.service = String::new();
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn whitespace_counts_as_filled() {
        assert_eq!(submission(" ", "0441234567").validate(), Ok(()));
    }

    #[test]
    fn serializes_all_fields() {
        let json = serde_json::to_value(submission("Jane", "0441234567")).unwrap();
        assert_eq!(json["name"], "Jane");
        assert_eq!(json["phone"], "0441234567");
        assert_eq!(json["message"], "");
    }
}
