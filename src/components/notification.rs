use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};
use yew::prelude::*;
use yew::AppHandle;

use crate::config::{NOTIFICATION_STYLE_ID, NOTIFICATION_TIMEOUT_MS};
use crate::dom;

const NOTIFICATION_CSS: &str = r#"
    @keyframes slideInFromRight {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    .notification-close {
        background: none;
        border: none;
        color: white;
        font-size: 20px;
        cursor: pointer;
        padding: 0;
        width: 20px;
        height: 20px;
    }
    .notification-content {
        display: flex;
        align-items: center;
        gap: 10px;
    }
"#;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Anything other than `success` or `error` is shown as info.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }

    /// Font Awesome icon name
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Error => "exclamation-circle",
            Severity::Info => "info-circle",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Severity::Success => "#4CAF50",
            Severity::Error => "#f44336",
            Severity::Info => "#2196F3",
        }
    }
}

fn toast_style(severity: Severity) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
         padding: 15px 20px; border-radius: 8px; box-shadow: 0 4px 20px rgba(0,0,0,0.2); \
         z-index: 10000; max-width: 400px; display: flex; align-items: center; \
         justify-content: space-between; gap: 15px; animation: slideInFromRight 0.3s ease-out;",
        severity.background()
    )
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    #[prop_or_default]
    pub severity: Severity,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    // Auto-close; the timer goes away with the component
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(NOTIFICATION_TIMEOUT_MS, move || on_dismiss.emit(()));
                move || drop(timeout)
            },
            (),
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_dismiss.emit(());
        })
    };

    let severity = props.severity;
    html! {
        <div
            class={classes!("notification", format!("notification-{}", severity.name()))}
            style={toast_style(severity)}
        >
            <div class="notification-content">
                <i class={classes!("fas", format!("fa-{}", severity.icon()))}></i>
                <span>{ &props.message }</span>
            </div>
            <button class="notification-close" {onclick}>{"\u{00d7}"}</button>
        </div>
    }
}

struct Mounted {
    host: Element,
    app: AppHandle<Toast>,
}

/// A toast on screen. Dismissing is idempotent: whichever of the close
/// button, the timeout or [`NotificationHandle::dismiss`] comes first wins,
/// the others do nothing.
#[derive(Clone)]
pub struct NotificationHandle {
    mounted: Rc<RefCell<Option<Mounted>>>,
}

impl NotificationHandle {
    pub fn dismiss(&self) {
        let mounted = self.mounted.borrow_mut().take();
        if let Some(Mounted { host, app }) = mounted {
            host.remove();
            // May be running inside the toast's own click handler
            spawn_local(async move {
                app.destroy();
            });
        }
    }

    pub fn is_open(&self) -> bool {
        self.mounted.borrow().is_some()
    }
}

fn ensure_styles(document: &Document) {
    if document.get_element_by_id(NOTIFICATION_STYLE_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    if let Ok(style) = document.create_element("style") {
        style.set_id(NOTIFICATION_STYLE_ID);
        style.set_text_content(Some(NOTIFICATION_CSS));
        let _ = head.append_child(&style);
    }
}

/// Shows a transient message in the top-right corner.
///
/// Each call gets its own host element and Yew app, so toasts stack without
/// knowing about each other. Returns `None` when there is no document body
/// to attach to.
pub fn show_notification(message: &str, severity: Severity) -> Option<NotificationHandle> {
    let document = dom::document()?;
    let body = document.body()?;
    ensure_styles(&document);

    let host = document.create_element("div").ok()?;
    host.set_class_name("notification-host");
    body.append_child(&host).ok()?;

    let handle = NotificationHandle {
        mounted: Rc::new(RefCell::new(None)),
    };
    // Holds the handle until the toast is dismissed
    let on_dismiss = {
        let handle = handle.clone();
        Callback::from(move |_: ()| handle.dismiss())
    };
    let app = yew::Renderer::<Toast>::with_root_and_props(
        host.clone(),
        ToastProps {
            message: message.to_string(),
            severity,
            on_dismiss,
        },
    )
    .render();

    log::debug!("Showing {} notification", severity.name());
    *handle.mounted.borrow_mut() = Some(Mounted { host, app });
    Some(handle)
}
