use gloo_net::http::Request;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;

use crate::dom;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request for {path} failed: {source}")]
    Fetch {
        path: String,
        #[source]
        source: gloo_net::Error,
    },
    #[error("{path} answered with HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("no element matches '{0}'")]
    MissingTarget(String),
    #[error("no document to load into")]
    NoDocument,
}

/// Fetches a markup fragment and puts it inside the element matching
/// `target_selector`, replacing what was there.
pub async fn load_component(path: &str, target_selector: &str) -> Result<(), LoadError> {
    let fetch_error = |source| LoadError::Fetch {
        path: path.to_string(),
        source,
    };

    let response = Request::get(path).send().await.map_err(fetch_error)?;
    if !response.ok() {
        return Err(LoadError::Status {
            path: path.to_string(),
            status: response.status(),
        });
    }
    let markup = response.text().await.map_err(fetch_error)?;

    let document = dom::document().ok_or(LoadError::NoDocument)?;
    let target = document
        .query_selector(target_selector)
        .ok()
        .flatten()
        .ok_or_else(|| LoadError::MissingTarget(target_selector.to_string()))?;
    target.set_inner_html(&markup);
    log::debug!("Loaded {} into {}", path, target_selector);
    Ok(())
}

/// Fire-and-forget variant: failures go to the console and nowhere else.
pub fn spawn_load_component(path: impl Into<String>, target_selector: impl Into<String>) {
    let path = path.into();
    let target_selector = target_selector.into();
    spawn_local(async move {
        if let Err(e) = load_component(&path, &target_selector).await {
            gloo_console::error!(format!("Failed to load component {}: {}", path, e));
        }
    });
}
