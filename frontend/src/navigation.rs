use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::Callback;

use crate::error::SiteError;

/// Source of truth for the active route. The browser keeps it in the
/// location fragment; tests swap in an in-memory double.
pub trait Navigator {
    /// Handle returned by `on_path_changed`. Dropping it unregisters the listener.
    type Subscription;

    /// Raw fragment including the leading `#`, or an empty string.
    fn current_path(&self) -> String;

    fn set_path(&self, id: &str) -> Result<(), SiteError>;

    fn on_path_changed(&self, callback: Callback<()>) -> Self::Subscription;
}

/// Turns a raw fragment (`#unknown%20page`) into a page id (`unknown page`).
pub fn strip_fragment(raw: &str) -> String {
    let trimmed = raw.strip_prefix('#').unwrap_or(raw);
    match urlencoding::decode(trimmed) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => trimmed.to_string(),
    }
}

#[derive(Clone, PartialEq)]
pub struct HashNavigator {
    window: Window,
}

impl HashNavigator {
    pub fn new() -> Result<Self, SiteError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(SiteError::NoWindow)
    }
}

impl Navigator for HashNavigator {
    type Subscription = HashListener;

    fn current_path(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn set_path(&self, id: &str) -> Result<(), SiteError> {
        self.window
            .location()
            .set_hash(id)
            .map_err(|err| SiteError::Location(format!("{:?}", err)))
    }

    fn on_path_changed(&self, callback: Callback<()>) -> HashListener {
        let closure = Closure::wrap(Box::new(move || {
            callback.emit(());
        }) as Box<dyn FnMut()>);

        if let Err(err) = self
            .window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
        {
            warn!("Could not listen for hashchange: {:?}", err);
        }

        HashListener {
            window: self.window.clone(),
            closure,
        }
    }
}

/// Keeps the `hashchange` closure alive for as long as the listener is registered.
pub struct HashListener {
    window: Window,
    closure: Closure<dyn FnMut()>,
}

impl Drop for HashListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("hashchange", self.closure.as_ref().unchecked_ref());
    }
}
