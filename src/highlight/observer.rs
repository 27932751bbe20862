use thiserror::Error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::HighlightConfig;
use crate::highlight::state::VisibilityEntry;

#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("IntersectionObserver is not available in this environment")]
    Unsupported,
    #[error("failed to construct IntersectionObserver: {0}")]
    Construction(String),
}

/// Watches a set of targets and reports visibility changes in batches to the
/// callback it was built with.
pub trait VisibilityObserver {
    type Target: Clone + PartialEq + 'static;

    fn observe(&mut self, target: &Self::Target);
    fn unobserve(&mut self, target: &Self::Target);
    fn disconnect(&mut self);
}

/// Browser `IntersectionObserver` reporting on DOM elements.
pub struct IntersectionVisibilityObserver {
    observer: IntersectionObserver,
    // Must outlive `observer`, which only holds a JS reference to it.
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectionVisibilityObserver {
    pub fn new<F>(config: &HighlightConfig, on_batch: F) -> Result<Self, ObserverError>
    where
        F: Fn(Vec<VisibilityEntry<Element>>) + 'static,
    {
        if !is_supported() {
            return Err(ObserverError::Unsupported);
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| VisibilityEntry::new(entry.target(), entry.is_intersecting()))
                    .collect();
                on_batch(batch);
            },
        );

        let mut options = IntersectionObserverInit::new();
        options
            .root_margin(config.root_margin)
            .threshold(&JsValue::from_f64(config.threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| ObserverError::Construction(format!("{:?}", e)))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl VisibilityObserver for IntersectionVisibilityObserver {
    type Target = Element;

    fn observe(&mut self, target: &Element) {
        self.observer.observe(target);
    }

    fn unobserve(&mut self, target: &Element) {
        self.observer.unobserve(target);
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

/// Feature check for hosts without `IntersectionObserver`.
pub fn is_supported() -> bool {
    match web_sys::window() {
        Some(window) => js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false),
        None => false,
    }
}
