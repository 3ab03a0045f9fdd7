//! `IntersectionObserver` wrapper with an explicit disconnect handle.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::InteractionError;

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: Option<String>,
}

type EntryCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl ObserverHandle {
    /// Stop observing every target.
    pub fn disconnect(self) {
        self.observer.disconnect();
    }
}

/// Observe `targets`, calling `handler` for each reported entry.
///
/// The handler also receives the observer so it can unobserve a target.
pub fn observe(
    options: &ObserverOptions,
    targets: &[Element],
    mut handler: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
) -> Result<ObserverHandle, InteractionError> {
    let callback: EntryCallback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            handler(entry.unchecked_ref::<IntersectionObserverEntry>(), &observer);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = &options.root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in targets {
        observer.observe(target);
    }
    Ok(ObserverHandle { observer, _callback: callback })
}
