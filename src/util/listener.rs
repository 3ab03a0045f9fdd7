//! Event listener registration with explicit disposer handles.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::InteractionError;

/// A registered listener. Dropping the handle leaves the listener attached
/// but frees its callback, so keep it until [`ListenerHandle::remove`].
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerHandle {
    pub fn event(&self) -> &'static str {
        self.event
    }

    /// Detach the listener from its target.
    pub fn remove(self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            leptos::logging::warn!("removeEventListener({}) failed: {err:?}", self.event);
        }
    }
}

/// Attach `handler` to `target` for `event`.
pub fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<ListenerHandle, InteractionError> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    Ok(ListenerHandle { target: target.clone(), event, callback })
}

/// Attach a non-passive listener, allowing `preventDefault` on touch events.
pub fn listen_active(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<ListenerHandle, InteractionError> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    Ok(ListenerHandle { target: target.clone(), event, callback })
}
