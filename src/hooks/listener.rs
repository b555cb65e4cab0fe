use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// A DOM event listener that unregisters itself when dropped.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(target, event_type, handler, false)
    }

    /// Listener that promises never to call `prevent_default`, for scroll and touch.
    pub fn passive<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(target, event_type, handler, true)
    }

    fn register<F>(
        target: &EventTarget,
        event_type: &'static str,
        handler: F,
        passive: bool,
    ) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);

        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event_type,
                callback,
            }),
            Err(err) => {
                warn!("Failed to listen for {}: {:?}", event_type, err);
                None
            }
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove {} listener: {:?}", self.event_type, err);
        }
    }
}
