use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::Window;
use yew::prelude::*;

use crate::config;
use crate::hooks::listener::EventListener;
use crate::motion::scroll::{Admission, SampleGate, ScrollMetrics, ScrollState, ScrollTracker};

struct Shared {
    tracker: RefCell<ScrollTracker>,
    gate: RefCell<SampleGate>,
    trailing: RefCell<Option<Timeout>>,
}

struct ScrollSubscription {
    shared: Rc<Shared>,
    _listener: Option<EventListener>,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.shared.tracker.borrow_mut().detach();
        self.shared.trailing.borrow_mut().take();
    }
}

fn read_metrics(window: &Window) -> ScrollMetrics {
    let (scroll_height, viewport_height) = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| (f64::from(root.scroll_height()), f64::from(root.client_height())))
        .unwrap_or_default();
    ScrollMetrics {
        offset_x: window.page_x_offset().unwrap_or(0.0),
        offset_y: window.page_y_offset().unwrap_or(0.0),
        scroll_height,
        viewport_height,
    }
}

fn publish(shared: &Shared, window: &Window, setter: &UseStateSetter<ScrollState>) {
    let state = shared.tracker.borrow_mut().sample(read_metrics(window)).cloned();
    if let Some(state) = state {
        setter.set(state);
    }
}

fn subscribe(threshold: f64, setter: UseStateSetter<ScrollState>) -> Option<ScrollSubscription> {
    let window = web_sys::window()?;
    let shared = Rc::new(Shared {
        tracker: RefCell::new(ScrollTracker::new(threshold)),
        gate: RefCell::new(SampleGate::new(config::SCROLL_SAMPLE_INTERVAL_MS)),
        trailing: RefCell::new(None),
    });

    publish(&shared, &window, &setter);
    shared.gate.borrow_mut().mark(js_sys::Date::now());

    let listener = {
        let shared = Rc::clone(&shared);
        let target = window.clone();
        EventListener::passive(&window, "scroll", move |_| {
            let admission = shared.gate.borrow_mut().admit(js_sys::Date::now());
            match admission {
                Admission::Now => publish(&shared, &target, &setter),
                Admission::Defer(wait) => {
                    let trailing = {
                        let shared = Rc::clone(&shared);
                        let target = target.clone();
                        let setter = setter.clone();
                        Timeout::new(wait, move || {
                            shared.gate.borrow_mut().flush(js_sys::Date::now());
                            publish(&shared, &target, &setter);
                        })
                    };
                    *shared.trailing.borrow_mut() = Some(trailing);
                }
                Admission::Coalesced => {}
            }
        })
    };
    debug!("Tracking window scroll past {}px", threshold);

    Some(ScrollSubscription {
        shared,
        _listener: listener,
    })
}

/// Current page scroll state, re-sampled at most once per
/// [`config::SCROLL_SAMPLE_INTERVAL_MS`] while the user scrolls.
#[hook]
pub fn use_scroll_position(threshold: f64) -> ScrollState {
    let state = use_state(ScrollState::default);

    {
        let setter = state.setter();
        use_effect_with_deps(
            move |threshold| {
                let subscription = subscribe(*threshold, setter);
                move || drop(subscription)
            },
            threshold,
        );
    }

    (*state).clone()
}
