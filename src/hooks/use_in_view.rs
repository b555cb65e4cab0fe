use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::motion::viewport::{
    IntersectionSample, ViewportConfig, ViewportEffect, ViewportObserver, ViewportState,
};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct UseInViewHandle {
    /// Attach to the element whose visibility should be tracked.
    pub node_ref: NodeRef,
    pub state: ViewportState,
}

impl UseInViewHandle {
    pub fn is_visible(&self) -> bool {
        self.state.is_visible
    }
}

/// Everything one observed element holds on to. Dropping it detaches the
/// state machine first, so nothing that fires afterwards can change state.
struct Observation {
    core: Rc<RefCell<ViewportObserver>>,
    pending: Rc<RefCell<Option<Timeout>>>,
    observer: Option<IntersectionObserver>,
    _callback: Option<EntriesCallback>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.core.borrow_mut().detach();
        self.pending.borrow_mut().take();
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

fn supports_intersection_observer() -> bool {
    web_sys::window()
        .map(|window| js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

fn publish(core: &Rc<RefCell<ViewportObserver>>, setter: &UseStateSetter<ViewportState>) {
    let state = core.borrow().state().clone();
    setter.set(state);
}

fn apply_effect(
    effect: ViewportEffect,
    core: &Rc<RefCell<ViewportObserver>>,
    pending: &Rc<RefCell<Option<Timeout>>>,
    setter: &UseStateSetter<ViewportState>,
) {
    match effect {
        ViewportEffect::ScheduleShow(delay) => {
            let core = Rc::clone(core);
            let setter = setter.clone();
            let timeout = Timeout::new(delay, move || {
                let shown = core.borrow_mut().delay_elapsed();
                if shown {
                    publish(&core, &setter);
                }
            });
            *pending.borrow_mut() = Some(timeout);
        }
        ViewportEffect::Hidden => {
            pending.borrow_mut().take();
        }
        ViewportEffect::Shown | ViewportEffect::Unchanged => {}
    }
}

fn start_observing(
    node_ref: &NodeRef,
    config: &ViewportConfig,
    setter: UseStateSetter<ViewportState>,
) -> Option<Observation> {
    let element = node_ref.cast::<Element>()?;
    let core = Rc::new(RefCell::new(ViewportObserver::new(config.clone())));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let fallback = |core: Rc<RefCell<ViewportObserver>>, pending: Rc<RefCell<Option<Timeout>>>| {
        core.borrow_mut().assume_visible();
        publish(&core, &setter);
        Some(Observation {
            core,
            pending,
            observer: None,
            _callback: None,
        })
    };

    if !supports_intersection_observer() {
        warn!("IntersectionObserver unavailable, showing content without reveal");
        return fallback(core, pending);
    }

    let callback = {
        let core = Rc::clone(&core);
        let pending = Rc::clone(&pending);
        let setter = setter.clone();
        EntriesCallback::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                let effect = core.borrow_mut().observe(sample);
                apply_effect(effect, &core, &pending, &setter);
            }
            publish(&core, &setter);
        })
    };

    let threshold = core.borrow().threshold();
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(&config.root_margin.to_css());

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(err) => {
            warn!("Failed to create IntersectionObserver: {:?}", err);
            return fallback(core, pending);
        }
    };
    observer.observe(&element);
    debug!("Observing element at threshold {}", threshold);

    Some(Observation {
        core,
        pending,
        observer: Some(observer),
        _callback: Some(callback),
    })
}

/// Tracks whether the element behind `node_ref` has scrolled into view.
///
/// An element that is never mounted stays at the default, invisible state.
#[hook]
pub fn use_in_view(config: ViewportConfig) -> UseInViewHandle {
    let node_ref = use_node_ref();
    let state = use_state(ViewportState::default);

    {
        let node_ref = node_ref.clone();
        let setter = state.setter();
        use_effect_with_deps(
            move |config| {
                let observation = start_observing(&node_ref, config, setter);
                move || drop(observation)
            },
            config,
        );
    }

    UseInViewHandle {
        node_ref,
        state: (*state).clone(),
    }
}
