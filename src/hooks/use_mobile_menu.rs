use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlElement, KeyboardEvent, Node};
use yew::prelude::*;

use crate::hooks::listener::EventListener;
use crate::motion::menu::{MenuController, MenuHost, PointerHit};
use crate::motion::scroll_lock::{PageScroll, ScrollLock, ScrollLockGuard};

/// Freezes page scrolling through `overflow: hidden` on `<body>`.
struct BodyOverflow;

impl PageScroll for BodyOverflow {
    fn set_locked(&self, locked: bool) {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            warn!("No document body to lock scrolling on");
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(err) = result {
            warn!("Failed to update body overflow: {:?}", err);
        }
    }
}

thread_local! {
    static PAGE_LOCK: ScrollLock = ScrollLock::new(BodyOverflow);
}

/// The one page-wide lock every overlay shares.
pub fn page_scroll_lock() -> ScrollLock {
    PAGE_LOCK.with(ScrollLock::clone)
}

#[derive(Clone, Debug, PartialEq)]
enum MenuSignal {
    Key(String),
    PointerDown(PointerHit),
    TouchStart(PointerHit),
}

type Dispatch = Rc<dyn Fn(MenuSignal)>;

struct DomMenuHost {
    trigger: NodeRef,
    panel: NodeRef,
    lock: ScrollLock,
    dispatch: Dispatch,
}

fn classify_hit(trigger: &NodeRef, panel: &NodeRef, event: &Event) -> PointerHit {
    let (Some(trigger), Some(panel)) = (trigger.get(), panel.get()) else {
        return PointerHit::Unknown;
    };
    let Some(target) = event.target().and_then(|target| target.dyn_into::<Node>().ok()) else {
        return PointerHit::Unknown;
    };
    if trigger.contains(Some(&target)) || panel.contains(Some(&target)) {
        PointerHit::Inside
    } else {
        PointerHit::Outside
    }
}

impl MenuHost for DomMenuHost {
    type Listeners = Vec<EventListener>;

    fn lock_scroll(&self) -> ScrollLockGuard {
        self.lock.acquire()
    }

    fn listen(&self) -> Self::Listeners {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return Vec::new();
        };

        let on_key = {
            let dispatch = Rc::clone(&self.dispatch);
            EventListener::new(&document, "keydown", move |event: Event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    dispatch(MenuSignal::Key(event.key()));
                }
            })
        };
        let on_pointer = {
            let dispatch = Rc::clone(&self.dispatch);
            let (trigger, panel) = (self.trigger.clone(), self.panel.clone());
            EventListener::new(&document, "mousedown", move |event: Event| {
                dispatch(MenuSignal::PointerDown(classify_hit(&trigger, &panel, &event)));
            })
        };
        let on_touch = {
            let dispatch = Rc::clone(&self.dispatch);
            let (trigger, panel) = (self.trigger.clone(), self.panel.clone());
            EventListener::passive(&document, "touchstart", move |event: Event| {
                dispatch(MenuSignal::TouchStart(classify_hit(&trigger, &panel, &event)));
            })
        };

        [on_key, on_pointer, on_touch].into_iter().flatten().collect()
    }

    fn focus_trigger(&self) {
        if let Some(trigger) = self.trigger.cast::<HtmlElement>() {
            if let Err(err) = trigger.focus() {
                warn!("Failed to return focus to menu trigger: {:?}", err);
            }
        }
    }
}

type SharedController = Rc<RefCell<Option<MenuController<DomMenuHost>>>>;

#[derive(Clone)]
pub struct UseMobileMenuHandle {
    pub is_open: bool,
    pub open: Callback<()>,
    pub close: Callback<()>,
    pub toggle: Callback<()>,
    /// Attach to the button that opens the menu; focus returns here on close.
    pub trigger_ref: NodeRef,
    /// Attach to the menu panel; presses inside it never dismiss.
    pub panel_ref: NodeRef,
}

fn build_controller(
    slot: &SharedController,
    trigger: NodeRef,
    panel: NodeRef,
    setter: UseStateSetter<bool>,
) -> MenuController<DomMenuHost> {
    let weak = Rc::downgrade(slot);
    // Listener-originated changes run on the next microtask, after the
    // listener that produced them has returned.
    let dispatch: Dispatch = Rc::new(move |signal: MenuSignal| {
        let weak = weak.clone();
        let setter = setter.clone();
        spawn_local(async move {
            let Some(slot) = weak.upgrade() else {
                return;
            };
            let mut slot = slot.borrow_mut();
            let Some(controller) = slot.as_mut() else {
                return;
            };
            let closed = match signal {
                MenuSignal::Key(key) => controller.on_key(&key),
                MenuSignal::PointerDown(hit) => controller.on_pointer_down(hit),
                MenuSignal::TouchStart(hit) => controller.on_touch_start(hit),
            };
            if closed {
                setter.set(false);
            }
        });
    });

    MenuController::new(DomMenuHost {
        trigger,
        panel,
        lock: page_scroll_lock(),
        dispatch,
    })
}

fn command<F>(slot: &SharedController, setter: UseStateSetter<bool>, action: F) -> Callback<()>
where
    F: Fn(&mut MenuController<DomMenuHost>) -> bool + 'static,
{
    let slot = Rc::clone(slot);
    Callback::from(move |_| {
        let mut slot = slot.borrow_mut();
        if let Some(controller) = slot.as_mut() {
            if action(controller) {
                debug!("Mobile menu open: {}", controller.is_open());
            }
            setter.set(controller.is_open());
        }
    })
}

/// Open/closed state for a mobile overlay menu. While open the page does not
/// scroll, and Escape or a press outside both refs closes it.
#[hook]
pub fn use_mobile_menu() -> UseMobileMenuHandle {
    let is_open = use_state_eq(|| false);
    let trigger_ref = use_node_ref();
    let panel_ref = use_node_ref();
    let slot: SharedController = use_mut_ref(|| None);

    if slot.borrow().is_none() {
        let controller = build_controller(&slot, trigger_ref.clone(), panel_ref.clone(), is_open.setter());
        *slot.borrow_mut() = Some(controller);
    }

    {
        let slot = Rc::clone(&slot);
        use_effect_with_deps(
            move |_| {
                move || {
                    if let Some(controller) = slot.borrow_mut().as_mut() {
                        controller.teardown();
                    }
                }
            },
            (),
        );
    }

    UseMobileMenuHandle {
        is_open: *is_open,
        open: command(&slot, is_open.setter(), MenuController::open),
        close: command(&slot, is_open.setter(), MenuController::close),
        toggle: command(&slot, is_open.setter(), MenuController::toggle),
        trigger_ref,
        panel_ref,
    }
}
