//! Open/closed state machine for the mobile navigation overlay.
//!
//! Entering `Open` acquires a page scroll lock and the dismissal listeners as
//! one scope. Every way out of `Open` drops that scope, so the lock and the
//! listeners cannot outlive the open state, including when the controller
//! itself is dropped mid-open.

use log::debug;

use super::scroll_lock::ScrollLockGuard;

/// Browser-facing side of the controller.
pub trait MenuHost {
    /// Dismissal listeners; dropping the value must unregister them.
    type Listeners;

    fn lock_scroll(&self) -> ScrollLockGuard;
    fn listen(&self) -> Self::Listeners;
    fn focus_trigger(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    Escape,
    PointerOutside,
    TouchOutside,
}

/// Where a pointer or touch landed relative to the panel and its trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerHit {
    Inside,
    Outside,
    /// One of the regions is not mounted; outside dismissal is inactive.
    Unknown,
}

struct OpenScope<L> {
    _lock: ScrollLockGuard,
    _listeners: L,
}

pub struct MenuController<H: MenuHost> {
    host: H,
    open: Option<OpenScope<H::Listeners>>,
}

impl<H: MenuHost> MenuController<H> {
    pub fn new(host: H) -> Self {
        Self { host, open: None }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Returns `false` if the menu was already open.
    pub fn open(&mut self) -> bool {
        if self.open.is_some() {
            return false;
        }
        let lock = self.host.lock_scroll();
        let listeners = self.host.listen();
        self.open = Some(OpenScope {
            _lock: lock,
            _listeners: listeners,
        });
        true
    }

    /// Returns `false` if the menu was already closed.
    pub fn close(&mut self) -> bool {
        match self.open.take() {
            Some(scope) => {
                drop(scope);
                self.host.focus_trigger();
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self) -> bool {
        if self.is_open() {
            self.close()
        } else {
            self.open()
        }
    }

    pub fn dismiss(&mut self, reason: Dismissal) -> bool {
        let closed = self.close();
        if closed {
            debug!("menu dismissed: {:?}", reason);
        }
        closed
    }

    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.is_open() && self.dismiss(Dismissal::Escape)
    }

    pub fn on_pointer_down(&mut self, hit: PointerHit) -> bool {
        hit == PointerHit::Outside && self.is_open() && self.dismiss(Dismissal::PointerOutside)
    }

    pub fn on_touch_start(&mut self, hit: PointerHit) -> bool {
        hit == PointerHit::Outside && self.is_open() && self.dismiss(Dismissal::TouchOutside)
    }

    /// Releases everything without moving focus; used when the owner unmounts.
    pub fn teardown(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scroll_lock::testing::RecordingPage;
    use crate::motion::scroll_lock::ScrollLock;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct Journal {
        events: RefCell<Vec<&'static str>>,
        live_listeners: Cell<usize>,
    }

    struct ListenerSet(Rc<Journal>);

    impl Drop for ListenerSet {
        fn drop(&mut self) {
            self.0.live_listeners.set(self.0.live_listeners.get() - 1);
            self.0.events.borrow_mut().push("unlisten");
        }
    }

    struct FakeHost {
        lock: ScrollLock,
        journal: Rc<Journal>,
    }

    impl MenuHost for FakeHost {
        type Listeners = ListenerSet;

        fn lock_scroll(&self) -> ScrollLockGuard {
            self.journal.events.borrow_mut().push("lock");
            self.lock.acquire()
        }

        fn listen(&self) -> ListenerSet {
            self.journal.live_listeners.set(self.journal.live_listeners.get() + 1);
            self.journal.events.borrow_mut().push("listen");
            ListenerSet(Rc::clone(&self.journal))
        }

        fn focus_trigger(&self) {
            self.journal.events.borrow_mut().push("focus");
        }
    }

    fn controller() -> (MenuController<FakeHost>, RecordingPage, Rc<Journal>) {
        let page = RecordingPage::default();
        let journal = Rc::new(Journal::default());
        let host = FakeHost {
            lock: ScrollLock::new(page.clone()),
            journal: Rc::clone(&journal),
        };
        (MenuController::new(host), page, journal)
    }

    #[test]
    fn double_open_acquires_lock_once() {
        let (mut menu, page, journal) = controller();
        assert!(menu.open());
        assert!(!menu.open());

        assert_eq!(page.calls(), vec![true]);
        assert_eq!(journal.live_listeners.get(), 1);
        assert_eq!(*journal.events.borrow(), vec!["lock", "listen"]);
    }

    #[test]
    fn close_when_closed_has_no_side_effects() {
        let (mut menu, page, journal) = controller();
        assert!(!menu.close());
        assert!(!menu.dismiss(Dismissal::Escape));
        assert!(page.calls().is_empty());
        assert!(journal.events.borrow().is_empty());
    }

    #[test]
    fn escape_closes_and_restores_focus() {
        let (mut menu, page, journal) = controller();
        menu.open();

        assert!(!menu.on_key("Enter"));
        assert!(menu.is_open());
        assert!(menu.on_key("Escape"));

        assert!(!menu.is_open());
        assert_eq!(page.calls(), vec![true, false]);
        assert_eq!(journal.live_listeners.get(), 0);
        assert_eq!(
            *journal.events.borrow(),
            vec!["lock", "listen", "unlisten", "focus"]
        );
    }

    #[test]
    fn outside_pointer_and_touch_dismiss() {
        let (mut menu, _, _) = controller();
        menu.open();
        assert!(!menu.on_pointer_down(PointerHit::Inside));
        assert!(!menu.on_pointer_down(PointerHit::Unknown));
        assert!(menu.on_pointer_down(PointerHit::Outside));

        menu.open();
        assert!(!menu.on_touch_start(PointerHit::Inside));
        assert!(menu.on_touch_start(PointerHit::Outside));
        assert!(!menu.is_open());
    }

    #[test]
    fn toggle_alternates_states() {
        let (mut menu, page, _) = controller();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.is_open());
        assert_eq!(page.calls(), vec![true, false]);
    }

    #[test]
    fn dropping_open_controller_releases_without_focus() {
        let (mut menu, page, journal) = controller();
        menu.open();
        drop(menu);

        assert_eq!(page.calls(), vec![true, false]);
        assert_eq!(journal.live_listeners.get(), 0);
        assert!(!journal.events.borrow().contains(&"focus"));
    }

    #[test]
    fn teardown_then_events_are_inert() {
        let (mut menu, page, journal) = controller();
        menu.open();
        menu.teardown();

        assert!(!menu.on_key("Escape"));
        assert!(!menu.on_pointer_down(PointerHit::Outside));
        assert_eq!(page.calls(), vec![true, false]);
        assert_eq!(journal.live_listeners.get(), 0);
    }

    #[test]
    fn two_controllers_share_one_page_lock() {
        let page = RecordingPage::default();
        let lock = ScrollLock::new(page.clone());
        let host = |lock: &ScrollLock| FakeHost {
            lock: lock.clone(),
            journal: Rc::new(Journal::default()),
        };
        let mut drawer = MenuController::new(host(&lock));
        let mut dialog = MenuController::new(host(&lock));

        drawer.open();
        dialog.open();
        drawer.close();
        assert!(lock.is_locked());
        dialog.close();

        assert_eq!(page.calls(), vec![true, false]);
    }
}
