//! Reference-counted page scroll lock shared by overlays.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Host side effect that actually freezes or releases page scrolling.
pub trait PageScroll {
    fn set_locked(&self, locked: bool);
}

struct Inner {
    holders: Cell<usize>,
    page: Box<dyn PageScroll>,
}

impl Inner {
    fn release(&self) {
        let holders = self.holders.get().saturating_sub(1);
        self.holders.set(holders);
        if holders == 0 {
            self.page.set_locked(false);
        }
    }
}

/// The page stays locked while at least one [`ScrollLockGuard`] is alive.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<Inner>,
}

impl ScrollLock {
    pub fn new(page: impl PageScroll + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                holders: Cell::new(0),
                page: Box::new(page),
            }),
        }
    }

    #[must_use = "the lock is released as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.inner.holders.get();
        self.inner.holders.set(holders + 1);
        if holders == 0 {
            self.inner.page.set_locked(true);
        }
        ScrollLockGuard {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn holders(&self) -> usize {
        self.inner.holders.get()
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders())
            .finish()
    }
}

pub struct ScrollLockGuard {
    inner: Rc<Inner>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.inner.release();
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard")
            .field("holders", &self.inner.holders.get())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::PageScroll;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every lock/unlock the page receives.
    #[derive(Clone, Default)]
    pub struct RecordingPage {
        pub calls: Rc<RefCell<Vec<bool>>>,
    }

    impl RecordingPage {
        pub fn calls(&self) -> Vec<bool> {
            self.calls.borrow().clone()
        }
    }

    impl PageScroll for RecordingPage {
        fn set_locked(&self, locked: bool) {
            self.calls.borrow_mut().push(locked);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingPage;
    use super::*;

    #[test]
    fn single_guard_locks_and_unlocks() {
        let page = RecordingPage::default();
        let lock = ScrollLock::new(page.clone());

        let guard = lock.acquire();
        assert!(lock.is_locked());
        drop(guard);

        assert!(!lock.is_locked());
        assert_eq!(page.calls(), vec![true, false]);
    }

    #[test]
    fn nested_guards_unlock_after_last_release() {
        let page = RecordingPage::default();
        let lock = ScrollLock::new(page.clone());

        let first = lock.acquire();
        let second = lock.clone().acquire();
        assert_eq!(lock.holders(), 2);

        drop(first);
        assert!(lock.is_locked());
        assert_eq!(page.calls(), vec![true]);

        drop(second);
        assert_eq!(page.calls(), vec![true, false]);
    }

    #[test]
    fn guard_outliving_handle_still_releases() {
        let page = RecordingPage::default();
        let guard = ScrollLock::new(page.clone()).acquire();
        drop(guard);
        assert_eq!(page.calls(), vec![true, false]);
    }
}
