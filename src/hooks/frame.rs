use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

struct Shared {
    request_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Shared {
    fn request(&self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return false;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => {
                self.request_id.set(Some(id));
                true
            }
            Err(err) => {
                warn!("requestAnimationFrame failed: {:?}", err);
                false
            }
        }
    }
}

/// Calls `tick` once per animation frame for as long as it returns `true`.
///
/// Dropping the loop cancels the outstanding frame request, so a dropped
/// loop never ticks again.
pub struct FrameLoop {
    shared: Rc<Shared>,
}

impl FrameLoop {
    pub fn start<F>(mut tick: F) -> Option<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let shared = Rc::new(Shared {
            request_id: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak = Rc::downgrade(&shared);
        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            shared.request_id.set(None);
            if tick(timestamp) {
                shared.request();
            }
        });
        *shared.callback.borrow_mut() = Some(callback);

        if shared.request() {
            Some(Self { shared })
        } else {
            None
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.shared.request_id.take() {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.cancel_animation_frame(id) {
                    warn!("cancelAnimationFrame failed: {:?}", err);
                }
            }
        }
        self.shared.callback.borrow_mut().take();
    }
}
