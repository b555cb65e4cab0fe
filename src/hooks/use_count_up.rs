use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use yew::prelude::*;

use crate::hooks::frame::FrameLoop;
use crate::motion::counter::{CounterAnimator, CounterSpec, CounterStart, FrameOutcome};

#[derive(Default)]
struct CounterRun {
    delay: Option<Timeout>,
    frames: Option<FrameLoop>,
}

type SharedAnimator = Rc<RefCell<CounterAnimator>>;
type SharedRun = Rc<RefCell<CounterRun>>;

fn run_frames(animator: &SharedAnimator, run: &SharedRun, setter: &UseStateSetter<String>) {
    let frames = {
        let animator = Rc::clone(animator);
        let setter = setter.clone();
        FrameLoop::start(move |timestamp| {
            let mut animator = animator.borrow_mut();
            let outcome = animator.frame(timestamp);
            if outcome != FrameOutcome::Idle {
                setter.set(animator.display().to_string());
            }
            if animator.is_settled() {
                debug!("Counter settled on {}", animator.display());
            }
            outcome == FrameOutcome::Continue
        })
    };

    match frames {
        Some(frames) => run.borrow_mut().frames = Some(frames),
        None => {
            warn!("Animation frames unavailable, showing final counter value");
            let mut animator = animator.borrow_mut();
            animator.finish();
            setter.set(animator.display().to_string());
        }
    }
}

/// Text of an animated counter: the zero-valued form until `visible` first
/// turns true, then a count up to the authored `spec` source.
#[hook]
pub fn use_count_up(spec: &CounterSpec, visible: bool) -> String {
    let display = {
        let spec = spec.clone();
        use_state(move || CounterAnimator::new(spec).display().to_string())
    };
    let animator: SharedAnimator = {
        let spec = spec.clone();
        use_mut_ref(move || CounterAnimator::new(spec))
    };
    let run: SharedRun = use_mut_ref(CounterRun::default);

    {
        let animator = Rc::clone(&animator);
        let run = Rc::clone(&run);
        let setter = display.setter();
        use_effect_with_deps(
            move |visible| {
                let start = animator.borrow_mut().on_visibility(*visible);
                match start {
                    CounterStart::Now => run_frames(&animator, &run, &setter),
                    CounterStart::After(delay) => {
                        let delayed = {
                            let animator = Rc::clone(&animator);
                            let run = Rc::clone(&run);
                            Timeout::new(delay, move || {
                                let begun = animator.borrow_mut().begin();
                                if begun {
                                    run_frames(&animator, &run, &setter);
                                }
                            })
                        };
                        run.borrow_mut().delay = Some(delayed);
                    }
                    CounterStart::Ignored => {}
                }
                || ()
            },
            visible,
        );
    }

    {
        let animator = Rc::clone(&animator);
        let run = Rc::clone(&run);
        use_effect_with_deps(
            move |_| {
                move || {
                    let mut animator = animator.borrow_mut();
                    if animator.is_running() {
                        debug!("Counter unmounted mid-count at {}", animator.display());
                    }
                    animator.halt();
                    *run.borrow_mut() = CounterRun::default();
                }
            },
            (),
        );
    }

    (*display).clone()
}
