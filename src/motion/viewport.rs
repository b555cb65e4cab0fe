//! Visibility state machine behind `use_in_view`.
//!
//! The browser side feeds [`IntersectionSample`]s in delivery order and acts on
//! the returned [`ViewportEffect`]; nothing here touches the DOM.

/// Offsets applied to the viewport box before intersection is computed, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// CSS shorthand in top/right/bottom/left order, e.g. `0px 0px -50px 0px`.
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

impl Default for RootMargin {
    // Reveal slightly before the element is fully scrolled in.
    fn default() -> Self {
        Self::new(0.0, 0.0, -50.0, 0.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewportConfig {
    pub threshold: f64,
    pub root_margin: RootMargin,
    pub trigger_once: bool,
    pub delay_ms: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::default(),
            trigger_once: true,
            delay_ms: 0,
        }
    }
}

/// Intersection ratios live in `0..=1`; NaN counts as `0`.
fn clamp_ratio(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

impl ViewportConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = clamp_ratio(threshold);
        self
    }

}

/// One intersection notification for the observed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    #[cfg(test)]
    pub fn entered() -> Self {
        Self { is_intersecting: true, ratio: 1.0 }
    }

    #[cfg(test)]
    pub fn left() -> Self {
        Self { is_intersecting: false, ratio: 0.0 }
    }

    fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewportState {
    pub is_visible: bool,
    pub has_triggered: bool,
    pub last_event: Option<IntersectionSample>,
}

/// What the host has to do after feeding a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportEffect {
    Unchanged,
    Shown,
    /// Hidden again; any pending delayed show has been dropped.
    Hidden,
    /// Call [`ViewportObserver::delay_elapsed`] after this many milliseconds.
    ScheduleShow(u32),
}

#[derive(Debug)]
pub struct ViewportObserver {
    config: ViewportConfig,
    state: ViewportState,
    pending_show: bool,
    detached: bool,
}

impl ViewportObserver {
    /// The threshold is clamped here as well, so a config built from its
    /// public fields still behaves like one built with `with_threshold`.
    pub fn new(mut config: ViewportConfig) -> Self {
        config.threshold = clamp_ratio(config.threshold);
        Self {
            config,
            state: ViewportState::default(),
            pending_show: false,
            detached: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    #[cfg(test)]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn observe(&mut self, sample: IntersectionSample) -> ViewportEffect {
        if self.detached {
            return ViewportEffect::Unchanged;
        }
        self.state.last_event = Some(sample);

        if sample.meets(self.config.threshold) {
            if self.state.is_visible || self.pending_show {
                return ViewportEffect::Unchanged;
            }
            if self.config.delay_ms > 0 {
                self.pending_show = true;
                return ViewportEffect::ScheduleShow(self.config.delay_ms);
            }
            self.show();
            return ViewportEffect::Shown;
        }

        if self.config.trigger_once {
            // Latched: leaving never hides, and an already scheduled show still lands.
            return ViewportEffect::Unchanged;
        }
        let was_visible = self.state.is_visible;
        let was_pending = std::mem::take(&mut self.pending_show);
        self.state.is_visible = false;
        if was_visible || was_pending {
            ViewportEffect::Hidden
        } else {
            ViewportEffect::Unchanged
        }
    }

    /// Applies a show scheduled by [`ViewportEffect::ScheduleShow`].
    pub fn delay_elapsed(&mut self) -> bool {
        if self.detached || !self.pending_show {
            return false;
        }
        self.pending_show = false;
        self.show();
        true
    }

    /// Fallback for hosts that cannot observe intersection at all.
    pub fn assume_visible(&mut self) {
        if !self.detached {
            self.pending_show = false;
            self.show();
        }
    }

    pub fn detach(&mut self) {
        self.detached = true;
        self.pending_show = false;
    }

    fn show(&mut self) {
        self.state.is_visible = true;
        self.state.has_triggered = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(is_intersecting: bool) -> IntersectionSample {
        if is_intersecting {
            IntersectionSample::entered()
        } else {
            IntersectionSample::left()
        }
    }

    #[test]
    fn starts_hidden_and_untriggered() {
        let observer = ViewportObserver::new(ViewportConfig::default());
        assert_eq!(observer.state(), &ViewportState::default());
    }

    #[test]
    fn trigger_once_latches_for_any_sequence() {
        let sequences: [&[bool]; 4] = [
            &[true, false, false],
            &[false, true, false, true, false],
            &[true, true, false],
            &[false, false, true, false],
        ];
        for events in sequences {
            let mut observer = ViewportObserver::new(ViewportConfig::default());
            let mut seen_visible = false;
            for &event in events {
                observer.observe(sample(event));
                seen_visible |= observer.state().is_visible;
                if seen_visible {
                    assert!(observer.state().is_visible, "reverted in {events:?}");
                    assert!(observer.state().has_triggered);
                }
            }
        }
    }

    #[test]
    fn repeating_follows_latest_event() {
        let mut observer = ViewportObserver::new(ViewportConfig { trigger_once: false, ..Default::default() });
        for event in [true, false, false, true, true, false, true] {
            observer.observe(sample(event));
            assert_eq!(observer.state().is_visible, event);
        }
        assert!(observer.state().has_triggered);
    }

    #[test]
    fn ratio_below_threshold_does_not_reveal() {
        let mut observer =
            ViewportObserver::new(ViewportConfig::default().with_threshold(0.3));
        let effect = observer.observe(IntersectionSample { is_intersecting: true, ratio: 0.1 });
        assert_eq!(effect, ViewportEffect::Unchanged);
        assert!(!observer.state().is_visible);

        let effect = observer.observe(IntersectionSample { is_intersecting: true, ratio: 0.3 });
        assert_eq!(effect, ViewportEffect::Shown);
    }

    #[test]
    fn delayed_show_is_scheduled_once() {
        let mut observer =
            ViewportObserver::new(ViewportConfig { delay_ms: 200, ..Default::default() });
        assert_eq!(observer.observe(sample(true)), ViewportEffect::ScheduleShow(200));
        assert_eq!(observer.observe(sample(true)), ViewportEffect::Unchanged);
        assert!(!observer.state().is_visible);

        assert!(observer.delay_elapsed());
        assert!(observer.state().is_visible);
        assert!(!observer.delay_elapsed());
    }

    #[test]
    fn leaving_cancels_pending_show_when_repeating() {
        let mut observer = ViewportObserver::new(
            ViewportConfig { delay_ms: 100, trigger_once: false, ..Default::default() },
        );
        observer.observe(sample(true));
        assert_eq!(observer.observe(sample(false)), ViewportEffect::Hidden);
        assert!(!observer.delay_elapsed());
        assert!(!observer.state().is_visible);
    }

    #[test]
    fn detached_observer_ignores_everything() {
        let mut observer =
            ViewportObserver::new(ViewportConfig { delay_ms: 50, ..Default::default() });
        observer.observe(sample(true));
        observer.detach();

        assert!(!observer.delay_elapsed());
        assert_eq!(observer.observe(sample(true)), ViewportEffect::Unchanged);
        observer.assume_visible();
        assert!(!observer.state().is_visible);
        assert!(observer.is_detached());
    }

    #[test]
    fn last_event_tracks_every_sample() {
        let mut observer = ViewportObserver::new(ViewportConfig::default());
        let partial = IntersectionSample { is_intersecting: true, ratio: 0.05 };
        observer.observe(partial);
        assert_eq!(observer.state().last_event, Some(partial));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(ViewportConfig::default().with_threshold(4.0).threshold, 1.0);
        assert_eq!(ViewportConfig::default().with_threshold(-1.0).threshold, 0.0);
    }

    #[test]
    fn out_of_range_threshold_is_clamped_by_the_observer() {
        let mut observer = ViewportObserver::new(ViewportConfig { threshold: 2.0, ..Default::default() });
        assert_eq!(observer.threshold(), 1.0);
        assert_eq!(observer.observe(IntersectionSample::entered()), ViewportEffect::Shown);
        assert!(observer.state().is_visible);

        let observer = ViewportObserver::new(ViewportConfig { threshold: f64::NAN, ..Default::default() });
        assert_eq!(observer.threshold(), 0.0);
    }

    #[test]
    fn root_margin_renders_css_shorthand() {
        assert_eq!(RootMargin::default().to_css(), "0px 0px -50px 0px");
        assert_eq!(RootMargin::new(8.0, 4.0, 8.0, 4.0).to_css(), "8px 4px 8px 4px");
    }
}
