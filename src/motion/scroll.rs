//! Scroll offset tracking with direction and threshold flags.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    None,
}

/// Raw page metrics read from the host on each sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    fn max_offset_y(&self) -> f64 {
        (self.scroll_height - self.viewport_height).max(0.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollState {
    pub offset_y: f64,
    pub offset_x: f64,
    pub direction: ScrollDirection,
    pub past_threshold: bool,
    pub at_top: bool,
    pub at_bottom: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset_y: 0.0,
            offset_x: 0.0,
            direction: ScrollDirection::None,
            past_threshold: false,
            at_top: true,
            at_bottom: false,
        }
    }
}

#[derive(Debug)]
pub struct ScrollTracker {
    threshold: f64,
    state: ScrollState,
    detached: bool,
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: non_negative(threshold),
            state: ScrollState::default(),
            detached: false,
        }
    }

    #[cfg(test)]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Folds one sample into the state. Returns `None` after [`ScrollTracker::detach`].
    pub fn sample(&mut self, metrics: ScrollMetrics) -> Option<&ScrollState> {
        if self.detached {
            return None;
        }
        let offset_y = non_negative(metrics.offset_y);
        let offset_x = non_negative(metrics.offset_x);

        let direction = if offset_y > self.state.offset_y {
            ScrollDirection::Down
        } else if offset_y < self.state.offset_y {
            ScrollDirection::Up
        } else {
            self.state.direction
        };
        let remaining = (metrics.max_offset_y() - offset_y).max(0.0);

        self.state = ScrollState {
            offset_y,
            offset_x,
            direction,
            past_threshold: offset_y > self.threshold,
            at_top: offset_y <= self.threshold,
            at_bottom: remaining <= self.threshold,
        };
        Some(&self.state)
    }

    pub fn detach(&mut self) {
        self.detached = true;
    }
}

/// Outcome of offering a raw scroll event to a [`SampleGate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Sample right away.
    Now,
    /// Sample once after this many milliseconds, then call [`SampleGate::flush`].
    Defer(u32),
    /// A trailing sample is already scheduled; drop this event.
    Coalesced,
}

/// Leading-and-trailing throttle: at most one sample per interval, and the
/// last event of a burst is never lost.
#[derive(Debug)]
pub struct SampleGate {
    interval_ms: f64,
    last_sample_at: Option<f64>,
    trailing_scheduled: bool,
}

impl SampleGate {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            last_sample_at: None,
            trailing_scheduled: false,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> Admission {
        if self.trailing_scheduled {
            return Admission::Coalesced;
        }
        match self.last_sample_at {
            Some(last) if now_ms - last < self.interval_ms => {
                self.trailing_scheduled = true;
                let wait = (self.interval_ms - (now_ms - last)).ceil().max(0.0);
                Admission::Defer(wait as u32)
            }
            _ => {
                self.last_sample_at = Some(now_ms);
                Admission::Now
            }
        }
    }

    /// Records the trailing sample taken for a previous [`Admission::Defer`].
    pub fn flush(&mut self, now_ms: f64) {
        self.trailing_scheduled = false;
        self.last_sample_at = Some(now_ms);
    }

    /// Records a sample taken outside the gate, such as the initial reading.
    pub fn mark(&mut self, now_ms: f64) {
        self.last_sample_at = Some(now_ms);
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(offset_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            offset_x: 0.0,
            offset_y,
            scroll_height: 3000.0,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn direction_compares_with_previous_sample_only() {
        let mut tracker = ScrollTracker::new(10.0);
        let directions: Vec<_> = [0.0, 50.0, 50.0, 10.0]
            .into_iter()
            .filter_map(|y| tracker.sample(page(y)).map(|state| state.direction))
            .collect();
        assert_eq!(
            directions,
            vec![
                ScrollDirection::None,
                ScrollDirection::Down,
                ScrollDirection::Down,
                ScrollDirection::Up,
            ]
        );
    }

    #[test]
    fn threshold_flags_are_complementary() {
        let mut tracker = ScrollTracker::new(50.0);
        for y in [0.0, 49.0, 50.0, 51.0, 400.0, 50.0] {
            let state = tracker.sample(page(y)).cloned().unwrap();
            assert_eq!(state.past_threshold, y > 50.0);
            assert_eq!(state.at_top, y <= 50.0);
            assert_ne!(state.past_threshold, state.at_top);
        }
    }

    #[test]
    fn at_bottom_uses_remaining_distance() {
        let mut tracker = ScrollTracker::new(10.0);
        assert!(!tracker.sample(page(2189.0)).unwrap().at_bottom);
        assert!(tracker.sample(page(2190.0)).unwrap().at_bottom);
        assert!(tracker.sample(page(2200.0)).unwrap().at_bottom);
    }

    #[test]
    fn short_page_is_always_at_bottom() {
        let mut tracker = ScrollTracker::new(0.0);
        let state = tracker
            .sample(ScrollMetrics { scroll_height: 500.0, viewport_height: 800.0, ..ScrollMetrics::default() })
            .cloned()
            .unwrap();
        assert!(state.at_top);
        assert!(state.at_bottom);
    }

    #[test]
    fn overscroll_clamps_to_zero() {
        let mut tracker = ScrollTracker::new(10.0);
        tracker.sample(page(30.0));
        let state = tracker.sample(page(-25.0)).cloned().unwrap();
        assert_eq!(state.offset_y, 0.0);
        assert_eq!(state.direction, ScrollDirection::Up);
    }

    #[test]
    fn negative_threshold_is_clamped() {
        assert_eq!(ScrollTracker::new(-5.0).threshold(), 0.0);
    }

    #[test]
    fn detached_tracker_stops_updating() {
        let mut tracker = ScrollTracker::new(10.0);
        tracker.sample(page(100.0));
        tracker.detach();
        assert!(tracker.sample(page(900.0)).is_none());
        assert_eq!(tracker.state().offset_y, 100.0);
    }

    #[test]
    fn gate_admits_leading_edge_and_one_trailing_sample() {
        let mut gate = SampleGate::new(50);
        assert_eq!(gate.admit(0.0), Admission::Now);
        assert_eq!(gate.admit(10.0), Admission::Defer(40));
        assert_eq!(gate.admit(20.0), Admission::Coalesced);
        assert_eq!(gate.admit(49.0), Admission::Coalesced);

        gate.flush(50.0);
        assert_eq!(gate.admit(60.0), Admission::Defer(40));
        gate.flush(100.0);
        assert_eq!(gate.admit(150.0), Admission::Now);
    }

    #[test]
    fn gate_respects_initial_mark() {
        let mut gate = SampleGate::new(50);
        gate.mark(1000.0);
        assert_eq!(gate.admit(1020.0), Admission::Defer(30));
    }
}
