//! Count-up animation for authored stat strings such as `₹5,000+`.

/// Length of a count when no duration is given.
pub const DEFAULT_DURATION_MS: u32 = 2000;

#[derive(Clone, Debug, PartialEq)]
pub struct CounterSpec {
    source: String,
    target: f64,
    prefix: String,
    suffix: String,
    has_decimal: bool,
    duration_ms: f64,
    start_delay_ms: u32,
}

impl CounterSpec {
    /// Splits `source` around its first numeric run. Digits may be grouped
    /// with `,` and carry a `.` fraction, including a bare leading one as in
    /// `$.5B`; separators trailing the run belong to the suffix. A source
    /// without digits animates from and to `0`.
    pub fn parse(source: &str) -> Self {
        let number_start = source.find(|c: char| c.is_ascii_digit()).map(|start| {
            if source[..start].ends_with('.') {
                start - 1
            } else {
                start
            }
        });
        let (prefix, number, suffix) = match number_start {
            Some(start) => {
                let rest = &source[start..];
                let run = rest
                    .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '.'))
                    .unwrap_or(rest.len());
                let number = rest[..run].trim_end_matches([',', '.']);
                (&source[..start], number, &rest[number.len()..])
            }
            None => (source, "", ""),
        };

        let target = number
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect::<String>()
            .parse::<f64>()
            .unwrap_or(0.0);

        Self {
            source: source.to_string(),
            target,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            has_decimal: number.contains('.'),
            duration_ms: f64::from(DEFAULT_DURATION_MS),
            start_delay_ms: 0,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = f64::from(duration_ms);
        self
    }

    pub fn with_start_delay_ms(mut self, start_delay_ms: u32) -> Self {
        self.start_delay_ms = start_delay_ms;
        self
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[cfg(test)]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[cfg(test)]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[cfg(test)]
    pub fn has_decimal(&self) -> bool {
        self.has_decimal
    }

    /// Formats an intermediate value in the style of the authored string.
    pub fn format_value(&self, value: f64) -> String {
        let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
        let number = if self.has_decimal {
            format!("{:.1}", value)
        } else if self.target >= 1000.0 {
            group_thousands(value.floor() as u64)
        } else {
            format!("{}", value.floor() as u64)
        };
        format!("{}{}{}", self.prefix, number, self.suffix)
    }

    /// Value shown at progress `t` in `[0, 1]`.
    pub fn value_at(&self, t: f64) -> f64 {
        self.target * ease_out_cubic(t)
    }
}

/// `1 - (1 - t)^3`, with `t` clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    1.0 - (1.0 - t).powi(3)
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterStart {
    Ignored,
    Now,
    /// Call [`CounterAnimator::begin`] after this many milliseconds.
    After(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Request another frame.
    Continue,
    /// The final authored string is displayed; stop requesting frames.
    Finished,
    /// Not running; the frame was ignored.
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Delayed,
    Running { started_at: Option<f64> },
    Settled,
}

#[derive(Clone, Debug)]
pub struct CounterAnimator {
    spec: CounterSpec,
    phase: Phase,
    display: String,
}

impl CounterAnimator {
    pub fn new(spec: CounterSpec) -> Self {
        let display = spec.format_value(0.0);
        Self {
            spec,
            phase: Phase::Idle,
            display,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }

    /// Only the first `true` while idle starts the count; everything after is ignored.
    pub fn on_visibility(&mut self, visible: bool) -> CounterStart {
        if !visible || self.phase != Phase::Idle {
            return CounterStart::Ignored;
        }
        match self.spec.start_delay_ms {
            0 => {
                self.phase = Phase::Running { started_at: None };
                CounterStart::Now
            }
            delay => {
                self.phase = Phase::Delayed;
                CounterStart::After(delay)
            }
        }
    }

    /// Ends the start delay; returns `true` if frames should now be requested.
    pub fn begin(&mut self) -> bool {
        if self.phase != Phase::Delayed {
            return false;
        }
        self.phase = Phase::Running { started_at: None };
        true
    }

    /// Advances to the frame timestamp `now_ms`. The first frame fixes the start time.
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        let started_at = match self.phase {
            Phase::Running { started_at: Some(started_at) } => started_at,
            Phase::Running { started_at: None } => {
                self.phase = Phase::Running { started_at: Some(now_ms) };
                now_ms
            }
            _ => return FrameOutcome::Idle,
        };

        let elapsed = (now_ms - started_at).max(0.0);
        let t = if self.spec.duration_ms > 0.0 {
            (elapsed / self.spec.duration_ms).min(1.0)
        } else {
            1.0
        };

        if t >= 1.0 {
            self.display = self.spec.source.clone();
            self.phase = Phase::Settled;
            return FrameOutcome::Finished;
        }
        self.display = self.spec.format_value(self.spec.value_at(t));
        FrameOutcome::Continue
    }

    /// Jumps straight to the authored string, for hosts that cannot animate.
    pub fn finish(&mut self) {
        if matches!(self.phase, Phase::Delayed | Phase::Running { .. }) {
            self.display = self.spec.source.clone();
            self.phase = Phase::Settled;
        }
    }

    /// Stops for good, keeping whatever is displayed.
    pub fn halt(&mut self) {
        self.phase = Phase::Settled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(animator: &mut CounterAnimator) -> Vec<String> {
        let mut frames = Vec::new();
        let mut now = 0.0;
        while animator.frame(now) == FrameOutcome::Continue {
            frames.push(animator.display().to_string());
            now += 16.0;
        }
        frames
    }

    #[test]
    fn parses_rupee_stat() {
        let spec = CounterSpec::parse("₹5,000+");
        assert_eq!(spec.target(), 5000.0);
        assert_eq!(spec.prefix(), "₹");
        assert_eq!(spec.suffix(), "+");
        assert!(!spec.has_decimal());
    }

    #[test]
    fn parses_decimal_and_word_suffix() {
        let spec = CounterSpec::parse("4.8/5 rating");
        assert_eq!(spec.target(), 4.8);
        assert_eq!(spec.prefix(), "");
        assert_eq!(spec.suffix(), "/5 rating");
        assert!(spec.has_decimal());

        let spec = CounterSpec::parse("Rs. 1.5M");
        assert_eq!(spec.prefix(), "Rs. ");
        assert_eq!(spec.target(), 1.5);
        assert_eq!(spec.suffix(), "M");
    }

    #[test]
    fn leading_point_starts_the_number() {
        let spec = CounterSpec::parse("$.5B");
        assert_eq!(spec.prefix(), "$");
        assert_eq!(spec.target(), 0.5);
        assert_eq!(spec.suffix(), "B");
        assert!(spec.has_decimal());
        assert_eq!(spec.format_value(0.3), "$0.3B");

        let mut animator = CounterAnimator::new(spec.with_duration_ms(1000));
        assert_eq!(animator.on_visibility(true), CounterStart::Now);
        assert_eq!(animator.frame(0.0), FrameOutcome::Continue);
        assert_eq!(animator.frame(500.0), FrameOutcome::Continue);
        assert!(animator.display().starts_with("$0."));
        assert_eq!(animator.frame(1000.0), FrameOutcome::Finished);
        assert_eq!(animator.display(), "$.5B");
    }

    #[test]
    fn trailing_separator_belongs_to_suffix() {
        let spec = CounterSpec::parse("100, and counting");
        assert_eq!(spec.target(), 100.0);
        assert_eq!(spec.suffix(), ", and counting");
        assert!(!spec.has_decimal());
    }

    #[test]
    fn malformed_source_counts_to_zero() {
        let spec = CounterSpec::parse("Soon");
        assert_eq!(spec.target(), 0.0);
        assert_eq!(spec.prefix(), "Soon");
        assert_eq!(spec.suffix(), "");
        assert_eq!(spec.format_value(spec.value_at(0.5)), "Soon0");
    }

    #[test]
    fn settles_on_the_authored_string() {
        let mut animator = CounterAnimator::new(CounterSpec::parse("₹5,000+"));
        assert_eq!(animator.display(), "₹0+");
        assert_eq!(animator.on_visibility(true), CounterStart::Now);

        let frames = run_to_end(&mut animator);
        assert!(frames.iter().any(|frame| frame.contains(',')));
        assert_eq!(animator.display(), "₹5,000+");
        assert!(animator.is_settled());
    }

    #[test]
    fn intermediate_formatting_follows_target_style() {
        let thousands = CounterSpec::parse("12,500+");
        assert_eq!(thousands.format_value(1234.9), "1,234+");
        let small = CounterSpec::parse("50+");
        assert_eq!(small.format_value(49.99), "49+");
        let decimal = CounterSpec::parse("$2.5B");
        assert_eq!(decimal.format_value(1.26), "$1.3B");
    }

    #[test]
    fn ease_out_cubic_is_monotonic() {
        let mut previous = ease_out_cubic(0.0);
        assert_eq!(previous, 0.0);
        for step in 1..=1000 {
            let value = ease_out_cubic(f64::from(step) / 1000.0);
            assert!(value >= previous);
            previous = value;
        }
        assert_eq!(previous, 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
    }

    #[test]
    fn runs_at_most_once() {
        let mut animator = CounterAnimator::new(CounterSpec::parse("100+"));
        animator.on_visibility(true);
        run_to_end(&mut animator);

        assert_eq!(animator.on_visibility(false), CounterStart::Ignored);
        assert_eq!(animator.on_visibility(true), CounterStart::Ignored);
        assert_eq!(animator.frame(10_000.0), FrameOutcome::Idle);
        assert_eq!(animator.display(), "100+");
    }

    #[test]
    fn later_visibility_does_not_restart_a_running_count() {
        let mut animator = CounterAnimator::new(CounterSpec::parse("100+"));
        animator.on_visibility(true);
        animator.frame(0.0);
        animator.frame(500.0);
        assert_eq!(animator.on_visibility(true), CounterStart::Ignored);
        assert!(animator.is_running());
    }

    #[test]
    fn start_delay_defers_frames() {
        let spec = CounterSpec::parse("15+").with_start_delay_ms(300);
        let mut animator = CounterAnimator::new(spec);
        assert_eq!(animator.on_visibility(true), CounterStart::After(300));
        assert_eq!(animator.frame(0.0), FrameOutcome::Idle);
        assert!(animator.begin());
        assert!(!animator.begin());
        assert_eq!(animator.frame(100.0), FrameOutcome::Continue);
    }

    #[test]
    fn start_time_comes_from_first_frame() {
        let spec = CounterSpec::parse("1,000").with_duration_ms(1000);
        let mut animator = CounterAnimator::new(spec);
        animator.on_visibility(true);
        assert_eq!(animator.frame(5_000.0), FrameOutcome::Continue);
        assert_eq!(animator.display(), "0");
        animator.frame(5_500.0);
        assert_eq!(animator.display(), "875");
        assert_eq!(animator.frame(6_000.0), FrameOutcome::Finished);
        assert_eq!(animator.display(), "1,000");
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let spec = CounterSpec::parse("50+").with_duration_ms(0);
        let mut animator = CounterAnimator::new(spec);
        animator.on_visibility(true);
        assert_eq!(animator.frame(1.0), FrameOutcome::Finished);
        assert_eq!(animator.display(), "50+");
    }

    #[test]
    fn halted_animator_ignores_frames() {
        let mut animator = CounterAnimator::new(CounterSpec::parse("50+"));
        animator.on_visibility(true);
        animator.frame(0.0);
        animator.halt();
        let shown = animator.display().to_string();
        assert_eq!(animator.frame(100_000.0), FrameOutcome::Idle);
        assert_eq!(animator.display(), shown);
    }

    #[test]
    fn finish_shows_final_value_without_frames() {
        let mut animator = CounterAnimator::new(CounterSpec::parse("₹5,000+"));
        animator.finish();
        assert_eq!(animator.display(), "₹0+");

        animator.on_visibility(true);
        animator.finish();
        assert_eq!(animator.display(), "₹5,000+");
        assert!(animator.is_settled());
        assert_eq!(animator.frame(0.0), FrameOutcome::Idle);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn never_visible_keeps_static_default() {
        let mut animator = CounterAnimator::new(CounterSpec::parse("5,000+"));
        assert_eq!(animator.on_visibility(false), CounterStart::Ignored);
        assert_eq!(animator.display(), "0+");
    }
}
