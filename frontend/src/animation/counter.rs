//! Count-up animation for the statistics band.
//!
//! A counter sits `Idle` until its element becomes visible, runs for a fixed
//! duration on animation frames with an ease-out cubic curve, then stays
//! `Done`. Time is always passed in, so the whole machine runs without a
//! browser.

use crate::error::LandingError;
use crate::utils::format::group_thousands_pt_br;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterPhase {
    Idle,
    Running { started_at: f64 },
    Done,
}

/// What to paint for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub reschedule: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    is_percentage: bool,
    duration_ms: f64,
    phase: CounterPhase,
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Reads a target the way `parseInt` does: optional sign, then leading digits,
/// anything after them ignored.
pub fn parse_target(raw: &str) -> Result<u64, LandingError> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(LandingError::InvalidCounterTarget(raw.to_string()));
    }
    let value: u64 = rest[..digits_len]
        .parse()
        .map_err(|_| LandingError::InvalidCounterTarget(raw.to_string()))?;
    if negative && value > 0 {
        return Err(LandingError::InvalidCounterTarget(raw.to_string()));
    }
    Ok(value)
}

impl CounterAnimation {
    pub fn new(target: u64, is_percentage: bool, duration_ms: f64) -> Self {
        Self {
            target,
            is_percentage,
            duration_ms,
            phase: CounterPhase::Idle,
        }
    }

    /// Builds a counter from the stat element's `data-target` and its text as
    /// first rendered. Unusable targets count to 0.
    pub fn from_element(raw_target: &str, initial_text: &str, duration_ms: f64) -> Self {
        let target = parse_target(raw_target).unwrap_or_else(|e| {
            log::warn!("{}", e);
            0
        });
        Self::new(target, initial_text.contains('%'), duration_ms)
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Idle -> Running. Ignored in any other phase.
    pub fn start(&mut self, now: f64) {
        if self.phase == CounterPhase::Idle {
            self.phase = CounterPhase::Running { started_at: now };
        }
    }

    /// Advances to `now` and returns the frame to paint.
    pub fn tick(&mut self, now: f64) -> CounterFrame {
        match self.phase {
            CounterPhase::Idle => CounterFrame {
                text: self.render(0),
                reschedule: false,
            },
            CounterPhase::Done => self.final_frame(),
            CounterPhase::Running { started_at } => {
                let progress = self.progress(now - started_at);
                let value = (ease_out_cubic(progress) * self.target as f64).floor() as u64;
                if progress >= 1.0 {
                    self.phase = CounterPhase::Done;
                }
                CounterFrame {
                    text: self.render(value),
                    reschedule: progress < 1.0,
                }
            }
        }
    }

    pub fn final_frame(&self) -> CounterFrame {
        CounterFrame {
            text: self.render(self.target),
            reschedule: false,
        }
    }

    fn progress(&self, elapsed: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn render(&self, value: u64) -> String {
        if self.is_percentage {
            format!("{}%", value)
        } else {
            group_thousands_pt_br(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: f64 = 2000.0;

    fn running(target: u64, is_percentage: bool, started_at: f64) -> CounterAnimation {
        let mut counter = CounterAnimation::new(target, is_percentage, DURATION);
        counter.start(started_at);
        counter
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
    }

    #[test]
    fn thousand_finishes_grouped_and_stops() {
        let mut counter = running(1000, false, 500.0);
        let frame = counter.tick(2500.0);
        assert_eq!(frame.text, "1.000");
        assert!(!frame.reschedule);
        assert_eq!(counter.phase(), CounterPhase::Done);
    }

    #[test]
    fn overshooting_the_duration_still_lands_on_target() {
        let mut counter = running(1000, false, 0.0);
        let frame = counter.tick(9000.0);
        assert_eq!(frame.text, "1.000");
        assert!(!frame.reschedule);
    }

    #[test]
    fn percentage_finishes_with_percent_sign() {
        let mut counter = running(50, true, 0.0);
        let frame = counter.tick(2000.0);
        assert_eq!(frame.text, "50%");
        assert!(!frame.reschedule);
    }

    #[test]
    fn midway_frame_follows_the_curve() {
        let mut counter = running(10000, false, 100.0);
        let frame = counter.tick(1100.0);
        assert_eq!(frame.text, "8.750");
        assert!(frame.reschedule);
        assert_eq!(counter.phase(), CounterPhase::Running { started_at: 100.0 });
    }

    #[test]
    fn frame_before_start_time_shows_zero() {
        // rAF timestamps can predate the performance.now() taken at start
        let mut counter = running(300, false, 1000.0);
        let frame = counter.tick(990.0);
        assert_eq!(frame.text, "0");
        assert!(frame.reschedule);
    }

    #[test]
    fn values_never_decrease() {
        let mut counter = running(123_456, false, 0.0);
        let mut last = 0;
        let mut now = 0.0;
        loop {
            let frame = counter.tick(now);
            let value: u64 = frame.text.replace('.', "").parse().unwrap();
            assert!(value >= last);
            last = value;
            if !frame.reschedule {
                break;
            }
            now += 16.7;
        }
        assert_eq!(last, 123_456);
    }

    #[test]
    fn done_is_terminal() {
        let mut counter = running(40, true, 0.0);
        counter.tick(2000.0);
        counter.start(5000.0);
        assert_eq!(counter.phase(), CounterPhase::Done);
        let frame = counter.tick(5001.0);
        assert_eq!(frame.text, "40%");
        assert!(!frame.reschedule);
    }

    #[test]
    fn idle_counter_does_not_schedule() {
        let mut counter = CounterAnimation::new(10, false, DURATION);
        let frame = counter.tick(100.0);
        assert_eq!(frame, CounterFrame { text: "0".into(), reschedule: false });
        assert_eq!(counter.phase(), CounterPhase::Idle);
    }

    #[test]
    fn counters_are_independent() {
        let mut a = running(100, false, 0.0);
        let mut b = running(100, false, 1000.0);
        assert_eq!(a.tick(2000.0).text, "100");
        assert!(b.tick(2000.0).reschedule);
        assert_eq!(a.phase(), CounterPhase::Done);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut counter = CounterAnimation::new(75, true, 0.0);
        counter.start(10.0);
        assert_eq!(counter.tick(10.0).text, "75%");
    }

    #[test]
    fn parses_like_parse_int() {
        assert_eq!(parse_target("1500"), Ok(1500));
        assert_eq!(parse_target("  42"), Ok(42));
        assert_eq!(parse_target("1500+"), Ok(1500));
        assert_eq!(parse_target("3.5"), Ok(3));
        assert_eq!(parse_target("+7"), Ok(7));
        assert_eq!(parse_target("-0"), Ok(0));
    }

    #[test]
    fn rejects_unusable_targets() {
        for raw in ["", "abc", "-", "-12", "k100", "99999999999999999999999"] {
            assert_eq!(
                parse_target(raw),
                Err(LandingError::InvalidCounterTarget(raw.to_string())),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn element_data_drives_mode_and_fallback() {
        let counter = CounterAnimation::from_element("95", "0%", DURATION);
        assert_eq!(counter.final_frame().text, "95%");

        let counter = CounterAnimation::from_element("4200", "0", DURATION);
        assert_eq!(counter.final_frame().text, "4.200");

        let counter = CounterAnimation::from_element("lots", "0", DURATION);
        assert_eq!(counter.final_frame().text, "0");
    }
}
