pub const NAVBAR_SHADOW: &str = "0 4px 20px rgba(0, 0, 0, 0.1)";
pub const PROGRESS_BAR_STYLE: &str = "position: fixed; top: 0; left: 0; height: 3px; \
    background: linear-gradient(90deg, hsl(280, 85%, 65%), hsl(320, 80%, 60%)); \
    z-index: 9999; transition: width 0.1s ease;";

const COUNTER_DURATION_MS: f64 = 2_000.0;
const COUNTER_FRAME_MS: f64 = 16.0;

pub fn navbar_shadow(scroll_y: f64) -> &'static str {
    if scroll_y <= 0.0 {
        "none"
    } else {
        NAVBAR_SHADOW
    }
}

/// Not guarded: a document that cannot scroll yields NaN or infinity.
pub fn scroll_progress_percent(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    scroll_y / (scroll_height - client_height) * 100.0
}

pub fn progress_width(percent: f64) -> String {
    format!("{percent}%")
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StatsTrigger {
    fired: bool,
}

impl StatsTrigger {
    pub fn has_fired(self) -> bool {
        self.fired
    }

    pub fn check(&mut self, scroll_y: f64, viewport_height: f64, section_top: f64, section_height: f64) -> bool {
        if self.fired {
            return false;
        }

        if scroll_y + viewport_height > section_top + section_height / 2.0 {
            self.fired = true;
            return true;
        }

        false
    }
}

pub fn parse_counter_target(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    let value: i64 = digits.parse().unwrap_or(0);
    if negative {
        -value
    } else {
        value
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    Running(i64),
    Finished(String),
}

impl CounterFrame {
    pub fn text(&self) -> String {
        match self {
            Self::Running(value) => value.to_string(),
            Self::Finished(label) => label.clone(),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: i64) -> Self {
        Self {
            target,
            increment: target as f64 / (COUNTER_DURATION_MS / COUNTER_FRAME_MS),
            current: 0.0,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn step(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame::Running(self.current.floor() as i64)
        } else {
            CounterFrame::Finished(format!("{}+", self.target))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_only_after_leaving_the_top() {
        assert_eq!(navbar_shadow(0.0), "none");
        assert_eq!(navbar_shadow(-4.0), "none");
        assert_eq!(navbar_shadow(1.0), NAVBAR_SHADOW);
    }

    #[test]
    fn progress_is_share_of_scrollable_height() {
        assert_eq!(scroll_progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress_percent(500.0, 3000.0, 1000.0), 25.0);
        assert_eq!(scroll_progress_percent(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(progress_width(25.0), "25%");
    }

    #[test]
    fn non_scrollable_document_degenerates() {
        assert!(scroll_progress_percent(0.0, 800.0, 800.0).is_nan());
        assert_eq!(progress_width(f64::NAN), "NaN%");
    }

    #[test]
    fn stats_trigger_waits_for_section_midpoint() {
        let mut trigger = StatsTrigger::default();

        assert!(!trigger.check(0.0, 800.0, 1000.0, 400.0));
        assert!(!trigger.check(400.0, 800.0, 1000.0, 400.0));
        assert!(trigger.check(401.0, 800.0, 1000.0, 400.0));
        assert!(trigger.has_fired());
    }

    #[test]
    fn stats_trigger_is_one_shot() {
        let mut trigger = StatsTrigger::default();

        assert!(trigger.check(2000.0, 800.0, 1000.0, 400.0));
        assert!(!trigger.check(2000.0, 800.0, 1000.0, 400.0));
        assert!(!trigger.check(0.0, 800.0, 1000.0, 400.0));
        assert!(!trigger.check(5000.0, 800.0, 1000.0, 400.0));
    }

    #[test]
    fn counter_targets_parse_like_leading_integers() {
        assert_eq!(parse_counter_target(Some("150")), 150);
        assert_eq!(parse_counter_target(Some(" 42px")), 42);
        assert_eq!(parse_counter_target(Some("many")), 0);
        assert_eq!(parse_counter_target(None), 0);
    }

    #[test]
    fn counter_targets_accept_a_leading_sign() {
        assert_eq!(parse_counter_target(Some("-5")), -5);
        assert_eq!(parse_counter_target(Some("+5")), 5);
        assert_eq!(parse_counter_target(Some("- 5")), 0);
        assert_eq!(parse_counter_target(Some("+")), 0);
    }

    #[test]
    fn negative_target_finishes_on_the_first_frame() {
        let mut counter = CounterAnimation::new(-5);

        assert_eq!(counter.step(), CounterFrame::Finished("-5+".to_string()));
    }

    #[test]
    fn counter_runs_for_two_seconds_of_frames() {
        let mut counter = CounterAnimation::new(125);
        let frames: Vec<CounterFrame> = std::iter::from_fn(|| {
            let frame = counter.step();
            Some(frame)
        })
        .take(200)
        .take_while(|frame| !frame.is_finished())
        .collect();

        assert_eq!(frames.len(), 124);
        assert_eq!(frames.first(), Some(&CounterFrame::Running(1)));
        assert_eq!(frames.last(), Some(&CounterFrame::Running(124)));
        assert_eq!(counter.step(), CounterFrame::Finished("125+".to_string()));
    }

    #[test]
    fn counter_floors_intermediate_values() {
        let mut counter = CounterAnimation::new(50);

        assert_eq!(counter.step(), CounterFrame::Running(0));
        assert_eq!(counter.step(), CounterFrame::Running(0));
        assert_eq!(counter.step(), CounterFrame::Running(1));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = CounterAnimation::new(0);

        assert_eq!(counter.step().text(), "0+");
    }
}
