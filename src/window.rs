use chrono::{Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::history::TimeSeriesPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Navigation step requested by the window controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavStep {
    BackWeek,
    BackMonth,
    ForwardWeek,
    ForwardMonth,
    Reset,
}

/// What a forward step does when its candidate date would pass the anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForwardPolicy {
    /// Slide `from` to `today - step` instead of advancing past today.
    #[default]
    Slide,
    /// Leave the window untouched.
    Refuse,
}

/// Holds a `[from, to]` window over a fixed `today` anchor captured at
/// construction. A long-lived session keeps the anchor it started with.
/// The navigator is a pure state holder: `set_from`/`set_to` accept any
/// dates; validation happens at the series-filtering boundary.
#[derive(Debug, Clone)]
pub struct WindowNavigator {
    today: NaiveDate,
    policy: ForwardPolicy,
    window: DateWindow,
}

impl WindowNavigator {
    /// Navigator anchored to the current UTC day.
    pub fn new() -> Self {
        Self::anchored(Utc::now().date_naive())
    }

    pub fn anchored(today: NaiveDate) -> Self {
        Self::with_policy(today, ForwardPolicy::default())
    }

    pub fn with_policy(today: NaiveDate, policy: ForwardPolicy) -> Self {
        Self {
            today,
            policy,
            window: default_window(today),
        }
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn set_from(&mut self, from: NaiveDate) {
        self.window.from = from;
    }

    pub fn set_to(&mut self, to: NaiveDate) {
        self.window.to = to;
    }

    pub fn back_week(&mut self) {
        self.window.from = self.window.from - Duration::days(7);
    }

    pub fn back_month(&mut self) {
        if let Some(from) = self.window.from.checked_sub_months(Months::new(1)) {
            self.window.from = from;
        }
    }

    pub fn forward_week(&mut self) {
        let candidate = self.window.to + Duration::days(7);
        if candidate > self.today {
            if self.policy == ForwardPolicy::Slide {
                self.window.from = self.today - Duration::days(7);
            }
        } else {
            self.window.from = candidate;
        }
    }

    pub fn forward_month(&mut self) {
        let Some(candidate) = self.window.to.checked_add_months(Months::new(1)) else {
            return;
        };
        if candidate > self.today {
            if self.policy == ForwardPolicy::Slide {
                if let Some(from) = self.today.checked_sub_months(Months::new(1)) {
                    self.window.from = from;
                }
            }
        } else {
            self.window.from = candidate;
        }
    }

    pub fn reset(&mut self) {
        self.window = default_window(self.today);
    }

    pub fn step(&mut self, step: NavStep) {
        match step {
            NavStep::BackWeek => self.back_week(),
            NavStep::BackMonth => self.back_month(),
            NavStep::ForwardWeek => self.forward_week(),
            NavStep::ForwardMonth => self.forward_month(),
            NavStep::Reset => self.reset(),
        }
    }
}

impl Default for WindowNavigator {
    fn default() -> Self {
        Self::new()
    }
}

fn default_window(today: NaiveDate) -> DateWindow {
    DateWindow {
        from: today - Duration::days(7),
        to: today,
    }
}

/// Points with `from <= date <= to`, both bounds inclusive.
pub fn filter_series(series: &[TimeSeriesPoint], window: DateWindow) -> Vec<TimeSeriesPoint> {
    series
        .iter()
        .filter(|point| window.from <= point.date && point.date <= window.to)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_window_is_last_seven_days() {
        let nav = WindowNavigator::anchored(day(2024, 6, 15));
        assert_eq!(
            nav.window(),
            DateWindow {
                from: day(2024, 6, 8),
                to: day(2024, 6, 15)
            }
        );
    }

    #[test]
    fn forward_week_never_moves_past_the_anchor() {
        let mut nav = WindowNavigator::anchored(day(2024, 6, 15));
        // `to` already sits on today; the candidate passes the anchor, so
        // the window slides back to the last seven days instead
        nav.forward_week();
        let window = nav.window();
        assert!(window.to <= day(2024, 6, 15));
        assert_eq!(window.from, day(2024, 6, 8));
    }

    #[test]
    fn forward_week_advances_from_when_candidate_is_within_anchor() {
        let mut nav = WindowNavigator::anchored(day(2024, 6, 15));
        nav.set_from(day(2024, 5, 1));
        nav.set_to(day(2024, 6, 1));
        nav.forward_week();
        assert_eq!(nav.window().from, day(2024, 6, 8));
        assert_eq!(nav.window().to, day(2024, 6, 1));
    }

    #[test]
    fn refuse_policy_leaves_window_untouched_at_the_anchor() {
        let mut nav = WindowNavigator::with_policy(day(2024, 6, 15), ForwardPolicy::Refuse);
        let before = nav.window();
        nav.forward_week();
        nav.forward_month();
        assert_eq!(nav.window(), before);
    }

    #[test]
    fn back_month_rolls_over_year_and_clamps_day_overflow() {
        let mut nav = WindowNavigator::anchored(day(2024, 1, 20));
        nav.set_from(day(2024, 1, 5));
        nav.back_month();
        assert_eq!(nav.window().from, day(2023, 12, 5));

        nav.set_from(day(2024, 3, 31));
        nav.back_month();
        assert_eq!(nav.window().from, day(2024, 2, 29));
    }

    #[test]
    fn forward_month_slides_at_the_anchor() {
        let mut nav = WindowNavigator::anchored(day(2024, 6, 15));
        nav.forward_month();
        assert_eq!(nav.window().from, day(2024, 5, 15));
        assert_eq!(nav.window().to, day(2024, 6, 15));
    }

    #[test]
    fn reset_restores_the_default_window() {
        let mut nav = WindowNavigator::anchored(day(2024, 6, 15));
        nav.back_month();
        nav.set_to(day(2024, 5, 1));
        nav.reset();
        assert_eq!(
            nav.window(),
            DateWindow {
                from: day(2024, 6, 8),
                to: day(2024, 6, 15)
            }
        );
    }

    #[test]
    fn step_dispatches_to_the_matching_operation() {
        let mut nav = WindowNavigator::anchored(day(2024, 6, 15));
        nav.step(NavStep::BackWeek);
        assert_eq!(nav.window().from, day(2024, 6, 1));
        nav.step(NavStep::BackMonth);
        assert_eq!(nav.window().from, day(2024, 5, 1));
        nav.step(NavStep::Reset);
        assert_eq!(nav.window().from, day(2024, 6, 8));
    }

    #[test]
    fn filter_series_keeps_inclusive_bounds() {
        let series = vec![
            TimeSeriesPoint {
                date: day(2024, 6, 7),
                value: 1,
            },
            TimeSeriesPoint {
                date: day(2024, 6, 8),
                value: 2,
            },
            TimeSeriesPoint {
                date: day(2024, 6, 15),
                value: 3,
            },
            TimeSeriesPoint {
                date: day(2024, 6, 16),
                value: 4,
            },
        ];
        let window = DateWindow {
            from: day(2024, 6, 8),
            to: day(2024, 6, 15),
        };

        let kept = filter_series(&series, window);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].value, 2);
        assert_eq!(kept[1].value, 3);
    }
}
