//! View granularity, visible-day computation and navigation state.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Granularity of the rendered calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Month,
    #[default]
    Week,
    Day,
}

impl ViewMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First day of the week containing `date`.
fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (date.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(date)
}

fn consecutive_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    start.iter_days().take(count).collect()
}

fn month_grid(anchor: NaiveDate, week_start: Weekday) -> Option<Vec<NaiveDate>> {
    let first = anchor.with_day(1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    let grid_start = start_of_week(first, week_start);
    let grid_end = start_of_week(last, week_start).checked_add_days(Days::new(6))?;
    Some(
        grid_start
            .iter_days()
            .take_while(|day| *day <= grid_end)
            .collect(),
    )
}

/// ## Summary
/// Lists the calendar days rendered for `mode` around `anchor`.
///
/// Month view covers whole weeks from the week containing the 1st through
/// the week containing the last day. Week view is always seven days starting
/// on `week_start`. Day view is just the anchor.
#[must_use]
pub fn visible_days(anchor: NaiveDate, mode: ViewMode, week_start: Weekday) -> Vec<NaiveDate> {
    match mode {
        ViewMode::Day => vec![anchor],
        ViewMode::Week => consecutive_days(start_of_week(anchor, week_start), 7),
        ViewMode::Month => month_grid(anchor, week_start).unwrap_or_else(|| {
            tracing::debug!(%anchor, "Month grid out of range, falling back to anchor");
            vec![anchor]
        }),
    }
}

/// Navigation state of one calendar view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    anchor: NaiveDate,
    mode: ViewMode,
    selected: NaiveDate,
    now: NaiveDateTime,
    #[serde(skip)]
    week_start: Weekday,
}

impl CalendarView {
    /// Creates a view anchored and selected on today's date.
    #[must_use]
    pub fn new(now: NaiveDateTime, mode: ViewMode, week_start: Weekday) -> Self {
        Self {
            anchor: now.date(),
            mode,
            selected: now.date(),
            now,
            week_start,
        }
    }

    #[must_use]
    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    #[must_use]
    pub const fn selected(&self) -> NaiveDate {
        self.selected
    }

    #[must_use]
    pub const fn now(&self) -> NaiveDateTime {
        self.now
    }

    #[must_use]
    pub const fn week_start(&self) -> Weekday {
        self.week_start
    }

    #[must_use]
    pub fn visible_days(&self) -> Vec<NaiveDate> {
        visible_days(self.anchor, self.mode, self.week_start)
    }

    /// Moves back one month, week or day depending on the mode.
    pub fn previous(&mut self) {
        let moved = match self.mode {
            ViewMode::Month => self.anchor.checked_sub_months(Months::new(1)),
            ViewMode::Week => self.anchor.checked_sub_days(Days::new(7)),
            ViewMode::Day => self.anchor.pred_opt(),
        };
        if let Some(anchor) = moved {
            self.anchor = anchor;
        }
    }

    /// Moves forward one month, week or day depending on the mode.
    pub fn next(&mut self) {
        let moved = match self.mode {
            ViewMode::Month => self.anchor.checked_add_months(Months::new(1)),
            ViewMode::Week => self.anchor.checked_add_days(Days::new(7)),
            ViewMode::Day => self.anchor.succ_opt(),
        };
        if let Some(anchor) = moved {
            self.anchor = anchor;
        }
    }

    /// Jumps anchor and selection back to the current date.
    pub fn today(&mut self) {
        self.anchor = self.now.date();
        self.selected = self.now.date();
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
        self.anchor = date;
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Updates the clock used for the current-time line.
    pub fn refresh_now(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    /// ## Summary
    /// Header text for the current window, e.g. `October 2026`,
    /// `18 Oct – 24 Oct 2026` or `Monday, 19 October 2026`.
    #[must_use]
    pub fn title(&self) -> String {
        match self.mode {
            ViewMode::Month => self.anchor.format("%B %Y").to_string(),
            ViewMode::Day => self.anchor.format("%A, %-d %B %Y").to_string(),
            ViewMode::Week => {
                let days = self.visible_days();
                match (days.first(), days.last()) {
                    (Some(first), Some(last)) => format!(
                        "{} – {}",
                        first.format("%-d %b"),
                        last.format("%-d %b %Y")
                    ),
                    _ => self.anchor.format("%-d %b %Y").to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).expect("valid time")
    }

    #[test]
    fn test_day_view_is_anchor_only() {
        let anchor = date(2026, 10, 19);
        assert_eq!(visible_days(anchor, ViewMode::Day, Weekday::Sun), vec![anchor]);
    }

    #[test]
    fn test_week_view_always_seven_days_from_week_start() {
        // Every anchor across two months, for both common week starts.
        for week_start in [Weekday::Sun, Weekday::Mon] {
            for anchor in date(2026, 9, 1).iter_days().take(61) {
                let days = visible_days(anchor, ViewMode::Week, week_start);
                assert_eq!(days.len(), 7);
                assert_eq!(days[0].weekday(), week_start);
                assert!(days.contains(&anchor));
                assert!(days.windows(2).all(|w| w[0].succ_opt() == Some(w[1])));
            }
        }
    }

    #[test]
    fn test_week_view_for_monday_anchor() {
        // 2026-10-19 is a Monday.
        let days = visible_days(date(2026, 10, 19), ViewMode::Week, Weekday::Sun);
        assert_eq!(days.first(), Some(&date(2026, 10, 18)));
        assert_eq!(days.last(), Some(&date(2026, 10, 24)));
    }

    #[test]
    fn test_month_view_covers_whole_weeks() {
        // October 2026: Thu 1st .. Sat 31st.
        let days = visible_days(date(2026, 10, 19), ViewMode::Month, Weekday::Sun);
        assert_eq!(days.first(), Some(&date(2026, 9, 27)));
        assert_eq!(days.last(), Some(&date(2026, 10, 31)));
        assert_eq!(days.len(), 35);
        assert_eq!(days.len() % 7, 0);
    }

    #[test]
    fn test_month_view_includes_trailing_days() {
        // February 2026: Sun 1st .. Sat 28th fits four exact weeks.
        let days = visible_days(date(2026, 2, 10), ViewMode::Month, Weekday::Sun);
        assert_eq!(days.len(), 28);

        // With Monday weeks it spills into both neighbours.
        let days = visible_days(date(2026, 2, 10), ViewMode::Month, Weekday::Mon);
        assert_eq!(days.first(), Some(&date(2026, 1, 26)));
        assert_eq!(days.last(), Some(&date(2026, 3, 1)));
        assert_eq!(days.len(), 35);
    }

    #[test]
    fn test_navigation_by_mode() {
        let mut view = CalendarView::new(at(2026, 1, 31, 10, 0), ViewMode::Month, Weekday::Sun);
        view.next();
        assert_eq!(view.anchor(), date(2026, 2, 28));

        view.set_mode(ViewMode::Week);
        view.previous();
        assert_eq!(view.anchor(), date(2026, 2, 21));

        view.set_mode(ViewMode::Day);
        view.next();
        assert_eq!(view.anchor(), date(2026, 2, 22));

        view.today();
        assert_eq!(view.anchor(), date(2026, 1, 31));
        assert_eq!(view.selected(), date(2026, 1, 31));
    }

    #[test]
    fn test_select_moves_anchor() {
        let mut view = CalendarView::new(at(2026, 10, 19, 8, 0), ViewMode::Week, Weekday::Sun);
        view.select(date(2026, 11, 3));
        assert_eq!(view.selected(), date(2026, 11, 3));
        assert_eq!(view.anchor(), date(2026, 11, 3));
        assert_eq!(view.visible_days()[0], date(2026, 11, 1));
    }

    #[test]
    fn test_refresh_now_keeps_anchor() {
        let mut view = CalendarView::new(at(2026, 10, 19, 8, 0), ViewMode::Day, Weekday::Sun);
        view.next();
        view.refresh_now(at(2026, 10, 19, 8, 1));
        assert_eq!(view.now(), at(2026, 10, 19, 8, 1));
        assert_eq!(view.anchor(), date(2026, 10, 20));
    }

    #[test]
    fn test_titles() {
        let mut view = CalendarView::new(at(2026, 10, 19, 8, 0), ViewMode::Month, Weekday::Sun);
        assert_eq!(view.title(), "October 2026");
        view.set_mode(ViewMode::Week);
        assert_eq!(view.title(), "18 Oct – 24 Oct 2026");
        view.set_mode(ViewMode::Day);
        assert_eq!(view.title(), "Monday, 19 October 2026");
    }
}
