use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub clock_in: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<NaiveTime>, // None ⇔ still active
    pub break_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub total_hours: f64,
    pub is_manual: bool,
}

impl TimeEntry {
    pub fn is_active(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Worked hours for a same-day period, break deducted, never negative.
    /// A clock-out before the clock-in (overnight shift) yields 0.
    pub fn worked_hours(clock_in: NaiveTime, clock_out: NaiveTime, break_minutes: u32) -> f64 {
        let span = (clock_out - clock_in).num_seconds() as f64 / 3600.0;
        (span - f64::from(break_minutes) / 60.0).max(0.0)
    }

    /// Recompute `total_hours` from the current clock times.
    pub fn refresh_total(&mut self) {
        self.total_hours = match self.clock_out {
            Some(out) => Self::worked_hours(self.clock_in, out, self.break_minutes),
            None => 0.0,
        };
    }

    pub fn clock_in_str(&self) -> String {
        self.clock_in.format("%H:%M").to_string()
    }

    pub fn clock_out_str(&self) -> Option<String> {
        self.clock_out.map(|t| t.format("%H:%M").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn break_is_deducted() {
        assert_eq!(TimeEntry::worked_hours(t("08:00"), t("16:00"), 30), 7.5);
    }

    #[test]
    fn inverted_times_clamp_to_zero() {
        assert_eq!(TimeEntry::worked_hours(t("22:00"), t("06:00"), 0), 0.0);
    }

    #[test]
    fn break_longer_than_span_clamps_to_zero() {
        assert_eq!(TimeEntry::worked_hours(t("09:00"), t("09:20"), 30), 0.0);
    }
}
