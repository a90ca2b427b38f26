use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Absence type. Only time-off-in-lieu carries an hour count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AbsenceKind {
    Vacation,
    SickLeave,
    TimeOffInLieu { hours: f64 },
    CareLeave,
}

impl AbsenceKind {
    pub fn label(&self) -> &'static str {
        match self {
            AbsenceKind::Vacation => "Vacation",
            AbsenceKind::SickLeave => "Sick leave",
            AbsenceKind::TimeOffInLieu { .. } => "Time off in lieu",
            AbsenceKind::CareLeave => "Care leave",
        }
    }

    /// Sick leave needs no approval.
    pub fn auto_approved(&self) -> bool {
        matches!(self, AbsenceKind::SickLeave)
    }

    /// Build a kind from a CLI code; `hours` is required for time-off-in-lieu.
    pub fn from_code(code: &str, hours: Option<f64>) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "vacation" | "urlaub" => Some(AbsenceKind::Vacation),
            "sick" | "sick-leave" | "krankenstand" => Some(AbsenceKind::SickLeave),
            "toil" | "time-off-in-lieu" | "zeitausgleich" => {
                hours.map(|hours| AbsenceKind::TimeOffInLieu { hours })
            }
            "care" | "care-leave" | "pflegeurlaub" => Some(AbsenceKind::CareLeave),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Absence {
    pub id: String,
    pub employee_id: String,
    #[serde(flatten)]
    pub kind: AbsenceKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: f64,
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Absence {
    pub fn status_label(&self) -> &'static str {
        if self.approved { "Approved" } else { "Pending" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_only_stored_for_time_off_in_lieu() {
        let a = Absence {
            id: "a".into(),
            employee_id: "e".into(),
            kind: AbsenceKind::TimeOffInLieu { hours: 4.0 },
            start_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            days: 1.0,
            approved: false,
            notes: None,
        };
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["type"], "TimeOffInLieu");
        assert_eq!(json["hours"], 4.0);

        let sick = Absence { kind: AbsenceKind::SickLeave, ..a };
        let json = serde_json::to_value(&sick).unwrap();
        assert_eq!(json["type"], "SickLeave");
        assert!(json.get("hours").is_none());
    }

    #[test]
    fn toil_code_requires_hours() {
        assert_eq!(AbsenceKind::from_code("toil", None), None);
        assert_eq!(
            AbsenceKind::from_code("Zeitausgleich", Some(2.0)),
            Some(AbsenceKind::TimeOffInLieu { hours: 2.0 })
        );
        assert_eq!(AbsenceKind::from_code("sick", None), Some(AbsenceKind::SickLeave));
    }
}
