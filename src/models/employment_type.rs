use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Minor, // marginal employment
}

/// Hour targets and vacation allotment implied by an employment tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmploymentDefaults {
    pub weekly_hours: f64,
    pub daily_hours: f64,
    pub vacation_days: f64,
}

impl EmploymentType {
    pub fn defaults(&self) -> EmploymentDefaults {
        match self {
            EmploymentType::FullTime => EmploymentDefaults {
                weekly_hours: 38.5,
                daily_hours: 7.7,
                vacation_days: 30.0,
            },
            EmploymentType::PartTime => EmploymentDefaults {
                weekly_hours: 20.0,
                daily_hours: 4.0,
                vacation_days: 15.0,
            },
            EmploymentType::Minor => EmploymentDefaults {
                weekly_hours: 10.0,
                daily_hours: 2.0,
                vacation_days: 5.0,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Minor => "Minor",
        }
    }

    /// Helper: convert input code from CLI (any case, a few aliases)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "full-time" | "fulltime" | "full" | "vollzeit" => Some(EmploymentType::FullTime),
            "part-time" | "parttime" | "part" | "teilzeit" => Some(EmploymentType::PartTime),
            "minor" | "marginal" | "geringfuegig" | "geringfügig" => Some(EmploymentType::Minor),
            _ => None,
        }
    }
}
