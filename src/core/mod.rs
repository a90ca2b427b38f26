pub mod absences;
pub mod auth;
pub mod backup;
pub mod employees;
pub mod overtime;
pub mod projects;
pub mod reset;
pub mod stats;
pub mod time_entries;

pub use absences::AbsenceLedger;
pub use auth::{AdminCredentials, AuthGate};
pub use employees::EmployeeLedger;
pub use projects::ProjectLedger;
pub use time_entries::TimeEntryLedger;
