pub mod absence;
pub mod employee;
pub mod employment_type;
pub mod project;
pub mod time_entry;
