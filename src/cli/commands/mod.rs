pub mod absence;
pub mod auth;
pub mod backup;
pub mod clock;
pub mod config;
pub mod employee;
pub mod entry;
pub mod export;
pub mod init;
pub mod project;
pub mod reset;
pub mod stats;
