use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hrtime
#[derive(Parser)]
#[command(
    name = "hrtime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track working hours, overtime, vacation and leave requests",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the login session file
    #[arg(global = true, long = "session")]
    pub session: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Log in as an employee or as the administrator
    Login { username: String, password: String },

    /// Forget the current login
    Logout,

    /// Show who is logged in, with balances
    Whoami,

    /// Manage employees (administrator only)
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manual time entries
    Entry {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Live clock-in / clock-out
    Clock {
        #[command(subcommand)]
        action: ClockAction,
    },

    /// Vacation, sick leave, time off in lieu and care leave
    Absence {
        #[command(subcommand)]
        action: AbsenceAction,
    },

    /// Administrator dashboard figures
    Stats,

    /// Export all data (administrator only)
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute output path")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete ALL stored data (requires the administrator password)
    Reset {
        #[arg(long)]
        password: String,

        #[arg(long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Create an employee (full-time, part-time or minor)
    Add {
        name: String,
        password: String,

        #[arg(long = "type", default_value = "full-time")]
        employment: String,
    },

    /// List employees with their balances
    List,

    /// Show one employee (id or name)
    Show { employee: String },

    /// Change an employee's data
    Update {
        employee: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long = "type", help = "New tier; resets hour targets and allotment")]
        employment: Option<String>,

        #[arg(long = "weekly-hours")]
        weekly_hours: Option<f64>,

        #[arg(long = "daily-hours")]
        daily_hours: Option<f64>,

        #[arg(long = "vacation-days")]
        vacation_days: Option<f64>,

        #[arg(long = "remaining-days")]
        remaining_days: Option<f64>,
    },

    /// Delete an employee (entries and absences are kept)
    Del {
        employee: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Recompute accrued overtime from time entries
    Recalc { employee: String },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a project (administrator only)
    Add {
        name: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// List projects with booked hours
    List {
        #[arg(long, help = "Include inactive projects")]
        all: bool,
    },

    /// Rename or re-describe a project (administrator only)
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Activate / deactivate a project (administrator only)
    Toggle { id: String },

    /// Delete a project; entries keep the dangling reference (administrator only)
    Del {
        id: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EntryAction {
    /// Add a manual entry
    Add {
        /// Date of the work period (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        start: String,

        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        end: String,

        #[arg(long = "break", default_value_t = 0, help = "Break in minutes")]
        break_minutes: u32,

        #[arg(long)]
        project: Option<String>,

        #[arg(long, help = "Employee id or name (administrator only)")]
        employee: Option<String>,
    },

    /// List entries
    List {
        #[arg(long, help = "Employee id or name (administrator only)")]
        employee: Option<String>,

        #[arg(long, help = "Only entries of a month (YYYY-MM)")]
        month: Option<String>,
    },

    /// Change an existing entry
    Edit {
        id: String,

        #[arg(long)]
        date: Option<String>,

        #[arg(long = "in")]
        start: Option<String>,

        #[arg(long = "out")]
        end: Option<String>,

        #[arg(long = "break")]
        break_minutes: Option<u32>,

        #[arg(long)]
        project: Option<String>,
    },

    /// Delete an entry
    Del { id: String },
}

#[derive(Subcommand)]
pub enum ClockAction {
    /// Start working now
    In {
        #[arg(long)]
        project: Option<String>,

        #[arg(long, help = "Employee id or name (administrator only)")]
        employee: Option<String>,
    },

    /// Stop working now
    Out {
        #[arg(long = "break", default_value_t = 0, help = "Break in minutes")]
        break_minutes: u32,

        #[arg(long, help = "Employee id or name (administrator only)")]
        employee: Option<String>,
    },

    /// Show the running entry, if any
    Status {
        #[arg(long, help = "Employee id or name (administrator only)")]
        employee: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum AbsenceAction {
    /// Request an absence: vacation, sick, toil (time off in lieu) or care
    Request {
        kind: String,

        /// First day (YYYY-MM-DD)
        start: String,

        /// Last day (YYYY-MM-DD)
        end: String,

        #[arg(long)]
        days: f64,

        #[arg(long, help = "Hours to take off (toil only)")]
        hours: Option<f64>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long, help = "Employee id or name (administrator only)")]
        employee: Option<String>,
    },

    /// List absences
    List {
        #[arg(long, help = "Employee id or name (administrator only)")]
        employee: Option<String>,

        #[arg(long, help = "Only requests waiting for approval")]
        pending: bool,
    },

    /// Approve a request (administrator only)
    Approve { id: String },

    /// Delete an absence; approved balances are given back
    Del { id: String },
}
