#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hr() -> Command {
    cargo_bin_cmd!("hrtime")
}

/// Isolated sandbox: own HOME, SQLite database and session file.
pub struct TestEnv {
    pub dir: PathBuf,
    pub db: String,
    pub session: String,
}

impl TestEnv {
    /// Command with the sandbox's database and session already applied
    pub fn cmd(&self) -> Command {
        let mut cmd = hr();
        cmd.env("HOME", &self.dir)
            .env("APPDATA", &self.dir)
            .env_remove("RUST_LOG")
            .args(["--db", &self.db, "--session", &self.session]);
        cmd
    }

    pub fn out_file(&self, name: &str) -> String {
        self.dir.join(name).to_string_lossy().to_string()
    }

    pub fn login(&self, user: &str, password: &str) {
        self.cmd()
            .args(["login", user, password])
            .assert()
            .success();
    }

    /// Run a command that must succeed and return its stdout
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let out = self.cmd().args(args).assert().success();
        String::from_utf8_lossy(&out.get_output().stdout).to_string()
    }
}

/// Create a fresh sandbox under the system temp dir (previous runs are wiped)
pub fn setup_env(name: &str) -> TestEnv {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("hrtime_{name}"));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create sandbox");

    TestEnv {
        db: dir.join("hrtime.sqlite").to_string_lossy().to_string(),
        session: dir.join("session.json").to_string_lossy().to_string(),
        dir,
    }
}

/// Sandbox with an initialized database and the administrator logged in
pub fn init_as_admin(name: &str) -> TestEnv {
    let env = setup_env(name);
    env.cmd().args(["--test", "init"]).assert().success();
    env.login("test", "test");
    env
}

/// Administrator creates an employee, then logs in as that employee
pub fn init_as_employee(name: &str, employee: &str, password: &str, kind: &str) -> TestEnv {
    let env = init_as_admin(name);
    env.cmd()
        .args(["employee", "add", employee, password, "--type", kind])
        .assert()
        .success();
    env.login(employee, password);
    env
}

/// Pull the value printed after `Id: ` out of command output
pub fn printed_id(stdout: &str) -> String {
    stdout
        .split("Id: ")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .expect("id in output")
        .to_string()
}
