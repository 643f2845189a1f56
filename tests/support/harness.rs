use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness runs the parcel-sort binary in an isolated working directory.
/// HOME points at the same temporary directory so that no user-level config
/// leaks into the run.
pub struct TestHarness {
    pub dir: TempDir,
    pub binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            dir: TempDir::new().expect("Failed to create temp dir"),
            binary: PathBuf::from(env!("CARGO_BIN_EXE_parcel-sort")),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `.parcel-sort.yaml` in the working directory.
    #[allow(dead_code)]
    pub fn write_project_config(&self, content: &str) -> PathBuf {
        let path = self.path().join(".parcel-sort.yaml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Write `~/.config/parcel-sort/config.yaml` under the fake HOME.
    #[allow(dead_code)]
    pub fn write_global_config(&self, content: &str) -> PathBuf {
        let dir = self.path().join(".config/parcel-sort");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.yaml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary)
            .args(args)
            .current_dir(self.path())
            .env("HOME", self.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run parcel-sort")
    }
}

/// Stdout of a finished run as a String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr of a finished run as a String.
#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
