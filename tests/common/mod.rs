//! Common test utilities for cb integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch area holding a bundle location and a fake home directory
#[allow(dead_code)]
pub struct TestBundle {
    /// Temporary directory, removed on drop
    pub temp: TempDir,
    /// Where the bundle lives (not created until `cb init`)
    pub bundle: PathBuf,
    /// Stand-in for the user's home, holding the files to bundle
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestBundle {
    /// Create the scratch area without initializing the bundle
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = std::fs::canonicalize(temp.path()).expect("Failed to canonicalize temp dir");
        let home = root.join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        Self {
            temp,
            bundle: root.join("bundle"),
            home,
        }
    }

    /// Create the scratch area and run `cb init`
    pub fn initialized() -> Self {
        let test = Self::new();
        test.cmd().arg("init").assert().success();
        test
    }

    /// `cb` pointed at this bundle, with a clean environment
    pub fn cmd(&self) -> Command {
        let mut cmd = cb_cmd();
        cmd.env("CBUNDLE_DIR", &self.bundle)
            .env("HOME", &self.home)
            .env_remove("CBUNDLE_LOG")
            .current_dir(&self.home);
        cmd
    }

    /// Write a file under the fake home and return its path
    pub fn write_home_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.home.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Bundle a home file through the CLI
    pub fn add(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.write_home_file(path, content);
        self.cmd().arg("add").arg(&file_path).assert().success();
        file_path
    }

    /// Absolute path of a member inside the bundle
    pub fn member(&self, name: &str) -> PathBuf {
        self.bundle.join(name)
    }

    pub fn read(path: &Path) -> String {
        std::fs::read_to_string(path).expect("Failed to read file")
    }
}

/// The real cb binary
#[allow(deprecated)]
pub fn cb_cmd() -> Command {
    Command::cargo_bin("cb").expect("cb binary should be built")
}
