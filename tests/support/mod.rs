use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A tick invocation target with its own throwaway data directory.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create tempdir"),
        }
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn theme_file(&self) -> PathBuf {
        self.dir.path().join("theme.json")
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.dir.path().join("config.toml"), contents).expect("write config");
    }

    /// A tick command pointed at this environment's data directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tick").expect("binary");
        cmd.arg("--data-dir").arg(self.dir.path());
        cmd
    }

    /// Add a task and return its assigned id.
    pub fn add_task(&self, title: &str, at: &str) -> String {
        let output = self
            .cmd()
            .args(["add", title, "--at", at, "--json"])
            .output()
            .expect("run tick add");
        assert!(
            output.status.success(),
            "add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let envelope: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("json envelope");
        envelope["data"]["task"]["id"]
            .as_str()
            .expect("task id")
            .to_string()
    }

    /// Run `tick list` with extra arguments and return the listed titles in order.
    pub fn list_titles(&self, extra_args: &[&str]) -> Vec<String> {
        let envelope = self.list_json(extra_args);
        envelope["data"]["tasks"]
            .as_array()
            .expect("tasks array")
            .iter()
            .map(|task| task["title"].as_str().expect("title").to_string())
            .collect()
    }

    /// Run `tick list --json` with extra arguments and return the envelope.
    pub fn list_json(&self, extra_args: &[&str]) -> serde_json::Value {
        let mut cmd = self.cmd();
        cmd.arg("list").args(extra_args).arg("--json");
        let output = cmd.output().expect("run tick list");
        assert!(
            output.status.success(),
            "list failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("json envelope")
    }
}
