use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const LIBX_SBOM: &str = r#"{
  "bomFormat": "CycloneDX",
  "specVersion": "1.5",
  "components": [
    {
      "name": "libx",
      "version": "1.0",
      "purl": "pkg:generic/libx@1.0",
      "licenses": [{"license": {"id": "GPL-3.0"}}]
    }
  ]
}"#;

pub struct TestProject {
    pub dir: TempDir,
    pub binary_path: String,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let binary_path = env!("CARGO_BIN_EXE_sbom-license-gate").to_string();

        Self { dir, binary_path }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(path, content).expect("Failed to write fixture");
    }

    pub fn with_denylist(self, content: &str) -> Self {
        self.write("policy/licenses-denylist.txt", content);
        self
    }

    pub fn with_exceptions(self, content: &str) -> Self {
        self.write(".compliance/exceptions.json", content);
        self
    }

    pub fn report_path(&self) -> PathBuf {
        self.path().join("forbidden-licenses.json")
    }

    pub fn run_gate(&self, args: &[&str]) -> Output {
        self.run_gate_with_env(args, &[])
    }

    pub fn run_gate_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut command = Command::new(&self.binary_path);
        command
            .args(args)
            .current_dir(self.path())
            .env_remove("DENYLIST_FILE")
            .env_remove("EXCEPTIONS_FILE")
            .env_remove("RUST_LOG");
        for (key, value) in env {
            command.env(key, value);
        }
        command.output().expect("Failed to run sbom-license-gate")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
