//! Shared helpers for CLI-level tests
//!
//! Each test gets an isolated home and project directory plus a stub engine
//! executable that records every invocation to a log file, so tests can
//! assert on the exact commands pydock constructs without Docker installed.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestBed {
    _temp: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
    pub stub: PathBuf,
    pub log: PathBuf,
}

impl TestBed {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("home");
        let project = temp.path().join("project");
        fs::create_dir_all(&home).unwrap();
        fs::create_dir_all(&project).unwrap();

        let stub = temp.path().join("docker-stub");
        let log = temp.path().join("engine.log");

        let bed = Self {
            _temp: temp,
            home,
            project,
            stub,
            log,
        };
        bed.write_stub("");
        bed
    }

    /// Write the stub engine script. `extra` is spliced in before the final
    /// `exit 0`, letting individual tests simulate failures.
    pub fn write_stub(&self, extra: &str) {
        let script = format!(
            "#!/bin/sh\n\
            printf '%s\\n' \"$*\" >> {log}\n\
            case \"$*\" in\n\
              *\"pip freeze\"*) printf 'numpy==1.26.0\\npandas==2.2.0\\n';;\n\
            esac\n\
            {extra}\n\
            exit 0\n",
            log = self.log.display()
        );
        fs::write(&self.stub, script).unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt as _;
            fs::set_permissions(&self.stub, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    /// Seed a store root with a configuration pointing at the stub engine
    pub fn seed_store(&self, root: &Path) {
        fs::create_dir_all(root).unwrap();
        fs::write(
            root.join("pydock.yaml"),
            format!(
                "docker:\n  binary: {}\nenvironment:\n  username: testuser\n",
                self.stub.display()
            ),
        )
        .unwrap();
    }

    /// Seed the global (per-user) store
    pub fn seed_global_store(&self) -> PathBuf {
        let root = self.home.join(".pydock");
        self.seed_store(&root);
        root
    }

    /// Seed the local (per-project) store
    pub fn seed_local_store(&self) -> PathBuf {
        let root = self.project.join(".pydock");
        self.seed_store(&root);
        root
    }

    /// A pydock invocation isolated to this test bed
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("pydock").unwrap();
        cmd.current_dir(&self.project)
            .env("HOME", &self.home)
            .env("USER", "testuser")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Engine invocations recorded so far, one per line
    pub fn engine_log(&self) -> Vec<String> {
        if !self.log.exists() {
            return Vec::new();
        }
        fs::read_to_string(&self.log)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }
}
