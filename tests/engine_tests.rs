//! Engine invocation tests
//!
//! These drive the real binary against a stub engine executable and assert
//! on the exact invocations pydock constructs, the order they run in, and
//! how exit codes propagate back.

#![cfg(unix)]

mod common;

use common::TestBed;
use predicates::prelude::*;
use std::fs;

#[test]
fn create_builds_the_templated_image() {
    let bed = TestBed::new();
    let root = bed.seed_global_store();

    bed.cmd()
        .args(["create", "ds", "3.10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'ds' created"));

    // Template files on disk
    let env_dir = root.join("envs").join("ds");
    let dockerfile = fs::read_to_string(env_dir.join("dockerfile")).unwrap();
    assert!(dockerfile.contains("FROM python:3.10"));
    assert!(dockerfile.contains("USER testuser"));
    assert_eq!(fs::read_to_string(env_dir.join("requirements.txt")).unwrap(), "");

    // Exactly one engine invocation: the build
    let log = bed.engine_log();
    assert_eq!(log.len(), 1);
    assert!(log[0].starts_with("build -t pydock-ds:latest -f"));
    assert!(log[0].contains("envs/ds/dockerfile"));

    // And the registry lists it with its version
    bed.cmd()
        .arg("envs")
        .assert()
        .success()
        .stdout(predicate::str::contains("ds"))
        .stdout(predicate::str::contains("3.10"));
}

#[test]
fn duplicate_create_fails_without_engine_or_file_changes() {
    let bed = TestBed::new();
    let root = bed.seed_global_store();

    bed.cmd().args(["create", "ds", "3.10"]).assert().success();

    let dockerfile_path = root.join("envs").join("ds").join("dockerfile");
    let before = fs::read_to_string(&dockerfile_path).unwrap();
    let builds_before = bed.engine_log().len();

    bed.cmd()
        .args(["create", "ds", "3.12"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("'ds' already exists"));

    assert_eq!(fs::read_to_string(&dockerfile_path).unwrap(), before);
    assert_eq!(bed.engine_log().len(), builds_before);
}

#[test]
fn build_failure_propagates_exit_code_and_keeps_templates() {
    let bed = TestBed::new();
    let root = bed.seed_global_store();
    bed.write_stub("case \"$1\" in build) exit 125;; esac");

    bed.cmd()
        .args(["create", "ds", "3.10"])
        .assert()
        .failure()
        .code(125);

    // The failed build leaves the template files for inspection
    let env_dir = root.join("envs").join("ds");
    assert!(env_dir.join("dockerfile").exists());
    assert!(env_dir.join("requirements.txt").exists());
}

#[test]
fn build_picks_up_manually_edited_dockerfile() {
    let bed = TestBed::new();
    let root = bed.seed_global_store();
    bed.cmd().args(["create", "ds", "3.10"]).assert().success();

    let dockerfile_path = root.join("envs").join("ds").join("dockerfile");
    let edited = format!(
        "{}\nRUN pip install wheel\n",
        fs::read_to_string(&dockerfile_path).unwrap()
    );
    fs::write(&dockerfile_path, edited).unwrap();

    bed.cmd().args(["build", "ds"]).assert().success();

    let log = bed.engine_log();
    assert_eq!(log.len(), 2);
    // Same invocation shape both times; the engine reads the edited file
    assert!(log[1].starts_with("build -t pydock-ds:latest -f"));
}

#[test]
fn install_commits_retags_and_refreshes_requirements() {
    let bed = TestBed::new();
    let root = bed.seed_global_store();
    bed.cmd().args(["create", "ds", "3.10"]).assert().success();

    bed.cmd()
        .args(["install", "ds", "numpy"])
        .assert()
        .success();

    let log = bed.engine_log();
    // create's build, then the install sequence
    assert_eq!(
        log[1..],
        [
            "rm --force pydock-staging-ds",
            "run --name pydock-staging-ds pydock-ds:latest pip install numpy",
            "commit pydock-staging-ds pydock-ds:staging",
            "tag pydock-ds:staging pydock-ds:latest",
            "rmi pydock-ds:staging",
            "rm pydock-staging-ds",
            "run --rm pydock-ds:latest pip freeze",
        ]
    );

    // requirements.txt now mirrors pip freeze inside the image
    let requirements =
        fs::read_to_string(root.join("envs").join("ds").join("requirements.txt")).unwrap();
    assert_eq!(requirements, "numpy==1.26.0\npandas==2.2.0\n");
}

#[test]
fn repeated_install_keeps_requirements_idempotent() {
    let bed = TestBed::new();
    let root = bed.seed_global_store();
    bed.cmd().args(["create", "ds", "3.10"]).assert().success();

    bed.cmd().args(["install", "ds", "numpy"]).assert().success();
    bed.cmd().args(["install", "ds", "numpy"]).assert().success();

    let requirements =
        fs::read_to_string(root.join("envs").join("ds").join("requirements.txt")).unwrap();
    assert_eq!(requirements, "numpy==1.26.0\npandas==2.2.0\n");
    assert_eq!(requirements.matches("numpy==").count(), 1);
}

#[test]
fn failed_install_leaves_requirements_untouched() {
    let bed = TestBed::new();
    let root = bed.seed_global_store();
    bed.cmd().args(["create", "ds", "3.10"]).assert().success();
    bed.write_stub("case \"$*\" in *\"pip install\"*) exit 1;; esac");

    bed.cmd()
        .args(["install", "ds", "numpy"])
        .assert()
        .failure()
        .code(1);

    let requirements =
        fs::read_to_string(root.join("envs").join("ds").join("requirements.txt")).unwrap();
    assert_eq!(requirements, "");
}

#[test]
fn shell_mounts_cwd_and_runs_bash_as_default_user() {
    let bed = TestBed::new();
    bed.seed_global_store();
    bed.cmd().args(["create", "ds", "3.10"]).assert().success();

    bed.cmd().args(["shell", "ds"]).assert().success();

    let log = bed.engine_log();
    let shell_line = log.last().unwrap();
    // stdin is piped under the test harness, so no TTY flag
    assert!(shell_line.starts_with("run --rm -i --user testuser --hostname ds -v "));
    assert!(shell_line.contains(":/home/testuser/project -w /home/testuser/project"));
    assert!(shell_line.ends_with("pydock-ds:latest bash"));
}

#[test]
fn shell_propagates_container_exit_code() {
    let bed = TestBed::new();
    bed.seed_global_store();
    bed.cmd().args(["create", "ds", "3.10"]).assert().success();
    bed.write_stub("case \"$*\" in *bash*) exit 42;; esac");

    bed.cmd().args(["shell", "ds"]).assert().failure().code(42);
}

#[test]
fn delete_removes_templates_but_never_calls_the_engine() {
    let bed = TestBed::new();
    let root = bed.seed_global_store();
    bed.cmd().args(["create", "ds", "3.10"]).assert().success();
    let invocations_after_create = bed.engine_log().len();

    bed.cmd()
        .args(["delete", "ds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("left for manual cleanup"));

    assert!(!root.join("envs").join("ds").exists());
    assert_eq!(bed.engine_log().len(), invocations_after_create);

    bed.cmd()
        .arg("envs")
        .assert()
        .success()
        .stdout(predicate::str::contains("ds").not());
}

#[test]
fn missing_engine_binary_is_a_configuration_error() {
    let bed = TestBed::new();
    let root = bed.seed_global_store();
    fs::write(
        root.join("pydock.yaml"),
        "docker:\n  binary: definitely-not-a-real-engine\nenvironment:\n  username: testuser\n",
    )
    .unwrap();

    bed.cmd()
        .args(["build", "ds"])
        .assert()
        .failure()
        .code(2); // unknown environment is reported before the engine check

    bed.cmd()
        .args(["create", "ds", "3.10"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("not found in PATH"));
}
