//! Integration tests for configuration layering.
//!
//! Tests the full priority chain: hardcoded defaults < XDG config < project config < CLI args

#![allow(clippy::unwrap_used)] // Test code uses unwrap for brevity
#![allow(deprecated)] // cargo_bin deprecation warning

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use image::ImageFormat;
use marker_qa_test_support::{encode, SyntheticImageBuilder};
use predicates::prelude::*;

/// Isolated workspace with its own XDG config home and project directory.
struct Sandbox {
    _root: tempfile::TempDir,
    xdg: PathBuf,
    project: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let xdg = root.path().join("xdg");
        let project = root.path().join("project");
        fs::create_dir_all(xdg.join("marker-qa")).unwrap();
        fs::create_dir_all(&project).unwrap();
        Self {
            _root: root,
            xdg,
            project,
        }
    }

    fn write_xdg_config(&self, content: &str) {
        fs::write(self.xdg.join("marker-qa").join("config.toml"), content).unwrap();
    }

    fn write_project_config(&self, content: &str) {
        fs::write(self.project.join(".marker-qa.toml"), content).unwrap();
    }

    /// Writes a 200x200 striped marker: only the resolution check fails by default.
    fn small_marker(&self) -> PathBuf {
        let path = self.project.join("small.png");
        let marker = SyntheticImageBuilder::alternating_rows(200, 200);
        fs::write(&path, encode(&marker, ImageFormat::Png)).unwrap();
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("marker-qa").unwrap();
        cmd.env("XDG_CONFIG_HOME", &self.xdg)
            .current_dir(&self.project);
        cmd
    }
}

fn stdout_starts_with_array(cmd: &mut Command) -> bool {
    let output = cmd.output().unwrap();
    output.stdout.starts_with(b"[")
}

#[test]
fn test_defaults_flag_small_marker() {
    let sandbox = Sandbox::new();
    let marker = sandbox.small_marker();

    sandbox
        .cmd()
        .arg(&marker)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Image resolution is too low"));
}

#[test]
fn test_xdg_config_applies_threshold() {
    let sandbox = Sandbox::new();
    sandbox.write_xdg_config(
        r"
[validation]
min_dimension = 128
",
    );
    let marker = sandbox.small_marker();

    sandbox.cmd().arg(&marker).assert().code(0);
}

#[test]
fn test_project_config_overrides_xdg() {
    let sandbox = Sandbox::new();
    sandbox.write_xdg_config(
        r"
[validation]
min_dimension = 128
",
    );
    sandbox.write_project_config(
        r"
[validation]
min_dimension = 256
",
    );
    let marker = sandbox.small_marker();

    sandbox.cmd().arg(&marker).assert().code(1);
}

#[test]
fn test_cli_overrides_project_config() {
    let sandbox = Sandbox::new();
    sandbox.write_project_config(
        r"
[validation]
min_dimension = 512
",
    );
    let marker = sandbox.small_marker();

    sandbox
        .cmd()
        .arg("--min-dimension")
        .arg("100")
        .arg(&marker)
        .assert()
        .code(0);
}

#[test]
fn test_project_config_found_in_parent_directory() {
    let sandbox = Sandbox::new();
    sandbox.write_project_config(
        r"
[output]
format = 'json'
",
    );
    let marker = sandbox.small_marker();
    let nested = sandbox.project.join("nested").join("deeper");
    fs::create_dir_all(&nested).unwrap();

    let mut cmd = sandbox.cmd();
    cmd.current_dir(&nested).arg(&marker);
    assert!(stdout_starts_with_array(&mut cmd));
}

#[test]
fn test_project_config_applies_format() {
    let sandbox = Sandbox::new();
    sandbox.write_project_config(
        r"
[output]
format = 'json'
",
    );
    let marker = sandbox.small_marker();

    let mut cmd = sandbox.cmd();
    cmd.arg(&marker);
    assert!(stdout_starts_with_array(&mut cmd));
}

#[test]
fn test_cli_format_overrides_config() {
    let sandbox = Sandbox::new();
    sandbox.write_project_config(
        r"
[output]
format = 'json'
",
    );
    let marker = sandbox.small_marker();

    sandbox
        .cmd()
        .arg("--format")
        .arg("jsonl")
        .arg(&marker)
        .assert()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_config_min_quality_fails_run() {
    let sandbox = Sandbox::new();
    sandbox.write_project_config(
        r"
[validation]
min_dimension = 128
min_quality = 100.0
",
    );
    // Soft gray steps: clean, but scores well below 100.
    let path = sandbox.project.join("soft.png");
    let img = image::GrayImage::from_fn(256, 256, |_, y| {
        image::Luma([if y % 2 == 0 { 100u8 } else { 120u8 }])
    });
    img.save(&path).unwrap();

    sandbox.cmd().arg(&path).assert().code(1);
}

#[test]
fn test_config_metrics_enabled() {
    let sandbox = Sandbox::new();
    sandbox.write_project_config(
        r"
[output]
metrics = true
",
    );
    let marker = sandbox.small_marker();

    sandbox
        .cmd()
        .arg(&marker)
        .assert()
        .stdout(predicate::str::contains("\"edge_density\""));
}

#[test]
fn test_config_aspect_band_widened() {
    let sandbox = Sandbox::new();
    sandbox.write_project_config(
        r"
[validation]
max_aspect_ratio = 4.0
",
    );
    let path = sandbox.project.join("wide.png");
    let marker = SyntheticImageBuilder::alternating_rows(768, 256);
    fs::write(&path, encode(&marker, ImageFormat::Png)).unwrap();

    sandbox.cmd().arg(&path).assert().code(0);
}

#[test]
fn test_invalid_config_warns_and_uses_defaults() {
    let sandbox = Sandbox::new();
    sandbox.write_project_config("[validation\nmin_dimension = 1");
    let marker = sandbox.small_marker();

    sandbox
        .cmd()
        .arg(&marker)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_out_of_range_config_value_warns() {
    let sandbox = Sandbox::new();
    sandbox.write_project_config(
        r"
[validation]
min_edge_density = 3.0
",
    );
    let marker = sandbox.small_marker();

    sandbox
        .cmd()
        .arg(&marker)
        .assert()
        .stderr(predicate::str::contains("warning: validation.min_edge_density"));
}


#[test]
fn test_nan_aspect_ratio_rejected() {
    let sandbox = Sandbox::new();
    sandbox.write_project_config(
        r"
[validation]
max_aspect_ratio = nan
",
    );
    let path = sandbox.project.join("wide.png");
    let marker = SyntheticImageBuilder::alternating_rows(1000, 300);
    fs::write(&path, encode(&marker, ImageFormat::Png)).unwrap();

    sandbox
        .cmd()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unusual aspect ratio detected"))
        .stderr(predicate::str::contains("warning: validation.max_aspect_ratio"));
}

#[test]
fn test_invalid_value_discards_whole_config() {
    let sandbox = Sandbox::new();
    sandbox.write_project_config(
        r"
[validation]
min_dimension = 128
min_edge_density = 3.0
",
    );
    let marker = sandbox.small_marker();

    // min_dimension is dropped along with the bad value.
    sandbox.cmd().arg(&marker).assert().code(1);
}
