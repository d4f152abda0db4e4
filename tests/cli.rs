use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use stitchpack::codec;
use stitchpack::model::{Pattern, Stitch, Thread};

fn rose() -> Pattern {
    let mut red = Thread::with_color("#ff0000");
    red.description = Some("Poppy".into());
    red.weight = Some(40.0);
    Pattern::new(
        vec![
            Stitch::new(0, 0, 1),
            Stitch::new(10, 0, 0),
            Stitch::new(10, 10, 5),
            Stitch::new(0, 10, 0),
            Stitch::new(0, 0, 4),
        ],
        vec![red, Thread::with_color("#0000ff")],
    )
}

fn stitchpack(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stitchpack").unwrap();
    cmd.env_remove("STITCHPACK_LOG")
        .env_remove("STITCHPACK_HOME")
        .arg("--config-dir")
        .arg(config_dir);
    cmd
}

#[test]
fn test_inspect_prints_summary() {
    let temp_dir = tempfile::tempdir().unwrap();
    let container = temp_dir.path().join("rose.stp");
    codec::write_file(&container, &rose()).unwrap();

    stitchpack(temp_dir.path())
        .arg("inspect")
        .arg(&container)
        .assert()
        .success()
        .stdout(predicate::str::contains("rose.stp"))
        .stdout(predicate::str::contains("color-change"))
        .stdout(predicate::str::contains("Poppy"));
}

#[test]
fn test_inspect_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    let container = temp_dir.path().join("rose.stp");
    codec::write_file(&container, &rose()).unwrap();

    let output = stitchpack(temp_dir.path())
        .arg("inspect")
        .arg(&container)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["stitch_count"], 5);
    assert_eq!(value["thread_count"], 2);
    assert_eq!(value["threads"][0]["description"], "Poppy");
    assert_eq!(value["bounds"]["max_x"], 10);
}

#[test]
fn test_inspect_missing_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    stitchpack(temp_dir.path())
        .arg("inspect")
        .arg(temp_dir.path().join("nope.stp"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_inspect_malformed_metadata_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let container = temp_dir.path().join("bad.stp");
    let mut bytes = 0u32.to_le_bytes().to_vec();
    bytes.extend_from_slice(&4u32.to_le_bytes());
    bytes.extend_from_slice(b"[1,]");
    fs::write(&container, bytes).unwrap();

    stitchpack(temp_dir.path())
        .arg("inspect")
        .arg(&container)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed metadata"));
}

#[test]
fn test_inspect_truncated_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let container = temp_dir.path().join("cut.stp");
    fs::write(&container, [3u8, 0, 0, 0, 1, 2]).unwrap();

    stitchpack(temp_dir.path())
        .arg("inspect")
        .arg(&container)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Truncated input"));
}

#[test]
fn test_config_set_and_show() {
    let temp_dir = tempfile::tempdir().unwrap();

    stitchpack(temp_dir.path())
        .args(["config", "format-version", "6t"])
        .assert()
        .success()
        .stdout(predicate::str::contains("format-version set to 6t"));

    stitchpack(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("format-version = 6t"))
        .stdout(predicate::str::contains("python = python3"));

    stitchpack(temp_dir.path())
        .args(["config", "hoop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: hoop"));
}

#[test]
fn test_config_rejects_bad_key_and_value() {
    let temp_dir = tempfile::tempdir().unwrap();

    stitchpack(temp_dir.path())
        .args(["config", "hoop", "big"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: hoop"));

    stitchpack(temp_dir.path())
        .args(["config", "format-version", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("format-version cannot be empty"));

    assert!(!temp_dir.path().join("config.json").exists());
}

#[test]
fn test_home_env_picks_config_dir() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("stitchpack").unwrap();
    cmd.env_remove("STITCHPACK_LOG")
        .env("STITCHPACK_HOME", temp_dir.path())
        .args(["config", "python", "/opt/python/bin/python3"])
        .assert()
        .success();

    let saved = fs::read_to_string(temp_dir.path().join("config.json")).unwrap();
    assert!(saved.contains("/opt/python/bin/python3"));
}

#[test]
fn test_missing_interpreter_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let design = temp_dir.path().join("rose.pes");
    fs::write(&design, b"not really a pes").unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{"python": "/definitely/not/a/python"}"#,
    )
    .unwrap();

    stitchpack(temp_dir.path())
        .arg("export")
        .arg(&design)
        .arg(temp_dir.path().join("rose.stp"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("python interpreter not found"));
}

#[cfg(unix)]
mod through_stub_interpreter {
    use super::*;

    // Runs as `sh stub.sh -c <script> <in> <out> [version]`; treats the
    // embroidery file as a container and copies it through.
    const COPY_STUB: &str = "cp \"$3\" \"$4\"\nif [ -n \"$5\" ]; then echo \"$5\" > \"$4.version\"; fi\n";

    fn configure_stub(config_dir: &Path) {
        let stub = config_dir.join("stub.sh");
        fs::write(&stub, COPY_STUB).unwrap();
        let config = serde_json::json!({
            "python": "sh",
            "python_args": [stub.to_string_lossy()],
        });
        fs::write(config_dir.join("config.json"), config.to_string()).unwrap();
    }

    #[test]
    fn test_export_then_import() {
        let temp_dir = tempfile::tempdir().unwrap();
        configure_stub(temp_dir.path());
        let design = temp_dir.path().join("rose.pes");
        let container = temp_dir.path().join("rose.stp");
        let copy = temp_dir.path().join("copy.pes");
        codec::write_file(&design, &rose()).unwrap();

        stitchpack(temp_dir.path())
            .arg("export")
            .arg(&design)
            .arg(&container)
            .assert()
            .success()
            .stdout(predicate::str::contains("5 stitches, 2 threads"));
        assert_eq!(codec::read_file(&container).unwrap(), rose());

        stitchpack(temp_dir.path())
            .arg("import")
            .arg(&container)
            .arg(&copy)
            .args(["--format-version", "5"])
            .assert()
            .success()
            .stdout(predicate::str::contains("format version 5"));

        assert_eq!(codec::read_file(&copy).unwrap(), rose());
        let version = fs::read_to_string(temp_dir.path().join("copy.pes.version")).unwrap();
        assert_eq!(version.trim(), "5");
    }

    #[test]
    fn test_import_rejects_corrupt_container_before_backend() {
        let temp_dir = tempfile::tempdir().unwrap();
        configure_stub(temp_dir.path());
        let container = temp_dir.path().join("cut.stp");
        let output = temp_dir.path().join("out.pes");
        let bytes = codec::encode_pattern(&rose()).unwrap();
        fs::write(&container, &bytes[..20]).unwrap();

        stitchpack(temp_dir.path())
            .arg("import")
            .arg(&container)
            .arg(&output)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Truncated input"));
        assert!(!output.exists());
    }
}
