use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/eurail.txt")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("railplan");
    cmd.env("RUST_LOG", "error")
        .arg("--timetable")
        .arg(fixture_path());
    cmd
}

#[test]
fn export_renders_every_connection() {
    let temp_dir = tempdir().expect("create temp dir");
    let out = temp_dir.path().join("network.gv");

    cli()
        .arg("export")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Network graph written to"));

    let doc = std::fs::read_to_string(&out).expect("graph file exists");
    assert!(doc.starts_with("digraph eurail {"));
    assert!(doc.contains("\"Gibraltar\" -> \"Madrid\" [label=\"6h 0m\"]"));
    assert!(doc.contains("\"Berlin\" -> \"Warsaw\" [label=\"5h 50m\"]"));
    // Without a route nothing is highlighted.
    assert!(!doc.contains("octagon"));
    assert!(!doc.contains("style=bold"));
}

#[test]
fn export_with_route_bolds_only_the_path() {
    let temp_dir = tempdir().expect("create temp dir");
    let out = temp_dir.path().join("route.gv");

    cli()
        .arg("export")
        .arg("--out")
        .arg(&out)
        .arg("--from")
        .arg("Madrid")
        .arg("--to")
        .arg("Paris")
        .assert()
        .success();

    let doc = std::fs::read_to_string(&out).expect("graph file exists");
    assert!(doc.contains("\"Madrid\" [shape=octagon, style=filled, color=\"darkgreen\"]"));
    assert!(doc.contains("\"Paris\" [shape=octagon, style=filled, color=\"skyblue\"]"));
    assert!(doc.contains("\"Barcelona\" [style=bold]"));
    assert!(doc.contains("\"Lyon\" [style=bold]"));
    assert!(doc.contains("\"Madrid\" -> \"Barcelona\" [label=\"3h 10m\", style=bold]"));
    // The slower direct connection is rendered but not bold.
    assert!(doc.contains("\"Madrid\" -> \"Paris\" [label=\"9h 30m\"]"));
}

#[test]
fn export_rejects_unknown_endpoints() {
    let temp_dir = tempdir().expect("create temp dir");
    let out = temp_dir.path().join("route.gv");

    cli()
        .arg("export")
        .arg("--out")
        .arg(&out)
        .arg("--from")
        .arg("Atlantis")
        .arg("--to")
        .arg("Paris")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown station 'Atlantis'"));
    assert!(!out.exists());
}
