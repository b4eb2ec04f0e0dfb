use std::path::PathBuf;

fn bin_path() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_pitchviz")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "pitchviz.exe"
            } else {
                "pitchviz"
            });
            p
        })
}

#[test]
fn cli_wagon_writes_svg() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let in_path = dir.join("zones.json");
    let out_path = dir.join("wheel.svg");
    let _ = std::fs::remove_file(&out_path);

    std::fs::write(&in_path, include_str!("data/zones.json")).unwrap();

    let status = std::process::Command::new(bin_path())
        .args(["wagon", "--in"])
        .arg(&in_path)
        .arg("--out")
        .arg(&out_path)
        .status()
        .unwrap();

    assert!(status.success());
    let doc = std::fs::read_to_string(&out_path).unwrap();
    assert!(doc.starts_with("<svg "));
    assert!(doc.contains("spoke:midwicket"));
}

#[test]
fn cli_pitchmap_writes_svg_for_each_metric() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let in_path = dir.join("cells.json");
    let cells = serde_json::json!({
        "cells": [
            { "length": "good", "line": "off_stump", "balls": 30, "wickets": 3, "economy": 4.5 },
            { "length": "short", "line": "leg_stump", "balls": 12, "wickets": 0, "economy": 7.2 }
        ]
    });
    std::fs::write(&in_path, serde_json::to_string_pretty(&cells).unwrap()).unwrap();

    for metric in ["balls", "wickets", "economy"] {
        let out_path = dir.join(format!("map_{metric}.svg"));
        let _ = std::fs::remove_file(&out_path);

        let status = std::process::Command::new(bin_path())
            .args(["pitchmap", "--in"])
            .arg(&in_path)
            .arg("--out")
            .arg(&out_path)
            .args(["--metric", metric])
            .status()
            .unwrap();

        assert!(status.success());
        let doc = std::fs::read_to_string(&out_path).unwrap();
        assert!(doc.contains("cell:good:off_stump"));
        assert!(doc.contains("corridor"));
    }
}

#[test]
fn cli_rejects_malformed_zone_angles() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let in_path = dir.join("bad_zones.json");
    let bad = serde_json::json!({
        "zones": [
            { "zone": "cover", "runs": 10, "fours": 1, "sixes": 0,
              "angle_start": 340.0, "angle_end": 300.0 }
        ]
    });
    std::fs::write(&in_path, serde_json::to_string(&bad).unwrap()).unwrap();

    let status = std::process::Command::new(bin_path())
        .args(["wagon", "--in"])
        .arg(&in_path)
        .arg("--out")
        .arg(dir.join("never.svg"))
        .status()
        .unwrap();

    assert!(!status.success());
}
