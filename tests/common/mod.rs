#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn studylog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("studylog").unwrap();
    cmd.env_remove("STUDYLOG_ROOT");
    cmd.env_remove("STUDYLOG_LOG");
    cmd
}

/// Initialize a log in `root` and return the path of its default slot file
pub fn init_log(root: &Path) -> PathBuf {
    studylog_cmd().arg("init").arg(root).assert().success();
    slot_path(root)
}

pub fn slot_path(root: &Path) -> PathBuf {
    root.join(".studylog/slots/daily-study-entries-v2.json")
}

pub fn read_slot(root: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(slot_path(root)).unwrap();
    serde_json::from_str(&raw).unwrap()
}
