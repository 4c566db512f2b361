// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests for the table-facing subcommands, driven through the binary.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::{get_cmd_output, obstable};

const SCIENCE_LINE: &str =
    "SDSSJ000429.46-002142.8\tS20130719\tHK\tHK\tScience\tNone\t496-499\t90.0\t6\tfaint";
const DARK_LINE: &str =
    "SDSSJ000429.46-002142.8\tS20130719\tHK\tHK\tDark\tScience,Arc\t592-595\t90.0\t1\tfaint";

fn make_table_in_dir<T: AsRef<Path>>(filename: T, dir: &TempDir) -> PathBuf {
    let path = dir.path().join(filename);
    let mut f = File::create(&path).expect("couldn't make file");
    writeln!(
        f,
        "# Targetname\t\trootname\tband\tgrism\tdatatype\tapplyto\tfilerange\texptime\tLNRS\trdmode"
    )
    .unwrap();
    writeln!(f, "{SCIENCE_LINE}").unwrap();
    writeln!(f, "{DARK_LINE}").unwrap();
    path
}

#[test]
fn test_verify_summarises_a_table() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let path = make_table_in_dir("obstable.dat", &tmp_dir);

    let cmd = obstable().arg("verify").arg(&path).ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("2 record(s)"), "stdout: {stdout}");
    assert!(stdout.contains("1 distinct target(s)"), "stdout: {stdout}");
    assert!(stdout.contains("1 Dark"), "stdout: {stdout}");
    assert!(stdout.contains("1 Science"), "stdout: {stdout}");
}

#[test]
fn test_verify_continues_past_unreadable_tables() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let path = make_table_in_dir("obstable.dat", &tmp_dir);
    let missing = tmp_dir.path().join("not_there.dat");

    let cmd = obstable().arg("verify").arg(&missing).arg(&path).ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    // The second table is still summarised.
    assert!(stdout.contains("2 record(s)"), "stdout: {stdout}");
}

#[test]
fn test_verify_without_tables_fails() {
    let cmd = obstable().arg("verify").ok();
    assert!(cmd.is_err());
}

#[test]
fn test_print_writes_the_table_back_out() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let path = make_table_in_dir("obstable.dat", &tmp_dir);

    let cmd = obstable().arg("print").arg(&path).ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains(SCIENCE_LINE), "stdout: {stdout}");
    assert!(stdout.contains(DARK_LINE), "stdout: {stdout}");
}

#[test]
fn test_print_pretty_has_no_tabs_in_rows() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let path = make_table_in_dir("obstable.dat", &tmp_dir);

    let cmd = obstable().arg("print").arg(&path).arg("--pretty").ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    let row = stdout
        .lines()
        .find(|l| l.contains("496-499"))
        .expect("science row missing");
    assert!(!row.contains('\t'), "row: {row:?}");
    assert!(stdout.contains("# Targetname"), "stdout: {stdout}");
}

#[test]
fn test_select_equals_and_contains() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let path = make_table_in_dir("obstable.dat", &tmp_dir);

    let cmd = obstable()
        .arg("select")
        .arg(&path)
        .arg("datatype=Dark")
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains(DARK_LINE), "stdout: {stdout}");
    assert!(!stdout.contains(SCIENCE_LINE), "stdout: {stdout}");

    let cmd = obstable()
        .arg("select")
        .arg(&path)
        .arg("applyto~Arc")
        .arg("rdmode=faint")
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains(DARK_LINE), "stdout: {stdout}");
    assert!(!stdout.contains(SCIENCE_LINE), "stdout: {stdout}");
}

#[test]
fn test_select_unknown_field_fails() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let path = make_table_in_dir("obstable.dat", &tmp_dir);

    let cmd = obstable()
        .arg("select")
        .arg(&path)
        .arg("colour=blue")
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(
        stderr.contains("not an observation-table column"),
        "stderr: {stderr}"
    );
}
