// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod table;

use std::process::Output;
use std::str::from_utf8;

use assert_cmd::{output::OutputError, Command};

fn obstable() -> Command {
    Command::cargo_bin("obstable").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

#[test]
fn test_expand_filerange() {
    let cmd = obstable().args(["expand", "218-221,223-225"]).ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);

    for expected in [218, 219, 220, 221, 223, 224, 225] {
        assert!(
            stdout.lines().any(|l| l == expected.to_string()),
            "{expected} not in stdout: {stdout}"
        );
    }
    // 222 sits in the gap.
    assert!(stdout.lines().all(|l| l != "222"));
}

#[test]
fn test_expand_bad_filerange_fails() {
    let cmd = obstable().args(["expand", "1-2-3"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(
        stderr.contains("more than two range boundaries"),
        "unexpected stderr: {stderr}"
    );
}
