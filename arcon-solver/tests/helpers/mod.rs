//! Helpers to run the `arcon-solver` binary from integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::path::PathBuf;
use std::process::Command;

/// The captured result of a single run of the binary.
#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) success: bool,
    pub(crate) stdout: String,
}

pub(crate) fn run_solver<'a>(args: impl IntoIterator<Item = &'a str>) -> Run {
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_arcon-solver"));

    let output = Command::new(solver)
        .args(args)
        .output()
        .expect("failed to run the solver binary");

    Run {
        success: output.status.success(),
        stdout: String::from_utf8(output.stdout).expect("the solver only prints UTF-8"),
    }
}

/// A temporary file in the target directory, removed when dropped.
#[derive(Debug)]
pub(crate) struct TempFile(pub(crate) PathBuf);

impl TempFile {
    pub(crate) fn with_contents(name: &str, contents: &str) -> TempFile {
        let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
        std::fs::write(&path, contents).expect("failed to write the temporary file");
        TempFile(path)
    }

    pub(crate) fn path(&self) -> &str {
        self.0.to_str().expect("temporary paths are UTF-8")
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}
