//! `:run <script>` — execute a shell command and capture its stdout.

use std::process::{Command, Stdio};

use crate::error::{codes, EditorError, ErrorKind, Result};

/// Run `script` through a shell, with stdin from `/dev/null` and stderr
/// discarded, returning its captured stdout. Tries `/bin/bash -c` first,
/// falling back to `/bin/sh -c` if bash isn't installed.
pub fn run_capture(script: &str) -> Result<Vec<u8>> {
    let spawn = |shell: &str| {
        Command::new(shell)
            .arg("-c")
            .arg(script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
    };

    let output = match spawn("/bin/bash") {
        Ok(o) => o,
        Err(_) => spawn("/bin/sh")
            .map_err(|e| EditorError::new(ErrorKind::Execution, codes::RUN_FAILED, format!("spawn failed: {e}")))?,
    };

    if output.stdout.is_empty() {
        return Err(EditorError::new(
            ErrorKind::Execution,
            codes::RUN_NO_OUTPUT,
            "command produced no output",
        ));
    }
    Ok(output.stdout)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
