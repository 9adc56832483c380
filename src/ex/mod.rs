//! The ex/search subsystem: address parsing, literal search, `:s`, `:run`
//! and the handful of other `:` commands (`w`, `q`, `q!`, `wq`, `set`).
//!
//! Command *dispatch* lives here; the things this module cannot do itself
//! (write a file, fork a shell) are reported back as an [`ExAction`] for
//! the editor's main loop to carry out against its external collaborators.

pub mod address;
pub mod pattern;
pub mod run;
pub mod search;
pub mod substitute;

use crate::buffer::line_index::LineIndex;
use crate::edit_ops::EditOps;
use crate::ex::address::parse_range;
use crate::ex::pattern::parse_pattern;
use crate::ex::substitute::{parse_substitute, substitute};

/// What the editor's main loop should do after an ex/search command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExAction {
    /// Nothing beyond the status message below (if any).
    None,
    /// Report this text on the status line.
    Status(String),
    /// `:w` — save the current file.
    Save,
    /// `:wq` — save, then quit if the save left the buffer clean.
    SaveAndQuit,
    /// `:q` / `:q!` — quit. `force` skips the dirty check.
    Quit { force: bool },
    /// `:set nu|nonu|rnu|nornu`.
    SetOption { show_num: bool, show_num_rel: bool },
    /// `:run <script>` succeeded; insert `bytes` at `next_codepoint(cur)`.
    RunOutput(Vec<u8>),
}

/// A byte range carried over from VISUAL mode, used when a `:s` has no
/// explicit address range of its own.
#[derive(Debug, Clone, Copy)]
pub struct VisualRange {
    pub start: usize,
    pub end: usize,
}

/// Run a `:`-prefixed command (without the leading `:`) against `ops`.
/// `cur_row` is the 0-based row the cursor is on; `visual` carries the
/// active selection when the command line was entered from VISUAL mode.
pub fn execute(cmd: &str, ops: &mut EditOps, cur: &mut usize, cur_row: usize, visual: Option<VisualRange>) -> ExAction {
    let cmd = cmd.trim_end_matches(['\n', '\r']);
    if cmd.is_empty() {
        return ExAction::None;
    }

    match cmd {
        "w" => return ExAction::Save,
        "q" => return ExAction::Quit { force: false },
        "q!" => return ExAction::Quit { force: true },
        "wq" => return ExAction::SaveAndQuit,
        "set nu" => return ExAction::SetOption { show_num: true, show_num_rel: false },
        "set nonu" => return ExAction::SetOption { show_num: false, show_num_rel: false },
        "set rnu" => return ExAction::SetOption { show_num: true, show_num_rel: true },
        "set nornu" => return ExAction::SetOption { show_num: true, show_num_rel: false },
        _ => {}
    }

    if let Some(rest) = cmd.strip_prefix("run") {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return run_command(rest.trim_start(), ops, cur);
        }
    }

    if let Some(action) = try_substitute(cmd, ops, cur, cur_row, visual) {
        return action;
    }

    ExAction::Status(format!("unknown command: {cmd}"))
}

fn run_command(script: &str, ops: &mut EditOps, cur: &mut usize) -> ExAction {
    if script.is_empty() {
        return ExAction::Status("usage: :run <script>".to_string());
    }
    match run::run_capture(script) {
        Ok(bytes) => {
            let at = if *cur < ops.len() { crate::utf::next(ops.bytes(), *cur) } else { *cur };
            let n = bytes.len();
            *cur = ops.insert(at, &bytes, *cur);
            ExAction::Status(format!("run: {n} bytes"))
        }
        Err(e) => ExAction::Status(e.message),
    }
}

/// Parse an optional `[range]` prefix, then an `s...` substitute body.
/// Returns `None` if `cmd` isn't a substitute command at all (so the
/// caller can fall through to "unknown command").
fn try_substitute(
    cmd: &str,
    ops: &mut EditOps,
    cur: &mut usize,
    cur_row: usize,
    visual: Option<VisualRange>,
) -> Option<ExAction> {
    let bytes_input = cmd.as_bytes();
    let (buf_bytes, lines) = ops.buffer_and_lines();
    let (row0, row1, rest) = parse_range(bytes_input, buf_bytes, lines, cur_row);
    let explicit_range = rest.len() != bytes_input.len();

    let sub = parse_substitute(rest.trim_ascii_start_bytes())?;

    let (start_row, end_row) = if explicit_range {
        (row0, row1)
    } else if let Some(v) = visual {
        let sr = ops.lines.row_of_offset(ops.bytes(), v.start) + 1;
        let er = ops.lines.row_of_offset(ops.bytes(), v.end.saturating_sub(1).max(v.start)) + 1;
        (sr, er)
    } else {
        (cur_row + 1, cur_row + 1)
    };

    let (made, first_hit) = substitute(ops, start_row, end_row, &sub);
    if made == 0 {
        return Some(ExAction::Status("no match".to_string()));
    }
    if let Some(off) = first_hit {
        *cur = off.min(ops.len());
    }
    let noun = if made == 1 { "substitution" } else { "substitutions" };
    Some(ExAction::Status(format!("{made} {noun}")))
}

trait TrimAsciiStart {
    fn trim_ascii_start_bytes(&self) -> &[u8];
}

impl TrimAsciiStart for [u8] {
    fn trim_ascii_start_bytes(&self) -> &[u8] {
        let mut i = 0;
        while i < self.len() && (self[i] == b' ' || self[i] == b'\t') {
            i += 1;
        }
        &self[i..]
    }
}

/// Forward/backward repeat or fresh literal search (`/pat`, `n`, `N`).
/// `new_pattern` replaces `search` when set (a fresh `/pat` command).
pub fn do_search(
    search: &mut Vec<u8>,
    new_pattern: Option<&[u8]>,
    forward: bool,
    bytes: &[u8],
    cur: usize,
) -> Result<usize, &'static str> {
    if let Some(p) = new_pattern {
        *search = p.to_vec();
    }
    if search.is_empty() {
        return Err("no previous search");
    }
    let pat = parse_pattern(search);
    let anchored = pat.anchor_start || pat.anchor_end;

    if forward {
        let start = if cur < bytes.len() { crate::utf::next(bytes, cur) } else { cur };
        let hit = if anchored {
            search::find_anchored_next(bytes, start, &pat)
        } else {
            search::find_next(bytes, start, &pat.text)
        };
        hit.ok_or("pattern not found")
    } else {
        let start = if cur > 0 { crate::utf::prev(bytes, cur) } else { cur };
        let hit = if anchored {
            search::find_anchored_prev(bytes, start + 1, &pat)
        } else {
            search::find_prev(bytes, start + 1, &pat.text)
        };
        hit.ok_or("pattern not found")
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
