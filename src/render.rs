//! The Renderer external collaborator: turns buffer + cursor + visual
//! range + mode + status into terminal escape bytes. Status rendering
//! never feeds back into editor behavior — this module only reads.

use crate::buffer::line_index::{LineIndex, TABSTOP};
use crate::edit_ops::EditOps;
use crate::mode::Mode;
use crate::status::StatusLine;
use crate::term::{Size, Terminal};

/// Scroll offsets kept by the renderer so the cursor stays on screen.
/// Intentionally separate from [`crate::edit_ops::EditOps`] — the spec
/// treats these as view state, not engine state.
#[derive(Debug, Default, Clone, Copy)]
pub struct ViewState {
    pub row_off: usize,
    pub col_off: usize,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    fn scroll(&mut self, cy: usize, cx: usize, textrows: usize, textcols: usize) {
        if cy < self.row_off {
            self.row_off = cy;
        }
        if cy >= self.row_off + textrows {
            self.row_off = cy + 1 - textrows;
        }
        if cx < self.col_off {
            self.col_off = cx;
        }
        if cx >= self.col_off + textcols {
            self.col_off = cx + 1 - textcols;
        }
    }
}

/// Everything the renderer needs about the surrounding editor that isn't
/// already on [`EditOps`].
pub struct RenderContext<'a> {
    pub mode: Mode,
    pub visual: Option<(usize, usize)>,
    pub cmd_pre: char,
    pub cmd: &'a str,
    pub filename: Option<&'a str>,
    pub dirty: bool,
    pub show_num: bool,
    pub show_num_rel: bool,
}

fn draw_rows(out: &mut Vec<u8>, ops: &mut EditOps, cur: usize, ctx: &RenderContext, view: &ViewState, textrows: usize, cols: usize, w: usize) {
    let (bytes, lines) = ops.buffer_and_lines();
    let line_count = lines.count(bytes);
    let cur_row = lines.row_of_offset(bytes, cur) + 1;
    let mut off = lines.offset_of_row(bytes, view.row_off as isize);

    for y in 0..textrows {
        let lineno = view.row_off + y + 1;
        let textcols = (cols.saturating_sub(w)).max(1);
        if lineno > line_count {
            out.push(b'~');
            if w > 0 {
                out.extend(std::iter::repeat_n(b' ', w - 1));
            }
        } else {
            let ls = off;
            let le = LineIndex::line_end(bytes, ls);
            if w > 0 {
                let shown = if ctx.show_num_rel && lineno != cur_row {
                    lineno.abs_diff(cur_row)
                } else {
                    lineno
                };
                let digits = w - 1;
                out.extend(format!("{:>digits$} ", shown, digits = digits).into_bytes());
            }
            let mut col = 0usize;
            let mut inv = false;
            let mut i = ls;
            while i < le && col < view.col_off + textcols {
                let want_inv = ctx.visual.is_some_and(|(a, b)| i >= a && i < b);
                if want_inv != inv {
                    out.extend_from_slice(if want_inv { b"\x1b[7m" } else { b"\x1b[m" });
                    inv = want_inv;
                }
                if bytes[i] == b'\t' {
                    let n = TABSTOP - (col % TABSTOP);
                    for _ in 0..n {
                        if col >= view.col_off && col < view.col_off + textcols {
                            out.push(b' ');
                        }
                        col += 1;
                        if col >= view.col_off + textcols {
                            break;
                        }
                    }
                    i += 1;
                } else {
                    let j = crate::utf::next(bytes, i);
                    if col >= view.col_off && col < view.col_off + textcols {
                        out.extend_from_slice(&bytes[i..j]);
                    }
                    col += 1;
                    i = j;
                }
            }
            if inv {
                out.extend_from_slice(b"\x1b[m");
            }
            off = if le < bytes.len() && bytes[le] == b'\n' { le + 1 } else { le };
        }
        out.extend_from_slice(b"\x1b[K\r\n");
    }
}

fn draw_status(out: &mut Vec<u8>, ops: &mut EditOps, cur: usize, ctx: &RenderContext, cols: usize) {
    let (bytes, lines) = ops.buffer_and_lines();
    let row = lines.row_of_offset(bytes, cur) + 1;
    let col = LineIndex::col_of_offset(bytes, cur) + 1;
    let line_count = lines.count(bytes);

    let left = format!(
        " {}{} - {} lines [{}] ",
        ctx.filename.unwrap_or("[No Name]"),
        if ctx.dirty { "*" } else { "" },
        line_count,
        ctx.mode.label()
    );
    let right = format!(" {row},{col} ");

    out.extend_from_slice(b"\x1b[7m");
    let llen = left.len().min(cols);
    out.extend_from_slice(&left.as_bytes()[..llen]);
    let right_start = cols.saturating_sub(right.len()).max(llen);
    out.extend(std::iter::repeat_n(b' ', right_start - llen));
    let rlen = right.len().min(cols - right_start);
    out.extend_from_slice(&right.as_bytes()[..rlen]);
    out.extend_from_slice(b"\x1b[m\r\n");
}

fn draw_message(out: &mut Vec<u8>, ctx: &RenderContext, status: &StatusLine, cols: usize) {
    if ctx.mode == Mode::Cmd {
        out.push(ctx.cmd_pre as u8);
        out.extend_from_slice(ctx.cmd.as_bytes());
        out.extend_from_slice(b"\x1b[K");
        return;
    }
    if let Some(msg) = status.visible() {
        let n = msg.len().min(cols);
        out.extend_from_slice(&msg.as_bytes()[..n]);
    }
    out.extend_from_slice(b"\x1b[K");
}

/// Redraw the whole screen for one keypress. Returns the gutter width used,
/// so the caller (the editor's main loop) doesn't have to recompute it.
pub fn render<T: Terminal>(
    term: &mut T,
    ops: &mut EditOps,
    cur: usize,
    ctx: &RenderContext,
    status: &StatusLine,
    view: &mut ViewState,
    size: Size,
) -> Result<(), String> {
    let rows = size.rows as usize;
    let cols = size.cols as usize;
    let textrows = rows.saturating_sub(2).max(1);

    let (bytes, lines) = ops.buffer_and_lines();
    let w = lines.gutter_width(bytes, ctx.show_num);
    let textcols = cols.saturating_sub(w).max(1);
    let cy = lines.row_of_offset(bytes, cur);
    let cx = LineIndex::col_of_offset(bytes, cur);
    view.scroll(cy, cx, textrows, textcols);

    let mut out = Vec::with_capacity(4096);
    if ctx.mode == Mode::Insert {
        out.extend_from_slice(b"\x1b[6 q");
    } else {
        out.extend_from_slice(b"\x1b[2 q");
    }
    out.extend_from_slice(b"\x1b[?25l\x1b[H");

    draw_rows(&mut out, ops, cur, ctx, view, textrows, cols, w);
    draw_status(&mut out, ops, cur, ctx, cols);
    draw_message(&mut out, ctx, status, cols);

    let mut cy2 = cy.saturating_sub(view.row_off) + 1;
    let mut cx2 = cx.saturating_sub(view.col_off) + 1 + w;
    cy2 = cy2.clamp(1, textrows);
    cx2 = cx2.clamp(1, cols.max(1));
    out.extend_from_slice(format!("\x1b[{cy2};{cx2}H").as_bytes());
    out.extend_from_slice(b"\x1b[?25h");

    term.write_bytes(&out)
}

/// `ESC [2J ESC [H` — clears the screen on exit.
pub fn clear_screen<T: Terminal>(term: &mut T) -> Result<(), String> {
    term.write_bytes(b"\x1b[2J\x1b[H")
}
