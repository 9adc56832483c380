//! `EditorState`: the aggregate that owns the terminal, the editing engine
//! and the modal dispatcher, and runs the read-key / mutate / render loop.

use std::path::PathBuf;

use crate::edit_ops::EditOps;
use crate::error::{codes, EditorError, ErrorKind, Result as EditorResult};
use crate::ex::{self, ExAction, VisualRange};
use crate::file_io::{self, Loaded};
use crate::key::Key;
use crate::mode::Mode;
use crate::modal::{motion, Action, ModalEngine};
use crate::render::{self, RenderContext, ViewState};
use crate::status::StatusLine;
use crate::term::{Size, Terminal};

pub struct EditorState<T: Terminal> {
    terminal: T,
    ops: EditOps,
    modal: ModalEngine,
    mode: Mode,
    prev_mode: Mode,
    cur: usize,
    anchor: usize,
    cmd: String,
    cmd_pre: char,
    search: Vec<u8>,
    filename: Option<PathBuf>,
    dirty: bool,
    show_num: bool,
    show_num_rel: bool,
    status: StatusLine,
    view: ViewState,
    size: Size,
    should_quit: bool,
}

impl<T: Terminal> EditorState<T> {
    /// Initialize the terminal, load `filename` if given, and build the
    /// initial editor state. `filename` not existing on disk is not an
    /// error: the buffer just starts empty, per the "new file" contract.
    pub fn new(mut terminal: T, filename: Option<PathBuf>) -> EditorResult<Self> {
        terminal
            .init()
            .map_err(|e| EditorError::critical(ErrorKind::Io, codes::TERMINAL_INIT, e))?;
        let size = terminal
            .window_size()
            .map_err(|e| EditorError::critical(ErrorKind::Io, codes::TERMINAL_INIT, e))?;

        let bytes = match &filename {
            Some(path) => match file_io::load(path)? {
                Loaded::Existing(b) => b,
                Loaded::New => Vec::new(),
            },
            None => Vec::new(),
        };

        let mut modal = ModalEngine::new();
        modal.set_page_rows(textrows_from(size));

        Ok(EditorState {
            terminal,
            ops: EditOps::from_bytes(bytes),
            modal,
            mode: Mode::Normal,
            prev_mode: Mode::Normal,
            cur: 0,
            anchor: 0,
            cmd: String::new(),
            cmd_pre: ':',
            search: Vec::new(),
            filename,
            dirty: false,
            show_num: false,
            show_num_rel: false,
            status: StatusLine::new(),
            view: ViewState::new(),
            size,
            should_quit: false,
        })
    }

    /// Initial render, then loop: block for a key, mutate, redraw. Returns
    /// once a `:q`/`:q!`/`:wq`/Ctrl-Q has set `should_quit`.
    pub fn run(&mut self) -> EditorResult<()> {
        self.render()?;
        while !self.should_quit {
            let key = self
                .terminal
                .read_key()
                .map_err(|e| EditorError::critical(ErrorKind::Io, codes::TERMINAL_INIT, e))?;
            self.handle_key(key);
            if !self.should_quit {
                self.render()?;
            }
        }
        render::clear_screen(&mut self.terminal).ok();
        Ok(())
    }

    /// Feed a single decoded key through the dispatcher without rendering.
    /// Exposed for integration tests that replay a literal key sequence
    /// and assert on the resulting buffer/cursor/mode.
    pub fn step(&mut self, key: Key) {
        self.handle_key(key);
    }

    pub fn buffer_bytes(&self) -> &[u8] {
        self.ops.bytes()
    }

    pub fn cursor(&self) -> usize {
        self.cur
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.visible()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn handle_key(&mut self, key: Key) {
        // Ctrl-Q bypasses every mode and every dirty check, ahead of
        // dispatch, matching `original_source/mode.c`'s `processkey`.
        if key == Key::Ctrl(b'q') {
            self.should_quit = true;
            return;
        }
        if let Key::Resize(rows, cols) = key {
            self.size = Size { rows, cols };
            self.modal.set_page_rows(textrows_from(self.size));
            return;
        }
        if key == Key::Null {
            // The terminal's "nothing typed this poll" sentinel. Its one
            // editor-visible effect is cancelling an `f`/`t` left pending
            // across an idle tick, mirroring ESC.
            if self.mode == Mode::Normal && self.modal.cancel_pending_find() {
                self.status.set("find cancelled".to_string());
            }
            return;
        }

        let before = self.ops.revision();
        match self.mode {
            Mode::Normal => {
                let action = self.modal.handle_normal(&key, &mut self.ops, &mut self.cur, &mut self.anchor);
                self.apply_action(action);
            }
            Mode::Visual => {
                let action = self.modal.handle_visual(&key, &mut self.ops, &mut self.cur, &mut self.anchor);
                self.apply_action(action);
            }
            Mode::Insert => self.handle_insert_key(&key),
            Mode::Cmd => self.handle_cmd_key(&key),
        }
        if self.ops.revision() != before {
            self.dirty = true;
        }
        self.cur = self.cur.min(self.ops.len());
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::EnterInsert => self.mode = Mode::Insert,
            Action::EnterVisual => self.mode = Mode::Visual,
            Action::ExitVisual => self.mode = Mode::Normal,
            Action::EnterCmd(prefix) => {
                self.prev_mode = self.mode;
                self.mode = Mode::Cmd;
                self.cmd_pre = prefix;
                self.cmd.clear();
            }
            Action::RepeatSearch { forward } => self.repeat_search(forward),
            Action::Status(msg) => self.status.set(msg),
        }
    }

    fn handle_insert_key(&mut self, key: &Key) {
        match key {
            Key::Escape => {
                self.mode = Mode::Normal;
                let line_start = crate::buffer::line_index::LineIndex::line_start(self.ops.bytes(), self.cur);
                if self.cur > line_start {
                    self.cur = crate::utf::prev(self.ops.bytes(), self.cur);
                }
            }
            Key::Enter => self.cur = self.ops.insert_newline(self.cur),
            Key::Backspace => self.cur = self.ops.backspace(self.cur),
            Key::Delete => {
                if self.cur < self.ops.len() {
                    let next = crate::utf::next(self.ops.bytes(), self.cur);
                    self.ops.delete_range(self.cur, next - self.cur, self.cur);
                }
            }
            Key::Up => self.cur = motion::motion_k(self.ops.bytes(), &mut self.ops.lines, self.cur),
            Key::Down => self.cur = motion::motion_j(self.ops.bytes(), &mut self.ops.lines, self.cur),
            Key::Left => self.cur = motion::motion_h(self.ops.bytes(), self.cur),
            Key::Right => self.cur = motion::motion_l(self.ops.bytes(), self.cur),
            _ => {
                if let Some(bytes) = key.insertable_bytes() {
                    self.cur = self.ops.insert_run(self.cur, bytes);
                }
            }
        }
    }

    fn handle_cmd_key(&mut self, key: &Key) {
        match key {
            Key::Escape => {
                self.mode = self.prev_mode;
                self.cmd.clear();
            }
            Key::Enter => self.run_cmd_line(),
            Key::Backspace => {
                self.cmd.pop();
            }
            _ => {
                if let Some(bytes) = key.insertable_bytes() {
                    if let Ok(s) = std::str::from_utf8(bytes) {
                        self.cmd.push_str(s);
                    }
                }
            }
        }
    }

    /// ENTER in CMD mode: `:` runs an ex command, `/` runs a fresh search.
    fn run_cmd_line(&mut self) {
        let line = std::mem::take(&mut self.cmd);
        let back_to = self.prev_mode;
        self.mode = Mode::Normal;

        match self.cmd_pre {
            '/' => {
                match ex::do_search(&mut self.search, Some(line.as_bytes()), true, self.ops.bytes(), self.cur) {
                    Ok(hit) => self.cur = hit,
                    Err(msg) => self.status.set(msg),
                }
            }
            _ => {
                let visual = if back_to == Mode::Visual {
                    Some(VisualRange {
                        start: self.cur.min(self.anchor),
                        end: crate::utf::next(self.ops.bytes(), self.cur.max(self.anchor)),
                    })
                } else {
                    None
                };
                let cur_row = self.ops.lines.row_of_offset(self.ops.bytes(), self.cur);
                let action = ex::execute(&line, &mut self.ops, &mut self.cur, cur_row, visual);
                self.apply_ex_action(action);
                return;
            }
        }
        if self.mode == Mode::Normal {
            self.mode = back_to;
        }
    }

    fn apply_ex_action(&mut self, action: ExAction) {
        match action {
            ExAction::None => {}
            ExAction::Status(msg) => self.status.set(msg),
            ExAction::Save => self.save(),
            ExAction::SaveAndQuit => {
                self.save();
                if !self.dirty {
                    self.should_quit = true;
                }
            }
            ExAction::Quit { force } => {
                if force || !self.dirty {
                    self.should_quit = true;
                } else {
                    self.status.set("E37: no write since last change (use :q! to override)".to_string());
                }
            }
            ExAction::SetOption { show_num, show_num_rel } => {
                self.show_num = show_num;
                self.show_num_rel = show_num_rel;
            }
            ExAction::RunOutput(_) => {
                // `:run` already inserted its output and reported a byte
                // count as a Status action; this variant is for callers
                // that want the raw bytes instead (none yet).
            }
        }
    }

    fn repeat_search(&mut self, forward: bool) {
        match ex::do_search(&mut self.search, None, forward, self.ops.bytes(), self.cur) {
            Ok(hit) => self.cur = hit,
            Err(msg) => self.status.set(msg),
        }
    }

    fn save(&mut self) {
        let Some(path) = self.filename.clone() else {
            self.status.set("E32: no file name".to_string());
            return;
        };
        match file_io::save_atomic(&path, self.ops.bytes()) {
            Ok(()) => {
                self.dirty = false;
                self.status.set(format!("\"{}\" written", path.display()));
            }
            Err(e) => self.status.set(e.message),
        }
    }

    fn render(&mut self) -> EditorResult<()> {
        let ctx = RenderContext {
            mode: self.mode,
            visual: (self.mode == Mode::Visual)
                .then(|| (self.cur.min(self.anchor), crate::utf::next(self.ops.bytes(), self.cur.max(self.anchor)))),
            cmd_pre: self.cmd_pre,
            cmd: &self.cmd,
            filename: self.filename.as_deref().and_then(|p| p.to_str()),
            dirty: self.dirty,
            show_num: self.show_num,
            show_num_rel: self.show_num_rel,
        };
        render::render(&mut self.terminal, &mut self.ops, self.cur, &ctx, &self.status, &mut self.view, self.size)
            .map_err(|e| EditorError::critical(ErrorKind::Io, codes::TERMINAL_INIT, e))
    }
}

impl<T: Terminal> Drop for EditorState<T> {
    fn drop(&mut self) {
        self.terminal.deinit();
    }
}

/// Text rows available for the buffer view: total rows minus the status
/// bar and command/message line.
fn textrows_from(size: Size) -> usize {
    (size.rows as usize).saturating_sub(2).max(1)
}
