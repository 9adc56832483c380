//! `wedit [path]` — CLI entry point.

use std::path::PathBuf;

use wedit::editor::EditorState;
use wedit::signal;
use wedit::term::crossterm_backend::CrosstermTerminal;

fn main() {
    // One positional path argument; anything past it is ignored.
    let path = std::env::args().nth(1).map(PathBuf::from);

    let terminal = CrosstermTerminal::new();
    let mut editor = match EditorState::new(terminal, path) {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("wedit: {e}");
            std::process::exit(1);
        }
    };

    signal::install();

    if let Err(e) = editor.run() {
        eprintln!("wedit: {e}");
        std::process::exit(1);
    }
}
