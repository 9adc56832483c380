//! Fatal-signal handling: `SIGTERM`/`SIGHUP`/`SIGQUIT`/`SIGINT` restore
//! cooked mode and exit `128 + signo`, mirroring `original_source/term.c`'s
//! `termonsig`. No `libc` or `signal-hook` dependency — just the three
//! POSIX symbols (`signal`, `write`, `_exit`) declared directly.

use std::os::raw::c_int;

extern "C" {
    fn signal(signum: c_int, handler: usize) -> usize;
    fn write(fd: c_int, buf: *const u8, count: usize) -> isize;
    fn _exit(status: c_int) -> !;
}

const SIGHUP: c_int = 1;
const SIGINT: c_int = 2;
const SIGQUIT: c_int = 3;
const SIGTERM: c_int = 15;

/// Cursor-show + cursor-shape-reset, best effort from inside the handler.
/// Raw-mode termios restoration itself goes through crossterm, which is
/// a plain `ioctl`/`tcsetattr` wrapper and safe enough to call here even
/// though it isn't declared async-signal-safe by POSIX.
const RESET: &[u8] = b"\x1b[2 q\x1b[?25h\x1b[2J\x1b[H";

extern "C" fn handle(signo: c_int) {
    let _ = crossterm::terminal::disable_raw_mode();
    unsafe {
        write(1, RESET.as_ptr(), RESET.len());
        _exit(128 + signo);
    }
}

/// Register the fatal-signal handlers. Call once at startup, after the
/// terminal has been put into raw mode.
pub fn install() {
    unsafe {
        signal(SIGHUP, handle as usize);
        signal(SIGINT, handle as usize);
        signal(SIGQUIT, handle as usize);
        signal(SIGTERM, handle as usize);
    }
}
