//! Destination for program output (the `echo` builtin).
//!
//! Enum dispatch over the three destinations: stdout for the shell, an
//! in-memory buffer for tests and embedding, and silence.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

pub enum PrintHandlerImpl {
    Stdout,
    Buffer(Mutex<String>),
    Silent,
}

impl PrintHandlerImpl {
    /// Write `msg` followed by a newline.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                // A closed stdout is not an evaluation error.
                let _ = writeln!(out, "{msg}");
            }
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Take and reset captured output.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(buf) => std::mem::take(&mut *buf.lock()),
            Self::Stdout | Self::Silent => String::new(),
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_collects_lines() {
        let handler = buffer_handler();
        handler.println("one");
        handler.println("two");
        assert_eq!(handler.get_output(), "one\ntwo\n");
        assert_eq!(handler.take_output(), "one\ntwo\n");
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn silent_discards() {
        let handler = silent_handler();
        handler.println("ignored");
        assert_eq!(handler.get_output(), "");
    }
}
