//! Output sinks for the exercise drivers.
//!
//! Drivers never call `println!` themselves. They write through a [`Console`],
//! so the binaries can point them at stdout while tests swap in a
//! [`RecordingConsole`] and compare transcripts line by line.

use std::cell::RefCell;

pub trait Console {
    fn line(&self, text: &str);

    fn blank(&self) {
        self.line("");
    }
}

/// Writes every line straight to stdout.
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&self, text: &str) {
        println!("{text}");
    }
}

/// In-memory sink that keeps every line for later inspection.
#[derive(Default)]
pub struct RecordingConsole {
    lines: RefCell<Vec<String>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Recorded lines with blank separators dropped.
    pub fn non_blank_lines(&self) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|line| !line.is_empty())
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Console for RecordingConsole {
    fn line(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}
