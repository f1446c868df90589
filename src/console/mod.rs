//! Output capture for the tour
//!
//! Chapters never write to stdout directly. They print into a [`Console`],
//! a shared handle over a [`Transcript`] of tagged [`Line`]s, and the binary
//! renders the finished transcript in one pass (see [`render`]).
//!
//! # Line kinds
//!
//! - [`LineKind::Banner`]: the title block printed before the first chapter
//! - [`LineKind::Heading`]: one `----- Title -----` line per chapter
//! - [`LineKind::Subheading`]: `===== Title =====` sections inside a chapter
//! - [`LineKind::Text`]: everything else
//!
//! The handle is cheap to clone so that values with a lifecycle (the records
//! of the hierarchy chapter, owned allocations) can report their own
//! construction and destruction from `new` and `Drop`.

pub mod render;
pub mod theme;

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Banner,
    Heading,
    Subheading,
    Text,
}

/// A line of captured output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub kind: LineKind,
}

impl Line {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Line {
            text: text.into(),
            kind,
        }
    }
}

/// Captured output, line by line
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub lines: Vec<Line>,
    // Set while the last text line has not been terminated by a newline
    line_open: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print without newline
    pub fn print(&mut self, text: &str) {
        for (i, piece) in text.split('\n').enumerate() {
            if i == 0 && self.line_open {
                if let Some(last) = self.lines.last_mut() {
                    last.text.push_str(piece);
                    continue;
                }
            }
            self.lines.push(Line::new(LineKind::Text, piece));
        }

        self.line_open = true;
        if text.ends_with('\n') {
            // split() yields an empty piece after a trailing newline
            self.lines.pop();
            self.line_open = false;
        }
    }

    /// Append a complete line of the given kind, closing any open text line
    pub fn push_line(&mut self, kind: LineKind, text: impl Into<String>) {
        self.line_open = false;
        self.lines.push(Line::new(kind, text));
    }

    /// Get all lines as plain strings
    pub fn get_output(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.text.clone()).collect()
    }
}

/// Shared handle over a [`Transcript`]
#[derive(Debug, Clone, Default)]
pub struct Console {
    inner: Rc<RefCell<Transcript>>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print(&self, text: impl AsRef<str>) {
        self.inner.borrow_mut().print(text.as_ref());
    }

    pub fn println(&self, text: impl AsRef<str>) {
        let mut transcript = self.inner.borrow_mut();
        transcript.print(text.as_ref());
        transcript.print("\n");
    }

    pub fn blank(&self) {
        self.println("");
    }

    pub fn banner(&self, text: impl Into<String>) {
        self.inner
            .borrow_mut()
            .push_line(LineKind::Banner, text);
    }

    /// Chapter heading, preceded by a blank line
    pub fn heading(&self, title: &str) {
        self.blank();
        self.inner
            .borrow_mut()
            .push_line(LineKind::Heading, format!("----- {} -----", title));
    }

    pub fn subheading(&self, title: &str) {
        self.inner
            .borrow_mut()
            .push_line(LineKind::Subheading, format!("===== {} =====", title));
    }

    /// Print `label: ` followed by each value and a trailing newline
    pub fn print_sequence<T: std::fmt::Display>(&self, label: &str, values: &[T]) {
        self.print(format!("{}: ", label));
        for value in values {
            self.print(format!("{} ", value));
        }
        self.println("");
    }

    pub fn lines(&self) -> Vec<Line> {
        self.inner.borrow().lines.clone()
    }

    pub fn get_output(&self) -> Vec<String> {
        self.inner.borrow().get_output()
    }
}
