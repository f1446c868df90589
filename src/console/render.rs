//! Writes a captured transcript to a terminal or any other [`Write`] target
//!
//! Styling is opt-in: the binary enables it only when stdout is a terminal,
//! so piped output stays plain text.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use super::theme::DEFAULT_THEME;
use super::{Line, LineKind};

pub fn render<W: Write>(lines: &[Line], out: &mut W, styled: bool) -> io::Result<()> {
    for line in lines {
        if styled {
            write_styled(line, out)?;
        } else {
            writeln!(out, "{}", line.text)?;
        }
    }
    out.flush()
}

/// [`render`], except that a reader hanging up early counts as success
pub fn render_to<W: Write>(lines: &[Line], out: &mut W, styled: bool) -> io::Result<()> {
    match render(lines, out, styled) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

fn write_styled<W: Write>(line: &Line, out: &mut W) -> io::Result<()> {
    let (color, bold) = match line.kind {
        LineKind::Banner => (DEFAULT_THEME.banner, true),
        LineKind::Heading => (DEFAULT_THEME.heading, true),
        LineKind::Subheading => (DEFAULT_THEME.subheading, false),
        LineKind::Text => (DEFAULT_THEME.text, false),
    };

    if bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    queue!(
        out,
        SetForegroundColor(color),
        Print(&line.text),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Line> {
        vec![
            Line::new(LineKind::Banner, "Rust Syntax Tour"),
            Line::new(LineKind::Text, ""),
            Line::new(LineKind::Heading, "----- Basic Syntax -----"),
            Line::new(LineKind::Text, "Hello, World!"),
        ]
    }

    #[test]
    fn test_plain_render_matches_lines() {
        let mut out = Vec::new();
        render(&sample(), &mut out, false).expect("render failed");

        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(
            text,
            "Rust Syntax Tour\n\n----- Basic Syntax -----\nHello, World!\n"
        );
    }

    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(self.0))
        }
    }

    #[test]
    fn test_closed_pipe_is_not_an_error() {
        let mut out = FailingWriter(io::ErrorKind::BrokenPipe);
        assert!(render(&sample(), &mut out, false).is_err());
        assert!(render_to(&sample(), &mut out, false).is_ok());
        assert!(render_to(&sample(), &mut out, true).is_ok());
    }

    #[test]
    fn test_other_write_errors_still_surface() {
        let mut out = FailingWriter(io::ErrorKind::PermissionDenied);
        let err = render_to(&sample(), &mut out, false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_styled_render_emits_escape_sequences() {
        let mut out = Vec::new();
        render(&sample(), &mut out, true).expect("render failed");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains('\x1b'));
        assert!(text.contains("----- Basic Syntax -----"));
        assert!(text.contains("Hello, World!"));
        assert_eq!(text.matches('\n').count(), 4);
    }
}
