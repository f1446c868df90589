// syntax-tour: a printed walkthrough of everyday Rust syntax

use std::io;

use crossterm::tty::IsTty;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use syntax_tour::console::{render::render_to, Console};
use syntax_tour::constants::LOG_FILTER;
use syntax_tour::tour::Tour;

fn main() {
    // Diagnostics go to stderr so stdout carries only the tour
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(LOG_FILTER))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_tty())
        .init();

    let tour = Tour::new(Console::new());
    tour.run();

    let stdout = io::stdout();
    let styled = stdout.is_tty();
    let mut out = stdout.lock();
    // The exit status stays 0 whatever happens to stdout
    if let Err(e) = render_to(&tour.console().lines(), &mut out, styled) {
        warn!(error = %e, "failed to write the tour to stdout");
    }
}
