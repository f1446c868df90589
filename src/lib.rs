//! # Introduction
//!
//! syntax-tour prints a chapter-by-chapter walkthrough of everyday Rust:
//! scalar types, control flow, functions, references and ownership, traits,
//! closures, collections, error handling and formatting. Every chapter is a
//! small deterministic demonstration over literal data.
//!
//! ## Pipeline
//!
//! ```text
//! Tour → chapters → Console (transcript) → render → stdout
//! ```
//!
//! 1. [`tour`]: the fixed chapter table and the driver that runs it.
//! 2. [`console`]: the shared output sink each chapter prints into, and the
//!    crossterm renderer that writes the transcript out.
//! 3. [`constants`]: banner text, completion line, log directive and the
//!    literal arguments of the driver.
//!
//! The binary takes no arguments and reads no input; it always exits with 0.

pub mod console;
pub mod constants;
pub mod tour;
