//! The tour driver and its chapters
//!
//! [`Tour::run`] prints the banner, then runs every entry of [`CHAPTERS`]
//! exactly once, in table order, and finishes with the completion line.
//! Chapters are plain `fn(&Console)` procedures: they read only literal data
//! and never fail, so the driver has no error path.
//!
//! - [`basics`]: hello world, scalar types, integer vs float division
//! - [`control_flow`]: branching, `match`, four loop styles
//! - [`functions`]: parameters, block scope, defaulted closure arguments
//! - [`references`]: `&mut` aliases, addresses, `Cell`, owned boxes
//! - [`classes`]: a base record and a derived record behind a trait
//! - [`modern`]: inference, closures, ownership transfer
//! - [`collections`]: `Vec` and map operations, search, sort, transform
//! - [`failures`]: tiered recovery from `Result` errors
//! - [`formatting`]: format specifiers, printf-style output, parsing

pub mod basics;
pub mod classes;
pub mod collections;
pub mod control_flow;
pub mod failures;
pub mod formatting;
pub mod functions;
pub mod modern;
pub mod printf;
pub mod references;

use tracing::{debug_span, info};

use crate::console::Console;
use crate::constants::{
    BANNER_WIDTH, COMPLETION_MESSAGE, FUNCTION_ARGUMENT, SUM_OPERANDS, TOUR_TITLE,
};

pub type ChapterFn = fn(&Console);

/// One entry of the chapter table
pub struct Chapter {
    pub title: &'static str,
    pub run: ChapterFn,
}

pub const CHAPTERS: &[Chapter] = &[
    Chapter {
        title: "Basic Syntax",
        run: basics::basic_syntax,
    },
    Chapter {
        title: "Variables and Types",
        run: basics::variables_and_types,
    },
    Chapter {
        title: "Control Flow",
        run: control_flow::demonstrate,
    },
    Chapter {
        title: "Functions",
        run: functions_with_sum,
    },
    Chapter {
        title: "References and Ownership",
        run: references::demonstrate,
    },
    Chapter {
        title: "Structs and Traits",
        run: classes::demonstrate,
    },
    Chapter {
        title: "Modern Rust Features",
        run: modern::demonstrate,
    },
    Chapter {
        title: "Collections and Algorithms",
        run: collections::demonstrate,
    },
    Chapter {
        title: "Error Handling",
        run: failures::demonstrate,
    },
    Chapter {
        title: "Modern I/O Operations",
        run: formatting::demonstrate,
    },
];

// The sum line sits between the functions and references chapters
fn functions_with_sum(console: &Console) {
    functions::demonstrate(console, FUNCTION_ARGUMENT);
    let (a, b) = SUM_OPERANDS;
    console.println(format!("Sum: {}", functions::return_sum(a, b)));
}

pub struct Tour {
    console: Console,
}

impl Tour {
    pub fn new(console: Console) -> Self {
        Tour { console }
    }

    pub fn chapters(&self) -> &'static [Chapter] {
        CHAPTERS
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn run(&self) {
        info!(chapters = CHAPTERS.len(), "starting tour");

        let rule = "=".repeat(BANNER_WIDTH);
        self.console.banner(rule.clone());
        self.console.banner(TOUR_TITLE);
        self.console.banner(rule);

        for chapter in self.chapters() {
            let _span = debug_span!("chapter", title = chapter.title).entered();
            self.console.heading(chapter.title);
            (chapter.run)(&self.console);
        }

        self.console.blank();
        self.console.println(COMPLETION_MESSAGE);
        info!("tour completed");
    }
}
