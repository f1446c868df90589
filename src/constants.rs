// Fixed strings and literal data shared by the driver and the chapters

/// Log directive installed by the binary; never read from the environment
pub const LOG_FILTER: &str = "syntax_tour=info";

pub const TOUR_TITLE: &str = "Rust Syntax Tour";
pub const BANNER_WIDTH: usize = 30;
pub const COMPLETION_MESSAGE: &str = "Tutorial completed successfully!";

/// Argument passed to the functions chapter
pub const FUNCTION_ARGUMENT: i32 = 42;

/// Operands of the `Sum:` line printed after the functions chapter
pub const SUM_OPERANDS: (i32, i32) = (5, 7);
