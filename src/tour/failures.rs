//! Raising and recovering from failures with `Result`
//!
//! Risky operations return [`DemoError`]. A failed attempt is recovered by
//! [`recover`], which picks the most specific handler tier first:
//!
//! ```text
//! DivisionByZero → Arithmetic
//! OutOfRange     → Range
//! Standard(_)    → Generic
//! Unrecognized   → CatchAll
//! ```
//!
//! Each scenario walks `Normal → Raised → Recovered → Normal` (or stays
//! `Normal` when nothing fails). No error leaves [`demonstrate`].

use thiserror::Error;
use tracing::debug;

use crate::console::Console;

const NUMERATOR: i32 = 10;
const ELEMENTS: [i32; 3] = [1, 2, 3];

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Division by zero!")]
    DivisionByZero,

    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Any library error
    #[error("{0}")]
    Standard(#[from] Box<dyn std::error::Error + Send + Sync>),

    #[error("unrecognized failure: {0}")]
    Unrecognized(String),
}

/// Handler tier that recovered a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Arithmetic,
    Range,
    Generic,
    CatchAll,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Arithmetic => "Arithmetic error",
            Tier::Range => "Out of range error",
            Tier::Generic => "Standard error",
            Tier::CatchAll => "Unknown error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    Normal,
    Raised,
    Recovered(Tier),
}

/// Failure condition set up before an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Normal,
    ZeroDivisor,
    OutOfBounds,
}

impl Scenario {
    fn denominator(self) -> i32 {
        match self {
            Scenario::ZeroDivisor => 0,
            _ => 2,
        }
    }

    fn index(self) -> usize {
        match self {
            Scenario::OutOfBounds => ELEMENTS.len() + 2,
            _ => 1,
        }
    }
}

/// Result of one scenario: the tier that recovered it, if any, and the
/// states it passed through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub tier: Option<Tier>,
    pub trace: Vec<FailureState>,
}

pub fn checked_divide(numerator: i32, denominator: i32) -> Result<i32, DemoError> {
    numerator
        .checked_div(denominator)
        .ok_or(DemoError::DivisionByZero)
}

pub fn checked_at(values: &[i32], index: usize) -> Result<i32, DemoError> {
    values.get(index).copied().ok_or(DemoError::OutOfRange {
        index,
        len: values.len(),
    })
}

/// Most specific tier first, then generic, then catch-all
pub fn recover(error: &DemoError) -> Tier {
    match error {
        DemoError::DivisionByZero => Tier::Arithmetic,
        DemoError::OutOfRange { .. } => Tier::Range,
        DemoError::Standard(_) => Tier::Generic,
        DemoError::Unrecognized(_) => Tier::CatchAll,
    }
}

/// The risky body: a division, then an indexed read
pub fn attempt(console: &Console, scenario: Scenario) -> Result<(), DemoError> {
    console.println("Attempting division...");
    let result = checked_divide(NUMERATOR, scenario.denominator())?;
    console.println(format!("Result: {}", result));

    let index = scenario.index();
    let element = checked_at(&ELEMENTS, index)?;
    console.println(format!("vec[{}]: {}", index, element));
    Ok(())
}

pub fn run_scenario(console: &Console, scenario: Scenario) -> Outcome {
    let mut trace = vec![FailureState::Normal];

    let tier = match attempt(console, scenario) {
        Ok(()) => None,
        Err(error) => {
            trace.push(FailureState::Raised);
            let tier = recover(&error);
            debug!(?scenario, ?tier, %error, "recovered");
            console.println(format!("{}: {}", tier.label(), error));
            trace.push(FailureState::Recovered(tier));
            trace.push(FailureState::Normal);
            Some(tier)
        }
    };

    Outcome { tier, trace }
}

pub fn demonstrate(console: &Console) {
    let scenarios = [Scenario::Normal, Scenario::ZeroDivisor, Scenario::OutOfBounds];
    for scenario in scenarios {
        let outcome = run_scenario(console, scenario);
        if let Some(tier) = outcome.tier {
            console.println(format!("Handled by the {:?} tier, continuing", tier));
        }
    }
}
