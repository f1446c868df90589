//! Output formatting and text parsing
//!
//! The input half only parses literal text. Reading stdin is listed but
//! never executed: the tour takes no input.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use super::printf::{printf, Arg};
use crate::console::Console;

const NUM: i32 = 42;
#[allow(clippy::approx_constant)]
const PI: f64 = 3.14159265359;
const RECORD: &str = "123 3.14 Hello";

const BEST_PRACTICES: &[&str] = &[
    "Lock stdout once when printing many lines",
    "Borrow &str when a String is not needed",
    "Use inline format arguments for readable output",
    "Parse with str::parse and handle the Result",
    "Always validate user input",
];

#[derive(Debug, Error)]
pub enum ParseRecordError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid integer: {0}")]
    InvalidInt(#[from] ParseIntError),

    #[error("invalid float: {0}")]
    InvalidFloat(#[from] ParseFloatError),
}

/// Whitespace-separated `int float word`
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub int: i32,
    pub float: f64,
    pub word: String,
}

pub fn parse_record(text: &str) -> Result<Record, ParseRecordError> {
    let mut fields = text.split_whitespace();
    let int: i32 = fields
        .next()
        .ok_or(ParseRecordError::MissingField("int"))?
        .parse()?;
    let float: f64 = fields
        .next()
        .ok_or(ParseRecordError::MissingField("float"))?
        .parse()?;
    let word = fields
        .next()
        .ok_or(ParseRecordError::MissingField("word"))?
        .to_string();

    Ok(Record { int, float, word })
}

pub fn demonstrate(console: &Console) {
    output_methods(console);
    console.blank();
    input_methods(console);
}

fn output_methods(console: &Console) {
    console.subheading("Output Methods");

    console.println("1. println! with string concatenation");

    console.println("2. Format specifiers:");
    console.println(format!("   Hex: {:#x}", NUM));
    console.println(format!("   Decimal: {}", NUM));
    console.println(format!("   Fixed precision: {:.2}", PI));
    console.println(format!("   Scientific: {:.2e}", PI));

    console.println("3. Building a String piece by piece:");
    let mut buffer = String::from("String building allows complex strings: ");
    buffer.push_str(&format!("Value={}, Pi={:.2}", NUM, PI));
    console.println(format!("   {}", buffer));

    console.println("4. printf-style formatting:");
    let classic = printf(
        "   Classic printf: num=%d, pi=%.2f",
        &[Arg::Int(i64::from(NUM)), Arg::Float(PI)],
    );
    match classic {
        Ok(line) => console.println(line),
        Err(e) => console.println(format!("   printf failed: {}", e)),
    }

    console.println("5. Inline and positional format arguments:");
    console.println(format!("   Number: {NUM}, Pi: {PI:.2}"));
    console.println(format!("   Hex: {0:#x}, Decimal: {0}, Pi: {1:.3}", NUM, PI));

    console.println("6. Printing without an explicit flush");

    let view: &str = "Efficient &str view for print operations";
    console.println(format!("7. Using &str: {}", view));
}

fn input_methods(console: &Console) {
    console.subheading("Input Methods");

    console.println("1. Reading a value from stdin (not run, the tour reads no input)");
    console.println("2. Reading whole lines with lines() (not run)");
    console.println("3. Input with validation (not run)");

    console.println("4. Parsing whitespace-separated text:");
    match parse_record(RECORD) {
        Ok(record) => {
            console.println(format!("   Parsed int: {}", record.int));
            console.println(format!("   Parsed double: {}", record.float));
            console.println(format!("   Parsed string: {}", record.word));
        }
        Err(e) => console.println(format!("   Parse failed: {}", e)),
    }

    console.println("5. Parsing with str::parse:");
    match "42".parse::<i32>() {
        Ok(converted) => console.println(format!("   String to int: {}", converted)),
        Err(e) => console.println(format!("   String to int failed: {}", e)),
    }

    console.println("6. I/O best practices:");
    for practice in BEST_PRACTICES {
        console.println(format!("   • {}", practice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::approx_constant, clippy::float_cmp)]
    fn test_parse_record() {
        let record = parse_record("123 3.14 Hello").unwrap();
        assert_eq!(record.int, 123);
        assert_eq!(record.float, 3.14);
        assert_eq!(record.word, "Hello");
    }

    #[test]
    fn test_parse_record_errors() {
        assert!(matches!(
            parse_record("123 3.14"),
            Err(ParseRecordError::MissingField("word"))
        ));
        assert!(matches!(
            parse_record("abc 3.14 Hello"),
            Err(ParseRecordError::InvalidInt(_))
        ));
        assert!(matches!(
            parse_record("1 pi Hello"),
            Err(ParseRecordError::InvalidFloat(_))
        ));
    }

    #[test]
    fn test_formatted_output() {
        let console = Console::new();
        demonstrate(&console);
        let output = console.get_output();

        for expected in [
            "   Hex: 0x2a",
            "   Decimal: 42",
            "   Fixed precision: 3.14",
            "   Scientific: 3.14e0",
            "   String building allows complex strings: Value=42, Pi=3.14",
            "   Classic printf: num=42, pi=3.14",
            "   Number: 42, Pi: 3.14",
            "   Hex: 0x2a, Decimal: 42, Pi: 3.142",
            "   Parsed int: 123",
            "   Parsed double: 3.14",
            "   Parsed string: Hello",
            "   String to int: 42",
        ] {
            assert!(
                output.iter().any(|line| line == expected),
                "missing line {:?}",
                expected
            );
        }
    }
}
