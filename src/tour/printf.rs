//! printf-style formatting
//!
//! [`printf`] expands `%` directives against a slice of tagged [`Arg`]s.
//!
//! # Supported directives
//!
//! - `%d`, `%i`: signed integer
//! - `%u`: integer reinterpreted as unsigned 32-bit
//! - `%x`, `%X`: integer in lower/upper case hex
//! - `%c`: character (or an integer code point)
//! - `%s`: string
//! - `%f`, `%e`: float in fixed or scientific notation, with optional
//!   precision (`%.2f`, default 6). `%e` writes a signed, two-digit
//!   exponent as C does (`1.234e+03`)
//! - `%%`: a literal percent sign
//!
//! Backslash escapes (`\n`, `\t`, `\r`, `\\`, `\"`) are expanded too, so
//! formats read from raw strings behave like C string literals.

use thiserror::Error;

const DEFAULT_PRECISION: usize = 6;

/// A printf argument
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Int(i64),
    Float(f64),
    Char(char),
    Str(String),
}

impl Arg {
    fn kind(&self) -> &'static str {
        match self {
            Arg::Int(_) => "int",
            Arg::Float(_) => "float",
            Arg::Char(_) => "char",
            Arg::Str(_) => "string",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("not enough arguments for %{directive}")]
    MissingArgument { directive: char },

    #[error("%{directive} expects {expected}, got {got}")]
    ArgumentMismatch {
        directive: char,
        expected: &'static str,
        got: &'static str,
    },

    #[error("unsupported format specifier: %{0}")]
    UnsupportedDirective(char),

    #[error("precision is only valid for %f and %e, found %.{0}")]
    MisplacedPrecision(char),

    #[error("format string ends inside a directive")]
    TruncatedDirective,
}

pub fn printf(format: &str, args: &[Arg]) -> Result<String, FormatError> {
    let mut output = String::new();
    let mut chars = format.chars().peekable();
    let mut remaining = args.iter();

    while let Some(ch) = chars.next() {
        if ch == '%' {
            let Some(&next_ch) = chars.peek() else {
                output.push('%');
                continue;
            };

            let precision = if next_ch == '.' {
                chars.next();
                let mut digits = String::new();
                while let Some(&d) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    digits.push(d);
                    chars.next();
                }
                // "%.f" means precision 0, as in C
                Some(digits.parse::<usize>().unwrap_or(0))
            } else {
                None
            };

            let directive = chars.next().ok_or(FormatError::TruncatedDirective)?;
            if precision.is_some() && !matches!(directive, 'f' | 'e') {
                return Err(FormatError::MisplacedPrecision(directive));
            }

            if directive == '%' {
                output.push('%');
                continue;
            }

            let arg = remaining
                .next()
                .ok_or(FormatError::MissingArgument { directive })?;
            let mismatch = |expected| FormatError::ArgumentMismatch {
                directive,
                expected,
                got: arg.kind(),
            };

            match (directive, arg) {
                ('d' | 'i', Arg::Int(n)) => output.push_str(&n.to_string()),
                ('u', Arg::Int(n)) => output.push_str(&(*n as u32).to_string()),
                ('x', Arg::Int(n)) => output.push_str(&format!("{:x}", *n as u32)),
                ('X', Arg::Int(n)) => output.push_str(&format!("{:X}", *n as u32)),
                ('c', Arg::Char(c)) => output.push(*c),
                ('c', Arg::Int(n)) => {
                    let c = u32::try_from(*n)
                        .ok()
                        .and_then(char::from_u32)
                        .ok_or_else(|| mismatch("a valid code point"))?;
                    output.push(c);
                }
                ('s', Arg::Str(s)) => output.push_str(s),
                ('f', Arg::Float(x)) => {
                    let digits = precision.unwrap_or(DEFAULT_PRECISION);
                    output.push_str(&format!("{:.*}", digits, x));
                }
                ('e', Arg::Float(x)) => {
                    let digits = precision.unwrap_or(DEFAULT_PRECISION);
                    output.push_str(&c_exponent(*x, digits));
                }
                ('d' | 'i' | 'u' | 'x' | 'X', _) => return Err(mismatch("int")),
                ('c', _) => return Err(mismatch("char or int")),
                ('s', _) => return Err(mismatch("string")),
                ('f' | 'e', _) => return Err(mismatch("float")),
                (other, _) => return Err(FormatError::UnsupportedDirective(other)),
            }
        } else if ch == '\\' {
            if let Some(&next_ch) = chars.peek() {
                chars.next();
                match next_ch {
                    'n' => output.push('\n'),
                    't' => output.push('\t'),
                    'r' => output.push('\r'),
                    '\\' => output.push('\\'),
                    '"' => output.push('"'),
                    _ => {
                        output.push('\\');
                        output.push(next_ch);
                    }
                }
            } else {
                output.push('\\');
            }
        } else {
            output.push(ch);
        }
    }

    Ok(output)
}

/// `{:e}` with the exponent rewritten to C's `e+NN` form
fn c_exponent(x: f64, digits: usize) -> String {
    let rust = format!("{:.*e}", digits, x);
    // inf and NaN carry no exponent
    let Some((mantissa, exponent)) = rust.split_once('e') else {
        return rust;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return rust;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_directives() {
        let out = printf("%d %i %u %x %X", &[
            Arg::Int(42),
            Arg::Int(-7),
            Arg::Int(-1),
            Arg::Int(255),
            Arg::Int(255),
        ])
        .unwrap();
        assert_eq!(out, "42 -7 4294967295 ff FF");
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_float_precision() {
        let args = [Arg::Int(42), Arg::Float(3.14159265359)];
        let out = printf("num=%d, pi=%.2f", &args).unwrap();
        assert_eq!(out, "num=42, pi=3.14");

        let out = printf("%f|%.0f|%.3e", &[
            Arg::Float(1.5),
            Arg::Float(1.75),
            Arg::Float(1234.0),
        ])
        .unwrap();
        assert_eq!(out, "1.500000|2|1.234e+03");
    }

    #[test]
    fn test_exponent_matches_c() {
        let out = printf("%e|%.1e|%.2e|%e", &[
            Arg::Float(1.5),
            Arg::Float(0.00012),
            Arg::Float(-2.5e120),
            Arg::Float(f64::INFINITY),
        ])
        .unwrap();
        assert_eq!(out, "1.500000e+00|1.2e-04|-2.50e+120|inf");
    }

    #[test]
    fn test_chars_strings_and_percent() {
        let out = printf("%c%c %s 100%%", &[
            Arg::Char('o'),
            Arg::Int(107),
            Arg::Str("done".to_string()),
        ])
        .unwrap();
        assert_eq!(out, "ok done 100%");
    }

    #[test]
    fn test_escapes() {
        let out = printf(r"a\tb\n\q", &[]).unwrap();
        assert_eq!(out, "a\tb\n\\q");
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(
            printf("%d and %d", &[Arg::Int(1)]),
            Err(FormatError::MissingArgument { directive: 'd' })
        );
    }

    #[test]
    fn test_argument_mismatch() {
        assert_eq!(
            printf("%d", &[Arg::Str("x".to_string())]),
            Err(FormatError::ArgumentMismatch {
                directive: 'd',
                expected: "int",
                got: "string",
            })
        );
    }

    #[test]
    fn test_unsupported_and_misplaced() {
        assert_eq!(
            printf("%n", &[Arg::Int(0)]),
            Err(FormatError::UnsupportedDirective('n'))
        );
        assert_eq!(
            printf("%.2d", &[Arg::Int(0)]),
            Err(FormatError::MisplacedPrecision('d'))
        );
        assert_eq!(printf("%.2", &[]), Err(FormatError::TruncatedDirective));
    }
}
