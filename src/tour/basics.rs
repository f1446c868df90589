//! Hello world and the scalar types

use crate::console::Console;

pub fn basic_syntax(console: &Console) {
    // Statements end with semicolons; the last expression of a block is its value
    console.println("Hello, World!");
}

#[allow(clippy::approx_constant)]
pub fn variables_and_types(console: &Console) {
    let integer_value: i32 = 42;
    let floating_point: f64 = 3.14159;
    let single_character: char = 'A';
    let boolean_value: bool = true;
    let text: String = String::from("Hello, Rust");

    const UNCHANGEABLE: i32 = 100;

    // Strings are UTF-8; other encodings are explicit conversions
    let wide_text: Vec<u16> = "Wide character string".encode_utf16().collect();

    console.println(format!("Integer: {}", integer_value));
    console.println(format!("Double: {}", floating_point));
    console.println(format!("Char: {}", single_character));
    console.println(format!("Boolean: {}", boolean_value));
    console.println(format!("String: {}", text));
    console.println(format!("Constant: {}", UNCHANGEABLE));
    console.println(format!("UTF-16 units: {}", wide_text.len()));

    console.println(format!(
        "5/2 with conversion: {}",
        convert_then_divide(5, 2)
    ));
    console.println(format!(
        "5/2 without conversion: {}",
        truncating_divide(5, 2)
    ));
}

/// Widen both operands to `f64` before dividing
pub fn convert_then_divide(numerator: i32, denominator: i32) -> f64 {
    f64::from(numerator) / f64::from(denominator)
}

/// Integer division, truncating toward zero
pub fn truncating_divide(numerator: i32, denominator: i32) -> i32 {
    numerator / denominator
}
