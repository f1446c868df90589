//! Type inference, closures, and moving values out

use std::mem;

use crate::console::Console;

#[allow(clippy::approx_constant)]
pub fn demonstrate(console: &Console) {
    let value = 42;
    let text = "hello";
    let pi = 3.14159;
    console.println(format!("Inferred bindings: {}, {}, {}", value, text, pi));

    let add = |a: i32, b: i32| a + b;
    console.println(format!("Closure result: {}", add(3, 4)));

    let multiply = scaled_by(10);
    console.println(format!("Closure with capture: {}", multiply(5)));

    let mut source = String::from("Original string");
    let destination = transfer(&mut source);
    console.println(format!("After move, destination: {}", destination));
    console.println(format!("After move, source: {:?}", source));

    // A plain move; `destination` is unusable from here on
    let moved = destination;
    console.println(format!("Moved binding: {}", moved));

    let numbers = vec![1, 2, 3, 4, 5];
    console.print_sequence("Initializer list", &numbers);
}

/// Closure that captures `multiplier` by value
pub fn scaled_by(multiplier: i32) -> impl Fn(i32) -> i32 {
    move |x| x * multiplier
}

/// Take the contents of `source`, leaving it empty
pub fn transfer(source: &mut String) -> String {
    mem::take(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capturing_closure() {
        let multiply = scaled_by(10);
        assert_eq!(multiply(5), 50);
    }

    #[test]
    fn test_transfer_leaves_source_empty() {
        let mut source = String::from("Original string");
        let destination = transfer(&mut source);

        assert_eq!(destination, "Original string");
        assert!(source.is_empty());
    }
}
