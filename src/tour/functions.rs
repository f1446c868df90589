//! Parameters, block scope, and closures with defaulted arguments

use crate::console::Console;

const DEFAULT_A: i32 = 1;
const DEFAULT_B: i32 = 2;

pub fn demonstrate(console: &Console, value: i32) {
    console.println(format!("Function parameter: {}", value));

    {
        let local_var = 100;
        console.println(format!("Inside local scope: {}", local_var));
    }
    // local_var is gone here

    let default_param = defaulted_sum();
    console.println(format!(
        "Default params (no args): {}",
        default_param(None, None)
    ));
    console.println(format!(
        "Default params (one arg): {}",
        default_param(Some(10), None)
    ));
    console.println(format!(
        "Default params (two args): {}",
        default_param(Some(10), Some(20))
    ));
}

/// Closure summing two optional operands, missing ones default to 1 and 2
pub fn defaulted_sum() -> impl Fn(Option<i32>, Option<i32>) -> i32 {
    |a, b| a.unwrap_or(DEFAULT_A) + b.unwrap_or(DEFAULT_B)
}

pub fn return_sum(a: i32, b: i32) -> i32 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaulted_sum() {
        let f = defaulted_sum();
        assert_eq!(f(None, None), 3);
        assert_eq!(f(Some(10), None), 12);
        assert_eq!(f(Some(10), Some(20)), 30);
        assert_eq!(f(None, Some(20)), 21);
    }

    #[test]
    fn test_return_sum() {
        assert_eq!(return_sum(5, 7), 12);
    }
}
