//! Branching, `match`, and the four loop shapes
//!
//! Every loop helper walks `0..limit` and returns what it visited, so the
//! chapter can show that all four styles produce the same sequence.

use crate::console::Console;

const SUBJECT: i32 = 10;
const LOOP_LIMIT: i32 = 5;

pub fn demonstrate(console: &Console) {
    console.println(classify(SUBJECT));
    console.println(describe_value(SUBJECT));

    let numbers: Vec<i32> = (0..LOOP_LIMIT).collect();

    console.print_sequence("For loop", &counted_loop(LOOP_LIMIT));
    console.print_sequence("Iterator loop", &sequence_loop(&numbers));
    console.print_sequence("While loop", &pre_test_loop(LOOP_LIMIT));
    console.print_sequence("Loop with break", &post_test_loop(LOOP_LIMIT));
}

pub fn classify(x: i32) -> &'static str {
    if x > 5 {
        "x is greater than 5"
    } else if x == 5 {
        "x is equal to 5"
    } else {
        "x is less than 5"
    }
}

pub fn describe_value(x: i32) -> &'static str {
    match x {
        5 => "x is 5",
        10 => "x is 10",
        _ => "x is neither 5 nor 10",
    }
}

/// `for` over a range
pub fn counted_loop(limit: i32) -> Vec<i32> {
    let mut visited = Vec::new();
    for i in 0..limit {
        visited.push(i);
    }
    visited
}

/// `for` over the elements of a slice
pub fn sequence_loop(items: &[i32]) -> Vec<i32> {
    let mut visited = Vec::with_capacity(items.len());
    for &item in items {
        visited.push(item);
    }
    visited
}

/// Condition checked before each iteration
pub fn pre_test_loop(limit: i32) -> Vec<i32> {
    let mut visited = Vec::new();
    let mut i = 0;
    while i < limit {
        visited.push(i);
        i += 1;
    }
    visited
}

/// Body runs once before the condition is checked
pub fn post_test_loop(limit: i32) -> Vec<i32> {
    let mut visited = Vec::new();
    let mut i = 0;
    loop {
        visited.push(i);
        i += 1;
        if i >= limit {
            break;
        }
    }
    visited
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branches() {
        assert_eq!(classify(10), "x is greater than 5");
        assert_eq!(classify(5), "x is equal to 5");
        assert_eq!(classify(1), "x is less than 5");

        assert_eq!(describe_value(10), "x is 10");
        assert_eq!(describe_value(5), "x is 5");
        assert_eq!(describe_value(7), "x is neither 5 nor 10");
    }

    #[test]
    fn test_all_loop_styles_agree() {
        let expected = vec![0, 1, 2, 3, 4];
        let numbers: Vec<i32> = (0..5).collect();

        assert_eq!(counted_loop(5), expected);
        assert_eq!(sequence_loop(&numbers), expected);
        assert_eq!(pre_test_loop(5), expected);
        assert_eq!(post_test_loop(5), expected);
    }

    #[test]
    fn test_post_test_loop_runs_body_once() {
        // The only style that visits anything when the range is empty
        assert!(pre_test_loop(0).is_empty());
        assert_eq!(post_test_loop(0), vec![0]);
    }
}
