//! Aliasing, addresses, and owned heap values
//!
//! [`Owned`] wraps a `Box` and reports its own allocation and release to the
//! console, which makes scope-based release visible in the transcript.

use std::cell::Cell;
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::console::Console;

pub fn demonstrate(console: &Console) {
    let mut original = 42;
    console.println(format!("Original: {}", original));
    {
        let reference = &mut original;
        console.println(format!("Reference: {}", reference));
        *reference = 100;
    }
    console.println(format!(
        "After modifying reference, original: {}",
        original
    ));

    let mut value = 42;
    console.println(format!("Value: {}", value));
    {
        let pointer = &mut value;
        console.println(format!("Pointer address: {:p}", pointer));
        console.println(format!("Dereferenced pointer: {}", *pointer));
        *pointer = 200;
    }
    console.println(format!("After modifying pointer, value: {}", value));

    // Several shared handles may mutate through a Cell
    let shared = Cell::new(7);
    let first = &shared;
    let second = &shared;
    first.set(8);
    console.println(format!(
        "Shared through Cell: first={}, second={}",
        first.get(),
        second.get()
    ));

    {
        let smart = Owned::new(console, "Smart pointer", 42);
        console.println(format!("Smart pointer value: {}", *smart));
    }
    console.println("Smart pointer left its scope");

    if read_or_bail(console, true).is_none() {
        console.println("Early return still released the allocation");
    }
}

/// Allocates, then leaves early when `bail` is set
pub fn read_or_bail(console: &Console, bail: bool) -> Option<i32> {
    let owned = Owned::new(console, "Early return", 7);
    if bail {
        return None;
    }
    Some(*owned)
}

/// A boxed value that announces its allocation and release
pub struct Owned<T: fmt::Display> {
    value: Box<T>,
    label: &'static str,
    console: Console,
}

impl<T: fmt::Display> Owned<T> {
    pub fn new(console: &Console, label: &'static str, value: T) -> Self {
        console.println(format!("{}: allocated {}", label, value));
        Owned {
            value: Box::new(value),
            label,
            console: console.clone(),
        }
    }
}

impl<T: fmt::Display> Deref for Owned<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display> DerefMut for Owned<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: fmt::Display> Drop for Owned<T> {
    fn drop(&mut self) {
        self.console
            .println(format!("{}: released {}", self.label, self.value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_at_scope_end() {
        let console = Console::new();
        {
            let mut owned = Owned::new(&console, "Box", 1);
            *owned += 1;
            console.println("in scope");
        }

        assert_eq!(
            console.get_output(),
            vec!["Box: allocated 1", "in scope", "Box: released 2"]
        );
    }

    #[test]
    fn test_release_on_early_return() {
        let console = Console::new();
        assert_eq!(read_or_bail(&console, true), None);
        assert_eq!(read_or_bail(&console, false), Some(7));

        let released = console
            .get_output()
            .iter()
            .filter(|line| line.as_str() == "Early return: released 7")
            .count();
        assert_eq!(released, 2);
    }
}
