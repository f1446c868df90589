//! `Vec` and hash map operations with iterator algorithms

use rustc_hash::FxHashMap;

use crate::console::Console;

pub fn demonstrate(console: &Console) {
    let mut numbers = vec![10, 20, 30, 40, 50];
    push_then_pop(&mut numbers, 60);
    console.print_sequence("Vector elements", &numbers);

    let ages = ages();
    console.println("Map elements:");
    for (name, age) in sorted_entries(&ages) {
        console.println(format!("{}: {}", name, age));
    }
    if let Some(age) = ages.get("Bob") {
        console.println(format!("Lookup Bob: {}", age));
    }

    match find_position(&numbers, 30) {
        Some(index) => console.println(format!(
            "Find 30 in vector: Found at position {}",
            index
        )),
        None => console.println("Find 30 in vector: Not found"),
    }

    let unsorted = vec![50, 10, 40, 20, 30];
    console.print_sequence("Unsorted vector", &unsorted);
    let ascending = sorted(unsorted);
    console.print_sequence("Sorted vector", &ascending);

    console.print_sequence("Doubled vector", &doubled(&ascending));
}

/// Push `extra` and pop it again, returning the popped value
pub fn push_then_pop(numbers: &mut Vec<i32>, extra: i32) -> Option<i32> {
    numbers.push(extra);
    numbers.pop()
}

pub fn find_position(numbers: &[i32], target: i32) -> Option<usize> {
    numbers.iter().position(|&n| n == target)
}

pub fn sorted(mut values: Vec<i32>) -> Vec<i32> {
    values.sort_unstable();
    values
}

pub fn doubled(values: &[i32]) -> Vec<i32> {
    values.iter().map(|x| x * 2).collect()
}

pub fn ages() -> FxHashMap<&'static str, u32> {
    let mut ages = FxHashMap::default();
    ages.insert("Alice", 30);
    ages.insert("Bob", 25);
    ages.insert("Charlie", 35);
    ages
}

/// Map entries ordered by key; hash maps iterate in arbitrary order
pub fn sorted_entries<'a>(map: &FxHashMap<&'a str, u32>) -> Vec<(&'a str, u32)> {
    let mut entries: Vec<(&str, u32)> =
        map.iter().map(|(name, age)| (*name, *age)).collect();
    entries.sort_unstable();
    entries
}
