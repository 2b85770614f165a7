//! Counting and display helpers for parsed card numbers

use std::collections::HashMap;

/// Count occurrences of each card number.
pub fn count_cards(numbers: &[i64]) -> HashMap<i64, i64> {
    let mut counts = HashMap::new();
    for &n in numbers {
        *counts.entry(n).or_insert(0) += 1;
    }
    counts
}

/// Render the "Have:" line: ascending unique values, with an `x{count}`
/// suffix when a number was heard more than once.
pub fn format_summary(numbers: &[i64]) -> String {
    let counts = count_cards(numbers);
    let mut unique: Vec<i64> = counts.keys().copied().collect();
    unique.sort_unstable();

    let parts: Vec<String> = unique
        .iter()
        .map(|n| {
            let count = counts[n];
            if count > 1 {
                format!("{n} x{count}")
            } else {
                n.to_string()
            }
        })
        .collect();
    format!("Have: {}", parts.join(", "))
}
