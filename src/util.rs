//! Array generation and shuffling.
//!
//! The session array is always some shuffle of 1..=n, so every bar height
//! is distinct and the tallest bar spans the full chart.

use rand::Rng;

use crate::types::Value;

/// The values 1..=len, ascending.
pub fn sequence(len: usize) -> Vec<Value> {
    (1..=len as Value).collect()
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle(values: &mut [Value]) {
    let mut rng = rand::rng();
    for i in (1..values.len()).rev() {
        let j = rng.random_range(0..=i);
        values.swap(i, j);
    }
}

/// A fresh shuffle of 1..=len.
pub fn shuffled_sequence(len: usize) -> Vec<Value> {
    let mut values = sequence(len);
    shuffle(&mut values);
    values
}

// =============================================================================
// Tests
// =============================================================================
