use std::collections::HashMap;

/// A sparse vector keeping its non-zero components in a hash map, giving
/// constant time lookup by index.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomAccessSparseVector {
    cardinality: usize,
    values: HashMap<usize, f64>,
}

impl RandomAccessSparseVector {
    pub fn new(cardinality: usize) -> Self {
        Self {
            cardinality,
            values: HashMap::new(),
        }
    }

    pub fn with_capacity(cardinality: usize, capacity: usize) -> Self {
        Self {
            cardinality,
            values: HashMap::with_capacity(capacity),
        }
    }

    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    pub fn get(&self, index: usize) -> f64 {
        assert!(index < self.cardinality, "index {index} out of bounds");
        self.values.get(&index).copied().unwrap_or(0.0)
    }

    /// Zeros are never stored: setting a component to 0 removes it.
    pub fn set(&mut self, index: usize, value: f64) {
        assert!(index < self.cardinality, "index {index} out of bounds");
        if value == 0.0 {
            self.values.remove(&index);
        } else {
            self.values.insert(index, value);
        }
    }

    pub fn num_non_zero(&self) -> usize {
        self.values.len()
    }

    /// Non-zero components in no particular order.
    pub fn iter_non_zero(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values.iter().map(|(&i, &x)| (i, x))
    }

    pub fn dot(&self, other: &Self) -> f64 {
        assert!(self.cardinality == other.cardinality);
        // look up the smaller map's entries in the larger one
        let (small, large) = if self.values.len() <= other.values.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .values
            .iter()
            .filter_map(|(i, x)| large.values.get(i).map(|y| x * y))
            .sum()
    }

    pub fn length_squared(&self) -> f64 {
        self.values.values().map(|x| x * x).sum()
    }
}
