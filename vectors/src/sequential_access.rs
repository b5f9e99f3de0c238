use std::cmp::Ordering;

/// A sparse vector keeping its non-zero components as parallel arrays sorted
/// by index. Lookup is a binary search; iteration is in index order.
#[derive(Debug, Clone, PartialEq)]
pub struct SequentialAccessSparseVector {
    cardinality: usize,
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SequentialAccessSparseVector {
    pub fn new(cardinality: usize) -> Self {
        Self {
            cardinality,
            indices: vec![],
            values: vec![],
        }
    }

    /// Builds from `(index, value)` pairs already in ascending index order.
    /// Zero values are skipped.
    pub fn from_sorted(
        cardinality: usize,
        components: impl Iterator<Item = (usize, f64)>,
    ) -> Self {
        let mut v = Self::new(cardinality);
        for (index, value) in components.filter(|&(_, x)| x != 0.0) {
            assert!(index < cardinality, "index {index} out of bounds");
            assert!(
                v.indices.last().map_or(true, |&last| last < index),
                "components not in ascending index order"
            );
            v.indices.push(index);
            v.values.push(value);
        }
        v
    }

    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    pub fn get(&self, index: usize) -> f64 {
        assert!(index < self.cardinality, "index {index} out of bounds");
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    /// Zeros are never stored: setting a component to 0 removes it.
    pub fn set(&mut self, index: usize, value: f64) {
        assert!(index < self.cardinality, "index {index} out of bounds");
        match (self.indices.binary_search(&index), value == 0.0) {
            (Ok(pos), true) => {
                self.indices.remove(pos);
                self.values.remove(pos);
            }
            (Ok(pos), false) => self.values[pos] = value,
            (Err(_), true) => {}
            (Err(pos), false) => {
                self.indices.insert(pos, index);
                self.values.insert(pos, value);
            }
        }
    }

    pub fn num_non_zero(&self) -> usize {
        self.indices.len()
    }

    /// Non-zero components in ascending index order.
    pub fn iter_non_zero(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    pub fn dot(&self, other: &Self) -> f64 {
        assert!(self.cardinality == other.cardinality);
        let mut sum = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Folds `f(acc, a_i, b_i)` over every index present in either vector,
    /// walking both index lists in order.
    pub fn merge_fold<F>(&self, other: &Self, init: f64, mut f: F) -> f64
    where
        F: FnMut(f64, f64, f64) -> f64,
    {
        assert!(self.cardinality == other.cardinality);
        let mut acc = init;
        let (mut i, mut j) = (0, 0);
        loop {
            let left = self.indices.get(i);
            let right = other.indices.get(j);
            match (left, right) {
                (None, None) => break,
                (Some(_), None) => {
                    acc = f(acc, self.values[i], 0.0);
                    i += 1;
                }
                (None, Some(_)) => {
                    acc = f(acc, 0.0, other.values[j]);
                    j += 1;
                }
                (Some(a), Some(b)) => match a.cmp(b) {
                    Ordering::Less => {
                        acc = f(acc, self.values[i], 0.0);
                        i += 1;
                    }
                    Ordering::Greater => {
                        acc = f(acc, 0.0, other.values[j]);
                        j += 1;
                    }
                    Ordering::Equal => {
                        acc = f(acc, self.values[i], other.values[j]);
                        i += 1;
                        j += 1;
                    }
                },
            }
        }
        acc
    }

    pub fn length_squared(&self) -> f64 {
        self.values.iter().map(|x| x * x).sum()
    }
}
