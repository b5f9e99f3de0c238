// Vector representations
// Three interchangeable containers over a fixed-size index space.

mod dense;
mod random_access;
mod sequential_access;

pub use dense::DenseVector;
pub use random_access::RandomAccessSparseVector;
pub use sequential_access::SequentialAccessSparseVector;

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorKind {
    Dense,
    RandomAccessSparse,
    SequentialAccessSparse,
}

impl VectorKind {
    /// Every kind, in the order benchmark rows are laid out.
    pub const ALL: [VectorKind; 3] = [
        VectorKind::Dense,
        VectorKind::RandomAccessSparse,
        VectorKind::SequentialAccessSparse,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VectorKind::Dense => "DenseVector",
            VectorKind::RandomAccessSparse => "RandomAccessSparseVector",
            VectorKind::SequentialAccessSparse => "SequentialAccessSparseVector",
        }
    }
}

impl Display for VectorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A vector of any representation.
///
/// Duplication is `Clone`. Indices outside `[0, cardinality)` and operations
/// over vectors of different cardinality panic.
#[derive(Debug, Clone, PartialEq)]
pub enum Vector {
    Dense(DenseVector),
    RandomAccessSparse(RandomAccessSparseVector),
    SequentialAccessSparse(SequentialAccessSparseVector),
}

impl Vector {
    /// An all zero vector of the given kind.
    pub fn new(kind: VectorKind, cardinality: usize) -> Self {
        match kind {
            VectorKind::Dense => Vector::Dense(DenseVector::new(cardinality)),
            VectorKind::RandomAccessSparse => {
                Vector::RandomAccessSparse(RandomAccessSparseVector::new(cardinality))
            }
            VectorKind::SequentialAccessSparse => {
                Vector::SequentialAccessSparse(SequentialAccessSparseVector::new(cardinality))
            }
        }
    }

    /// Copies the contents of `source` into a new vector of the given kind.
    pub fn from_dense(kind: VectorKind, source: &DenseVector) -> Self {
        match kind {
            VectorKind::Dense => Vector::Dense(source.clone()),
            VectorKind::RandomAccessSparse => {
                let mut v = RandomAccessSparseVector::with_capacity(
                    source.cardinality(),
                    source.num_non_zero(),
                );
                source.iter_non_zero().for_each(|(i, x)| v.set(i, x));
                Vector::RandomAccessSparse(v)
            }
            VectorKind::SequentialAccessSparse => {
                Vector::SequentialAccessSparse(SequentialAccessSparseVector::from_sorted(
                    source.cardinality(),
                    source.iter_non_zero(),
                ))
            }
        }
    }

    pub fn kind(&self) -> VectorKind {
        match self {
            Vector::Dense(_) => VectorKind::Dense,
            Vector::RandomAccessSparse(_) => VectorKind::RandomAccessSparse,
            Vector::SequentialAccessSparse(_) => VectorKind::SequentialAccessSparse,
        }
    }

    pub fn cardinality(&self) -> usize {
        match self {
            Vector::Dense(v) => v.cardinality(),
            Vector::RandomAccessSparse(v) => v.cardinality(),
            Vector::SequentialAccessSparse(v) => v.cardinality(),
        }
    }

    pub fn get(&self, index: usize) -> f64 {
        match self {
            Vector::Dense(v) => v.get(index),
            Vector::RandomAccessSparse(v) => v.get(index),
            Vector::SequentialAccessSparse(v) => v.get(index),
        }
    }

    pub fn set(&mut self, index: usize, value: f64) {
        match self {
            Vector::Dense(v) => v.set(index, value),
            Vector::RandomAccessSparse(v) => v.set(index, value),
            Vector::SequentialAccessSparse(v) => v.set(index, value),
        }
    }

    pub fn num_non_zero(&self) -> usize {
        match self {
            Vector::Dense(v) => v.num_non_zero(),
            Vector::RandomAccessSparse(v) => v.num_non_zero(),
            Vector::SequentialAccessSparse(v) => v.num_non_zero(),
        }
    }

    /// Calls `f(index, value)` for each non-zero component.
    pub fn for_each_non_zero<F: FnMut(usize, f64)>(&self, mut f: F) {
        match self {
            Vector::Dense(v) => v.iter_non_zero().for_each(|(i, x)| f(i, x)),
            Vector::RandomAccessSparse(v) => v.iter_non_zero().for_each(|(i, x)| f(i, x)),
            Vector::SequentialAccessSparse(v) => v.iter_non_zero().for_each(|(i, x)| f(i, x)),
        }
    }

    pub fn to_dense(&self) -> DenseVector {
        match self {
            Vector::Dense(v) => v.clone(),
            _ => {
                let mut dense = DenseVector::new(self.cardinality());
                self.for_each_non_zero(|i, x| dense.set(i, x));
                dense
            }
        }
    }

    pub fn length_squared(&self) -> f64 {
        match self {
            Vector::Dense(v) => v.length_squared(),
            Vector::RandomAccessSparse(v) => v.length_squared(),
            Vector::SequentialAccessSparse(v) => v.length_squared(),
        }
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        assert!(
            self.cardinality() == other.cardinality(),
            "cardinality mismatch: {} vs {}",
            self.cardinality(),
            other.cardinality()
        );
        match (self, other) {
            (Vector::Dense(a), Vector::Dense(b)) => a.dot(b),
            (Vector::RandomAccessSparse(a), Vector::RandomAccessSparse(b)) => a.dot(b),
            (Vector::SequentialAccessSparse(a), Vector::SequentialAccessSparse(b)) => a.dot(b),
            _ => {
                // drive from whichever side has fewer non-zeros
                let (small, large) = if self.num_non_zero() <= other.num_non_zero() {
                    (self, other)
                } else {
                    (other, self)
                };
                let mut sum = 0.0;
                small.for_each_non_zero(|i, x| sum += x * large.get(i));
                sum
            }
        }
    }

    /// Folds `f(acc, a_i, b_i)` over the components of both vectors.
    ///
    /// Every index where either side is non-zero is visited exactly once;
    /// indices where both are zero may or may not be visited, so `f(acc, 0, 0)`
    /// must leave `acc` unchanged.
    pub fn fold_pairwise<F>(&self, other: &Vector, init: f64, mut f: F) -> f64
    where
        F: FnMut(f64, f64, f64) -> f64,
    {
        assert!(
            self.cardinality() == other.cardinality(),
            "cardinality mismatch: {} vs {}",
            self.cardinality(),
            other.cardinality()
        );
        match (self, other) {
            (Vector::Dense(a), Vector::Dense(b)) => a
                .values()
                .iter()
                .zip(b.values().iter())
                .fold(init, |acc, (&x, &y)| f(acc, x, y)),
            (Vector::SequentialAccessSparse(a), Vector::SequentialAccessSparse(b)) => {
                a.merge_fold(b, init, f)
            }
            _ => {
                let mut acc = init;
                self.for_each_non_zero(|i, x| acc = f(acc, x, other.get(i)));
                other.for_each_non_zero(|i, y| {
                    if self.get(i) == 0.0 {
                        acc = f(acc, 0.0, y);
                    }
                });
                acc
            }
        }
    }
}

impl From<DenseVector> for Vector {
    fn from(v: DenseVector) -> Self {
        Vector::Dense(v)
    }
}
