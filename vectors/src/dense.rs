use ndarray::Array1;

/// A vector holding every component explicitly, zeros included.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseVector {
    values: Array1<f64>,
}

impl DenseVector {
    pub fn new(cardinality: usize) -> Self {
        Self {
            values: Array1::zeros(cardinality),
        }
    }

    pub fn from_vec(values: Vec<f64>) -> Self {
        Self {
            values: Array1::from_vec(values),
        }
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn cardinality(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, index: usize) -> f64 {
        assert!(index < self.cardinality(), "index {index} out of bounds");
        self.values[index]
    }

    pub fn set(&mut self, index: usize, value: f64) {
        assert!(index < self.cardinality(), "index {index} out of bounds");
        self.values[index] = value;
    }

    pub fn num_non_zero(&self) -> usize {
        self.values.iter().filter(|&&x| x != 0.0).count()
    }

    pub fn iter_non_zero(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, &x)| x != 0.0)
            .map(|(i, &x)| (i, x))
    }

    pub fn dot(&self, other: &Self) -> f64 {
        assert!(self.cardinality() == other.cardinality());
        self.values.dot(&other.values)
    }

    pub fn length_squared(&self) -> f64 {
        self.values.dot(&self.values)
    }
}

impl From<Array1<f64>> for DenseVector {
    fn from(values: Array1<f64>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let v = DenseVector::new(5);
        assert_eq!(v.cardinality(), 5);
        assert_eq!(v.num_non_zero(), 0);
        assert!((0..5).all(|i| v.get(i) == 0.0));
    }

    #[test]
    fn set_and_get() {
        let mut v = DenseVector::new(3);
        v.set(1, 2.5);
        assert_eq!(v.get(1), 2.5);
        assert_eq!(v.iter_non_zero().collect::<Vec<_>>(), vec![(1, 2.5)]);
    }

    #[test]
    fn dot_and_length() {
        let a = DenseVector::from_vec(vec![1.0, 2.0, 3.0]);
        let b = DenseVector::from_vec(vec![4.0, -5.0, 6.0]);
        assert_eq!(a.dot(&b), 12.0);
        assert_eq!(a.length_squared(), 14.0);
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds_panics() {
        DenseVector::new(2).get(2);
    }

    #[test]
    #[should_panic]
    fn dot_of_mismatched_cardinality_panics() {
        DenseVector::new(2).dot(&DenseVector::new(3));
    }
}
