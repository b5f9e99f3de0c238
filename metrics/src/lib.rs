use vectors::Vector;

/// A scalar dissimilarity between two vectors of the same cardinality.
pub trait DistanceMeasure {
    fn name(&self) -> &'static str;
    fn distance(&self, a: &Vector, b: &Vector) -> f64;
}

pub fn squared_euc(a: &Vector, b: &Vector) -> f64 {
    a.fold_pairwise(b, 0.0, |acc, x, y| acc + (x - y).powi(2))
}

pub fn euc(a: &Vector, b: &Vector) -> f64 {
    f64::sqrt(squared_euc(a, b))
}

pub fn manhattan(a: &Vector, b: &Vector) -> f64 {
    a.fold_pairwise(b, 0.0, |acc, x, y| acc + (x - y).abs())
}

pub fn cosine(a: &Vector, b: &Vector) -> f64 {
    let dot = a.dot(b);
    let mut denominator = f64::sqrt(a.length_squared()) * f64::sqrt(b.length_squared());

    // rounding can push the product of the norms just below the dot product
    if denominator < dot {
        denominator = dot;
    }
    if denominator == 0.0 && dot == 0.0 {
        return 0.0;
    }
    1.0 - dot / denominator
}

pub fn tanimoto(a: &Vector, b: &Vector) -> f64 {
    let dot = a.dot(b);
    let mut denominator = a.length_squared() + b.length_squared() - dot;

    if denominator < dot {
        denominator = dot;
    }
    if denominator > 0.0 {
        1.0 - dot / denominator
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CosineDistanceMeasure;

#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredEuclideanDistanceMeasure;

#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanDistanceMeasure;

#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanDistanceMeasure;

#[derive(Debug, Clone, Copy, Default)]
pub struct TanimotoDistanceMeasure;

impl DistanceMeasure for CosineDistanceMeasure {
    fn name(&self) -> &'static str {
        "CosineDistanceMeasure"
    }

    fn distance(&self, a: &Vector, b: &Vector) -> f64 {
        cosine(a, b)
    }
}

impl DistanceMeasure for SquaredEuclideanDistanceMeasure {
    fn name(&self) -> &'static str {
        "SquaredEuclideanDistanceMeasure"
    }

    fn distance(&self, a: &Vector, b: &Vector) -> f64 {
        squared_euc(a, b)
    }
}

impl DistanceMeasure for EuclideanDistanceMeasure {
    fn name(&self) -> &'static str {
        "EuclideanDistanceMeasure"
    }

    fn distance(&self, a: &Vector, b: &Vector) -> f64 {
        euc(a, b)
    }
}

impl DistanceMeasure for ManhattanDistanceMeasure {
    fn name(&self) -> &'static str {
        "ManhattanDistanceMeasure"
    }

    fn distance(&self, a: &Vector, b: &Vector) -> f64 {
        manhattan(a, b)
    }
}

impl DistanceMeasure for TanimotoDistanceMeasure {
    fn name(&self) -> &'static str {
        "TanimotoDistanceMeasure"
    }

    fn distance(&self, a: &Vector, b: &Vector) -> f64 {
        tanimoto(a, b)
    }
}

/// The five measures in the order the benchmarks run them.
pub fn standard_measures() -> Vec<Box<dyn DistanceMeasure>> {
    vec![
        Box::new(CosineDistanceMeasure),
        Box::new(SquaredEuclideanDistanceMeasure),
        Box::new(EuclideanDistanceMeasure),
        Box::new(ManhattanDistanceMeasure),
        Box::new(TanimotoDistanceMeasure),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use vectors::{DenseVector, VectorKind};

    const EPS: f64 = 1e-12;

    fn pair(kind: VectorKind) -> (Vector, Vector) {
        let a = DenseVector::from_vec(vec![1.0, 0.0, 2.0, 0.0]);
        let b = DenseVector::from_vec(vec![0.0, 3.0, 2.0, 0.0]);
        (Vector::from_dense(kind, &a), Vector::from_dense(kind, &b))
    }

    #[test_case(VectorKind::Dense)]
    #[test_case(VectorKind::RandomAccessSparse)]
    #[test_case(VectorKind::SequentialAccessSparse)]
    fn euclidean_family(kind: VectorKind) {
        let (a, b) = pair(kind);
        assert_eq!(squared_euc(&a, &b), 10.0);
        assert!((euc(&a, &b) - 10f64.sqrt()).abs() < EPS);
        assert_eq!(manhattan(&a, &b), 4.0);
    }

    #[test_case(VectorKind::Dense)]
    #[test_case(VectorKind::RandomAccessSparse)]
    #[test_case(VectorKind::SequentialAccessSparse)]
    fn cosine_and_tanimoto(kind: VectorKind) {
        let (a, b) = pair(kind);
        // dot = 4, |a|^2 = 5, |b|^2 = 13
        assert!((cosine(&a, &b) - (1.0 - 4.0 / 65f64.sqrt())).abs() < EPS);
        assert!((tanimoto(&a, &b) - (1.0 - 4.0 / 14.0)).abs() < EPS);
    }

    #[test]
    fn self_distance_is_zero() {
        let (a, _) = pair(VectorKind::SequentialAccessSparse);
        for measure in standard_measures() {
            assert!(measure.distance(&a, &a).abs() < EPS, "{}", measure.name());
        }
    }

    #[test]
    fn zero_vectors() {
        let zero = Vector::new(VectorKind::RandomAccessSparse, 4);
        assert_eq!(cosine(&zero, &zero), 0.0);
        assert_eq!(tanimoto(&zero, &zero), 0.0);
        assert_eq!(euc(&zero, &zero), 0.0);
    }

    #[test]
    fn mixed_kinds_agree() {
        let (a, _) = pair(VectorKind::Dense);
        let (_, b) = pair(VectorKind::RandomAccessSparse);
        assert_eq!(squared_euc(&a, &b), 10.0);
        assert_eq!(manhattan(&b, &a), 4.0);
    }

    #[test]
    fn standard_order() {
        let names: Vec<&str> = standard_measures().iter().map(|m| m.name()).collect();
        assert_eq!(
            names,
            [
                "CosineDistanceMeasure",
                "SquaredEuclideanDistanceMeasure",
                "EuclideanDistanceMeasure",
                "ManhattanDistanceMeasure",
                "TanimotoDistanceMeasure",
            ]
        );
    }
}
