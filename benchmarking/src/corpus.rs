use crate::BenchmarkParams;
use rand::Rng;
use rand_distr::StandardNormal;
use vectors::DenseVector;

/// `num_vectors` dense vectors whose components are drawn independently from
/// a standard normal distribution.
pub fn generate_corpus<R: Rng>(params: &BenchmarkParams, rng: &mut R) -> Vec<DenseVector> {
    (0..params.num_vectors)
        .map(|_| {
            let values: Vec<f64> = (0..params.cardinality)
                .map(|_| rng.sample::<f64, _>(StandardNormal))
                .collect();
            DenseVector::from_vec(values)
        })
        .collect()
}
