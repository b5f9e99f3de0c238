// Benchmark phases
// Each phase takes its state explicitly and hands back what it produced.

use crate::report::{Accumulated, PhaseReport};
use crate::BenchmarkParams;
use anyhow::{ensure, Result};
use metrics::{standard_measures, DistanceMeasure};
use std::hint::black_box;
use std::mem;
use utils::TimingStatistics;
use vectors::{DenseVector, Vector, VectorKind};

/// One row of vectors per [`VectorKind`], `num_vectors` wide.
#[derive(Debug, Clone, PartialEq)]
pub struct RepresentationMatrix {
    rows: [Vec<Vector>; 3],
}

impl RepresentationMatrix {
    pub fn row(&self, kind: VectorKind) -> &[Vector] {
        &self.rows[row_index(kind)]
    }

    fn row_mut(&mut self, kind: VectorKind) -> &mut [Vector] {
        &mut self.rows[row_index(kind)]
    }

    pub fn num_vectors(&self) -> usize {
        self.rows[0].len()
    }
}

fn row_index(kind: VectorKind) -> usize {
    match kind {
        VectorKind::Dense => 0,
        VectorKind::RandomAccessSparse => 1,
        VectorKind::SequentialAccessSparse => 2,
    }
}

/// Reports from a phase that accumulates a scalar, along with the final total.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseOutcome {
    pub result: f64,
    pub reports: Vec<PhaseReport>,
}

/// Everything a full run produced.
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    pub matrix: RepresentationMatrix,
    pub reports: Vec<PhaseReport>,
    pub dot_sum: f64,
    pub min_distance_sums: Vec<(&'static str, f64)>,
}

/// Times building each kind of vector from the corpus. Only the vectors built
/// on the last loop survive into the returned matrix.
pub fn create_benchmark(
    params: &BenchmarkParams,
    corpus: &[DenseVector],
) -> (RepresentationMatrix, Vec<PhaseReport>) {
    let mut reports = Vec::with_capacity(VectorKind::ALL.len());

    let rows = VectorKind::ALL.map(|kind| {
        let mut row: Vec<Vector> = (0..params.num_vectors)
            .map(|_| Vector::new(kind, params.cardinality))
            .collect();
        let mut stats = TimingStatistics::new();

        for _ in 0..params.loop_count {
            for (slot, source) in row.iter_mut().zip(&corpus[..params.num_vectors]) {
                let call = stats.new_call();
                let previous = mem::replace(slot, black_box(Vector::from_dense(kind, source)));
                call.end();
                drop(previous);
            }
        }

        reports.push(PhaseReport::new("Create", kind, None, stats.snapshot(), params));
        row
    });

    (RepresentationMatrix { rows }, reports)
}

/// Times duplicating every vector, writing each copy back over its original.
pub fn clone_benchmark(
    params: &BenchmarkParams,
    mut matrix: RepresentationMatrix,
) -> (RepresentationMatrix, Vec<PhaseReport>) {
    let mut reports = Vec::with_capacity(VectorKind::ALL.len());

    for kind in VectorKind::ALL {
        let row = matrix.row_mut(kind);
        let mut stats = TimingStatistics::new();

        for _ in 0..params.loop_count {
            for slot in row.iter_mut() {
                let call = stats.new_call();
                let copy = black_box(slot.clone());
                let previous = mem::replace(slot, copy);
                call.end();
                drop(previous);
            }
        }

        reports.push(PhaseReport::new("Clone", kind, None, stats.snapshot(), params));
    }

    (matrix, reports)
}

/// Times the dot product of each vector with its successor, wrapping from the
/// last vector back to the first.
pub fn dot_benchmark(params: &BenchmarkParams, matrix: &RepresentationMatrix) -> PhaseOutcome {
    let n = params.num_vectors;
    let mut result = 0.0;
    let mut reports = Vec::with_capacity(VectorKind::ALL.len());

    for kind in VectorKind::ALL {
        let row = matrix.row(kind);
        let mut stats = TimingStatistics::new();

        for _ in 0..params.loop_count {
            for i in 0..n {
                let call = stats.new_call();
                result += black_box(row[i].dot(&row[(i + 1) % n]));
                call.end();
            }
        }

        let accumulated = Accumulated {
            name: "sum",
            value: black_box(result),
        };
        reports.push(PhaseReport::new(
            "DotProduct",
            kind,
            Some(accumulated),
            stats.snapshot(),
            params,
        ));
    }

    PhaseOutcome { result, reports }
}

/// Times, for each vector, a scan for its minimum distance to the first
/// `ops_per_unit` vectors of the same row. The whole scan is one timed unit.
///
/// Panics if `ops_per_unit` exceeds the row length; [`BenchmarkParams::validate`]
/// rules that out before a run.
pub fn distance_measure_benchmark(
    params: &BenchmarkParams,
    matrix: &RepresentationMatrix,
    measure: &dyn DistanceMeasure,
) -> PhaseOutcome {
    let label = format!("DistanceMeasure {}", measure.name());
    let mut result = 0.0;
    let mut reports = Vec::with_capacity(VectorKind::ALL.len());

    for kind in VectorKind::ALL {
        let row = matrix.row(kind);
        let mut stats = TimingStatistics::new();

        for _ in 0..params.loop_count {
            for i in 0..params.num_vectors {
                let call = stats.new_call();
                let mut min_distance = f64::MAX;
                for u in 0..params.ops_per_unit {
                    let distance = measure.distance(&row[i], &row[u]);
                    if distance < min_distance {
                        min_distance = distance;
                    }
                }
                result += black_box(min_distance);
                call.end();
            }
        }

        let accumulated = Accumulated {
            name: "minDistance",
            value: black_box(result),
        };
        reports.push(PhaseReport::new(
            label.as_str(),
            kind,
            Some(accumulated),
            stats.snapshot(),
            params,
        ));
    }

    PhaseOutcome { result, reports }
}

fn log_reports(reports: &[PhaseReport]) {
    for report in reports {
        log::info!("{report}");
    }
}

/// Runs every phase in order: create, clone, dot, then the distance phase for
/// each of the standard measures.
pub fn run_benchmarks(params: &BenchmarkParams, corpus: &[DenseVector]) -> Result<BenchmarkRun> {
    params.validate()?;
    ensure!(
        corpus.len() == params.num_vectors,
        "corpus holds {} vectors, expected {}",
        corpus.len(),
        params.num_vectors
    );
    ensure!(
        corpus.iter().all(|v| v.cardinality() == params.cardinality),
        "corpus vectors must all have cardinality {}",
        params.cardinality
    );

    log::debug!("Running vector benchmarks with {params:?}");
    let mut reports = vec![];

    let (matrix, created) = create_benchmark(params, corpus);
    log_reports(&created);
    reports.extend(created);

    let (matrix, cloned) = clone_benchmark(params, matrix);
    log_reports(&cloned);
    reports.extend(cloned);

    let dot = dot_benchmark(params, &matrix);
    log_reports(&dot.reports);
    reports.extend(dot.reports);

    let mut min_distance_sums = vec![];
    for measure in standard_measures() {
        let outcome = distance_measure_benchmark(params, &matrix, measure.as_ref());
        log_reports(&outcome.reports);
        reports.extend(outcome.reports);
        min_distance_sums.push((measure.name(), outcome.result));
    }

    Ok(BenchmarkRun {
        matrix,
        reports,
        dot_sum: dot.result,
        min_distance_sums,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics::{EuclideanDistanceMeasure, ManhattanDistanceMeasure};
    use test_case::test_case;

    fn params(num_vectors: usize, loop_count: usize, ops_per_unit: usize) -> BenchmarkParams {
        BenchmarkParams {
            cardinality: 3,
            num_vectors,
            loop_count,
            ops_per_unit,
        }
    }

    fn corpus(num_vectors: usize) -> Vec<DenseVector> {
        (0..num_vectors)
            .map(|i| {
                let i = i as f64;
                DenseVector::from_vec(vec![i + 1.0, 0.0, 2.0 * i - 1.0])
            })
            .collect()
    }

    #[test_case(1, 1)]
    #[test_case(4, 1)]
    #[test_case(4, 3)]
    fn create_copies_corpus_into_every_row(num_vectors: usize, loop_count: usize) {
        let p = params(num_vectors, loop_count, 1);
        let corpus = corpus(num_vectors);
        let (matrix, reports) = create_benchmark(&p, &corpus);

        assert_eq!(matrix.num_vectors(), num_vectors);
        for kind in VectorKind::ALL {
            let row = matrix.row(kind);
            assert_eq!(row.len(), num_vectors);
            for (v, source) in row.iter().zip(&corpus) {
                assert_eq!(v.kind(), kind);
                assert_eq!(&v.to_dense(), source);
            }
        }

        assert_eq!(reports.len(), 3);
        for (report, kind) in reports.iter().zip(VectorKind::ALL) {
            assert_eq!(report.kind, kind);
            assert_eq!(report.label, "Create");
            assert_eq!(report.stats.calls, (num_vectors * loop_count) as u64);
            assert!(report.accumulated.is_none());
        }
    }

    #[test]
    fn clone_leaves_components_unchanged() {
        let p = params(3, 5, 1);
        let (matrix, _) = create_benchmark(&p, &corpus(3));
        let before = matrix.clone();

        let (matrix, reports) = clone_benchmark(&p, matrix);

        assert_eq!(matrix, before);
        assert!(reports.iter().all(|r| r.stats.calls == 15 && r.label == "Clone"));
    }

    #[test]
    fn dot_pairs_single_vector_with_itself() {
        let p = params(1, 1, 1);
        let corpus = corpus(1);
        let (matrix, _) = create_benchmark(&p, &corpus);
        let outcome = dot_benchmark(&p, &matrix);

        // [1, 0, -1] . [1, 0, -1] for each of the three kinds
        assert_eq!(outcome.result, 6.0);
        let sums: Vec<f64> = outcome
            .reports
            .iter()
            .map(|r| r.accumulated.unwrap().value)
            .collect();
        assert_eq!(sums, vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn dot_wraps_last_to_first() {
        let p = params(3, 1, 1);
        let corpus = corpus(3);
        let (matrix, _) = create_benchmark(&p, &corpus);
        let outcome = dot_benchmark(&p, &matrix);

        let expected = corpus[0].dot(&corpus[1])
            + corpus[1].dot(&corpus[2])
            + corpus[2].dot(&corpus[0]);
        assert_eq!(outcome.reports[0].accumulated.unwrap().value, expected);
        assert_eq!(outcome.result, 3.0 * expected);
    }

    #[test]
    fn distance_takes_minimum_over_leading_vectors() {
        let p = params(3, 2, 2);
        let corpus = corpus(3);
        let (matrix, _) = create_benchmark(&p, &corpus);
        let outcome = distance_measure_benchmark(&p, &matrix, &ManhattanDistanceMeasure);

        // vectors are [1,0,-1], [2,0,1], [3,0,3]; only the first two are scanned
        // min distances: 0, 0, min(6, 3) = 3
        let per_loop = 3.0;
        let sums: Vec<f64> = outcome
            .reports
            .iter()
            .map(|r| r.accumulated.unwrap().value)
            .collect();
        assert_eq!(sums, vec![2.0 * per_loop, 4.0 * per_loop, 6.0 * per_loop]);
        assert!(outcome.reports.iter().all(|r| r.stats.calls == 6));
        assert!(outcome.reports[0].label.ends_with("ManhattanDistanceMeasure"));
    }

    #[test]
    #[should_panic]
    fn distance_with_too_many_ops_is_out_of_bounds() {
        let p = params(2, 1, 3);
        let (matrix, _) = create_benchmark(&p, &corpus(2));
        distance_measure_benchmark(&p, &matrix, &EuclideanDistanceMeasure);
    }

    #[test]
    fn run_rejects_too_many_ops() {
        let p = params(2, 1, 3);
        assert!(run_benchmarks(&p, &corpus(2)).is_err());
    }

    #[test]
    fn run_with_zero_loops_reports_undefined_rates() {
        let p = params(2, 0, 1);
        let run = run_benchmarks(&p, &corpus(2)).unwrap();

        assert_eq!(run.reports.len(), 24);
        for report in &run.reports {
            assert_eq!(report.stats.calls, 0);
            assert!(report.units_per_sec.is_nan());
            assert!(report.mb_per_sec.is_nan());
        }
        assert_eq!(run.dot_sum, 0.0);
    }

    #[test]
    fn run_rejects_zero_vectors() {
        let p = params(0, 1, 0);
        let err = run_benchmarks(&p, &[]).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn run_rejects_mismatched_corpus() {
        let p = params(2, 1, 1);
        assert!(run_benchmarks(&p, &corpus(3)).is_err());

        let wrong_width = vec![DenseVector::new(5), DenseVector::new(5)];
        assert!(run_benchmarks(&p, &wrong_width).is_err());
    }

    #[test]
    fn run_executes_phases_in_order() {
        let p = params(3, 2, 2);
        let run = run_benchmarks(&p, &corpus(3)).unwrap();

        let labels: Vec<&str> = run.reports.iter().step_by(3).map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Create",
                "Clone",
                "DotProduct",
                "DistanceMeasure CosineDistanceMeasure",
                "DistanceMeasure SquaredEuclideanDistanceMeasure",
                "DistanceMeasure EuclideanDistanceMeasure",
                "DistanceMeasure ManhattanDistanceMeasure",
                "DistanceMeasure TanimotoDistanceMeasure",
            ]
        );
        assert_eq!(run.reports.len(), 24);
        assert_eq!(run.min_distance_sums.len(), 5);
        assert_eq!(run.min_distance_sums[3], ("ManhattanDistanceMeasure", 18.0));
    }
}
