use crate::SimilarityMatrix;

/// Reduce the matrix and its matching to a single score in `[0, 1]`.
///
/// Negative similarities are clamped to zero before summing: an
/// opposite-direction step vector counts as "no match", not anti-similarity.
/// The sum is divided by the larger step count, so every unmatched step
/// contributes an implicit zero and a length mismatch is penalized the same
/// whichever input is longer. Swapping the inputs transposes the matrix but
/// leaves both the matching weight and the denominator unchanged, making the
/// score symmetric.
pub(crate) fn aggregate(matrix: &SimilarityMatrix, pairs: &[(usize, usize)]) -> f32 {
  let larger = matrix.rows().max(matrix.cols());
  if larger == 0 {
    return 0.0;
  }

  let sum: f64 = pairs
    .iter()
    .map(|&(i, j)| f64::from(matrix.get(i, j).max(0.0)))
    .sum();

  ((sum / larger as f64) as f32).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn divides_by_larger_side() {
    let matrix = SimilarityMatrix::from_values(vec![vec![1.0, 0.0, 0.4], vec![0.0, 1.0, 0.2]]);
    let score = aggregate(&matrix, &[(0, 0), (1, 1)]);
    assert!((score - 2.0 / 3.0).abs() < 1e-6);
  }

  #[test]
  fn clamps_negative_similarities() {
    let matrix = SimilarityMatrix::from_values(vec![vec![-1.0]]);
    assert_eq!(aggregate(&matrix, &[(0, 0)]), 0.0);
  }

  #[test]
  fn perfect_matching_scores_one() {
    let matrix = SimilarityMatrix::from_values(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    assert_eq!(aggregate(&matrix, &[(0, 0), (1, 1)]), 1.0);
  }
}
