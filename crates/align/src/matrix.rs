use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AlignError;

/// Pairwise cosine similarities between two normalized vector sequences.
///
/// Row `i`, column `j` holds the similarity between step `i` of the query
/// protocol and step `j` of the candidate. Entries are clamped to `[-1, 1]`
/// to absorb floating-point drift, and serialize as a plain 2-D array of
/// floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct SimilarityMatrix {
  values: Vec<Vec<f32>>,
}

impl SimilarityMatrix {
  /// Build the full matrix of dot products, O(n_a · n_b · D).
  ///
  /// Both inputs must already be unit-normalized, so the dot product is the
  /// cosine similarity.
  pub(crate) fn build(a: &[Vec<f32>], b: &[Vec<f32>]) -> Result<Self, AlignError> {
    let dim_a = a.first().map_or(0, Vec::len);
    let dim_b = b.first().map_or(0, Vec::len);
    if dim_a != dim_b {
      return Err(AlignError::DimensionMismatch {
        expected: dim_a,
        got: dim_b,
      });
    }

    let values = a
      .iter()
      .map(|row| {
        b.iter()
          .map(|col| dot(row, col).clamp(-1.0, 1.0))
          .collect()
      })
      .collect();

    Ok(Self { values })
  }

  #[cfg(test)]
  pub(crate) fn from_values(values: Vec<Vec<f32>>) -> Self {
    Self { values }
  }

  #[must_use]
  pub fn rows(&self) -> usize {
    self.values.len()
  }

  #[must_use]
  pub fn cols(&self) -> usize {
    self.values.first().map_or(0, Vec::len)
  }

  #[must_use]
  pub fn get(&self, row: usize, col: usize) -> f32 {
    self.values[row][col]
  }

  #[must_use]
  pub fn values(&self) -> &[Vec<f32>] {
    &self.values
  }
}

/// Dot product with f64 accumulation.
fn dot(a: &[f32], b: &[f32]) -> f32 {
  let acc = a
    .iter()
    .zip(b.iter())
    .fold(0.0_f64, |acc, (&x, &y)| f64::from(x).mul_add(f64::from(y), acc));
  acc as f32
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builds_cosine_matrix() {
    let a = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    let b = vec![vec![1.0, 0.0]];
    let matrix = SimilarityMatrix::build(&a, &b).unwrap();

    assert_eq!(matrix.rows(), 2);
    assert_eq!(matrix.cols(), 1);
    assert!((matrix.get(0, 0) - 1.0).abs() < 1e-6);
    assert!(matrix.get(1, 0).abs() < 1e-6);
  }

  #[test]
  fn rejects_dimension_mismatch() {
    let a = vec![vec![1.0, 0.0, 0.0]];
    let b = vec![vec![1.0, 0.0]];
    assert_eq!(
      SimilarityMatrix::build(&a, &b).unwrap_err(),
      AlignError::DimensionMismatch { expected: 3, got: 2 }
    );
  }

  #[test]
  fn entries_are_clamped_to_unit_interval() {
    // Slightly over-unit vectors, as produced by f32 rounding.
    let v = vec![vec![1.000_000_2, 0.0]];
    let matrix = SimilarityMatrix::build(&v, &v).unwrap();
    assert!(matrix.get(0, 0) <= 1.0);
  }
}
