use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
  AlignError, ProtocolEmbedding, SimilarityMatrix, assignment, normalize, score,
};

/// One matched step pair and its cosine similarity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlignedPair {
  /// Step index in the query protocol.
  pub query_step: usize,
  /// Step index in the candidate protocol.
  pub candidate_step: usize,
  pub similarity: f32,
}

/// Immutable outcome of one comparison.
///
/// The alignment covers every step on the shorter side exactly once, sorted
/// by query step; the matrix is kept for downstream display and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComparisonResult {
  /// Aggregate similarity in `[0, 1]`.
  pub score: f32,
  pub alignment: Vec<AlignedPair>,
  pub matrix: SimilarityMatrix,
}

/// Compare two protocol embeddings step by step.
///
/// This is the sole public operation of the engine: normalize both
/// sequences, build the cosine similarity matrix, solve the optimal
/// one-to-one step matching, and aggregate it into a bounded score. Pure and
/// deterministic; a failure returns one typed error and no partial result.
pub fn compare(
  query: &ProtocolEmbedding,
  candidate: &ProtocolEmbedding,
) -> Result<ComparisonResult, AlignError> {
  if query.dim() != candidate.dim() {
    return Err(AlignError::DimensionMismatch {
      expected: query.dim(),
      got: candidate.dim(),
    });
  }

  let a = normalize::unit_normalize(query)?;
  let b = normalize::unit_normalize(candidate)?;

  let matrix = SimilarityMatrix::build(&a, &b)?;
  let pairs = assignment::solve(&matrix)?;
  let score = score::aggregate(&matrix, &pairs);

  let alignment = pairs
    .into_iter()
    .map(|(i, j)| AlignedPair {
      query_step: i,
      candidate_step: j,
      similarity: matrix.get(i, j),
    })
    .collect();

  Ok(ComparisonResult {
    score,
    alignment,
    matrix,
  })
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  fn protocol(vectors: &[&[f32]]) -> ProtocolEmbedding {
    ProtocolEmbedding::new(vectors.iter().map(|v| v.to_vec()).collect()).unwrap()
  }

  #[test]
  fn identical_protocols_score_one_with_identity_alignment() {
    let a = protocol(&[&[1.0, 0.0, 0.0], &[0.0, 2.0, 0.0], &[0.0, 0.0, 0.5]]);
    let result = compare(&a, &a).unwrap();

    assert!((result.score - 1.0).abs() < 1e-6);
    for (i, pair) in result.alignment.iter().enumerate() {
      assert_eq!(pair.query_step, i);
      assert_eq!(pair.candidate_step, i);
      assert!((pair.similarity - 1.0).abs() < 1e-6);
    }
  }

  #[test]
  fn longer_candidate_is_penalized() {
    let a = protocol(&[&[1.0, 0.0], &[0.0, 1.0]]);
    let b = protocol(&[&[1.0, 0.0], &[0.0, 1.0], &[1.0, 1.0]]);
    let result = compare(&a, &b).unwrap();

    assert!((result.score - 2.0 / 3.0).abs() < 1e-6);
    assert_eq!(result.alignment.len(), 2);
    assert_eq!(result.alignment[0].query_step, 0);
    assert_eq!(result.alignment[0].candidate_step, 0);
    assert!((result.alignment[0].similarity - 1.0).abs() < 1e-6);
    assert_eq!(result.alignment[1].query_step, 1);
    assert_eq!(result.alignment[1].candidate_step, 1);
    assert!((result.alignment[1].similarity - 1.0).abs() < 1e-6);
  }

  #[test]
  fn orthogonal_single_steps_score_zero() {
    let a = protocol(&[&[1.0, 0.0]]);
    let b = protocol(&[&[0.0, 1.0]]);
    let result = compare(&a, &b).unwrap();

    assert_eq!(result.score, 0.0);
    assert!(result.alignment[0].similarity.abs() < 1e-6);
  }

  #[test]
  fn anti_parallel_steps_clamp_to_zero() {
    let a = protocol(&[&[1.0, 0.0]]);
    let b = protocol(&[&[-1.0, 0.0]]);
    let result = compare(&a, &b).unwrap();

    assert_eq!(result.score, 0.0);
    assert!((result.matrix.get(0, 0) - -1.0).abs() < 1e-6);
  }

  #[test]
  fn score_is_symmetric_under_swap() {
    let a = protocol(&[&[0.3, 0.7, 0.1], &[0.9, 0.1, 0.4]]);
    let b = protocol(&[&[0.2, 0.5, 0.9], &[0.8, 0.3, 0.1], &[0.1, 0.9, 0.2]]);

    let ab = compare(&a, &b).unwrap();
    let ba = compare(&b, &a).unwrap();
    assert!((ab.score - ba.score).abs() < 1e-6);
  }

  #[test]
  fn alignment_is_injective_and_min_sized() {
    let a = protocol(&[&[0.1, 0.2], &[0.4, 0.3], &[0.7, 0.6], &[0.2, 0.9]]);
    let b = protocol(&[&[0.5, 0.5], &[0.9, 0.1]]);
    let result = compare(&a, &b).unwrap();

    assert_eq!(result.alignment.len(), 2);
    let query_steps: HashSet<_> = result.alignment.iter().map(|p| p.query_step).collect();
    let candidate_steps: HashSet<_> =
      result.alignment.iter().map(|p| p.candidate_step).collect();
    assert_eq!(query_steps.len(), result.alignment.len());
    assert_eq!(candidate_steps.len(), result.alignment.len());
  }

  #[test]
  fn score_stays_in_unit_interval() {
    let a = protocol(&[&[0.9, -0.4, 0.2], &[-0.1, 0.3, -0.8], &[0.5, 0.5, 0.5]]);
    let b = protocol(&[&[-0.7, 0.1, 0.6], &[0.2, -0.9, 0.3]]);
    let result = compare(&a, &b).unwrap();

    assert!(result.score >= 0.0);
    assert!(result.score <= 1.0);
    for row in result.matrix.values() {
      for &sim in row {
        assert!((-1.0..=1.0).contains(&sim));
      }
    }
  }

  #[test]
  fn dimension_mismatch_fails() {
    let a = protocol(&[&[1.0, 0.0, 0.0]]);
    let b = protocol(&[&[1.0, 0.0]]);
    assert_eq!(
      compare(&a, &b).unwrap_err(),
      AlignError::DimensionMismatch { expected: 3, got: 2 }
    );
  }

  #[test]
  fn zero_vector_fails_as_degenerate() {
    let a = protocol(&[&[0.0, 0.0]]);
    let b = protocol(&[&[1.0, 0.0]]);
    assert_eq!(
      compare(&a, &b).unwrap_err(),
      AlignError::DegenerateVector { index: 0 }
    );
  }

  #[test]
  fn result_serializes_to_plain_json() {
    let a = protocol(&[&[1.0, 0.0]]);
    let result = compare(&a, &a).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert!(json["score"].is_number());
    assert!(json["alignment"][0]["query_step"].is_number());
    assert!(json["matrix"][0][0].is_number());

    let back: ComparisonResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
  }
}
