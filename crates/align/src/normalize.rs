use crate::{AlignError, ProtocolEmbedding};

/// Norm below which a vector is considered degenerate.
const MIN_NORM: f64 = 1e-12;

/// Rescale every step vector to unit L2 norm, accumulating in f64.
///
/// Zero-vector policy: a zero-norm or non-finite vector fails with
/// `DegenerateVector` rather than silently dividing by zero.
pub(crate) fn unit_normalize(protocol: &ProtocolEmbedding) -> Result<Vec<Vec<f32>>, AlignError> {
  protocol
    .vectors()
    .iter()
    .enumerate()
    .map(|(index, v)| {
      let norm_sq = v.iter().fold(0.0_f64, |acc, &x| {
        let x = f64::from(x);
        x.mul_add(x, acc)
      });
      let norm = norm_sq.sqrt();

      if !norm.is_finite() || norm < MIN_NORM {
        return Err(AlignError::DegenerateVector { index });
      }

      Ok(v.iter().map(|&x| (f64::from(x) / norm) as f32).collect())
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalized_vectors_have_unit_norm() {
    let p = ProtocolEmbedding::new(vec![vec![3.0, 4.0], vec![0.5, 0.0]]).unwrap();
    let normalized = unit_normalize(&p).unwrap();

    for v in &normalized {
      let norm_sq: f32 = v.iter().map(|x| x * x).sum();
      assert!((norm_sq - 1.0).abs() < 1e-6);
    }
    assert!((normalized[0][0] - 0.6).abs() < 1e-6);
    assert!((normalized[0][1] - 0.8).abs() < 1e-6);
  }

  #[test]
  fn zero_vector_is_degenerate() {
    let p = ProtocolEmbedding::new(vec![vec![1.0, 0.0], vec![0.0, 0.0]]).unwrap();
    assert_eq!(
      unit_normalize(&p).unwrap_err(),
      AlignError::DegenerateVector { index: 1 }
    );
  }

  #[test]
  fn non_finite_vector_is_degenerate() {
    let p = ProtocolEmbedding::new(vec![vec![f32::NAN, 1.0]]).unwrap();
    assert_eq!(
      unit_normalize(&p).unwrap_err(),
      AlignError::DegenerateVector { index: 0 }
    );
  }
}
