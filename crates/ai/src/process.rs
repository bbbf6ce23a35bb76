use protocompare_shared::AppError;

/// Target dimension for embeddings.
pub const EMBEDDING_DIM: usize = 1024;
/// Threshold for determining if L2 normalization is needed.
const L2_NORM_TOLERANCE: f32 = 1e-6;

/// Process an embedding vector to ensure it is L2 normalized with exactly
/// `EMBEDDING_DIM` dimensions.
///
/// - If dim > target: truncate and L2 normalize
/// - If dim == target: check if already L2 normalized, normalize if not
/// - If dim < target: return error
pub(crate) fn process_embedding(mut vec: Vec<f32>) -> Result<Vec<f32>, AppError> {
  match vec.len() {
    d if d > EMBEDDING_DIM => {
      vec.truncate(EMBEDDING_DIM);
      l2_normalize(&mut vec);
      Ok(vec)
    }
    d if d == EMBEDDING_DIM => {
      let norm_sq: f32 = vec.iter().map(|x| x * x).sum();
      if (norm_sq - 1.0).abs() > L2_NORM_TOLERANCE {
        l2_normalize(&mut vec);
      }
      Ok(vec)
    }
    d => Err(AppError::new(anyhow::anyhow!(
      "embedding dimension {} is less than required {}",
      d,
      EMBEDDING_DIM
    ))),
  }
}

/// L2 normalize a vector in-place.
fn l2_normalize(vec: &mut [f32]) {
  let norm_sq: f32 = vec.iter().map(|x| x * x).sum();
  let norm = norm_sq.sqrt();
  if norm > 1e-12 {
    for x in vec.iter_mut() {
      *x /= norm;
    }
  }
}
