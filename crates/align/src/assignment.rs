use crate::{AlignError, SimilarityMatrix};

/// Maximum-weight one-to-one matching between matrix rows and columns.
///
/// Kuhn–Munkres in the shortest-augmenting-path formulation with row and
/// column potentials, minimizing the negated similarity. Rectangular inputs
/// are handled by solving on the transpose when there are more rows than
/// columns, so every index on the smaller side is matched exactly once and
/// the rest stay unmatched. Deterministic: ties are broken by the row-major
/// scan order. O(max(rows, cols)³).
///
/// Returns matched `(row, col)` pairs sorted by row.
pub(crate) fn solve(matrix: &SimilarityMatrix) -> Result<Vec<(usize, usize)>, AlignError> {
  let (rows, cols) = (matrix.rows(), matrix.cols());
  let transposed = rows > cols;
  let (n, m) = if transposed { (cols, rows) } else { (rows, cols) };

  let cost = |i: usize, j: usize| -> f64 {
    let sim = if transposed {
      matrix.get(j, i)
    } else {
      matrix.get(i, j)
    };
    -f64::from(sim)
  };

  // 1-based arrays: u/v are the row and column potentials, p[j] is the row
  // currently matched to column j (0 = unmatched), way[j] the previous
  // column on the augmenting path.
  let mut u = vec![0.0_f64; n + 1];
  let mut v = vec![0.0_f64; m + 1];
  let mut p = vec![0_usize; m + 1];
  let mut way = vec![0_usize; m + 1];

  for i in 1..=n {
    p[0] = i;
    let mut j0 = 0_usize;
    let mut minv = vec![f64::INFINITY; m + 1];
    let mut used = vec![false; m + 1];

    // Dijkstra over reduced costs until a free column is reached.
    loop {
      used[j0] = true;
      let i0 = p[j0];
      let mut delta = f64::INFINITY;
      let mut j1 = 0_usize;

      for j in 1..=m {
        if used[j] {
          continue;
        }
        let cur = cost(i0 - 1, j - 1) - u[i0] - v[j];
        if cur < minv[j] {
          minv[j] = cur;
          way[j] = j0;
        }
        if minv[j] < delta {
          delta = minv[j];
          j1 = j;
        }
      }

      // Only a NaN entry can leave delta non-finite; the matrix builder
      // never produces one.
      if !delta.is_finite() {
        return Err(AlignError::SolverFailure);
      }

      for j in 0..=m {
        if used[j] {
          u[p[j]] += delta;
          v[j] -= delta;
        } else {
          minv[j] -= delta;
        }
      }

      j0 = j1;
      if p[j0] == 0 {
        break;
      }
    }

    // Walk the augmenting path back, flipping assignments.
    while j0 != 0 {
      let j1 = way[j0];
      p[j0] = p[j1];
      j0 = j1;
    }
  }

  let mut pairs = Vec::with_capacity(n);
  for j in 1..=m {
    if p[j] != 0 {
      let pair = if transposed {
        (j - 1, p[j] - 1)
      } else {
        (p[j] - 1, j - 1)
      };
      pairs.push(pair);
    }
  }

  if pairs.len() != n {
    return Err(AlignError::SolverFailure);
  }

  pairs.sort_unstable();
  Ok(pairs)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn total(matrix: &SimilarityMatrix, pairs: &[(usize, usize)]) -> f32 {
    pairs.iter().map(|&(i, j)| matrix.get(i, j)).sum()
  }

  #[test]
  fn beats_greedy_row_wise_matching() {
    // Greedy takes (0,0)=0.9 then is stuck with (1,1)=0.1 for a total of
    // 1.0; the optimum is (0,1)+(1,0) = 1.7.
    let matrix = SimilarityMatrix::from_values(vec![vec![0.9, 0.8], vec![0.9, 0.1]]);
    let pairs = solve(&matrix).unwrap();

    assert_eq!(pairs, vec![(0, 1), (1, 0)]);
    assert!((total(&matrix, &pairs) - 1.7).abs() < 1e-6);
  }

  #[test]
  fn wide_matrix_leaves_extra_columns_unmatched() {
    let matrix = SimilarityMatrix::from_values(vec![vec![0.2, 0.9, 0.4]]);
    assert_eq!(solve(&matrix).unwrap(), vec![(0, 1)]);
  }

  #[test]
  fn tall_matrix_leaves_extra_rows_unmatched() {
    let matrix = SimilarityMatrix::from_values(vec![vec![0.1], vec![0.8], vec![0.3]]);
    assert_eq!(solve(&matrix).unwrap(), vec![(1, 0)]);
  }

  #[test]
  fn ties_resolve_in_row_major_order() {
    let matrix = SimilarityMatrix::from_values(vec![vec![0.5, 0.5], vec![0.5, 0.5]]);
    assert_eq!(solve(&matrix).unwrap(), vec![(0, 0), (1, 1)]);
  }

  #[test]
  fn negative_entries_are_still_matched() {
    // min(n, m) pairs are always produced, even when everything is
    // anti-similar; scoring clamps later.
    let matrix = SimilarityMatrix::from_values(vec![vec![-0.9, -0.2], vec![-0.3, -0.8]]);
    let pairs = solve(&matrix).unwrap();
    assert_eq!(pairs.len(), 2);
    assert!((total(&matrix, &pairs) - -0.5).abs() < 1e-6);
  }

  #[test]
  fn is_deterministic() {
    let matrix = SimilarityMatrix::from_values(vec![
      vec![0.11, 0.52, 0.43],
      vec![0.61, 0.35, 0.28],
      vec![0.47, 0.19, 0.82],
    ]);
    let first = solve(&matrix).unwrap();
    for _ in 0..10 {
      assert_eq!(solve(&matrix).unwrap(), first);
    }
  }
}
