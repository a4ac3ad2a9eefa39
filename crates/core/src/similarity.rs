//! Cosine similarity primitives shared by the content and collaborative
//! engines.

/// Cosine similarity of two equal-length dense vectors.
///
/// A zero-norm vector is defined to be orthogonal to everything, so the
/// result is 0.0 rather than NaN. Bounded to [-1, 1]; for non-negative
/// inputs the range is [0, 1].
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Square, symmetric pairwise cosine matrix over a set of row vectors.
/// Derived per call and discarded; the engine never persists one.
#[derive(Clone, Debug)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let size = rows.len();
        let mut scores = vec![0.0; size * size];

        for i in 0..size {
            // Diagonal: 1 for non-zero rows, 0 for all-zero rows.
            scores[i * size + i] = cosine(&rows[i], &rows[i]);
            for j in (i + 1)..size {
                let score = cosine(&rows[i], &rows[j]);
                scores[i * size + j] = score;
                scores[j * size + i] = score;
            }
        }

        Self { size, scores }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn score(&self, i: usize, j: usize) -> f64 {
        self.scores[i * self.size + j]
    }

    /// All scores against entity `i`, indexed by entity.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.scores[i * self.size..(i + 1) * self.size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_score_one() {
        let v = vec![0.5, 1.0, 2.0];
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        assert_eq!(cosine(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn zero_vector_scores_zero_not_nan() {
        let score = cosine(&[0.0, 0.0], &[1.0, 2.0]);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let rows = vec![vec![1.0, 0.0, 1.0], vec![1.0, 1.0, 0.0], vec![0.0, 0.0, 0.0]];
        let matrix = SimilarityMatrix::from_rows(&rows);

        assert_eq!(matrix.len(), 3);
        assert!((matrix.score(0, 0) - 1.0).abs() < 1e-12);
        assert_eq!(matrix.score(0, 1), matrix.score(1, 0));
        // All-zero row: orthogonal to everything including itself.
        assert_eq!(matrix.score(2, 2), 0.0);
        assert_eq!(matrix.score(2, 0), 0.0);
    }
}
