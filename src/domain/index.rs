//! Flat vector index with exhaustive nearest-neighbor search

use super::error::DomainError;

/// Embedding dimension shared by all modes (text-embedding-3-small).
pub const EMBEDDING_DIMENSION: usize = 1536;

/// Append-only flat vector store searched with an exhaustive squared-L2
/// scan. The corpus per mode is tens to low hundreds of chunks, so a
/// linear O(n * dim) scan is deliberate; an approximate structure would
/// trade recall for speed this service does not need.
#[derive(Debug)]
pub struct VectorIndex {
    dimension: usize,
    vectors: Vec<Vec<f32>>,
}

impl VectorIndex {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: Vec::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Append a vector. Its position is the index it maps back from in
    /// search results.
    pub fn add(&mut self, vector: Vec<f32>) -> Result<(), DomainError> {
        if vector.len() != self.dimension {
            return Err(DomainError::embedding(format!(
                "expected vector of dimension {}, got {}",
                self.dimension,
                vector.len()
            )));
        }

        self.vectors.push(vector);
        Ok(())
    }

    /// Return up to `k` (position, squared-L2 distance) pairs, ascending
    /// by distance. The sort is stable, so equal distances resolve in
    /// insertion order. An empty index yields an empty result for any k.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<(usize, f32)> {
        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(position, vector)| (position, squared_l2(query, vector)))
            .collect();

        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        scored.truncate(k);
        scored
    }
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_empty_index() {
        let index = VectorIndex::new(3);

        assert!(index.search(&[1.0, 0.0, 0.0], 5).is_empty());
        assert!(index.search(&[1.0, 0.0, 0.0], 0).is_empty());
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let mut index = VectorIndex::new(3);
        let result = index.add(vec![1.0, 2.0]);

        assert!(matches!(result, Err(DomainError::Embedding { .. })));
        assert!(index.is_empty());
    }

    #[test]
    fn test_exact_match_first_with_zero_distance() {
        let mut index = VectorIndex::new(3);
        index.add(vec![1.0, 0.0, 0.0]).unwrap();
        index.add(vec![0.0, 1.0, 0.0]).unwrap();
        index.add(vec![0.5, 0.5, 0.0]).unwrap();

        let results = index.search(&[0.0, 1.0, 0.0], 3);

        assert_eq!(results[0].0, 1);
        assert!(results[0].1.abs() < 1e-6);
    }

    #[test]
    fn test_results_sorted_and_bounded() {
        let mut index = VectorIndex::new(2);
        for i in 0..10 {
            index.add(vec![i as f32, 0.0]).unwrap();
        }

        let results = index.search(&[0.0, 0.0], 4);

        assert_eq!(results.len(), 4);
        for pair in results.windows(2) {
            assert!(pair[0].1 <= pair[1].1);
        }
    }

    #[test]
    fn test_ties_resolve_in_insertion_order() {
        let mut index = VectorIndex::new(2);
        index.add(vec![1.0, 0.0]).unwrap();
        index.add(vec![-1.0, 0.0]).unwrap();
        index.add(vec![0.0, 1.0]).unwrap();

        // Positions 0 and 1 are equidistant from the origin
        let results = index.search(&[0.0, 0.0], 3);

        assert_eq!(results[0].0, 0);
        assert_eq!(results[1].0, 1);
    }

    #[test]
    fn test_k_larger_than_index() {
        let mut index = VectorIndex::new(2);
        index.add(vec![1.0, 1.0]).unwrap();

        let results = index.search(&[0.0, 0.0], 10);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1, 2.0);
    }
}
