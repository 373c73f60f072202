//! Co-sorting of candidate keys by score, descending.

use std::cmp::Ordering;

use crate::error::SamplingError;

/// Keys and their scores as parallel sequences; `scores[i]` belongs to `keys[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<K> {
    keys: Vec<K>,
    scores: Vec<f64>,
}

impl<K> Ranking<K> {
    pub(crate) fn from_parts(keys: Vec<K>, scores: Vec<f64>) -> Self {
        debug_assert_eq!(keys.len(), scores.len());
        Self { keys, scores }
    }

    pub fn empty() -> Self {
        Self {
            keys: Vec::new(),
            scores: Vec::new(),
        }
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// `(key, score)` pairs in ranking order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.keys.iter().zip(self.scores.iter().copied())
    }

    /// First entry; the top-scored candidate when the ranking is sorted.
    pub fn best(&self) -> Option<(&K, f64)> {
        self.iter().next()
    }

    /// Re-order by score, descending.
    pub fn sorted(self) -> Self {
        let (keys, scores) = sort_pairs(self.keys, self.scores);
        Self { keys, scores }
    }

    /// Keep only the first `n` entries.
    pub fn top(mut self, n: usize) -> Self {
        self.keys.truncate(n);
        self.scores.truncate(n);
        self
    }

    pub fn into_parts(self) -> (Vec<K>, Vec<f64>) {
        (self.keys, self.scores)
    }
}

/// Sort `keys` by `scores`, descending, keeping each key with its score.
///
/// Returns `(sorted_keys, sorted_scores)`. The sort is stable and NaN scores
/// go last.
pub fn sort_keys_values<K>(
    scores: Vec<f64>,
    keys: Vec<K>,
) -> Result<(Vec<K>, Vec<f64>), SamplingError> {
    if scores.len() != keys.len() {
        return Err(SamplingError::LengthMismatch {
            field: "scores",
            expected: keys.len(),
            actual: scores.len(),
        });
    }
    Ok(sort_pairs(keys, scores))
}

fn sort_pairs<K>(keys: Vec<K>, scores: Vec<f64>) -> (Vec<K>, Vec<f64>) {
    let mut pairs: Vec<(K, f64)> = keys.into_iter().zip(scores).collect();
    pairs.sort_by(|a, b| descending(a.1, b.1));
    pairs.into_iter().unzip()
}

/// Total order: larger scores first, NaN after every number.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sorts_descending_with_keys() {
        let (keys, scores) =
            sort_keys_values(vec![0.2, 0.9, 0.5], vec!["low", "high", "mid"]).unwrap();
        assert_eq!(keys, vec!["high", "mid", "low"]);
        assert_eq!(scores, vec![0.9, 0.5, 0.2]);
    }

    #[test]
    fn test_empty_input() {
        let (keys, scores) = sort_keys_values::<u32>(vec![], vec![]).unwrap();
        assert!(keys.is_empty());
        assert!(scores.is_empty());
    }

    #[test]
    fn test_length_mismatch_is_error() {
        let err = sort_keys_values(vec![0.1, 0.2], vec!["a"]).unwrap_err();
        assert_eq!(
            err,
            SamplingError::LengthMismatch {
                field: "scores",
                expected: 1,
                actual: 2,
            }
        );
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let (keys, _) = sort_keys_values(vec![0.5, 0.7, 0.5, 0.5], vec![1, 2, 3, 4]).unwrap();
        assert_eq!(keys, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_nan_sorts_last() {
        let (keys, scores) =
            sort_keys_values(vec![f64::NAN, 0.3, 0.8], vec!["nan", "a", "b"]).unwrap();
        assert_eq!(keys, vec!["b", "a", "nan"]);
        assert!(scores[2].is_nan());
    }

    #[test]
    fn test_ranking_accessors() {
        let ranking = Ranking::from_parts(vec!["x", "y", "z"], vec![0.1, 0.7, 0.4]).sorted();
        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking.best(), Some((&"y", 0.7)));
        let top = ranking.clone().top(2);
        assert_eq!(top.keys(), &["y", "z"]);
        assert_eq!(top.scores(), &[0.7, 0.4]);
        let pairs: Vec<(&str, f64)> = ranking.iter().map(|(k, s)| (*k, s)).collect();
        assert_eq!(pairs, vec![("y", 0.7), ("z", 0.4), ("x", 0.1)]);
        assert!(Ranking::<u8>::empty().best().is_none());
    }

    proptest! {
        #[test]
        fn prop_sorted_permutation_keeps_pairs(
            scores in prop::collection::vec(0.0f64..1.0, 0..64)
        ) {
            let keys: Vec<usize> = (0..scores.len()).collect();
            let (sorted_keys, sorted_scores) =
                sort_keys_values(scores.clone(), keys.clone()).unwrap();

            prop_assert_eq!(sorted_keys.len(), keys.len());
            for w in sorted_scores.windows(2) {
                prop_assert!(w[0] >= w[1]);
            }
            for (k, s) in sorted_keys.iter().zip(&sorted_scores) {
                prop_assert_eq!(scores[*k], *s);
            }
            let mut seen = sorted_keys.clone();
            seen.sort_unstable();
            prop_assert_eq!(seen, keys);
        }
    }
}
