//! Array Helpers

/// Fisher-Yates shuffle driven by a caller-supplied random source in [0, 1)
pub fn shuffle_with<T: Clone>(items: &[T], mut rand: impl FnMut() -> f64) -> Vec<T> {
    let mut result = items.to_vec();
    for i in (1..result.len()).rev() {
        let j = ((rand() * (i as f64 + 1.0)) as usize).min(i);
        result.swap(i, j);
    }
    result
}

/// Shuffle with Math.random
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, js_sys::Math::random)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_with_is_a_permutation() {
        let items: Vec<u32> = (0..10).collect();
        let seq = [0.9, 0.1, 0.5, 0.3, 0.7, 0.0, 0.99, 0.2, 0.6];
        let mut cursor = 0;
        let shuffled = shuffle_with(&items, move || {
            let value = seq[cursor % seq.len()];
            cursor += 1;
            value
        });

        assert_eq!(shuffled.len(), items.len());
        let mut sorted = shuffled.clone();
        sorted.sort();
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_shuffle_with_keeps_small_inputs() {
        let empty: Vec<u32> = Vec::new();
        assert!(shuffle_with(&empty, || 0.5).is_empty());
        assert_eq!(shuffle_with(&[42], || 0.5), vec![42]);
    }
}
