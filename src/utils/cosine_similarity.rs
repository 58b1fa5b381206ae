use crate::types::WordFrequencyMap;

/// Calculate cosine similarity between two word-frequency maps.
///
/// Words absent from one map count as zero there. Returns `0.0` when either map
/// is empty.
pub fn cosine_similarity(m1: &WordFrequencyMap, m2: &WordFrequencyMap) -> f64 {
    // Only words present in both maps contribute to the dot product
    let (smaller, larger) = if m1.len() <= m2.len() {
        (m1, m2)
    } else {
        (m2, m1)
    };

    let dot_product = smaller.iter().fold(0u64, |dot, (word, &count)| {
        dot + larger
            .get(word)
            .map_or(0, |&other| count as u64 * other as u64)
    });

    let magnitude_m1 = magnitude(m1);
    let magnitude_m2 = magnitude(m2);

    if magnitude_m1 == 0.0 || magnitude_m2 == 0.0 {
        return 0.0;
    }

    dot_product as f64 / (magnitude_m1 * magnitude_m2)
}

fn magnitude(map: &WordFrequencyMap) -> f64 {
    let sum_of_squares = map
        .values()
        .fold(0u64, |sum, &count| sum + count as u64 * count as u64);

    (sum_of_squares as f64).sqrt()
}
