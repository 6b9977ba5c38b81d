use crate::models::WeightVector;

/// Match percentage (0-100, two decimals) from the cosine similarity of two vectors
///
/// Empty vectors, misaligned lengths and zero norms score 0.
pub fn score(vec_a: &WeightVector, vec_b: &WeightVector) -> f64 {
    let similarity = cosine_similarity(vec_a, vec_b);
    round_percentage(similarity * 100.0)
}

/// Cosine similarity clamped to [0, 1]
pub fn cosine_similarity(vec_a: &WeightVector, vec_b: &WeightVector) -> f64 {
    if vec_a.is_empty() || vec_b.is_empty() || vec_a.len() != vec_b.len() {
        return 0.0;
    }

    let norm_product = vec_a.norm() * vec_b.norm();
    if norm_product == 0.0 || !norm_product.is_finite() {
        return 0.0;
    }

    let similarity = vec_a.dot(vec_b) / norm_product;
    if similarity.is_nan() {
        return 0.0;
    }

    similarity.clamp(0.0, 1.0)
}

/// Round to two decimal places
#[inline]
pub fn round_percentage(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
