//! Lexical and vector-space similarity primitives
//!
//! Everything here is a pure function over its inputs. Two families live side by side:
//! normalized edit-distance similarity between single strings, and cosine similarity
//! between term-frequency vectors built over a shared vocabulary.

use std::collections::{BTreeSet, HashMap};
use strsim::levenshtein;

/// Similarity at or above which two words are treated as the same word.
pub const WORD_SIM_THRESHOLD: f64 = 0.7;

/// Constant weight applied to every present term. Not a real IDF: the factor is
/// independent of document length and corpus.
pub const IDF_FACTOR: f64 = std::f64::consts::LN_2;

/// Replace NaN and infinities with 0.0.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Guard a ratio into `[0, 1]`, coercing non-finite values to 0.0 first.
pub fn clamp_unit(value: f64) -> f64 {
    finite_or_zero(value).clamp(0.0, 1.0)
}

/// Scale a `[0, 1]` ratio to the `[0, 100]` range used in reports.
pub fn to_percent(ratio: f64) -> f64 {
    (finite_or_zero(ratio) * 100.0).clamp(0.0, 100.0)
}

/// Case-sensitive normalized Levenshtein similarity.
///
/// Returns `1 - distance / max(len(a), len(b))` with lengths counted in chars,
/// and `1.0` when both strings are empty.
pub fn word_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(a, b);
    clamp_unit(1.0 - distance as f64 / max_len as f64)
}

/// Lower-cased whitespace tokens of every string in `doc`.
pub fn tokenize(doc: &[String]) -> impl Iterator<Item = String> + '_ {
    doc.iter()
        .flat_map(|entry| entry.split_whitespace())
        .map(|token| token.to_lowercase())
}

/// Sorted union of the tokens of both documents.
pub fn build_vocabulary(a: &[String], b: &[String]) -> Vec<String> {
    tokenize(a)
        .chain(tokenize(b))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Term-frequency vector of `doc` over `vocabulary`, each present term weighted by `tf * ln(2)`.
pub fn tfidf_vector(doc: &[String], vocabulary: &[String]) -> Vec<f64> {
    let mut term_freq: HashMap<String, f64> = HashMap::new();
    for token in tokenize(doc) {
        *term_freq.entry(token).or_insert(0.0) += 1.0;
    }

    vocabulary
        .iter()
        .map(|term| term_freq.get(term).map_or(0.0, |tf| tf * IDF_FACTOR))
        .collect()
}

/// Cosine similarity between two vectors.
///
/// Returns 0.0 for vectors of different length, empty vectors, zero-norm vectors,
/// and any non-finite result.
pub fn cosine_similarity(v1: &[f64], v2: &[f64]) -> f64 {
    if v1.len() != v2.len() || v1.is_empty() {
        return 0.0;
    }

    let (dot, norm1, norm2) = v1
        .iter()
        .zip(v2)
        .fold((0.0, 0.0, 0.0), |(dot, n1, n2), (a, b)| {
            (dot + a * b, n1 + a * a, n2 + b * b)
        });

    let norm1 = norm1.sqrt();
    let norm2 = norm2.sqrt();
    if norm1 <= 0.0 || norm2 <= 0.0 {
        return 0.0;
    }

    clamp_unit(dot / (norm1 * norm2))
}

/// Vectorize both documents over their shared vocabulary and compare them.
pub fn semantic_similarity(a: &[String], b: &[String]) -> f64 {
    let vocabulary = build_vocabulary(a, b);
    let va = tfidf_vector(a, &vocabulary);
    let vb = tfidf_vector(b, &vocabulary);
    cosine_similarity(&va, &vb)
}

/// Case-insensitive two-way containment: 1.0 when either string contains the other.
///
/// An empty `required` string is always satisfied; an empty `candidate` never
/// satisfies a non-empty requirement.
pub fn containment_similarity(candidate: &str, required: &str) -> f64 {
    let candidate = candidate.trim().to_lowercase();
    let required = required.trim().to_lowercase();

    if required.is_empty() {
        return 1.0;
    }
    if candidate.is_empty() {
        return 0.0;
    }

    if candidate.contains(&required) || required.contains(&candidate) {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_word_similarity_basics() {
        assert_eq!(word_similarity("", ""), 1.0);
        assert_eq!(word_similarity("rust", "rust"), 1.0);
        assert_eq!(word_similarity("abc", ""), 0.0);
        // one substitution out of six characters
        assert!((word_similarity("Python", "python") - 5.0 / 6.0).abs() < 1e-9);
        assert!(word_similarity("kitten", "sitting") < WORD_SIM_THRESHOLD);
    }

    #[test]
    fn test_word_similarity_is_not_a_stub() {
        assert!(word_similarity("docker", "java") < 0.5);
    }

    #[test]
    fn test_vocabulary_is_sorted_union() {
        let vocab = build_vocabulary(&strings(&["Rust Go"]), &strings(&["go", "SQL"]));
        assert_eq!(vocab, strings(&["go", "rust", "sql"]));
    }

    #[test]
    fn test_tfidf_vector_weights() {
        let vocab = strings(&["go", "rust", "sql"]);
        let vector = tfidf_vector(&strings(&["rust", "Rust go"]), &vocab);
        assert!((vector[0] - IDF_FACTOR).abs() < 1e-12);
        assert!((vector[1] - 2.0 * IDF_FACTOR).abs() < 1e-12);
        assert_eq!(vector[2], 0.0);
    }

    #[test]
    fn test_cosine_guards() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[f64::NAN, 1.0], &[1.0, 1.0]), 0.0);
        assert!((cosine_similarity(&[1.0, 1.0], &[2.0, 2.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_semantic_similarity_of_disjoint_docs() {
        assert_eq!(semantic_similarity(&strings(&["rust"]), &strings(&["java"])), 0.0);
        assert_eq!(semantic_similarity(&[], &strings(&["java"])), 0.0);
    }

    #[test]
    fn test_containment_similarity() {
        assert_eq!(containment_similarity("Bachelor of Science", "bachelor"), 1.0);
        assert_eq!(containment_similarity("BSc", "Bachelor of Science"), 0.0);
        assert_eq!(containment_similarity("anything", ""), 1.0);
        assert_eq!(containment_similarity("", "Master"), 0.0);
    }

    proptest! {
        #[test]
        fn word_similarity_identity(w in ".{0,24}") {
            prop_assert_eq!(word_similarity(&w, &w), 1.0);
        }

        #[test]
        fn word_similarity_in_bounds(a in ".{0,16}", b in ".{0,16}") {
            let sim = word_similarity(&a, &b);
            prop_assert!((0.0..=1.0).contains(&sim));
        }

        #[test]
        fn cosine_is_symmetric(
            pairs in proptest::collection::vec((-1e3..1e3f64, -1e3..1e3f64), 0..12)
        ) {
            let (a, b): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            prop_assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
        }

        #[test]
        fn cosine_in_bounds(
            pairs in proptest::collection::vec((any::<f64>(), any::<f64>()), 0..12)
        ) {
            let (a, b): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            let sim = cosine_similarity(&a, &b);
            prop_assert!(sim.is_finite() && (0.0..=1.0).contains(&sim));
        }
    }
}
