//! String similarity primitives shared by every element kind.

/// Normalized Levenshtein similarity in `[0, 1]`.
///
/// Comparison ignores case. Identical strings (including two empty strings)
/// score 1; a non-empty string against an empty one scores 0. Used where a
/// near-miss name should still earn partial credit.
///
/// # Examples
///
/// ```
/// use compass::name::edit_distance_similarity;
///
/// assert_eq!(edit_distance_similarity("Student", "student"), 1.0);
/// assert!(edit_distance_similarity("Student", "Studnet") > 0.7);
/// ```
pub fn edit_distance_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Exact equality as a score: 1 if equal, otherwise 0.
///
/// Absent values are passed as empty strings, so two absent values are
/// equal. Used where partial credit is meaningless: declared types, roles,
/// multiplicities.
///
/// ```
/// use compass::name::exact_or_empty_similarity;
///
/// assert_eq!(exact_or_empty_similarity("Student", "Studnet"), 0.0);
/// assert_eq!(exact_or_empty_similarity("", ""), 1.0);
/// ```
pub fn exact_or_empty_similarity(a: &str, b: &str) -> f64 {
    if a == b { 1.0 } else { 0.0 }
}
