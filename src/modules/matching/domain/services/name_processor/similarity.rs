use strsim::normalized_levenshtein;

/// Jaro-Winkler prefix scaling factor
const PREFIX_SCALE: f64 = 0.1;

/// Longest common prefix that earns a bonus
const MAX_PREFIX: usize = 4;

/// Strategy for calculating similarity between two strings
///
/// All strategies are case-sensitive; callers lowercase their input first.
pub trait SimilarityStrategy: Send + Sync {
    /// Returns a value between 0.0 (completely different) and 1.0 (identical)
    fn calculate(&self, a: &str, b: &str) -> f64;

    /// Get the name of this strategy for logging/debugging
    fn name(&self) -> &'static str;
}

/// Jaro-Winkler similarity strategy
///
/// Rewards a shared prefix, which suits names: "jon" and "jonathan" score
/// well even though most of the longer string is unmatched.
#[derive(Debug, Clone)]
pub struct JaroWinklerStrategy;

impl SimilarityStrategy for JaroWinklerStrategy {
    fn calculate(&self, a: &str, b: &str) -> f64 {
        prefix_weighted_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "JaroWinkler"
    }
}

/// Normalized Levenshtein similarity strategy
///
/// Good for detecting typos and character-level differences.
#[derive(Debug, Clone)]
pub struct LevenshteinStrategy;

impl SimilarityStrategy for LevenshteinStrategy {
    fn calculate(&self, a: &str, b: &str) -> f64 {
        edit_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "Levenshtein"
    }
}

/// Weighted blend of Jaro-Winkler and Levenshtein
#[derive(Debug, Clone)]
pub struct HybridStrategy {
    jaro_winkler_weight: f64,
    levenshtein_weight: f64,
}

impl HybridStrategy {
    /// Weights are expected to sum to 1.0; `MatchingConfig::validate` enforces it.
    pub fn new(jaro_winkler_weight: f64, levenshtein_weight: f64) -> Self {
        Self {
            jaro_winkler_weight,
            levenshtein_weight,
        }
    }

    /// Jaro-Winkler (70%) + Levenshtein (30%)
    pub fn default_hybrid() -> Self {
        Self::new(0.7, 0.3)
    }
}

impl Default for HybridStrategy {
    fn default() -> Self {
        Self::default_hybrid()
    }
}

impl SimilarityStrategy for HybridStrategy {
    fn calculate(&self, a: &str, b: &str) -> f64 {
        self.jaro_winkler_weight * prefix_weighted_similarity(a, b)
            + self.levenshtein_weight * edit_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "Hybrid"
    }
}

/// `1 - levenshtein(a, b) / max(len)`; two empty strings are identical.
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// Jaro-Winkler similarity.
///
/// Characters match when equal and within `max(len)/2 - 1` positions of each
/// other. The prefix bonus is applied unconditionally, unlike the common
/// variant that only boosts scores above 0.7. Transpositions are halved as a
/// float, so an odd count contributes a half transposition.
pub fn prefix_weighted_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, ca) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b.len());
        for j in start..end {
            if !b_matched[j] && *ca == b[j] {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Matched characters of each side, in original order
    let b_sequence = b
        .iter()
        .zip(&b_matched)
        .filter_map(|(c, &matched)| matched.then_some(c));
    let transpositions = a
        .iter()
        .zip(&a_matched)
        .filter_map(|(c, &matched)| matched.then_some(c))
        .zip(b_sequence)
        .filter(|(ca, cb)| ca != cb)
        .count();

    let m = matches as f64;
    let jaro = (m / a.len() as f64 + m / b.len() as f64 + (m - transpositions as f64 / 2.0) / m)
        / 3.0;

    let prefix = a
        .iter()
        .zip(&b)
        .take(MAX_PREFIX)
        .take_while(|(ca, cb)| ca == cb)
        .count();

    jaro + prefix as f64 * PREFIX_SCALE * (1.0 - jaro)
}

/// 0.7 × Jaro-Winkler + 0.3 × edit similarity
pub fn combined_similarity(a: &str, b: &str) -> f64 {
    HybridStrategy::default_hybrid().calculate(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_reflexivity() {
        for s in ["smith", "o'neil", "smith-jones", "a", ""] {
            assert_eq!(edit_similarity(s, s), 1.0, "edit reflexivity failed for '{}'", s);
            assert_eq!(
                prefix_weighted_similarity(s, s),
                1.0,
                "JW reflexivity failed for '{}'",
                s
            );
        }
    }

    #[test]
    fn test_empty_string_handling() {
        assert_eq!(edit_similarity("", "smith"), 0.0);
        assert_eq!(edit_similarity("smith", ""), 0.0);
        assert_eq!(prefix_weighted_similarity("", "smith"), 0.0);
    }

    #[test]
    fn test_classic_jaro_winkler_values() {
        // Standard reference values
        assert!(close(
            (prefix_weighted_similarity("martha", "marhta") * 1000.0).round() / 1000.0,
            0.961
        ));
        assert!(close(
            (prefix_weighted_similarity("dwayne", "duane") * 100.0).round() / 100.0,
            0.84
        ));
    }

    #[test]
    fn test_no_common_characters() {
        assert_eq!(prefix_weighted_similarity("abc", "xyz"), 0.0);
        assert_eq!(edit_similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_prefix_bonus_applies_below_seven_tenths() {
        // jaro("ab", "ac") = (1/2 + 1/2 + 1) / 3 = 2/3, prefix 1
        let expected = 2.0 / 3.0 + 0.1 * (1.0 - 2.0 / 3.0);
        assert!(close(prefix_weighted_similarity("ab", "ac"), expected));
    }

    #[test]
    fn test_odd_transposition_count_is_halved_exactly() {
        // Six matches, three out of order: (1 + 1 + (6 - 1.5) / 6) / 3, no shared prefix
        let expected = (2.0 + 4.5 / 6.0) / 3.0;
        assert!(close(prefix_weighted_similarity("abcdef", "bcadef"), expected));
    }

    #[test]
    fn test_smith_smithson() {
        // jaro = (1 + 5/8 + 1) / 3 = 0.875, prefix 4 -> 0.925; edit = 1 - 3/8
        let expected = 0.7 * 0.925 + 0.3 * 0.625;
        assert!(close(combined_similarity("smith", "smithson"), expected));
        assert!(combined_similarity("smith", "smithson") < 0.85);
    }

    #[test]
    fn test_combined_is_symmetric() {
        let pairs = [
            ("smith", "smyth"),
            ("john", "jon"),
            ("katherine", "catherine"),
            ("martha", "marhta"),
            ("nguyen", "nguyen-tran"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                combined_similarity(a, b),
                combined_similarity(b, a),
                "asymmetric for '{}'/'{}'",
                a,
                b
            );
        }
    }

    #[test]
    fn test_similarity_is_bounded() {
        let pairs = [("smith", "jones"), ("a", "abcdefgh"), ("", "x"), ("lee", "li")];
        for (a, b) in pairs {
            let sim = combined_similarity(a, b);
            assert!((0.0..=1.0).contains(&sim), "{} out of bounds", sim);
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert!(prefix_weighted_similarity("smith", "SMITH") < 1.0);
    }

    #[test]
    fn test_hybrid_weights() {
        let jw_only = HybridStrategy::new(1.0, 0.0);
        assert_eq!(
            jw_only.calculate("jon", "john"),
            prefix_weighted_similarity("jon", "john")
        );
        assert_eq!(HybridStrategy::default().name(), "Hybrid");
        assert_eq!(JaroWinklerStrategy.name(), "JaroWinkler");
        assert_eq!(LevenshteinStrategy.name(), "Levenshtein");
    }
}
