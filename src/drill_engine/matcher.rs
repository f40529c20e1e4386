//! Answer normalization and comparison.
//!
//! Normalization trims, lowercases and collapses whitespace runs to one
//! space. There is no accent folding: `"żółw"` and `"zolw"` do not match.

/// Normalize an answer for comparison.
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether `user` equals `correct` after normalization. No partial credit.
pub fn matches(user: &str, correct: &str) -> bool {
    normalize(user) == normalize(correct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_folds_and_collapses() {
        assert_eq!(normalize("  Dom  EK "), "dom ek");
        assert_eq!(normalize("\tkot\n\npies "), "kot pies");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn matches_is_reflexive() {
        for s in ["", "dom", "  Dom  ", "ŻÓŁW", "a\tb"] {
            assert!(matches(s, s), "{s:?} should match itself");
        }
    }

    #[test]
    fn case_and_whitespace_variants_match() {
        assert!(matches(" Dom  EK ", "dom ek"));
        assert!(matches("DOMEK", "domek"));
        assert!(matches("Żółw", "żółw"));
    }

    #[test]
    fn different_content_never_matches() {
        assert!(!matches("kot", "pies"));
        assert!(!matches("domek", "dom ek"));
        assert!(!matches("zolw", "żółw"));
    }
}
