//! Allergen extraction from free-text ingredient lists.
//!
//! Tags a menu item with known allergens by matching a comma-separated
//! ingredient string against the allergen vocabulary. Matching is pure
//! substring containment of the lowercased label within each ingredient
//! token, so "buttermilk" matches Milk while "soy sauce" does not match
//! Soybeans. Extraction pre-populates the item's allergen selection; it
//! never replaces manual picks.

use serde::Serialize;

use crate::vocabulary::AllergenDefinition;

/// Result of a single extraction run.
///
/// `matched` holds allergen ids in the order they were first discovered
/// (tokens outer, vocabulary inner), with no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub matched: Vec<&'static str>,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}

/// Extract allergens from a comma-separated ingredient list.
///
/// Empty or whitespace-only input yields an empty result. The function is
/// total: unrecognized ingredients, stray commas, and punctuation all
/// degrade to non-matches rather than errors.
pub fn extract_allergens(
    ingredient_text: &str,
    vocabulary: &'static [AllergenDefinition],
) -> ParseResult {
    if ingredient_text.trim().is_empty() {
        return ParseResult::default();
    }

    let lowered = ingredient_text.to_lowercase();
    // Lowercase each label once per run rather than once per token.
    let match_keys: Vec<(&'static str, String)> = vocabulary
        .iter()
        .map(|allergen| (allergen.id, allergen.label.to_lowercase()))
        .collect();

    let mut matched: Vec<&'static str> = Vec::new();
    for token in lowered.split(',').map(str::trim) {
        for (id, key) in &match_keys {
            if token.contains(key.as_str()) && !matched.contains(id) {
                matched.push(*id);
            }
        }
    }

    ParseResult { matched }
}

/// Union an extraction result into an existing allergen selection.
///
/// Prior entries keep their order; newly matched ids are appended in match
/// order. Returns a fresh list so the caller can replace its selection in a
/// single assignment.
pub fn merge_selection(existing: &[String], result: &ParseResult) -> Vec<String> {
    let mut merged = existing.to_vec();
    for id in &result.matched {
        if !merged.iter().any(|selected| selected == id) {
            merged.push((*id).to_string());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{find_allergen, ALLERGENS};

    fn matched(text: &str) -> Vec<&'static str> {
        extract_allergens(text, ALLERGENS).matched
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(matched("").is_empty());
        assert!(matched("   \t  ").is_empty());
    }

    #[test]
    fn test_punctuation_only_input() {
        assert!(matched(",,, ,  !!").is_empty());
    }

    #[test]
    fn test_basic_scenario() {
        // "Soybeans" is not a substring of "soy sauce", so soy sauce does
        // not match; "sesame" is a substring of "sesame oil".
        assert_eq!(
            matched("peanuts, soy sauce, sesame oil"),
            vec!["peanuts", "sesame"]
        );
    }

    #[test]
    fn test_multiple_allergens_found_once() {
        assert_eq!(
            matched("Wheat flour, eggs, milk"),
            vec!["wheat", "eggs", "milk"]
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(matched("MILK, Tree Nuts"), matched("milk, tree nuts"));
        assert_eq!(matched("MILK, Tree Nuts"), vec!["milk", "tree_nuts"]);
    }

    #[test]
    fn test_substring_containment_not_whole_word() {
        // The label only needs to appear inside the token.
        assert_eq!(matched("buttermilk"), vec!["milk"]);
    }

    #[test]
    fn test_label_within_token_direction() {
        // "peanuts" is not a substring of "peanut butter", so the singular
        // form does not match. The direction is label-within-token, never
        // token-within-label.
        assert!(matched("peanut butter").is_empty());
    }

    #[test]
    fn test_duplicate_tokens_collapse() {
        assert_eq!(matched("milk, milk chocolate, buttermilk"), vec!["milk"]);
    }

    #[test]
    fn test_first_match_ordering() {
        // Tokens are the outer loop: sesame is discovered before eggs even
        // though eggs comes first in the table.
        assert_eq!(matched("sesame oil, eggs"), vec!["sesame", "eggs"]);
    }

    #[test]
    fn test_only_vocabulary_ids() {
        let result = extract_allergens(
            "buttermilk, shellfish stock, mystery powder, gluten-free bread",
            ALLERGENS,
        );
        for id in &result.matched {
            assert!(find_allergen(id).is_some(), "unknown id {id:?}");
        }
    }

    #[test]
    fn test_merge_preserves_manual_picks() {
        let existing = vec!["fish".to_string()];
        let result = extract_allergens("milk, eggs", ALLERGENS);
        assert_eq!(merge_selection(&existing, &result), ["fish", "milk", "eggs"]);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let base = vec!["fish".to_string()];
        let result = extract_allergens("Wheat flour, eggs, milk", ALLERGENS);

        let once = merge_selection(&base, &result);
        let twice = merge_selection(&once, &result);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_deterministic_order() {
        let text = "shrimp, buttermilk, wheat flour, sesame oil";
        assert_eq!(matched(text), matched(text));
    }
}
