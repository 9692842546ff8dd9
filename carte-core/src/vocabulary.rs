//! Allergen and dietary-category vocabularies.
//!
//! Both tables are fixed at compile time. An entry's `label` doubles as the
//! substring-match key for allergen extraction; `icon` is display-only.

use serde::Serialize;

/// One entry in the allergen vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AllergenDefinition {
    /// Short identifier stored on menu items (e.g. `tree_nuts`).
    pub id: &'static str,
    /// Human-readable name; also the case-insensitive match key.
    pub label: &'static str,
    pub icon: &'static str,
}

/// One entry in the dietary-category vocabulary. Not consulted by the
/// allergen extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DietaryCategoryDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The allergen table, in match order.
pub const ALLERGENS: &[AllergenDefinition] = &[
    AllergenDefinition {
        id: "milk",
        label: "Milk",
        icon: "🥛",
    },
    AllergenDefinition {
        id: "eggs",
        label: "Eggs",
        icon: "🥚",
    },
    AllergenDefinition {
        id: "fish",
        label: "Fish",
        icon: "🐟",
    },
    AllergenDefinition {
        id: "tree_nuts",
        label: "Tree Nuts",
        icon: "🌰",
    },
    AllergenDefinition {
        id: "wheat",
        label: "Wheat",
        icon: "🌾",
    },
    AllergenDefinition {
        id: "shellfish",
        label: "Shellfish",
        icon: "🦀",
    },
    AllergenDefinition {
        id: "gluten_free",
        label: "Gluten-Free",
        icon: "🌾",
    },
    AllergenDefinition {
        id: "peanuts",
        label: "Peanuts",
        icon: "🥜",
    },
    AllergenDefinition {
        id: "soybeans",
        label: "Soybeans",
        icon: "🫘",
    },
    AllergenDefinition {
        id: "sesame",
        label: "Sesame",
        icon: "✨",
    },
];

/// The dietary-category table.
pub const DIETARY_CATEGORIES: &[DietaryCategoryDefinition] = &[
    DietaryCategoryDefinition {
        id: "vegan",
        label: "Vegan",
        icon: "🌱",
    },
    DietaryCategoryDefinition {
        id: "vegetarian",
        label: "Vegetarian",
        icon: "🥗",
    },
];

/// Look up an allergen definition by id.
pub fn find_allergen(id: &str) -> Option<&'static AllergenDefinition> {
    ALLERGENS.iter().find(|a| a.id == id)
}

/// Look up a dietary-category definition by id.
pub fn find_dietary_category(id: &str) -> Option<&'static DietaryCategoryDefinition> {
    DIETARY_CATEGORIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_allergen_table_shape() {
        assert_eq!(ALLERGENS.len(), 10);

        let ids: HashSet<&str> = ALLERGENS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ALLERGENS.len(), "allergen ids must be unique");

        for allergen in ALLERGENS {
            assert!(!allergen.label.is_empty());
        }
    }

    #[test]
    fn test_shellfish_rename_is_resolved() {
        // One canonical entry, not the crustaceans/shellfish pair from
        // older revisions of the vocabulary.
        assert!(find_allergen("shellfish").is_some());
        assert!(find_allergen("crustaceans").is_none());
    }

    #[test]
    fn test_find_allergen() {
        let tree_nuts = find_allergen("tree_nuts").unwrap();
        assert_eq!(tree_nuts.label, "Tree Nuts");
        assert!(find_allergen("unobtainium").is_none());
    }

    #[test]
    fn test_dietary_categories() {
        assert_eq!(DIETARY_CATEGORIES.len(), 2);
        assert!(find_dietary_category("vegan").is_some());
        assert!(find_dietary_category("vegetarian").is_some());
        // Dietary ids never overlap allergen ids.
        for category in DIETARY_CATEGORIES {
            assert!(find_allergen(category.id).is_none());
        }
    }
}
