pub mod allergen_extractor;
pub mod error;
pub mod menu_draft;
pub mod session;
pub mod types;
pub mod vocabulary;

pub use allergen_extractor::{extract_allergens, merge_selection, ParseResult};
pub use error::ValidationError;
pub use menu_draft::{MenuItemDraft, MINIMUM_PRICE};
pub use session::{CurrentUser, SessionContext};
pub use types::{AllergenNote, MenuItem, NewMenuItem, NewRestaurant, Restaurant};
pub use vocabulary::{
    find_allergen, find_dietary_category, AllergenDefinition, DietaryCategoryDefinition, ALLERGENS,
    DIETARY_CATEGORIES,
};
