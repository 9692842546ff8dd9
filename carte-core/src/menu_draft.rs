//! Editable menu-item state.
//!
//! A `MenuItemDraft` owns the form fields for one menu item under
//! construction: free-text ingredients, the allergen/dietary selections,
//! and the raw price text. Allergen extraction runs only on the explicit
//! parse action, and its output is unioned into the selection without
//! disturbing manual picks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::allergen_extractor::{extract_allergens, merge_selection};
use crate::error::ValidationError;
use crate::types::NewMenuItem;
use crate::vocabulary::{find_allergen, find_dietary_category, ALLERGENS};

/// Lowest accepted price.
pub const MINIMUM_PRICE: f64 = 0.01;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Raw price text; validated on submit, not on entry.
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub restaurant_id: Option<Uuid>,
    /// Comma-separated ingredient text.
    #[serde(default)]
    pub ingredients: String,
    /// Selected allergen ids, in selection order.
    #[serde(default)]
    pub allergens: Vec<String>,
    /// Selected dietary-category ids.
    #[serde(default)]
    pub dietary_categories: Vec<String>,
    /// Ids found by the most recent parse action, for display.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parsed_allergens: Vec<String>,
    /// Reserved for future parse failures; the current extractor is total
    /// and never sets it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
}

impl MenuItemDraft {
    pub fn new(restaurant_id: Uuid) -> Self {
        Self {
            restaurant_id: Some(restaurant_id),
            ..Self::default()
        }
    }

    /// Whether the parse action is available. Mirrors the disabled state of
    /// the parse trigger: blank ingredient text means nothing to do.
    pub fn can_parse(&self) -> bool {
        !self.ingredients.trim().is_empty()
    }

    /// Run allergen extraction over the ingredient text and union the
    /// matches into the allergen selection.
    ///
    /// A no-op when the ingredient text is blank: the selection, the last
    /// parse display, and the error slot are all left untouched.
    pub fn parse_ingredients(&mut self) {
        if !self.can_parse() {
            return;
        }

        self.parse_error = None;
        let result = extract_allergens(&self.ingredients, ALLERGENS);
        tracing::debug!(matched = result.matched.len(), "parsed ingredient text");

        self.parsed_allergens = result.matched.iter().map(|id| id.to_string()).collect();
        self.allergens = merge_selection(&self.allergens, &result);
    }

    /// Toggle an allergen checkbox: remove the id if selected, append it
    /// otherwise. Ids outside the vocabulary are ignored.
    pub fn toggle_allergen(&mut self, id: &str) {
        if find_allergen(id).is_none() {
            tracing::debug!(id, "ignoring unknown allergen id");
            return;
        }
        toggle(&mut self.allergens, id);
    }

    /// Toggle a dietary-category checkbox. Ids outside the vocabulary are
    /// ignored.
    pub fn toggle_dietary_category(&mut self, id: &str) {
        if find_dietary_category(id).is_none() {
            tracing::debug!(id, "ignoring unknown dietary category id");
            return;
        }
        toggle(&mut self.dietary_categories, id);
    }

    /// Validate the draft into a create payload.
    pub fn validate(&self) -> Result<NewMenuItem, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }

        let restaurant_id = self.restaurant_id.ok_or(ValidationError::MissingRestaurant)?;

        let price = parse_price(&self.price)?;

        tracing::debug!(name, price, "validated menu item draft");

        Ok(NewMenuItem {
            restaurant_id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            allergens: self.allergens.clone(),
            dietary_categories: self.dietary_categories.clone(),
            ingredients: self.ingredients.trim().to_string(),
        })
    }
}

/// Checkbox semantics over an ordered id list.
fn toggle(selection: &mut Vec<String>, id: &str) {
    if let Some(pos) = selection.iter().position(|selected| selected == id) {
        selection.remove(pos);
    } else {
        selection.push(id.to_string());
    }
}

/// Parse raw price text into a number of at least `MINIMUM_PRICE`.
fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidPrice(raw.to_string()))?;

    if !price.is_finite() {
        return Err(ValidationError::InvalidPrice(raw.to_string()));
    }
    if price < MINIMUM_PRICE {
        return Err(ValidationError::PriceBelowMinimum(price));
    }
    Ok(price)
}
