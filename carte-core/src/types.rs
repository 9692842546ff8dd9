use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Restaurant record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub cuisine_type: String,
}

/// Payload for creating a restaurant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub cuisine_type: String,
}

/// Menu item record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub dietary_categories: Vec<String>,
    /// Raw ingredient text the allergens were derived from.
    #[serde(default)]
    pub ingredients: String,
}

/// Payload for creating a menu item; the backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub dietary_categories: Vec<String>,
    #[serde(default)]
    pub ingredients: String,
}

/// Free-form allergen note attached to a menu item, for allergens the
/// fixed vocabulary does not cover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllergenNote {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
