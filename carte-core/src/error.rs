use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Menu item name is required")]
    MissingName,

    #[error("Menu item description is required")]
    MissingDescription,

    #[error("Menu item must belong to a restaurant")]
    MissingRestaurant,

    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("Price must be at least 0.01, got {0}")]
    PriceBelowMinimum(f64),
}
