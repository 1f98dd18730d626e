//! User-facing strings of the catalog page.

pub const LOAD_FAILED: &str = "Failed to load plants";
pub const ADD_FAILED: &str = "Failed to add plant";
pub const DELETE_FAILED: &str = "Failed to delete plant";
pub const STOCK_FAILED: &str = "Failed to update plant stock";
pub const PRICE_FAILED: &str = "Failed to update plant price";

pub const INVALID_PRICE: &str = "Please enter a valid price.";
pub const PLANT_NOT_FOUND: &str = "That plant is no longer in the list.";
pub const NO_RESULTS: &str = "Oops... No plant found";

pub const ERROR_HEADING: &str = "Oops! Error Retry.";
pub const DEFAULT_ERROR: &str = "An unexpected error occurred.";
