pub mod location;
pub mod place;
pub mod price_level;
pub mod search;
