pub mod listing;
pub mod variant;

pub use listing::Listing;
pub use variant::{compute_variant, Variant};
