pub mod error;
pub mod shoe_card;

pub use error::error_page;
pub use shoe_card::{shoe_card, ShoeCardVm};
