// Shared helpers: storage, browser ports, validation

pub mod browser;
pub mod constants;
pub mod storage;
pub mod validation;

pub use browser::*;
pub use constants::*;
pub use storage::*;
pub use validation::{required_message, validate_field};
