//! Domain models with validation at construction
//!
//! Row types mirror the `users`, `categories` and `products` tables.
//! Creation inputs are checked with `validate()` before they reach the
//! database; invalid input returns ValidationError, not panic.

pub mod validation;
pub mod category;
pub mod product;
pub mod user;

pub use validation::ValidationError;
pub use category::{Category, NewCategory};
pub use product::{NewProduct, Product, ProductPatch};
pub use user::{NewUser, User};

/// Maximum length for product and category titles
pub const TITLE_MAX_LEN: usize = 200;

/// Maximum length for product and category descriptions
pub const DESCRIPTION_MAX_LEN: usize = 280;

/// Maximum length for user name, surname and phone number
pub const USER_FIELD_MAX_LEN: usize = 50;
