//! Route handlers organized by resource

pub mod health;
pub mod users;
pub mod categories;
pub mod products;

use serde::Serialize;

/// Confirmation body for deletes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
