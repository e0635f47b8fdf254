//! Command handlers.
//!
//! Each handler drives `pet-care-core` and formats the result through
//! [`crate::presentation`]. No handler holds domain rules of its own.

pub mod catalog;
pub mod consult;
pub mod guide;
pub mod history;
pub mod pets;
