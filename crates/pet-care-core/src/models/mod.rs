//! Domain models for the pet care guide.

mod care;
mod consultation;
mod pet;

pub use care::*;
pub use consultation::*;
pub use pet::*;
