//! Reference growth model implementations.
//!
//! Models are implemented as small, pure functions so that fitting code can
//! stay generic over the model enum.

pub mod model;

pub use model::*;
