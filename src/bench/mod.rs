//! Measurement: the candidate interface, input synthesis and the timing loop.

pub mod candidate;
pub mod input;
pub mod timing;

pub use candidate::*;
pub use input::*;
pub use timing::*;
