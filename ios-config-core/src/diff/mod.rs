//! Block-level configuration diffing.

pub mod engine;
pub mod result;

pub use engine::diff;
pub use result::BlockChange;
