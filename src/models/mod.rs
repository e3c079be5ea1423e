//! Data models

pub mod prediction;
pub mod report;
pub mod health;

pub use prediction::*;
pub use report::*;
pub use health::*;
