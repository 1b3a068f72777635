pub mod analyzer;
pub mod compare;
pub mod error;
pub mod insights;
pub mod report;
pub mod scoring;
pub mod signals;

pub use error::{Error, Result};
