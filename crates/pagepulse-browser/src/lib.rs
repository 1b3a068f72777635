mod error;
mod probe;

pub use error::{Error, Result};
pub use probe::PageProbe;
