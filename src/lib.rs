pub mod error;
pub mod math;
pub mod operations;

pub use error::{ClipError, Result};
