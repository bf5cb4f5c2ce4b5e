pub mod color;
pub mod errors;

pub use color::Color;
pub use errors::{ChromeError, LoadError};

pub type Result<T> = std::result::Result<T, ChromeError>;
