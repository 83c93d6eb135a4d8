mod error;
pub use error::Error;

pub mod stmt;

/// A Result type alias that uses quire's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
