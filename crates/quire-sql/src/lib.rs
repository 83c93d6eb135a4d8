mod serializer;
pub use serializer::{Render, Serializer};

pub use quire_core::stmt;
