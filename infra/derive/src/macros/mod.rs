pub mod enumerator;
pub mod error;
