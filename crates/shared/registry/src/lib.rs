//! # Variant Registry
//!
//! Closed "smart enum" families: every variant carries a numeric code and a
//! display name, and each family owns a process-wide, read-only registry that
//! answers lookups by either.
//!
//! Families are declared with `#[derive(Enumerator)]` on a fieldless enum; the
//! derive enumerates the variants at compile time and builds the registry once,
//! on first use.
//!
//! ## Example
//!
//! ```rust
//! use smenum_registry::Enumerator;
//!
//! #[derive(Debug, Clone, Copy, Enumerator)]
//! enum Tier {
//!     #[enumerator(code = 1)]
//!     Bronze,
//!     #[enumerator(code = 2)]
//!     Silver,
//! }
//!
//! assert_eq!(Tier::from_code(2), Some(Tier::Silver));
//! assert_eq!(Tier::from_name("Bronze"), Some(Tier::Bronze));
//! assert_eq!(Tier::from_name("bronze"), None);
//! assert_eq!(Tier::Silver.to_string(), "Silver");
//! ```

extern crate self as smenum_registry;

mod enumerator;
mod error;
mod key;
mod registry;

pub use crate::enumerator::Enumerator;
pub use crate::error::{RegistryError, RegistryErrorExt};
pub use crate::key::VariantKey;
pub use crate::registry::Registry;

/// Derive macro for [`Enumerator`] families, see [`smenum_derive::Enumerator`].
pub use smenum_derive::Enumerator;
