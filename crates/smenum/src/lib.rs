//! Facade crate for the variant registry and the declared families.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use smenum::prelude::*;
//!
//! let card = CreditCard::from_code(4).unwrap();
//! assert_eq!(card.to_string(), "Gold");
//! ```

pub use smenum_registry as registry;

#[cfg(feature = "credit-card")]
pub use smenum_credit_card::CreditCard;

pub mod prelude {
    #[cfg(feature = "credit-card")]
    pub use smenum_credit_card::CreditCard;
    pub use smenum_registry::{Enumerator, Registry, RegistryError, VariantKey};
}

