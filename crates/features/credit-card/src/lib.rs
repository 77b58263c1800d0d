//! # Credit Card Tiers
//!
//! The `CreditCard` family: four fixed tiers, each with a numeric code, a
//! display name and the discount rate granted to its holder.
//!
//! | Name     | Code | Discount |
//! |----------|------|----------|
//! | Standard | 1    | 0.01     |
//! | Premium  | 2    | 0.05     |
//! | Platinum | 3    | 0.10     |
//! | Gold     | 4    | 0.20     |
//!
//! ## Example
//!
//! ```rust
//! use smenum_credit_card::CreditCard;
//! use smenum_registry::Enumerator;
//!
//! let card = CreditCard::from_name("Platinum").unwrap();
//! assert!((card.discount() - 0.1).abs() < f64::EPSILON);
//! assert_eq!(CreditCard::from_code(99), None);
//! ```

mod card;

pub use crate::card::CreditCard;
