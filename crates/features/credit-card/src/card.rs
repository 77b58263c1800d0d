use smenum_registry::Enumerator;
use tracing::trace;

/// A credit card tier.
#[derive(Debug, Clone, Copy, Enumerator)]
pub enum CreditCard {
    #[enumerator(code = 1)]
    Standard,
    #[enumerator(code = 2)]
    Premium,
    #[enumerator(code = 3)]
    Platinum,
    #[enumerator(code = 4)]
    Gold,
}

impl CreditCard {
    /// Fractional discount granted by the tier, in `[0, 1)`.
    #[must_use]
    pub const fn discount(self) -> f64 {
        match self {
            Self::Standard => 0.01,
            Self::Premium => 0.05,
            Self::Platinum => 0.10,
            Self::Gold => 0.20,
        }
    }

    /// Price of `amount` after the tier's discount.
    #[must_use]
    pub fn apply_discount(self, amount: f64) -> f64 {
        let discounted = amount * (1.0 - self.discount());
        trace!(card = %self, amount, discounted, "Discount applied");
        discounted
    }
}
