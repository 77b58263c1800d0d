use smenum_registry::Enumerator;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Enumerator)]
pub enum Shipping {
    #[enumerator(code = 10, name = "Ground")]
    Ground,
    #[enumerator(code = 20, name = "Next Day")]
    NextDay,
    #[enumerator(code = -1)]
    Pickup,
}

impl Shipping {
    pub const fn days(self) -> u8 {
        match self {
            Self::Ground => 5,
            Self::NextDay => 1,
            Self::Pickup => 0,
        }
    }
}

fn main() {
    let next_day: Shipping = "Next Day".parse().unwrap();
    assert_eq!(next_day.days(), 1);
    assert_eq!(Shipping::try_from(-1).ok(), Some(Shipping::Pickup));

    let set: HashSet<Shipping> = Shipping::variants().iter().copied().collect();
    assert_eq!(set.len(), 3);
}
