#![allow(dead_code)]

use smenum_registry::Enumerator;

#[derive(Debug, Clone, Copy, Enumerator)]
enum Tier {
    #[enumerator(code = 1, name = "Gold")]
    Bronze,
    #[enumerator(code = 2)]
    Gold,
}

fn main() {}
