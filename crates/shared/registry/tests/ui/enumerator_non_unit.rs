#![allow(dead_code)]

use smenum_registry::Enumerator;

#[derive(Debug, Clone, Copy, Enumerator)]
enum Tier {
    #[enumerator(code = 1)]
    Bronze(u8),
}

fn main() {}
