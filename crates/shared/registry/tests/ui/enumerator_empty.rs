#![allow(dead_code)]

use smenum_registry::Enumerator;

#[derive(Debug, Clone, Copy, Enumerator)]
enum Tier {}

fn main() {}
