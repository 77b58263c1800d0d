use crate::key::VariantKey;
use crate::registry::Registry;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A closed family of named, coded variants.
///
/// Implement it with `#[derive(Enumerator)]`; the derive keeps `VARIANTS`,
/// `code`, `name` and the registry in sync and guarantees unique codes and
/// names at compile time.
///
/// Equality and hashing are value based: two variants are equal iff they
/// share a code, and the hash is computed from the code alone. Comparing
/// variants of *different* families goes through [`Enumerator::key`].
pub trait Enumerator: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static {
    /// Every declared variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// Numeric code, unique within the family.
    fn code(&self) -> i32;

    /// Display name, unique within the family.
    fn name(&self) -> &'static str;

    /// The family's process-wide registry, built on first access.
    fn registry() -> &'static Registry<Self>;

    /// Returns the variant carrying `code`, or `None`.
    #[inline]
    #[must_use]
    fn from_code(code: i32) -> Option<Self> {
        Self::registry().from_code(code)
    }

    /// Returns the variant whose display name equals `name` exactly (case-sensitive).
    #[inline]
    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        Self::registry().from_name(name)
    }

    /// All variants of the family.
    #[inline]
    #[must_use]
    fn variants() -> &'static [Self] {
        Self::registry().variants()
    }

    /// Type-erased identity of this variant, comparable across families.
    #[inline]
    #[must_use]
    fn key(&self) -> VariantKey {
        VariantKey::of(self)
    }
}
