use crate::enumerator::Enumerator;
use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Family-qualified identity of a variant.
///
/// Keys from different families never compare equal, even when their codes
/// match; the hash covers the code only, so equal keys always hash alike.
#[derive(Debug, Clone, Copy)]
pub struct VariantKey {
    family: TypeId,
    family_name: &'static str,
    code: i32,
    name: &'static str,
}

impl VariantKey {
    /// Builds the key of `variant`.
    #[must_use]
    pub fn of<E: Enumerator>(variant: &E) -> Self {
        Self {
            family: TypeId::of::<E>(),
            family_name: type_name::<E>(),
            code: variant.code(),
            name: variant.name(),
        }
    }

    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Fully qualified type name of the owning family.
    #[must_use]
    pub const fn family(&self) -> &'static str {
        self.family_name
    }

    /// Returns `true` when the key belongs to family `E`.
    #[must_use]
    pub fn is<E: Enumerator>(&self) -> bool {
        self.family == TypeId::of::<E>()
    }

    /// Resolves the key back to a variant of `E`, or `None` for another family.
    #[must_use]
    pub fn downcast<E: Enumerator>(&self) -> Option<E> {
        if self.is::<E>() { E::from_code(self.code) } else { None }
    }
}

impl PartialEq for VariantKey {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family && self.code == other.code
    }
}

impl Eq for VariantKey {}

impl Hash for VariantKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
