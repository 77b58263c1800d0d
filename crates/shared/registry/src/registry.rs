use crate::enumerator::Enumerator;
use crate::error::RegistryError;
use fxhash::FxHashMap;
use std::any::type_name;
use tracing::{debug, trace};

/// Read-only lookup tables for one variant family.
///
/// Built once per family (see [`Enumerator::registry`]) and never mutated
/// afterwards; lookups take `&self` and need no synchronization.
#[derive(Debug)]
pub struct Registry<E: 'static> {
    family: &'static str,
    variants: &'static [E],
    by_code: FxHashMap<i32, E>,
    by_name: FxHashMap<&'static str, E>,
}

impl<E: Enumerator> Registry<E> {
    /// Discovers the given variants and indexes them by code and by name.
    ///
    /// # Errors
    /// * [`RegistryError::EmptyFamily`] if `variants` is empty.
    /// * [`RegistryError::DuplicateCode`] if two variants share a code.
    /// * [`RegistryError::DuplicateName`] if two variants share a display name.
    pub fn try_build(variants: &'static [E]) -> Result<Self, RegistryError> {
        let family = type_name::<E>();

        if variants.is_empty() {
            return Err(RegistryError::EmptyFamily { family, context: None });
        }

        let mut by_code = FxHashMap::with_capacity_and_hasher(variants.len(), Default::default());
        let mut by_name = FxHashMap::with_capacity_and_hasher(variants.len(), Default::default());

        for &variant in variants {
            if let Some(first) = by_code.insert(variant.code(), variant) {
                return Err(RegistryError::DuplicateCode {
                    family,
                    code: variant.code(),
                    first: first.name(),
                    second: variant.name(),
                    context: None,
                });
            }
            if by_name.insert(variant.name(), variant).is_some() {
                return Err(RegistryError::DuplicateName {
                    family,
                    name: variant.name(),
                    context: None,
                });
            }
        }

        debug!(family, variants = variants.len(), "Variant registry built");

        Ok(Self { family, variants, by_code, by_name })
    }

    /// Builds the registry for a family that must be well-formed.
    ///
    /// Used by the derive-generated static initializer: an ill-formed family is
    /// a programming error and aborts initialization loudly.
    ///
    /// # Panics
    /// Panics with the [`RegistryError`] message when [`Registry::try_build`] fails.
    #[must_use]
    pub fn build(variants: &'static [E]) -> Self {
        Self::try_build(variants).unwrap_or_else(|err| panic!("invalid variant family: {err}"))
    }

    /// Returns the variant carrying `code`.
    #[inline]
    #[must_use]
    pub fn from_code(&self, code: i32) -> Option<E> {
        let found = self.by_code.get(&code).copied();
        if found.is_none() {
            trace!(family = self.family, code, "Unknown variant code");
        }
        found
    }

    /// Returns the variant whose display name equals `name` (case-sensitive).
    #[inline]
    #[must_use]
    pub fn from_name(&self, name: &str) -> Option<E> {
        let found = self.by_name.get(name).copied();
        if found.is_none() {
            trace!(family = self.family, name, "Unknown variant name");
        }
        found
    }

    /// Like [`Registry::from_code`], for callers that propagate with `?`.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownCode`] when no variant matches.
    pub fn try_from_code(&self, code: i32) -> Result<E, RegistryError> {
        self.from_code(code).ok_or(RegistryError::UnknownCode {
            family: self.family,
            code,
            context: None,
        })
    }

    /// Like [`Registry::from_name`], for callers that propagate with `?`.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownName`] when no variant matches.
    pub fn try_from_name(&self, name: &str) -> Result<E, RegistryError> {
        self.from_name(name).ok_or_else(|| RegistryError::UnknownName {
            family: self.family,
            name: name.to_owned(),
            context: None,
        })
    }

    #[inline]
    #[must_use]
    pub fn contains_code(&self, code: i32) -> bool {
        self.by_code.contains_key(&code)
    }

    /// Variants in declaration order.
    #[inline]
    #[must_use]
    pub const fn variants(&self) -> &'static [E] {
        self.variants
    }

    pub fn iter(&self) -> impl Iterator<Item = E> + '_ {
        self.variants.iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Fully qualified type name of the family.
    #[inline]
    #[must_use]
    pub const fn family(&self) -> &'static str {
        self.family
    }
}
