#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the workspace.
//! This crate turns plain fieldless enums into closed variant families and
//! removes the boilerplate around the per-crate error enums.
//!
//! ## Usage
//! Families depend on `smenum-registry` and derive through this crate:
//! ```toml
//! [dependencies]
//! smenum-derive = { path = "../infra/derive" }
//! smenum-registry = { path = "../crates/shared/registry" }
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate,
//! but should be copied into consuming crates’ tests/examples as needed.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives a closed variant family for a fieldless enum.
///
/// Every variant is declared once, at compile time, with its numeric code and
/// display name. The macro replaces runtime discovery with a static table and
/// wires the family into its process-wide registry.
///
/// # Generated Items
///
/// * `smenum_registry::Enumerator` with `VARIANTS`, `code`, `name` and a
///   `registry()` backed by a per-family `LazyLock`.
/// * `PartialEq`/`Eq` comparing codes and `Hash` derived from the code only.
/// * `Display` writing the display name verbatim.
/// * `TryFrom<i32>` and `FromStr` returning `smenum_registry::RegistryError`.
///
/// # Attributes
///
/// * `#[enumerator(code = 1)]` - Required on every variant.
/// * `#[enumerator(code = 1, name = "Standard")]` - Overrides the display name
///   (defaults to the variant identifier).
/// * `#[enumerator(crate = some::path)]` - On the enum; overrides the path used
///   to reach the registry crate (defaults to `::smenum_registry`).
///
/// # Errors
///
/// Emits a compile-time error for non-enums, generic enums, variants with fields,
/// a missing `code`, and duplicate codes or names within the family.
///
/// # Example
///
/// ```rust,ignore
/// use smenum_derive::Enumerator;
///
/// #[derive(Debug, Clone, Copy, Enumerator)]
/// pub enum Tier {
///     #[enumerator(code = 1)]
///     Bronze,
///     #[enumerator(code = 2, name = "Silver+")]
///     Silver,
/// }
/// ```
#[proc_macro_derive(Enumerator, attributes(enumerator))]
pub fn derive_enumerator(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::enumerator::expand_derive(input).into()
}

/// A high-level attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source`
///   field (or a field marked `#[source]`/`#[from]`), enabling the `?` operator.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` if an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping a source error must also carry a context field.
/// 4. Tuple or unit variants are rejected to keep error wiring explicit.
///
/// # Example
///
/// ```rust,ignore
/// use smenum_derive::smenum_error;
/// use std::borrow::Cow;
///
/// #[smenum_error]
/// pub enum LoaderError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read() -> Result<String, LoaderError> {
///     std::fs::read_to_string("cards.toml").context("Reading card table")
/// }
/// ```
#[proc_macro_attribute]
pub fn smenum_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
