use std::borrow::Cow;

/// Errors raised while building a family registry or resolving a variant.
#[smenum_derive::smenum_error]
#[derive(Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two variants of the same family declare the same code.
    #[error("Duplicate code {code} in {family}{}: `{first}` and `{second}`", format_context(.context))]
    DuplicateCode {
        family: &'static str,
        code: i32,
        first: &'static str,
        second: &'static str,
        context: Option<Cow<'static, str>>,
    },

    /// Two variants of the same family declare the same display name.
    #[error("Duplicate name \"{name}\" in {family}{}", format_context(.context))]
    DuplicateName { family: &'static str, name: &'static str, context: Option<Cow<'static, str>> },

    /// A family without any declared variant.
    #[error("Family {family} declares no variants{}", format_context(.context))]
    EmptyFamily { family: &'static str, context: Option<Cow<'static, str>> },

    /// No variant of the family carries the requested code.
    #[error("Unknown code {code} for {family}{}", format_context(.context))]
    UnknownCode { family: &'static str, code: i32, context: Option<Cow<'static, str>> },

    /// No variant of the family carries the requested name.
    #[error("Unknown name \"{name}\" for {family}{}", format_context(.context))]
    UnknownName { family: &'static str, name: String, context: Option<Cow<'static, str>> },
}
