use smenum_derive::smenum_error;
use std::borrow::Cow;

#[smenum_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown tier{}: {code}", format_context(.context))]
    UnknownTier { code: i32, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn lookup(code: i32) -> Result<&'static str, DemoError> {
    match code {
        1 => Ok("Standard"),
        _ => Err(DemoError::UnknownTier { code, context: None }),
    }
}

fn main() {
    let err = lookup(9).context("resolving tier").unwrap_err();
    assert_eq!(err.to_string(), "Unknown tier (resolving tier): 9");

    let io: Result<(), DemoError> =
        Err(std::io::Error::other("disk")).context("reading table");
    assert!(matches!(io, Err(DemoError::Io { context: Some(_), .. })));

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");
}
