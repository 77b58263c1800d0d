use smenum_derive::smenum_error;

#[smenum_error]
pub enum DemoError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        context: Option<String>,
    },
}

fn main() {}
