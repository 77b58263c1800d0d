//! Kernel utilities shared by the applications.
//! Keep this crate lightweight; it owns the layered configuration loader and
//! the configuration model consumed by the binaries.
//!
//! ## Config loading
//! ```rust
//! use smenum_kernel::config::{AppConfig, load_config};
//!
//! // No file: defaults plus `SMENUM__*` environment overrides.
//! let cfg: AppConfig = load_config(None::<&str>).unwrap();
//! assert!(!cfg.log.level.is_empty());
//! ```

pub mod config;
