//! File layout strategies.
//!
//! - [`flat`] - per-program `_types`/`_constants` files and one file per
//!   service, optionally nested in namespace directories
//! - [`autoload`] - one file per ruby constant, for zeitwerk

pub mod autoload;
pub mod flat;
