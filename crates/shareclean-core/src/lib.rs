//! Share-link cleaning: per-host parameter policies, platform path rewrites
//! and short-link resolution.

pub mod cleaner;
pub mod config;
pub mod fetch;
pub mod filter;
pub mod logging;
pub mod resolver;
pub mod rules;
pub mod transform;

pub use cleaner::{clean_sync, clean_sync_with, CleanOptions, Cleaner};
pub use config::ShareCleanConfig;
