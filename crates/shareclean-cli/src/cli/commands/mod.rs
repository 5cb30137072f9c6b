//! CLI command handlers, one per file.

mod clean;
mod completions;
mod man;
mod rules;

pub use clean::{run_clean, CleanArgs};
pub use completions::run_completions;
pub use man::run_man;
pub use rules::run_rules;

#[cfg(test)]
pub(crate) use clean::effective_options;
#[cfg(test)]
pub(crate) use rules::describe;
