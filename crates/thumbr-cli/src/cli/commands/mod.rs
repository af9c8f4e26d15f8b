//! CLI command handlers, one file per command.

mod classify;
mod completions;
mod config;
mod rewrite;

pub use classify::run_classify;
pub use completions::run_completions;
pub use config::{run_config_path, run_config_show};
pub use rewrite::run_rewrite;
