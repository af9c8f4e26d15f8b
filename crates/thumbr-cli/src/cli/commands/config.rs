//! `thumbr config path|show`.

use anyhow::Result;
use std::path::Path;
use thumbr_core::config::{self, RewriterConfig};

pub fn run_config_path(explicit: Option<&Path>) -> Result<()> {
    match explicit {
        Some(path) => println!("{}", path.display()),
        None => println!("{}", config::config_path()?.display()),
    }
    Ok(())
}

pub fn run_config_show(cfg: &RewriterConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
