//! `thumbr classify URL...` – show the branch each reference takes.

use anyhow::Result;
use std::io::{self, Write};
use thumbr_core::config::RewriterConfig;
use thumbr_core::ImageRewriter;

pub fn run_classify(cfg: RewriterConfig, urls: &[String]) -> Result<()> {
    let rewriter = ImageRewriter::new(cfg)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for url in urls {
        writeln!(out, "{}\t{}", rewriter.classify(url.as_str()), url)?;
    }
    Ok(())
}
