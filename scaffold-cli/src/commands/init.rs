//! `scaffold init` — copy embedded templates out for customization.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use scaffold_renderer::engine::embedded_templates;

/// Arguments for `scaffold init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the template files into.
    #[arg(long, short = 'd', default_value = "./templates")]
    pub dir: PathBuf,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("cannot create '{}'", self.dir.display()))?;

        for &(name, content) in embedded_templates() {
            let path = self.dir.join(name);
            if path.exists() {
                println!("  ·  {} (exists, skipped)", path.display());
                continue;
            }
            fs::write(&path, content)
                .with_context(|| format!("cannot write '{}'", path.display()))?;
            println!("  ✎  {}", path.display());
        }

        println!(
            "{} Templates written to '{}'. Point --template-dir (or `template_dir` in scaffold.yaml) at it.",
            "✓".green(),
            self.dir.display()
        );
        Ok(())
    }
}
