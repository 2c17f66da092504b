//! `scaffold builder` — scaffold a new module or graft entities into one.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use scaffold_core::Config;
use scaffold_graft::{generate_builder, GraftReport, WriteResult};

/// Arguments for `scaffold builder`.
#[derive(Args, Debug)]
pub struct BuilderArgs {
    /// Module the entities belong to (e.g. "shop").
    #[arg(long, short = 'm')]
    pub module: String,

    /// Comma-separated table names to wire (e.g. "product,category").
    #[arg(long, short = 't', value_delimiter = ',')]
    pub tables: Vec<String>,

    /// API version segment used in routes and import paths.
    #[arg(long, short = 'v', default_value = "v1")]
    pub version: String,

    /// Render the wiring and routes files from scratch even if they exist.
    #[arg(long)]
    pub new_module: bool,

    /// Show unified diffs of what would change without writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Path to a scaffold.yaml config (default: ./scaffold.yaml if present).
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Directory of .tera templates overriding the embedded ones.
    #[arg(long)]
    pub template_dir: Option<PathBuf>,
}

impl BuilderArgs {
    pub fn run(self) -> Result<()> {
        let tables: Vec<String> = self
            .tables
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if tables.is_empty() {
            bail!("provide at least one table name via --tables");
        }

        let mut config = Config::load(self.config.as_deref()).context("failed to load config")?;
        if self.template_dir.is_some() {
            config.template_dir = self.template_dir.clone();
        }

        let report = generate_builder(
            &config,
            &self.module,
            &self.version,
            &tables,
            self.new_module,
            self.dry_run,
        )
        .with_context(|| format!("builder failed for module '{}'", self.module))?;

        print_report(&report, self.dry_run);
        Ok(())
    }
}

fn print_report(report: &GraftReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };

    if report.is_noop() {
        println!(
            "{prefix}{} '{}' — all requested entities already wired",
            "✓".green(),
            report.module
        );
    } else {
        let added: Vec<&str> = report.builder_added.iter().map(|e| e.name()).collect();
        println!(
            "{prefix}{} '{}' — added: {}",
            "✓".green(),
            report.module,
            if added.is_empty() {
                "(routes only)".to_string()
            } else {
                added.join(", ")
            }
        );
    }

    for w in &report.writes {
        match w {
            WriteResult::Written { path } => println!("  ✎  {}", path.display()),
            WriteResult::WouldWrite { path } => println!("  ~  {}", path.display()),
            WriteResult::Unchanged { path } => println!("  ·  {}", path.display()),
        }
    }

    for diagnostic in &report.diagnostics {
        eprintln!("  {} {diagnostic}", "warning:".yellow());
    }

    for diff in &report.diffs {
        print!("{}", diff.diff);
        if !diff.diff.ends_with('\n') {
            println!();
        }
    }
}
