//! Route emitter: writes one transformed document per route under
//! `{out}/{route}/index.html` and keeps the success/error ledger. A failing
//! route never stops the walk; it is logged and counted.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::page::PageData;
use crate::transform;

/// Which transform the run uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorMode {
    /// Full head rewrites, structured data, fallback content, payload.
    Full,
    /// Reduced transform for the CSS-inlined shell.
    InlineCss,
}

pub struct Emitter {
    out_root: PathBuf,
    base_html: String,
    mode: GeneratorMode,
    /// Canonical URLs of every successful write, in emission order.
    pub written: Vec<String>,
}

impl Emitter {
    pub fn new(out_root: &Path, base_html: String, mode: GeneratorMode) -> Self {
        Self {
            out_root: out_root.to_path_buf(),
            base_html,
            mode,
            written: Vec::new(),
        }
    }

    /// Transform and write one route.
    pub fn emit(&mut self, page: &PageData) -> Result<()> {
        let html = match self.mode {
            GeneratorMode::Full => transform::transform(&self.base_html, page),
            GeneratorMode::InlineCss => transform::transform_basic(&self.base_html, page),
        };
        self.write_route(&page.route_path(), &html)?;
        self.written.push(page.canonical());
        Ok(())
    }

    /// Write `index.html` under the route directory, creating parents.
    /// An empty route path targets the output root (the homepage).
    fn write_route(&self, route_path: &str, html: &str) -> Result<()> {
        let dir = if route_path.is_empty() {
            self.out_root.clone()
        } else {
            self.out_root.join(route_path)
        };
        fs::create_dir_all(&dir)
            .with_context(|| format!("could not create {}", dir.display()))?;
        let file = dir.join("index.html");
        fs::write(&file, html).with_context(|| format!("could not write {}", file.display()))?;
        Ok(())
    }

    pub fn out_root(&self) -> &Path {
        &self.out_root
    }
}

/// Per-stage success/error tally.
#[derive(Debug, Default, Clone, Copy)]
pub struct StageCounts {
    pub ok: usize,
    pub errors: usize,
}

/// Fold one route result into the tally; errors are logged with the route
/// identifier and never propagate.
pub fn record(counts: &mut StageCounts, route: &str, result: Result<()>) {
    match result {
        Ok(()) => counts.ok += 1,
        Err(e) => {
            warn!("Failed to generate {route}: {e:#}");
            counts.errors += 1;
        }
    }
}

/// Whole-run ledger, one row per stage.
#[derive(Debug, Default)]
pub struct RunSummary {
    stages: Vec<(&'static str, StageCounts)>,
    pub skipped: usize,
}

impl RunSummary {
    pub fn push(&mut self, stage: &'static str, counts: StageCounts) {
        self.stages.push((stage, counts));
    }

    pub fn total_ok(&self) -> usize {
        self.stages.iter().map(|(_, c)| c.ok).sum()
    }

    pub fn total_errors(&self) -> usize {
        self.stages.iter().map(|(_, c)| c.errors).sum()
    }

    pub fn print(&self) {
        println!("\nPrerender summary:");
        for (stage, counts) in &self.stages {
            println!("  {:<18} {:>5} ok  {:>3} errors", stage, counts.ok, counts.errors);
        }
        if self.skipped > 0 {
            println!("  {:<18} {:>5} skipped (unmatched state)", "cities", self.skipped);
        }
        println!(
            "  {:<18} {:>5} ok  {:>3} errors",
            "total",
            self.total_ok(),
            self.total_errors()
        );
    }
}
