mod catalog;
mod content;
mod emit;
mod inline;
mod page;
mod pipeline;
mod sitemap;
mod transform;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use emit::GeneratorMode;

#[derive(Parser)]
#[command(name = "prerender", about = "Static HTML prerenderer for the Medtransic site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full prerender: SEO tags, structured data, fallback content, sitemap
    Generate {
        /// Built SPA directory containing index.html
        #[arg(long, default_value = "dist")]
        dist: PathBuf,
        /// Output root (defaults to the dist directory, overwriting in place)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Simplified prerender with the CSS bundle inlined into each page
    InlineCss {
        #[arg(long, default_value = "dist")]
        dist: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let (dist, out, mode) = match cli.command {
        Commands::Generate { dist, out } => (dist, out, GeneratorMode::Full),
        Commands::InlineCss { dist, out } => (dist, out, GeneratorMode::InlineCss),
    };
    let out = out.unwrap_or_else(|| dist.clone());

    let summary = pipeline::run(&dist, &out, mode).await?;
    summary.print();

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
