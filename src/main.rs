mod browser;
mod categories;
mod extract;
mod output;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "roadmap_scraper", about = "Scrape roadmap.sh diagram labels into a text file")]
struct Cli {
    /// Newline-delimited category list, one roadmap per line
    #[arg(long, default_value = "categories.txt")]
    categories: PathBuf,
    /// File the extracted labels are appended to
    #[arg(long, default_value = "roadmaps.txt")]
    output: PathBuf,
    /// Fixed delay in seconds, used both between categories and while
    /// waiting for the diagram to render after navigation
    #[arg(long, default_value = "6")]
    delay_secs: u64,
    /// Base URL the category token is appended to
    #[arg(long, default_value = "https://www.roadmap.sh/")]
    base_url: String,
    /// Show the browser window instead of running headless
    #[arg(long)]
    headed: bool,
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

    let cats = categories::load(&cli.categories)?;
    if cats.is_empty() {
        println!("No categories in {}.", cli.categories.display());
        return Ok(());
    }
    println!("Scraping {} categories...", cats.len());

    let session = browser::Session::launch(cli.headed).await?;
    let result = scrape_all(&session, &cats, &cli).await;

    // Tear the browser down on the failure path too, before propagating.
    if let Err(e) = session.close().await {
        warn!("Browser did not shut down cleanly: {e:#}");
    }
    result?;

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}

/// Process categories strictly in order: sleep, navigate, extract, append.
/// The first hard failure aborts the remaining categories; a page with no
/// diagram is tolerated and written as an empty record.
async fn scrape_all(session: &browser::Session, cats: &[String], cli: &Cli) -> anyhow::Result<()> {
    let delay = Duration::from_secs(cli.delay_secs);

    let pb = ProgressBar::new(cats.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    for category in cats {
        tokio::time::sleep(delay).await;

        // Raw concatenation, no percent-encoding: the category token is
        // trusted to already be a valid path segment.
        let url = format!("{}{}", cli.base_url, category);
        let html = session.render(&url, delay).await?;
        let labels = extract::labels(&html);
        if labels.is_empty() {
            warn!("No diagram labels found for '{category}'");
        }
        output::append_record(&cli.output, &labels)
            .with_context(|| format!("Failed to append record for '{category}'"))?;

        info!("{category}: {} labels", labels.len());
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(())
}
