//! Preview binary - loads the content document, renders the page and prints it
//!
//! Usage:
//!   cargo run --bin preview                      # Render in the default language
//!   cargo run --bin preview -- --toggle          # Render, then toggle once
//!   cargo run --bin preview -- --toggle --toggle # Toggle twice (back to start)
//!   cargo run --bin preview -- --out page.html   # Write to a file instead of stdout
//!
//! Optional environment variables:
//! - CONTENT_SOURCE (URL or path, defaults to data.json)
//! - DEFAULT_LANGUAGE (ar or en, defaults to ar)
//! - REFETCH_ON_TOGGLE (defaults to false)
//! - FETCH_TIMEOUT_SECS (no timeout by default)

use anyhow::{bail, Context, Result};
use bilingual_portfolio::{config::Config, controller::LanguageController, template};
use std::fs;
use std::path::PathBuf;
use tracing::info;

struct Args {
    toggles: usize,
    out: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        toggles: 0,
        out: None,
    };
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--toggle" => args.toggles += 1,
            "--out" => {
                let path = iter.next().context("--out requires a path")?;
                args.out = Some(PathBuf::from(path));
            }
            other => bail!("Unknown argument: {}", other),
        }
    }

    Ok(args)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so the page can be piped
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bilingual_portfolio=info".parse()?)
                .add_directive("preview=info".parse()?),
        )
        .init();

    let args = parse_args()?;
    let config = Config::from_env()?;
    info!("Rendering content from {}", config.content_source);

    let mut controller = LanguageController::from_config(&config)?;
    let mut page = template::portfolio_template();
    controller.start(&mut page).await;

    for _ in 0..args.toggles {
        controller.toggle(&mut page).await;
    }

    let html = page.to_html();
    match args.out {
        Some(path) => {
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "✓ Wrote {} page to {}",
                controller.language().name(),
                path.display()
            );
        }
        None => println!("{}", html),
    }

    Ok(())
}
