//! # Homeport - Self-Hosted Start Page
//!
//! Loads one JSON document describing search engines, quick links, and
//! categorized link cards, renders it as a personal start page, and serves
//! it locally (or exports it to a static HTML file).

mod config;
mod constants;
mod loader;
mod models;
mod page;
mod render;
mod server;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use config::Config;
use loader::DataSource;
use page::Page;

/// Homeport - Self-Hosted Start Page
#[derive(Parser, Debug)]
#[command(name = "homeport", version, about = "A personal start page served from one JSON document")]
struct Cli {
    /// Data document: an http(s) URL or a file path
    #[arg(long, short = 'd', value_name = "SOURCE")]
    data: Option<String>,

    /// Listen address for the page server (e.g. "127.0.0.1:7420")
    #[arg(long, short = 'l', value_name = "ADDR")]
    listen: Option<String>,

    /// Render the page once to this file instead of serving
    #[arg(long, short = 'o', value_name = "FILE")]
    out: Option<PathBuf>,

    /// Page title
    #[arg(long, short = 't')]
    title: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Load and apply CLI overrides to config
    let mut config = Config::load();
    if let Some(source) = cli.data {
        config.data_source = source;
    }
    if let Some(addr) = cli.listen {
        config.listen_addr = addr;
    }
    if let Some(title) = cli.title {
        config.page_title = title;
    }

    // One load, before any rendering. On failure the page stays in its
    // skeleton state (serve mode) or nothing is written (export mode).
    let source = DataSource::parse(&config.data_source);
    let page = match source.load().await {
        Ok(data) => Some(Page::new(&config.page_title, data)),
        Err(e) => {
            log::error!("Failed to load data from {}: {}", config.data_source, e);
            None
        }
    };

    match cli.out {
        Some(path) => {
            let page = page.ok_or_else(|| anyhow!("nothing to export: the data document did not load"))?;
            std::fs::write(&path, page.render())?;
            log::info!("Wrote {}", path.display());
            Ok(())
        }
        None => server::serve(&config.listen_addr, &config.page_title, page),
    }
}
