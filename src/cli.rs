use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use crate::catalog::source::{BookSource, HttpBookSource, StaticBookSource};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the book page HTML to stdout.
    Render(RenderArgs),
    /// Print the page metadata as JSON.
    Metadata(RenderArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Book slug.
    #[arg(long)]
    pub slug: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Catalog API base URL (must be http/https).
    #[arg(long, default_value = "http://127.0.0.1:8000/api")]
    pub api_base_url: String,

    /// Read books from a JSON file instead of the catalog API.
    #[arg(long, conflicts_with = "api_base_url")]
    pub catalog: Option<PathBuf>,

    /// Catalog request timeout.
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}

impl SourceArgs {
    pub async fn build(&self) -> anyhow::Result<Arc<dyn BookSource>> {
        if let Some(path) = &self.catalog {
            let source = StaticBookSource::load(path)
                .await
                .context("load static catalog")?;
            return Ok(Arc::new(source));
        }

        let source = HttpBookSource::new(
            &self.api_base_url,
            Duration::from_secs(self.timeout_secs.max(1)),
        )?;
        tracing::info!(api_base_url = %self.api_base_url, "using catalog api");
        Ok(Arc::new(source))
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct AppArgs {
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,

    #[command(flatten)]
    pub source: SourceArgs,
}
