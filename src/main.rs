use std::io::Write as _;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

use bookpage::catalog::scope::RequestScope;
use bookpage::cli::{Cli, Command};
use bookpage::config::SiteConfig;
use bookpage::page::metadata::generate_metadata;
use bookpage::page::{PageOutcome, render_book};

#[tokio::main]
async fn main() -> ExitCode {
    match try_main().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> anyhow::Result<ExitCode> {
    bookpage::logging::init("warn").context("init logging")?;

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed cli");
    let config = SiteConfig::from_env();

    match cli.command {
        Command::Render(args) => {
            let scope = RequestScope::new(args.source.build().await?);
            match render_book(&scope, &args.slug, &config).await {
                PageOutcome::Found(page) => {
                    write_stdout(&page.markup.into_string())?;
                }
                PageOutcome::NotFound => {
                    eprintln!("book not found: {}", args.slug);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Metadata(args) => {
            let scope = RequestScope::new(args.source.build().await?);
            let metadata = generate_metadata(&scope, &args.slug, &config).await;
            let json = serde_json::to_string_pretty(&metadata).context("serialize metadata")?;
            write_stdout(&json)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn write_stdout(text: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}").context("write stdout")?;
    Ok(())
}
