use anyhow::Result;
use clap::Parser;
use literate_theme::cli::{normalize_args, Cli, Config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    let config = Config::from_cli(cli)?;
    let output = literate_theme::run(&config)?;

    println!("Saved to {}", console::style(output.display()).bold());
    Ok(())
}
