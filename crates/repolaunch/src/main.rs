mod cli;
mod color;
mod config;
mod logging;
mod output;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use github_source::GitHubClient;
use launcher_core::{build_envelope, Renderer};
use output::{output_error, print_envelope};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    color::init(cli.color);
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        output_error(&e);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli.user, cli.token, cli.cache_seconds, cli.api_url);
    config.validate()?;

    let token = config
        .token
        .as_deref()
        .ok_or_else(|| anyhow!("GitHub token not configured"))?;
    let client = GitHubClient::with_base_url(&config.api_url, config.user.as_deref(), token);
    let renderer = Renderer::new(&config.web_url);

    tracing::debug!(api_url = %config.api_url, query = %cli.query, "starting repository listing");
    let envelope = build_envelope(
        &client,
        &config.supplemental,
        &renderer,
        &cli.query,
        config.cache_seconds,
    );

    print_envelope(&envelope, cli.pretty)
}
