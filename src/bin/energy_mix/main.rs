//! `energy-mix`: renders an hourly production snapshot as a grid of glyphs.

mod cli;
mod config;
mod logging;

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use clap::Parser;
use jiff::Timestamp;
use tracing::info;
use twine_core::Model;

use energy_mix::{models::mix::Production, support::entsoe::TimeInterval};

use cli::{Cli, Command, QueryArgs, TweetArgs};
use config::Config;

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::Tweet(args) => tweet(config, &args),
        Command::Query(args) => query(config, &args),
    }
}

fn tweet(config: Config, args: &TweetArgs) -> Result<()> {
    let config = config.with_tweet_args(args);
    let mut production = read_snapshot(&args.snapshot)?;

    if config.group {
        production = production.grouped(&config.grouping);
    }
    if config.sort {
        production = production.sorted_descending();
    }

    info!(
        sources = production.len(),
        method = ?config.method,
        "rendering snapshot"
    );

    let tweet = config.mix_tweet()?.call(&production)?;
    println!("{tweet}");
    Ok(())
}

fn query(config: Config, args: &QueryArgs) -> Result<()> {
    let mut query = config.entsoe;
    if let Some(token) = &args.token {
        query = query.with_security_token(token.clone());
    }

    let now = args.now.unwrap_or_else(Timestamp::now);
    let interval = TimeInterval::past_hour(now).context("no hour precedes the given time")?;

    if args.params {
        for (name, value) in query.params(&interval) {
            println!("{name}={value}");
        }
    } else {
        println!("{}", query.url(&interval));
    }
    Ok(())
}

fn read_snapshot(path: &Path) -> Result<Production> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read snapshot from stdin")?;
        text
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?
    };

    serde_json::from_str(&text).context("invalid production snapshot")
}
