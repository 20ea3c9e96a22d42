use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use spdlog::{error, info, warn};

use folio::builder::{build_feed, check_posts};
use folio::config::LogLevel;
use folio::logger::configure_logger;
use folio::post_template::create_post;

use crate::config::{default_log_location, open_config};

mod config;

const CFG_FILE_NAME: &str = "folio.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Log debug messages to the console
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validates the posts and writes the RSS feed
    Build {
        /// Output file. Defaults to the location in the configuration
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validates the posts without writing anything
    Check,
    /// Creates a new post with a valid front matter
    New {
        /// Title of the post
        #[arg(short, long)]
        title: String,

        /// Date of the post (YYYY-MM-DD). Defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

fn run(args: Args) -> Result<()> {
    let config_path = args.config_path.map(PathBuf::from);
    let config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => bail!("{}. Please run folio --help", err),
    };

    let default_level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    if let Err(err) = configure_logger(config.log.as_ref(), default_log_location(), default_level) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    match args.command {
        Command::Build { output } => {
            let output = output.map(PathBuf::from);
            let summary = build_feed(&config, output.as_deref())?;
            info!("Done: {} entries in {}", summary.entries, summary.output.display());
        }
        Command::Check => {
            let count = check_posts(&config)?;
            info!("All {} posts are valid", count);
        }
        Command::New { title, date } => {
            let date = match date {
                Some(date) => NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                    .with_context(|| format!("Invalid date {}", date))?,
                None => Local::now().date_naive(),
            };
            let path = create_post(&config.posts_dir(), &title, &date)?;
            info!("New post written to {}", path.display());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
