//! Command line interface
//!
//! Without a subcommand the interactive UI starts. The subcommands expose the format
//! engine for scripts and shell use.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::clipboard::{ClipboardSink, Osc52Clipboard};
use crate::config::Config;
use crate::constants::SUCCESS_COPIED;
use crate::notification::{LogNotifier, Notifier};
use crate::timestamp::{decode, encode, FormatEngine, LocaleFormatter, Zone};
use crate::utils::datetime;

#[derive(Parser, Debug)]
#[command(name = "etg")]
#[command(about = "Event Timestamp Generator - build Discord <t:UNIX:FORMAT> tokens", long_about = None)]
pub struct Cli {
    /// Use a specific configuration file
    #[arg(long, global = true, env = "ETG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured timezone ("local", "utc", "+05:30")
    #[arg(long, global = true)]
    pub timezone: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a token for a date and time
    Encode(EncodeArgs),
    /// Split a token into its moment and format
    Decode {
        /// Token such as <t:1700000000:F>
        token: String,
    },
    /// Show how a token renders
    Render {
        /// Token such as <t:1700000000:R>
        token: String,
    },
    /// Render a moment in every format
    Preview(PreviewArgs),
    /// Configuration helpers
    Config {
        /// Write a default configuration file (to PATH or the XDG location)
        #[arg(long, value_name = "PATH")]
        generate: Option<Option<PathBuf>>,
    },
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Date and time, e.g. 2025-01-15T14:30 (defaults to now)
    #[arg(long)]
    pub at: Option<String>,
    /// Format code: t, T, d, D, f, F or R
    #[arg(short, long, default_value_t = 'F')]
    pub format: char,
    /// Also copy the token to the clipboard
    #[arg(long, default_value_t = false)]
    pub copy: bool,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Date and time, e.g. 2025-01-15T14:30 (defaults to now)
    #[arg(long)]
    pub at: Option<String>,
    /// Print JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    /// Load the configuration this invocation asks for, with CLI overrides applied
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)?,
            None => Config::load()?,
        };
        if let Some(timezone) = &self.timezone {
            config.display.timezone = timezone.clone();
            config.validate()?;
        }
        Ok(config)
    }
}

/// Run a non-interactive subcommand
pub async fn run_command(command: Commands, config: &Config) -> Result<()> {
    let engine = FormatEngine::new(config.display.formatter()?);
    let zone = config.display.zone()?;

    match command {
        Commands::Encode(args) => {
            let unix_seconds = resolve_moment(args.at.as_deref(), zone)?;
            let token = encode(unix_seconds, args.format)?;
            println!("{token}");
            if args.copy {
                let mut notifier = LogNotifier;
                match Osc52Clipboard::stdout().write_text(&token.to_string()).await {
                    Ok(()) => notifier.notify(SUCCESS_COPIED, None),
                    Err(e) => notifier.notify(&e.to_string(), None),
                }
            }
        }
        Commands::Decode { token } => {
            println!("{}", decode_output(&token)?);
        }
        Commands::Render { token } => {
            println!("{}", render_output(&engine, &token, Utc::now())?);
        }
        Commands::Preview(args) => {
            let unix_seconds = resolve_moment(args.at.as_deref(), zone)?;
            println!("{}", preview_output(&engine, unix_seconds, Utc::now(), args.json)?);
        }
        Commands::Config { generate } => match generate {
            Some(path) => {
                let path = match path {
                    Some(path) => path,
                    None => Config::get_default_config_path()?,
                };
                Config::generate_default_config(path)?;
            }
            None => {
                println!("{}", toml::to_string_pretty(config).context("Failed to serialize config")?);
            }
        },
    }

    Ok(())
}

/// `decode` output: the moment, the letter and its label
pub fn decode_output(token: &str) -> Result<String> {
    let (unix_seconds, code) = decode(token)?;
    Ok(format!("{unix_seconds} {code} ({})", code.label()))
}

/// `render` output: the token as Discord would display it at `now`
pub fn render_output<L: LocaleFormatter>(engine: &FormatEngine<L>, token: &str, now: DateTime<Utc>) -> Result<String> {
    engine
        .render_token(token, now)
        .with_context(|| format!("Failed to render {:?}", token.trim()))
}

/// `preview` output: one line per format, or a JSON object keyed by format letter
pub fn preview_output<L: LocaleFormatter>(
    engine: &FormatEngine<L>,
    unix_seconds: i64,
    now: DateTime<Utc>,
    json: bool,
) -> Result<String> {
    let previews = engine.preview_all(unix_seconds, now)?;
    if json {
        let map: serde_json::Map<String, serde_json::Value> = previews
            .into_iter()
            .map(|(code, text)| (code.to_string(), serde_json::Value::String(text)))
            .collect();
        return Ok(serde_json::to_string_pretty(&map)?);
    }

    Ok(previews
        .into_iter()
        .map(|(code, text)| format!("<t:{unix_seconds}:{code}>  {:<16} {text}", code.label()))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Parse `--at`, defaulting to the current time
fn resolve_moment(at: Option<&str>, zone: Zone) -> Result<i64> {
    match at {
        Some(text) => datetime::parse_moment(text, zone)?.context("Please select a date and time"),
        None => Ok(Utc::now().timestamp()),
    }
}

