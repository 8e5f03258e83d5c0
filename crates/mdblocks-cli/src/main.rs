use anyhow::{Context, Result};
use clap::Parser;
use mdblocks_config::{Config, ParserConfig};
use mdblocks_engine::{ParseOptions, SecureSchemeResolver, parse_with, to_json, to_json_pretty};
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "mdblocks")]
#[command(about = "Convert Markdown into document store content blocks (JSON)")]
struct Cli {
    /// Input Markdown file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Config file (defaults to ~/.config/mdblocks/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print compact JSON instead of the configured format
    #[arg(long)]
    compact: bool,

    /// Emit a code block for a fence left open at end of input
    #[arg(long)]
    close_unterminated_fence: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config = load_config(cli.config.as_deref())?;

    let mut options = parse_options(&config.parser);
    if cli.close_unterminated_fence {
        options.close_unterminated_fence = true;
    }

    let markdown = read_input(cli.input.as_deref())?;
    let blocks = parse_with(&markdown, &SecureSchemeResolver, &options);
    log::info!("converted {} top-level blocks", blocks.len());

    let json = if config.output.pretty && !cli.compact {
        to_json_pretty(&blocks)
    } else {
        to_json(&blocks)
    }
    .context("Failed to serialize blocks")?;
    println!("{json}");

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        log::debug!("Config path: {}", Config::config_path().display());
        return Ok(Config::load()?.unwrap_or_default());
    };

    let config_path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
    log::debug!("Config path: {}", config_path.display());

    let config = Config::load_from_path(&config_path)?;
    if config.is_none() {
        log::warn!(
            "config file {} not found, using defaults",
            config_path.display()
        );
    }
    Ok(config.unwrap_or_default())
}

fn parse_options(parser: &ParserConfig) -> ParseOptions {
    ParseOptions {
        close_unterminated_fence: parser.close_unterminated_fence,
        default_code_language: parser.default_code_language.clone(),
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
