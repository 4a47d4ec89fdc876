//! docstring-md - turn a Python module's docstring into a Markdown README

use anyhow::{Context, Result, bail};
use clap::Parser;
use docstring_md_config::Config;
use docstring_md_engine::convert;
use std::{env, fs, path::Path, path::PathBuf};

mod extract;
mod locate;

use locate::ModuleLocator;

#[derive(Debug, Parser)]
#[command(name = "docstring-md")]
#[command(version, about = "Convert docstrings to Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    docstring-md my_module > README.md           Module docstring
    docstring-md my_module MyClass -t my-class   Docstring of one class")]
struct Cli {
    /// The module containing the docstring (dotted name or path to a .py file)
    #[arg(value_name = "MODULE")]
    module: String,

    /// Convert only the docstring of this entry in the module
    #[arg(value_name = "ENTRY")]
    entry: Option<String>,

    /// Document title (default is the module name)
    #[arg(short, long)]
    title: Option<String>,

    /// Configuration file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log lookup details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let config = load_config(cli.config.as_deref())?;

    let mut search_dirs = vec![env::current_dir().context("Failed to read current directory")?];
    search_dirs.extend(config.resolved_search_paths());
    log::debug!("Module search path: {search_dirs:?}");

    let path = ModuleLocator::new(search_dirs).locate(&cli.module)?;
    log::info!("Reading {}", path.display());
    let source = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read module source at {}", path.display()))?;

    let docstring = match &cli.entry {
        Some(entry) => extract::entry_docstring(&source, entry)
            .with_context(|| format!("Failed to look up entry in {}", path.display()))?,
        None => extract::module_docstring(&source),
    };
    if docstring.is_none() {
        log::warn!("No docstring found in {}", path.display());
    }

    let title = cli
        .title
        .unwrap_or_else(|| locate::default_title(&cli.module));

    println!("{}", convert(docstring.as_deref(), &title));
    Ok(())
}

/// Load the configuration, falling back to defaults when there is no file.
///
/// An explicitly requested file has to exist.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let loaded = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file '{}' does not exist", path.display());
            }
            Config::load_from_path(path)?
        }
        None => Config::load()?,
    };

    match loaded {
        Some(config) => Ok(config),
        None => {
            log::debug!(
                "No config file at {}, using defaults",
                Config::config_path().display()
            );
            Ok(Config::default())
        }
    }
}
