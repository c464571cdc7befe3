//! Olelo - command-line entrypoint.
//!
//! Loads configuration and a word list, then answers membership and
//! completion queries against the trie.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use olelo_lib::config::{
    self, ConfigLoader, GlobalConfig, LogConfig, OleloConfig, DEFAULT_CONFIG_PATH, ENV_PREFIX,
};
use olelo_lib::data_structures::{AutoComplete, AutoCompleteTrie, Dictionary};
use olelo_lib::error::{
    report_error, set_error_reporter, ErrorContext, OleloError, OleloResult, TracingErrorReporter,
};
use olelo_lib::wordlist::{LoadReport, WordListLoader};
use tracing::{info, info_span};
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Command line arguments for Olelo.
#[derive(Parser, Debug)]
#[clap(name = "olelo", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, one word per line (overrides dictionary.word_list)
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print completions for a prefix, shortest first
    Complete {
        /// Prefix to complete; required unless --all is given
        prefix: Option<String>,

        /// Complete the empty prefix, listing words from the shortest
        #[clap(long, conflicts_with = "prefix")]
        all: bool,

        /// Maximum number of completions
        #[clap(short = 'n', long)]
        max: Option<usize>,

        /// Print the completions as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Report whether each word is in the dictionary
    Check {
        /// Words to look up
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// Print word and node counts for the loaded word list
    Stats,

    /// Print every trie node in pre-order
    Dump,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// stdout only carries query results.
fn init_logging(log: &LogConfig) -> OleloResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let result = if log.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_file(log.source_location)
                    .with_line_number(log.source_location)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_file(log.source_location)
                    .with_line_number(log.source_location)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| OleloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds the trie from the word list named on the command line or in the configuration.
fn load_trie(
    words: Option<PathBuf>,
    config: &OleloConfig,
) -> anyhow::Result<(AutoCompleteTrie, LoadReport)> {
    let path = match words.or_else(|| config.dictionary.word_list.clone()) {
        Some(path) => path,
        None => bail!("no word list given; pass --words or set dictionary.word_list"),
    };

    let _span = info_span!("load", path = %path.display()).entered();
    let mut trie = AutoCompleteTrie::new();
    let report = WordListLoader::new(config.dictionary.clone())
        .load_path(&path, &mut trie)
        .map_err(OleloError::from)
        .with_context(|| format!("loading word list {}", path.display()))?;

    Ok((trie, report))
}

/// Writes the default configuration as TOML.
fn gen_config(output: &Path) -> anyhow::Result<()> {
    let default_config = OleloConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).map_err(OleloError::Io)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| OleloError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml).map_err(OleloError::Io)?;

    println!("Default configuration written to {}", output.display());
    Ok(())
}

/// Loads and validates configuration, then starts logging with it.
///
/// Without an explicit path, `config/default.toml` is used when it exists.
fn setup(config_path: Option<&Path>) -> anyhow::Result<GlobalConfig> {
    let config_path = config_path.map(Path::to_path_buf).or_else(|| {
        let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
        default_path.exists().then_some(default_path)
    });

    let loaded = ConfigLoader::new(config_path, ENV_PREFIX)
        .load()
        .map_err(OleloError::from)
        .context("loading configuration")?;

    init_logging(&loaded.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    config::init_global_config(loaded);
    Ok(config::get_global_config())
}

fn run(args: Args) -> anyhow::Result<()> {
    let Args {
        config: config_path,
        words,
        command,
    } = args;

    match command {
        Command::GenConfig { output } => gen_config(&output)?,
        Command::Validate => {
            setup(config_path.as_deref())?;
            info!("Configuration validated successfully");
            println!("Configuration OK");
        }
        Command::Complete {
            prefix,
            all,
            max,
            json,
        } => {
            let global = setup(config_path.as_deref())?;
            let config = global.get();
            let (trie, _) = load_trie(words, config)?;
            let limit = config.completion.effective_limit(max);
            let prefix = if all { Some("") } else { prefix.as_deref() };
            let completions = trie
                .try_predict_completions(prefix, limit)
                .map_err(OleloError::from)
                .context("pass a prefix or --all")?;

            if json {
                println!("{}", serde_json::to_string(&completions).map_err(OleloError::from)?);
            } else {
                for completion in completions {
                    println!("{completion}");
                }
            }
        }
        Command::Check { words: queries } => {
            let global = setup(config_path.as_deref())?;
            let (trie, _) = load_trie(words, global.get())?;
            for word in queries {
                println!("{word}: {}", trie.is_word(&word));
            }
        }
        Command::Stats => {
            let global = setup(config_path.as_deref())?;
            let (trie, report) = load_trie(words, global.get())?;
            println!("words:      {}", trie.size());
            println!("nodes:      {}", trie.node_count());
            println!("lines read: {}", report.lines_read);
            println!("added:      {}", report.added);
            println!("duplicates: {}", report.duplicates);
            println!("skipped:    {}", report.skipped);
        }
        Command::Dump => {
            let global = setup(config_path.as_deref())?;
            let (trie, _) = load_trie(words, global.get())?;
            trie.log_tree();
            for text in trie.pre_order() {
                let depth = text.chars().count();
                if depth == 0 {
                    println!("(root)");
                } else {
                    println!("{}{text}", "  ".repeat(depth));
                }
            }
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(
                ErrorContext::new(OleloError::Custom(format!("{e:#}")), "cli").with_span_trace(),
            );
            ExitCode::FAILURE
        }
    }
}
