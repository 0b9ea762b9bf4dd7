//! spam-rs: classify an email file as spam or not spam
//!
//! Trains the model from the configured spam and ham corpora, then prints a
//! single verdict line for the input file.
//!
//! # Usage
//!
//! ```bash
//! # Classify a file using ./spam-dataset.txt and ./ham-dataset.txt
//! spam-rs email.txt
//!
//! # Custom corpora
//! spam-rs --spam data/spam1.txt --spam data/spam2.txt --ham data/ham.txt email.txt
//!
//! # Prompt for the input file
//! spam-rs
//! ```

use anyhow::Context;
use clap::Parser;
use spam_rs::corpus::read_text;
use spam_rs::{Classifier, Config, TrainedModel};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "spam-rs")]
#[command(about = "Classify an email as spam or not spam", long_about = None)]
struct Cli {
    /// Configuration file (TOML), used only if it exists
    #[arg(short, long, default_value = "spam.toml")]
    config: PathBuf,

    /// Spam corpus file, may be repeated (replaces the configured list)
    #[arg(long = "spam", value_name = "FILE")]
    spam_paths: Vec<PathBuf>,

    /// Ham corpus file, may be repeated (replaces the configured list)
    #[arg(long = "ham", value_name = "FILE")]
    ham_paths: Vec<PathBuf>,

    /// Additive smoothing constant
    #[arg(long)]
    smoothing: Option<u64>,

    /// File containing the email to classify (prompted for if omitted)
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = if cli.config.exists() {
        Config::from_file(&cli.config)?
    } else {
        Config::default()
    };
    if !cli.spam_paths.is_empty() {
        config.training.spam_paths = cli.spam_paths;
    }
    if !cli.ham_paths.is_empty() {
        config.training.ham_paths = cli.ham_paths;
    }
    if let Some(smoothing) = cli.smoothing {
        config.training.smoothing = smoothing;
    }
    config.validate()?;

    init_logging(&config);
    info!("Starting spam-rs v{}", env!("CARGO_PKG_VERSION"));

    let model = TrainedModel::from_config(&config.training)?;

    let input = match cli.input {
        Some(path) => path,
        None => prompt_input_file()?,
    };
    let text = read_text(&input)?;

    let label = Classifier::new(&model)
        .classify(&text)
        .with_context(|| format!("Failed to classify {}", input.display()))?;
    println!("{}", label.message());

    Ok(())
}

/// Initialize logging on stderr so stdout only carries the verdict
fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "pretty" {
        registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(io::stderr))
            .init();
    }
}

/// Ask for the input file name on stdin
fn prompt_input_file() -> anyhow::Result<PathBuf> {
    print!("Enter the name of the input file containing email content: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let name = line.trim_end_matches(['\r', '\n']);
    if name.is_empty() {
        anyhow::bail!("No input file given");
    }
    Ok(PathBuf::from(name))
}
