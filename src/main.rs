use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use tillroll::pipeline::{self, DecodeOptions, Policy};
use tillroll_core::config::Config;
use tillroll_core::detect::Layout;
use tillroll_core::{export, tally};
use tillroll_feeds::Source;

/// Which layout to assume for every input; `auto` sniffs per input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Auto,
    Plain,
    Compact,
    Csv,
}

impl FormatArg {
    fn layout(self) -> Option<Layout> {
        match self {
            FormatArg::Auto => None,
            FormatArg::Plain => Some(Layout::Plain),
            FormatArg::Compact => Some(Layout::Compact),
            FormatArg::Csv => Some(Layout::Delimited),
        }
    }
}

#[derive(Parser)]
#[command(name = "tillroll", about = "Till-roll normaliser — merge sale logs into canonical CSV")]
struct Cli {
    /// Input sources: local paths or http:// URLs, merged in the order given.
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Layout of the inputs.
    #[arg(long, value_enum, default_value = "auto")]
    format: FormatArg,

    /// Field delimiter for delimited input and canonical output.
    #[arg(long)]
    delimiter: Option<char>,

    /// Write here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Emit JSONL instead of the delimited form.
    #[arg(long)]
    jsonl: bool,

    /// Keep each input's decodable prefix instead of failing the run on
    /// trailing undecodable content.
    #[arg(long)]
    lenient: bool,

    /// Report the best-selling item on stderr after merging.
    #[arg(long)]
    top: bool,

    /// Write debug logs to stderr (RUST_LOG overrides the filter).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("tillroll debug logging enabled");
    }

    let config = Config::load().context("load configuration")?;
    let delimiter = match cli.delimiter {
        Some(delimiter) => delimiter,
        None => config.export.delimiter_char()?,
    };
    // CLI --lenient wins; otherwise the config decides.
    let policy = if cli.lenient || !config.decode.strict {
        Policy::Lenient
    } else {
        Policy::Strict
    };
    let options = DecodeOptions {
        layout: cli.format.layout(),
        delimiter,
        policy,
        detect_sample_lines: config.decode.detect_sample_lines,
    };

    let sources = cli
        .inputs
        .iter()
        .map(|raw| raw.parse::<Source>())
        .collect::<Result<Vec<_>, _>>()?;

    // Acquisition may overlap; the buffers come back in argument order, which
    // is the order merging folds over.
    let buffers = futures::future::try_join_all(sources.iter().map(tillroll_feeds::acquire))
        .await
        .context("acquire sources")?;

    let merged = pipeline::merge_sources(&buffers, &options)?;
    tracing::info!(records = merged.len(), "merged all sources");

    if cli.top {
        match tally::most_sold(&tally::tally(&merged)) {
            Some((item, count)) => eprintln!("best seller: {item} ({count} sold)"),
            None => eprintln!("best seller: none (no records decoded)"),
        }
    }

    let rendered = if cli.jsonl || config.export.jsonl {
        export::render_jsonl(&merged).context("serialize jsonl")?
    } else {
        export::render_stream(&merged, delimiter)
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?
        }
        None => std::io::stdout()
            .write_all(rendered.as_bytes())
            .context("write stdout")?,
    }

    Ok(())
}
