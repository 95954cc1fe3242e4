use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use matryx_timeline::loader::load_event_log;
use matryx_timeline::{RenderInstruction, Timeline, TimelineConfig};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(version, about = "Render a Matrix room event log as a timeline", long_about = None)]
struct Cli {
    /// Config file, defaults to <config dir>/matryx/timeline.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an event log (JSON array or one event per line)
    Render {
        events: PathBuf,

        /// Show the oldest event first
        #[arg(long)]
        oldest_first: bool,

        /// Prefix each entry with its position in the log
        #[arg(long)]
        index: bool,
    },
    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = TimelineConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load timeline config")?;

    match cli.command {
        Commands::Render { events, oldest_first, index } => {
            if oldest_first {
                config.newest_first = false;
            }
            let raw = load_event_log(&events)?;
            let timeline = Timeline::with_config(raw, config);
            info!("Rendering {} events", timeline.len());
            paint(&timeline, index)?;
        },
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        },
    }

    Ok(())
}

fn paint(timeline: &Timeline, with_index: bool) -> Result<()> {
    let newest_first = timeline.config().newest_first;
    let styled = io::stdout().is_terminal();
    let mut out = io::stdout().lock();

    let entries: Box<dyn Iterator<Item = (usize, RenderInstruction)>> = if newest_first {
        Box::new(timeline.instructions().enumerate().rev())
    } else {
        Box::new(timeline.instructions().enumerate())
    };

    for (i, instruction) in entries {
        let prefix = if with_index { format!("[{i}] ") } else { String::new() };
        let RenderInstruction::ChatBubble(bubble) = &instruction else {
            writeln!(out, "{prefix}* {instruction}\n")?;
            continue;
        };

        let header = bubble.is_first.then(|| {
            let author = bubble.author_label.as_deref().unwrap_or_default();
            let time = bubble.timestamp_label.as_deref().unwrap_or_default();
            format!("{prefix}{author}  {time}")
        });

        // Reversed output shows the run header under its oldest bubble
        if let (Some(header), false) = (&header, newest_first) {
            writeln!(out, "{header}")?;
        }
        if styled && bubble.body.is_reduced_emphasis() {
            writeln!(out, "{prefix}    {}", bubble.body.to_string().dim())?;
        } else {
            writeln!(out, "{prefix}    {}", bubble.body)?;
        }
        if let (Some(header), true) = (&header, newest_first) {
            writeln!(out, "{header}")?;
        }

        let run_ends = if newest_first { bubble.is_first } else { bubble.is_last };
        if run_ends {
            writeln!(out)?;
        }
    }

    Ok(())
}
