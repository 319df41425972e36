//! Command-line front end for paste-linker.
//!
//! Runs the classifier, the canonicalizer and the paste flow outside an
//! editor, which is handy for scripting and for checking what a paste
//! would produce.
//!
//! # Usage
//!
//! ```bash
//! # Classify a piece of text
//! paste-linker classify "https://example.com/photo.png"
//!
//! # Canonicalize a video URL
//! paste-linker canonicalize "https://youtu.be/dQw4w9WgXcQ?t=30"
//!
//! # Paste the system clipboard as a link over the selected word "docs"
//! paste-linker paste --mode link --before "read the " --selection docs
//!
//! # Paste piped text with the default paste
//! echo "https://m.youtube.com/shorts/dQw4w9WgXcQ" | paste-linker paste --stdin
//!
//! # Show effective settings
//! paste-linker config
//! ```
//!
//! # Environment Variables
//!
//! See [`paste_linker::config`]. A `.env` file in the working directory is
//! loaded first.

use paste_linker::config::{self, Config};
use paste_linker::domain::entities::{PasteMode, PasteOutcome, Position};
use paste_linker::domain::ports::ClipboardSource;
use paste_linker::infrastructure::clipboard::{StaticClipboard, SystemClipboard};
use paste_linker::infrastructure::editor::TextDocument;
use paste_linker::prelude::PasteService;
use paste_linker::{canonicalize_url, classify_text};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

/// Markdown paste helper: classify, canonicalize and link clipboard text.
#[derive(Parser)]
#[command(name = "paste-linker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Classify text as plain text, URL, image URL or existing markdown link
    Classify {
        /// Text to classify
        text: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a video URL to its canonical watch form
    Canonicalize {
        /// URL to rewrite
        url: String,

        /// Skip the rewrite (echo the input)
        #[arg(long)]
        disable: bool,
    },

    /// Simulate a paste into a one-line document and print the result
    Paste {
        /// Paste command: default, link or image
        #[arg(short, long, default_value_t = PasteMode::Default)]
        mode: PasteMode,

        /// Clipboard text (reads the system clipboard if omitted)
        #[arg(short, long, conflicts_with = "stdin")]
        text: Option<String>,

        /// Read clipboard text from stdin
        #[arg(long)]
        stdin: bool,

        /// Selected text the paste replaces
        #[arg(short, long, default_value = "")]
        selection: String,

        /// Text on the line before the selection
        #[arg(short, long, default_value = "")]
        before: String,
    },

    /// Show effective paste settings
    Config,
}

/// JSON shape of the `classify` command.
#[derive(Serialize)]
struct ClassifyReport<'a> {
    text: &'a str,
    kind: &'static str,
    is_url: bool,
    is_image: bool,
    is_already_linked_markdown: bool,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    init_tracing(&config);
    config.print_summary();

    match cli.command {
        Commands::Classify { text, json } => handle_classify(&text, json)?,
        Commands::Canonicalize { url, disable } => handle_canonicalize(&url, &config, disable),
        Commands::Paste {
            mode,
            text,
            stdin,
            selection,
            before,
        } => handle_paste(&config, mode, text, stdin, &selection, &before)?,
        Commands::Config => handle_config(&config)?,
    }

    Ok(())
}

/// Installs the tracing subscriber on stderr so stdout carries only results.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn handle_classify(text: &str, json: bool) -> Result<()> {
    let classification = classify_text(text);
    let kind = classification.kind();

    if json {
        let report = ClassifyReport {
            text,
            kind: kind.as_str(),
            is_url: classification.is_url,
            is_image: classification.is_image,
            is_already_linked_markdown: classification.is_already_linked_markdown,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Classification".bright_blue().bold());
    println!("  Kind:            {}", kind.as_str().cyan());
    println!("  URL:             {}", flag(classification.is_url));
    println!("  Image:           {}", flag(classification.is_image));
    println!(
        "  Markdown link:   {}",
        flag(classification.is_already_linked_markdown)
    );

    Ok(())
}

fn handle_canonicalize(url: &str, config: &Config, disable: bool) {
    let enabled = config.paste.convert_video_urls && !disable;
    println!("{}", canonicalize_url(url, enabled));
}

fn handle_paste(
    config: &Config,
    mode: PasteMode,
    text: Option<String>,
    stdin: bool,
    selection: &str,
    before: &str,
) -> Result<()> {
    let mut clipboard: Box<dyn ClipboardSource> = match (text, stdin) {
        (Some(text), _) => Box::new(StaticClipboard::new(text)),
        (None, true) => Box::new(StaticClipboard::new(read_stdin()?)),
        (None, false) => Box::new(SystemClipboard::new()),
    };

    let start = before.chars().count();
    let end = start + selection.chars().count();
    let mut doc = TextDocument::new(&format!("{before}{selection}"))
        .with_selection(Position::new(0, start), Position::new(0, end));

    let service = PasteService::new(config.paste);
    tracing::debug!(settings = ?service.settings(), %mode, "Simulating paste");
    match service.paste_from(mode, clipboard.as_mut(), &mut doc) {
        Ok(PasteOutcome::Inserted(inserted)) => {
            eprintln!("{} {}", "✓ Inserted".green().bold(), inserted.bright_white());
            println!("{}", doc.text());
        }
        Ok(PasteOutcome::Passthrough) => {
            eprintln!("{}", "• Passthrough (host paste)".yellow());
            println!("{}", doc.text());
        }
        Err(e) if e.is_notice() => {
            eprintln!("{}", format!("⚠ {e}").yellow());
        }
        Err(e) => return Err(e).context(format!("Paste as {mode} failed")),
    }

    Ok(())
}

fn handle_config(config: &Config) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&config.paste)?);
    Ok(())
}

/// Reads stdin, dropping one trailing line break added by `echo`.
fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;

    let trimmed = buffer
        .strip_suffix("\r\n")
        .or_else(|| buffer.strip_suffix('\n'))
        .unwrap_or(&buffer);
    Ok(trimmed.to_string())
}

fn flag(value: bool) -> ColoredString {
    if value { "yes".green() } else { "no".red() }
}
