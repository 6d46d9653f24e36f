use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jlit_core::{apply_text_edits, Interval};
use jlit_ide::{copy_literals, paste_as_literals, CopyOutcome, LiteralToolsConfig};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "jlit", version, about = "Copy and paste Java string literals from the command line")]
struct Cli {
    /// Path to a JSON config file with the line-break policies
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode the literal (or whole `+` chain) under a selection
    Copy(CopyArgs),
    /// Re-encode clipboard text as string literals at a selection
    Paste(PasteArgs),
}

#[derive(Args)]
struct CopyArgs {
    /// Java source file
    file: PathBuf,
    /// Selection start, as a byte offset into the file
    #[arg(long)]
    start: u32,
    /// Selection end; defaults to `start` (a caret)
    #[arg(long)]
    end: Option<u32>,
    /// Emit JSON suitable for scripting
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PasteArgs {
    /// Java source file
    file: PathBuf,
    /// Selection start, as a byte offset into the file
    #[arg(long)]
    start: u32,
    /// Selection end; defaults to `start` (a caret)
    #[arg(long)]
    end: Option<u32>,
    /// Clipboard text; read from stdin when omitted
    #[arg(long)]
    text: Option<String>,
    /// Print only the replacement snippet instead of the edited document
    #[arg(long)]
    snippet: bool,
    /// Emit JSON suitable for scripting
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            2
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Copy(args) => run_copy(args, &config),
        Command::Paste(args) => run_paste(args, &config),
    }
}

fn load_config(path: Option<&Path>) -> Result<LiteralToolsConfig> {
    let Some(path) = path else {
        return Ok(LiteralToolsConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: LiteralToolsConfig =
        serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?;
    debug!(?config, path = %path.display(), "loaded config");
    Ok(config)
}

#[derive(Serialize)]
struct CopyReport<'a> {
    copied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    segments: usize,
}

fn run_copy(args: CopyArgs, config: &LiteralToolsConfig) -> Result<i32> {
    let source = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let selection = Interval::new(args.start, args.end.unwrap_or(args.start))
        .context("selection end precedes start")?;
    debug!(
        file = %args.file.display(),
        start = selection.start(),
        end = selection.end(),
        "copy"
    );

    match copy_literals(&source, selection, config)? {
        CopyOutcome::Copied { text, segments } => {
            if args.json {
                let report = CopyReport {
                    copied: true,
                    text: Some(&text),
                    segments,
                };
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!("{text}");
            }
            Ok(0)
        }
        CopyOutcome::Empty => {
            if args.json {
                let report = CopyReport {
                    copied: false,
                    text: None,
                    segments: 0,
                };
                println!("{}", serde_json::to_string(&report)?);
            } else {
                eprintln!("literal value is empty; nothing copied");
            }
            Ok(0)
        }
        CopyOutcome::NoLiteral => {
            if args.json {
                let report = CopyReport {
                    copied: false,
                    text: None,
                    segments: 0,
                };
                println!("{}", serde_json::to_string(&report)?);
            } else {
                eprintln!("selection touches no string literal");
            }
            Ok(1)
        }
    }
}

#[derive(Serialize)]
struct PasteReport<'a> {
    start: u32,
    end: u32,
    replacement: &'a str,
}

fn run_paste(args: PasteArgs, config: &LiteralToolsConfig) -> Result<i32> {
    let source = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let selection = Interval::new(args.start, args.end.unwrap_or(args.start))
        .context("selection end precedes start")?;

    let clipboard = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading clipboard text from stdin")?;
            buffer
        }
    };
    debug!(
        file = %args.file.display(),
        start = selection.start(),
        end = selection.end(),
        clipboard_bytes = clipboard.len(),
        "paste"
    );

    let edit = paste_as_literals(&source, selection, &clipboard, config)?;
    if args.json {
        let report = PasteReport {
            start: edit.range.start,
            end: edit.range.end,
            replacement: &edit.replacement,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else if args.snippet {
        println!("{}", edit.replacement);
    } else {
        print!("{}", apply_text_edits(&source, &[edit])?);
    }
    Ok(0)
}
