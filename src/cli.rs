//! Command line front-end: opens the map window or runs the heading
//! numbering pass over markdown files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};

use pinruler::headings::process_page;
use pinruler::PinRulerConfig;

const USAGE: &str = "Usage:\n  pinruler [--config <file.yaml|file.json>]\n  \
pinruler number-headings [--in-place] <file.md>...";

/// Options for opening the map window.
#[derive(Debug, Default)]
pub struct GuiArgs {
    pub config: Option<PathBuf>,
}

#[derive(Debug)]
pub struct NumberHeadingsArgs {
    pub files: Vec<PathBuf>,
    pub in_place: bool,
}

#[derive(Debug)]
pub enum Command {
    Gui(GuiArgs),
    NumberHeadings(NumberHeadingsArgs),
    Help,
}

impl Command {
    pub fn from_args(args: &[String]) -> Result<Self> {
        match args.get(1).map(|s| s.as_str()) {
            Some("number-headings") => parse_number_headings(&args[2..]),
            Some("-h") | Some("--help") | Some("help") => Ok(Command::Help),
            _ => parse_gui(&args[1.min(args.len())..]),
        }
    }
}

fn parse_gui(args: &[String]) -> Result<Command> {
    let mut out = GuiArgs::default();
    let mut idx = 0;
    while idx < args.len() {
        match args[idx].as_str() {
            "--config" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| anyhow!("--config requires a value"))?;
                out.config = Some(PathBuf::from(value));
            }
            other => bail!("unexpected argument {other:?}\n\n{USAGE}"),
        }
        idx += 1;
    }
    Ok(Command::Gui(out))
}

fn parse_number_headings(args: &[String]) -> Result<Command> {
    let mut files = Vec::new();
    let mut in_place = false;
    for arg in args {
        match arg.as_str() {
            "--in-place" | "-i" => in_place = true,
            flag if flag.starts_with('-') => bail!("unknown flag {flag:?}\n\n{USAGE}"),
            file => files.push(PathBuf::from(file)),
        }
    }
    if files.is_empty() {
        bail!(USAGE);
    }
    Ok(Command::NumberHeadings(NumberHeadingsArgs { files, in_place }))
}

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Command::NumberHeadings(args) => number_headings(&args),
        Command::Gui(args) => {
            let cfg = match &args.config {
                Some(path) => PinRulerConfig::load(path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => PinRulerConfig::default(),
            };
            pinruler::run_pinruler(cfg).map_err(|e| anyhow!("window error: {e}"))
        }
    }
}

fn number_headings(args: &NumberHeadingsArgs) -> Result<()> {
    for path in &args.files {
        let out = number_file(path, args.in_place)?;
        if !args.in_place {
            print!("{out}");
        }
    }
    Ok(())
}

/// Number one page. With `in_place` the file is rewritten only when the text
/// changed. Returns the processed text.
fn number_file(path: &Path, in_place: bool) -> Result<String> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let out = process_page(&text).with_context(|| format!("processing {}", path.display()))?;
    if in_place && out != text {
        fs::write(path, &out).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "numbered headings");
    }
    Ok(out)
}
