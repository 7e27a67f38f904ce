use clap::{Parser, ValueEnum};
use docprint::{
    from_json, from_ron, log, plain_text, render_with, ColorTheme, Doc, Log, LogLevel, Settings,
    SourceError, Style, StyledText,
};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

/// Pretty print a doc description at a given width.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The doc description to print, in RON or JSON.
    file: PathBuf,

    /// The preferred maximum line width.
    #[arg(short, long, default_value_t = Settings::default().width)]
    width: usize,

    /// How many columns each indentation level adds.
    #[arg(long, default_value_t = Settings::default().tab_width)]
    tab_width: usize,

    /// How the doc is described. Guessed from the file extension if omitted.
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Print with colors, using the default dark theme.
    #[arg(long)]
    color: bool,

    /// Append log entries to this file.
    #[arg(long)]
    log: Option<PathBuf>,

    /// Log more. Repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Ron,
    Json,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Could not read '{0}': {1}")]
    Read(PathBuf, io::Error),
    #[error("Could not open log file '{0}': {1}")]
    LogFile(PathBuf, io::Error),
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
    #[error("In '{0}': {1}")]
    Source(PathBuf, SourceError),
}

impl Format {
    fn guess(path: &Path) -> Format {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Format::Json,
            _ => Format::Ron,
        }
    }
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        log!(Error, "{}", err);
        eprintln!("docprint: {}", err);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    Log::set_level(match args.verbose {
        0 => LogLevel::Warn,
        1 => LogLevel::Debug,
        _ => LogLevel::Trace,
    });
    if let Some(path) = &args.log {
        Log::set_file(path).map_err(|err| CliError::LogFile(path.clone(), err))?;
    }

    let text =
        fs::read_to_string(&args.file).map_err(|err| CliError::Read(args.file.clone(), err))?;
    let format = args.format.unwrap_or_else(|| Format::guess(&args.file));
    log!(Info, "Loading {:?} as {:?}", args.file, format);
    let doc: Doc<Style> = match format {
        Format::Ron => from_ron(&text),
        Format::Json => from_json(&text),
    }
    .map_err(|err| CliError::Source(args.file.clone(), err))?;

    let settings = Settings {
        width: args.width,
        tab_width: args.tab_width,
    };
    let mut out = io::stdout().lock();
    let fragments = render_with(&doc, &settings);
    if args.color {
        let styled = StyledText::from_fragments(fragments, |ann| ann.copied().unwrap_or_default());
        styled.write_to(&mut out, &ColorTheme::default_dark())?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", plain_text(fragments))?;
    }
    Ok(())
}
