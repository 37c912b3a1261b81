//! Command-line surface: argument parsing, progress output, exit codes.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DumpOptions, DEFAULT_LOG_FILTER, LOG_ENV_VAR};
use crate::errors::{DumpError, DumpResult};
use crate::report::{build_dump, write_dump, Summary};
use crate::store::snapshot::load_snapshot;

#[derive(Parser, Debug)]
#[command(name = "dump-parsed", version)]
#[command(
    about = "Dump a parsed module snapshot to normalized YAML for cross-platform comparison",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Binary module snapshot to read
    pub snapshot: PathBuf,

    /// Destination YAML file [default: parsed_dump.yml next to the snapshot]
    pub output: Option<PathBuf>,
}

impl From<Cli> for DumpOptions {
    fn from(cli: Cli) -> Self {
        DumpOptions::new(cli.snapshot, cli.output)
    }
}

/// Install the stderr `tracing` subscriber, filtered by `PARSED_DUMP_LOG`.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load, canonicalize and write one dump, reporting each phase on `out`.
pub fn run(options: &DumpOptions, out: &mut dyn Write) -> DumpResult<Summary> {
    writeln!(out, "Loading {}...", options.snapshot_path.display())?;
    let modules = load_snapshot(&options.snapshot_path)?;
    writeln!(out, "Found {} modules", modules.len())?;

    writeln!(out, "Serializing modules...")?;
    let dump = build_dump(&modules);

    writeln!(out, "Writing to {}...", options.output_path.display())?;
    write_dump(&options.output_path, &dump)?;
    info!(
        modules = dump.summary.total_modules,
        output = %options.output_path.display(),
        "dump written"
    );

    writeln!(out, "Done!")?;
    writeln!(out, "\nSummary:")?;
    for line in dump.summary.report_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(dump.summary)
}

/// Parse `args` (program name first), run, and return the process exit code.
pub fn execute<I, T>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(parse_err) => return report_parse_error(&parse_err, out, err),
    };

    match run(&DumpOptions::from(cli), out) {
        Ok(_) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {e}");
            e.exit_code()
        }
    }
}

fn report_parse_error(parse_err: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> u8 {
    let rendered = parse_err.render().to_string();
    match parse_err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(out, "{rendered}");
            0
        }
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let _ = write!(out, "{rendered}");
            DumpError::Usage("no snapshot path given".to_string()).exit_code()
        }
        _ => {
            let _ = write!(err, "{rendered}");
            DumpError::Usage(rendered).exit_code()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
