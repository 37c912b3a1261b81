//! Run configuration: input/output paths and the log filter.

use std::path::{Path, PathBuf};

/// File name used when no output path is given; written next to the snapshot.
pub const DEFAULT_OUTPUT_NAME: &str = "parsed_dump.yml";

/// Column at which long scalars in the dump are folded.
pub const LINE_WIDTH: usize = 120;

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "PARSED_DUMP_LOG";

/// Filter used when [`LOG_ENV_VAR`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpOptions {
    pub snapshot_path: PathBuf,
    pub output_path: PathBuf,
}

impl DumpOptions {
    pub fn new(snapshot_path: PathBuf, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| default_output_path(&snapshot_path));
        Self {
            snapshot_path,
            output_path,
        }
    }
}

/// Replace the snapshot's file name with [`DEFAULT_OUTPUT_NAME`].
pub fn default_output_path(snapshot_path: &Path) -> PathBuf {
    snapshot_path.with_file_name(DEFAULT_OUTPUT_NAME)
}
