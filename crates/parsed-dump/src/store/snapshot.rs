//! Binary snapshot loading and saving.

use std::path::Path;

use bincode::Options;
use tracing::debug;

use crate::errors::{DumpError, DumpResult};
use crate::models::{Module, SNAPSHOT_SCHEMA_VERSION};
use crate::store::schema::{
    check_schema_version, read_schema_version, snapshot_options, strip_magic, SnapshotFile,
    SNAPSHOT_MAGIC,
};

/// Load every module record from the snapshot at `path`, in snapshot order.
pub fn load_snapshot(path: &Path) -> DumpResult<Vec<Module>> {
    if !path.exists() {
        return Err(DumpError::NotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), size_bytes = bytes.len(), "read snapshot");
    decode_snapshot(&bytes)
}

/// Decode an in-memory snapshot.
///
/// Decoding is bounded by the payload length, so a corrupt length prefix is
/// reported as an error instead of triggering a huge allocation.
pub fn decode_snapshot(bytes: &[u8]) -> DumpResult<Vec<Module>> {
    let payload = strip_magic(bytes)?;
    check_schema_version(read_schema_version(payload)?)?;

    let file: SnapshotFile = snapshot_options()
        .with_limit(payload.len() as u64)
        .reject_trailing_bytes()
        .deserialize(payload)?;
    debug!(
        schema_version = file.schema_version,
        modules = file.modules.len(),
        "decoded snapshot"
    );
    Ok(file.modules)
}

/// Encode `modules` in the snapshot format.
pub fn encode_snapshot(modules: &[Module]) -> DumpResult<Vec<u8>> {
    let file = SnapshotFile {
        schema_version: SNAPSHOT_SCHEMA_VERSION,
        modules: modules.to_vec(),
    };
    let mut bytes = SNAPSHOT_MAGIC.to_vec();
    snapshot_options()
        .serialize_into(&mut bytes, &file)
        .map_err(|e| DumpError::Serialization(e.to_string()))?;
    Ok(bytes)
}

/// Write `modules` to `path` as a snapshot, replacing any existing file.
pub fn save_snapshot(path: &Path, modules: &[Module]) -> DumpResult<()> {
    let bytes = encode_snapshot(modules)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
