//! Snapshot file header: magic bytes, schema version checks, bincode options.
//!
//! Layout: the 8-byte [`SNAPSHOT_MAGIC`] followed by a fixint bincode
//! [`SnapshotFile`]. The version field is read and checked before the module
//! payload is decoded, so a file from another tool or schema fails cleanly.

use bincode::Options;
use serde::{Deserialize, Serialize};

use crate::errors::{DumpError, DumpResult};
use crate::models::{Module, SNAPSHOT_SCHEMA_VERSION};

/// Leading bytes of every snapshot file.
pub const SNAPSHOT_MAGIC: &[u8; 8] = b"PDSNAP\0\0";

/// Snapshot body following the magic bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub schema_version: u32,
    pub modules: Vec<Module>,
}

/// Encoding shared by readers and writers: little-endian, fixed-width ints.
pub fn snapshot_options() -> impl Options {
    bincode::options().with_fixint_encoding()
}

/// Decode only the leading `schema_version` of a payload.
pub fn read_schema_version(payload: &[u8]) -> DumpResult<u32> {
    Ok(snapshot_options()
        .allow_trailing_bytes()
        .deserialize::<u32>(payload)?)
}

/// Split the magic off `bytes` and return the remaining payload.
pub fn strip_magic(bytes: &[u8]) -> DumpResult<&[u8]> {
    match bytes.strip_prefix(SNAPSHOT_MAGIC.as_slice()) {
        Some(payload) => Ok(payload),
        None => Err(DumpError::Deserialization(
            "not a module snapshot (bad magic header)".to_string(),
        )),
    }
}

/// Reject snapshots written with a different schema version.
pub fn check_schema_version(found: u32) -> DumpResult<()> {
    if found != SNAPSHOT_SCHEMA_VERSION {
        return Err(DumpError::Deserialization(format!(
            "unsupported snapshot schema version {found} (expected {SNAPSHOT_SCHEMA_VERSION})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_magic_accepts_header() {
        let mut bytes = SNAPSHOT_MAGIC.to_vec();
        bytes.extend_from_slice(&[1, 2, 3]);
        assert_eq!(strip_magic(&bytes).unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn test_strip_magic_rejects_foreign_bytes() {
        let err = strip_magic(b"\x80\x04\x95pickle").unwrap_err();
        assert!(matches!(err, DumpError::Deserialization(_)));
    }

    #[test]
    fn test_strip_magic_rejects_truncated_header() {
        assert!(strip_magic(b"PDSN").is_err());
    }

    #[test]
    fn test_read_schema_version_from_payload() {
        let file = SnapshotFile {
            schema_version: 9,
            modules: vec![Module::new("Core")],
        };
        let payload = snapshot_options().serialize(&file).unwrap();
        assert_eq!(read_schema_version(&payload).unwrap(), 9);
    }

    #[test]
    fn test_read_schema_version_short_payload() {
        let err = read_schema_version(&[1, 0]).unwrap_err();
        assert!(matches!(err, DumpError::Deserialization(_)));
    }

    #[test]
    fn test_schema_version_mismatch() {
        assert!(check_schema_version(SNAPSHOT_SCHEMA_VERSION).is_ok());
        let err = check_schema_version(SNAPSHOT_SCHEMA_VERSION + 1).unwrap_err();
        assert!(err.to_string().contains("schema version"));
    }
}
