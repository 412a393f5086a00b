//! Binary snapshot persistence for word lists.
//!
//! A snapshot stores a serialized [`WordList`] (the raw word entries plus
//! the derived key set), so a reload skips re-parsing the text source and
//! recomputing the keys. The file layout is a little-endian header of magic
//! bytes, format version, and payload length, followed by a bincode payload
//! and a trailing crc32 of the payload. Any mismatch fails with
//! `SnapshotCorrupt`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::dictionary::wordlist::WordList;
use crate::error::{OrthosError, Result};

/// Magic bytes identifying a dictionary snapshot file.
const SNAPSHOT_MAGIC: &[u8; 4] = b"ODIC";

/// Current snapshot format version.
const SNAPSHOT_VERSION: u32 = 1;

/// Serialize a word list to its snapshot file.
///
/// The parent directory is created if absent. A failed write leaves the
/// in-memory word list untouched; callers report the error and keep serving.
pub fn write_snapshot<P: AsRef<Path>>(words: &WordList, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let payload = bincode::serialize(words)
        .map_err(|e| OrthosError::serialization(format!("failed to encode snapshot: {e}")))?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(SNAPSHOT_MAGIC)?;
    writer.write_u32::<LittleEndian>(SNAPSHOT_VERSION)?;
    writer.write_u64::<LittleEndian>(payload.len() as u64)?;
    writer.write_all(&payload)?;
    writer.write_u32::<LittleEndian>(crc32fast::hash(&payload))?;
    writer.flush()?;
    Ok(())
}

/// Restore a word list from its snapshot file.
///
/// Validates magic, version, payload length, and checksum before decoding;
/// any mismatch fails with `SnapshotCorrupt` rather than falling back to the
/// text source.
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<WordList> {
    let file = File::open(path.as_ref())?;
    let file_len = file.metadata()?.len();
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 4];
    reader
        .read_exact(&mut magic)
        .map_err(|_| OrthosError::snapshot_corrupt("truncated header"))?;
    if &magic != SNAPSHOT_MAGIC {
        return Err(OrthosError::snapshot_corrupt("bad magic bytes"));
    }

    let version = reader
        .read_u32::<LittleEndian>()
        .map_err(|_| OrthosError::snapshot_corrupt("truncated header"))?;
    if version != SNAPSHOT_VERSION {
        return Err(OrthosError::snapshot_corrupt(format!(
            "unsupported format version {version}"
        )));
    }

    let payload_len = reader
        .read_u64::<LittleEndian>()
        .map_err(|_| OrthosError::snapshot_corrupt("truncated header"))?;
    if payload_len > file_len {
        return Err(OrthosError::snapshot_corrupt(format!(
            "payload length {payload_len} exceeds file size {file_len}"
        )));
    }

    let mut payload = vec![0u8; payload_len as usize];
    reader
        .read_exact(&mut payload)
        .map_err(|_| OrthosError::snapshot_corrupt("truncated payload"))?;

    let expected = reader
        .read_u32::<LittleEndian>()
        .map_err(|_| OrthosError::snapshot_corrupt("missing checksum"))?;
    let actual = crc32fast::hash(&payload);
    if expected != actual {
        return Err(OrthosError::snapshot_corrupt(format!(
            "checksum mismatch: expected {expected:08x}, got {actual:08x}"
        )));
    }

    bincode::deserialize(&payload)
        .map_err(|e| OrthosError::snapshot_corrupt(format!("failed to decode payload: {e}")))
}
