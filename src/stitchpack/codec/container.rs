//! Container encoding/decoding.
//!
//! ```text
//! [0..4)         stitch_count: u32
//! [4..4+12N)     stitches: N × (i32 x, i32 y, i32 command)
//! [4+12N..+4)    metadata_size: u32 = M
//! [...+M)        metadata: UTF-8 JSON array of thread objects
//! ```
//!
//! All integers are little-endian. There is no magic number, version field or
//! checksum; a reader has to know it is looking at this exact layout.

use crate::codec::primitives::{Reader, Writer};
use crate::codec::thread::{decode_threads, encode_threads};
use crate::error::{Result, StitchpackError};
use crate::model::{Pattern, Stitch, Thread};
use std::fs;
use std::io;
use std::path::Path;

/// Bytes taken by each of the two `u32` length prefixes.
pub const PREFIX_LEN: usize = 4;
/// Bytes taken by one stitch record.
pub const STITCH_LEN: usize = 12;

/// Size of a container holding `stitch_count` stitches and `metadata_len`
/// bytes of JSON.
pub fn encoded_len(stitch_count: usize, metadata_len: usize) -> usize {
    2 * PREFIX_LEN + STITCH_LEN * stitch_count + metadata_len
}

// =============================================================================
// ENCODING
// =============================================================================

pub fn encode(stitches: &[Stitch], threads: &[Thread]) -> Result<Vec<u8>> {
    let stitch_count = u32::try_from(stitches.len()).map_err(|_| StitchpackError::Oversized {
        field: "stitch_count",
        len: stitches.len(),
    })?;
    let metadata = encode_threads(threads)?;
    let metadata_size = u32::try_from(metadata.len()).map_err(|_| StitchpackError::Oversized {
        field: "metadata_size",
        len: metadata.len(),
    })?;

    let mut writer = Writer::with_capacity(encoded_len(stitches.len(), metadata.len()));
    writer.write_u32(stitch_count);
    for stitch in stitches {
        writer.write_i32(stitch.x);
        writer.write_i32(stitch.y);
        writer.write_i32(stitch.command);
    }
    writer.write_u32(metadata_size);
    writer.write_bytes(&metadata);

    tracing::debug!(
        stitches = stitches.len(),
        threads = threads.len(),
        bytes = writer.len(),
        "encoded container"
    );
    Ok(writer.into_bytes())
}

pub fn encode_pattern(pattern: &Pattern) -> Result<Vec<u8>> {
    encode(&pattern.stitches, &pattern.threads)
}

/// Encodes `pattern` and writes it to `path` in one call. Returns the number
/// of bytes written.
pub fn write_file<P: AsRef<Path>>(path: P, pattern: &Pattern) -> Result<usize> {
    let bytes = encode_pattern(pattern)?;
    fs::write(path.as_ref(), &bytes)?;
    Ok(bytes.len())
}

// =============================================================================
// DECODING
// =============================================================================

pub fn decode(input: &[u8]) -> Result<Pattern> {
    let mut reader = Reader::new(input);

    let stitch_count = reader.read_u32("stitch_count")? as usize;
    // Validate the whole array up front so a bogus count never drives an
    // allocation.
    let stitch_bytes = stitch_count
        .checked_mul(STITCH_LEN)
        .ok_or(StitchpackError::TruncatedInput {
            field: "stitches",
            needed: usize::MAX,
            available: reader.remaining_len(),
        })?;
    reader.require(stitch_bytes, "stitches")?;

    let mut stitches = Vec::with_capacity(stitch_count);
    for _ in 0..stitch_count {
        let x = reader.read_i32("stitch.x")?;
        let y = reader.read_i32("stitch.y")?;
        let command = reader.read_i32("stitch.command")?;
        stitches.push(Stitch { x, y, command });
    }

    let metadata_size = reader.read_u32("metadata_size")? as usize;
    let metadata = reader.read_bytes(metadata_size, "metadata")?;
    let threads = decode_threads(metadata)?;

    if reader.remaining_len() > 0 {
        tracing::warn!(
            trailing = reader.remaining_len(),
            "ignoring bytes after container metadata"
        );
    }

    tracing::debug!(
        stitches = stitches.len(),
        threads = threads.len(),
        bytes = input.len(),
        "decoded container"
    );
    Ok(Pattern { stitches, threads })
}

/// Reads and decodes the container at `path`.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Pattern> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StitchpackError::FileNotFound(path.to_path_buf()),
        _ => StitchpackError::Io(e),
    })?;
    decode(&bytes)
}
