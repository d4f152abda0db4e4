//! # Container Codec
//!
//! Two layers, leaves first:
//!
//! - [`thread`]: thread records to and from JSON objects.
//! - [`container`]: the binary framing around the stitch array and the JSON
//!   thread list.
//!
//! [`primitives`] holds the fixed-width reader and writer both directions use.

pub mod container;
pub mod primitives;
pub mod thread;

pub use container::{decode, encode, encode_pattern, encoded_len, read_file, write_file};
