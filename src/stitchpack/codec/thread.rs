//! Thread records as JSON.
//!
//! A record is a JSON object with up to seven keys: `hex_color`,
//! `description`, `catalog_number`, `details`, `brand`, `chart` and `weight`.
//! Absent attributes are omitted when encoding. When decoding, a missing key
//! and a key holding `null` mean the same thing, and unknown keys are ignored.

use crate::error::{Result, StitchpackError};
use crate::model::Thread;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Decodes one JSON object into a thread.
pub fn from_record(record: &Map<String, Value>) -> Result<Thread> {
    Thread::deserialize(Value::Object(record.clone()))
        .map_err(|e| StitchpackError::MalformedMetadata(e.to_string()))
}

/// Serializes a thread list to the compact UTF-8 JSON stored in containers.
///
/// This is the same `Serialize` impl `inspect --json` uses, so both drop
/// absent fields and non-finite weights alike.
pub fn encode_threads(threads: &[Thread]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(threads)?)
}

/// Parses a container's metadata blob. Anything other than a JSON array of
/// objects is malformed.
pub fn decode_threads(bytes: &[u8]) -> Result<Vec<Thread>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| StitchpackError::MalformedMetadata(format!("not valid UTF-8: {}", e)))?;
    let value: Value = serde_json::from_str(text)
        .map_err(|e| StitchpackError::MalformedMetadata(format!("not valid JSON: {}", e)))?;

    let Value::Array(items) = value else {
        return Err(StitchpackError::MalformedMetadata(format!(
            "expected a JSON array of threads, found {}",
            json_type_name(&value)
        )));
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(record) => from_record(record).map_err(|e| match e {
                StitchpackError::MalformedMetadata(msg) => {
                    StitchpackError::MalformedMetadata(format!("thread {}: {}", i, msg))
                }
                other => other,
            }),
            other => Err(StitchpackError::MalformedMetadata(format!(
                "thread {}: expected an object, found {}",
                i,
                json_type_name(other)
            ))),
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
