pub mod audio;
pub mod batch;
pub mod redistribute;
pub mod synthesis;
pub mod transcript;
pub mod weights;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum AlignError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
    #[error("WAV error")]
    Wav(#[from] hound::Error),
}

/// One whitespace token of a verse with its playback start offset in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimedWord {
    pub time: f64,
    pub text: String,
}

/// One transcript line with its start offset and per-word times.
///
/// `words` preserves the whitespace-tokenized order of `text`; word times are
/// weakly monotonic and the first word's time equals the verse's `time`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerseRecord {
    pub verse_number: String,
    pub time: f64,
    pub text: String,
    pub words: Vec<TimedWord>,
}

/// Alignment output for one audio/transcript pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecitationRecord {
    pub id: String,
    pub title: String,
    pub audio: String,
    pub verses: Vec<VerseRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CollectionInput {
    Many(Vec<RecitationRecord>),
    One(RecitationRecord),
}

/// Read a serialized collection from disk.
///
/// A file holding a single record (not wrapped in an array) is accepted and
/// normalized to a one-element collection.
pub fn read_collection(path: &Path) -> Result<Vec<RecitationRecord>, AlignError> {
    let content = fs::read_to_string(path)?;
    let input: CollectionInput = serde_json::from_str(&content)?;
    Ok(match input {
        CollectionInput::Many(records) => records,
        CollectionInput::One(record) => vec![record],
    })
}

/// Write a collection as a pretty-printed JSON array with 4-space indent.
///
/// Field order is the declaration order of the record structs, so repeated
/// runs over the same input produce byte-identical output.
pub fn write_collection(path: &Path, records: &[RecitationRecord]) -> Result<(), AlignError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    buf.push(b'\n');
    fs::write(path, buf)?;
    Ok(())
}
