//! Audio duration probing.
//!
//! The aligner never inspects waveform content; the only fact it needs from
//! an audio file is its total playback length in seconds.

use std::path::Path;

use crate::AlignError;

/// Source of audio durations. A seam so the batch orchestrator can be driven
/// by a fixture probe in tests.
pub trait DurationProbe: Sync {
    /// Total playback length of the referenced audio, in seconds.
    fn duration_seconds(&self, path: &Path) -> Result<f64, AlignError>;
}

/// Probe that reads the duration from a WAV file header.
#[derive(Debug, Default)]
pub struct WavDurationProbe;

impl DurationProbe for WavDurationProbe {
    fn duration_seconds(&self, path: &Path) -> Result<f64, AlignError> {
        let reader = hound::WavReader::open(path)?;
        let spec = reader.spec();
        Ok(reader.duration() as f64 / spec.sample_rate as f64)
    }
}
