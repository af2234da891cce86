//! Batch orchestration over a corpus of transcript/audio pairs.
//!
//! Every unit is independent: a missing input or a processing failure skips
//! that unit with a warning and never aborts its siblings. Units run on
//! rayon's worker pool (sized to the host's parallelism), each to completion
//! without intra-unit concurrency, and results are collected after the pool
//! joins.

use std::path::PathBuf;

use rayon::prelude::*;

use crate::audio::DurationProbe;
use crate::{synthesis, transcript, AlignError, RecitationRecord};

/// File naming convention for a recitation corpus: chapter `n` maps to
/// `<file_prefix><nnn>.txt` and `<file_prefix><nnn>.<audio_ext>` inside
/// `dir`, with `nnn` zero-padded to three digits.
#[derive(Debug, Clone)]
pub struct CorpusLayout {
    pub dir: PathBuf,
    pub file_prefix: String,
    pub audio_ext: String,
    pub title_stem: String,
}

impl CorpusLayout {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            file_prefix: "Narayaneeyam_D".to_string(),
            audio_ext: "wav".to_string(),
            title_stem: "Narayaneeyam".to_string(),
        }
    }

    /// The processing unit for one chapter number.
    pub fn unit(&self, chapter: u32) -> Unit {
        let number = format!("{:03}", chapter);
        Unit {
            id: format!("D{}", number),
            title: format!("{} - Chapter {}", self.title_stem, chapter),
            transcript: self.dir.join(format!("{}{}.txt", self.file_prefix, number)),
            audio: self
                .dir
                .join(format!("{}{}.{}", self.file_prefix, number, self.audio_ext)),
        }
    }

    /// Units for chapters `1..=count`.
    pub fn units(&self, count: u32) -> Vec<Unit> {
        (1..=count).map(|chapter| self.unit(chapter)).collect()
    }
}

/// One identifier's transcript/audio pair, resolved to concrete paths.
#[derive(Debug, Clone)]
pub struct Unit {
    pub id: String,
    pub title: String,
    pub transcript: PathBuf,
    pub audio: PathBuf,
}

fn try_process(unit: &Unit, probe: &dyn DurationProbe) -> Result<RecitationRecord, AlignError> {
    let total_duration = probe.duration_seconds(&unit.audio)?;
    let lines = transcript::load_lines(&unit.transcript)?;
    let verses = synthesis::synthesize(&lines, total_duration);

    let audio = unit
        .audio
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| unit.audio.display().to_string());

    Ok(RecitationRecord {
        id: unit.id.clone(),
        title: unit.title.clone(),
        audio,
        verses,
    })
}

/// Process one unit, containing every failure at the unit boundary.
///
/// Returns `None` (after a warning) when either input is missing or any step
/// of processing fails.
pub fn process_unit(unit: &Unit, probe: &dyn DurationProbe) -> Option<RecitationRecord> {
    if !unit.transcript.exists() || !unit.audio.exists() {
        log::warn!(
            "{} or {} not found, skipping {}",
            unit.transcript.display(),
            unit.audio.display(),
            unit.id
        );
        return None;
    }

    log::info!("processing {}", unit.id);
    match try_process(unit, probe) {
        Ok(record) => Some(record),
        Err(err) => {
            log::warn!("failed to process {}: {err}", unit.id);
            None
        }
    }
}

/// Run every unit in parallel and collect the produced records.
///
/// Completion order under the pool is nondeterministic, so the collected
/// records are sorted by id ascending for reproducible output.
pub fn run_batch(units: &[Unit], probe: &dyn DurationProbe) -> Vec<RecitationRecord> {
    let mut records: Vec<RecitationRecord> = units
        .par_iter()
        .filter_map(|unit| process_unit(unit, probe))
        .collect();
    records.sort_by(|a, b| a.id.cmp(&b.id));
    records
}
