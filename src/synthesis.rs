//! Timestamp synthesis from transcript structure and total audio duration.
//!
//! No audio analysis happens here: per-word start times are heuristic
//! estimates derived from the weight model. The total duration is split
//! across lines proportionally to their summed word weights, then each
//! line's share is split across its words the same way.

use crate::weights::word_weight;
use crate::{TimedWord, VerseRecord};

/// A tokenized word with its pronunciation weight.
#[derive(Debug, Clone)]
pub struct Word {
    pub text: String,
    pub weight: f64,
}

/// One tokenized transcript line.
#[derive(Debug, Clone)]
pub struct WeightedLine {
    pub words: Vec<Word>,
    pub total_weight: f64,
}

impl WeightedLine {
    /// Tokenize a line by whitespace and weigh each word.
    pub fn from_line(line: &str) -> Self {
        let words: Vec<Word> = line
            .split_whitespace()
            .map(|text| Word {
                text: text.to_string(),
                weight: word_weight(text),
            })
            .collect();
        let total_weight = words.iter().map(|w| w.weight).sum();
        Self {
            words,
            total_weight,
        }
    }
}

/// Round a time value to 2 decimal places for output stability.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Hemistich label for line index `i`: lines pair up as `1a`/`1b`, `2a`/`2b`
/// and so on. An odd final line count leaves a trailing `a` unpaired.
fn verse_label(index: usize) -> String {
    let suffix = if index % 2 == 0 { 'a' } else { 'b' };
    format!("{}{}", index / 2 + 1, suffix)
}

/// Spread `verse_duration` across `words` proportionally to their weights.
///
/// The first word starts at `verse_start`; each subsequent word starts after
/// the elapsed weight so far, scaled so the whole line consumes exactly
/// `verse_duration`. Emitted times are rounded to 2 decimals and are
/// non-decreasing. Empty input yields an empty sequence.
pub fn distribute_weighted(words: &[Word], verse_start: f64, verse_duration: f64) -> Vec<TimedWord> {
    let line_weight: f64 = words.iter().map(|w| w.weight).sum();
    let unit_time = if line_weight > 0.0 {
        verse_duration / line_weight
    } else {
        0.0
    };

    let mut timed = Vec::with_capacity(words.len());
    let mut word_time = verse_start;
    for word in words {
        timed.push(TimedWord {
            time: round2(word_time),
            text: word.text.clone(),
        });
        word_time += word.weight * unit_time;
    }
    timed
}

/// Derive verse records for a transcript given the recording's total length.
///
/// Each transcript line becomes one verse; verse starts accumulate the
/// preceding lines' proportional duration shares. A zero grand total weight
/// (empty transcript) degrades to zero-length allocations instead of failing.
pub fn synthesize(lines: &[String], total_duration: f64) -> Vec<VerseRecord> {
    let weighted: Vec<WeightedLine> = lines.iter().map(|l| WeightedLine::from_line(l)).collect();

    let mut total_weight_all: f64 = weighted.iter().map(|l| l.total_weight).sum();
    if total_weight_all == 0.0 {
        total_weight_all = 1.0;
    }

    let mut verses = Vec::with_capacity(weighted.len());
    let mut current_time = 0.0;
    for (index, line) in weighted.iter().enumerate() {
        let line_duration = (line.total_weight / total_weight_all) * total_duration;
        let words = distribute_weighted(&line.words, current_time, line_duration);

        verses.push(VerseRecord {
            verse_number: verse_label(index),
            time: round2(current_time),
            text: lines[index].clone(),
            words,
        });
        current_time += line_duration;
    }
    verses
}
