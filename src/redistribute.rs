//! Word time redistribution after manual verse-boundary correction.
//!
//! Once verse start times have been human-verified, the character weight
//! heuristic is no longer trusted within a verse, so words are respaced
//! uniformly instead of proportionally. Verse-level `time`, `text` and
//! `verse_number` fields are left untouched; only `words[*].time` changes.

use crate::{RecitationRecord, VerseRecord};

/// Duration assumed for the final verse, which has no successor to bound it.
pub const DEFAULT_TAIL_DURATION: f64 = 5.0;

/// Respace each verse's word times uniformly across the verse's duration.
///
/// A verse's duration is the gap to the next verse's start, or
/// `tail_duration` for the last verse. Caller-supplied verse times are
/// trusted as-is: a non-positive gap collapses every word onto the verse
/// start rather than erroring.
pub fn redistribute_words(verses: &mut [VerseRecord], tail_duration: f64) {
    for i in 0..verses.len() {
        let verse_start = verses[i].time;
        let verse_duration = match verses.get(i + 1) {
            Some(next) => next.time - verse_start,
            None => tail_duration,
        };

        let words = &mut verses[i].words;
        let num_words = words.len();
        if num_words > 0 && verse_duration > 0.0 {
            let time_per_word = verse_duration / num_words as f64;
            for (j, word) in words.iter_mut().enumerate() {
                word.time = verse_start + j as f64 * time_per_word;
            }
        } else {
            for word in words.iter_mut() {
                word.time = verse_start;
            }
        }
    }
}

/// Apply [`redistribute_words`] to every recitation in a collection,
/// preserving input order.
pub fn redistribute_collection(records: &mut [RecitationRecord], tail_duration: f64) {
    for record in records.iter_mut() {
        redistribute_words(&mut record.verses, tail_duration);
    }
}
