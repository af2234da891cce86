use std::fs;

use verse_align::redistribute::{redistribute_collection, redistribute_words};
use verse_align::{read_collection, write_collection, RecitationRecord, TimedWord, VerseRecord};

fn verse(number: &str, time: f64, words: &[(f64, &str)]) -> VerseRecord {
    VerseRecord {
        verse_number: number.to_string(),
        time,
        text: words
            .iter()
            .map(|(_, text)| *text)
            .collect::<Vec<_>>()
            .join(" "),
        words: words
            .iter()
            .map(|(time, text)| TimedWord {
                time: *time,
                text: text.to_string(),
            })
            .collect(),
    }
}

#[test]
fn words_are_respaced_uniformly_between_verse_starts() {
    let mut verses = vec![
        verse("1a", 0.0, &[(0.0, "a"), (0.3, "b"), (5.1, "c"), (7.9, "d")]),
        verse("1b", 8.0, &[(8.0, "e")]),
    ];
    redistribute_words(&mut verses, 5.0);

    let times: Vec<f64> = verses[0].words.iter().map(|w| w.time).collect();
    assert_eq!(times, vec![0.0, 2.0, 4.0, 6.0]);
}

#[test]
fn final_verse_uses_the_tail_duration() {
    let mut verses = vec![verse("1a", 10.0, &[(0.0, "a"), (0.0, "b"), (0.0, "c")])];
    redistribute_words(&mut verses, 6.0);

    let times: Vec<f64> = verses[0].words.iter().map(|w| w.time).collect();
    assert_eq!(times, vec![10.0, 12.0, 14.0]);
}

#[test]
fn redistribution_is_idempotent_on_uniform_input() {
    let mut verses = vec![
        verse("1a", 0.0, &[(0.0, "a"), (2.0, "b")]),
        verse("1b", 4.0, &[(4.0, "c"), (5.0, "d"), (6.0, "e")]),
    ];
    let mut again = verses.clone();

    redistribute_words(&mut verses, 3.0);
    redistribute_words(&mut again, 3.0);
    redistribute_words(&mut again, 3.0);

    for (a, b) in verses[1].words.iter().zip(again[1].words.iter()) {
        assert!((a.time - b.time).abs() < 1e-9);
    }
    // The input was already uniformly spaced, so nothing should move.
    let times: Vec<f64> = verses[1].words.iter().map(|w| w.time).collect();
    assert_eq!(times, vec![4.0, 5.0, 6.0]);
}

#[test]
fn empty_verse_is_skipped_without_error() {
    let mut verses = vec![
        verse("1a", 8.0, &[]),
        verse("1b", 10.0, &[(10.0, "a"), (10.0, "b")]),
    ];
    redistribute_words(&mut verses, 5.0);

    assert!(verses[0].words.is_empty());
    // The following verse is still processed normally.
    let times: Vec<f64> = verses[1].words.iter().map(|w| w.time).collect();
    assert_eq!(times, vec![10.0, 12.5]);
}

#[test]
fn non_positive_duration_collapses_words_onto_verse_start() {
    // Caller-supplied times are trusted, even out of order.
    let mut verses = vec![
        verse("1a", 10.0, &[(1.0, "a"), (2.0, "b")]),
        verse("1b", 8.0, &[(8.0, "c")]),
    ];
    redistribute_words(&mut verses, 5.0);

    let times: Vec<f64> = verses[0].words.iter().map(|w| w.time).collect();
    assert_eq!(times, vec![10.0, 10.0]);
}

#[test]
fn verse_level_fields_are_left_untouched() {
    let mut records = vec![RecitationRecord {
        id: "D001".to_string(),
        title: "Narayaneeyam - Chapter 1".to_string(),
        audio: "Narayaneeyam_D001.wav".to_string(),
        verses: vec![
            verse("1a", 0.0, &[(0.1, "a"), (0.2, "b")]),
            verse("1b", 4.0, &[(4.4, "c")]),
        ],
    }];
    let before = records.clone();

    redistribute_collection(&mut records, 5.0);

    assert_eq!(records[0].id, before[0].id);
    assert_eq!(records[0].audio, before[0].audio);
    for (fresh, old) in records[0].verses.iter().zip(before[0].verses.iter()) {
        assert_eq!(fresh.verse_number, old.verse_number);
        assert_eq!(fresh.time, old.time);
        assert_eq!(fresh.text, old.text);
    }
}

#[test]
fn single_record_file_is_normalized_to_a_collection() {
    let record = RecitationRecord {
        id: "D007".to_string(),
        title: "Narayaneeyam - Chapter 7".to_string(),
        audio: "Narayaneeyam_D007.wav".to_string(),
        verses: vec![verse("1a", 0.0, &[(0.0, "a")])],
    };

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("single.json");
    fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();

    let records = read_collection(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], record);
}

#[test]
fn collections_round_trip_with_stable_formatting() {
    let records = vec![RecitationRecord {
        id: "D001".to_string(),
        title: "Narayaneeyam - Chapter 1".to_string(),
        audio: "Narayaneeyam_D001.wav".to_string(),
        verses: vec![verse("1a", 0.0, &[(0.0, "रामो"), (0.8, "राजमणिः")])],
    }];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collection.json");
    write_collection(&path, &records).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    // 4-space indent, stable field order, trailing newline.
    assert!(written.starts_with("[\n    {\n        \"id\": \"D001\""));
    assert!(written.ends_with("]\n"));

    let reread = read_collection(&path).unwrap();
    assert_eq!(reread, records);
}
