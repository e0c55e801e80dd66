/*!
 * Tests for lyric extraction and ordering
 */

use lrcparse::{Gender, LrcParser, LyricLine, ParserConfig, ScannerKind, parse_lrc};
use crate::common::{self, assert_time_eq, texts, times};

/// Time is minutes, seconds and hundredths combined
#[test]
fn test_time_withFullTimestamp_shouldMatchFormula() {
    let doc = parse_lrc("[03:07.42]Somewhere");
    let line = &doc.lyrics[0];

    assert_eq!(line.minute(), 3.0);
    assert_eq!(line.second(), 7.0);
    assert_eq!(line.hundredth(), 42.0);
    assert_time_eq(line.time(), 3.0 * 60.0 + 7.0 + 42.0 * 0.01);
}

/// Several timestamps on one line share text and gender
#[test]
fn test_lyrics_withTimestampRun_shouldExpandPerTimestamp() {
    let doc = parse_lrc("[00:01.00][00:05.00]Hello");

    assert_eq!(doc.lyrics.len(), 2);
    assert_eq!(texts(&doc), vec!["Hello", "Hello"]);
    assert_time_eq(doc.lyrics[0].time(), 1.0);
    assert_time_eq(doc.lyrics[1].time(), 5.0);
}

/// Gender markers are recognised and removed from the text
#[test]
fn test_lyrics_withGenderMarkers_shouldAnnotateLines() {
    let doc = parse_lrc("[00:01.00]M: Hi\n[00:02.00]F: Hey\n[00:03.00]D: Both\n[00:04.00]Nobody");

    let genders: Vec<Gender> = doc.lyrics.iter().map(|l| l.gender).collect();
    assert_eq!(genders, vec![Gender::Male, Gender::Female, Gender::Duet, Gender::None]);
    assert_eq!(texts(&doc), vec!["Hi", "Hey", "Both", "Nobody"]);
}

/// Marker-like text that is not exactly `X: ` stays in the lyric
#[test]
fn test_lyrics_withMarkerLookalikes_shouldKeepText() {
    let doc = parse_lrc("[00:01.00]Mo: not a marker\n[00:02.00]M:tight\n[00:03.00]X: other");

    assert!(doc.lyrics.iter().all(|l| l.gender == Gender::None));
    assert_eq!(texts(&doc), vec!["Mo: not a marker", "M:tight", "X: other"]);
}

/// `[mm:ss]` without hundredths
#[test]
fn test_lyrics_withMissingHundredths_shouldDefaultToZero() {
    let doc = parse_lrc("[00:01]Hi");
    assert_time_eq(doc.lyrics[0].time(), 1.0);
}

/// Out of order input ends up sorted, ties keep source order
#[test]
fn test_lyrics_withUnorderedInput_shouldSortStably() {
    let doc = parse_lrc("[00:09.00]c\n[00:03.00]a\n[00:09.00]d\n[00:03.00]b\n[00:01.00][00:09.00]e");

    assert_eq!(texts(&doc), vec!["e", "a", "b", "c", "d", "e"]);
    let t = times(&doc);
    assert!(t.windows(2).all(|w| w[0] <= w[1]));
}

/// Lines without a leading timestamp contribute nothing
#[test]
fn test_lyrics_withNonTimestampLines_shouldSkipThem() {
    let doc = parse_lrc("plain text\n\n  [00:01.00]indented\n[0:01.00]short\n[00:01.000]millis\n[00:02.00]kept");

    assert_eq!(texts(&doc), vec!["kept"]);
}

/// A timestamp with nothing after it is an empty lyric
#[test]
fn test_lyrics_withEmptyText_shouldKeepEmptyLine() {
    let doc = parse_lrc("[00:01.00]\n[00:02.00]M: ");

    assert_eq!(texts(&doc), vec!["", ""]);
    assert_eq!(doc.lyrics[1].gender, Gender::Male);
}

/// Surrounding whitespace is kept unless trimming is enabled
#[test]
fn test_lyrics_withPaddedText_shouldRespectTrimOption() {
    let text = "[00:01.00]  padded  ";
    assert_eq!(parse_lrc(text).lyrics[0].text, "  padded  ");

    let config = ParserConfig {
        trim_lyric_text: true,
        ..ParserConfig::default()
    };
    let doc = LrcParser::with_config(config).parse(text).document;
    assert_eq!(doc.lyrics[0].text, "padded");
}

/// Both scanners build the same document
#[test]
fn test_scanners_withFullSong_shouldProduceSameDocument() {
    let manual = LrcParser::with_config(ParserConfig {
        scanner: ScannerKind::Manual,
        ..ParserConfig::default()
    });
    let regex = LrcParser::with_config(ParserConfig::default());

    for input in [common::FULL_SONG.to_string(), common::full_song_crlf()] {
        assert_eq!(manual.parse(&input), regex.parse(&input));
    }
}

/// Lyric lines stay consistent after their timestamp changes
#[test]
fn test_lyricLine_withUpdatedTimestamp_shouldRecomputeTime() {
    let mut line = LyricLine::new(0.0, 1.0, 0.0, "x");
    line.set_timestamp(0.0, 2.0, 50.0);
    assert_time_eq(line.time(), 2.5);
}
