/*!
 * Common test utilities for the lrcparse test suite
 */

use lrcparse::LrcDocument;

/// A complete LRC file with every known tag, a duet section and a repeated chorus
pub const FULL_SONG: &str = r#"[ar:The Testers]
[al:Fixtures]
[ti:Parsing Song]
[au:Jane Writer]
[length:03:25]
[by:lrc maker]
[offset:-150]
[re:Some Editor]
[ve:2.1]

[00:12.00]First verse line
[00:17.20]F: Second verse line
[00:21.10]M: Third verse line
[00:24.00][01:24.00]D: Chorus we all sing
[00:29.50][01:29.50]Chorus goes on
[01:00.00]
[01:05]Bridge without hundredths
"#;

/// The same file as `FULL_SONG` with Windows line endings
pub fn full_song_crlf() -> String {
    FULL_SONG.replace('\n', "\r\n")
}

/// Times of every lyric in the document, in order
pub fn times(doc: &LrcDocument) -> Vec<f64> {
    doc.lyrics.iter().map(|line| line.time()).collect()
}

/// Texts of every lyric in the document, in order
pub fn texts(doc: &LrcDocument) -> Vec<&str> {
    doc.lyrics.iter().map(|line| line.text.as_str()).collect()
}

/// Assert two times are equal within floating point tolerance
pub fn assert_time_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected time {} but got {}",
        expected,
        actual
    );
}
