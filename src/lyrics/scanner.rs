/*!
 * Token scanning for LRC text.
 *
 * The parser never touches the raw text itself. It asks a `TokenScanner` for the
 * ID tags and the timestamped lyric lines, which keeps the matching engine
 * swappable:
 * - `RegexScanner`: multi-line patterns compiled once with the `regex` crate
 * - `ManualScanner`: a hand-written byte scanner accepting the same grammar
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::model::Gender;

// @const: ID tag line, `[tag:value]` anchored at line start
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\[([a-z]+):(.*?)\]").unwrap()
});

// @const: Lyric line: timestamp run, optional gender marker, rest of line
static LYRIC_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^((?:\[[0-9]{2}:[0-9]{2}(?:\.[0-9]{2})?\])+)(?:([MFD]): )?(.*)$").unwrap()
});

// @const: One leading `[mm:ss]` / `[mm:ss.xx]` token
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[([0-9]{2}):([0-9]{2})(?:\.([0-9]{2}))?\]").unwrap()
});

/// ID tag found in the text, borrowed from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagToken<'a> {
    pub tag: &'a str,
    pub value: &'a str,
}

/// Timestamp components of one `[mm:ss.xx]` token
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timestamp {
    pub minute: f64,
    pub second: f64,
    pub hundredth: f64,
}

/// One physical lyric line: all of its timestamps plus the shared annotation and text
#[derive(Debug, Clone, PartialEq)]
pub struct LyricToken<'a> {
    pub timestamps: Vec<Timestamp>,
    pub gender: Gender,
    pub text: &'a str,
}

/// Matching engine used by the parser
pub trait TokenScanner: Send + Sync {
    /// Every `[tag:value]` line, in source order
    fn scan_tags<'a>(&self, text: &'a str) -> Vec<TagToken<'a>>;

    /// Every line starting with at least one timestamp, in source order.
    /// Lines without a leading timestamp are skipped.
    fn scan_lyrics<'a>(&self, text: &'a str) -> Vec<LyricToken<'a>>;
}

/// Which `TokenScanner` implementation to use
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScannerKind {
    #[default]
    Regex,
    Manual,
}

impl ScannerKind {
    // @creates: Boxed scanner for this kind
    pub fn build(self) -> Box<dyn TokenScanner> {
        match self {
            Self::Regex => Box::new(RegexScanner),
            Self::Manual => Box::new(ManualScanner),
        }
    }
}

/// Line content without the carriage return left by CRLF input
fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Scanner built on precompiled regular expressions
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexScanner;

impl RegexScanner {
    /// Read a numeric capture group, absent groups count as zero
    fn component(caps: &Captures, idx: usize) -> f64 {
        caps.get(idx)
            .map_or(0.0, |m| m.as_str().parse().unwrap_or(0.0))
    }

    /// Split a run like `[00:01.00][00:05]` into timestamps, one token per iteration
    fn split_timestamps(mut run: &str) -> Vec<Timestamp> {
        let mut timestamps = Vec::new();
        while let Some(caps) = TIMESTAMP_REGEX.captures(run) {
            timestamps.push(Timestamp {
                minute: Self::component(&caps, 1),
                second: Self::component(&caps, 2),
                hundredth: Self::component(&caps, 3),
            });
            let consumed = caps.get(0).map_or(run.len(), |m| m.end());
            run = &run[consumed..];
        }
        timestamps
    }
}

impl TokenScanner for RegexScanner {
    fn scan_tags<'a>(&self, text: &'a str) -> Vec<TagToken<'a>> {
        TAG_REGEX
            .captures_iter(text)
            .filter_map(|caps| {
                Some(TagToken {
                    tag: caps.get(1)?.as_str(),
                    value: caps.get(2)?.as_str(),
                })
            })
            .collect()
    }

    fn scan_lyrics<'a>(&self, text: &'a str) -> Vec<LyricToken<'a>> {
        let mut tokens = Vec::new();
        for caps in LYRIC_LINE_REGEX.captures_iter(text) {
            let Some(run) = caps.get(1) else { continue };
            let timestamps = Self::split_timestamps(run.as_str());
            if timestamps.is_empty() {
                continue;
            }

            let gender = caps
                .get(2)
                .and_then(|m| m.as_str().chars().next())
                .and_then(Gender::from_marker)
                .unwrap_or_default();
            let text = caps.get(3).map_or("", |m| strip_cr(m.as_str()));

            tokens.push(LyricToken { timestamps, gender, text });
        }
        tokens
    }
}

/// Scanner walking the text byte by byte, no regex engine involved
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualScanner;

impl ManualScanner {
    /// Two ASCII digits as a number
    fn two_digits(bytes: &[u8]) -> Option<f64> {
        match bytes {
            [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
                Some(f64::from((a - b'0') * 10 + (b - b'0')))
            }
            _ => None,
        }
    }

    /// Take one leading timestamp token, returning it and the rest of the line
    fn take_timestamp(line: &str) -> Option<(Timestamp, &str)> {
        let bytes = line.as_bytes();
        if bytes.len() < 7 || bytes[0] != b'[' || bytes[3] != b':' {
            return None;
        }
        let minute = Self::two_digits(&bytes[1..3])?;
        let second = Self::two_digits(&bytes[4..6])?;

        let (hundredth, close) = match bytes[6] {
            b']' => (0.0, 6),
            b'.' if bytes.len() >= 10 && bytes[9] == b']' => (Self::two_digits(&bytes[7..9])?, 9),
            _ => return None,
        };

        let timestamp = Timestamp { minute, second, hundredth };
        Some((timestamp, &line[close + 1..]))
    }

    /// Take a `M: ` / `F: ` / `D: ` prefix if one is present
    fn take_gender(rest: &str) -> (Gender, &str) {
        let bytes = rest.as_bytes();
        if bytes.len() >= 3 && bytes[1] == b':' && bytes[2] == b' ' {
            if let Some(gender) = Gender::from_marker(char::from(bytes[0])) {
                return (gender, &rest[3..]);
            }
        }
        (Gender::None, rest)
    }

    fn tag_in_line(line: &str) -> Option<TagToken<'_>> {
        let inner = line.strip_prefix('[')?;
        let name_len = inner.bytes().take_while(u8::is_ascii_lowercase).count();
        if name_len == 0 {
            return None;
        }
        let after_name = inner[name_len..].strip_prefix(':')?;
        let close = after_name.find(']')?;
        Some(TagToken {
            tag: &inner[..name_len],
            value: &after_name[..close],
        })
    }
}

impl TokenScanner for ManualScanner {
    fn scan_tags<'a>(&self, text: &'a str) -> Vec<TagToken<'a>> {
        text.split('\n').filter_map(Self::tag_in_line).collect()
    }

    fn scan_lyrics<'a>(&self, text: &'a str) -> Vec<LyricToken<'a>> {
        let mut tokens = Vec::new();
        for line in text.split('\n') {
            let mut rest = line;
            let mut timestamps = Vec::new();
            while let Some((timestamp, remaining)) = Self::take_timestamp(rest) {
                timestamps.push(timestamp);
                rest = remaining;
            }
            if timestamps.is_empty() {
                continue;
            }

            let (gender, text) = Self::take_gender(rest);
            tokens.push(LyricToken {
                timestamps,
                gender,
                text: strip_cr(text),
            });
        }
        tokens
    }
}
