use serde::{Deserialize, Serialize};
use std::fmt;

// @module: LRC document model

/// Performer annotation carried by duet-style LRC lines (`M: `, `F: `, `D: `)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    None,
    Male,
    Female,
    Duet,
}

impl Gender {
    // @returns: Gender for a marker letter, None if the letter is not a marker
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'M' => Some(Self::Male),
            'F' => Some(Self::Female),
            'D' => Some(Self::Duet),
            _ => None,
        }
    }

    // @returns: Marker letter as written in LRC text
    pub fn marker(&self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Male => Some('M'),
            Self::Female => Some('F'),
            Self::Duet => Some('D'),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Male => "male",
            Self::Female => "female",
            Self::Duet => "duet",
        };
        write!(f, "{}", name)
    }
}

/// A single timestamped lyric.
///
/// The timestamp components are kept as parsed so callers can inspect them, but
/// they are private: the derived `time()` is always computed from them and can
/// never drift out of sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricLine {
    minute: f64,
    second: f64,
    hundredth: f64,

    /// Who sings this line
    #[serde(default)]
    pub gender: Gender,

    /// Lyric text, may be empty
    pub text: String,
}

impl LyricLine {
    /// Create a lyric with no performer annotation
    pub fn new(minute: f64, second: f64, hundredth: f64, text: impl Into<String>) -> Self {
        Self::with_gender(minute, second, hundredth, Gender::None, text)
    }

    /// Create a lyric with an explicit performer annotation
    pub fn with_gender(
        minute: f64,
        second: f64,
        hundredth: f64,
        gender: Gender,
        text: impl Into<String>,
    ) -> Self {
        LyricLine {
            minute,
            second,
            hundredth,
            gender,
            text: text.into(),
        }
    }

    pub fn minute(&self) -> f64 {
        self.minute
    }

    pub fn second(&self) -> f64 {
        self.second
    }

    pub fn hundredth(&self) -> f64 {
        self.hundredth
    }

    /// Replace all three timestamp components at once
    pub fn set_timestamp(&mut self, minute: f64, second: f64, hundredth: f64) {
        self.minute = minute;
        self.second = second;
        self.hundredth = hundredth;
    }

    /// Position of this lyric in seconds
    pub fn time(&self) -> f64 {
        self.minute * 60.0 + self.second + self.hundredth * 0.01
    }
}

/// Parsed LRC document: ID tag metadata plus lyrics ordered by time
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LrcDocument {
    /// `[ar:]` lyrics artist
    pub artist: String,

    /// `[al:]` album the song is from
    pub album: String,

    /// `[ti:]` song title
    pub title: String,

    /// `[au:]` creator of the song text
    pub author: String,

    /// `[length:]` song length, kept verbatim
    pub length: String,

    /// `[by:]` creator of the LRC file
    pub made_by: String,

    /// `[re:]` player or editor that created the file
    pub editor: String,

    /// `[ve:]` version of that program
    pub version: String,

    /// `[offset:]` overall timestamp adjustment, in seconds like `LyricLine::time`.
    /// A positive value makes lyrics appear sooner.
    pub offset: f64,

    /// Lyrics, ascending by time after a parse
    pub lyrics: Vec<LyricLine>,
}

impl LrcDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every field so the document can be parsed into again
    pub fn clear(&mut self) {
        self.artist.clear();
        self.album.clear();
        self.title.clear();
        self.author.clear();
        self.length.clear();
        self.made_by.clear();
        self.editor.clear();
        self.version.clear();
        self.offset = 0.0;
        self.lyrics.clear();
    }

    /// True when no metadata is set and there are no lyrics
    pub fn is_empty(&self) -> bool {
        self.artist.is_empty()
            && self.album.is_empty()
            && self.title.is_empty()
            && self.author.is_empty()
            && self.length.is_empty()
            && self.made_by.is_empty()
            && self.editor.is_empty()
            && self.version.is_empty()
            && self.offset == 0.0
            && self.lyrics.is_empty()
    }

    /// Stable sort of the lyrics by time; equal times keep discovery order
    pub fn sort_lyrics(&mut self) {
        self.lyrics.sort_by(|a, b| a.time().total_cmp(&b.time()));
    }

    /// Time of `line` with the document offset applied, never below zero
    pub fn shifted_time(&self, line: &LyricLine) -> f64 {
        (line.time() - self.offset).max(0.0)
    }

    /// Index of the last lyric starting at or before `time`.
    ///
    /// Assumes the lyrics are sorted, which holds after any parse.
    pub fn line_index_at(&self, time: f64) -> Option<usize> {
        let upcoming = self.lyrics.partition_point(|line| line.time() <= time);
        upcoming.checked_sub(1)
    }
}
