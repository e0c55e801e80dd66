/*!
 * LRC parser.
 *
 * A parse always runs the same steps on a cleared document:
 * 1. Apply every ID tag (`[ar:...]`, `[offset:...]`, ...)
 * 2. Expand every lyric line into one `LyricLine` per leading timestamp
 * 3. Stable-sort the lyrics by time
 *
 * Problems with individual tags are logged and collected, never fatal.
 */

use anyhow::{Result, anyhow};
use log::{debug, trace, warn};

use super::model::{LrcDocument, LyricLine};
use super::scanner::{RegexScanner, TokenScanner};
use super::tags;
use crate::app_config::ParserConfig;
use crate::errors::LrcError;

/// Result of a parse: the document plus every soft error met along the way
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseOutcome {
    pub document: LrcDocument,
    pub warnings: Vec<LrcError>,
}

impl ParseOutcome {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Treat any warning as a failure, for callers that want strict input
    pub fn into_result(self) -> Result<LrcDocument> {
        match self.warnings.first() {
            None => Ok(self.document),
            Some(first) => Err(anyhow!(
                "LRC text produced {} warning(s), first: {}",
                self.warnings.len(),
                first
            )),
        }
    }
}

/// Stateless LRC parser; one instance can serve any number of documents
pub struct LrcParser {
    scanner: Box<dyn TokenScanner>,
    config: ParserConfig,
}

impl Default for LrcParser {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LrcParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LrcParser")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl LrcParser {
    /// Parser with the default configuration and the regex scanner
    pub fn new() -> Self {
        LrcParser {
            scanner: Box::new(RegexScanner),
            config: ParserConfig::default(),
        }
    }

    /// Parser whose scanner and options come from configuration
    pub fn with_config(config: ParserConfig) -> Self {
        LrcParser {
            scanner: config.scanner.build(),
            config,
        }
    }

    /// Parser using a caller-supplied matching engine
    pub fn with_scanner(scanner: Box<dyn TokenScanner>, config: ParserConfig) -> Self {
        LrcParser { scanner, config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `text` into a fresh document
    pub fn parse(&self, text: &str) -> ParseOutcome {
        let mut document = LrcDocument::new();
        let warnings = self.parse_into(&mut document, text);
        ParseOutcome { document, warnings }
    }

    /// Clear `doc`, then parse `text` into it.
    ///
    /// Nothing from a previous parse survives, so parsing the same text twice into
    /// the same document gives the same result.
    pub fn parse_into(&self, doc: &mut LrcDocument, text: &str) -> Vec<LrcError> {
        doc.clear();

        let warnings = self.extract_tags(doc, text);
        self.extract_lyrics(doc, text);
        doc.sort_lyrics();

        debug!(
            "Parsed LRC text: {} lyric line(s), {} warning(s)",
            doc.lyrics.len(),
            warnings.len()
        );
        warnings
    }

    fn extract_tags(&self, doc: &mut LrcDocument, text: &str) -> Vec<LrcError> {
        let mut warnings = Vec::new();

        for token in self.scanner.scan_tags(text) {
            match tags::apply_tag(doc, token.tag, token.value) {
                Ok(()) => trace!("Applied tag [{}:{}]", token.tag, token.value),
                Err(e) if e.is_unrecognized_tag() && !self.config.report_unknown_tags => {}
                Err(e) => {
                    warn!("{}", e);
                    warnings.push(e);
                }
            }
        }

        warnings
    }

    fn extract_lyrics(&self, doc: &mut LrcDocument, text: &str) {
        for token in self.scanner.scan_lyrics(text) {
            let lyric = if self.config.trim_lyric_text {
                token.text.trim()
            } else {
                token.text
            };

            trace!("Lyric line with {} timestamp(s): {}", token.timestamps.len(), lyric);

            for ts in &token.timestamps {
                doc.lyrics.push(LyricLine::with_gender(
                    ts.minute,
                    ts.second,
                    ts.hundredth,
                    token.gender,
                    lyric,
                ));
            }
        }
    }
}

/// Parse LRC text with the default parser, dropping the warnings after logging them
pub fn parse_lrc(text: &str) -> LrcDocument {
    LrcParser::new().parse(text).document
}
