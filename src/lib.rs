/*!
 * # lrcparse - LRC lyrics parser
 *
 * A Rust library turning LRC lyric text into a structured document.
 *
 * ## Features
 *
 * - ID tag metadata (`ar`, `al`, `ti`, `au`, `length`, `by`, `re`, `ve`, `offset`)
 * - Timestamped lyrics in `[mm:ss]` and `[mm:ss.xx]` form
 * - Several timestamps on one line, expanded into one lyric per timestamp
 * - Duet markers (`M: `, `F: `, `D: `) after the timestamps
 * - Lyrics sorted by time, ties kept in source order
 * - Best-effort parsing: bad tags are reported as warnings, never fatal
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `lyrics`: LRC parsing:
 *   - `lyrics::model`: Document and lyric line types
 *   - `lyrics::scanner`: Swappable token scanning engines
 *   - `lyrics::tags`: ID tag dispatch
 *   - `lyrics::parser`: The parser
 * - `app_config`: Configuration management
 * - `logging`: Optional terminal logger for host applications
 * - `errors`: Custom error types for the library
 *
 * ## Example
 *
 * ```
 * use lrcparse::LrcParser;
 *
 * let outcome = LrcParser::new().parse("[ar:Someone]\n[00:05.00][00:01.00]Hello");
 * let doc = outcome.document;
 * assert_eq!(doc.artist, "Someone");
 * assert_eq!(doc.lyrics.len(), 2);
 * assert!(doc.lyrics[0].time() < doc.lyrics[1].time());
 * ```
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod logging;
pub mod lyrics;

// Re-export main types for easier usage
pub use app_config::{Config, LogLevel, ParserConfig};
pub use errors::LrcError;
pub use lyrics::{Gender, LrcDocument, LrcParser, LyricLine, ParseOutcome, ScannerKind, parse_lrc};
