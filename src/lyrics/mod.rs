/*!
 * LRC lyrics parsing.
 *
 * - `model`: the parsed document, lyric lines and performer annotations
 * - `scanner`: token scanning engines (regex and hand-written)
 * - `tags`: ID tag dispatch and offset parsing
 * - `parser`: the parser tying them together
 */

pub mod model;
pub mod parser;
pub mod scanner;
pub mod tags;

pub use model::{Gender, LrcDocument, LyricLine};
pub use parser::{LrcParser, ParseOutcome, parse_lrc};
pub use scanner::{ManualScanner, RegexScanner, ScannerKind, TokenScanner};
