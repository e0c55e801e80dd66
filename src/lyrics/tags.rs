use super::model::LrcDocument;
use crate::errors::LrcError;

// @module: ID tag dispatch

/// Apply one `[tag:value]` pair to the document.
///
/// Unknown tags and malformed offsets leave the document untouched and come back
/// as an `Err`; nothing else about the parse is affected.
pub fn apply_tag(doc: &mut LrcDocument, tag: &str, value: &str) -> Result<(), LrcError> {
    if tag.is_empty() {
        return Ok(());
    }

    match tag {
        "ar" => doc.artist = value.to_string(),
        "al" => doc.album = value.to_string(),
        "ti" => doc.title = value.to_string(),
        "au" => doc.author = value.to_string(),
        "length" => doc.length = value.to_string(),
        "by" => doc.made_by = value.to_string(),
        "re" => doc.editor = value.to_string(),
        "ve" => doc.version = value.to_string(),
        "offset" => doc.offset = parse_offset(value)?,
        _ => {
            return Err(LrcError::UnrecognizedTag {
                tag: tag.to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

/// Parse an offset value of the form `<sign><number>`.
///
/// A leading `-` negates the number and a leading `+` is dropped. Without a sign
/// character the whole value is the number, so `20` and `+20` are the same.
/// Surrounding whitespace is ignored, and anything shorter than two characters
/// is rejected.
pub fn parse_offset(value: &str) -> Result<f64, LrcError> {
    let invalid = || LrcError::InvalidOffset {
        value: value.to_string(),
    };

    let trimmed = value.trim();
    if trimmed.chars().count() < 2 {
        return Err(invalid());
    }

    let (sign, magnitude) = match trimmed.chars().next() {
        Some('-') => (-1.0, &trimmed[1..]),
        Some('+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    if !is_unsigned_decimal(magnitude) {
        return Err(invalid());
    }

    let magnitude: f64 = magnitude.parse().map_err(|_| invalid())?;
    Ok(magnitude * sign)
}

/// Digits with at most one decimal point and at least one digit
fn is_unsigned_decimal(s: &str) -> bool {
    let mut digits = 0;
    let mut dots = 0;
    for c in s.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}
