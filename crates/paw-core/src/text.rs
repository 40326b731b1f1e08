//! Wide-character text decoding with explicit failure sentinels.
//!
//! OS tables hand back UTF-16 of arbitrary length and arbitrary content.
//! Decoding distinguishes three outcomes so enumeration loops can keep
//! their skip-and-continue model without any error crossing an item
//! boundary: legitimately empty text, text too long to handle safely,
//! and text that simply does not decode.

use crate::limits::{MAX_TEXT_BYTES, MAX_TITLE_UNITS, MAX_WIDE_UNITS};

/// Sentinel stored in a record when text exceeded the safety ceilings.
pub const TOO_LONG_SENTINEL: &str = "<path_too_long>";

/// Sentinel stored in a record when decoding failed outright.
pub const CONVERSION_FAILED_SENTINEL: &str = "<conversion_failed>";

/// Outcome of decoding one wide string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WideText {
    /// Decoded successfully; empty input decodes to an empty string.
    Text(String),
    /// Input or output exceeded the codec ceilings.
    TooLong,
    /// The units did not form valid UTF-16.
    ConversionFailed,
}

impl WideText {
    /// Decoded text, if decoding succeeded.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            WideText::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Lower the outcome to record-field text, mapping the failure
    /// variants to their reserved sentinel strings.
    pub fn into_record_text(self) -> String {
        match self {
            WideText::Text(s) => s,
            WideText::TooLong => TOO_LONG_SENTINEL.to_string(),
            WideText::ConversionFailed => CONVERSION_FAILED_SENTINEL.to_string(),
        }
    }
}

/// Whether a record field holds one of the reserved failure sentinels.
pub fn is_sentinel(s: &str) -> bool {
    s == TOO_LONG_SENTINEL || s == CONVERSION_FAILED_SENTINEL
}

/// Decode UTF-16 units into UTF-8 text.
///
/// Output size is tracked while decoding and the conversion aborts as
/// `TooLong` the moment it would cross [`MAX_TEXT_BYTES`], so a hostile
/// length cannot force a large allocation before being rejected.
pub fn decode_wide(units: &[u16]) -> WideText {
    if units.is_empty() {
        return WideText::Text(String::new());
    }
    if units.len() > MAX_WIDE_UNITS {
        return WideText::TooLong;
    }

    let mut out = String::new();
    let mut bytes = 0usize;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => {
                bytes += c.len_utf8();
                if bytes > MAX_TEXT_BYTES {
                    return WideText::TooLong;
                }
                out.push(c);
            }
            Err(_) => return WideText::ConversionFailed,
        }
    }
    WideText::Text(out)
}

/// Accept an OS-reported title length, or `None` to skip the window.
///
/// The report comes straight from the window owner and must be bounded
/// before any buffer is sized from it; a title longer than
/// [`MAX_TITLE_UNITS`] is the same too-long skip an overlong decode
/// would be, except no allocation ever happens.
pub fn accepted_title_len(reported: i32) -> Option<usize> {
    let len = usize::try_from(reported).ok()?;
    if len == 0 || len > MAX_TITLE_UNITS {
        return None;
    }
    Some(len)
}

/// Escape C0 control characters (except TAB/LF/CR) and DEL as `\xNN`.
///
/// Window titles are attacker-influenced; a title carrying a BEL or ESC
/// must not reach downstream JSON or terminal output verbatim.
pub fn escape_control_chars(input: &str) -> String {
    if !input.chars().any(needs_escape) {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        if needs_escape(c) {
            out.push_str(&format!("\\x{:02X}", c as u32));
        } else {
            out.push(c);
        }
    }
    out
}

fn needs_escape(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}')
}
