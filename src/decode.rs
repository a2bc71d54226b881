//! Layered stream decoding.
//!
//! MSG string streams are nominally UTF-16LE, but real files disagree
//! with their own metadata often enough that every field read goes
//! through an ordered fallback chain. HTML bodies need a stricter
//! treatment: single-byte-encoded bytes frequently decode under
//! UTF-16LE without error and come out as garbage, so each candidate
//! there is judged by whether its output looks like HTML at all, not by
//! whether the decode succeeded.

use crate::container::MsgContainer;
use encoding_rs::{UTF_8, UTF_16LE};
use std::borrow::Cow;
use std::io::{Read, Seek};
use tracing::trace;

/// Substrings that mark a decode attempt as plausible HTML
const HTML_MARKERS: [&str; 4] = ["<html", "<body", "<head", "<div"];

type Candidate = fn(&[u8]) -> Option<String>;

/// Field decoders in priority order; the first that applies wins.
/// The last candidate never fails.
const FIELD_CANDIDATES: [Candidate; 3] = [decode_utf16_le, decode_utf8, decode_utf8_discarding];

/// Decode one named stream as a text field.
///
/// Returns `None` when the stream is missing or unreadable. Per-field
/// problems never abort a conversion; they only leave the field absent.
pub(crate) fn decode_stream<R: Read + Seek>(
    container: &mut MsgContainer<R>,
    path: &str,
) -> Option<String> {
    if !container.exists(path) {
        return None;
    }
    match container.read_stream(path) {
        Ok(raw) => Some(decode_field(&raw)),
        Err(err) => {
            trace!("unreadable stream {path}: {err}");
            None
        }
    }
}

/// Run the field decoder chain and normalize the winner.
pub(crate) fn decode_field(raw: &[u8]) -> String {
    FIELD_CANDIDATES
        .iter()
        .find_map(|candidate| candidate(raw))
        .map(|text| normalize(&text))
        .unwrap_or_default()
}

/// Decode the raw bytes of the HTML body stream into markdown.
///
/// Candidates run in order and each result is gated on
/// [`looks_like_html`]: a clean decode that does not look like HTML is
/// rejected the same as a failed one. When the UTF-16LE attempt cannot
/// decode the bytes at all, only Latin-1 is tried before giving up.
/// Returns the markdown rendering of the first plausible candidate, or
/// an empty string when nothing is plausible.
pub(crate) fn decode_html_body(raw: &[u8]) -> String {
    let utf16 = decode_utf16_le(raw);
    let rest: &[Candidate] = if utf16.is_some() {
        &[decode_latin1, decode_utf8_discarding]
    } else {
        &[decode_latin1]
    };

    utf16
        .into_iter()
        .chain(rest.iter().filter_map(|candidate| candidate(raw)))
        .map(|text| normalize(&text))
        .find(|text| looks_like_html(text))
        .map_or_else(String::new, |html| html2md::parse_html(&html))
}

fn decode_utf16_le(raw: &[u8]) -> Option<String> {
    UTF_16LE
        .decode_without_bom_handling_and_without_replacement(raw)
        .map(Cow::into_owned)
}

fn decode_utf8(raw: &[u8]) -> Option<String> {
    UTF_8
        .decode_without_bom_handling_and_without_replacement(raw)
        .map(Cow::into_owned)
}

/// Lossy UTF-8 with invalid sequences dropped rather than replaced
fn decode_utf8_discarding(raw: &[u8]) -> Option<String> {
    let text: String = String::from_utf8_lossy(raw)
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
        .collect();
    Some(text)
}

/// Latin-1 maps every byte to a code point, so this cannot fail
fn decode_latin1(raw: &[u8]) -> Option<String> {
    Some(encoding_rs::mem::decode_latin1(raw).into_owned())
}

/// Drop a single trailing NUL if the stream kept its terminator, then
/// trim surrounding whitespace. Applied to every decoded field.
fn normalize(text: &str) -> String {
    text.strip_suffix('\u{0}').unwrap_or(text).trim().to_string()
}

/// Cheap content sniff for "did this decode produce HTML"
fn looks_like_html(content: &str) -> bool {
    let lower = content.to_lowercase();
    HTML_MARKERS.iter().any(|marker| lower.contains(marker))
}
