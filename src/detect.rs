//! Format detection for Outlook message inputs

use crate::types::StreamInfo;
use std::io::{Read, Seek};

/// Canonical file extension for this format
pub const MSG_EXTENSION: &str = ".msg";

/// Canonical media-type prefix for this format
pub const MSG_MIME_PREFIX: &str = "application/vnd.ms-outlook";

/// Directory entry present in compound documents carrying a standard
/// properties stream
pub const PROPERTIES_MARKER: &str = "__properties_version1.0";

/// Directory entry present when the message carries a standard
/// single-recipient table
pub const RECIPIENT_TABLE_MARKER: &str = "__recip_version1.0_#00000000";

/// Decide whether the input is plausibly an Outlook message.
///
/// Cheap metadata signals are checked first; only when both miss is the
/// input opened as a compound document and its directory inspected. The
/// read cursor is restored to its original offset on every path, so the
/// same input can be handed to further detectors afterwards.
pub fn accepts<R: Read + Seek>(input: &mut R, info: &StreamInfo) -> bool {
    if info
        .extension
        .as_deref()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MSG_EXTENSION))
    {
        return true;
    }

    if info
        .mimetype
        .as_deref()
        .is_some_and(|mime| mime.to_ascii_lowercase().starts_with(MSG_MIME_PREFIX))
    {
        return true;
    }

    probe_container(input)
}

/// Brute-force branch: open the input as a compound document and look
/// for the two marker entries in its directory. Every failure along the
/// way, from a short read to a corrupt allocation table, counts as "not
/// this format".
#[cfg(feature = "ole")]
fn probe_container<R: Read + Seek>(input: &mut R) -> bool {
    use std::io::SeekFrom;

    let Ok(origin) = input.stream_position() else {
        return false;
    };
    let verdict = probe_directory(input).unwrap_or(false);
    let _ = input.seek(SeekFrom::Start(origin));
    verdict
}

#[cfg(feature = "ole")]
fn probe_directory<R: Read + Seek>(input: &mut R) -> std::io::Result<bool> {
    use crate::container::{self, MsgContainer};

    if !container::is_compound_file(input) {
        return Ok(false);
    }
    let container = MsgContainer::open(&mut *input)?;
    let toc = container.directory_blob();
    Ok(toc.contains(PROPERTIES_MARKER) && toc.contains(RECIPIENT_TABLE_MARKER))
}

/// Without compound-document support there is nothing further to check.
#[cfg(not(feature = "ole"))]
fn probe_container<R: Read + Seek>(_input: &mut R) -> bool {
    false
}
