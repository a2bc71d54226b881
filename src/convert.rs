//! Content extraction and markdown assembly

use crate::error::Result;
use crate::types::{ConversionResult, StreamInfo};
use std::io::{Read, Seek};

#[cfg(feature = "ole")]
use crate::container::MsgContainer;
#[cfg(feature = "ole")]
use crate::decode::{decode_html_body, decode_stream};
#[cfg(feature = "ole")]
use std::fmt::Write;
#[cfg(feature = "ole")]
use tracing::{debug, trace};

/// Sender display name (`PidTagSenderName`)
pub const SENDER_NAME_STREAM: &str = "__substg1.0_0C1A001F";

/// Sender SMTP address (`PidTagSenderSmtpAddress`)
pub const SENDER_ADDRESS_STREAM: &str = "__substg1.0_5D01001F";

/// Display-To recipient list (`PidTagDisplayTo`)
pub const RECIPIENT_STREAM: &str = "__substg1.0_0E04001F";

/// Message subject (`PidTagSubject`)
pub const SUBJECT_STREAM: &str = "__substg1.0_0037001F";

/// Plain-text body (`PidTagBody`)
pub const BODY_TEXT_STREAM: &str = "__substg1.0_1000001F";

/// HTML body, raw bytes (`PidTagHtml`; the `0102` suffix marks a binary
/// property, so this stream bypasses the field decoder)
pub const BODY_HTML_STREAM: &str = "__substg1.0_10130102";

/// Convert an Outlook message into a markdown document.
///
/// The container handle lives for exactly this call and is released on
/// every exit path. Fields that are missing or undecodable are skipped;
/// only an input that does not open as a compound document at all makes
/// the conversion fail.
#[cfg(feature = "ole")]
pub fn convert<R: Read + Seek>(input: R, _info: &StreamInfo) -> Result<ConversionResult> {
    let mut container = MsgContainer::open(input)?;

    let headers = extract_headers(&mut container);
    let content = extract_content(&mut container);

    debug!("converted message, subject: {:?}", headers.subject);

    Ok(assemble(&headers, &content))
}

/// Stub without compound-document support: fails fast before touching
/// the input, since no meaningful partial result is possible.
#[cfg(not(feature = "ole"))]
pub fn convert<R: Read + Seek>(_input: R, _info: &StreamInfo) -> Result<ConversionResult> {
    Err(crate::error::ConvertError::MissingCapability {
        feature: "ole",
        format: crate::detect::MSG_EXTENSION,
    })
}

/// The fixed header set, in rendering order
#[cfg(feature = "ole")]
struct MessageHeaders {
    from: Option<String>,
    to: Option<String>,
    subject: Option<String>,
}

#[cfg(feature = "ole")]
impl MessageHeaders {
    /// Present, non-empty headers with their labels, in the fixed
    /// From/To/Subject order
    fn rendered(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("From", self.from.as_deref()),
            ("To", self.to.as_deref()),
            ("Subject", self.subject.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| match value {
            Some(value) if !value.is_empty() => Some((label, value)),
            _ => None,
        })
    }
}

#[cfg(feature = "ole")]
fn extract_headers<R: Read + Seek>(container: &mut MsgContainer<R>) -> MessageHeaders {
    // O365 spreads the sender identity across two streams; the composed
    // form is "Name <address>" with a missing half left blank.
    let sender_name = decode_stream(container, SENDER_NAME_STREAM);
    let sender_address = decode_stream(container, SENDER_ADDRESS_STREAM);
    let from = match (&sender_name, &sender_address) {
        (None, None) => None,
        (name, address) => Some(
            format!(
                "{} <{}>",
                name.as_deref().unwrap_or_default(),
                address.as_deref().unwrap_or_default()
            )
            .trim()
            .to_string(),
        ),
    };

    MessageHeaders {
        from,
        to: decode_stream(container, RECIPIENT_STREAM),
        subject: decode_stream(container, SUBJECT_STREAM),
    }
}

#[cfg(feature = "ole")]
fn extract_content<R: Read + Seek>(container: &mut MsgContainer<R>) -> String {
    // Plain text wins outright; the HTML stream is only consulted when
    // the plain body is missing or empty.
    if let Some(text) = decode_stream(container, BODY_TEXT_STREAM)
        && !text.is_empty()
    {
        return text;
    }

    if container.exists(BODY_HTML_STREAM) {
        match container.read_stream(BODY_HTML_STREAM) {
            Ok(raw) => return decode_html_body(&raw),
            Err(err) => trace!("unreadable HTML body stream: {err}"),
        }
    }

    String::new()
}

#[cfg(feature = "ole")]
fn assemble(headers: &MessageHeaders, content: &str) -> ConversionResult {
    let mut markdown = String::from("# Email Message\n\n");

    for (label, value) in headers.rendered() {
        let _ = writeln!(markdown, "**{label}:** {value}");
    }

    markdown.push_str("\n## Content\n\n");
    markdown.push_str(content);

    ConversionResult {
        markdown: markdown.trim().to_string(),
        title: headers.subject.clone(),
    }
}
