// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Outlook Message Extractor
//!
//! Converts Outlook `.msg` compound-document messages into markdown:
//! email headers (From, To, Subject) followed by the body content.
//!
//! # Features
//!
//! - Cheap format detection: declared extension and media type first,
//!   OLE directory fingerprinting only as a last resort
//! - Layered stream decoding (UTF-16LE, UTF-8, lossy UTF-8) for fields
//!   with unreliable encoding metadata
//! - Content-sniffed fallback for HTML bodies whose bytes decode
//!   "cleanly" under the wrong encoding
//! - Best-effort extraction: a missing or corrupt field reduces the
//!   output, it never aborts the conversion
//!
//! # Example
//!
//! ```no_run
//! use msg_extract::{accepts, convert, StreamInfo};
//! use std::io::Cursor;
//!
//! let bytes = std::fs::read("message.msg").unwrap();
//! let info = StreamInfo::with_extension(".msg");
//!
//! let mut input = Cursor::new(bytes);
//! if accepts(&mut input, &info) {
//!     let result = convert(input, &info).unwrap();
//!     println!("{}", result.markdown);
//! }
//! ```

#[cfg(feature = "ole")]
mod container;
mod convert;
#[cfg(feature = "ole")]
mod decode;
mod detect;
mod error;
mod types;

pub use convert::{
    BODY_HTML_STREAM, BODY_TEXT_STREAM, RECIPIENT_STREAM, SENDER_ADDRESS_STREAM,
    SENDER_NAME_STREAM, SUBJECT_STREAM, convert,
};
pub use detect::{
    MSG_EXTENSION, MSG_MIME_PREFIX, PROPERTIES_MARKER, RECIPIENT_TABLE_MARKER, accepts,
};
pub use error::{ConvertError, Result};
pub use types::{ConversionResult, StreamInfo};
