#![cfg(feature = "ole")]

mod common;

use msg_extract::{StreamInfo, accepts};
use std::io::{Cursor, Seek, SeekFrom};

#[test]
fn accepts_by_extension_regardless_of_content() {
    let mut input = Cursor::new(b"definitely not a compound file".to_vec());

    assert!(accepts(&mut input, &StreamInfo::with_extension(".msg")));
    assert!(accepts(&mut input, &StreamInfo::with_extension(".MSG")));
}

#[test]
fn accepts_by_mimetype_prefix() {
    let mut input = Cursor::new(Vec::new());

    assert!(accepts(
        &mut input,
        &StreamInfo::with_mimetype("application/vnd.ms-outlook"),
    ));
    assert!(accepts(
        &mut input,
        &StreamInfo::with_mimetype("APPLICATION/VND.MS-OUTLOOK; extra=params"),
    ));
}

#[test]
fn accepts_marked_container_despite_wrong_metadata() {
    let bytes = common::compound_file(&[], true);
    let mut input = Cursor::new(bytes);

    assert!(accepts(&mut input, &StreamInfo::new(".txt", "text/plain")));
    assert_eq!(input.stream_position().unwrap(), 0);
}

#[test]
fn rejects_container_without_markers() {
    let bytes = common::compound_file(&[], false);
    let mut input = Cursor::new(bytes);

    assert!(!accepts(&mut input, &StreamInfo::default()));
    assert_eq!(input.stream_position().unwrap(), 0);
}

#[test]
fn rejects_non_container_and_restores_cursor() {
    let mut input = Cursor::new(b"plain text, nothing like OLE".to_vec());
    input.seek(SeekFrom::Start(5)).unwrap();

    assert!(!accepts(&mut input, &StreamInfo::default()));
    assert_eq!(input.stream_position().unwrap(), 5);
}

#[test]
fn rejects_wrong_extension_and_mimetype() {
    let mut input = Cursor::new(b"GIF89a".to_vec());

    assert!(!accepts(&mut input, &StreamInfo::new(".gif", "image/gif")));
}
