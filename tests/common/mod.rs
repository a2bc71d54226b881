#![allow(dead_code)]

//! Shared fixtures: in-memory compound files shaped like Outlook messages

use std::io::{Cursor, Write};

/// Encode text as the UTF-16LE bytes Outlook writes to string streams,
/// including the trailing terminator.
pub fn utf16le(text: &str) -> Vec<u8> {
    text.chars()
        .chain(std::iter::once('\u{0}'))
        .collect::<String>()
        .encode_utf16()
        .flat_map(u16::to_le_bytes)
        .collect()
}

/// Build an in-memory compound file containing the given root streams.
/// With `with_markers` set, the standard properties stream and the
/// recipient table storage are created alongside them, the way Outlook
/// lays out a real message.
pub fn compound_file(streams: &[(&str, &[u8])], with_markers: bool) -> Vec<u8> {
    let mut comp = cfb::CompoundFile::create(Cursor::new(Vec::new())).unwrap();

    if with_markers {
        let mut properties = comp.create_stream("/__properties_version1.0").unwrap();
        properties.write_all(&[0u8; 32]).unwrap();
        drop(properties);

        comp.create_storage("/__recip_version1.0_#00000000").unwrap();
        let mut recipient = comp
            .create_stream("/__recip_version1.0_#00000000/__substg1.0_3001001F")
            .unwrap();
        recipient.write_all(&utf16le("recipient")).unwrap();
        drop(recipient);
    }

    for (name, bytes) in streams {
        let mut stream = comp.create_stream(format!("/{name}")).unwrap();
        stream.write_all(bytes).unwrap();
    }

    comp.flush().unwrap();
    comp.into_inner().into_inner()
}
