//! Thin facade over the OLE compound-document parser.
//!
//! The extractor only needs a directory listing, an existence check and
//! read-stream-to-bytes; everything else `cfb` offers stays behind this
//! module. Only compiled with the `ole` feature.

use std::io::{Read, Seek, SeekFrom};

/// OLE compound-document magic signature
const OLE_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Check whether the input begins with the OLE magic signature.
///
/// Reads from offset zero and leaves the cursor wherever the read
/// ended; callers needing position neutrality restore it themselves.
pub(crate) fn is_compound_file<R: Read + Seek>(input: &mut R) -> bool {
    if input.seek(SeekFrom::Start(0)).is_err() {
        return false;
    }
    let mut magic = [0u8; 8];
    input.read_exact(&mut magic).is_ok() && magic == OLE_MAGIC
}

/// An opened compound-document message.
///
/// The underlying handle is released when the value drops, on every
/// exit path of the extraction.
pub(crate) struct MsgContainer<R: Read + Seek> {
    inner: cfb::CompoundFile<R>,
}

impl<R: Read + Seek> MsgContainer<R> {
    pub(crate) fn open(input: R) -> std::io::Result<Self> {
        Ok(Self {
            inner: cfb::CompoundFile::open(input)?,
        })
    }

    /// All entry paths (storages and streams) joined into one
    /// newline-separated blob for substring fingerprinting.
    pub(crate) fn directory_blob(&self) -> String {
        self.inner
            .walk()
            .map(|entry| entry.path().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn exists(&self, path: &str) -> bool {
        self.inner.exists(path)
    }

    /// Read a named stream fully into memory.
    pub(crate) fn read_stream(&mut self, path: &str) -> std::io::Result<Vec<u8>> {
        let mut stream = self.inner.open_stream(path)?;
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
