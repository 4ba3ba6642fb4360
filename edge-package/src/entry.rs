//! A single file record read from a package archive.

use std::io::{self, Read};

/// One entry of the archive stream.
///
/// The tar stream is strictly sequential: an entry must be finished before
/// the next one is requested. [`ArchiveEntry::skip_rest`] reads whatever
/// content was not consumed, and [`ArchiveEntry::close`] checks that the
/// entry delivered its declared size so the decoder sits on the next header.
/// Dropping the entry releases it, which is also what happens on
/// early-return paths.
pub struct ArchiveEntry<'a, R: Read + 'a> {
    name: String,
    is_dir: bool,
    consumed: u64,
    inner: tar::Entry<'a, R>,
}

impl<'a, R: Read + 'a> ArchiveEntry<'a, R> {
    pub fn new(inner: tar::Entry<'a, R>) -> Self {
        let name = file_name(&inner.path_bytes());
        let is_dir = inner.header().entry_type().is_dir();
        Self {
            name,
            is_dir,
            consumed: 0,
            inner,
        }
    }

    /// Final component of the entry path, e.g. `main.wasm` for
    /// `my-service/bin/main.wasm`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Declared content size in bytes.
    pub fn size(&self) -> u64 {
        self.inner.size()
    }

    /// Read and discard the rest of the entry's content. Returns the number
    /// of bytes that were still unread.
    pub fn skip_rest(&mut self) -> io::Result<u64> {
        io::copy(self, &mut io::sink())
    }

    /// Finish the entry. Fails if the archive ended before the entry's
    /// declared size was delivered.
    pub fn close(&mut self) -> io::Result<()> {
        let size = self.size();
        if self.consumed < size {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("entry ended after {} of {} bytes", self.consumed, size),
            ));
        }
        Ok(())
    }
}

impl<'a, R: Read + 'a> Read for ArchiveEntry<'a, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.consumed += n as u64;
        Ok(n)
    }
}

fn file_name(path: &[u8]) -> String {
    let trimmed = match path.iter().rposition(|b| *b != b'/') {
        Some(last) => &path[..=last],
        None => &[][..],
    };
    let start = trimmed
        .iter()
        .rposition(|b| *b == b'/')
        .map_or(0, |pos| pos + 1);
    String::from_utf8_lossy(&trimmed[start..]).into_owned()
}
