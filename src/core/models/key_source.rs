use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};

/// Raw armored key bytes behind an open file handle.
///
/// Remote keys are spooled into a temp file that is unlinked at creation,
/// so nothing is left on disk once the source is dropped. Consumers call
/// [`KeySource::rewind`] before reading.
#[derive(Debug)]
pub struct KeySource {
    file: File,
}

impl KeySource {
    /// Wrap an already-open file, positioned wherever the caller left it.
    pub fn from_file(file: File) -> Self {
        Self { file }
    }

    /// Copy `reader` into a fresh anonymous temp file and rewind it.
    #[cfg(test)]
    pub(crate) fn spool(reader: &mut impl Read) -> io::Result<Self> {
        let mut file = tempfile::tempfile()?;
        io::copy(reader, &mut file)?;
        file.flush()?;
        let mut source = Self { file };
        source.rewind()?;
        Ok(source)
    }

    /// Anonymous temp file that is filled incrementally by the caller.
    pub(crate) fn anonymous() -> io::Result<Self> {
        Ok(Self {
            file: tempfile::tempfile()?,
        })
    }

    /// Reset the read position to the first byte.
    pub fn rewind(&mut self) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}

impl Read for KeySource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for KeySource {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Seek for KeySource {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spool_starts_at_offset_zero() {
        let mut source = KeySource::spool(&mut &b"armored"[..]).unwrap();
        let mut out = String::new();
        source.read_to_string(&mut out).unwrap();
        assert_eq!(out, "armored");
    }

    #[test]
    fn rewind_allows_repeated_reads() {
        let mut source = KeySource::spool(&mut &b"key bytes"[..]).unwrap();

        for _ in 0..3 {
            let mut out = Vec::new();
            source.read_to_end(&mut out).unwrap();
            assert_eq!(out, b"key bytes");
            source.rewind().unwrap();
        }
    }

    #[test]
    fn anonymous_file_has_no_directory_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = tempfile::tempfile_in(dir.path()).unwrap();
        file.write_all(b"data").unwrap();
        let _source = KeySource::from_file(file);

        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 0);
    }
}
