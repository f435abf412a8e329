//! Named pipe used to receive query results from a session.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::Result;

/// A FIFO inside a private temporary directory.
///
/// The directory, and the pipe with it, is removed on drop.
pub struct Fifo {
    _dir: TempDir,
    path: PathBuf,
}

impl Fifo {
    /// Create a new FIFO readable and writable by the current user only.
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("kks-").tempdir()?;
        let path = dir.path().join("fifo");
        make_fifo(&path)?;
        tracing::debug!(path = %path.display(), "created fifo");
        Ok(Self { _dir: dir, path })
    }

    /// Path of the pipe.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Block until a writer opens the pipe, then read everything it writes.
    pub fn read_to_end(&self) -> Result<Vec<u8>> {
        Ok(std::fs::read(&self.path)?)
    }
}

#[cfg(unix)]
fn make_fifo(path: &Path) -> std::io::Result<()> {
    use nix::sys::stat::Mode;
    use nix::unistd::mkfifo;

    mkfifo(path, Mode::S_IRUSR | Mode::S_IWUSR).map_err(std::io::Error::from)
}

#[cfg(not(unix))]
fn make_fifo(_path: &Path) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "named pipes require a unix platform",
    ))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::io::Write;
    use std::os::unix::fs::FileTypeExt;

    #[test]
    fn creates_a_pipe() {
        let fifo = Fifo::create().unwrap();
        let meta = std::fs::metadata(fifo.path()).unwrap();
        assert!(meta.file_type().is_fifo());
    }

    #[test]
    fn removed_on_drop() {
        let fifo = Fifo::create().unwrap();
        let path = fifo.path().to_path_buf();
        drop(fifo);
        assert!(!path.exists());
    }

    #[test]
    fn reads_what_a_writer_sends() {
        let fifo = Fifo::create().unwrap();
        let path = fifo.path().to_path_buf();
        let writer = std::thread::spawn(move || {
            let mut file = std::fs::OpenOptions::new().write(true).open(path).unwrap();
            file.write_all(b"'a' 'b'").unwrap();
        });
        let content = fifo.read_to_end().unwrap();
        writer.join().unwrap();
        assert_eq!(content, b"'a' 'b'");
    }
}
