use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::{RingMap, WriteRings};
use crate::Error;

/// Writes the text format described in [`crate::io`]. Never overwrites an
/// existing file. If writing fails partway the new file is removed again, so
/// the same path can be retried.
#[derive(Debug, Clone, Copy, Default)]
pub struct Writer;

impl WriteRings for Writer {
  fn write(&self, path: &Path, rings: &RingMap) -> Result<(), Error> {
    let file = OpenOptions::new()
      .write(true)
      .create_new(true)
      .open(path)
      .map_err(|source| match source.kind() {
        io::ErrorKind::AlreadyExists => Error::AlreadyExists {
          path: path.to_path_buf(),
        },
        _ => Error::Io {
          path: path.to_path_buf(),
          source,
        },
      })?;

    if let Err(source) = write_rings(BufWriter::new(file), rings) {
      return Err(discard(path, source));
    }
    debug!(path = %path.display(), rings = rings.len(), "wrote rings");
    Ok(())
  }
}

fn write_rings<W: Write>(mut out: W, rings: &RingMap) -> io::Result<()> {
  for (name, ring) in rings.iter() {
    writeln!(out, "{}", name)?;
    for pt in ring {
      writeln!(out, "{},{},{}", pt.x(), pt.y(), pt.id())?;
    }
  }
  out.flush()
}

// Remove a partially written file and report the write failure.
fn discard(path: &Path, source: io::Error) -> Error {
  if let Err(err) = fs::remove_file(path) {
    warn!(path = %path.display(), %err, "could not remove partial ring file");
  }
  Error::Io {
    path: path.to_path_buf(),
    source,
  }
}
