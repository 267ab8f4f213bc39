use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use super::{ReadRings, RingMap};
use crate::data::{Point, Ring};
use crate::Error;

/// Reads the text format described in [`crate::io`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Reader;

impl ReadRings for Reader {
  /// A line with a single token starts a new ring; a repeated name replaces the
  /// earlier ring. A line `x,y,id` adds a point to the current ring. Blank
  /// lines are skipped.
  fn read(&self, path: &Path) -> Result<RingMap, Error> {
    let file = File::open(path).map_err(|source| match source.kind() {
      io::ErrorKind::NotFound => Error::NotFound {
        path: path.to_path_buf(),
      },
      _ => Error::Io {
        path: path.to_path_buf(),
        source,
      },
    })?;

    let mut rings = RingMap::new();
    let mut current: Option<String> = None;
    for (nth, line) in BufReader::new(file).lines().enumerate() {
      let line = line.map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
      })?;
      let parse_err = |reason: String| Error::Parse {
        path: path.to_path_buf(),
        line: nth + 1,
        reason,
      };
      let line = line.trim_end();
      if line.is_empty() {
        continue;
      }
      let tokens: Vec<&str> = line.split(',').collect();
      match tokens.as_slice() {
        [name] => {
          rings.insert(*name, Ring::new());
          current = Some(name.to_string());
        }
        [x, y, id] => {
          let point = parse_point(x, y, id).map_err(&parse_err)?;
          let ring = current
            .as_deref()
            .and_then(|name| rings.get_mut(name))
            .ok_or_else(|| parse_err("point before any ring name".to_string()))?;
          ring.add_point(point)?;
        }
        _ => {
          return Err(parse_err(format!(
            "expected a ring name or x,y,id but found {} fields",
            tokens.len()
          )));
        }
      }
    }
    debug!(path = %path.display(), rings = rings.len(), "read rings");
    Ok(rings)
  }
}

fn parse_point(x: &str, y: &str, id: &str) -> Result<Point, String> {
  Ok(Point::new(field(x, "x")?, field(y, "y")?, field(id, "id")?))
}

fn field<T: FromStr>(token: &str, what: &str) -> Result<T, String>
where
  T::Err: std::fmt::Display,
{
  token
    .trim()
    .parse()
    .map_err(|err| format!("invalid {} {:?}: {}", what, token, err))
}
