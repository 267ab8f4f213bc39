mod duplicates {
  use ringmesh::data::*;
  use ringmesh::io::*;
  use ringmesh::*;

  use std::fs;
  use std::path::{Path, PathBuf};

  fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
      .join("tests")
      .join("data")
      .join(name)
  }

  // Drop every ring equal to an earlier ring that was kept. Equality is
  // rotation invariant but not direction invariant, so a reversed copy stays.
  fn remove_duplicates(rings: &mut RingMap) {
    let mut kept: Vec<Ring> = Vec::new();
    rings.retain(|_, ring| {
      if kept.iter().any(|other| other == ring) {
        false
      } else {
        kept.push(ring.clone());
        true
      }
    });
  }

  #[test]
  fn ring_removal() -> Result<(), Error> {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");

    let mut rings = Reader.read(&data("rings_with_duplicates.txt"))?;
    assert_eq!(rings.len(), 6);
    for (_, ring) in rings.iter_mut() {
      ring.close();
    }
    remove_duplicates(&mut rings);
    assert_eq!(
      rings.names().collect::<Vec<_>>(),
      vec!["square", "triangle", "square_reversed", "bowtie"]
    );
    Writer.write(&output, &rings)?;

    let expected = fs::read_to_string(data("rings_without_duplicates.txt")).unwrap();
    let actual = fs::read_to_string(&output).unwrap();
    assert_eq!(actual.lines().collect::<Vec<_>>(), expected.lines().collect::<Vec<_>>());
    Ok(())
  }

  #[test]
  fn reversed_duplicate_after_reorientation() -> Result<(), Error> {
    let mut rings = Reader.read(&data("rings_with_duplicates.txt"))?;
    for (_, ring) in rings.iter_mut() {
      ring.close();
      if ring.orientation() == Some(Orientation::ClockWise) {
        ring.reverse_orientation();
      }
    }
    remove_duplicates(&mut rings);
    assert_eq!(
      rings.names().collect::<Vec<_>>(),
      vec!["square", "triangle", "bowtie"]
    );
    Ok(())
  }

  #[test]
  fn bowtie_splits_in_two() -> Result<(), Error> {
    let mut rings = Reader.read(&data("rings_with_duplicates.txt"))?;
    let bowtie = rings.get_mut("bowtie").unwrap();
    bowtie.close();
    assert_eq!(bowtie.find_self_intersections().len(), 1);
    let pieces = bowtie.split_ring()?;
    assert_eq!(pieces.len(), 2);
    let total: f64 = pieces.iter().filter_map(Ring::area).sum();
    assert!((total - bowtie.area().unwrap()).abs() < TOL);
    Ok(())
  }
}
