//! Integration tests for raw exchange and text outputs

use rstest::{fixture, rstest};
use tempfile::TempDir;
use voltools_pgm::{
    read_pgm, read_raw, write_ascii_pretty, write_json, write_pgm, write_raw, Dimensions, Error,
    RawOptions, Spacing, Volume,
};

#[fixture]
fn scratch() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[fixture]
fn volume() -> Volume {
    Volume::from_fn(Dimensions::new(4, 3, 2), |x, y, z| (x + 4 * y + 12 * z) as u8).unwrap()
}

#[rstest]
fn raw_round_trip(scratch: TempDir, volume: Volume) {
    let path = scratch.path().join("volume.raw");
    write_raw(&path, &volume).unwrap();

    // nothing but the samples
    assert_eq!(std::fs::read(&path).unwrap(), volume.as_slice());

    let options = RawOptions::new(volume.dimensions());
    assert_eq!(read_raw(&path, &options).unwrap(), volume);
}

#[rstest]
fn raw_from_pgm(scratch: TempDir, volume: Volume) {
    // the pgm header is just a header of known size to a raw reader
    let path = scratch.path().join("volume.pgm");
    write_pgm(&path, &volume).unwrap();
    let header_size = std::fs::metadata(&path).unwrap().len() as usize - 24;

    let options = RawOptions::new(Dimensions::new(4, 3, 2))
        .header_size(header_size)
        .spacing(Spacing::new(2.0, 2.0, 5.0));
    let raw = read_raw(&path, &options).unwrap();

    assert_eq!(raw.as_slice(), volume.as_slice());
    assert_eq!(raw.spacing, Spacing::new(2.0, 2.0, 5.0));
}

#[rstest]
fn raw_with_trailing_bytes(scratch: TempDir) {
    let path = scratch.path().join("padded.raw");
    std::fs::write(&path, [9u8, 9, 1, 2, 3, 4, 0, 0]).unwrap();

    let options = RawOptions::new(Dimensions::new(2, 2, 1)).header_size(2);
    let volume = read_raw(&path, &options).unwrap();
    assert_eq!(volume.as_slice(), &[1, 2, 3, 4]);
}

#[rstest]
fn raw_with_long_tail(scratch: TempDir) {
    let path = scratch.path().join("tail.raw");
    let mut bytes = vec![7u8; 6];
    bytes.extend(std::iter::repeat(0u8).take(64 * 1024));
    std::fs::write(&path, &bytes).unwrap();

    let options = RawOptions::new(Dimensions::new(3, 2, 1));
    let volume = read_raw(&path, &options).unwrap();
    assert_eq!(volume.as_slice(), &[7; 6]);
}

#[rstest]
#[case(Dimensions::new(usize::MAX, 2, 1))]
#[case(Dimensions::new(2, usize::MAX, usize::MAX))]
fn raw_with_overflowing_dimensions(scratch: TempDir, #[case] dimensions: Dimensions) {
    let path = scratch.path().join("small.raw");
    std::fs::write(&path, [1u8, 2, 3, 4]).unwrap();

    match read_raw(&path, &RawOptions::new(dimensions)) {
        Err(Error::InvalidDimensions(found)) => assert_eq!(found, dimensions.to_string()),
        other => panic!("expected invalid dimensions, found {other:?}"),
    }
}

#[rstest]
#[case(0, 5)] // no header
#[case(2, 3)] // header eats into the samples
#[case(10, 0)] // header longer than the file
fn raw_too_short(scratch: TempDir, #[case] header_size: usize, #[case] found: usize) {
    let path = scratch.path().join("short.raw");
    std::fs::write(&path, [1u8, 2, 3, 4, 5]).unwrap();

    let options = RawOptions::new(Dimensions::new(2, 2, 2)).header_size(header_size);
    match read_raw(&path, &options) {
        Err(Error::UnexpectedByteLength {
            expected,
            found: f,
        }) => {
            assert_eq!(expected, 8);
            assert_eq!(f, found);
        }
        other => panic!("expected a size mismatch, found {other:?}"),
    }
}

#[rstest]
fn raw_to_pgm_conversion(scratch: TempDir, volume: Volume) {
    let raw_path = scratch.path().join("volume.raw");
    let pgm_path = scratch.path().join("volume.pgm");
    write_raw(&raw_path, &volume).unwrap();

    let raw = read_raw(&raw_path, &RawOptions::new(volume.dimensions())).unwrap();
    write_pgm(&pgm_path, &raw).unwrap();

    assert_eq!(read_pgm(&pgm_path).unwrap(), Some(volume));
}

#[rstest]
fn json_output(scratch: TempDir) {
    let path = scratch.path().join("volume.json");
    let volume = Volume::new(Dimensions::new(2, 1, 1), vec![10, 20])
        .unwrap()
        .with_spacing(Spacing::new(0.5, 1.0, 1.0));
    write_json(&path, &volume).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "dimensions": { "nx": 2, "ny": 1, "nz": 1 },
            "spacing": { "x": 0.5, "y": 1.0, "z": 1.0 },
            "samples": [10, 20]
        })
    );
}

#[rstest]
fn pretty_output(scratch: TempDir, volume: Volume) {
    let path = scratch.path().join("volume.txt");
    write_ascii_pretty(&path, &volume).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Total voxels: 24\n"));
    assert!(text.contains("Value range: 0 - 23\n"));
    assert!(text.contains("\nSlice z[0]:\n  y[0]:\n    0 1 2 3\n"));
    assert!(text.contains("\nSlice z[1]:\n  y[0]:\n    12 13 14 15\n  y[1]:\n    16 17 18 19\n"));
}

#[rstest]
fn pretty_output_wraps_long_rows(scratch: TempDir) {
    let path = scratch.path().join("wide.txt");
    let volume = Volume::from_fn(Dimensions::new(60, 1, 1), |_, _, _| 200).unwrap();
    write_ascii_pretty(&path, &volume).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let rows: Vec<&str> = text
        .lines()
        .skip_while(|line| !line.starts_with("  y[0]:"))
        .skip(1)
        .collect();

    assert!(rows.len() > 1);
    assert!(rows.iter().all(|row| row.len() <= 80));
    assert_eq!(rows.iter().flat_map(|row| row.split_whitespace()).count(), 60);
}

#[rstest]
fn pretty_output_of_empty_volume(scratch: TempDir) {
    let path = scratch.path().join("empty.txt");
    write_ascii_pretty(&path, &Volume::zeros(Dimensions::new(3, 0, 2)).unwrap()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("Value range: empty\n"));
    assert!(!text.contains("Slice"));
}
