//! Exchange of headerless raw sample files
//!
//! Plenty of tools only deal in raw voxel data. These strip the PGM header on
//! the way out and attach known dimensions on the way in.

// standard library
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::volume::{Dimensions, Spacing, Volume};
use crate::writer::init_writer;

// external crates
use log::{debug, warn};

/// Options for interpreting a raw file
///
/// Raw files carry no metadata, so the dimensions must be known up front.
/// Some raw formats start with a header of their own, the content of which is
/// skipped.
///
/// ```rust
/// # use voltools_pgm::{Dimensions, RawOptions, Spacing};
/// let options = RawOptions::new(Dimensions::new(61, 53, 12))
///     .header_size(512)
///     .spacing(Spacing::new(0.5, 0.5, 1.0));
///
/// assert_eq!(options.header_size, 512);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RawOptions {
    /// Number of voxels along each axis
    pub dimensions: Dimensions,
    /// Number of leading bytes to skip
    pub header_size: usize,
    /// Voxel spacing to attach to the volume
    pub spacing: Spacing,
}

impl RawOptions {
    /// Options for a raw file with no header and unit spacing
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            header_size: 0,
            spacing: Spacing::default(),
        }
    }

    /// Set the number of leading bytes to skip
    pub fn header_size(mut self, header_size: usize) -> Self {
        self.header_size = header_size;
        self
    }

    /// Set the voxel spacing
    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }
}

/// Read a volume from a raw file of unsigned 8-bit samples
///
/// Samples are expected in column-major order after `header_size` bytes.
/// Fewer samples than the dimensions require is an error, and any trailing
/// bytes are ignored.
///
/// ```rust, no_run
/// # use voltools_pgm::{read_raw, Dimensions, RawOptions};
/// let options = RawOptions::new(Dimensions::new(61, 53, 12));
/// let volume = read_raw("./volume.raw", &options).unwrap();
/// ```
pub fn read_raw<P: AsRef<Path>>(path: P, options: &RawOptions) -> Result<Volume> {
    let mut reader = BufReader::new(File::open(path)?);

    let skipped = io::copy(
        &mut reader.by_ref().take(options.header_size as u64),
        &mut io::sink(),
    )?;
    if skipped < options.header_size as u64 {
        warn!(
            "Raw file is shorter than the {} byte header",
            options.header_size
        );
    }

    let expected = options
        .dimensions
        .checked_number_of_voxels()
        .ok_or_else(|| Error::InvalidDimensions(options.dimensions.to_string()))?;

    // one extra byte is enough to know there is trailing data
    let mut data = Vec::new();
    let limit = (expected as u64).saturating_add(1);
    reader.take(limit).read_to_end(&mut data)?;

    if data.len() < expected {
        return Err(Error::UnexpectedByteLength {
            expected,
            found: data.len(),
        });
    }

    if data.len() > expected {
        warn!("Ignoring trailing bytes after {} samples", expected);
        data.truncate(expected);
    }

    debug!("Read {} raw samples ({})", expected, options.dimensions);
    Ok(Volume::new(options.dimensions, data)?.with_spacing(options.spacing))
}

/// Write only the samples of a volume, without any header
///
/// Samples are written in column-major order, exactly as they would follow
/// the header of a PGM file.
///
/// ```rust, no_run
/// # use voltools_pgm::{read_pgm, write_raw};
/// let volume = read_pgm("./volume.pgm").unwrap().unwrap();
/// write_raw("./volume.raw", &volume).unwrap();
/// ```
pub fn write_raw<P: AsRef<Path>>(path: P, volume: &Volume) -> Result<()> {
    let mut writer = init_writer(path)?;
    writer.write_all(volume.as_slice())?;
    writer.flush()?;

    debug!(
        "Wrote {} raw samples ({})",
        volume.number_of_voxels(),
        volume.dimensions()
    );
    Ok(())
}
