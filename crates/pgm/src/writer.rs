//! Write operations for 3D PGM volumes

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::builder::PgmWriterBuilder;
use crate::error::Result;
use crate::header::{FormatCode, Header, MAX_VALUE};
use crate::volume::{Spacing, Volume};

// external crates
use log::debug;

/// Write a [Volume] to a 3D PGM file
///
/// Uses the default [PgmWriter], producing the header
///
/// ```text
/// P7
/// #xdim 1
/// #ydim 1
/// #zdim 1
/// DATASET STRUCTURED_POINTS
/// NX NY NZ
/// 255
/// ```
///
/// followed by the raw samples in column-major order. The voxel spacing lines
/// are taken from the volume, which is unit spacing unless set otherwise.
///
/// ```rust, no_run
/// # use voltools_pgm::{write_pgm, Dimensions, Volume};
/// let volume = Volume::zeros(Dimensions::new(61, 53, 12)).unwrap();
/// write_pgm("./volume.pgm", &volume).unwrap();
/// ```
pub fn write_pgm<P: AsRef<Path>>(path: P, volume: &Volume) -> Result<()> {
    PgmWriter::default().write(path, volume)
}

/// Configurable writer for 3D PGM files
///
/// The fields are public for direct use, but a builder is also implemented
/// for chained configuration.
///
/// ```rust, no_run
/// # use voltools_pgm::{Dimensions, FormatCode, PgmWriter, Volume};
/// // Canonical Pink layout, without the DATASET line
/// let writer = PgmWriter::builder()
///     .format_code(FormatCode::P5)
///     .dataset(None)
///     .build();
///
/// let volume = Volume::zeros(Dimensions::new(8, 8, 8)).unwrap();
/// writer.write("./volume.pgm", &volume).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PgmWriter {
    /// Magic number for the first line
    pub format: FormatCode,
    /// Spacing to write instead of the spacing of the volume
    pub spacing: Option<Spacing>,
    /// Dataset type for the optional `DATASET` line
    pub dataset: Option<String>,
}

impl PgmWriter {
    /// Start with the default configuration
    pub fn new() -> PgmWriter {
        Default::default()
    }

    /// Get an instance of the [PgmWriterBuilder]
    pub fn builder() -> PgmWriterBuilder {
        PgmWriterBuilder::default()
    }

    /// The header that would be written for `volume`
    pub fn header(&self, volume: &Volume) -> Header {
        Header {
            format: self.format.clone(),
            spacing: self.spacing.unwrap_or(volume.spacing),
            dataset: self.dataset.clone(),
            dimensions: volume.dimensions(),
            max_value: MAX_VALUE,
        }
    }

    /// Write the header and samples of `volume` to `path`
    pub fn write<P: AsRef<Path>>(&self, path: P, volume: &Volume) -> Result<()> {
        let mut writer = init_writer(path)?;

        let header = self.header(volume);
        header.write_to(&mut writer)?;
        writer.write_all(volume.as_slice())?;
        writer.flush()?;

        debug!(
            "Wrote {} samples ({})",
            volume.number_of_voxels(),
            header.dimensions
        );
        Ok(())
    }
}

impl Default for PgmWriter {
    fn default() -> Self {
        PgmWriterBuilder::default().build()
    }
}

/// Initialise a buffered writer from anything that can be turned into a path
pub(crate) fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
