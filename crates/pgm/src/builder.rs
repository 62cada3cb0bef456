// internal modules
use crate::header::{FormatCode, STRUCTURED_POINTS};
use crate::volume::Spacing;
use crate::writer::PgmWriter;

/// Builder implementation for PgmWriter configuration
///
/// The fields of [PgmWriter] are left public for direct use but the module
/// also implements a builder.
///
/// The builder allows for chained setter calls, and any number of parameters
/// can be set this way (including none).
///
/// To get the final [PgmWriter] from the builder, call
/// [build()](PgmWriterBuilder::build).
///
/// ```rust
/// # use voltools_pgm::{FormatCode, PgmWriter, Spacing};
/// let writer = PgmWriter::builder()
///     .format_code(FormatCode::P5)
///     .spacing(Spacing::new(0.5, 0.5, 2.0))
///     .dataset(None)
///     .build();
///
/// assert_eq!(writer.format, FormatCode::P5);
/// assert_eq!(writer.dataset, None);
/// ```
#[derive(Debug)]
pub struct PgmWriterBuilder {
    /// Magic number for the first line
    format: FormatCode,
    /// Spacing override
    spacing: Option<Spacing>,
    /// Dataset type line
    dataset: Option<String>,
}

impl PgmWriterBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [PgmWriter] type
    pub fn build(self) -> PgmWriter {
        PgmWriter {
            format: self.format,
            spacing: self.spacing,
            dataset: self.dataset,
        }
    }

    /// Set the format code written on the first line
    ///
    /// Pink tools write `P5`, the default here is `P7`. Both are read as
    /// unsigned char volumes.
    pub fn format_code(mut self, format: FormatCode) -> Self {
        self.format = format;
        self
    }

    /// Write this spacing regardless of the spacing stored on the volume
    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Set the dataset type, or `None` to leave out the `DATASET` line
    ///
    /// Leaving it out gives the canonical Pink layout with the dimensions on
    /// the fifth line.
    pub fn dataset(mut self, dataset: Option<&str>) -> Self {
        self.dataset = dataset.map(str::to_string);
        self
    }
}

impl Default for PgmWriterBuilder {
    fn default() -> Self {
        Self {
            format: FormatCode::P7,
            spacing: None,
            dataset: Some(STRUCTURED_POINTS.to_string()),
        }
    }
}
