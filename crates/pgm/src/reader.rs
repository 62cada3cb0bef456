//! Read operations for 3D PGM volumes
//!
//! The header is parsed one newline-terminated line at a time and each line is
//! identified by what it contains rather than where it is. This reads both the
//! canonical Pink layout and the variant with an extra `DATASET` line, along
//! with any number of additional `#` comments.
//!
//! Everything after the max value line is sample data, including any bytes
//! that happen to equal `\n`.

// standard library
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::header::{FormatCode, Header, MAX_VALUE};
use crate::parsers::{self, HeaderLine};
use crate::volume::{Spacing, Volume};

// voltools modules
use voltools_utils::{f, OptionExt};

// external crates
use log::{debug, info, trace, warn};

/// Read a 3D PGM volume
///
/// Returns the [Volume] extracted from the file at `path`, or `None` if the
/// file ends before any sample data is found.
///
/// ```rust, no_run
/// # use voltools_pgm::read_pgm;
/// // Read the example file
/// let volume = read_pgm("./data/volume.pgm").unwrap();
///
/// // Print a summary of the data
/// if let Some(volume) = volume {
///     println!("{volume}");
/// }
/// ```
///
/// The number of sample bytes must match the dimensions exactly, otherwise
/// [Error::UnexpectedByteLength] is returned.
pub fn read_pgm<P: AsRef<Path>>(path: P) -> Result<Option<Volume>> {
    let mut reader = Reader::new(path)?;

    let Some(header) = reader.read_header()? else {
        return Ok(None);
    };

    reader.read_samples(header)
}

/// Read only the header of a 3D PGM volume
///
/// Useful for checking dimensions without loading the sample data. Returns
/// `None` if the file ends before the header is complete.
///
/// ```rust, no_run
/// # use voltools_pgm::read_pgm_header;
/// let header = read_pgm_header("./data/volume.pgm").unwrap();
/// if let Some(header) = header {
///     println!("{header}");
/// }
/// ```
pub fn read_pgm_header<P: AsRef<Path>>(path: P) -> Result<Option<Header>> {
    Reader::new(path)?.read_header()
}

/// Internal reader for PGM volumes
struct Reader {
    reader: BufReader<File>,
    cached_line: Vec<u8>,
}

impl Reader {
    /// Create a new reader for the path provided
    fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            reader: BufReader::new(file),
            cached_line: Vec::new(),
        })
    }

    /// Advances to the next line, returning false at the end of the file
    fn next_line(&mut self) -> Result<bool> {
        self.cached_line.clear();
        let n = self.reader.read_until(b'\n', &mut self.cached_line)?;
        Ok(n > 0)
    }

    /// Cached line without its line ending
    fn cached_bytes(&self) -> &[u8] {
        let line = self.cached_line.as_slice();
        let line = line.strip_suffix(b"\n").unwrap_or(line);
        line.strip_suffix(b"\r").unwrap_or(line)
    }

    /// Cached line as text, invalid UTF-8 is replaced
    fn cached_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.cached_bytes())
    }

    /// Parse every header field up to and including the max value
    fn read_header(&mut self) -> Result<Option<Header>> {
        if !self.next_line()? {
            debug!("Empty file, no header found");
            return Ok(None);
        }
        let format = self.parse_format_code()?;

        let mut spacing = Spacing::default();
        let mut dataset = None;

        let Some(line) = self.next_values_line(&mut spacing, &mut dataset)? else {
            return Ok(None);
        };
        let dimensions = parsers::dimensions(&line)
            .map_err(|_| Error::InvalidDimensions(line.clone()))?
            .1;
        info!(
            "Image size = {dimensions} ({} voxels)",
            dimensions.checked_number_of_voxels().display()
        );

        let Some(line) = self.next_values_line(&mut spacing, &mut dataset)? else {
            return Ok(None);
        };
        let max_value = match parsers::max_value(&line) {
            Ok((_, value)) => value,
            Err(_) => {
                warn!("Unreadable max value {line:?}, assuming {MAX_VALUE}");
                MAX_VALUE
            }
        };
        if max_value != MAX_VALUE {
            warn!("Max value {max_value} is not {MAX_VALUE}, samples are still read as unsigned char");
        }

        let header = Header {
            format,
            spacing,
            dataset,
            dimensions,
            max_value,
        };
        debug!("{header}");
        Ok(Some(header))
    }

    /// Interpret the first line of the file
    ///
    /// Any non-empty ASCII token is accepted.
    fn parse_format_code(&self) -> Result<FormatCode> {
        let line = self.cached_bytes();
        let text = self.cached_text();
        if !line.is_ascii() {
            return Err(Error::UnsupportedFormat(text.into_owned()));
        }

        let (_, token) =
            parsers::format_code(&text).map_err(|_| Error::UnsupportedFormat(text.to_string()))?;

        let format = FormatCode::from_token(token);
        if !format.is_known() {
            warn!("Unknown format code {format}, reading as unsigned char");
        }
        Ok(format)
    }

    /// Skip to the next numeric header line, collecting any metadata on the way
    ///
    /// Returns `None` if the file ends first.
    fn next_values_line(
        &mut self,
        spacing: &mut Spacing,
        dataset: &mut Option<String>,
    ) -> Result<Option<String>> {
        while self.next_line()? {
            let line = self.cached_text();
            match parsers::header_line(&line) {
                HeaderLine::Blank => continue,
                HeaderLine::Comment => trace!("Skipping comment {line:?}"),
                HeaderLine::Spacing => match parsers::spacing(&line) {
                    Ok((_, (axis, value))) => spacing.set(axis, value),
                    Err(_) => warn!("Ignoring spacing line with no usable value {line:?}"),
                },
                HeaderLine::Dataset => match parsers::dataset(&line) {
                    Ok((_, kind)) => *dataset = Some(kind.to_string()),
                    Err(_) => warn!("Ignoring dataset line with no type {line:?}"),
                },
                HeaderLine::Values => return Ok(Some(line.into_owned())),
            }
        }

        debug!("File ended before the header was complete");
        Ok(None)
    }

    /// Read every remaining byte as sample data
    fn read_samples(&mut self, header: Header) -> Result<Option<Volume>> {
        let expected = header
            .number_of_voxels()
            .ok_or_else(|| Error::InvalidDimensions(header.dimensions.to_string()))?;

        let mut data = Vec::new();
        self.reader.read_to_end(&mut data)?;

        if data.is_empty() && expected > 0 {
            warn!("No sample data found after the header");
            return Ok(None);
        }

        if data.len() != expected {
            return Err(Error::UnexpectedByteLength {
                expected,
                found: data.len(),
            });
        }

        let volume = Volume::new(header.dimensions, data)?.with_spacing(header.spacing);
        let range = volume.value_range().map(|(min, max)| f!("[{min}, {max}]"));
        info!("Image value range = {}", range.display_or("empty"));

        Ok(Some(volume))
    }
}
