// standard library
use std::io::Write;

// crate modules
use crate::volume::{Dimensions, Spacing};

// voltools modules
use voltools_utils::{f, OptionExt};

/// Largest sample value of an unsigned char volume
pub const MAX_VALUE: u32 = 255;

/// Dataset type written by default
pub const STRUCTURED_POINTS: &str = "STRUCTURED_POINTS";

/// Representation of the ASCII header of a PGM volume
///
/// The header is a short run of newline-terminated ASCII lines in front of the
/// raw samples. Written by default as:
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
/// The `DATASET` line is optional. The canonical Pink layout leaves it out so
/// that the dimensions are on the fifth line, and both forms are read.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Magic number from the first line
    pub format: FormatCode,
    /// Voxel spacing from the `#xdim`, `#ydim`, and `#zdim` lines
    pub spacing: Spacing,
    /// Dataset type from an optional `DATASET` line
    pub dataset: Option<String>,
    /// Number of voxels along each axis
    pub dimensions: Dimensions,
    /// Largest sample value, always 255 for 8-bit data
    pub max_value: u32,
}

impl Header {
    /// Default header for a volume of the given dimensions
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            format: FormatCode::P7,
            spacing: Spacing::default(),
            dataset: Some(STRUCTURED_POINTS.to_string()),
            dimensions,
            max_value: MAX_VALUE,
        }
    }

    /// Number of raw sample bytes expected after the header
    ///
    /// `None` if the dimensions overflow a `usize`.
    pub fn number_of_voxels(&self) -> Option<usize> {
        self.dimensions.checked_number_of_voxels()
    }

    /// Write the ASCII header lines
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.to_text().as_bytes())
    }

    /// The ASCII header as bytes
    ///
    /// ```rust
    /// # use voltools_pgm::{Dimensions, Header};
    /// let header = Header::new(Dimensions::new(2, 1, 1));
    /// assert_eq!(
    ///     header.to_bytes(),
    ///     b"P7\n#xdim 1\n#ydim 1\n#zdim 1\nDATASET STRUCTURED_POINTS\n2 1 1\n255\n"
    /// );
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_text().into_bytes()
    }

    /// Every header line, each terminated by `\n`
    fn to_text(&self) -> String {
        let Dimensions { nx, ny, nz } = self.dimensions;

        let mut s = f!("{}\n", self.format);
        s += &f!("#xdim {}\n", self.spacing.x);
        s += &f!("#ydim {}\n", self.spacing.y);
        s += &f!("#zdim {}\n", self.spacing.z);
        if let Some(dataset) = &self.dataset {
            s += &f!("DATASET {dataset}\n");
        }
        s += &f!("{nx} {ny} {nz}\n");
        s += &f!("{}\n", self.max_value);
        s
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "Header {\n".to_string();
        s += &f!("    format: {}\n", self.format);
        s += &f!("    spacing: {}\n", self.spacing);
        s += &f!("    dataset: {}\n", self.dataset.display());
        s += &f!(
            "    dimensions: {} ({} voxels)\n",
            self.dimensions,
            self.number_of_voxels().display_or("too many")
        );
        s += &f!("    max value: {}\n}}", self.max_value);

        write!(f, "{}", s)
    }
}

/// Magic number on the first line of the header
///
/// Pink writes `P5` for unsigned char volumes, and `P7` is common from other
/// tools. Anything else is kept as-is, since the samples are read as unsigned
/// char regardless.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormatCode {
    /// Binary greymap
    P5,
    /// Written by default
    #[default]
    P7,
    /// Any other non-empty token
    Other(String),
}

impl FormatCode {
    /// Interpret the first token of the format code line
    pub fn from_token(token: &str) -> Self {
        match token {
            "P5" => Self::P5,
            "P7" => Self::P7,
            other => Self::Other(other.to_string()),
        }
    }

    /// True for the codes known to denote unsigned char volumes
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for FormatCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::P5 => write!(f, "P5"),
            Self::P7 => write!(f, "P7"),
            Self::Other(code) => write!(f, "{code}"),
        }
    }
}
