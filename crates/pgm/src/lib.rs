//! Module for reading and writing 3D 8-bit PGM volumes
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod builder;
mod error;
mod header;
mod parsers;
mod raw;
mod reader;
mod text;
mod volume;
mod writer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use volume::{Axis, Dimensions, Spacing, Volume};

#[doc(inline)]
pub use header::{FormatCode, Header, MAX_VALUE, STRUCTURED_POINTS};

#[doc(inline)]
pub use reader::{read_pgm, read_pgm_header};

#[doc(inline)]
pub use writer::{write_pgm, PgmWriter};

#[doc(inline)]
pub use builder::PgmWriterBuilder;

#[doc(inline)]
pub use raw::{read_raw, write_raw, RawOptions};

#[doc(inline)]
pub use text::{write_ascii_pretty, write_json};

#[doc(inline)]
pub use error::{Error, Result};
