//! Library of parser functions for header lines
//!
//! Every parser expects a single header line with the line ending removed.

// crate modules
use crate::volume::{Axis, Dimensions};

// nom parser combinators
use nom::bytes::complete::{is_not, tag, tag_no_case};
use nom::character::complete::{self, char, digit1, not_line_ending, one_of, space0, space1};
use nom::branch::alt;
use nom::combinator::{all_consuming, eof, map, opt, peek};
use nom::error::{Error, ErrorKind};
use nom::number::complete::double;
use nom::sequence::{preceded, terminated, tuple};
use nom::IResult;

/// Kinds of line that can appear in the header after the format code
#[derive(Debug, PartialEq)]
pub(crate) enum HeaderLine {
    /// Nothing but whitespace
    Blank,
    /// `#xdim`, `#ydim`, or `#zdim` voxel spacing
    Spacing,
    /// Any other line starting with `#`
    Comment,
    /// `DATASET <type>`
    Dataset,
    /// Numeric field, dimensions then max value
    Values,
}

/// Decide what kind of header line this is
pub(crate) fn header_line(i: &str) -> HeaderLine {
    if i.trim().is_empty() {
        HeaderLine::Blank
    } else if is_spacing(i) {
        HeaderLine::Spacing
    } else if is_comment(i) {
        HeaderLine::Comment
    } else if is_dataset(i) {
        HeaderLine::Dataset
    } else {
        HeaderLine::Values
    }
}

// ! Boolean checks
/// Check for lines starting `#xdim`, `#ydim`, or `#zdim`
pub(crate) fn is_spacing(i: &str) -> bool {
    spacing_hint(i).is_ok()
}

/// Check for any other comment line
pub(crate) fn is_comment(i: &str) -> bool {
    i.trim_start().starts_with('#')
}

/// Check for lines starting with the `DATASET` keyword
pub(crate) fn is_dataset(i: &str) -> bool {
    dataset_hint(i).is_ok()
}

// ! Field parsers
/// First whitespace separated token of the format code line
pub(crate) fn format_code(i: &str) -> IResult<&str, &str> {
    preceded(space0, is_not(" \t\r\n"))(i)
}

/// Axis and value of a `#xdim 1.0` style line
pub(crate) fn spacing(i: &str) -> IResult<&str, (Axis, f64)> {
    all_consuming(terminated(
        tuple((spacing_hint, preceded(space1, double))),
        trailing_comment,
    ))(i.trim_start())
}

/// Dataset type following the `DATASET` keyword
pub(crate) fn dataset(i: &str) -> IResult<&str, &str> {
    preceded(
        terminated(dataset_hint, space1),
        map(not_line_ending, str::trim),
    )(i.trim_start())
}

/// The three dimensions `NX NY NZ`, optionally followed by a `#` comment
///
/// Fails if the number of voxels would not fit in a `usize`.
pub(crate) fn dimensions(i: &str) -> IResult<&str, Dimensions> {
    let (i, (nx, ny, nz)) =
        all_consuming(terminated(tuple((uint, uint, uint)), trailing_comment))(i)?;
    let dimensions = Dimensions::new(nx, ny, nz);
    match dimensions.checked_number_of_voxels() {
        Some(_) => Ok((i, dimensions)),
        None => Err(cause("Number of voxels overflows usize")),
    }
}

/// The single max value, optionally followed by a `#` comment
pub(crate) fn max_value(i: &str) -> IResult<&str, u32> {
    all_consuming(terminated(
        preceded(space0, complete::u32),
        trailing_comment,
    ))(i)
}

// ! Building blocks
/// Match the `#xdim` tag family, returning the axis
///
/// The tag must be a whole word, so `#xdimension` is an ordinary comment.
fn spacing_hint(i: &str) -> IResult<&str, Axis> {
    let (i, axis) = preceded(char('#'), one_of("xyz"))(i.trim_start())?;
    let (i, _) = terminated(tag("dim"), peek(alt((space1, eof))))(i)?;
    let axis = match axis {
        'x' => Axis::X,
        'y' => Axis::Y,
        _ => Axis::Z,
    };
    Ok((i, axis))
}

/// Whitespace and an optional `#` comment to the end of the line
fn trailing_comment(i: &str) -> IResult<&str, Option<&str>> {
    preceded(space0, opt(preceded(char('#'), not_line_ending)))(i)
}

/// Match the `DATASET` keyword
fn dataset_hint(i: &str) -> IResult<&str, &str> {
    tag_no_case("DATASET")(i.trim_start())
}

/// Unsigned size value, trimming preceding whitespace
fn uint(i: &str) -> IResult<&str, usize> {
    let (i, value) = digit1(i.trim_start())?;
    let (_, v) = complete::u64(value)?;
    match usize::try_from(v) {
        Ok(v) => Ok((i, v)),
        Err(_) => Err(cause("Value does not fit in usize")),
    }
}

/// More convenient error creation for nom
fn cause(s: &str) -> nom::Err<Error<&str>> {
    nom::Err::Error(Error::new(s, ErrorKind::Fail))
}
