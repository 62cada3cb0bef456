//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, the value range of a slice of samples or a printable form of
//! an optional header field are useful everywhere.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod option_ext;
mod slice_ext;

// Flatten
pub use error::{Error, Result};
pub use option_ext::OptionExt;
pub use slice_ext::SliceExt;
