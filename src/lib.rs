//! `voltools` is a small toolkit for 3D 8-bit volumes in the PGM format used
//! by skeletonization tools
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use voltools_utils as utils;

#[cfg(feature = "pgm")]
#[cfg_attr(docsrs, doc(cfg(feature = "pgm")))]
#[doc(inline)]
pub use voltools_pgm as pgm;
