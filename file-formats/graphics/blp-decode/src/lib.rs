//! Decoder for BLP texture files.
//!
//! The [`parser`] reads the fixed header of a `BLP1` or `BLP2` file together
//! with its palette or shared JPEG header into a [`types::BlpDescriptor`].
//! The [`convert`] module resolves the canonical pixel encoding, locates the
//! requested mipmap level and reconstructs it as dense BGRA pixels.
//!
//! # Examples
//!
//! ```no_run
//! use blp_decode::{blp_to_bgra, parse_blp};
//!
//! let bytes = std::fs::read("texture.blp")?;
//! let blp = parse_blp(&bytes)?;
//! let level = blp_to_bgra(&bytes, &blp, 0)?;
//! println!("{}x{} {}", level.width, level.height, blp.format()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Pixel reconstruction for every BLP encoding
pub mod convert;
/// Debug formatting helpers
pub mod debug;
/// Header parsing, format resolution and mipmap location
pub mod parser;
/// Types describing BLP files and decoded pixels
pub mod types;

pub use convert::{blp_to_bgra, blp_to_bgra_with, blp_to_image};
pub use parser::{load_blp, parse_blp};
pub use types::{BgraImage, BlpDescriptor, BlpFile, BlpFormat, BlpVersion};
