//! blp-converter library
//!
//! Command line front end for the `blp-decode` crate: argument parsing, the
//! per-file conversion and info commands and their output helpers.

pub mod cli;
pub mod commands;
pub mod utils;
