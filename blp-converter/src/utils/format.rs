//! Formatting utilities

use humansize::{DECIMAL, format_size};

/// Format file size in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Format a pixel size as `WIDTHxHEIGHT`
pub fn format_dimensions(width: u32, height: u32) -> String {
    format!("{width}x{height}")
}
