//! `--infos` output

use crate::utils::{add_table_row, create_table, format_bytes, format_dimensions};
use anyhow::Result;
use blp_decode::BlpFile;
use blp_decode::types::HeaderExtension;
use std::fmt::Write;
use std::path::Path;

/// Print the header summary and mipmap table of a loaded file
#[allow(clippy::print_stdout)]
pub fn show_blp_info(file: &Path, blp: &BlpFile) -> Result<()> {
    print!("{}", describe(file, blp)?);
    Ok(())
}

/// Header summary and mipmap table as printed by `--infos`
pub fn describe(file: &Path, blp: &BlpFile) -> Result<String> {
    let descriptor = &blp.descriptor;
    let format = match descriptor.format() {
        Ok(format) => format.to_string(),
        Err(e) => format!("Unknown ({e})"),
    };

    let mut out = String::new();
    writeln!(out)?;
    writeln!(out, "Infos about '{}':", file.display())?;
    writeln!(out, "  - Version:    {}", descriptor.version())?;
    writeln!(out, "  - Format:     {format}")?;
    writeln!(
        out,
        "  - Dimensions: {}",
        format_dimensions(descriptor.width(), descriptor.height())
    )?;
    writeln!(out, "  - Mip levels: {}", descriptor.mipmap_count())?;
    writeln!(out, "  - File size:  {}", format_bytes(blp.bytes.len() as u64))?;
    match &descriptor.extension {
        HeaderExtension::JpegHeader(header) => {
            writeln!(out, "  - JPEG header: {} bytes", header.len())?;
        }
        HeaderExtension::Palette(palette) => {
            writeln!(out, "  - Palette:    {} colors", palette.colors().len())?;
        }
        HeaderExtension::Empty => {}
    }

    let levels = descriptor.mipmap_info();
    if !levels.is_empty() {
        let mut table = create_table(&["Level", "Dimensions", "Offset", "Size"]);
        for info in &levels {
            add_table_row(
                &mut table,
                vec![
                    info.level.to_string(),
                    format_dimensions(info.width, info.height),
                    info.offset.to_string(),
                    format_bytes(u64::from(info.size)),
                ],
            );
        }
        writeln!(out)?;
        write!(out, "{table}")?;
    }
    writeln!(out)?;

    Ok(out)
}
