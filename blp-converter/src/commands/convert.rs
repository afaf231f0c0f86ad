//! BLP to PNG/TGA conversion

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use blp_decode::BlpFile;
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// Output path for a converted file: the input file name with the extension
/// of `format`, placed in `dest`
pub fn output_path(input: &Path, dest: &Path, format: OutputFormat) -> PathBuf {
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
    name.push(".");
    name.push(format.extension());
    dest.join(name)
}

/// Decode `mipmap_level` of `blp` and write it next to the other outputs in
/// `dest`. Returns the path written.
pub fn convert_blp(
    blp: &BlpFile,
    input: &Path,
    dest: &Path,
    format: OutputFormat,
    mipmap_level: usize,
) -> Result<PathBuf> {
    let image = blp
        .to_image(mipmap_level)
        .with_context(|| format!("Failed to decode mip level {mipmap_level}"))?;

    let output = output_path(input, dest, format);
    image
        .save_with_format(&output, ImageFormat::from(format))
        .with_context(|| format!("Failed to save image: {}", output.display()))?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        let dest = Path::new("out");
        assert_eq!(
            output_path(Path::new("textures/Stone.blp"), dest, OutputFormat::Png),
            PathBuf::from("out/Stone.png")
        );
        assert_eq!(
            output_path(Path::new("Stone.tile.blp"), dest, OutputFormat::Tga),
            PathBuf::from("out/Stone.tile.tga")
        );
        assert_eq!(
            output_path(Path::new("noext"), Path::new("./"), OutputFormat::Png),
            PathBuf::from("./noext.png")
        );
    }
}
