//! Command line arguments for blp-converter

use clap::{Parser, ValueEnum};
use image::ImageFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blp-converter")]
#[command(about = "Convert BLP textures to PNG or TGA images", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// BLP files to process
    #[arg(required = true, value_name = "BLP_FILE")]
    pub files: Vec<PathBuf>,

    /// Display information about the BLP file(s) instead of converting them
    #[arg(short, long)]
    pub infos: bool,

    /// Folder where the converted image(s) are written
    #[arg(short = 'o', long, default_value = "./", value_name = "DIR")]
    pub dest: PathBuf,

    /// Output image format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Mip level to convert, 0 is the largest; levels past the last stored one use the smallest
    #[arg(short, long, default_value_t = 0, value_name = "LEVEL")]
    pub miplevel: usize,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Portable Network Graphics
    Png,
    /// Truevision TGA
    Tga,
}

impl OutputFormat {
    /// File extension of converted images
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Tga => "tga",
        }
    }
}

impl From<OutputFormat> for ImageFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Png => Self::Png,
            OutputFormat::Tga => Self::Tga,
        }
    }
}
