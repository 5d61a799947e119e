//! Saving rendered images to disk.

use crate::core::targets::*;
use crate::core::types::Image;
use image::codecs::png::PngEncoder;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageError, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// The file formats an image can be written as
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Binary PPM (`P6`), 8 bits per channel
    Ppm,
    Png,
}

impl OutputFormat {
    /// Picks the format from a path's extension. Anything that isn't `.png` is written as PPM
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => Self::Png,
            _ => Self::Ppm,
        }
    }
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("could not write image to {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode image")]
    Encode {
        #[from]
        source: ImageError,
    },
    #[error("image dimensions ({width}x{height}) are too large to encode")]
    TooLarge { width: usize, height: usize },
}

/// Writes the image to a file, choosing the format from the path's extension (see [OutputFormat::from_path])
pub fn write_image(img: &Image, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path);
    debug!(target: OUTPUT, ?path, ?format, width = img.width(), height = img.height(), "writing image");

    let io_err = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    encode_image(img, format, &mut writer)?;
    writer.flush().map_err(io_err)
}

/// Encodes the image in the given format into an arbitrary writer
pub fn encode_image(img: &Image, format: OutputFormat, writer: impl Write) -> Result<(), OutputError> {
    let (width, height) = encoded_dims(img)?;
    let bytes = img.to_rgb_bytes();

    match format {
        OutputFormat::Ppm => PnmEncoder::new(writer)
            .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
            .write_image(&bytes, width, height, ExtendedColorType::Rgb8)?,
        OutputFormat::Png => PngEncoder::new(writer).write_image(&bytes, width, height, ExtendedColorType::Rgb8)?,
    }

    Ok(())
}

/// Converts the framebuffer into an [RgbImage]
pub fn to_rgb_image(img: &Image) -> Result<RgbImage, OutputError> {
    let (width, height) = encoded_dims(img)?;
    RgbImage::from_raw(width, height, img.to_rgb_bytes()).ok_or(OutputError::TooLarge {
        width: img.width(),
        height: img.height(),
    })
}

fn encoded_dims(img: &Image) -> Result<(u32, u32), OutputError> {
    let too_large = || OutputError::TooLarge {
        width: img.width(),
        height: img.height(),
    };
    let width = u32::try_from(img.width()).map_err(|_| too_large())?;
    let height = u32::try_from(img.height()).map_err(|_| too_large())?;
    Ok((width, height))
}
