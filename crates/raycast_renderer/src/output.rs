//! Image output.
//!
//! Plain-text PPM (P3) is written directly; other formats go through the
//! `image` crate as 8-bit RGB. Both use the same clamp-and-truncate
//! conversion from [`color_to_rgb`](crate::color_to_rgb).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ColorType, ImageFormat};

use crate::{color_to_rgb, ImageBuffer, RenderError, RenderResult};

/// Write `image` as a plain-text P3 PPM, one `r g b` line per pixel.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for color in &image.pixels {
        let [r, g, b] = color_to_rgb(*color);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    writer.flush()
}

/// Save `image` to `path`, choosing the format from the file extension.
///
/// `.ppm` is written as P3 text; `.png`, `.jpg`/`.jpeg`, `.bmp` and `.tga`
/// are encoded by the `image` crate.
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> RenderResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => {
            let file = File::create(path)?;
            write_ppm(image, BufWriter::new(file))?;
        }
        "png" | "jpg" | "jpeg" | "bmp" | "tga" => {
            let format = match extension.as_str() {
                "png" => ImageFormat::Png,
                "bmp" => ImageFormat::Bmp,
                "tga" => ImageFormat::Tga,
                _ => ImageFormat::Jpeg,
            };
            image::save_buffer_with_format(
                path,
                &image.to_rgb8(),
                image.width,
                image.height,
                ColorType::Rgb8,
                format,
            )?;
        }
        _ => return Err(RenderError::UnsupportedFormat(path.display().to_string())),
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
