use crate::{
    canvas::Canvas,
    consts::{HEIGHT, WIDTH},
    error::CartError,
};
use log::info;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Writes the canvas as a `160`x`205` 8bit RGBA PNG image.
///
/// # Errors
///
/// Will return `Err` if the PNG encoder fails or the writer fails.
pub fn write_png<W: Write>(canvas: &Canvas, writer: W) -> Result<(), CartError> {
    let mut encoder = png::Encoder::new(writer, WIDTH, HEIGHT);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&canvas.to_rgba())?;
    writer.finish()?;
    Ok(())
}

/// Writes the canvas as a PNG image to `path`, replacing any existing file.
///
/// # Errors
///
/// Will return `Err` if the file cannot be created or written.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<(), CartError> {
    let mut file = BufWriter::new(File::create(path)?);
    write_png(canvas, &mut file)?;
    file.flush()?;
    info!("wrote {}", path.display());
    Ok(())
}
