use crate::{
    canvas::Canvas,
    consts::{HEIGHT, WIDTH},
    error::CartError,
    pixel::Pixel,
};
use log::debug;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Reads a `.p8.png` image back into a canvas.
///
/// # Errors
///
/// Will return `Err` if the PNG cannot be decoded, is not `160`x`205` or is not 8bit RGBA.
pub fn read_png<R: Read>(reader: R) -> Result<Canvas, CartError> {
    let mut reader = png::Decoder::new(reader).read_info()?;
    let (width, height, color_type, bit_depth) = {
        let info = reader.info();
        (info.width, info.height, info.color_type, info.bit_depth)
    };
    if width != WIDTH || height != HEIGHT {return Err(CartError::UnexpectedDimensions(width, height));}
    if color_type != png::ColorType::Rgba || bit_depth != png::BitDepth::Eight {
        return Err(CartError::UnexpectedColorType(color_type, bit_depth));
    }
    let mut buffer = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buffer)?;
    let pixels = buffer[..frame.buffer_size()]
        .chunks_exact(4)
        .map(|rgba| Pixel::from_rgba([rgba[0], rgba[1], rgba[2], rgba[3]]))
        .collect::<Vec<_>>();
    debug!("read {} pixels", pixels.len());
    Ok(Canvas::pad(pixels))
}

/// Reads the `.p8.png` image at `path` back into a canvas.
///
/// # Errors
///
/// Will return `Err` if the file cannot be opened or [`read_png`] fails.
pub fn open_png(path: &Path) -> Result<Canvas, CartError> {
    read_png(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use crate::{canvas::Canvas, encoder::write_png, error::CartError};
    use super::read_png;
    #[test]
    fn good_read_png() {
        let numbers: Vec<u64> = (0..1000).map(|n| n % 256).collect();
        let mut canvas = Canvas::from_numbers(&numbers);
        canvas.embed_signature();
        let mut output = Vec::new();
        write_png(&canvas, &mut output).unwrap();
        let read = read_png(output.as_slice()).unwrap();
        assert!(read.has_signature());
        assert!(read.to_bytes() == canvas.to_bytes());
        assert!(read.to_rgba() == canvas.to_rgba());
    }
    #[test]
    fn bad_read_png_dimensions() {
        let mut output = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut output, 128, 128);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0; 128 * 128 * 4]).unwrap();
        }
        match read_png(output.as_slice()) {
            Err(CartError::UnexpectedDimensions(w, h)) => assert!(w == 128 && h == 128),
            _ => unreachable!(),
        }
    }
    #[test]
    fn bad_read_png_color_type() {
        let mut output = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut output, 160, 205);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0; 160 * 205 * 3]).unwrap();
        }
        match read_png(output.as_slice()) {
            Err(CartError::UnexpectedColorType(color, _)) => assert!(color == png::ColorType::Rgb),
            _ => unreachable!(),
        }
    }
    #[test]
    fn bad_read_png_garbage() {
        let result = read_png([1, 2, 3, 4].as_slice());
        assert!(matches!(result, Err(CartError::PngDecoding(_))));
    }
}
