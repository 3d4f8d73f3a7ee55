use crate::{
    consts::{PIXEL_AMOUNT, SIGNATURE, SIGNATURE_OFFSET},
    error::CartError,
    pixel::Pixel,
};
use log::{debug, warn};

/// The fixed `160`x`205` pixel buffer written to a `.p8.png` image.
///
/// Always holds exactly `32800` pixels in row-major order.
#[derive(Clone, Debug)]
pub struct Canvas {
    pixels: Vec<Pixel>,
}

impl Canvas {
    /// Builds a canvas from cartridge numbers.
    ///
    /// Only the first `32800` numbers are used. Missing entries are padded with transparent pixels.
    /// Values above `255` are masked to their low byte and a warning is logged.
    #[must_use]
    pub fn from_numbers(numbers: &[u64]) -> Self {
        let used = &numbers[..numbers.len().min(PIXEL_AMOUNT)];
        let out_of_range = used.iter().filter(|&&n| n > 0xFF).count();
        if out_of_range != 0 {warn!("{out_of_range} values do not fit in a byte and were masked");}
        if numbers.len() > PIXEL_AMOUNT {debug!("ignoring {} numbers past the canvas", numbers.len() - PIXEL_AMOUNT);}
        Self::pad(used.iter().map(|&n| Pixel::decode(n)).collect())
    }
    /// Builds a canvas from cartridge numbers, rejecting values above `255`.
    ///
    /// Numbers past the first `32800` are ignored and never checked.
    ///
    /// # Errors
    ///
    /// Will return `Err` with the position and value of the first number that does not fit in a byte.
    pub fn try_from_numbers(numbers: &[u64]) -> Result<Self, CartError> {
        let used = &numbers[..numbers.len().min(PIXEL_AMOUNT)];
        if let Some((index, &value)) = used.iter().enumerate().find(|(_, &n)| n > 0xFF) {
            return Err(CartError::ByteOutOfRange {index, value});
        }
        Ok(Self::pad(used.iter().map(|&n| Pixel::decode(n)).collect()))
    }
    // only called with at most PIXEL_AMOUNT pixels
    pub(crate) fn pad(mut pixels: Vec<Pixel>) -> Self {
        debug!("padding {} decoded pixels", pixels.len());
        pixels.resize(PIXEL_AMOUNT, Pixel::Transparent);
        Self {pixels}
    }
    /// Overwrites the `6` pixels at offset `0x8000` with the PICO-8 signature, whatever they held before.
    pub fn embed_signature(&mut self) {
        for (pixel, &byte) in self.pixels[SIGNATURE_OFFSET..].iter_mut().zip(SIGNATURE.iter()) {
            *pixel = Pixel::decode(u64::from(byte));
        }
    }
    /// Whether the pixels at offset `0x8000` carry the PICO-8 signature.
    #[must_use]
    pub fn has_signature(&self) -> bool {
        self.pixels[SIGNATURE_OFFSET..SIGNATURE_OFFSET + SIGNATURE.len()]
            .iter()
            .zip(SIGNATURE.iter())
            .all(|(pixel, &byte)| pixel.to_byte() == byte)
    }
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
    /// The 8bit RGBA bytes of every pixel, `4` bytes per pixel.
    #[must_use]
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|pixel| pixel.to_rgba()).collect()
    }
    /// The byte carried by every pixel. Transparent padding carries `0`.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pixels.iter().map(|pixel| pixel.to_byte()).collect()
    }
}
