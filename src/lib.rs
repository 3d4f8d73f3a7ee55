//! # PICO-8 cartridge data to PNG converter
//!
//! This crate turns the numeric cartridge data embedded in a PICO-8 web export (`.js`) or a plain text dump (`.txt`)
//! into a `160`x`205` RGBA `.p8.png` image.
//!
//! Every cartridge byte becomes one pixel. The byte is split into four 2bit channels (alpha from bits 6-7, red 4-5,
//! green 2-3 and blue 0-1) and each channel is scaled to 8 bits (`0`, `85`, `170` or `255`).
//! The fixed PICO-8 signature (`34`, `0`, `2`, `5`, `0x77`, `0x02`) is written over the pixels at offset `0x8000`.
//!
//! ## Usage
//!
//! [`convert`] runs the whole pipeline for a file on disk.
//! The individual steps are available when the data comes from somewhere else.
//!
//! ```no_run
//! use p8png::{extract_numbers, save_png, Canvas, SourceKind};
//!
//! let numbers = extract_numbers("var _cartdat = [10, 20, 30];", SourceKind::Script)?;
//! let mut canvas = Canvas::from_numbers(&numbers); // padded to 32800 pixels
//! canvas.embed_signature();
//! save_png(&canvas, "cart.p8.png".as_ref())?;
//! # Ok::<(), p8png::CartError>(())
//! ```
//!
//! Values above `255` are masked to their low byte by [`Canvas::from_numbers`].
//! Use [`Canvas::try_from_numbers`] to reject them instead.
#![forbid(unsafe_code)]

mod canvas;
mod consts;
mod decoder;
mod encoder;
mod error;
mod extract;
mod pixel;

pub use crate::canvas::Canvas;
pub use crate::consts::{HEIGHT, PIXEL_AMOUNT, SIGNATURE, SIGNATURE_OFFSET, WIDTH};
pub use crate::decoder::{open_png, read_png};
pub use crate::encoder::{save_png, write_png};
pub use crate::error::CartError;
pub use crate::extract::{extract_numbers, SourceKind};
pub use crate::pixel::{Channels, Pixel};

use log::debug;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Checks that `path` exists and has a supported extension.
///
/// # Errors
///
/// Will return `Err` if the path does not exist or its extension is not `.txt` or `.js`.
pub fn validate_input(path: &Path) -> Result<SourceKind, CartError> {
    if !path.exists() {return Err(CartError::NotFound(path.to_path_buf()));}
    SourceKind::from_path(path)
}

/// The image path for an input: its last extension replaced by `.p8.png`.
#[must_use]
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(consts::OUTPUT_EXTENSION)
}

/// Converts the cartridge data file at `input` into a `.p8.png` image next to it.
///
/// Returns the path of the written image.
///
/// # Errors
///
/// Will return `Err` if the input is rejected by [`validate_input`], cannot be read as UTF-8 text,
/// is a script without a `var _cartdat =` assignment, or the image cannot be written.
pub fn convert(input: &Path) -> Result<PathBuf, CartError> {
    let kind = validate_input(input)?;
    let content = fs::read_to_string(input)?;
    debug!("read {} bytes from {} as {kind:?}", content.len(), input.display());
    let numbers = extract_numbers(&content, kind)?;
    let mut canvas = Canvas::from_numbers(&numbers);
    canvas.embed_signature();
    let output = output_path(input);
    save_png(&canvas, &output)?;
    Ok(output)
}
