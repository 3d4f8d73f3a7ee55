use crate::consts::CHANNEL_SCALE;

/// The four 2bit channel values carried by one cartridge byte.
///
/// Every channel is guaranteed to be in `0..=3`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Channels {
    alpha: u8,
    red: u8,
    green: u8,
    blue: u8,
}

impl Channels {
    /// Builds channels from 2bit values. Higher bits are masked off.
    #[inline]
    #[must_use]
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {alpha: alpha & 0x03, red: red & 0x03, green: green & 0x03, blue: blue & 0x03}
    }
    /// The alpha channel, from bits 6-7.
    #[inline]
    #[must_use]
    pub const fn alpha(&self) -> u8 {
        self.alpha
    }
    #[inline]
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }
    #[inline]
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }
    #[inline]
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
    /// Splits a value into its channels: alpha from bits 6-7, red 4-5, green 2-3, blue 0-1.
    ///
    /// Only the low 8 bits of `value` contribute so values above `255` are silently masked.
    #[inline]
    #[must_use]
    pub const fn decode(value: u64) -> Self {
        Self {
            alpha: ((value >> 6) & 0x03) as u8,
            red: ((value >> 4) & 0x03) as u8,
            green: ((value >> 2) & 0x03) as u8,
            blue: (value & 0x03) as u8,
        }
    }
    /// Packs the channels back into the byte they were decoded from.
    #[inline]
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        self.alpha << 6 | self.red << 4 | self.green << 2 | self.blue
    }
}

/// One entry of the canvas.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pixel {
    /// A pixel decoded from a cartridge byte.
    Decoded(Channels),
    /// Padding past the end of the cartridge data. Stored as `(0, 0, 0, 0)`.
    Transparent,
}

impl Pixel {
    #[inline]
    #[must_use]
    pub const fn decode(value: u64) -> Self {
        Self::Decoded(Channels::decode(value))
    }
    /// The 8bit RGBA bytes stored in the image for this pixel.
    #[inline]
    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        match self {
            Self::Decoded(c) => [c.red * CHANNEL_SCALE,
                                 c.green * CHANNEL_SCALE,
                                 c.blue * CHANNEL_SCALE,
                                 c.alpha * CHANNEL_SCALE],
            Self::Transparent => [0, 0, 0, 0],
        }
    }
    /// Rebuilds a pixel from stored 8bit RGBA bytes by keeping the top 2 bits of each channel.
    ///
    /// `0`, `85`, `170` and `255` map back to `0`, `1`, `2` and `3`. All zero reads back as transparent.
    #[inline]
    #[must_use]
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        if rgba[0] == 0 && rgba[1] == 0 && rgba[2] == 0 && rgba[3] == 0 {return Self::Transparent;}
        Self::Decoded(Channels::new(rgba[3] >> 6, rgba[0] >> 6, rgba[1] >> 6, rgba[2] >> 6))
    }
    /// The byte this pixel carries. Transparent padding carries `0`.
    #[inline]
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::Decoded(c) => c.to_byte(),
            Self::Transparent => 0,
        }
    }
}
