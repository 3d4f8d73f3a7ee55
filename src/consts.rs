pub const WIDTH: u32 = 160;
pub const HEIGHT: u32 = 205;
pub const PIXEL_AMOUNT: usize = (WIDTH * HEIGHT) as usize; // 32800
pub const SIGNATURE: [u8; 6] = [34, 0, 2, 5, 0x77, 0x02];
pub const SIGNATURE_OFFSET: usize = 0x8000; // 32768 + 6 stays inside the canvas
pub const CHANNEL_SCALE: u8 = 85; // 2bit channel (0..=3) to 8bit (0, 85, 170, 255)
pub const MARKER_KEYWORD: &str = "var";
pub const MARKER_NAME: &str = "_cartdat";
pub const OUTPUT_EXTENSION: &str = "p8.png";
