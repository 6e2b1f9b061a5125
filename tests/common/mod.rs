#![allow(dead_code)]

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::ExtendedColorType;
use image::codecs::jpeg::JpegEncoder;
use qrcode::{Color, QrCode};

pub fn write_jpeg(path: &Path, width: u32, height: u32, pixels: &[u8], color: ExtendedColorType) {
    let file = File::create(path).unwrap();
    let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), 100);
    encoder.encode(pixels, width, height, color).unwrap();
}

pub fn write_rgb_jpeg(path: &Path, width: u32, height: u32, rgb: &[u8]) {
    write_jpeg(path, width, height, rgb, ExtendedColorType::Rgb8);
}

/// Renders `payload` as a QR code, `scale` pixels per module with a four
/// module quiet zone, as interleaved RGB.
pub fn qr_rgb(payload: &[u8], scale: usize) -> (u32, u32, Vec<u8>) {
    let code = QrCode::new(payload).unwrap();
    let modules = code.width();
    let colors = code.to_colors();
    let quiet = 4;
    let side = (modules + 2 * quiet) * scale;

    let mut rgb = vec![255u8; side * side * 3];
    for y in 0..side {
        for x in 0..side {
            let mx = (x / scale) as isize - quiet as isize;
            let my = (y / scale) as isize - quiet as isize;
            if mx < 0 || my < 0 || mx >= modules as isize || my >= modules as isize {
                continue;
            }
            if colors[my as usize * modules + mx as usize] == Color::Dark {
                let i = (y * side + x) * 3;
                rgb[i..i + 3].copy_from_slice(&[0, 0, 0]);
            }
        }
    }
    (side as u32, side as u32, rgb)
}

const EAN_L: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011",
    "0110001", "0101111", "0111011", "0110111", "0001011",
];
const EAN_G: [&str; 10] = [
    "0100111", "0110011", "0011011", "0100001", "0011101",
    "0111001", "0000101", "0010001", "0001001", "0010111",
];
const EAN_R: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100",
    "1001110", "1010000", "1000100", "1001000", "1110100",
];
/// Left-half L/G pattern selected by the leading digit.
const EAN_PARITY: [&str; 10] = [
    "LLLLLL", "LLGLGG", "LLGGLG", "LLGGGL", "LGLLGG",
    "LGGLLG", "LGGGLL", "LGLGLG", "LGLGGL", "LGGLGL",
];

/// Module pattern of a 13-digit EAN code (check digit included), with a
/// twelve module quiet zone on each side. `1` is a bar.
pub fn ean13_modules(code: &str) -> String {
    let digits: Vec<usize> = code.bytes().map(|b| (b - b'0') as usize).collect();
    assert_eq!(digits.len(), 13);

    let quiet = "0".repeat(12);
    let mut modules = quiet.clone();
    modules.push_str("101");
    for (i, parity) in EAN_PARITY[digits[0]].chars().enumerate() {
        let table = if parity == 'L' { &EAN_L } else { &EAN_G };
        modules.push_str(table[digits[i + 1]]);
    }
    modules.push_str("01010");
    for &digit in &digits[7..] {
        modules.push_str(EAN_R[digit]);
    }
    modules.push_str("101");
    modules.push_str(&quiet);
    modules
}

/// Renders an EAN-13 barcode as interleaved RGB, `scale` pixels per module
/// and `height` pixels tall.
pub fn ean13_rgb(code: &str, scale: usize, height: usize) -> (u32, u32, Vec<u8>) {
    let modules = ean13_modules(code).into_bytes();
    let width = modules.len() * scale;

    let mut rgb = vec![255u8; width * height * 3];
    for y in 0..height {
        for x in 0..width {
            if modules[x / scale] == b'1' {
                let i = (y * width + x) * 3;
                rgb[i..i + 3].copy_from_slice(&[0, 0, 0]);
            }
        }
    }
    (width as u32, height as u32, rgb)
}
