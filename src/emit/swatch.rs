use super::write_file;
use crate::{Config, Result};
use eframe::egui::Color32;
use std::path::PathBuf;

/// 1x1 GIF89a with a two-entry global palette; the pixel uses entry 0.
const GIF_TEMPLATE: [u8; 35] = [
    b'G', b'I', b'F', b'8', b'9', b'a', // signature
    0x01, 0x00, 0x01, 0x00, // 1x1 screen
    0x80, 0x00, 0x00, // global palette of 2 entries, background 0
    0x00, 0x00, 0x00, // entry 0, patched with the colour
    0x00, 0x00, 0x00, // entry 1
    0x2c, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, // image descriptor
    0x02, 0x02, 0x44, 0x01, 0x00, // LZW: clear, 0, end
    0x3b,
];
const PALETTE_OFFSET: usize = 13;

/// Encodes a single pixel of `colour` as a GIF.
pub fn solid_gif(colour: Color32) -> [u8; 35] {
    let mut gif = GIF_TEMPLATE;
    gif[PALETTE_OFFSET..PALETTE_OFFSET + 3].copy_from_slice(&[colour.r(), colour.g(), colour.b()]);
    gif
}

/// Writes `<images_dir>/<category>.gif` for every category colour.
pub fn write_swatches(config: &Config) -> Result<Vec<PathBuf>> {
    config
        .colours()
        .iter()
        .map(|&(category, colour)| -> Result<PathBuf> {
            let path = config.images_dir.join(format!("{category}.gif"));
            write_file(&path, solid_gif(colour))?;
            Ok(path)
        })
        .collect()
}
