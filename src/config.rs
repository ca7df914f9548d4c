use crate::Category;
use eframe::egui::Color32;
use std::path::{Path, PathBuf};

/// Everything a generation run needs besides the catalog.
#[derive(Clone, Debug)]
pub struct Config {
    /// Where `<id>.rle` files are read from.
    pub patterns_dir: PathBuf,
    /// Where `patterns.js` and `pattern_colours.js` go.
    pub scripts_dir: PathBuf,
    /// Where the per-category swatches go.
    pub images_dir: PathBuf,
    /// Display document whose marked region is rewritten.
    pub html_path: PathBuf,
    /// Side of one cell in pixels.
    pub cell_side: u32,
    /// Reject unknown symbols in pattern bodies instead of reading them as dead cells.
    pub strict: bool,
    colours: [(Category, Color32); 6],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            patterns_dir: "patterns".into(),
            scripts_dir: "scripts".into(),
            images_dir: "images".into(),
            html_path: "life.html".into(),
            cell_side: Self::CELL_SIDE,
            strict: false,
            colours: Self::COLOURS,
        }
    }
}

impl Config {
    pub const CELL_SIDE: u32 = 7;

    pub const COLOURS: [(Category, Color32); 6] = [
        (Category::StillLife, Color32::from_rgb(0x66, 0x66, 0x66)),
        (Category::Oscillator, Color32::from_rgb(0x58, 0xac, 0xfa)),
        (Category::Gun, Color32::from_rgb(0xb4, 0x31, 0x04)),
        (Category::Spaceship, Color32::from_rgb(0x31, 0xb4, 0x04)),
        (Category::Methuselah, Color32::from_rgb(0x2e, 0x64, 0xfe)),
        (Category::Puffer, Color32::from_rgb(0xdf, 0x74, 0x01)),
    ];

    pub const BEGIN_MARKER: &'static str = "<!--BEGIN PATTERNS-->";
    pub const END_MARKER: &'static str = "<!--END PATTERNS-->";

    /// Default layout with every path placed under `root`.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let default = Self::default();
        Self {
            patterns_dir: root.join(default.patterns_dir),
            scripts_dir: root.join(default.scripts_dir),
            images_dir: root.join(default.images_dir),
            html_path: root.join(default.html_path),
            ..default
        }
    }

    pub fn with_patterns_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.patterns_dir = dir.into();
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_cell_side(mut self, cell_side: u32) -> Self {
        self.cell_side = cell_side;
        self
    }

    pub fn with_colour(mut self, category: Category, colour: Color32) -> Self {
        for (c, slot) in self.colours.iter_mut() {
            if *c == category {
                *slot = colour;
            }
        }
        self
    }

    pub fn colour(&self, category: Category) -> Color32 {
        self.colours
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(Color32::BLACK, |&(_, colour)| colour)
    }

    /// `(category, colour)` for every category, in [`Category::ALL`] order.
    pub fn colours(&self) -> &[(Category, Color32)] {
        &self.colours
    }
}

/// `#rrggbb`, the form the viewer's stylesheet expects.
pub fn css_hex(colour: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", colour.r(), colour.g(), colour.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_colour() {
        let config = Config::default();
        for (&(category, colour), expected) in config.colours().iter().zip(Category::ALL) {
            assert_eq!(category, expected);
            assert_eq!(config.colour(category), colour);
        }
        assert_eq!(css_hex(config.colour(Category::StillLife)), "#666666");
        assert_eq!(css_hex(config.colour(Category::Oscillator)), "#58acfa");
    }

    #[test]
    fn test_rooted_at() {
        let config = Config::rooted_at("/tmp/run").with_cell_side(3);
        assert_eq!(config.patterns_dir, Path::new("/tmp/run/patterns"));
        assert_eq!(config.html_path, Path::new("/tmp/run/life.html"));
        assert_eq!(config.cell_side, 3);
        assert!(!config.strict);
    }

    #[test]
    fn test_with_colour() {
        let config = Config::default().with_colour(Category::Gun, Color32::WHITE);
        assert_eq!(config.colour(Category::Gun), Color32::WHITE);
        assert_eq!(
            config.colour(Category::Puffer),
            Color32::from_rgb(0xdf, 0x74, 0x01)
        );
    }
}
