use crate::rle::{read_pattern, DecodeOptions, DecodedPattern};
use crate::{emit, Bitmap, Catalog, Category, Config, Result};
use tracing::info;

/// A catalogued pattern with its squared cells, ready for the emitters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub category: Category,
    pub id: String,
    pub display_name: String,
    pub cells: Bitmap,
}

impl Pattern {
    /// Attaches `category` and squares the decoded cells.
    pub fn new(category: Category, decoded: DecodedPattern) -> Self {
        Self {
            category,
            id: decoded.id,
            display_name: decoded.display_name,
            cells: decoded.cells.squared(),
        }
    }

    /// Side length of the square bitmap.
    pub fn side(&self) -> usize {
        self.cells.height()
    }
}

/// Decodes and squares every catalogue entry, stopping at the first failure.
///
/// The result is sorted by side length; equal sides keep catalogue order.
pub fn load_patterns(config: &Config, catalog: &Catalog) -> Result<Vec<Pattern>> {
    let options = DecodeOptions {
        strict: config.strict,
    };
    let mut patterns = catalog
        .entries()
        .map(|(category, id)| -> Result<Pattern> {
            let decoded = read_pattern(&config.patterns_dir, id, options)?;
            Ok(Pattern::new(category, decoded))
        })
        .collect::<Result<Vec<_>>>()?;
    patterns.sort_by_key(Pattern::side);
    Ok(patterns)
}

/// Runs the whole generation: decode, square, sort, then write the scripts,
/// the colour swatches and the display document.
pub fn generate(config: &Config, catalog: &Catalog) -> Result<Vec<Pattern>> {
    let patterns = load_patterns(config, catalog)?;
    emit::write_patterns_script(config, &patterns)?;
    emit::write_colours_script(config)?;
    emit::write_swatches(config)?;
    emit::write_html(config, &patterns)?;
    info!(
        patterns = patterns.len(),
        largest = patterns.last().map_or(0, Pattern::side),
        "generation finished"
    );
    Ok(patterns)
}
