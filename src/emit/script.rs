use super::write_file;
use crate::config::css_hex;
use crate::{Config, Pattern, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Writes `patterns.js`: one `"<id>": <rows>,` line per pattern, in the
/// given order.
pub fn write_patterns_script(config: &Config, patterns: &[Pattern]) -> Result<PathBuf> {
    let path = config.scripts_dir.join("patterns.js");
    write_file(&path, patterns_script(patterns)?)?;
    Ok(path)
}

/// Writes `pattern_colours.js`, mapping category names to `#rrggbb`.
pub fn write_colours_script(config: &Config) -> Result<PathBuf> {
    let path = config.scripts_dir.join("pattern_colours.js");
    write_file(&path, colours_script(config)?)?;
    Ok(path)
}

fn patterns_script(patterns: &[Pattern]) -> Result<String> {
    let lines = patterns
        .iter()
        .map(|p| -> Result<String> {
            Ok(format!(
                "{}: {},",
                serde_json::to_string(&p.id)?,
                serde_json::to_string(&p.cells)?
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("var patterns = {{\n{}\n}};\n", lines.join("\n")))
}

fn colours_script(config: &Config) -> Result<String> {
    let colours: BTreeMap<_, _> = config
        .colours()
        .iter()
        .map(|&(category, colour)| (category.name(), css_hex(colour)))
        .collect();
    Ok(format!(
        "var pattern_colours = {};\n",
        serde_json::to_string(&colours)?
    ))
}
