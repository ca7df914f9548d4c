//! Artifacts consumed by the canvas viewer.

mod html;
mod script;
mod swatch;

pub use html::{canvas_element, replace_region, write_html};
pub use script::{write_colours_script, write_patterns_script};
pub use swatch::{solid_gif, write_swatches};

use crate::{Error, Result};
use std::path::Path;

/// Writes `contents` to `path`, creating missing parent directories.
fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| Error::write(parent, source))?;
    }
    std::fs::write(path, contents).map_err(|source| Error::write(path, source))?;
    tracing::info!(path = %path.display(), "wrote");
    Ok(())
}
