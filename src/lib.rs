mod bitmap;
mod catalog;
mod config;
mod error;
mod pipeline;

pub mod emit;
pub mod rle;

pub use bitmap::Bitmap;
pub use catalog::{Catalog, Category};
pub use config::{css_hex, Config};
pub use error::{Error, Malformed, Result};
pub use pipeline::{generate, load_patterns, Pattern};
