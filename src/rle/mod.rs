//! [RLE](https://conwaylife.com/wiki/Run_Length_Encoded) pattern files.

mod decoder;
mod tokenizer;

pub use decoder::{decode_rle, read_pattern, DecodeOptions, DecodedPattern};
pub use tokenizer::{run_length_decode, RunTokens, Token};
