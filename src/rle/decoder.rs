use super::{run_length_decode, Token};
use crate::{Bitmap, Error, Malformed, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Marks the optional first comment line carrying the display name.
const NAME_MARKER: &str = "#N ";
const COMMENT: char = '#';
const TERMINATOR: char = '!';

#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeOptions {
    /// Fail on body symbols other than digits, `b`, `o` and `$`.
    pub strict: bool,
}

/// A decoded RLE file: its id, display name and cells at the declared size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedPattern {
    pub id: String,
    pub display_name: String,
    pub cells: Bitmap,
}

/// Reads and decodes `<dir>/<id>.rle`.
pub fn read_pattern(dir: &Path, id: &str, options: DecodeOptions) -> Result<DecodedPattern> {
    let path = dir.join(format!("{id}.rle"));
    let text = std::fs::read_to_string(&path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound { path: path.clone() }
        } else {
            Error::Read {
                path: path.clone(),
                source,
            }
        }
    })?;
    decode_rle(id, &text, options)
}

/// Decodes the text of one RLE file.
///
/// The first non-comment, non-blank line is the header and must name both
/// `x` (width) and `y` (height); the remaining lines are joined into the body,
/// which is case-insensitive and must be terminated by `!`.
///
/// In lenient mode unknown body symbols, whitespace included, are read as
/// dead cells. A live cell outside the declared bounds is always an error.
pub fn decode_rle(id: &str, text: &str, options: DecodeOptions) -> Result<DecodedPattern> {
    let malformed = |reason: Malformed| Error::malformed(id, reason);

    let display_name = text
        .lines()
        .next()
        .and_then(|line| line.strip_prefix(NAME_MARKER))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(id)
        .to_owned();

    // body lines are joined as they are
    let mut lines = text
        .lines()
        .filter(|line| !line.starts_with(COMMENT) && !line.trim().is_empty());

    let header = lines.next().ok_or_else(|| malformed(Malformed::MissingHeader))?;
    let (width, height) = parse_header(header.trim()).map_err(malformed)?;

    let body: String = lines.collect();
    let end = body
        .find(TERMINATOR)
        .ok_or_else(|| malformed(Malformed::MissingTerminator))?;
    let body = body[..end].to_lowercase();

    let is_known = |c: char| c.is_ascii_digit() || Token::from_symbol(c).is_some();
    if let Some(c) = body.chars().find(|&c| !is_known(c)) {
        if options.strict {
            return Err(malformed(Malformed::UnexpectedSymbol(c)));
        }
        warn!(id, symbol = ?c, "unknown symbols in pattern body read as dead cells");
    }

    let mut cells = Bitmap::blank(width, height);
    let (mut row, mut col) = (0usize, 0usize);
    let mut tokens = run_length_decode(&body);
    while let Some(token) = tokens.next() {
        // dead cells and row ends never touch the bitmap, so their runs are taken whole
        match token {
            Token::RowEnd => {
                row = row.saturating_add(1).saturating_add(tokens.skip_run());
                col = 0;
            }
            Token::Dead => col = col.saturating_add(1).saturating_add(tokens.skip_run()),
            Token::Live => {
                if row >= height || col >= width {
                    return Err(malformed(Malformed::CellOutOfBounds {
                        row,
                        col,
                        width,
                        height,
                    }));
                }
                cells.set(col, row, true);
                col += 1;
            }
        }
    }

    debug!(
        id,
        width,
        height,
        population = cells.population(),
        "decoded pattern"
    );
    Ok(DecodedPattern {
        id: id.to_owned(),
        display_name,
        cells,
    })
}

/// Extracts `(x, y)` from a header such as `x = 3, y = 2, rule = B3/S23`.
///
/// Fields are matched by key, so their order does not matter; unknown fields
/// are ignored.
fn parse_header(line: &str) -> std::result::Result<(usize, usize), Malformed> {
    if !line.contains('=') {
        return Err(Malformed::MissingHeader);
    }
    let fields: Vec<(&str, &str)> = line
        .split(',')
        .filter_map(|field| field.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .collect();

    let dimension = |key: &'static str| -> std::result::Result<usize, Malformed> {
        let (_, value) = fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .ok_or(Malformed::MissingDimension(key))?;
        match value.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(Malformed::InvalidDimension {
                key,
                value: value.to_string(),
            }),
        }
    };
    Ok((dimension("x")?, dimension("y")?))
}
