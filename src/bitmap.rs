use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Dense rectangular field of cells, rows top-to-bottom, cells left-to-right.
///
/// Every row has the same length. Serialises as nested arrays of `0`/`1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    rows: Vec<Vec<bool>>,
    width: usize,
}

impl Bitmap {
    /// All-dead bitmap with `height` rows of `width` cells.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![false; width]; height],
            width,
        }
    }

    /// Returns `None` if the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Option<Self> {
        let width = rows.first().map_or(0, Vec::len);
        rows.iter()
            .all(|row| row.len() == width)
            .then_some(Self { rows, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    /// Cell at column `x` of row `y`; out-of-range cells read as dead.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// Sets the cell at column `x` of row `y`.
    ///
    /// # Panics
    ///
    /// If `(x, y)` lies outside the bitmap.
    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        self.rows[y][x] = state;
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.rows.iter().flatten().filter(|&&c| c).count()
    }

    /// Rows become columns.
    pub fn transpose(&self) -> Self {
        let rows = (0..self.width)
            .map(|x| self.rows.iter().map(|row| row[x]).collect())
            .collect();
        Self {
            rows,
            width: self.height(),
        }
    }

    /// Pads the bitmap with dead rows (or columns) so it becomes square with
    /// side `max(width, height)`, keeping the content centred along the padded
    /// axis. With odd padding the extra line goes to the bottom (or right).
    ///
    /// Square input comes back unchanged, so squaring is idempotent.
    pub fn squared(&self) -> Self {
        let (w, h) = (self.width(), self.height());
        if h > w {
            self.transpose().pad_rows(h - w).transpose()
        } else {
            self.clone().pad_rows(w - h)
        }
    }

    /// Adds `pad / 2` dead rows above and the rest below.
    fn pad_rows(mut self, pad: usize) -> Self {
        if pad == 0 {
            return self;
        }
        let top = pad / 2;
        let bottom = pad - top;
        let blank = vec![false; self.width];
        let mut rows = Vec::with_capacity(self.rows.len() + pad);
        rows.extend(std::iter::repeat(blank.clone()).take(top));
        rows.append(&mut self.rows);
        rows.extend(std::iter::repeat(blank).take(bottom));
        self.rows = rows;
        self
    }
}

impl Serialize for Bitmap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Row<'a>(&'a [bool]);

        impl Serialize for Row<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
                for &cell in self.0 {
                    seq.serialize_element(&u8::from(cell))?;
                }
                seq.end()
            }
        }

        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&Row(row))?;
        }
        seq.end()
    }
}
