use crate::doc;

/// A named rectangular grid of cells. Row 0 holds the column headers. Writes
/// outside the current bounds grow the grid first; reads outside the bounds
/// see empty cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    grid: Vec<Vec<doc::Cell>>,
    cols: usize,
}

const EMPTY: doc::Cell = doc::Cell::Empty;

impl Table {
    pub fn new(name: impl Into<String>, rows: usize, cols: usize) -> Self {
        Self {
            name: name.into(),
            grid: vec![vec![EMPTY; cols]; rows],
            cols,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> &doc::Cell {
        self.grid
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Sets a single cell, growing the grid to fit.
    pub fn set(&mut self, row: usize, col: usize, cell: doc::Cell) {
        if col >= self.cols {
            self.cols = col + 1;
            for cells in &mut self.grid {
                cells.resize(self.cols, EMPTY);
            }
        }
        if row >= self.grid.len() {
            self.grid.resize(row + 1, vec![EMPTY; self.cols]);
        }
        self.grid[row][col] = cell;
    }

    /// Returns the column index whose row-0 cell is exactly the given header
    /// text.
    pub fn header_index(&self, header: &str) -> Option<usize> {
        (0..self.cols).find(|&col| match self.cell(0, col) {
            doc::Cell::Text(s) => s == header,
            _ => false,
        })
    }

    pub fn header_exists(&self, header: &str) -> bool {
        self.header_index(header).is_some()
    }

    /// Returns the column index of the given header, appending a new header
    /// cell after the current last column if absent.
    pub fn ensure_header(&mut self, header: &str) -> usize {
        match self.header_index(header) {
            Some(col) => col,
            None => {
                let col = self.cols;
                self.set(0, col, doc::Cell::Text(header.to_string()));
                col
            }
        }
    }

    /// Returns the values below the given header, skipping empty cells and
    /// any stray repetition of the header text itself.
    pub fn column_values(&self, header: &str) -> Result<Vec<doc::Cell>, doc::Error> {
        let col = self
            .header_index(header)
            .ok_or_else(|| doc::Error::MissingHeader(header.to_string()))?;
        Ok((1..self.rows())
            .map(|row| self.cell(row, col))
            .filter(|cell| !cell.is_empty())
            .filter(|cell| !matches!(cell, doc::Cell::Text(s) if s == header))
            .cloned()
            .collect())
    }

    /// Writes the rows into the table row-major starting at (0, 0),
    /// overwriting whatever was in that range. All rows must have the same
    /// width.
    pub fn write_rows(&mut self, rows: &[Vec<doc::Cell>]) -> Result<(), doc::Error> {
        let want = match rows.first() {
            Some(cells) => cells.len(),
            None => return Ok(()),
        };
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != want {
                return Err(doc::Error::RaggedRows {
                    row,
                    want,
                    got: cells.len(),
                });
            }
            for (col, cell) in cells.iter().enumerate() {
                self.set(row, col, cell.clone());
            }
        }
        Ok(())
    }

    /// Writes the values into the header's column starting after its last
    /// occupied row.
    pub fn append_column(&mut self, header: &str, values: &[doc::Cell]) -> Result<(), doc::Error> {
        let col = self
            .header_index(header)
            .ok_or_else(|| doc::Error::MissingHeader(header.to_string()))?;
        let start = (0..self.rows())
            .rev()
            .find(|&row| !self.cell(row, col).is_empty())
            .map_or(1, |row| row + 1);
        for (i, cell) in values.iter().enumerate() {
            self.set(start + i, col, cell.clone());
        }
        Ok(())
    }

    /// Writes the values into the header's column starting at row 1,
    /// preserving the header and clearing any leftover cells below the new
    /// values. Rerunning with fewer values therefore leaves no stale rows.
    pub fn overwrite_column(
        &mut self,
        header: &str,
        values: &[doc::Cell],
    ) -> Result<(), doc::Error> {
        let col = self
            .header_index(header)
            .ok_or_else(|| doc::Error::MissingHeader(header.to_string()))?;
        for (i, cell) in values.iter().enumerate() {
            self.set(1 + i, col, cell.clone());
        }
        for row in 1 + values.len()..self.rows() {
            self.set(row, col, EMPTY);
        }
        Ok(())
    }
}
