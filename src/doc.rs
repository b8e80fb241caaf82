pub mod cell;
pub mod table;
pub mod xlsx;

pub use cell::Cell;
pub use table::Table;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("sheet '{0}' not found")]
    SheetNotFound(String),
    #[error("table '{0}' not found")]
    TableNotFound(String),
    #[error("column header '{0}' not found")]
    MissingHeader(String),
    #[error("row {row} has {got} cells, expected {want}")]
    RaggedRows { row: usize, want: usize, got: usize },
}

/// A named collection of tables within a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    name: String,
    tables: Vec<Table>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    pub fn push_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Returns the table with the given name. Absence is an explicit error.
    pub fn table(&self, name: &str) -> Result<&Table, Error> {
        self.tables
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| Error::TableNotFound(name.to_string()))
    }

    pub fn table_mut(&mut self, name: &str) -> Result<&mut Table, Error> {
        self.tables
            .iter_mut()
            .find(|t| t.name() == name)
            .ok_or_else(|| Error::TableNotFound(name.to_string()))
    }

    /// Returns the table with the given name, creating an empty one sized to
    /// (rows, cols) if it does not exist yet.
    pub fn table_or_create(&mut self, name: &str, rows: usize, cols: usize) -> &mut Table {
        match self.tables.iter().position(|t| t.name() == name) {
            Some(i) => &mut self.tables[i],
            None => {
                self.tables.push(Table::new(name, rows, cols));
                self.tables
                    .last_mut()
                    .expect("a just-pushed table should exist")
            }
        }
    }
}

/// An open spreadsheet document: an ordered collection of named sheets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sheets: Vec<Sheet>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    pub fn contains_sheet(&self, name: &str) -> bool {
        self.sheets.iter().any(|s| s.name() == name)
    }

    pub fn sheet(&self, name: &str) -> Result<&Sheet, Error> {
        self.sheets
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))
    }

    pub fn sheet_mut(&mut self, name: &str) -> Result<&mut Sheet, Error> {
        self.sheets
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))
    }

    /// Returns the sheet with the given name, creating an empty one if it
    /// does not exist yet.
    pub fn sheet_or_create(&mut self, name: &str) -> &mut Sheet {
        match self.sheets.iter().position(|s| s.name() == name) {
            Some(i) => &mut self.sheets[i],
            None => {
                self.sheets.push(Sheet::new(name));
                self.sheets
                    .last_mut()
                    .expect("a just-pushed sheet should exist")
            }
        }
    }
}
