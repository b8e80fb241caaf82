/// A single spreadsheet cell value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Date(time::Date),
    Text(String),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_date(&self) -> Option<time::Date> {
        match self {
            Cell::Date(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Bool(b) => b.fmt(f),
            Cell::Number(v) => v.fmt(f),
            Cell::Date(dt) => dt.fmt(f),
            Cell::Text(s) => s.fmt(f),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl From<time::Date> for Cell {
    fn from(dt: time::Date) -> Self {
        Cell::Date(dt)
    }
}

impl From<crate::base::Cents> for Cell {
    fn from(cents: crate::base::Cents) -> Self {
        Cell::Number(cents.to_unit())
    }
}
