use crate::base;

/// A single dated expense entry from the ledger. Carrying the three values
/// as one unit keeps date, cost and detail aligned no matter how the record
/// is filtered or reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    date: time::Date,
    cost: base::Cents,
    detail: String,
}

impl Record {
    pub fn new(date: time::Date, cost: base::Cents, detail: impl Into<String>) -> Self {
        Self {
            date,
            cost,
            detail: detail.into(),
        }
    }

    pub fn date(&self) -> time::Date {
        self.date
    }

    pub fn cost(&self) -> base::Cents {
        self.cost
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn month(&self) -> time::Month {
        self.date.month()
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.date, self.cost, self.detail)
    }
}
