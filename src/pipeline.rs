use crate::base;
use crate::doc;

pub const LEDGER_SHEET: &str = "DailyTracker";
pub const LEDGER_TABLE: &str = "DailyTracker";
pub const WEEKLY_SHEET: &str = "WeeklyTracker";
pub const WEEKLY_TABLE: &str = "WeeklyTracker";
pub const MONTHLY_SHEET: &str = "MonthlyTracker";
pub const MONTHLY_TABLE: &str = "MonthlyTracker";

const WEEK_START_HEADER: &str = "StartOfWeek (Monday)";
const WEEKLY_COST_HEADER: &str = "WeeklyCost";
const MONTH_HEADER: &str = "Month";
const MONTHLY_COST_HEADER: &str = "MonthlyCost";
const PEAK_DATE_HEADER: &str = "Date";
const PEAK_DETAIL_HEADER: &str = "Highest Cost Item";
const PEAK_COST_HEADER: &str = "Cost";

/// Logical fields of the ledger table. The display form is the exact header
/// text expected in row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Field {
    Date,
    Cost,
    Details,
}

/// Column indices of the ledger's logical fields, resolved against the
/// header row once, up front. Past this point lookups cannot fail.
#[derive(Debug, Clone, Copy)]
struct Schema {
    date: usize,
    cost: usize,
    details: usize,
}

impl Schema {
    fn detect(table: &doc::Table) -> Result<Self, doc::Error> {
        let col = |field: Field| {
            table
                .header_index(&field.to_string())
                .ok_or_else(|| doc::Error::MissingHeader(field.to_string()))
        };
        Ok(Self {
            date: col(Field::Date)?,
            cost: col(Field::Cost)?,
            details: col(Field::Details)?,
        })
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Doc(#[from] doc::Error),
    #[error(transparent)]
    EmptyWindow(#[from] base::rollup::EmptyWindow),
    #[error("row {row}: expected {want} in the '{field}' column")]
    BadCell {
        row: usize,
        field: Field,
        want: &'static str,
    },
}

/// What a run did, for console output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub weeks: usize,
    pub months: usize,
    pub created_sheets: Vec<String>,
}

impl std::fmt::Display for Report {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for name in &self.created_sheets {
            writeln!(f, "created sheet '{}'", name)?;
        }
        writeln!(
            f,
            "{} weekly and {} monthly totals written",
            self.weeks, self.months
        )
    }
}

fn read_records(table: &doc::Table) -> Result<Vec<base::Record>, Error> {
    let schema = Schema::detect(table)?;
    let mut records = Vec::new();
    for row in 1..table.rows() {
        let date = table.cell(row, schema.date);
        let cost = table.cell(row, schema.cost);
        let detail = table.cell(row, schema.details);
        if date.is_empty() && cost.is_empty() && detail.is_empty() {
            // Used ranges routinely include trailing blank rows.
            continue;
        }
        let date = date.as_date().ok_or(Error::BadCell {
            row,
            field: Field::Date,
            want: "a date",
        })?;
        let cost = cost.as_number().map(base::Cents::from_unit).ok_or(Error::BadCell {
            row,
            field: Field::Cost,
            want: "a number",
        })?;
        records.push(base::Record::new(date, cost, detail.to_string()));
    }
    Ok(records)
}

/// Rolls the ledger up into the weekly and monthly tracker tables, creating
/// them if absent and overwriting them in place otherwise. The document is
/// only mutated once every value to be written has been computed, so a
/// failed run never leaves partial output behind.
pub fn roll(document: &mut doc::Document) -> Result<Report, Error> {
    let records = read_records(document.sheet(LEDGER_SHEET)?.table(LEDGER_TABLE)?)?;

    let weekly = base::rollup::weekly_totals(&records);
    let monthly = base::rollup::monthly_totals(&records);

    // The weekly table is displayed newest week first.
    let mut weekly_rows = vec![vec![
        doc::Cell::from(WEEK_START_HEADER),
        WEEKLY_COST_HEADER.into(),
    ]];
    weekly_rows.extend(
        weekly
            .iter()
            .rev()
            .map(|&(week, total)| vec![week.start().into(), total.into()]),
    );

    let mut monthly_rows = vec![vec![
        doc::Cell::from(MONTH_HEADER),
        MONTHLY_COST_HEADER.into(),
    ]];
    monthly_rows.extend(
        monthly
            .iter()
            .map(|&(month, total)| vec![month.to_string().into(), total.into()]),
    );

    let peaks = weekly
        .iter()
        .rev()
        .map(|&(week, _)| base::rollup::peak_item(week, &records))
        .collect::<Result<Vec<_>, _>>()?;

    let mut created_sheets = Vec::new();
    for name in [WEEKLY_SHEET, MONTHLY_SHEET] {
        if !document.contains_sheet(name) {
            created_sheets.push(name.to_string());
        }
    }

    let table = document
        .sheet_or_create(WEEKLY_SHEET)
        .table_or_create(WEEKLY_TABLE, weekly_rows.len(), 2);
    table.write_rows(&weekly_rows)?;
    for header in [PEAK_DATE_HEADER, PEAK_DETAIL_HEADER, PEAK_COST_HEADER] {
        table.ensure_header(header);
    }
    let dates: Vec<doc::Cell> = peaks.iter().map(|r| r.date().into()).collect();
    let details: Vec<doc::Cell> = peaks.iter().map(|r| r.detail().into()).collect();
    let costs: Vec<doc::Cell> = peaks.iter().map(|r| r.cost().into()).collect();
    table.overwrite_column(PEAK_DATE_HEADER, &dates)?;
    table.overwrite_column(PEAK_DETAIL_HEADER, &details)?;
    table.overwrite_column(PEAK_COST_HEADER, &costs)?;

    document
        .sheet_or_create(MONTHLY_SHEET)
        .table_or_create(MONTHLY_TABLE, monthly_rows.len(), 2)
        .write_rows(&monthly_rows)?;

    Ok(Report {
        weeks: weekly.len(),
        months: monthly.len(),
        created_sheets,
    })
}
