use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

use crate::doc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Read(#[from] calamine::XlsxError),
    #[error(transparent)]
    Write(#[from] rust_xlsxwriter::XlsxError),
    #[error("cell ({row}, {col}) is outside the writable sheet area")]
    Bounds { row: usize, col: usize },
    #[error("date {0} cannot be stored in a worksheet")]
    DateOutOfRange(time::Date),
}

/// Serial day number of 1970-01-01 in the xlsx date system (whose epoch is
/// 1899-12-30).
const UNIX_EPOCH_SERIAL: i64 = 25_569;

/// Julian day number of 1970-01-01.
const UNIX_EPOCH_JULIAN: i64 = 2_440_588;

fn date_from_serial(serial: f64) -> Option<time::Date> {
    let days = serial.trunc() as i64 - UNIX_EPOCH_SERIAL + UNIX_EPOCH_JULIAN;
    time::Date::from_julian_day(i32::try_from(days).ok()?).ok()
}

fn cell_from_data(data: &Data) -> doc::Cell {
    match data {
        Data::Empty => doc::Cell::Empty,
        Data::Bool(b) => doc::Cell::Bool(*b),
        Data::Int(i) => doc::Cell::Number(*i as f64),
        Data::Float(v) => doc::Cell::Number(*v),
        Data::String(s) => doc::Cell::Text(s.clone()),
        Data::DateTime(dt) => match date_from_serial(dt.as_f64()) {
            Some(date) => doc::Cell::Date(date),
            None => doc::Cell::Empty,
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => doc::Cell::Text(s.clone()),
        Data::Error(_) => doc::Cell::Empty,
    }
}

/// Loads a workbook into the document model. Each worksheet's used range
/// becomes one table named after its sheet.
pub fn load(path: &Path) -> Result<doc::Document, Error> {
    let mut workbook: Xlsx<BufReader<File>> = open_workbook(path)?;
    let names = workbook.sheet_names().to_vec();

    let mut document = doc::Document::new();
    for name in names {
        let range = workbook.worksheet_range(&name)?;
        let (row0, col0) = range.start().unwrap_or((0, 0));

        let mut table = doc::Table::new(name.as_str(), 0, 0);
        for (r, row) in range.rows().enumerate() {
            for (c, data) in row.iter().enumerate() {
                let cell = cell_from_data(data);
                if !cell.is_empty() {
                    table.set(row0 as usize + r, col0 as usize + c, cell);
                }
            }
        }
        document.sheet_or_create(&name).push_table(table);
    }
    Ok(document)
}

/// Saves the document model as a workbook, rebuilding the file from scratch.
/// Multiple tables on one sheet are stacked vertically with a blank row in
/// between. Dates are written as datetimes with a `yyyy-mm-dd` number format
/// so they load back as date cells.
pub fn save(document: &doc::Document, path: &Path) -> Result<(), Error> {
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let mut workbook = Workbook::new();
    for sheet in document.sheets() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name())?;

        let mut offset = 0usize;
        for table in sheet.tables() {
            for row in 0..table.rows() {
                for col in 0..table.cols() {
                    let r = u32::try_from(offset + row)
                        .map_err(|_| Error::Bounds { row: offset + row, col })?;
                    let c = u16::try_from(col)
                        .map_err(|_| Error::Bounds { row: offset + row, col })?;
                    match table.cell(row, col) {
                        doc::Cell::Empty => {}
                        doc::Cell::Bool(b) => {
                            worksheet.write_boolean(r, c, *b)?;
                        }
                        doc::Cell::Number(v) => {
                            worksheet.write_number(r, c, *v)?;
                        }
                        doc::Cell::Text(s) => {
                            worksheet.write_string(r, c, s)?;
                        }
                        doc::Cell::Date(dt) => {
                            let year = u16::try_from(dt.year())
                                .map_err(|_| Error::DateOutOfRange(*dt))?;
                            let excel =
                                ExcelDateTime::from_ymd(year, u8::from(dt.month()), dt.day())?;
                            worksheet.write_datetime_with_format(r, c, &excel, &date_format)?;
                        }
                    }
                }
            }
            offset += table.rows() + 1;
        }
    }
    workbook.save(path)?;
    Ok(())
}
