use crate::base;

/// Returned when a week bucket contains no records at all, which would leave
/// a peak item undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no records in the week starting {0}")]
pub struct EmptyWindow(pub base::Week);

/// Sums costs per week bucket across the whole spanned date range, ascending
/// by week. Weeks without records appear with a zero total. Empty input
/// yields an empty vector.
pub fn weekly_totals(records: &[base::Record]) -> Vec<(base::Week, base::Cents)> {
    let earliest = match records.iter().map(base::Record::date).min() {
        Some(dt) => dt,
        None => return Vec::new(),
    };
    let latest = records
        .iter()
        .map(base::Record::date)
        .max()
        .expect("a nonempty record slice should have a latest date");

    base::Week::starts_spanning(earliest, latest)
        .into_iter()
        .map(|week| {
            let total = records
                .iter()
                .filter(|r| week.contains(r.date()))
                .map(base::Record::cost)
                .sum();
            (week, total)
        })
        .collect()
}

/// Sums costs per calendar month name. Months are keyed by name only, so the
/// same month of different years merges into one bucket. Bucket order is the
/// first occurrence of each month in input order.
pub fn monthly_totals(records: &[base::Record]) -> Vec<(time::Month, base::Cents)> {
    let mut totals: Vec<(time::Month, base::Cents)> = Vec::new();
    for r in records {
        match totals.iter_mut().find(|(month, _)| *month == r.month()) {
            Some((_, total)) => *total += r.cost(),
            None => totals.push((r.month(), r.cost())),
        }
    }
    totals
}

/// Returns the highest-cost record within the week. Ties resolve to the
/// record appearing first in input order.
pub fn peak_item(
    week: base::Week,
    records: &[base::Record],
) -> Result<&base::Record, EmptyWindow> {
    records
        .iter()
        .filter(|r| week.contains(r.date()))
        .reduce(|best, r| if r.cost() > best.cost() { r } else { best })
        .ok_or(EmptyWindow(week))
}
