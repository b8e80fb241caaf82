/// A 7-day window anchored at a Monday. The anchor is always a Monday; the
/// window covers `[start, start + 6 days]` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Week(time::Date);

impl Week {
    /// Returns the week containing the given date, i.e. aligns backward to
    /// the nearest Monday on or before it.
    pub fn containing(date: time::Date) -> Self {
        let back = date.weekday().number_days_from_monday() as i64;
        Self(
            date.checked_sub(time::Duration::days(back))
                .expect("a date's own Monday should be representable"),
        )
    }

    pub fn start(self) -> time::Date {
        self.0
    }

    /// The final day of the window, 6 days after the start.
    pub fn end(self) -> time::Date {
        self.0
            .checked_add(time::Duration::days(6))
            .expect("the end of a representable week should be representable")
    }

    pub fn contains(self, date: time::Date) -> bool {
        date >= self.start() && date <= self.end()
    }

    /// The week starting 7 days later.
    pub fn next(self) -> Self {
        Self(
            self.0
                .checked_add(time::Duration::days(7))
                .expect("the successor of an in-range week should be representable"),
        )
    }

    /// Returns the ascending run of weeks covering `[earliest, latest]`.
    /// Consecutive starts are exactly 7 days apart, no start falls after
    /// `latest`, and the final window may extend past it. Returns an empty
    /// vector if `earliest > latest`.
    pub fn starts_spanning(earliest: time::Date, latest: time::Date) -> Vec<Self> {
        let mut weeks = Vec::new();
        if earliest > latest {
            return weeks;
        }
        let mut week = Self::containing(earliest);
        while week.start() <= latest {
            weeks.push(week);
            week = week.next();
        }
        weeks
    }
}

impl std::fmt::Display for Week {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use time::macros::date;

    #[rstest]
    #[case(date!(2024 - 01 - 01), date!(2024 - 01 - 01))] // Monday maps to itself
    #[case(date!(2024 - 01 - 03), date!(2024 - 01 - 01))] // Wednesday
    #[case(date!(2024 - 01 - 07), date!(2024 - 01 - 01))] // Sunday
    #[case(date!(2024 - 01 - 08), date!(2024 - 01 - 08))] // next Monday
    #[case(date!(2024 - 03 - 01), date!(2024 - 02 - 26))] // across a month boundary
    fn test_containing(#[case] date: time::Date, #[case] want_start: time::Date) {
        let week = Week::containing(date);
        assert_eq!(week.start(), want_start);
        assert_eq!(week.start().weekday(), time::Weekday::Monday);
    }

    #[rstest]
    #[case(date!(2024 - 01 - 01), true)]
    #[case(date!(2024 - 01 - 04), true)]
    #[case(date!(2024 - 01 - 07), true)]
    #[case(date!(2024 - 01 - 08), false)]
    #[case(date!(2023 - 12 - 31), false)]
    fn test_contains(#[case] date: time::Date, #[case] want: bool) {
        let week = Week::containing(date!(2024 - 01 - 01));
        assert_eq!(week.contains(date), want)
    }

    #[rstest]
    // A single Monday produces a single bucket.
    #[case(date!(2024 - 01 - 01), date!(2024 - 01 - 01), &[date!(2024 - 01 - 01)])]
    // Three Mondays, one bucket each; a start may fall exactly on `latest`.
    #[case(
        date!(2024 - 01 - 01),
        date!(2024 - 01 - 15),
        &[date!(2024 - 01 - 01), date!(2024 - 01 - 08), date!(2024 - 01 - 15)],
    )]
    // Mid-week endpoints still cover the whole range.
    #[case(
        date!(2024 - 01 - 03),
        date!(2024 - 01 - 09),
        &[date!(2024 - 01 - 01), date!(2024 - 01 - 08)],
    )]
    // Range within one week.
    #[case(date!(2024 - 01 - 02), date!(2024 - 01 - 06), &[date!(2024 - 01 - 01)])]
    // Inverted range yields nothing.
    #[case(date!(2024 - 01 - 08), date!(2024 - 01 - 01), &[])]
    fn test_starts_spanning(
        #[case] earliest: time::Date,
        #[case] latest: time::Date,
        #[case] want: &[time::Date],
    ) {
        let got = Week::starts_spanning(earliest, latest)
            .into_iter()
            .map(Week::start)
            .collect::<Vec<_>>();
        assert_eq!(got, want)
    }

    #[test]
    fn test_starts_spanning_properties() {
        let earliest = date!(2023 - 11 - 16);
        let latest = date!(2024 - 02 - 09);
        let weeks = Week::starts_spanning(earliest, latest);

        for week in &weeks {
            assert_eq!(week.start().weekday(), time::Weekday::Monday);
            assert!(week.start() <= latest);
        }
        for pair in weeks.windows(2) {
            assert_eq!(pair[1].start() - pair[0].start(), time::Duration::days(7));
        }
        assert!(weeks.first().unwrap().contains(earliest));
        assert!(weeks.last().unwrap().contains(latest));
    }
}
