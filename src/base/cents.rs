/// Integral representation of monetary quantities up to two decimal places.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Neg,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
)]
pub struct Cents(pub i64);

impl Cents {
    /// Converts from a fractional currency quantity, rounding to the nearest
    /// cent with ties away from zero. This is the only place a monetary value
    /// is ever rounded; all downstream arithmetic is exact.
    pub fn from_unit(units: f64) -> Self {
        Self((units * 100.0).round() as i64)
    }

    /// Converts back to a fractional currency quantity, e.g. for a spreadsheet
    /// number cell.
    pub fn to_unit(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl std::fmt::Display for Cents {
    /// Formats with two decimal places.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, cents / 100, cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, Cents(0))]
    #[case(10.0, Cents(1000))]
    #[case(12.34, Cents(1234))]
    #[case(-3.5, Cents(-350))]
    #[case(0.014, Cents(1))]
    #[case(0.016, Cents(2))]
    #[case(1234567.89, Cents(123456789))]
    fn test_from_unit(#[case] units: f64, #[case] want: Cents) {
        assert_eq!(Cents::from_unit(units), want)
    }

    #[rstest]
    #[case(Cents(0), 0.0)]
    #[case(Cents(1000), 10.0)]
    #[case(Cents(1234), 12.34)]
    #[case(Cents(-350), -3.5)]
    fn test_to_unit(#[case] cents: Cents, #[case] want: f64) {
        assert_eq!(cents.to_unit(), want)
    }

    #[rstest]
    #[case(Cents(0), "0.00")]
    #[case(Cents(5), "0.05")]
    #[case(Cents(1234), "12.34")]
    #[case(Cents(-50), "-0.50")]
    #[case(Cents(-123456), "-1234.56")]
    fn test_to_string(#[case] cents: Cents, #[case] want: &str) {
        assert_eq!(cents.to_string(), want)
    }

    #[test]
    fn test_sum() {
        let total: Cents = [Cents(100), Cents(-30), Cents(5)].into_iter().sum();
        assert_eq!(total, Cents(75))
    }
}
