//! Dimension resolution from a sanitized string's length.
//!
//! Two rules exist. The two-dimensional rule takes the leading decimal digit
//! of the length as the row count and floors `length / rows` into columns;
//! the single-row rule lays every position out in one row. Which rule
//! applies is decided by a [`LengthFilter`] or, in predicate mode, per item.

use digitgrid_core::errors::DimensionError;

use crate::types::Dimensions;

/// How a length is turned into a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionRule {
    /// `rows = leading digit of length`, `columns = length / rows`.
    TwoDimensional,
    /// `rows = 1`, `columns = length`.
    SingleRow,
}

/// Leading decimal digit of `length` (`0` only for `length == 0`).
pub fn leading_digit(length: usize) -> usize {
    let mut n = length;
    while n >= 10 {
        n /= 10;
    }
    n
}

/// Resolve the output shape for a string of `length` characters.
pub fn resolve(length: usize, rule: DimensionRule) -> Result<Dimensions, DimensionError> {
    match rule {
        DimensionRule::SingleRow => Ok(Dimensions::single_row(length)),
        DimensionRule::TwoDimensional => {
            let rows = leading_digit(length);
            if rows == 0 {
                return Err(DimensionError::DivideByZero { length });
            }
            Ok(Dimensions::new(rows, length / rows))
        }
    }
}

/// Item selection and rule choice for the length-filtered entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthFilter {
    /// Filter of 0: every item, two-dimensional rule.
    Unfiltered,
    /// Filter within the threshold: matching lengths, two-dimensional rule.
    ExactLength(usize),
    /// Filter above the threshold: matching lengths, single-row rule.
    SingleRow(usize),
}

impl LengthFilter {
    /// Classify a caller-supplied filter. Negative filters use their
    /// absolute value.
    pub fn from_signed(filter: i64, single_row_threshold: usize) -> Self {
        let length = usize::try_from(filter.unsigned_abs()).unwrap_or(usize::MAX);
        if length == 0 {
            Self::Unfiltered
        } else if length <= single_row_threshold {
            Self::ExactLength(length)
        } else {
            Self::SingleRow(length)
        }
    }

    /// The length items must have to survive, if any.
    pub fn expected_length(&self) -> Option<usize> {
        match self {
            Self::Unfiltered => None,
            Self::ExactLength(n) | Self::SingleRow(n) => Some(*n),
        }
    }

    pub fn admits(&self, length: usize) -> bool {
        self.expected_length().map_or(true, |n| n == length)
    }

    pub fn rule(&self) -> DimensionRule {
        match self {
            Self::Unfiltered | Self::ExactLength(_) => DimensionRule::TwoDimensional,
            Self::SingleRow(_) => DimensionRule::SingleRow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_digit_matches_decimal_form() {
        for n in (0..2_000).chain([9_999, 10_000, 123_456_789, usize::MAX]) {
            let expected = n.to_string().as_bytes()[0] - b'0';
            assert_eq!(leading_digit(n), expected as usize, "length {n}");
        }
    }

    #[test]
    fn test_two_dimensional_rule() {
        assert_eq!(resolve(4, DimensionRule::TwoDimensional), Ok(Dimensions::new(4, 1)));
        assert_eq!(resolve(1, DimensionRule::TwoDimensional), Ok(Dimensions::new(1, 1)));
        assert_eq!(resolve(10, DimensionRule::TwoDimensional), Ok(Dimensions::new(1, 10)));
        assert_eq!(resolve(25, DimensionRule::TwoDimensional), Ok(Dimensions::new(2, 12)));
        assert_eq!(resolve(9, DimensionRule::TwoDimensional), Ok(Dimensions::new(9, 1)));
        assert_eq!(resolve(350, DimensionRule::TwoDimensional), Ok(Dimensions::new(3, 116)));
    }

    #[test]
    fn test_zero_length_divides_by_zero() {
        assert_eq!(
            resolve(0, DimensionRule::TwoDimensional),
            Err(DimensionError::DivideByZero { length: 0 })
        );
    }

    #[test]
    fn test_positive_lengths_never_divide_by_zero() {
        for n in 1..5_000 {
            assert!(resolve(n, DimensionRule::TwoDimensional).is_ok());
        }
    }

    #[test]
    fn test_single_row_rule() {
        assert_eq!(resolve(0, DimensionRule::SingleRow), Ok(Dimensions::new(1, 0)));
        assert_eq!(resolve(950, DimensionRule::SingleRow), Ok(Dimensions::new(1, 950)));
    }

    #[test]
    fn test_filter_threshold_boundary() {
        assert_eq!(LengthFilter::from_signed(0, 900), LengthFilter::Unfiltered);
        assert_eq!(LengthFilter::from_signed(900, 900), LengthFilter::ExactLength(900));
        assert_eq!(LengthFilter::from_signed(901, 900), LengthFilter::SingleRow(901));
        assert_eq!(LengthFilter::from_signed(900, 900).rule(), DimensionRule::TwoDimensional);
        assert_eq!(LengthFilter::from_signed(901, 900).rule(), DimensionRule::SingleRow);
    }

    #[test]
    fn test_negative_filter_uses_absolute_value() {
        assert_eq!(LengthFilter::from_signed(-4, 900), LengthFilter::ExactLength(4));
        assert_eq!(LengthFilter::from_signed(-901, 900), LengthFilter::SingleRow(901));
        assert!(matches!(
            LengthFilter::from_signed(i64::MIN, 900),
            LengthFilter::SingleRow(_)
        ));
    }

    #[test]
    fn test_admits() {
        assert!(LengthFilter::Unfiltered.admits(0));
        assert!(LengthFilter::ExactLength(3).admits(3));
        assert!(!LengthFilter::ExactLength(3).admits(4));
        assert!(!LengthFilter::SingleRow(901).admits(900));
    }
}
