use std::time::Duration;

use digitgrid_matrix::digits::{collect_digits, digit_count};
use digitgrid_matrix::dimensions::{leading_digit, resolve, DimensionRule};
use digitgrid_matrix::{Dimensions, MatrixPipeline, MatrixPopulator, Sanitizer};
use proptest::prelude::*;

fn build(s: &str, filter: i64) -> Vec<digitgrid_matrix::Matrix> {
    MatrixPipeline::with_defaults()
        .unwrap()
        .to_matrices(Some(vec![Some(s)]), filter)
        .unwrap()
}

/// Digit vectors whose length is a multiple of its own leading digit, so the
/// two-dimensional shape holds them exactly.
fn exact_fit_digits() -> impl Strategy<Value = Vec<u8>> {
    (1usize..3_000)
        .prop_filter("length must fill its shape", |&len| len % leading_digit(len) == 0)
        .prop_flat_map(|len| prop::collection::vec(0u8..10, len))
}

proptest! {
    #[test]
    fn filled_cells_is_min_of_cells_and_digits(s in "[0-9a-z ]{2,120}") {
        let m = &build(&s, 0)[0];
        let cells = m.rows() * m.columns();
        prop_assert_eq!(m.filled_cells(), cells.min(digit_count(&s)));
        prop_assert!(m.as_slice()[m.filled_cells()..].iter().all(|&v| v == 0));
    }

    #[test]
    fn two_dimensional_shape_follows_length(len in 1usize..100_000) {
        let dims = resolve(len, DimensionRule::TwoDimensional).unwrap();
        prop_assert_eq!(dims.rows, leading_digit(len));
        prop_assert!((1..=9).contains(&dims.rows));
        prop_assert_eq!(dims.columns, len / dims.rows);
        prop_assert!(dims.rows * dims.columns <= len);
    }

    #[test]
    fn equal_lengths_give_equal_shapes(a in "[0-9a-z]{2,60}", pad in "[a-z]{0,60}") {
        // Same char count, different content.
        let b: String = pad.chars().chain(std::iter::repeat('9')).take(a.chars().count()).collect();
        let ma = &build(&a, 0)[0];
        let mb = &build(&b, 0)[0];
        prop_assert_eq!(ma.dimensions(), mb.dimensions());
    }

    #[test]
    fn longer_strings_pass_through_sanitizer(s in ".{2,40}") {
        let sanitizer = Sanitizer::new(Duration::from_secs(25)).unwrap();
        let once = sanitizer.sanitize(Some(s.as_str())).unwrap().into_owned();
        prop_assert_eq!(&once, &s);
        let twice = sanitizer.sanitize(Some(once.as_str())).unwrap();
        prop_assert_eq!(&*twice, once.as_str());
    }

    #[test]
    fn cells_are_the_leading_digits_in_order(s in "[0-9a-z]{2,200}") {
        let m = &build(&s, 0)[0];
        let digits = collect_digits(&s);
        let filled = m.filled_cells();
        prop_assert_eq!(&m.as_slice()[..filled], &digits[..filled]);
    }

    #[test]
    fn exact_fit_digits_round_trip(digits in exact_fit_digits()) {
        let s: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();
        let m = &build(&s, 0)[0];
        prop_assert_eq!(m.rows() * m.columns(), digits.len());
        prop_assert_eq!(m.filled_cells(), digits.len());
        prop_assert_eq!(m.as_slice(), &digits[..]);
        let rows: Vec<u8> = m.iter_rows().flatten().copied().collect();
        prop_assert_eq!(rows, digits);
    }

    #[test]
    fn single_row_width_matches_length(s in "[0-9a-z]{901,1200}") {
        let len = s.chars().count() as i64;
        let m = &build(&s, len)[0];
        prop_assert_eq!(m.dimensions(), Dimensions::new(1, len as usize));
    }

    #[test]
    fn pool_size_does_not_change_result(
        digits in prop::collection::vec(0u8..10, 0..2_000),
        rows in 1usize..10,
        columns in 0usize..300,
        threads in 1usize..5,
    ) {
        let dims = Dimensions::new(rows, columns);
        let global = MatrixPopulator::new(1 << 20).populate(dims, &digits).unwrap();
        let dedicated = MatrixPopulator::with_threads(1 << 20, threads)
            .unwrap()
            .populate(dims, &digits)
            .unwrap();
        prop_assert_eq!(global, dedicated);
    }
}
