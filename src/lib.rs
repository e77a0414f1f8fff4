pub mod cli;
pub mod error;
pub mod figure;
pub mod labels;
pub mod render;
pub mod scan;
pub mod table;

pub use error::Error;
pub use figure::{FigureLayout, Grid, Series, Subplot};
pub use labels::{parse_labels, LabelMode};
pub use render::{create_graph, OutputFormat, PlotOptions};
pub use scan::{scan_csv_files, ListingOrder};
pub use table::{BenchTable, Group};

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

pub const NAME_COLUMN: &str = "name";
pub const TIMESTAMP_COLUMN: &str = "timestamp";
/// position of the plotted value column in every input csv
pub const VALUE_COLUMN_INDEX: usize = 2;

pub const X_DESC: &str = "timestamp (seconds)";

pub const FIGURE_SIZE: (u32, u32) = (1200, 1200);
pub const GRID_ROWS: usize = 4;
pub const GRID_COLS: usize = 2;

pub type Result<T> = std::result::Result<T, Error>;

/// min and max of a slice, None when the slice is empty.
/// NAN and infinite values are skipped.
pub fn min_and_max(s: &[f64]) -> Option<(f64, f64)> {
    let mut self_iter = s.iter().filter(|v| v.is_finite());
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => return None,
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    Some((min, max))
}

/// widens [min, max] by `fraction` of its span on both sides,
/// a degenerate range gets a unit margin
pub fn padded_range(min: f64, max: f64, fraction: f64) -> std::ops::Range<f64> {
    let span = max - min;
    let margin = if span > 0. { span * fraction } else { 1. };
    (min - margin)..(max + margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_and_max_skips_nan() {
        let v = [3., f64::NAN, -1., 7.5];
        assert_eq!(min_and_max(&v), Some((-1., 7.5)));
    }

    #[test]
    fn min_and_max_skips_infinities() {
        let v = [f64::INFINITY, 2., f64::NEG_INFINITY, -3.];
        assert_eq!(min_and_max(&v), Some((-3., 2.)));
        assert_eq!(min_and_max(&[f64::INFINITY]), None);
    }

    #[test]
    fn min_and_max_of_empty_is_none() {
        assert_eq!(min_and_max(&[]), None);
        assert_eq!(min_and_max(&[f64::NAN]), None);
    }

    #[test]
    fn padded_range_handles_single_value() {
        let r = padded_range(5., 5., 0.1);
        assert_eq!(r, 4.0..6.0);
        let r = padded_range(0., 10., 0.1);
        assert_eq!(r, -1.0..11.0);
    }
}
