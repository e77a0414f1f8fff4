use crate::{min_and_max, padded_range, BenchTable, Error, Result, GRID_COLS, GRID_ROWS};
use log::warn;
use std::ops::Range;

/// Rows and columns of the subplot grid, cells numbered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Grid {
            rows: GRID_ROWS,
            cols: GRID_COLS,
        }
    }
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Grid {
        Grid { rows, cols }
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }
}

/// One line of a subplot; `file_index` selects colour and legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub file_index: usize,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subplot {
    pub title: String,
    pub y_desc: String,
    pub series: Vec<Series>,
}

impl Subplot {
    pub fn x_range(&self) -> Range<f64> {
        self.range(|p| p.0)
    }

    pub fn y_range(&self) -> Range<f64> {
        self.range(|p| p.1)
    }

    fn range(&self, coord: fn(&(f64, f64)) -> f64) -> Range<f64> {
        let all: Vec<f64> = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(coord))
            .collect();
        match min_and_max(&all) {
            Some((min, max)) => padded_range(min, max, 0.05),
            None => 0.0..1.0,
        }
    }
}

/// What goes in each grid cell.
///
/// The k-th group of every file lands in cell k, so a cell overlays
/// one line per input file. Cells past the last group stay empty.
#[derive(Debug, Clone)]
pub struct FigureLayout {
    pub grid: Grid,
    pub cells: Vec<Option<Subplot>>,
    pub files: usize,
}

impl FigureLayout {
    pub fn from_tables(tables: &[BenchTable], grid: Grid) -> Result<FigureLayout> {
        let mut cells: Vec<Option<Subplot>> = vec![None; grid.capacity()];
        for (file_index, table) in tables.iter().enumerate() {
            if table.groups.len() > grid.capacity() {
                return Err(Error::GridOverflow {
                    path: table.path.clone(),
                    groups: table.groups.len(),
                    rows: grid.rows,
                    cols: grid.cols,
                });
            }
            for (cell, group) in cells.iter_mut().zip(table.groups.iter()) {
                let series = Series {
                    file_index,
                    points: group.points(),
                };
                match cell {
                    Some(subplot) => {
                        if subplot.title != group.name {
                            warn!(
                                "{}: group '{}' drawn in the cell of '{}'",
                                table.path.display(),
                                group.name,
                                subplot.title
                            );
                        }
                        if subplot.y_desc != table.value_column {
                            warn!(
                                "{}: column '{}' drawn on the '{}' axis of '{}'",
                                table.path.display(),
                                table.value_column,
                                subplot.y_desc,
                                subplot.title
                            );
                        }
                        subplot.series.push(series);
                    }
                    None => {
                        *cell = Some(Subplot {
                            title: group.name.clone(),
                            y_desc: table.value_column.clone(),
                            series: vec![series],
                        })
                    }
                }
            }
        }
        let layout = FigureLayout {
            grid,
            cells,
            files: tables.len(),
        };
        if layout.used_cells() == 0 {
            return Err(Error::EmptyFigure);
        }
        for (i, cell) in layout.cells.iter().enumerate() {
            if let Some(subplot) = cell {
                if subplot.series.len() != layout.files {
                    warn!(
                        "cell {} ('{}') has {} of {} lines",
                        i,
                        subplot.title,
                        subplot.series.len(),
                        layout.files
                    );
                }
            }
        }
        Ok(layout)
    }

    pub fn used_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Group;
    use std::path::PathBuf;

    fn group(name: &str, points: &[(f64, f64)]) -> Group {
        Group {
            name: name.to_string(),
            timestamp: points.iter().map(|p| p.0).collect(),
            value: points.iter().map(|p| p.1).collect(),
        }
    }

    fn bench(path: &str, groups: Vec<Group>) -> BenchTable {
        BenchTable {
            path: PathBuf::from(path),
            value_column: "latency_ms".to_string(),
            groups,
        }
    }

    #[test]
    fn default_grid_is_four_by_two() {
        let grid = Grid::default();
        assert_eq!((grid.rows, grid.cols), (4, 2));
        assert_eq!(grid.capacity(), 8);
    }

    #[test]
    fn kth_group_of_each_file_shares_cell_k() {
        let tables = vec![
            bench(
                "a.csv",
                vec![group("read", &[(0., 1.)]), group("write", &[(0., 2.)])],
            ),
            bench(
                "b.csv",
                vec![group("read", &[(0., 3.)]), group("write", &[(0., 4.)])],
            ),
        ];
        let layout = FigureLayout::from_tables(&tables, Grid::default()).unwrap();
        assert_eq!(layout.used_cells(), 2);
        let read = layout.cells[0].as_ref().unwrap();
        assert_eq!(read.title, "read");
        assert_eq!(read.y_desc, "latency_ms");
        let indices: Vec<usize> = read.series.iter().map(|s| s.file_index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(read.series[1].points, vec![(0., 3.)]);
        assert_eq!(layout.cells[1].as_ref().unwrap().title, "write");
        assert!(layout.cells[2..].iter().all(Option::is_none));
    }

    #[test]
    fn cell_keeps_first_title_when_group_order_differs() {
        let tables = vec![
            bench(
                "a.csv",
                vec![group("read", &[(0., 1.)]), group("write", &[(0., 2.)])],
            ),
            bench(
                "b.csv",
                vec![group("write", &[(0., 4.)]), group("read", &[(0., 3.)])],
            ),
        ];
        let layout = FigureLayout::from_tables(&tables, Grid::default()).unwrap();
        let first = layout.cells[0].as_ref().unwrap();
        assert_eq!(first.title, "read");
        assert_eq!(first.series.len(), 2);
        assert_eq!(first.series[1].file_index, 1);
        assert_eq!(first.series[1].points, vec![(0., 4.)]);
        let second = layout.cells[1].as_ref().unwrap();
        assert_eq!(second.title, "write");
        assert_eq!(second.series[1].points, vec![(0., 3.)]);
    }

    #[test]
    fn cell_keeps_first_value_column() {
        let mut other = bench("b.csv", vec![group("read", &[(0., 3.)])]);
        other.value_column = "throughput".to_string();
        let tables = vec![bench("a.csv", vec![group("read", &[(0., 1.)])]), other];
        let layout = FigureLayout::from_tables(&tables, Grid::default()).unwrap();
        let read = layout.cells[0].as_ref().unwrap();
        assert_eq!(read.y_desc, "latency_ms");
        assert_eq!(read.series.len(), 2);
    }

    #[test]
    fn infinite_points_do_not_widen_ranges() {
        let points = [(0., 1.), (f64::INFINITY, 2.), (10., f64::NEG_INFINITY)];
        let tables = vec![bench("a.csv", vec![group("read", &points)])];
        let layout = FigureLayout::from_tables(&tables, Grid::default()).unwrap();
        let read = layout.cells[0].as_ref().unwrap();
        let (x, y) = (read.x_range(), read.y_range());
        assert!(x.start.is_finite() && x.end.is_finite());
        assert!(y.start.is_finite() && y.end.is_finite());
        assert!(x.end < 11.);
    }

    #[test]
    fn overflow_is_an_error() {
        let groups = (0..9).map(|i| group(&format!("g{}", i), &[(0., 0.)])).collect();
        let tables = vec![bench("big.csv", groups)];
        match FigureLayout::from_tables(&tables, Grid::default()) {
            Err(Error::GridOverflow { groups, rows, cols, .. }) => {
                assert_eq!((groups, rows, cols), (9, 4, 2));
            }
            other => panic!("unexpected {:?}", other.map(|l| l.used_cells())),
        }
    }

    #[test]
    fn custom_grid_holds_more_groups() {
        let groups = (0..9).map(|i| group(&format!("g{}", i), &[(0., 0.)])).collect();
        let tables = vec![bench("big.csv", groups)];
        let layout = FigureLayout::from_tables(&tables, Grid::new(3, 3)).unwrap();
        assert_eq!(layout.used_cells(), 9);
    }

    #[test]
    fn no_rows_is_empty_figure() {
        let tables = vec![bench("empty.csv", vec![])];
        assert!(matches!(
            FigureLayout::from_tables(&tables, Grid::default()),
            Err(Error::EmptyFigure)
        ));
    }

    #[test]
    fn ranges_cover_every_line() {
        let tables = vec![
            bench("a.csv", vec![group("read", &[(0., 1.), (10., 5.)])]),
            bench("b.csv", vec![group("read", &[(20., -5.)])]),
        ];
        let layout = FigureLayout::from_tables(&tables, Grid::default()).unwrap();
        let read = layout.cells[0].as_ref().unwrap();
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        let (x, y) = (read.x_range(), read.y_range());
        assert!(close(x.start, -1.) && close(x.end, 21.));
        assert!(close(y.start, -5.5) && close(y.end, 5.5));
    }
}
