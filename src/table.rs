use crate::{Error, Result, NAME_COLUMN, TIMESTAMP_COLUMN, VALUE_COLUMN_INDEX};
use log::{debug, info};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Rows of one `name` value, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub timestamp: Vec<f64>,
    pub value: Vec<f64>,
}

impl Group {
    fn new(name: &str) -> Group {
        Group {
            name: name.to_string(),
            timestamp: Vec::new(),
            value: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.timestamp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamp.is_empty()
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.timestamp
            .iter()
            .copied()
            .zip(self.value.iter().copied())
            .collect()
    }
}

/// One benchmark csv, already split into groups by `name`.
#[derive(Debug, Clone)]
pub struct BenchTable {
    pub path: PathBuf,
    /// header of the third column, used as y axis description
    pub value_column: String,
    /// groups in the order their name first appears
    pub groups: Vec<Group>,
}

impl BenchTable {
    /// Reads a csv with at least the `name` and `timestamp` columns
    /// and a numeric third column.
    pub fn from_csv(path: &Path) -> Result<BenchTable> {
        let reader = csv::Reader::from_path(path).map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let table = BenchTable::from_reader(path, reader)?;
        info!(
            "loaded {}: {} groups, {} rows",
            path.display(),
            table.groups.len(),
            table.rows()
        );
        Ok(table)
    }

    pub(crate) fn from_reader<R: Read>(
        path: &Path,
        mut reader: csv::Reader<R>,
    ) -> Result<BenchTable> {
        let csv_err = |source: csv::Error| Error::Csv {
            path: path.to_path_buf(),
            source,
        };
        let headers = reader.headers().map_err(csv_err)?.clone();
        if headers.len() <= VALUE_COLUMN_INDEX {
            return Err(Error::TooFewColumns {
                path: path.to_path_buf(),
                found: headers.len(),
            });
        }
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(Error::MissingColumn {
                    path: path.to_path_buf(),
                    column: name,
                })
        };
        let name_idx = column(NAME_COLUMN)?;
        let time_idx = column(TIMESTAMP_COLUMN)?;
        let value_column = headers[VALUE_COLUMN_INDEX].trim().to_string();

        let mut groups: Vec<Group> = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record.map_err(csv_err)?;
            // header is line 1
            let row = i + 2;
            let field = |idx: usize| record.get(idx).unwrap_or("").trim();
            // NAN is kept as a gap, infinities cannot be put on an axis
            let parse = |idx: usize, column: &str| -> Result<f64> {
                match field(idx).parse::<f64>() {
                    Ok(v) if !v.is_infinite() => Ok(v),
                    _ => Err(Error::Parse {
                        path: path.to_path_buf(),
                        row,
                        column: column.to_string(),
                        value: field(idx).to_string(),
                    }),
                }
            };
            if field(VALUE_COLUMN_INDEX).is_empty() {
                debug!("{}: row {} has no value, skipped", path.display(), row);
                continue;
            }
            let timestamp = parse(time_idx, TIMESTAMP_COLUMN)?;
            let value = parse(VALUE_COLUMN_INDEX, &value_column)?;
            let name = field(name_idx);
            let group = match groups.iter().position(|g| g.name == name) {
                Some(g) => &mut groups[g],
                None => {
                    groups.push(Group::new(name));
                    let last = groups.len() - 1;
                    &mut groups[last]
                }
            };
            group.timestamp.push(timestamp);
            group.value.push(value);
        }

        Ok(BenchTable {
            path: path.to_path_buf(),
            value_column,
            groups,
        })
    }

    pub fn rows(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// groups sorted by name, the order a sorting group-by would give
    pub fn sort_groups(&mut self) {
        self.groups.sort_by(|a, b| a.name.cmp(&b.name));
    }
}
