use crate::figure::{FigureLayout, Grid, Subplot};
use crate::labels::LabelMode;
use crate::scan::ListingOrder;
use crate::table::BenchTable;
use crate::{Error, Result, FIGURE_SIZE, X_DESC};
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::RGBAColor;
use std::path::{Path, PathBuf};

const LEGEND_FONT: u32 = 18;
const LEGEND_ROW: i32 = 24;
const LEGEND_LINE: i32 = 30;

/// Image encoding chosen from the output path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Bitmap,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<OutputFormat> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" | "bmp" | "jpg" | "jpeg" => Ok(OutputFormat::Bitmap),
            _ => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Knobs of the library entry point; the command line uses the defaults.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub grid: Grid,
    pub size: (u32, u32),
    pub label_mode: LabelMode,
    pub listing_order: ListingOrder,
    /// sort groups by name instead of first appearance
    pub sort_groups: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            grid: Grid::default(),
            size: FIGURE_SIZE,
            label_mode: LabelMode::default(),
            listing_order: ListingOrder::default(),
            sort_groups: false,
        }
    }
}

fn file_color(file_index: usize) -> RGBAColor {
    Palette99::pick(file_index).to_rgba()
}

/// Loads every input file, draws the grid with one shared legend
/// and returns the summary of what was written.
pub fn create_graph(
    labels: &[String],
    input_files: &[PathBuf],
    output: &Path,
    options: &PlotOptions,
) -> Result<String> {
    let format = OutputFormat::from_path(output)?;
    let mut tables = Vec::with_capacity(input_files.len());
    for file in input_files {
        let mut table = BenchTable::from_csv(file)?;
        if options.sort_groups {
            table.sort_groups();
        }
        tables.push(table);
    }
    let layout = FigureLayout::from_tables(&tables, options.grid)?;
    match format {
        OutputFormat::Svg => {
            let root = SVGBackend::new(output, options.size).into_drawing_area();
            draw_figure(&root, &layout, labels)?;
        }
        OutputFormat::Bitmap => {
            let root = BitMapBackend::new(output, options.size).into_drawing_area();
            draw_figure(&root, &layout, labels)?;
        }
    }
    info!(
        "wrote {} subplots to {}",
        layout.used_cells(),
        output.display()
    );
    Ok(summary(output, input_files))
}

pub fn summary(output: &Path, input_files: &[PathBuf]) -> String {
    let mut result = format!("created {}, input files used:", output.display());
    for file in input_files {
        result.push('\n');
        result.push_str(&file.display().to_string());
    }
    result
}

/// draws every cell, then the legend, and flushes the backend
pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &FigureLayout,
    labels: &[String],
) -> Result<()> {
    root.fill(&WHITE).map_err(Error::render)?;
    let areas = root.split_evenly((layout.grid.rows, layout.grid.cols));
    for (area, cell) in areas.iter().zip(layout.cells.iter()) {
        if let Some(subplot) = cell {
            draw_subplot(area, subplot)?;
        }
    }
    draw_legend(root, labels)?;
    root.present().map_err(Error::render)?;
    Ok(())
}

fn draw_subplot<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    subplot: &Subplot,
) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .caption(&subplot.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(subplot.x_range(), subplot.y_range())
        .map_err(Error::render)?;
    chart
        .configure_mesh()
        .light_line_style(&TRANSPARENT)
        .bold_line_style(RGBColor(200, 200, 200).stroke_width(1))
        .label_style(("sans-serif", 14))
        .x_desc(X_DESC)
        .y_desc(subplot.y_desc.as_str())
        .x_labels(6)
        .y_labels(6)
        .draw()
        .map_err(Error::render)?;
    for series in &subplot.series {
        let line = LineSeries::new(
            series.points.iter().copied(),
            file_color(series.file_index).stroke_width(2),
        );
        chart.draw_series(line).map_err(Error::render)?;
    }
    Ok(())
}

/// Legend entry i pairs labels[i] with the colour of input file i,
/// boxed in the lower right corner of the whole figure.
fn draw_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    labels: &[String],
) -> Result<()> {
    if labels.is_empty() {
        return Ok(());
    }
    let (width, height) = root.dim_in_pixel();
    let longest = labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0) as i32;
    let box_w = LEGEND_LINE + 20 + longest * (LEGEND_FONT as i32 * 6 / 10) + 10;
    let box_h = labels.len() as i32 * LEGEND_ROW + 10;
    let x0 = width as i32 - box_w - 10;
    let y0 = height as i32 - box_h - 10;

    let corners = [(x0, y0), (x0 + box_w, y0 + box_h)];
    root.draw(&Rectangle::new(corners, WHITE.filled()))
        .map_err(Error::render)?;
    root.draw(&Rectangle::new(corners, BLACK.stroke_width(1)))
        .map_err(Error::render)?;
    for (i, label) in labels.iter().enumerate() {
        let y = y0 + 5 + i as i32 * LEGEND_ROW + LEGEND_ROW / 2;
        root.draw(&PathElement::new(
            vec![(x0 + 10, y), (x0 + 10 + LEGEND_LINE, y)],
            file_color(i).stroke_width(3),
        ))
        .map_err(Error::render)?;
        root.draw(&Text::new(
            label.clone(),
            (x0 + 20 + LEGEND_LINE, y - LEGEND_FONT as i32 / 2),
            ("sans-serif", LEGEND_FONT).into_font().color(&BLACK),
        ))
        .map_err(Error::render)?;
    }
    Ok(())
}
