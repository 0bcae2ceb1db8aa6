use calepin_base::{Error, Result, ensure_positive};
use calepin_catalog::COURSE_HEIGHT;
use serde::Serialize;

use crate::wall::WallLayout;

pub const DEFAULT_RESOLUTION_CM: f64 = 1.0;
pub const MAX_RASTER_CELLS: usize = 50_000_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RasterMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl RasterMatrix {
    fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let cells = rows
            .checked_mul(cols)
            .filter(|&cells| cells <= MAX_RASTER_CELLS)
            .ok_or_else(|| {
                Error::InvalidDimension(format!(
                    "raster of {rows} x {cols} cells exceeds {MAX_RASTER_CELLS} cells"
                ))
            })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![0; cells],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.cells.get(start..start + self.cols)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.rows).filter_map(|row| self.row(row))
    }

    fn fill(&mut self, rows: std::ops::Range<usize>, cols: std::ops::Range<usize>, code: u8) {
        for row in rows {
            let start = row * self.cols;
            for cell in &mut self.cells[start + cols.start..start + cols.end] {
                *cell = code;
            }
        }
    }
}

fn cell_index(position: f64, resolution: f64, limit: usize) -> usize {
    ((position / resolution).floor() as usize).min(limit)
}

pub fn to_raster_matrix(layout: &WallLayout, resolution: f64) -> Result<RasterMatrix> {
    ensure_positive("resolution", resolution)?;

    let rows = (layout.height() / resolution).ceil();
    let cols = (layout.length() / resolution).ceil();
    if rows * cols > MAX_RASTER_CELLS as f64 {
        return Err(Error::InvalidDimension(format!(
            "resolution {resolution} cm gives more than {MAX_RASTER_CELLS} cells"
        )));
    }
    let (rows, cols) = (rows as usize, cols as usize);
    let mut matrix = RasterMatrix::zeros(rows, cols)?;

    for course in layout.courses() {
        let bottom = cell_index(course.elevation(), resolution, rows);
        let top = cell_index(course.elevation() + COURSE_HEIGHT, resolution, rows);
        if bottom >= top {
            continue;
        }
        for placed in course.placements() {
            let start = cell_index(placed.offset, resolution, cols);
            let end = cell_index(placed.offset + placed.block.length, resolution, cols);
            if start < end {
                let code = course.pattern().raster_code(placed.block.kind);
                matrix.fill(bottom..top, start..end, code);
            }
        }
    }

    Ok(matrix)
}
