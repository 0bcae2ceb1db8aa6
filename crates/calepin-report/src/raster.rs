use anyhow::Result;
use calepin_layout::RasterMatrix;
use std::io::Write;

pub fn write_raster<W: Write>(out: &mut W, matrix: &RasterMatrix) -> Result<()> {
    for row in (0..matrix.rows()).rev() {
        let Some(cells) = matrix.row(row) else {
            continue;
        };
        let line: String = cells
            .iter()
            .map(|&code| match code {
                0 => '.',
                code => char::from(b'0' + code),
            })
            .collect();
        writeln!(out, "{line}")?;
    }
    Ok(())
}
