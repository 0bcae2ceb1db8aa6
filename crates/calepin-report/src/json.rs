use anyhow::{Context, Result};
use calepin_bim::{Assembly, WallElement};
use calepin_layout::BlockCount;
use calepin_placement::{PlacedBlock, wall_bounds};
use cgmath::Point3;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct AssemblyView<'a> {
    pub walls: Vec<WallView<'a>>,
    pub combined: BlockCount,
    pub total_blocks: usize,
}

#[derive(Debug, Serialize)]
pub struct WallView<'a> {
    #[serde(flatten)]
    pub element: &'a WallElement,
    pub total_blocks: usize,
    pub blocks: Vec<PlacedBlock>,
    pub bounds: Option<(Point3<f64>, Point3<f64>)>,
}

impl<'a> AssemblyView<'a> {
    pub fn new(assembly: &'a Assembly) -> Self {
        let walls = assembly
            .walls
            .iter()
            .map(|element| {
                let blocks = element.blocks();
                let bounds = wall_bounds(&blocks);
                WallView {
                    element,
                    total_blocks: element.layout.total_blocks(),
                    blocks,
                    bounds,
                }
            })
            .collect();
        Self {
            walls,
            combined: assembly.combined_count(),
            total_blocks: assembly.total_blocks(),
        }
    }
}

pub fn write_json<W: Write>(out: &mut W, assembly: &Assembly) -> Result<()> {
    let view = AssemblyView::new(assembly);
    serde_json::to_writer_pretty(&mut *out, &view).context("serialize assembly to JSON")?;
    writeln!(out)?;
    Ok(())
}
