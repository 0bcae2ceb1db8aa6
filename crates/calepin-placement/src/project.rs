use calepin_catalog::{BlockKind, COURSE_HEIGHT};
use calepin_layout::{Pattern, WallLayout};
use cgmath::{EuclideanSpace, Point3, Vector3};
use serde::Serialize;

use crate::Placement;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlacedBlock {
    pub course: usize,
    pub pattern: Pattern,
    pub kind: BlockKind,
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl PlacedBlock {
    pub fn center(&self) -> Point3<f64> {
        self.min.midpoint(self.max)
    }
}

fn component_min(a: Point3<f64>, b: Point3<f64>) -> Point3<f64> {
    Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
}

fn component_max(a: Point3<f64>, b: Point3<f64>) -> Point3<f64> {
    Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
}

pub fn place_blocks(layout: &WallLayout, placement: &Placement) -> Vec<PlacedBlock> {
    let (along, across) = placement.rotation.frame();
    let thickness = across * layout.width();
    let mut blocks = Vec::with_capacity(layout.total_blocks());

    for course in layout.courses() {
        let bed = Vector3::unit_z() * course.elevation();
        let lift = Vector3::unit_z() * COURSE_HEIGHT;
        for placed in course.placements() {
            let start = placement.origin + bed + along * placed.offset;
            let end = start + along * placed.block.length + thickness + lift;
            blocks.push(PlacedBlock {
                course: course.index(),
                pattern: course.pattern(),
                kind: placed.block.kind,
                min: component_min(start, end),
                max: component_max(start, end),
            });
        }
    }

    blocks
}

pub fn wall_bounds(blocks: &[PlacedBlock]) -> Option<(Point3<f64>, Point3<f64>)> {
    let mut iter = blocks.iter();
    let first = iter.next()?;
    let mut min = first.min;
    let mut max = first.max;
    for block in iter {
        min = component_min(min, block.min);
        max = component_max(max, block.max);
    }
    Some((min, max))
}
