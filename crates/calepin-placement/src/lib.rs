pub mod project;

use calepin_base::{Error, Result, ensure_positive};
use calepin_layout::{WallLayout, compute_layout};
use cgmath::{Deg, Point3, Vector3};
use serde::Serialize;
use tracing::debug;

pub use project::{PlacedBlock, place_blocks, wall_bounds};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Rotation {
    Deg0,
    Deg90,
}

impl Rotation {
    pub fn from_degrees(degrees: f64) -> Result<Self> {
        if degrees == 0.0 {
            Ok(Rotation::Deg0)
        } else if degrees == 90.0 {
            Ok(Rotation::Deg90)
        } else {
            Err(Error::InvalidDimension(format!(
                "rotation must be 0 or 90 degrees (got {degrees})"
            )))
        }
    }

    pub fn degrees(self) -> f64 {
        self.angle().0
    }

    pub fn angle(self) -> Deg<f64> {
        match self {
            Rotation::Deg0 => Deg(0.0),
            Rotation::Deg90 => Deg(90.0),
        }
    }

    pub fn frame(self) -> (Vector3<f64>, Vector3<f64>) {
        match self {
            Rotation::Deg0 => (Vector3::unit_x(), Vector3::unit_y()),
            Rotation::Deg90 => (Vector3::unit_y(), -Vector3::unit_x()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Placement {
    pub origin: Point3<f64>,
    pub rotation: Rotation,
}

impl Placement {
    pub const IDENTITY: Self = Self {
        origin: Point3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
        rotation: Rotation::Deg0,
    };

    pub fn new(origin: Point3<f64>, rotation: Rotation) -> Self {
        Self { origin, rotation }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SecondWallPlacement {
    pub placement: Placement,
    pub first_wall_length: f64,
}

impl SecondWallPlacement {
    pub fn derive(first_wall_length: f64, second_wall_width: f64) -> Result<Self> {
        ensure_positive("first wall length", first_wall_length)?;
        ensure_positive("second wall width", second_wall_width)?;

        let origin = Point3::new(first_wall_length - second_wall_width / 2.0, 0.0, 0.0);
        Ok(Self {
            placement: Placement::new(origin, Rotation::Deg90),
            first_wall_length,
        })
    }

    pub fn origin(&self) -> Point3<f64> {
        self.placement.origin
    }

    pub fn rotation(&self) -> Rotation {
        self.placement.rotation
    }

    pub fn is_stale_for(&self, first_wall: &WallLayout) -> bool {
        self.first_wall_length != first_wall.length()
    }
}

pub fn place_second_wall(
    first_wall: &WallLayout,
    second_length: f64,
    width: f64,
    height: f64,
) -> Result<(WallLayout, SecondWallPlacement)> {
    let layout = compute_layout(second_length, width, height)?;
    let placement = SecondWallPlacement::derive(first_wall.length(), width)?;
    debug!(
        first_length = first_wall.length(),
        second_length,
        origin_x = placement.origin().x,
        rotation = placement.rotation().degrees(),
        "second wall placed"
    );
    Ok((layout, placement))
}
