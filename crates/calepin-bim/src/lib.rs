use calepin_base::{Guid, Result};
use calepin_catalog::BLOCK_WIDTH;
use calepin_layout::{BlockCount, WallLayout, compute_layout};
use calepin_placement::{
    PlacedBlock, Placement, SecondWallPlacement, place_blocks, place_second_wall,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum WallRole {
    Primary,
    Return,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ParameterValue {
    Integer(i64),
    Number(f64),
}

pub type ParameterSet = BTreeMap<String, ParameterValue>;

#[derive(Clone, Debug, PartialEq)]
pub struct WallParams {
    pub thickness: f64,
    pub height: f64,
    pub name: String,
}

impl Default for WallParams {
    fn default() -> Self {
        Self {
            thickness: BLOCK_WIDTH,
            height: 250.0,
            name: String::new(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct WallElement {
    pub guid: Guid,
    pub name: String,
    pub role: WallRole,
    pub parameters: ParameterSet,
    pub layout: WallLayout,
    pub placement: Placement,
    pub corner: Option<SecondWallPlacement>,
}

impl WallElement {
    pub fn primary(name: impl Into<String>, layout: WallLayout) -> Self {
        let mut element = Self {
            guid: Guid::new(),
            name: name.into(),
            role: WallRole::Primary,
            parameters: ParameterSet::new(),
            layout,
            placement: Placement::IDENTITY,
            corner: None,
        };
        element.insert_layout_parameters();
        element
    }

    pub fn corner_return(
        name: impl Into<String>,
        layout: WallLayout,
        corner: SecondWallPlacement,
    ) -> Self {
        let mut element = Self {
            guid: Guid::new(),
            name: name.into(),
            role: WallRole::Return,
            parameters: ParameterSet::new(),
            layout,
            placement: corner.placement,
            corner: Some(corner),
        };
        element.insert_layout_parameters();
        let origin = corner.origin();
        element.insert_parameter("OriginX", ParameterValue::Number(origin.x));
        element.insert_parameter("OriginY", ParameterValue::Number(origin.y));
        element.insert_parameter("OriginZ", ParameterValue::Number(origin.z));
        element.insert_parameter(
            "RotationDeg",
            ParameterValue::Number(corner.rotation().degrees()),
        );
        element.insert_parameter(
            "FirstWallLength",
            ParameterValue::Number(corner.first_wall_length),
        );
        element
    }

    pub fn insert_parameter(&mut self, key: impl Into<String>, value: ParameterValue) {
        self.parameters.insert(key.into(), value);
    }

    fn insert_layout_parameters(&mut self) {
        let dims = self.layout.dimensions();
        let courses = self.layout.course_count() as i64;
        let built_height = self.layout.built_height();
        let count = self.layout.block_count();

        self.insert_parameter("Length", ParameterValue::Number(dims.length));
        self.insert_parameter("Thickness", ParameterValue::Number(dims.width));
        self.insert_parameter("Height", ParameterValue::Number(dims.height));
        self.insert_parameter("CourseCount", ParameterValue::Integer(courses));
        self.insert_parameter("BuiltHeight", ParameterValue::Number(built_height));
        for (kind, n) in count.iter() {
            self.insert_parameter(
                format!("{}Count", kind.name()),
                ParameterValue::Integer(n as i64),
            );
        }
        self.insert_parameter(
            "TotalBlocks",
            ParameterValue::Integer(count.total() as i64),
        );
    }

    pub fn block_count(&self) -> BlockCount {
        self.layout.block_count()
    }

    pub fn blocks(&self) -> Vec<PlacedBlock> {
        place_blocks(&self.layout, &self.placement)
    }
}

fn element_name(params: &WallParams, fallback: &str) -> String {
    let trimmed = params.name.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Assembly {
    pub walls: Vec<WallElement>,
}

impl Assembly {
    pub fn single(length: f64, params: &WallParams) -> Result<Self> {
        let layout = compute_layout(length, params.thickness, params.height)?;
        let wall = WallElement::primary(element_name(params, "Wall"), layout);
        info!(
            name = %wall.name,
            guid = %wall.guid,
            total = wall.layout.total_blocks(),
            "wall built"
        );
        Ok(Self { walls: vec![wall] })
    }

    pub fn corner(first_length: f64, second_length: f64, params: &WallParams) -> Result<Self> {
        let first = compute_layout(first_length, params.thickness, params.height)?;
        let (second, corner) =
            place_second_wall(&first, second_length, params.thickness, params.height)?;

        let base = element_name(params, "Wall");
        let first = WallElement::primary(format!("{base} A"), first);
        let second = WallElement::corner_return(format!("{base} B"), second, corner);
        info!(
            first = first_length,
            second = second_length,
            total = first.layout.total_blocks() + second.layout.total_blocks(),
            "corner built"
        );
        Ok(Self {
            walls: vec![first, second],
        })
    }

    pub fn combined_count(&self) -> BlockCount {
        self.walls.iter().map(WallElement::block_count).sum()
    }

    pub fn total_blocks(&self) -> usize {
        self.combined_count().total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_parameters_describe_layout() -> Result<()> {
        let assembly = Assembly::single(500.0, &WallParams::default())?;
        let wall = &assembly.walls[0];
        assert_eq!(wall.name, "Wall");
        assert_eq!(wall.role, WallRole::Primary);
        assert_eq!(
            wall.parameters.get("Length"),
            Some(&ParameterValue::Number(500.0))
        );
        assert_eq!(
            wall.parameters.get("CourseCount"),
            Some(&ParameterValue::Integer(27))
        );
        assert_eq!(
            wall.parameters.get("TotalBlocks"),
            Some(&ParameterValue::Integer(wall.layout.total_blocks() as i64))
        );
        Ok(())
    }

    #[test]
    fn corner_combines_both_walls() -> Result<()> {
        let params = WallParams {
            name: "  Garage ".to_string(),
            ..WallParams::default()
        };
        let assembly = Assembly::corner(400.0, 300.0, &params)?;
        assert_eq!(assembly.walls.len(), 2);
        assert_eq!(assembly.walls[0].name, "Garage A");
        assert_eq!(assembly.walls[1].name, "Garage B");

        let second = &assembly.walls[1];
        assert_eq!(second.role, WallRole::Return);
        assert_eq!(
            second.parameters.get("OriginX"),
            Some(&ParameterValue::Number(393.0))
        );
        assert_eq!(
            second.parameters.get("RotationDeg"),
            Some(&ParameterValue::Number(90.0))
        );

        let expected =
            assembly.walls[0].block_count() + assembly.walls[1].block_count();
        assert_eq!(assembly.combined_count(), expected);
        assert_eq!(assembly.total_blocks(), expected.total());
        Ok(())
    }

    #[test]
    fn placed_blocks_follow_element_placement() -> Result<()> {
        let assembly = Assembly::corner(400.0, 100.0, &WallParams::default())?;
        let second = &assembly.walls[1];
        let blocks = second.blocks();
        assert_eq!(blocks.len(), second.layout.total_blocks());
        assert!(blocks.iter().all(|block| block.max.x <= 393.0));
        Ok(())
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = WallParams {
            thickness: 0.0,
            ..WallParams::default()
        };
        assert!(Assembly::single(100.0, &params).is_err());
        assert!(Assembly::corner(100.0, -5.0, &WallParams::default()).is_err());
    }
}
